//! Descriptor validation utilities.
//!
//! The generator recurses once per container level, so a pathological
//! schema such as `list<list<list<...>>>` costs stack proportional to its
//! depth. [`validate_descriptor`] lets callers bound that depth up front.

use crate::error::SchemaError;
use crate::types::TypeDescriptor;

/// Returns the container nesting depth of a descriptor.
///
/// Scalars, structs and named references are depth 0; each list, set or
/// map level adds one.
#[must_use]
pub fn nesting_depth(ty: &TypeDescriptor) -> usize {
    match ty {
        TypeDescriptor::List(element) | TypeDescriptor::Set(element) => 1 + nesting_depth(element),
        TypeDescriptor::Map { key, value } => 1 + nesting_depth(key).max(nesting_depth(value)),
        _ => 0,
    }
}

/// Validates a descriptor before generation.
///
/// # Arguments
/// * `ty` - Descriptor to check
/// * `max_depth` - Optional container nesting limit
///
/// # Errors
/// Returns `SchemaError::Unresolved` if any nested named reference remains,
/// or `SchemaError::NestingTooDeep` if the limit is exceeded.
pub fn validate_descriptor(ty: &TypeDescriptor, max_depth: Option<usize>) -> Result<(), SchemaError> {
    if let Some(limit) = max_depth {
        let depth = nesting_depth(ty);
        if depth > limit {
            return Err(SchemaError::NestingTooDeep { depth, limit });
        }
    }
    validate_resolved(ty)
}

fn validate_resolved(ty: &TypeDescriptor) -> Result<(), SchemaError> {
    match ty {
        TypeDescriptor::Named(name) => Err(SchemaError::unresolved(name.clone())),
        TypeDescriptor::List(element) | TypeDescriptor::Set(element) => validate_resolved(element),
        TypeDescriptor::Map { key, value } => {
            validate_resolved(key)?;
            validate_resolved(value)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_lists(depth: usize) -> TypeDescriptor {
        (0..depth).fold(TypeDescriptor::I32, |acc, _| TypeDescriptor::list(acc))
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(nesting_depth(&TypeDescriptor::I32), 0);
        assert_eq!(nesting_depth(&TypeDescriptor::structure("P")), 0);
        assert_eq!(nesting_depth(&nested_lists(3)), 3);

        let map = TypeDescriptor::map(TypeDescriptor::String, nested_lists(2));
        assert_eq!(nesting_depth(&map), 3);
    }

    #[test]
    fn test_validate_resolved_descriptor() {
        let ty = TypeDescriptor::list(TypeDescriptor::map(
            TypeDescriptor::String,
            TypeDescriptor::structure("Point"),
        ));
        assert!(validate_descriptor(&ty, None).is_ok());
        assert!(validate_descriptor(&ty, Some(2)).is_ok());
    }

    #[test]
    fn test_validate_nested_named_reference() {
        let ty = TypeDescriptor::map(TypeDescriptor::String, TypeDescriptor::named("UserId"));
        let err = validate_descriptor(&ty, None).unwrap_err();
        assert!(matches!(err, SchemaError::Unresolved { ref name } if name == "UserId"));
    }

    #[test]
    fn test_validate_depth_limit() {
        let err = validate_descriptor(&nested_lists(5), Some(4)).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::NestingTooDeep { depth: 5, limit: 4 }
        ));
        assert!(validate_descriptor(&nested_lists(4), Some(4)).is_ok());
    }
}
