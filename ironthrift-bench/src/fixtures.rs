//! Shared descriptors and values for the benchmarks.

use ironthrift_core::{Record, Value};
use ironthrift_schema::TypeDescriptor;

/// `list<list<...<i32>>>` with `depth` list layers.
#[must_use]
pub fn nested_lists(depth: usize) -> TypeDescriptor {
    (0..depth).fold(TypeDescriptor::I32, |inner, _| TypeDescriptor::list(inner))
}

/// `list<map<string, Point>>`, the deepest mixed shape exercised.
#[must_use]
pub fn rows_descriptor() -> TypeDescriptor {
    TypeDescriptor::list(TypeDescriptor::map(
        TypeDescriptor::String,
        TypeDescriptor::structure("Point"),
    ))
}

/// A value matching [`rows_descriptor`] with `rows` rows of `width` entries.
#[must_use]
pub fn rows_value(rows: usize, width: usize) -> Value {
    let row = |r: usize| {
        Value::Map(
            (0..width)
                .map(|c| {
                    let point = Record::new("Point")
                        .field(1, i32::try_from(r).unwrap_or(i32::MAX))
                        .field(2, i32::try_from(c).unwrap_or(i32::MAX));
                    (Value::from(format!("k{c}")), Value::structure(point))
                })
                .collect(),
        )
    };
    Value::List((0..rows).map(row).collect())
}

/// A flat `list<i32>` value of `len` elements.
#[must_use]
pub fn int_list(len: usize) -> Value {
    Value::List(
        (0..len)
            .map(|i| Value::I32(i32::try_from(i).unwrap_or(i32::MAX)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_lists_depth() {
        assert_eq!(nested_lists(0), TypeDescriptor::I32);
        assert_eq!(nested_lists(2).to_string(), "list<list<i32>>");
    }

    #[test]
    fn test_rows_value_shape() {
        let value = rows_value(3, 4);
        assert_eq!(value.len(), Some(3));
        match value {
            Value::List(rows) => assert_eq!(rows[0].len(), Some(4)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_int_list_len() {
        assert_eq!(int_list(5).len(), Some(5));
    }
}
