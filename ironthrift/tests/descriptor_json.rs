//! Descriptors arriving as JSON, synthesized end to end.

use ironthrift::prelude::*;

#[test]
fn test_json_descriptor_synthesizes() -> anyhow::Result<()> {
    let json = r#"{"map":{"key":"string","value":{"list":"i8"}}}"#;
    let ty: TypeDescriptor = serde_json::from_str(json)?;
    assert_eq!(
        ty,
        TypeDescriptor::map(TypeDescriptor::String, TypeDescriptor::list(TypeDescriptor::I8))
    );

    let instructions = get_write_body(&ty, &AccessExpr::var("m"))?;
    assert_eq!(
        flatten_methods(&instructions),
        ["writeMapBegin", "writeString", "writeListBegin", "writeByte", "writeListEnd", "writeMapEnd"]
    );
    Ok(())
}

#[test]
fn test_json_round_trip_keeps_struct_names() -> anyhow::Result<()> {
    let ty = TypeDescriptor::set(TypeDescriptor::structure("Point"));
    let json = serde_json::to_string(&ty)?;
    assert_eq!(json, r#"{"set":{"struct":{"name":"Point"}}}"#);
    assert_eq!(serde_json::from_str::<TypeDescriptor>(&json)?, ty);
    Ok(())
}

#[test]
fn test_json_rejects_unknown_tag() {
    assert!(serde_json::from_str::<TypeDescriptor>(r#""u128""#).is_err());
}
