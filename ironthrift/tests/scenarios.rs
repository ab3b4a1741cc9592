//! End-to-end synthesis scenarios, checked both as instruction shapes and
//! as the calls they make when evaluated.

use ironthrift::prelude::*;
use ironthrift::codegen::{Argument, LoopBinding, LoopShape, SizeAccessor, SizeKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run(ty: &TypeDescriptor, name: &str, value: &Value) -> anyhow::Result<Vec<WriteCall>> {
    let access = AccessExpr::var(name);
    let instructions = get_write_body(ty, &access)?;
    let mut env = Environment::new();
    env.bind(name, value);
    let mut output = RecordingWriter::new();
    Evaluator::new().execute(&instructions, &env, &mut output)?;
    Ok(output.into_calls())
}

#[test]
fn test_scenario_list_of_i32() -> anyhow::Result<()> {
    init_tracing();
    let ty = TypeDescriptor::list(TypeDescriptor::I32);
    let instructions = get_write_body(&ty, &AccessExpr::var("xs"))?;

    assert_eq!(instructions.len(), 3);
    assert_eq!(
        instructions[0],
        WriteInstruction::invoke(
            WriterMethod::WriteListBegin,
            vec![
                Argument::WireType(WireType::I32),
                Argument::Size(SizeAccessor::new(AccessExpr::var("xs"), SizeKind::Length)),
            ],
        )
    );
    match &instructions[1] {
        WriteInstruction::Loop(write_loop) => {
            assert_eq!(write_loop.shape, LoopShape::Elements(LoopBinding::Element { depth: 0 }));
            assert_eq!(
                write_loop.body,
                vec![WriteInstruction::invoke(
                    WriterMethod::WriteI32,
                    vec![Argument::Value(LoopBinding::Element { depth: 0 }.into())],
                )]
            );
        }
        other => panic!("expected loop, got {other:?}"),
    }
    assert_eq!(instructions[2].method(), Some(WriterMethod::WriteListEnd));

    let xs = Value::List(vec![Value::I32(4), Value::I32(-1)]);
    assert_eq!(
        run(&ty, "xs", &xs)?,
        vec![
            WriteCall::ListBegin(WireType::I32, 2),
            WriteCall::I32(4),
            WriteCall::I32(-1),
            WriteCall::ListEnd,
        ]
    );
    Ok(())
}

#[test]
fn test_scenario_map_of_string_to_bool() -> anyhow::Result<()> {
    init_tracing();
    let ty = TypeDescriptor::map(TypeDescriptor::String, TypeDescriptor::Bool);
    let instructions = get_write_body(&ty, &AccessExpr::var("m"))?;

    assert_eq!(
        instructions[0],
        WriteInstruction::invoke(
            WriterMethod::WriteMapBegin,
            vec![
                Argument::WireType(WireType::String),
                Argument::WireType(WireType::Bool),
                Argument::Size(SizeAccessor::new(AccessExpr::var("m"), SizeKind::Size)),
            ],
        )
    );
    assert_eq!(
        flatten_methods(&instructions),
        ["writeMapBegin", "writeString", "writeBool", "writeMapEnd"]
    );

    let m = Value::Map(vec![
        (Value::from("on"), Value::Bool(true)),
        (Value::from("off"), Value::Bool(false)),
    ]);
    assert_eq!(
        run(&ty, "m", &m)?,
        vec![
            WriteCall::MapBegin(WireType::String, WireType::Bool, 2),
            WriteCall::String("on".into()),
            WriteCall::Bool(true),
            WriteCall::String("off".into()),
            WriteCall::Bool(false),
            WriteCall::MapEnd,
        ]
    );
    Ok(())
}

#[test]
fn test_scenario_set_of_i8_uses_write_byte() -> anyhow::Result<()> {
    init_tracing();
    let ty = TypeDescriptor::set(TypeDescriptor::I8);
    let instructions = get_write_body(&ty, &AccessExpr::var("s"))?;

    assert_eq!(
        flatten_methods(&instructions),
        ["writeSetBegin", "writeByte", "writeSetEnd"]
    );

    let s = Value::Set(vec![Value::Byte(1), Value::Byte(-1)]);
    assert_eq!(
        run(&ty, "s", &s)?,
        vec![
            WriteCall::SetBegin(WireType::Byte, 2),
            WriteCall::Byte(1),
            WriteCall::Byte(-1),
            WriteCall::SetEnd,
        ]
    );
    Ok(())
}

#[test]
fn test_scenario_struct_delegates() -> anyhow::Result<()> {
    init_tracing();
    let ty = TypeDescriptor::structure("Point");
    let instructions = get_write_body(&ty, &AccessExpr::var("p"))?;

    assert_eq!(
        instructions,
        vec![WriteInstruction::Delegate {
            target: AccessExpr::var("p")
        }]
    );

    let p = Value::structure(Record::new("Point").field(1, 10_i32).field(2, 20_i32));
    assert_eq!(run(&ty, "p", &p)?, vec![WriteCall::I32(10), WriteCall::I32(20)]);
    Ok(())
}

#[test]
fn test_scenario_list_of_maps_of_structs() -> anyhow::Result<()> {
    init_tracing();
    let ty = TypeDescriptor::list(TypeDescriptor::map(
        TypeDescriptor::String,
        TypeDescriptor::structure("Point"),
    ));
    let instructions = get_write_body(&ty, &AccessExpr::var("rows"))?;

    assert_eq!(
        flatten_methods(&instructions),
        [
            "writeListBegin",
            "writeMapBegin",
            "writeString",
            "write",
            "writeMapEnd",
            "writeListEnd",
        ]
    );

    let WriteInstruction::Loop(outer) = &instructions[1] else {
        panic!("expected outer loop");
    };
    assert_eq!(outer.body.len(), 3);
    let WriteInstruction::Loop(inner) = &outer.body[1] else {
        panic!("expected inner loop");
    };
    assert_eq!(
        inner.shape,
        LoopShape::Entries {
            key: LoopBinding::Key { depth: 1 },
            value: LoopBinding::Value { depth: 1 },
        }
    );
    assert_eq!(
        inner.body[1],
        WriteInstruction::Delegate {
            target: LoopBinding::Value { depth: 1 }.into()
        }
    );

    let point = |x: i32| Value::structure(Record::new("Point").field(1, x));
    let rows = Value::List(vec![
        Value::Map(vec![(Value::from("a"), point(1)), (Value::from("b"), point(2))]),
        Value::Map(Vec::new()),
    ]);
    assert_eq!(
        run(&ty, "rows", &rows)?,
        vec![
            WriteCall::ListBegin(WireType::Map, 2),
            WriteCall::MapBegin(WireType::String, WireType::Struct, 2),
            WriteCall::String("a".into()),
            WriteCall::I32(1),
            WriteCall::String("b".into()),
            WriteCall::I32(2),
            WriteCall::MapEnd,
            WriteCall::MapBegin(WireType::String, WireType::Struct, 0),
            WriteCall::MapEnd,
            WriteCall::ListEnd,
        ]
    );
    Ok(())
}

#[test]
fn test_unsupported_type_aborts_whole_synthesis() {
    init_tracing();
    let ty = TypeDescriptor::list(TypeDescriptor::map(
        TypeDescriptor::I32,
        TypeDescriptor::named("Timestamp"),
    ));
    let err = get_write_body(&ty, &AccessExpr::var("xs")).unwrap_err();

    assert!(matches!(
        err,
        CodegenError::UnsupportedType { ref type_name } if type_name == "Timestamp"
    ));
    assert!(err.to_string().contains("Timestamp"));
}

#[test]
fn test_synthesis_is_idempotent() -> anyhow::Result<()> {
    let ty = TypeDescriptor::map(
        TypeDescriptor::set(TypeDescriptor::I64),
        TypeDescriptor::list(TypeDescriptor::Binary),
    );
    let access = AccessExpr::self_field("index");
    assert_eq!(get_write_body(&ty, &access)?, get_write_body(&ty, &access)?);
    Ok(())
}
