//! Shared test helpers for workspace crates.

use crous::codec::Value;

/// Current-generation frame bytes: magic, version, then `payload`.
pub fn frame(payload: &[u8]) -> Vec<u8> {
	let mut bytes = vec![0x43, 0x52, 0x4F, 0x55, 0x02];
	bytes.extend_from_slice(payload);
	bytes
}

/// A value tree exercising every encodable kind.
pub fn kitchen_sink() -> Value {
	Value::Dict(vec![
		("null".to_owned(), Value::Null),
		("flags".to_owned(), Value::List(vec![Value::Bool(false), Value::Bool(true)])),
		(
			"ints".to_owned(),
			Value::List(vec![
				Value::Int(i64::MIN),
				Value::Int(-33),
				Value::Int(-1),
				Value::Int(0),
				Value::Int(1),
				Value::Int(29),
				Value::Int(i64::MAX),
			]),
		),
		("float".to_owned(), Value::Float(-2.5)),
		("text".to_owned(), Value::Str("héllo".to_owned())),
		("raw".to_owned(), Value::Bytes(vec![0x00, 0xFF, 0xC3, 0x28])),
		(
			"pair".to_owned(),
			Value::Tuple(vec![Value::Int(1), Value::Str("a".to_owned()), Value::Null]),
		),
		(
			"nested".to_owned(),
			Value::Dict(vec![("inner".to_owned(), Value::List(vec![Value::Int(4)]))]),
		),
		("tagged".to_owned(), Value::Tagged(300, Box::new(Value::Int(7)))),
	])
}

/// A list chain nested exactly `levels` containers deep.
pub fn nested_list(levels: u32) -> Value {
	let mut value = Value::List(vec![]);
	for _ in 1..levels {
		value = Value::List(vec![value]);
	}
	value
}
