use std::any::Any;

use super::{ObjView, ObjectModel, decode_object, encode_object, object_to_value, value_to_object};
use crate::codec::decode::DecodeOptions;
use crate::codec::encode::EncodeOptions;
use crate::codec::value::Value;
use crate::codec::{CrousError, Result, registry};

/// Minimal dynamic object model standing in for a host runtime.
#[derive(Debug, Clone, PartialEq)]
enum MockObj {
	Nil,
	Flag(bool),
	Num(i64),
	Big(u64),
	Real(f64),
	Text(String),
	Blob(Vec<u8>),
	Items(Vec<MockObj>),
	Fixed(Vec<MockObj>),
	Table(Vec<(MockObj, MockObj)>),
	Wrapped(u32, Box<MockObj>),
	Point { x: i64, y: i64 },
	Opaque,
}

struct MockModel;

impl ObjectModel for MockModel {
	type Obj = MockObj;

	fn view<'a>(&self, obj: &'a MockObj) -> Result<ObjView<'a, MockObj>> {
		match obj {
			MockObj::Nil => Ok(ObjView::Null),
			MockObj::Flag(item) => Ok(ObjView::Bool(*item)),
			MockObj::Num(item) => Ok(ObjView::Int(*item)),
			MockObj::Big(item) => match i64::try_from(*item) {
				Ok(fits) => Ok(ObjView::Int(fits)),
				Err(_) => Err(CrousError::IntOutOfRange { path: String::new() }),
			},
			MockObj::Real(item) => Ok(ObjView::Float(*item)),
			MockObj::Text(item) => Ok(ObjView::Str(item)),
			MockObj::Blob(item) => Ok(ObjView::Bytes(item)),
			MockObj::Items(items) => Ok(ObjView::List(items)),
			MockObj::Fixed(items) => Ok(ObjView::Tuple(items)),
			MockObj::Table(entries) => {
				let mut out = Vec::with_capacity(entries.len());
				for (key, item) in entries {
					let MockObj::Text(key) = key else {
						return Err(CrousError::NonStringKey { path: String::new() });
					};
					out.push((key.as_str(), item));
				}
				Ok(ObjView::Dict(out))
			}
			MockObj::Wrapped(tag, inner) => Ok(ObjView::Tagged(*tag, inner)),
			MockObj::Point { .. } => Ok(ObjView::Other {
				kind: "mock.point".to_owned(),
				object: obj as &dyn Any,
			}),
			MockObj::Opaque => Ok(ObjView::Other {
				kind: "mock.opaque".to_owned(),
				object: obj as &dyn Any,
			}),
		}
	}

	fn make_null(&self) -> Result<MockObj> {
		Ok(MockObj::Nil)
	}

	fn make_bool(&self, value: bool) -> Result<MockObj> {
		Ok(MockObj::Flag(value))
	}

	fn make_int(&self, value: i64) -> Result<MockObj> {
		Ok(MockObj::Num(value))
	}

	fn make_float(&self, value: f64) -> Result<MockObj> {
		Ok(MockObj::Real(value))
	}

	fn make_str(&self, value: &str) -> Result<MockObj> {
		Ok(MockObj::Text(value.to_owned()))
	}

	fn make_bytes(&self, value: &[u8]) -> Result<MockObj> {
		Ok(MockObj::Blob(value.to_vec()))
	}

	fn make_list(&self, items: Vec<MockObj>) -> Result<MockObj> {
		Ok(MockObj::Items(items))
	}

	fn make_tuple(&self, items: Vec<MockObj>) -> Result<MockObj> {
		Ok(MockObj::Fixed(items))
	}

	fn make_dict(&self, entries: Vec<(String, MockObj)>) -> Result<MockObj> {
		Ok(MockObj::Table(
			entries.into_iter().map(|(key, item)| (MockObj::Text(key), item)).collect(),
		))
	}
}

/// Same host, but tagged values survive as wrappers.
struct SurfacingModel;

impl ObjectModel for SurfacingModel {
	type Obj = MockObj;

	fn view<'a>(&self, obj: &'a MockObj) -> Result<ObjView<'a, MockObj>> {
		MockModel.view(obj)
	}

	fn make_null(&self) -> Result<MockObj> {
		MockModel.make_null()
	}

	fn make_bool(&self, value: bool) -> Result<MockObj> {
		MockModel.make_bool(value)
	}

	fn make_int(&self, value: i64) -> Result<MockObj> {
		MockModel.make_int(value)
	}

	fn make_float(&self, value: f64) -> Result<MockObj> {
		MockModel.make_float(value)
	}

	fn make_str(&self, value: &str) -> Result<MockObj> {
		MockModel.make_str(value)
	}

	fn make_bytes(&self, value: &[u8]) -> Result<MockObj> {
		MockModel.make_bytes(value)
	}

	fn make_list(&self, items: Vec<MockObj>) -> Result<MockObj> {
		MockModel.make_list(items)
	}

	fn make_tuple(&self, items: Vec<MockObj>) -> Result<MockObj> {
		MockModel.make_tuple(items)
	}

	fn make_dict(&self, entries: Vec<(String, MockObj)>) -> Result<MockObj> {
		MockModel.make_dict(entries)
	}

	fn make_tagged(&self, tag: u32, inner: MockObj) -> Result<MockObj> {
		Ok(MockObj::Wrapped(tag, Box::new(inner)))
	}
}

fn sample_table() -> MockObj {
	MockObj::Table(vec![
		(MockObj::Text("name".to_owned()), MockObj::Text("Alice".to_owned())),
		(MockObj::Text("age".to_owned()), MockObj::Num(30)),
		(MockObj::Text("active".to_owned()), MockObj::Flag(true)),
		(
			MockObj::Text("scores".to_owned()),
			MockObj::Items(vec![MockObj::Num(1), MockObj::Real(2.5), MockObj::Nil]),
		),
		(
			MockObj::Text("pair".to_owned()),
			MockObj::Fixed(vec![MockObj::Num(1), MockObj::Text("a".to_owned())]),
		),
		(MockObj::Text("raw".to_owned()), MockObj::Blob(vec![0x00, 0xFF])),
	])
}

#[test]
fn object_round_trips_through_frame() {
	let obj = sample_table();
	let bytes = encode_object(&MockModel, &obj, &EncodeOptions::default()).expect("encode succeeds");
	assert_eq!(&bytes[..5], &[0x43, 0x52, 0x4F, 0x55, 0x02]);

	let back = decode_object(&MockModel, &bytes, &DecodeOptions::default()).expect("decode succeeds");
	assert_eq!(back, obj);
}

#[test]
fn tuple_and_bytes_kinds_are_preserved() {
	let obj = MockObj::Fixed(vec![MockObj::Blob(vec![1, 2]), MockObj::Num(3)]);
	let value = object_to_value(&MockModel, &obj, &EncodeOptions::default()).expect("conversion succeeds");
	assert_eq!(
		value,
		Value::Tuple(vec![Value::Bytes(vec![1, 2]), Value::Int(3)])
	);
}

#[test]
fn oversized_host_integer_reports_its_key_path() {
	let obj = MockObj::Table(vec![(
		MockObj::Text("big".to_owned()),
		MockObj::Items(vec![MockObj::Big(u64::MAX)]),
	)]);
	let err = object_to_value(&MockModel, &obj, &EncodeOptions::default()).expect_err("overflow should fail");
	assert!(matches!(err, CrousError::IntOutOfRange { ref path } if path == "$.big[0]"));
}

#[test]
fn non_text_mapping_key_reports_its_key_path() {
	let obj = MockObj::Table(vec![(
		MockObj::Text("inner".to_owned()),
		MockObj::Table(vec![(MockObj::Num(1), MockObj::Nil)]),
	)]);
	let err = object_to_value(&MockModel, &obj, &EncodeOptions::default()).expect_err("non-text key should fail");
	assert!(matches!(err, CrousError::NonStringKey { ref path } if path == "$.inner"));
}

#[test]
fn unsupported_kind_without_serializer_names_the_kind() {
	let obj = MockObj::Items(vec![MockObj::Opaque]);
	let err = object_to_value(&MockModel, &obj, &EncodeOptions::default()).expect_err("unregistered kind should fail");
	assert!(matches!(
		err,
		CrousError::UnsupportedKind { ref kind, ref path } if kind == "mock.opaque" && path == "$[0]"
	));
}

#[test]
fn registered_serializer_and_decoder_round_trip_a_custom_kind() {
	let tag = 0xBEEF_0001;
	registry::register_serializer("mock.point", move |object| {
		let Some(MockObj::Point { x, y }) = object.downcast_ref::<MockObj>() else {
			return Err(CrousError::UnsupportedKind {
				kind: "mock.point".to_owned(),
				path: String::new(),
			});
		};
		Ok(Value::Tagged(tag, Box::new(Value::Tuple(vec![Value::Int(*x), Value::Int(*y)]))))
	});
	registry::register_decoder(tag, |_tag, inner| {
		Ok(Value::Dict(vec![("point".to_owned(), inner.clone())]))
	});

	let obj = MockObj::Point { x: 3, y: -4 };
	let bytes = encode_object(&MockModel, &obj, &EncodeOptions::default()).expect("encode succeeds");
	let back = decode_object(&MockModel, &bytes, &DecodeOptions::default()).expect("decode succeeds");
	assert_eq!(
		back,
		MockObj::Table(vec![(
			MockObj::Text("point".to_owned()),
			MockObj::Fixed(vec![MockObj::Num(3), MockObj::Num(-4)]),
		)])
	);

	registry::unregister_serializer("mock.point");
	registry::unregister_decoder(tag);
}

#[test]
fn unhandled_tagged_values_unwrap_by_default() {
	let value = Value::Tagged(300, Box::new(Value::Int(1)));
	let obj = value_to_object(&MockModel, &value).expect("conversion succeeds");
	assert_eq!(obj, MockObj::Num(1));
}

#[test]
fn surfacing_model_keeps_tagged_wrappers() {
	let value = Value::Tagged(300, Box::new(Value::Int(1)));
	let obj = value_to_object(&SurfacingModel, &value).expect("conversion succeeds");
	assert_eq!(obj, MockObj::Wrapped(300, Box::new(MockObj::Num(1))));

	let bytes = encode_object(&SurfacingModel, &obj, &EncodeOptions::default()).expect("encode succeeds");
	let back = decode_object(&SurfacingModel, &bytes, &DecodeOptions::default()).expect("decode succeeds");
	assert_eq!(back, obj);
}

#[test]
fn path_conveniences_round_trip_through_a_file() {
	let path = std::env::temp_dir().join(format!("crous_bridge_{}_roundtrip.crous", std::process::id()));
	let obj = sample_table();

	super::encode_object_to_path(&MockModel, &obj, &EncodeOptions::default(), &path).expect("file encode succeeds");
	let back = super::decode_object_from_path(&MockModel, &path, &DecodeOptions::default()).expect("file decode succeeds");
	assert_eq!(back, obj);

	let _ = std::fs::remove_file(&path);
}

#[test]
fn writer_and_reader_forms_round_trip() {
	let obj = sample_table();
	let mut sink = Vec::new();
	super::encode_object_to_writer(&MockModel, &obj, &EncodeOptions::default(), &mut sink).expect("sink encode succeeds");

	let back = super::decode_object_from_reader(&MockModel, &mut sink.as_slice(), &DecodeOptions::default())
		.expect("reader decode succeeds");
	assert_eq!(back, obj);
}

#[test]
fn deep_host_object_fails_conversion_at_the_bound() {
	let mut obj = MockObj::Items(vec![]);
	for _ in 1..300 {
		obj = MockObj::Items(vec![obj]);
	}
	let err = object_to_value(&MockModel, &obj, &EncodeOptions::default()).expect_err("deep host should fail");
	assert!(matches!(err, CrousError::DepthExceeded { max_depth: 256 }));
}
