use std::any::Any;
use std::fmt::Write as _;
use std::io::{Read, Write};
use std::path::Path;

use crate::codec::decode::{DecodeOptions, decode_value};
use crate::codec::encode::{EncodeOptions, encode_value};
use crate::codec::registry;
use crate::codec::value::Value;
use crate::codec::{CrousError, Result};

/// One host object classified into the kinds the codec can encode.
pub enum ObjView<'a, O> {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(&'a str),
	Bytes(&'a [u8]),
	List(&'a [O]),
	Tuple(&'a [O]),
	Dict(Vec<(&'a str, &'a O)>),
	Tagged(u32, &'a O),
	/// Kind with no direct mapping; resolved through the serializer registry.
	Other {
		/// Host-kind name, also the registry key.
		kind: String,
		/// Type-erased object handed to a registered serializer.
		object: &'a dyn Any,
	},
}

/// Capability contract between a host object model and codec values.
///
/// The codec walks host objects only through this trait, so it can be
/// unit-tested against a mock model without any runtime. All constructors
/// are fallible; a model rejects values its host cannot represent.
pub trait ObjectModel {
	/// Host object type.
	type Obj;

	/// Classify one host object into an encodable view.
	fn view<'a>(&self, obj: &'a Self::Obj) -> Result<ObjView<'a, Self::Obj>>;

	fn make_null(&self) -> Result<Self::Obj>;
	fn make_bool(&self, value: bool) -> Result<Self::Obj>;
	fn make_int(&self, value: i64) -> Result<Self::Obj>;
	fn make_float(&self, value: f64) -> Result<Self::Obj>;
	fn make_str(&self, value: &str) -> Result<Self::Obj>;
	fn make_bytes(&self, value: &[u8]) -> Result<Self::Obj>;
	fn make_list(&self, items: Vec<Self::Obj>) -> Result<Self::Obj>;
	fn make_tuple(&self, items: Vec<Self::Obj>) -> Result<Self::Obj>;
	fn make_dict(&self, entries: Vec<(String, Self::Obj)>) -> Result<Self::Obj>;

	/// Build a host object for a tagged value with no registered decoder.
	///
	/// The default unwraps to the inner object; models whose host can
	/// represent tagged values override this to surface them verbatim.
	fn make_tagged(&self, tag: u32, inner: Self::Obj) -> Result<Self::Obj> {
		let _ = tag;
		Ok(inner)
	}
}

/// Convert a host object into a value tree.
pub fn object_to_value<M: ObjectModel>(model: &M, obj: &M::Obj, opt: &EncodeOptions) -> Result<Value> {
	let mut path = KeyPath::new();
	convert_object(model, obj, opt, &mut path, 0)
}

/// Convert a value tree into a host object.
pub fn value_to_object<M: ObjectModel>(model: &M, value: &Value) -> Result<M::Obj> {
	let mut path = KeyPath::new();
	convert_value(model, value, &mut path)
}

/// Bridge a host object and encode it as a complete frame.
pub fn encode_object<M: ObjectModel>(model: &M, obj: &M::Obj, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let value = object_to_value(model, obj, opt)?;
	encode_value(&value, opt)
}

/// Decode a complete frame and bridge it into a host object.
pub fn decode_object<M: ObjectModel>(model: &M, bytes: &[u8], opt: &DecodeOptions) -> Result<M::Obj> {
	let value = decode_value(bytes, opt)?;
	value_to_object(model, &value)
}

/// Bridge and encode a host object, writing the finished frame to `sink`.
pub fn encode_object_to_writer<M: ObjectModel, W: Write>(
	model: &M,
	obj: &M::Obj,
	opt: &EncodeOptions,
	sink: &mut W,
) -> Result<()> {
	let frame = encode_object(model, obj, opt)?;
	sink.write_all(&frame)?;
	Ok(())
}

/// Read `source` to its end, decode, and bridge into a host object.
pub fn decode_object_from_reader<M: ObjectModel, R: Read>(
	model: &M,
	source: &mut R,
	opt: &DecodeOptions,
) -> Result<M::Obj> {
	let mut bytes = Vec::new();
	source.read_to_end(&mut bytes)?;
	decode_object(model, &bytes, opt)
}

/// Bridge and encode a host object into a file at `path`.
pub fn encode_object_to_path<M: ObjectModel>(
	model: &M,
	obj: &M::Obj,
	opt: &EncodeOptions,
	path: impl AsRef<Path>,
) -> Result<()> {
	let frame = encode_object(model, obj, opt)?;
	std::fs::write(path, frame)?;
	Ok(())
}

/// Decode the file at `path` and bridge it into a host object.
pub fn decode_object_from_path<M: ObjectModel>(
	model: &M,
	path: impl AsRef<Path>,
	opt: &DecodeOptions,
) -> Result<M::Obj> {
	let bytes = std::fs::read(path)?;
	decode_object(model, &bytes, opt)
}

fn convert_object<M: ObjectModel>(
	model: &M,
	obj: &M::Obj,
	opt: &EncodeOptions,
	path: &mut KeyPath,
	depth: u32,
) -> Result<Value> {
	let view = model.view(obj).map_err(|err| err.with_path(&path.render()))?;

	match view {
		ObjView::Null => Ok(Value::Null),
		ObjView::Bool(item) => Ok(Value::Bool(item)),
		ObjView::Int(item) => Ok(Value::Int(item)),
		ObjView::Float(item) => Ok(Value::Float(item)),
		ObjView::Str(item) => Ok(Value::Str(item.to_owned())),
		ObjView::Bytes(item) => Ok(Value::Bytes(item.to_vec())),
		ObjView::List(items) => {
			let depth = enter(opt, depth)?;
			let mut out = Vec::with_capacity(items.len());
			for (index, item) in items.iter().enumerate() {
				path.push_index(index);
				out.push(convert_object(model, item, opt, path, depth)?);
				path.pop();
			}
			Ok(Value::List(out))
		}
		ObjView::Tuple(items) => {
			let depth = enter(opt, depth)?;
			let mut out = Vec::with_capacity(items.len());
			for (index, item) in items.iter().enumerate() {
				path.push_index(index);
				out.push(convert_object(model, item, opt, path, depth)?);
				path.pop();
			}
			Ok(Value::Tuple(out))
		}
		ObjView::Dict(entries) => {
			let depth = enter(opt, depth)?;
			let mut out = Vec::with_capacity(entries.len());
			for (key, item) in entries {
				path.push_key(key);
				let value = convert_object(model, item, opt, path, depth)?;
				path.pop();
				out.push((key.to_owned(), value));
			}
			Ok(Value::Dict(out))
		}
		ObjView::Tagged(tag, inner) => {
			let depth = enter(opt, depth)?;
			let value = convert_object(model, inner, opt, path, depth)?;
			Ok(Value::Tagged(tag, Box::new(value)))
		}
		ObjView::Other { kind, object } => match registry::serialize_other(&kind, object) {
			Some(result) => result.map_err(|err| err.with_path(&path.render())),
			None => Err(CrousError::UnsupportedKind {
				kind,
				path: path.render(),
			}),
		},
	}
}

fn convert_value<M: ObjectModel>(model: &M, value: &Value, path: &mut KeyPath) -> Result<M::Obj> {
	let made = match value {
		Value::Null => model.make_null(),
		Value::Bool(item) => model.make_bool(*item),
		Value::Int(item) => model.make_int(*item),
		Value::Float(item) => model.make_float(*item),
		Value::Str(item) => model.make_str(item),
		Value::Bytes(item) => model.make_bytes(item),
		Value::List(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (index, item) in items.iter().enumerate() {
				path.push_index(index);
				out.push(convert_value(model, item, path)?);
				path.pop();
			}
			model.make_list(out)
		}
		Value::Tuple(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (index, item) in items.iter().enumerate() {
				path.push_index(index);
				out.push(convert_value(model, item, path)?);
				path.pop();
			}
			model.make_tuple(out)
		}
		Value::Dict(entries) => {
			let mut out = Vec::with_capacity(entries.len());
			for (key, item) in entries {
				path.push_key(key);
				let converted = convert_value(model, item, path)?;
				path.pop();
				out.push((key.clone(), converted));
			}
			model.make_dict(out)
		}
		Value::Tagged(tag, inner) => match registry::decode_tagged(*tag, inner) {
			Some(result) => {
				let transformed = result.map_err(|err| err.with_path(&path.render()))?;
				return convert_value(model, &transformed, path);
			}
			None => {
				let inner_obj = convert_value(model, inner, path)?;
				model.make_tagged(*tag, inner_obj)
			}
		},
	};

	made.map_err(|err| err.with_path(&path.render()))
}

fn enter(opt: &EncodeOptions, depth: u32) -> Result<u32> {
	let next = depth + 1;
	if next > opt.max_depth {
		return Err(CrousError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(next)
}

/// Key path of the object currently being converted, for error context.
struct KeyPath {
	segments: Vec<PathSeg>,
}

enum PathSeg {
	Key(String),
	Index(usize),
}

impl KeyPath {
	fn new() -> Self {
		Self { segments: Vec::new() }
	}

	fn push_key(&mut self, key: &str) {
		self.segments.push(PathSeg::Key(key.to_owned()));
	}

	fn push_index(&mut self, index: usize) {
		self.segments.push(PathSeg::Index(index));
	}

	fn pop(&mut self) {
		let _ = self.segments.pop();
	}

	fn render(&self) -> String {
		let mut out = String::from("$");
		for segment in &self.segments {
			match segment {
				PathSeg::Key(key) => {
					let _ = write!(out, ".{key}");
				}
				PathSeg::Index(index) => {
					let _ = write!(out, "[{index}]");
				}
			}
		}
		out
	}
}

#[cfg(test)]
mod tests;
