//! Bridge model mapping `serde_json::Value` onto the codec value kinds.

use crous::codec::{CrousError, ObjView, ObjectModel, Result};
use serde_json::{Map, Number, Value as Json};

/// Strict JSON object model.
///
/// JSON has no bytes, tuple, or tagged kind: frames containing Bytes or
/// Tuple fail conversion with the invalid-kind error, and tagged values
/// unwrap to their inner value. The lossy inspection rendering lives in
/// the `show` command, not here.
pub struct JsonModel;

impl ObjectModel for JsonModel {
	type Obj = Json;

	fn view<'a>(&self, obj: &'a Json) -> Result<ObjView<'a, Json>> {
		match obj {
			Json::Null => Ok(ObjView::Null),
			Json::Bool(item) => Ok(ObjView::Bool(*item)),
			Json::Number(item) => {
				if let Some(fits) = item.as_i64() {
					Ok(ObjView::Int(fits))
				} else if item.is_u64() {
					Err(CrousError::IntOutOfRange { path: String::new() })
				} else if let Some(real) = item.as_f64() {
					Ok(ObjView::Float(real))
				} else {
					Err(CrousError::UnsupportedKind {
						kind: "number".to_owned(),
						path: String::new(),
					})
				}
			}
			Json::String(item) => Ok(ObjView::Str(item)),
			Json::Array(items) => Ok(ObjView::List(items)),
			Json::Object(entries) => Ok(ObjView::Dict(
				entries.iter().map(|(key, item)| (key.as_str(), item)).collect(),
			)),
		}
	}

	fn make_null(&self) -> Result<Json> {
		Ok(Json::Null)
	}

	fn make_bool(&self, value: bool) -> Result<Json> {
		Ok(Json::Bool(value))
	}

	fn make_int(&self, value: i64) -> Result<Json> {
		Ok(Json::Number(Number::from(value)))
	}

	fn make_float(&self, value: f64) -> Result<Json> {
		match Number::from_f64(value) {
			Some(real) => Ok(Json::Number(real)),
			None => Err(CrousError::UnsupportedKind {
				kind: "non-finite float".to_owned(),
				path: String::new(),
			}),
		}
	}

	fn make_str(&self, value: &str) -> Result<Json> {
		Ok(Json::String(value.to_owned()))
	}

	fn make_bytes(&self, _value: &[u8]) -> Result<Json> {
		Err(CrousError::UnsupportedKind {
			kind: "bytes".to_owned(),
			path: String::new(),
		})
	}

	fn make_list(&self, items: Vec<Json>) -> Result<Json> {
		Ok(Json::Array(items))
	}

	fn make_tuple(&self, _items: Vec<Json>) -> Result<Json> {
		Err(CrousError::UnsupportedKind {
			kind: "tuple".to_owned(),
			path: String::new(),
		})
	}

	fn make_dict(&self, entries: Vec<(String, Json)>) -> Result<Json> {
		// Duplicate wire keys collapse here, last value wins.
		let mut out = Map::with_capacity(entries.len());
		for (key, item) in entries {
			out.insert(key, item);
		}
		Ok(Json::Object(out))
	}
}
