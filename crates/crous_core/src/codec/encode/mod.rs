use std::io::Write;

use crate::codec::bytes::Writer;
use crate::codec::header::FrameHeader;
use crate::codec::tag;
use crate::codec::value::Value;
use crate::codec::{CrousError, Result};

/// Runtime limits and form switches for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Emit the one-byte inline form for integers in `[-32, 28]`.
	///
	/// Off by default so canonical output uses the general form everywhere.
	pub small_ints: bool,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 256,
			small_ints: false,
		}
	}
}

/// Encode one value into a complete frame.
///
/// Either the whole frame is returned or an error is returned and no bytes
/// are surfaced.
pub fn encode_value(value: &Value, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	FrameHeader::write(&mut writer);
	encode_tree(&mut writer, value, opt, 0)?;
	Ok(writer.into_bytes())
}

/// Encode one value and write the finished frame to `sink`.
///
/// The frame is built in full before the single write, so a failing sink
/// never observes a partial frame committed as success.
pub fn encode_value_to_writer<W: Write>(value: &Value, opt: &EncodeOptions, sink: &mut W) -> Result<()> {
	let frame = encode_value(value, opt)?;
	sink.write_all(&frame)?;
	Ok(())
}

fn encode_tree(writer: &mut Writer, value: &Value, opt: &EncodeOptions, depth: u32) -> Result<()> {
	match value {
		Value::Null => writer.put_u8(tag::NULL),
		Value::Bool(false) => writer.put_u8(tag::BOOL_FALSE),
		Value::Bool(true) => writer.put_u8(tag::BOOL_TRUE),
		Value::Int(item) => {
			match tag::small_int_tag(*item) {
				Some(inline) if opt.small_ints => writer.put_u8(inline),
				_ => {
					writer.put_u8(tag::INT);
					writer.put_svarint(*item);
				}
			}
		}
		Value::Float(item) => {
			writer.put_u8(tag::FLOAT);
			writer.put_f64_le(*item);
		}
		Value::Str(item) => {
			writer.put_u8(tag::STR);
			writer.put_uvarint(item.len() as u64);
			writer.put_bytes(item.as_bytes());
		}
		Value::Bytes(item) => {
			writer.put_u8(tag::BYTES);
			writer.put_uvarint(item.len() as u64);
			writer.put_bytes(item);
		}
		Value::List(items) => {
			let depth = enter(opt, depth)?;
			writer.put_u8(tag::LIST);
			writer.put_uvarint(items.len() as u64);
			for item in items {
				encode_tree(writer, item, opt, depth)?;
			}
		}
		Value::Tuple(items) => {
			let depth = enter(opt, depth)?;
			writer.put_u8(tag::TUPLE);
			writer.put_uvarint(items.len() as u64);
			for item in items {
				encode_tree(writer, item, opt, depth)?;
			}
		}
		Value::Dict(entries) => {
			let depth = enter(opt, depth)?;
			writer.put_u8(tag::DICT);
			writer.put_uvarint(entries.len() as u64);
			for (key, item) in entries {
				writer.put_uvarint(key.len() as u64);
				writer.put_bytes(key.as_bytes());
				encode_tree(writer, item, opt, depth)?;
			}
		}
		Value::Tagged(item_tag, inner) => {
			let depth = enter(opt, depth)?;
			writer.put_u8(tag::TAGGED);
			writer.put_uvarint(u64::from(*item_tag));
			encode_tree(writer, inner, opt, depth)?;
		}
	}
	Ok(())
}

fn enter(opt: &EncodeOptions, depth: u32) -> Result<u32> {
	let next = depth + 1;
	if next > opt.max_depth {
		return Err(CrousError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(next)
}
