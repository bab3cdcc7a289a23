use std::io::Read;

use crate::codec::bytes::Cursor;
use crate::codec::header::FrameHeader;
use crate::codec::tag;
use crate::codec::value::Value;
use crate::codec::{CrousError, Result};

/// Runtime limits for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// Decode one complete frame into a value tree.
///
/// All-or-nothing: any validation failure drops the partial tree and
/// returns only the error. Trailing bytes after the top-level value are
/// rejected.
pub fn decode_value(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let mut cursor = Cursor::new(bytes);
	let _ = FrameHeader::parse(&mut cursor)?;
	let value = decode_tree(&mut cursor, opt, 0)?;

	if cursor.remaining() > 0 {
		return Err(CrousError::TrailingBytes {
			at: cursor.pos(),
			rem: cursor.remaining(),
		});
	}

	Ok(value)
}

/// Read `source` to its end and decode the bytes as one frame.
pub fn decode_value_from_reader<R: Read>(source: &mut R, opt: &DecodeOptions) -> Result<Value> {
	let mut bytes = Vec::new();
	source.read_to_end(&mut bytes)?;
	decode_value(&bytes, opt)
}

fn decode_tree(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let tag_at = cursor.pos();
	let tag_byte = cursor.read_u8()?;

	match tag_byte {
		tag::NULL => Ok(Value::Null),
		tag::BOOL_FALSE => Ok(Value::Bool(false)),
		tag::BOOL_TRUE => Ok(Value::Bool(true)),
		tag::INT => Ok(Value::Int(cursor.read_svarint()?)),
		tag::FLOAT => Ok(Value::Float(cursor.read_f64_le()?)),
		tag::STR => Ok(Value::Str(read_text(cursor)?)),
		tag::BYTES => {
			let len = read_len(cursor)?;
			Ok(Value::Bytes(cursor.read_exact(len)?.to_vec()))
		}
		tag::LIST => {
			let depth = enter(opt, depth)?;
			let count = read_count(cursor)?;
			let mut items = Vec::with_capacity(count);
			for _ in 0..count {
				items.push(decode_tree(cursor, opt, depth)?);
			}
			Ok(Value::List(items))
		}
		tag::TUPLE => {
			let depth = enter(opt, depth)?;
			let count = read_count(cursor)?;
			let mut items = Vec::with_capacity(count);
			for _ in 0..count {
				items.push(decode_tree(cursor, opt, depth)?);
			}
			Ok(Value::Tuple(items))
		}
		tag::DICT => {
			let depth = enter(opt, depth)?;
			let count = read_count(cursor)?;
			let mut entries = Vec::with_capacity(count);
			for _ in 0..count {
				let key = read_text(cursor)?;
				let value = decode_tree(cursor, opt, depth)?;
				entries.push((key, value));
			}
			Ok(Value::Dict(entries))
		}
		tag::TAGGED => {
			let depth = enter(opt, depth)?;
			let at = cursor.pos();
			let raw = cursor.read_uvarint()?;
			let item_tag = u32::try_from(raw).map_err(|_| CrousError::TagOutOfRange { tag: raw, at })?;
			let inner = decode_tree(cursor, opt, depth)?;
			Ok(Value::Tagged(item_tag, Box::new(inner)))
		}
		other => match tag::small_int_value(other) {
			Some(value) => Ok(Value::Int(value)),
			None => Err(CrousError::UnknownTag { tag: other, at: tag_at }),
		},
	}
}

/// Read a declared byte length and bound it by the remaining input.
fn read_len(cursor: &mut Cursor<'_>) -> Result<usize> {
	let raw = cursor.read_uvarint()?;
	if raw > cursor.remaining() as u64 {
		return Err(CrousError::UnexpectedEof {
			at: cursor.pos(),
			need: raw as usize,
			rem: cursor.remaining(),
		});
	}
	Ok(raw as usize)
}

/// Read a declared element count.
///
/// Every element occupies at least one byte on the wire, so a count above
/// the remaining input is rejected before any allocation is sized from it.
fn read_count(cursor: &mut Cursor<'_>) -> Result<usize> {
	read_len(cursor)
}

fn read_text(cursor: &mut Cursor<'_>) -> Result<String> {
	let len = read_len(cursor)?;
	let at = cursor.pos();
	let raw = cursor.read_exact(len)?;
	match std::str::from_utf8(raw) {
		Ok(text) => Ok(text.to_owned()),
		Err(_) => Err(CrousError::InvalidUtf8 { at }),
	}
}

fn enter(opt: &DecodeOptions, depth: u32) -> Result<u32> {
	let next = depth + 1;
	if next > opt.max_depth {
		return Err(CrousError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(next)
}
