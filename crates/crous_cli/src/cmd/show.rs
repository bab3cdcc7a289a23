use std::fmt::Write as _;
use std::path::PathBuf;

use crous::codec::{DecodeOptions, Result, Value, decode_value};

/// Output truncation limits for the human rendering.
#[derive(Debug, Clone, Copy)]
pub struct ShowOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of bytes shown for byte payloads.
	pub max_bytes_shown: usize,
	/// Maximum number of elements printed per container.
	pub max_items: usize,
}

impl Default for ShowOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_bytes_shown: 16,
			max_items: 64,
		}
	}
}

/// Decode one file and render its value tree to stdout.
pub fn run(path: PathBuf, json: bool, max_depth: Option<u32>) -> Result<()> {
	let bytes = std::fs::read(&path)?;
	let mut opt = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		opt.max_depth = max_depth;
	}
	let value = decode_value(&bytes, &opt)?;

	if json {
		println!("{}", serde_json::to_string_pretty(&render_json(&value)).unwrap_or_default());
	} else {
		let mut out = String::new();
		render_human(&mut out, &value, 0, &ShowOptions::default());
		print!("{out}");
	}

	Ok(())
}

/// Render a value tree as annotated JSON.
///
/// Kinds JSON cannot express directly are wrapped in single-key marker
/// objects so the output stays machine-readable: `{"$bytes": "<hex>"}`,
/// `{"$tuple": [..]}`, `{"$tag": n, "$value": ..}`, `{"$float": "nan"}`.
pub fn render_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(item) => serde_json::json!(item),
		Value::Int(item) => serde_json::json!(item),
		Value::Float(item) => match serde_json::Number::from_f64(*item) {
			Some(real) => serde_json::Value::Number(real),
			None => serde_json::json!({ "$float": item.to_string() }),
		},
		Value::Str(item) => serde_json::json!(item),
		Value::Bytes(item) => serde_json::json!({ "$bytes": hex_string(item) }),
		Value::List(items) => serde_json::Value::Array(items.iter().map(render_json).collect()),
		Value::Tuple(items) => {
			serde_json::json!({ "$tuple": items.iter().map(render_json).collect::<Vec<_>>() })
		}
		Value::Dict(entries) => {
			let mut out = serde_json::Map::with_capacity(entries.len());
			for (key, item) in entries {
				out.insert(key.clone(), render_json(item));
			}
			serde_json::Value::Object(out)
		}
		Value::Tagged(tag, inner) => serde_json::json!({ "$tag": tag, "$value": render_json(inner) }),
	}
}

fn render_human(out: &mut String, value: &Value, indent: usize, opt: &ShowOptions) {
	let pad = "  ".repeat(indent);
	match value {
		Value::Null => {
			let _ = writeln!(out, "{pad}null");
		}
		Value::Bool(item) => {
			let _ = writeln!(out, "{pad}{item}");
		}
		Value::Int(item) => {
			let _ = writeln!(out, "{pad}{item}");
		}
		Value::Float(item) => {
			let _ = writeln!(out, "{pad}{item}");
		}
		Value::Str(item) => {
			let _ = writeln!(out, "{pad}{}", string_label(item, opt.max_string_len));
		}
		Value::Bytes(item) => {
			let _ = writeln!(out, "{pad}{}", bytes_label(item, opt.max_bytes_shown));
		}
		Value::List(items) => {
			let _ = writeln!(out, "{pad}list ({} items)", items.len());
			render_elements(out, items, indent + 1, opt);
		}
		Value::Tuple(items) => {
			let _ = writeln!(out, "{pad}tuple ({} items)", items.len());
			render_elements(out, items, indent + 1, opt);
		}
		Value::Dict(entries) => {
			let _ = writeln!(out, "{pad}dict ({} entries)", entries.len());
			let inner_pad = "  ".repeat(indent + 1);
			for (key, item) in entries.iter().take(opt.max_items) {
				match item {
					Value::List(_) | Value::Tuple(_) | Value::Dict(_) | Value::Tagged(..) => {
						let _ = writeln!(out, "{inner_pad}{key}:");
						render_human(out, item, indent + 2, opt);
					}
					_ => {
						let mut scalar = String::new();
						render_human(&mut scalar, item, 0, opt);
						let _ = writeln!(out, "{inner_pad}{key}: {}", scalar.trim_end());
					}
				}
			}
			if entries.len() > opt.max_items {
				let _ = writeln!(out, "{inner_pad}... {} more", entries.len() - opt.max_items);
			}
		}
		Value::Tagged(tag, inner) => {
			let _ = writeln!(out, "{pad}tagged ({tag})");
			render_human(out, inner, indent + 1, opt);
		}
	}
}

fn render_elements(out: &mut String, items: &[Value], indent: usize, opt: &ShowOptions) {
	for item in items.iter().take(opt.max_items) {
		render_human(out, item, indent, opt);
	}
	if items.len() > opt.max_items {
		let pad = "  ".repeat(indent);
		let _ = writeln!(out, "{pad}... {} more", items.len() - opt.max_items);
	}
}

fn string_label(text: &str, max_len: usize) -> String {
	let shown: String = text.chars().take(max_len).collect();
	if shown.len() < text.len() {
		format!("{shown:?}...")
	} else {
		format!("{shown:?}")
	}
}

fn bytes_label(raw: &[u8], max_shown: usize) -> String {
	let shown = &raw[..raw.len().min(max_shown)];
	if raw.len() > max_shown {
		format!("bytes[{}] {}...", raw.len(), hex_string(shown))
	} else {
		format!("bytes[{}] {}", raw.len(), hex_string(shown))
	}
}

fn hex_string(raw: &[u8]) -> String {
	let mut out = String::with_capacity(raw.len() * 2);
	for byte in raw {
		let _ = write!(out, "{byte:02x}");
	}
	out
}
