use std::collections::BTreeMap;
use std::path::PathBuf;

use crous::codec::{DecodeOptions, FrameHeader, Result, Value, decode_value};

/// Print frame-level and value-level statistics for one file.
pub fn run(path: PathBuf) -> Result<()> {
	let bytes = std::fs::read(&path)?;
	let value = decode_value(&bytes, &DecodeOptions::default())?;

	let mut counts = BTreeMap::new();
	count_kinds(&value, &mut counts);
	let value_count: u64 = counts.values().sum();

	println!("path: {}", path.display());
	println!("size_bytes: {}", bytes.len());
	println!("version: {}", FrameHeader::VERSION);
	println!("root_kind: {}", value.kind_name());
	println!("value_count: {value_count}");
	println!("max_depth: {}", value.depth());
	println!("kinds:");
	for (kind, count) in counts {
		println!("  {kind}: {count}");
	}

	Ok(())
}

fn count_kinds(value: &Value, counts: &mut BTreeMap<&'static str, u64>) {
	*counts.entry(value.kind_name()).or_insert(0) += 1;
	match value {
		Value::List(items) | Value::Tuple(items) => {
			for item in items {
				count_kinds(item, counts);
			}
		}
		Value::Dict(entries) => {
			for (_, item) in entries {
				count_kinds(item, counts);
			}
		}
		Value::Tagged(_, inner) => count_kinds(inner, counts),
		_ => {}
	}
}
