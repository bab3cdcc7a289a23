use std::io;
use std::path::PathBuf;

use crous::codec::{EncodeOptions, Result, encode_object};

use crate::json::JsonModel;

/// Encode one JSON document into a CROUS frame file.
pub fn run(path: PathBuf, out: PathBuf) -> Result<()> {
	let raw = std::fs::read(&path)?;
	let doc: serde_json::Value =
		serde_json::from_slice(&raw).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

	let frame = encode_object(&JsonModel, &doc, &EncodeOptions::default())?;
	std::fs::write(&out, &frame)?;

	println!("input: {}", path.display());
	println!("output: {}", out.display());
	println!("frame_bytes: {}", frame.len());
	Ok(())
}
