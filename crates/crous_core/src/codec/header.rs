use crate::codec::bytes::{Cursor, Writer};
use crate::codec::{CrousError, Result};

/// Parsed frame header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
	/// Wire-format generation byte.
	pub version: u8,
}

impl FrameHeader {
	/// Four-byte identifier opening every frame.
	pub const MAGIC: [u8; 4] = *b"CROU";
	/// Current wire-format generation.
	pub const VERSION: u8 = 0x02;
	/// Total header size in bytes.
	pub const SIZE: usize = 5;

	/// Parse and validate the frame header at the cursor position.
	///
	/// A short input fails with `UnexpectedEof` so that every proper prefix
	/// of a valid frame reports truncation rather than a magic mismatch.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let raw = cursor.read_exact(Self::MAGIC.len())?;
		if raw != Self::MAGIC {
			let mut magic = [0_u8; 4];
			magic.copy_from_slice(raw);
			return Err(CrousError::UnknownMagic { magic });
		}

		let version = cursor.read_u8()?;
		if version != Self::VERSION {
			return Err(CrousError::UnsupportedVersion { version });
		}

		Ok(Self { version })
	}

	/// Append the current-generation header to `writer`.
	pub fn write(writer: &mut Writer) {
		writer.put_bytes(&Self::MAGIC);
		writer.put_u8(Self::VERSION);
	}
}
