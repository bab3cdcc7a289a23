use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CrousError>;

/// Errors produced while encoding, decoding, and bridging CROUS values.
#[derive(Debug, Error)]
pub enum CrousError {
	/// Sink or source IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Leading frame magic is not `CROU`.
	#[error("not a crous frame (magic={magic:?})")]
	UnknownMagic {
		/// First four bytes of the input.
		magic: [u8; 4],
	},
	/// Frame version byte is not supported.
	#[error("unsupported frame version {version} (expected 2)")]
	UnsupportedVersion {
		/// Parsed version byte.
		version: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Input continues past the end of the top-level value.
	#[error("trailing bytes after value at offset {at}: {rem} remaining")]
	TrailingBytes {
		/// Offset of the first unconsumed byte.
		at: usize,
		/// Unconsumed byte count.
		rem: usize,
	},
	/// Type tag byte has no assigned kind.
	#[error("unknown type tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Varint ran past ten bytes or past the 64-bit range.
	#[error("varint overflow at offset {at}")]
	VarintOverflow {
		/// Byte offset where the varint began.
		at: usize,
	},
	/// Tagged-value tag exceeded the 32-bit range.
	#[error("tagged value tag {tag} out of range at offset {at}")]
	TagOutOfRange {
		/// Decoded tag value.
		tag: u64,
		/// Byte offset where the tag varint began.
		at: usize,
	},
	/// Str payload or dict key was not valid UTF-8.
	#[error("invalid utf-8 in text payload at offset {at}")]
	InvalidUtf8 {
		/// Byte offset where the payload began.
		at: usize,
	},
	/// Container nesting exceeded the configured bound.
	#[error("depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Host object kind has no value mapping and no registered serializer.
	#[error("unsupported host kind {kind} at {path}")]
	UnsupportedKind {
		/// Host-kind name reported by the object model.
		kind: String,
		/// Key path of the offending object.
		path: String,
	},
	/// Host mapping key was not a text string.
	#[error("mapping key must be text at {path}")]
	NonStringKey {
		/// Key path of the offending mapping.
		path: String,
	},
	/// Host integer does not fit in signed 64 bits.
	#[error("integer out of range at {path}")]
	IntOutOfRange {
		/// Key path of the offending number.
		path: String,
	},
}

impl CrousError {
	/// Fill an empty bridge key path with `path`.
	pub(crate) fn with_path(self, path: &str) -> Self {
		match self {
			Self::UnsupportedKind { kind, path: old } if old.is_empty() => Self::UnsupportedKind {
				kind,
				path: path.to_owned(),
			},
			Self::NonStringKey { path: old } if old.is_empty() => Self::NonStringKey { path: path.to_owned() },
			Self::IntOutOfRange { path: old } if old.is_empty() => Self::IntOutOfRange { path: path.to_owned() },
			other => other,
		}
	}
}
