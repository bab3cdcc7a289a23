mod bridge;
mod bytes;
mod decode;
mod encode;
mod error;
mod header;
mod registry;
mod tag;
mod value;

/// Host-object bridge contract and object-level codec entry points.
pub use bridge::{
	ObjView, ObjectModel, decode_object, decode_object_from_path, decode_object_from_reader, encode_object,
	encode_object_to_path, encode_object_to_writer, object_to_value, value_to_object,
};
/// Wire-level write and read primitives.
pub use bytes::{Cursor, Writer};
/// Frame decoding entry points and options.
pub use decode::{DecodeOptions, decode_value, decode_value_from_reader};
/// Frame encoding entry points and options.
pub use encode::{EncodeOptions, encode_value, encode_value_to_writer};
/// Error and result aliases.
pub use error::{CrousError, Result};
/// Frame header representation.
pub use header::FrameHeader;
/// Process-wide custom serializer and tag-decoder registries.
pub use registry::{
	SerializeFn, TagDecodeFn, register_decoder, register_serializer, unregister_decoder, unregister_serializer,
};
/// Decoded runtime value type.
pub use value::Value;
