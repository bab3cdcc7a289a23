//! Public library API for the CROUS binary serialization format.

/// Value model, framed wire codec, host-object bridge, and extension registries.
pub mod codec;
