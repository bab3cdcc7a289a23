use std::any::Any;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::codec::value::Value;
use crate::codec::Result;

/// Custom serializer callback over a type-erased host object.
pub type SerializeFn = dyn Fn(&dyn Any) -> Result<Value> + Send + Sync;
/// Custom tag-decoder callback over the inner value of a tagged node.
pub type TagDecodeFn = dyn Fn(u32, &Value) -> Result<Value> + Send + Sync;

fn serializers() -> &'static RwLock<HashMap<String, Box<SerializeFn>>> {
	static REGISTRY: OnceLock<RwLock<HashMap<String, Box<SerializeFn>>>> = OnceLock::new();
	REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

fn decoders() -> &'static RwLock<HashMap<u32, Box<TagDecodeFn>>> {
	static REGISTRY: OnceLock<RwLock<HashMap<u32, Box<TagDecodeFn>>>> = OnceLock::new();
	REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
	match lock.read() {
		Ok(guard) => guard,
		Err(poisoned) => poisoned.into_inner(),
	}
}

fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
	match lock.write() {
		Ok(guard) => guard,
		Err(poisoned) => poisoned.into_inner(),
	}
}

/// Register a process-wide serializer for the host kind `kind`.
///
/// The bridge consults it whenever a model reports an otherwise
/// unsupported object of that kind.
pub fn register_serializer<F>(kind: impl Into<String>, handler: F)
where
	F: Fn(&dyn Any) -> Result<Value> + Send + Sync + 'static,
{
	write_guard(serializers()).insert(kind.into(), Box::new(handler));
}

/// Remove a previously registered serializer, if any.
pub fn unregister_serializer(kind: &str) {
	write_guard(serializers()).remove(kind);
}

/// Register a process-wide decoder for tagged values carrying `tag`.
///
/// The bridge applies it to the inner value before host conversion.
pub fn register_decoder<F>(tag: u32, handler: F)
where
	F: Fn(u32, &Value) -> Result<Value> + Send + Sync + 'static,
{
	write_guard(decoders()).insert(tag, Box::new(handler));
}

/// Remove a previously registered tag decoder, if any.
pub fn unregister_decoder(tag: u32) {
	write_guard(decoders()).remove(&tag);
}

/// Run the registered serializer for `kind`, if one exists.
pub(crate) fn serialize_other(kind: &str, object: &dyn Any) -> Option<Result<Value>> {
	let guard = read_guard(serializers());
	guard.get(kind).map(|handler| handler(object))
}

/// Run the registered decoder for `tag`, if one exists.
pub(crate) fn decode_tagged(tag: u32, inner: &Value) -> Option<Result<Value>> {
	let guard = read_guard(decoders());
	guard.get(&tag).map(|handler| handler(tag, inner))
}
