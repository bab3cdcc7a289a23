//! Wire type-tag assignments shared by the encoder and decoder.

pub(crate) const NULL: u8 = 0x00;
pub(crate) const BOOL_FALSE: u8 = 0x01;
pub(crate) const BOOL_TRUE: u8 = 0x02;
pub(crate) const INT: u8 = 0x03;
pub(crate) const FLOAT: u8 = 0x04;
pub(crate) const STR: u8 = 0x05;
pub(crate) const BYTES: u8 = 0x06;
pub(crate) const LIST: u8 = 0x07;
pub(crate) const TUPLE: u8 = 0x08;
pub(crate) const DICT: u8 = 0x09;
pub(crate) const TAGGED: u8 = 0x0A;

/// Inline small-integer range and its reserved tag window.
pub(crate) const SMALL_INT_MIN: i64 = -32;
pub(crate) const SMALL_INT_MAX: i64 = 28;
pub(crate) const SMALL_INT_BASE: u8 = 0x20;
pub(crate) const SMALL_INT_END: u8 = SMALL_INT_BASE + (SMALL_INT_MAX - SMALL_INT_MIN) as u8;

/// Single-byte form for integers in `[SMALL_INT_MIN, SMALL_INT_MAX]`.
pub(crate) fn small_int_tag(value: i64) -> Option<u8> {
	if (SMALL_INT_MIN..=SMALL_INT_MAX).contains(&value) {
		Some(SMALL_INT_BASE + (value - SMALL_INT_MIN) as u8)
	} else {
		None
	}
}

/// Inverse of `small_int_tag` for bytes inside the reserved window.
pub(crate) fn small_int_value(tag: u8) -> Option<i64> {
	if (SMALL_INT_BASE..=SMALL_INT_END).contains(&tag) {
		Some(i64::from(tag - SMALL_INT_BASE) + SMALL_INT_MIN)
	} else {
		None
	}
}
