use std::fmt;

use crate::model::{ArrayDescriptor, ObjectModel};

/// Valid bit width of a [`Value::DateTime`] payload.
pub const DATE_TIME_BITS: u32 = 40;

/// One value read out of the object model.
///
/// References are views into live subsystem state and only valid for the
/// request that produced them.
#[derive(Clone, Copy)]
pub enum Value<'a> {
	/// Absent or failed value.
	Null,
	/// Owner plus the table level to search next.
	Object(&'a dyn ObjectModel, u8),
	/// Live collection.
	Array(&'a dyn ArrayDescriptor),
	/// Float with 1, 2, or 3 fixed decimals.
	Float(f32, u8),
	/// Signed integer.
	Int32(i32),
	/// Unsigned integer.
	UInt32(u32),
	/// Boolean.
	Bool(bool),
	/// Single character.
	Char(char),
	/// Borrowed text.
	String(&'a str),
	/// 32 independent flags, bit 0 first.
	Bitmap32(u32),
	/// Numeric enum ordinal.
	Enum32(u32),
	/// IPv4 address packed with the first quad in the low byte.
	Ipv4(u32),
	/// Seconds since the Unix epoch, 40 valid bits; zero means unset.
	DateTime(u64),
}

impl<'a> Value<'a> {
	/// Level-0 view of `owner`.
	pub fn object(owner: &'a dyn ObjectModel) -> Self {
		Self::Object(owner, 0)
	}

	/// Date-time truncated to its valid bits.
	pub fn date_time(seconds: u64) -> Self {
		Self::DateTime(seconds & ((1_u64 << DATE_TIME_BITS) - 1))
	}

	/// Stable kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "Null",
			Self::Object(..) => "Object",
			Self::Array(_) => "Array",
			Self::Float(..) => "Float",
			Self::Int32(_) => "Int32",
			Self::UInt32(_) => "UInt32",
			Self::Bool(_) => "Bool",
			Self::Char(_) => "Char",
			Self::String(_) => "String",
			Self::Bitmap32(_) => "Bitmap32",
			Self::Enum32(_) => "Enum32",
			Self::Ipv4(_) => "Ipv4",
			Self::DateTime(_) => "DateTime",
		}
	}

	/// Detach a primitive from the request borrow; `None` for objects and arrays.
	pub fn to_scalar(&self) -> Option<ScalarValue> {
		Some(match *self {
			Self::Null => ScalarValue::Null,
			Self::Object(..) | Self::Array(_) => return None,
			Self::Float(value, digits) => ScalarValue::Float(value, digits),
			Self::Int32(value) => ScalarValue::Int32(value),
			Self::UInt32(value) => ScalarValue::UInt32(value),
			Self::Bool(value) => ScalarValue::Bool(value),
			Self::Char(value) => ScalarValue::Char(value),
			Self::String(value) => ScalarValue::String(value.into()),
			Self::Bitmap32(bits) => ScalarValue::Bitmap32(bits),
			Self::Enum32(ordinal) => ScalarValue::Enum32(ordinal),
			Self::Ipv4(packed) => ScalarValue::Ipv4(packed),
			Self::DateTime(seconds) => ScalarValue::DateTime(seconds),
		})
	}
}

impl fmt::Debug for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Object(owner, level) => write!(f, "Object({}, {level})", owner.type_label()),
			Self::Array(_) => f.write_str("Array(..)"),
			other => match other.to_scalar() {
				Some(scalar) => fmt::Debug::fmt(&scalar, f),
				None => f.write_str(other.kind()),
			},
		}
	}
}

/// Owned primitive returned by strict evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
	/// See [`Value::Null`].
	Null,
	/// See [`Value::Float`].
	Float(f32, u8),
	/// See [`Value::Int32`].
	Int32(i32),
	/// See [`Value::UInt32`].
	UInt32(u32),
	/// See [`Value::Bool`].
	Bool(bool),
	/// See [`Value::Char`].
	Char(char),
	/// See [`Value::String`].
	String(Box<str>),
	/// See [`Value::Bitmap32`].
	Bitmap32(u32),
	/// See [`Value::Enum32`].
	Enum32(u32),
	/// See [`Value::Ipv4`].
	Ipv4(u32),
	/// See [`Value::DateTime`].
	DateTime(u64),
}

impl ScalarValue {
	/// Borrow back as a [`Value`].
	pub fn as_value(&self) -> Value<'_> {
		match self {
			Self::Null => Value::Null,
			Self::Float(value, digits) => Value::Float(*value, *digits),
			Self::Int32(value) => Value::Int32(*value),
			Self::UInt32(value) => Value::UInt32(*value),
			Self::Bool(value) => Value::Bool(*value),
			Self::Char(value) => Value::Char(*value),
			Self::String(value) => Value::String(value),
			Self::Bitmap32(bits) => Value::Bitmap32(*bits),
			Self::Enum32(ordinal) => Value::Enum32(*ordinal),
			Self::Ipv4(packed) => Value::Ipv4(*packed),
			Self::DateTime(seconds) => Value::DateTime(*seconds),
		}
	}
}
