use std::fmt::Write;
use std::net::Ipv4Addr;

use chrono::DateTime;

use crate::model::{ScalarValue, Value};

/// Placeholder emitted for long-form enums until names are published.
pub const ENUM_NAME_PLACEHOLDER: &str = "unimplemented";

/// Append `text` as a quoted, escaped JSON string.
pub fn push_json_str(out: &mut String, text: &str) {
	match serde_json::to_string(text) {
		Ok(encoded) => out.push_str(&encoded),
		Err(_) => out.push_str("null"),
	}
}

/// Append one primitive. Returns `false`, writing nothing, for objects and arrays.
pub fn push_scalar(out: &mut String, value: &Value<'_>, short_form: bool) -> bool {
	match *value {
		Value::Object(..) | Value::Array(_) => return false,
		Value::Null => out.push_str("null"),
		Value::Float(value, digits) => push_float(out, value, digits),
		Value::Int32(value) => {
			let _ = write!(out, "{value}");
		}
		Value::UInt32(value) => {
			let _ = write!(out, "{value}");
		}
		Value::Bool(value) => out.push_str(if value { "true" } else { "false" }),
		Value::Char(value) => {
			let mut buf = [0_u8; 4];
			push_json_str(out, value.encode_utf8(&mut buf));
		}
		Value::String(text) => push_json_str(out, text),
		Value::Bitmap32(bits) => {
			if short_form {
				let _ = write!(out, "{bits}");
			} else {
				out.push('[');
				for bit in 0..32 {
					if bit != 0 {
						out.push(',');
					}
					out.push(if (bits >> bit) & 1 != 0 { '1' } else { '0' });
				}
				out.push(']');
			}
		}
		Value::Enum32(ordinal) => {
			if short_form {
				let _ = write!(out, "{ordinal}");
			} else {
				// TODO: resolve ordinal names once enum tables are published next to the object model tables.
				push_json_str(out, ENUM_NAME_PLACEHOLDER);
			}
		}
		Value::Ipv4(packed) => {
			let _ = write!(out, "\"{}\"", Ipv4Addr::from(packed.to_le_bytes()));
		}
		Value::DateTime(seconds) => push_date_time(out, seconds),
	}
	true
}

fn push_float(out: &mut String, value: f32, digits: u8) {
	if !value.is_finite() {
		out.push_str("null");
		return;
	}

	let _ = match digits {
		3 => write!(out, "{value:.3}"),
		2 => write!(out, "{value:.2}"),
		_ => write!(out, "{value:.1}"),
	};
}

fn push_date_time(out: &mut String, seconds: u64) {
	let stamp = i64::try_from(seconds).ok().filter(|seconds| *seconds != 0).and_then(|seconds| DateTime::from_timestamp(seconds, 0));
	match stamp {
		Some(stamp) => {
			let _ = write!(out, "\"{}\"", stamp.format("%Y-%m-%dT%H:%M:%SZ"));
		}
		None => out.push_str("null"),
	}
}

impl ScalarValue {
	/// Render as JSON exactly as the bulk report would.
	pub fn to_json(&self, short_form: bool) -> String {
		let mut out = String::new();
		push_scalar(&mut out, &self.as_value(), short_form);
		out
	}
}
