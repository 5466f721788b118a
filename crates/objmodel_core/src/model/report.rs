use std::fmt::Write;

use crate::model::json::{push_json_str, push_scalar};
use crate::model::{ArrayDescriptor, ExplorationContext, ObjectModel, ReportFlags, Result, Value, is_wildcard, next_element};

/// Switches carried by one status-report request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
	/// Parsed flag letters.
	pub flags: ReportFlags,
	/// Report element counts for arrays at the end of the filter.
	pub want_array_length: bool,
}

impl ReportOptions {
	/// Options from a flag-letter string.
	pub fn from_letters(letters: &str, want_array_length: bool) -> Self {
		Self {
			flags: ReportFlags::parse(letters),
			want_array_length,
		}
	}
}

/// Serialize the part of `root` selected by `filter` into `out`.
///
/// Unknown names, bad indices, and malformed brackets render as `null` in
/// place. Only internal index-stack failures are returned as errors.
pub fn report_as_json(out: &mut String, root: &dyn ObjectModel, filter: &str, options: &ReportOptions) -> Result<()> {
	let mut context = ExplorationContext::new(options.flags, options.want_array_length);
	report_object_as_json(out, &mut context, root, 0, filter)
}

/// Serialize into a fresh string.
pub fn report_to_string(root: &dyn ObjectModel, filter: &str, options: &ReportOptions) -> Result<String> {
	let mut out = String::new();
	report_as_json(&mut out, root, filter, options)?;
	Ok(out)
}

/// Serialize table level `level` of `owner` under `filter`.
pub fn report_object_as_json(out: &mut String, context: &mut ExplorationContext, owner: &dyn ObjectModel, level: u8, filter: &str) -> Result<()> {
	let Some(len) = owner.group_len(level) else {
		log::debug!("{} has no table level {level}", owner.type_label());
		out.push_str("null");
		return Ok(());
	};

	if is_wildcard(filter) {
		let rest = rest_of_filter(filter);
		let mut added = false;
		for slot in 0..len {
			let Some(info) = owner.entry_info(level, slot) else {
				continue;
			};
			if !context.should_report(info.flags) {
				continue;
			}

			out.push(if added { ',' } else { '{' });
			added = true;
			push_json_str(out, info.name);
			out.push(':');
			let value = owner.entry_value(level, slot, context);
			report_item_as_json(out, context, value, rest)?;
		}

		if added {
			out.push('}');
		} else {
			out.push_str("null");
		}
		return Ok(());
	}

	let reportable = owner
		.find_entry(level, filter)
		.filter(|slot| owner.entry_info(level, *slot).is_some_and(|info| context.should_report(info.flags)));
	match reportable {
		Some(slot) => {
			let value = owner.entry_value(level, slot, context);
			report_item_as_json(out, context, value, rest_of_filter(filter))
		}
		None => {
			log::debug!("filter '{filter}' matches nothing reportable in {} level {level}", owner.type_label());
			out.push_str("null");
			Ok(())
		}
	}
}

/// Serialize one value, applying whatever is left of the filter.
pub fn report_item_as_json(out: &mut String, context: &mut ExplorationContext, value: Value<'_>, filter: &str) -> Result<()> {
	if context.want_array_length() && filter.is_empty() {
		match value {
			Value::Array(array) => {
				let guard = array.read();
				let _ = write!(out, "{}", guard.count(context));
			}
			_ => out.push_str("null"),
		}
		return Ok(());
	}

	match value {
		Value::Array(array) => match filter.strip_prefix('[') {
			Some(bracketed) => match bracketed.strip_prefix(']') {
				Some(rest) => report_array_as_json(out, context, array, rest),
				None => report_array_element(out, context, array, bracketed),
			},
			None => report_array_as_json(out, context, array, filter),
		},
		Value::Object(owner, level) => report_object_as_json(out, context, owner, level, filter.strip_prefix('.').unwrap_or(filter)),
		scalar => {
			if filter.is_empty() {
				push_scalar(out, &scalar, context.short_form());
			} else {
				log::debug!("filter '{filter}' continues past a {}", scalar.kind());
				out.push_str("null");
			}
			Ok(())
		}
	}
}

/// Serialize every element, holding the array's guard across the whole walk.
pub fn report_array_as_json(out: &mut String, context: &mut ExplorationContext, array: &dyn ArrayDescriptor, filter: &str) -> Result<()> {
	let guard = array.read();
	let count = guard.count(context);

	out.push('[');
	for index in 0..count {
		if index != 0 {
			out.push(',');
		}
		context.add_index(i32::try_from(index).unwrap_or(i32::MAX))?;
		let element = guard.element(index, context);
		let reported = report_item_as_json(out, context, element, filter);
		let popped = context.remove_index();
		reported.and(popped)?;
	}
	out.push(']');

	Ok(())
}

fn report_array_element(out: &mut String, context: &mut ExplorationContext, array: &dyn ArrayDescriptor, bracketed: &str) -> Result<()> {
	let Some((digits, rest)) = bracketed.split_once(']') else {
		log::debug!("unterminated array index '[{bracketed}'");
		out.push_str("null");
		return Ok(());
	};

	let guard = array.read();
	let count = guard.count(context);
	let index = parse_index(digits).filter(|index| *index < count);
	let Some(index) = index else {
		log::debug!("array index '[{digits}]' invalid for {count} elements");
		out.push_str("null");
		return Ok(());
	};

	context.add_index(i32::try_from(index).unwrap_or(i32::MAX))?;
	let element = guard.element(index, context);
	let reported = report_item_as_json(out, context, element, rest);
	let popped = context.remove_index();
	reported.and(popped)
}

/// Parse a literal array index: ASCII digits only.
pub(crate) fn parse_index(digits: &str) -> Option<usize> {
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	digits.parse().ok()
}

fn rest_of_filter(filter: &str) -> &str {
	let rest = &filter[next_element(filter)..];
	rest.strip_prefix('.').unwrap_or(rest)
}
