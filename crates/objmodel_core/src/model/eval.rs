use crate::model::report::parse_index;
use crate::model::{ArrayDescriptor, ExplorationContext, ModelError, ObjectModel, ReportFlags, Result, ScalarValue, Value, is_wildcard, next_element};

/// Evaluate one selector against `root` for an expression.
///
/// `provided` holds loop indices, outermost first, consumed in order by each
/// `^` in the selector. A leading `#` asks for the length of the selected
/// array instead of an element.
pub fn evaluate(root: &dyn ObjectModel, selector: &str, provided: &[i32]) -> Result<ScalarValue> {
	let (selector, want_array_length) = match selector.strip_prefix('#') {
		Some(rest) => (rest, true),
		None => (selector, false),
	};
	let mut context = ExplorationContext::with_provided_indices(ReportFlags::default(), want_array_length, provided)?;
	get_object_value(&mut context, root, selector, 0).map_err(|err| match err {
		ModelError::NonPrimitiveValue { .. } => ModelError::NonPrimitiveValue {
			selector: selector.to_owned(),
		},
		other => other,
	})
}

/// Resolve `selector` against table level `level` of `owner`.
///
/// Every anomaly is an error naming the selector text where it occurred.
pub fn get_object_value(context: &mut ExplorationContext, owner: &dyn ObjectModel, selector: &str, level: u8) -> Result<ScalarValue> {
	let slot = if is_wildcard(selector) { None } else { owner.find_entry(level, selector) };
	let Some(slot) = slot else {
		return Err(ModelError::UnknownValue {
			selector: selector.to_owned(),
		});
	};

	let value = owner.entry_value(level, slot, context);
	resolve_value(context, value, &selector[next_element(selector)..])
}

/// Continue resolving `selector` from an already-read value.
pub fn resolve_value(context: &mut ExplorationContext, value: Value<'_>, selector: &str) -> Result<ScalarValue> {
	match value {
		Value::Array(array) => resolve_array(context, array, selector),
		Value::Object(owner, level) => match selector.strip_prefix('.') {
			Some(rest) => get_object_value(context, owner, rest, level),
			None if selector.is_empty() => Err(ModelError::NonPrimitiveValue {
				selector: selector.to_owned(),
			}),
			None => Err(ModelError::SelectorSyntax {
				selector: selector.to_owned(),
			}),
		},
		primitive if selector.is_empty() => primitive.to_scalar().ok_or_else(|| ModelError::NonPrimitiveValue {
			selector: selector.to_owned(),
		}),
		_ => Err(ModelError::PrimitiveBeforeEnd {
			selector: selector.to_owned(),
		}),
	}
}

fn resolve_array(context: &mut ExplorationContext, array: &dyn ArrayDescriptor, selector: &str) -> Result<ScalarValue> {
	if selector.is_empty() && context.want_array_length() {
		let guard = array.read();
		return Ok(ScalarValue::Int32(i32::try_from(guard.count(context)).unwrap_or(i32::MAX)));
	}

	if let Some(rest) = selector.strip_prefix('^') {
		if context.provided_count() == 0 {
			return Err(ModelError::MissingArrayIndex {
				selector: selector.to_owned(),
			});
		}
		context.advance_index()?;
		let resolved = resolve_provided_element(context, array, selector, rest);
		let popped = context.remove_index();
		return resolved.and_then(|value| popped.map(|()| value));
	}

	// Literal indices are entered like serialized ones; pending provided indices stay queued.
	let literal = selector.strip_prefix('[').and_then(|bracketed| bracketed.split_once(']'));
	let Some((digits, rest)) = literal else {
		return Err(ModelError::MissingArrayIndex {
			selector: selector.to_owned(),
		});
	};
	if digits.is_empty() {
		return Err(ModelError::MissingArrayIndex {
			selector: selector.to_owned(),
		});
	}
	let Some(index) = parse_index(digits) else {
		return Err(ModelError::SelectorSyntax {
			selector: selector.to_owned(),
		});
	};

	let guard = array.read();
	let len = guard.count(context);
	if index >= len {
		return Err(ModelError::IndexOutOfBounds {
			selector: selector.to_owned(),
			index: i32::try_from(index).unwrap_or(i32::MAX),
			len,
		});
	}
	context.add_index(i32::try_from(index).unwrap_or(i32::MAX))?;
	let element = guard.element(index, context);
	let resolved = resolve_value(context, element, rest);
	let popped = context.remove_index();
	resolved.and_then(|value| popped.map(|()| value))
}

fn resolve_provided_element(context: &mut ExplorationContext, array: &dyn ArrayDescriptor, selector: &str, rest: &str) -> Result<ScalarValue> {
	let guard = array.read();
	let index = context.last_index()?;
	let len = guard.count(context);
	let Some(slot) = usize::try_from(index).ok().filter(|slot| *slot < len) else {
		return Err(ModelError::IndexOutOfBounds {
			selector: selector.to_owned(),
			index,
			len,
		});
	};

	let element = guard.element(slot, context);
	resolve_value(context, element, rest)
}

#[cfg(test)]
mod tests;
