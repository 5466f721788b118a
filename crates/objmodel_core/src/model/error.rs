use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors produced while evaluating selectors, walking the index stack, and loading machine snapshots.
#[derive(Debug, Error)]
pub enum ModelError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Snapshot text was not valid JSON for the expected shape.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Snapshot parsed but described an impossible machine.
	#[error("invalid snapshot: {reason}")]
	InvalidSnapshot {
		/// Human-readable description of the rejected field.
		reason: String,
	},
	/// Schema table descriptor or ordering is inconsistent.
	#[error("invalid object model table for {type_name}: {reason}")]
	InvalidTable {
		/// Owning type of the rejected table.
		type_name: &'static str,
		/// What the check found.
		reason: String,
	},
	/// Selector named an identifier that no table entry matches.
	#[error("unknown value {selector}")]
	UnknownValue {
		/// Selector text starting at the failing segment.
		selector: String,
	},
	/// Selector reached an array without a `^` index marker.
	#[error("missing array index in '{selector}'")]
	MissingArrayIndex {
		/// Selector text remaining at the array.
		selector: String,
	},
	/// Provided index fell outside the array.
	#[error("array index out of bounds in '{selector}' (index={index}, len={len})")]
	IndexOutOfBounds {
		/// Selector text remaining at the array.
		selector: String,
		/// Index taken from the exploration context.
		index: i32,
		/// Element count read under the array guard.
		len: usize,
	},
	/// Selector ended on an object, which has no scalar value.
	#[error("selected value has non-primitive type in '{selector}'")]
	NonPrimitiveValue {
		/// Full selector that stopped on the object.
		selector: String,
	},
	/// An object was followed by something other than `.`.
	#[error("syntax error in value selector string '{selector}'")]
	SelectorSyntax {
		/// Selector text remaining at the object.
		selector: String,
	},
	/// A primitive was reached with selector text left over.
	#[error("reached primitive type before end of selector string '{selector}'")]
	PrimitiveBeforeEnd {
		/// Unconsumed selector text.
		selector: String,
	},
	/// Index stack capacity exceeded.
	#[error("internal error: too many indices (max={max})")]
	TooManyIndices {
		/// Fixed stack capacity.
		max: usize,
	},
	/// Pop or read below the bottom of the index stack.
	#[error("internal error: index stack underflow (depth={depth}, counted={counted})")]
	IndexUnderflow {
		/// Depth that was requested.
		depth: usize,
		/// Indices currently counted.
		counted: usize,
	},
	/// `^` advanced past the indices the caller provided.
	#[error("internal error: no provided index left (provided={provided})")]
	IndexNotProvided {
		/// Indices the caller provided.
		provided: usize,
	},
}

impl ModelError {
	/// Whether this error signals a caller contract violation rather than bad user input.
	pub fn is_internal(&self) -> bool {
		matches!(
			self,
			Self::TooManyIndices { .. } | Self::IndexUnderflow { .. } | Self::IndexNotProvided { .. }
		)
	}
}
