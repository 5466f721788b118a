mod array;
mod context;
mod error;
mod eval;
mod json;
mod report;
mod table;
mod value;

/// Live collection views and the locked vector descriptor.
pub use array::{ArrayDescriptor, ArrayGuard, SharedArray};
/// Per-request flags and index stack.
pub use context::{ExplorationContext, MAX_INDICES, ReportFlags};
/// Error and result aliases.
pub use error::{ModelError, Result};
/// Strict single-value evaluation entry points.
pub use eval::{evaluate, get_object_value, resolve_value};
/// Scalar JSON rendering helpers.
pub use json::{ENUM_NAME_PLACEHOLDER, push_json_str, push_scalar};
/// Tolerant bulk serialization entry points and options.
pub use report::{ReportOptions, report_array_as_json, report_as_json, report_item_as_json, report_object_as_json, report_to_string};
/// Schema tables, entries, and the traversal-facing owner trait.
pub use table::{Accessor, Describe, EntryFlags, EntryInfo, ObjectModel, ObjectModelEntry, ObjectModelTable, compare_name, is_wildcard, next_element};
/// Tagged values.
pub use value::{DATE_TIME_BITS, ScalarValue, Value};

#[cfg(test)]
mod test_support;
