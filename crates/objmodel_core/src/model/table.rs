use std::cmp::Ordering;
use std::ops::BitOr;

use crate::model::{ExplorationContext, ModelError, Result, Value};

/// Reporting flags attached to one table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFlags(u8);

impl EntryFlags {
	/// Always reported, never considered live.
	pub const NONE: Self = Self(0);
	/// Value changes while the machine runs; kept by the `f` report flag.
	pub const LIVE: Self = Self(1);
	/// Only reported when the `v` report flag is present.
	pub const VERBOSE: Self = Self(2);

	/// Whether every bit of `other` is set.
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	/// Combine two flag sets in const context.
	pub const fn union(self, other: Self) -> Self {
		Self(self.0 | other.0)
	}
}

impl BitOr for EntryFlags {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		self.union(rhs)
	}
}

/// Accessor bound into a table entry: reads one value out of its owner.
pub type Accessor<T> = for<'a> fn(&'a T, &ExplorationContext) -> Value<'a>;

/// One named entry in a schema table.
pub struct ObjectModelEntry<T: 'static> {
	/// Identifier matched against selector segments.
	pub name: &'static str,
	/// Live/verbose reporting flags.
	pub flags: EntryFlags,
	/// Value accessor.
	pub accessor: Accessor<T>,
}

impl<T: 'static> ObjectModelEntry<T> {
	/// Build an entry in const context.
	pub const fn new(name: &'static str, flags: EntryFlags, accessor: Accessor<T>) -> Self {
		Self { name, flags, accessor }
	}

	/// Name and flags without the accessor.
	pub fn info(&self) -> EntryInfo {
		EntryInfo {
			name: self.name,
			flags: self.flags,
		}
	}
}

/// Type-erased view of an entry's name and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
	/// Entry identifier.
	pub name: &'static str,
	/// Entry reporting flags.
	pub flags: EntryFlags,
}

/// Schema table set for one describable type.
///
/// `entries` holds every group back to back, level 0 first. `descriptor[0]`
/// is the group count and `descriptor[n + 1]` the entry count of group `n`.
/// Entries inside a group are sorted by name.
pub struct ObjectModelTable<T: 'static> {
	entries: &'static [ObjectModelEntry<T>],
	descriptor: &'static [u8],
}

impl<T: 'static> ObjectModelTable<T> {
	/// Build a table set in const context.
	pub const fn new(entries: &'static [ObjectModelEntry<T>], descriptor: &'static [u8]) -> Self {
		Self { entries, descriptor }
	}

	/// Number of table levels.
	pub fn group_count(&self) -> usize {
		self.descriptor.first().map_or(0, |count| usize::from(*count))
	}

	/// Entries of table level `level`, or `None` past the last level.
	pub fn group(&self, level: u8) -> Option<&'static [ObjectModelEntry<T>]> {
		let level = usize::from(level);
		if level >= self.group_count() {
			return None;
		}

		let start: usize = self.descriptor.get(1..=level)?.iter().map(|size| usize::from(*size)).sum();
		let len = usize::from(*self.descriptor.get(level + 1)?);
		self.entries.get(start..start + len)
	}

	/// Binary-search level `level` for the entry named by the leading segment of `id`.
	pub fn find(&self, level: u8, id: &str) -> Option<&'static ObjectModelEntry<T>> {
		let slot = self.find_slot(level, id)?;
		self.group(level)?.get(slot)
	}

	/// Like [`Self::find`], returning the entry's position within its group.
	pub fn find_slot(&self, level: u8, id: &str) -> Option<usize> {
		let group = self.group(level)?;
		group.binary_search_by(|entry| compare_name(entry.name, id)).ok()
	}

	/// Check descriptor sums and per-group ordering.
	pub fn verify(&self, type_name: &'static str) -> Result<()> {
		let declared: usize = self.descriptor.iter().skip(1).map(|size| usize::from(*size)).sum();
		if self.descriptor.len() != self.group_count() + 1 || declared != self.entries.len() {
			return Err(ModelError::InvalidTable {
				type_name,
				reason: format!(
					"descriptor {:?} does not cover {} entries",
					self.descriptor,
					self.entries.len()
				),
			});
		}

		for level in 0..self.group_count() {
			let Some(group) = u8::try_from(level).ok().and_then(|level| self.group(level)) else {
				continue;
			};
			for pair in group.windows(2) {
				if pair[0].name >= pair[1].name {
					return Err(ModelError::InvalidTable {
						type_name,
						reason: format!("level {level}: '{}' is not sorted before '{}'", pair[0].name, pair[1].name),
					});
				}
			}
		}

		Ok(())
	}
}

/// Types that publish a schema table set.
pub trait Describe: Sized + 'static {
	/// Process-wide table set for this type.
	fn object_model_table() -> &'static ObjectModelTable<Self>;
}

/// Object-safe view of a describable owner, used by the traversal.
pub trait ObjectModel {
	/// Short type label for diagnostics.
	fn type_label(&self) -> &'static str;

	/// Number of table levels.
	fn group_count(&self) -> usize;

	/// Entry count of table level `level`.
	fn group_len(&self, level: u8) -> Option<usize>;

	/// Name and flags of one entry.
	fn entry_info(&self, level: u8, slot: usize) -> Option<EntryInfo>;

	/// Slot of the entry matched by the leading segment of `id`.
	fn find_entry(&self, level: u8, id: &str) -> Option<usize>;

	/// Invoke one entry's accessor. Unknown slots read as `Null`.
	fn entry_value<'a>(&'a self, level: u8, slot: usize, context: &ExplorationContext) -> Value<'a>;
}

impl<T: Describe> ObjectModel for T {
	fn type_label(&self) -> &'static str {
		let full = std::any::type_name::<T>();
		full.rsplit("::").next().unwrap_or(full)
	}

	fn group_count(&self) -> usize {
		T::object_model_table().group_count()
	}

	fn group_len(&self, level: u8) -> Option<usize> {
		T::object_model_table().group(level).map(<[_]>::len)
	}

	fn entry_info(&self, level: u8, slot: usize) -> Option<EntryInfo> {
		T::object_model_table().group(level)?.get(slot).map(ObjectModelEntry::info)
	}

	fn find_entry(&self, level: u8, id: &str) -> Option<usize> {
		T::object_model_table().find_slot(level, id)
	}

	fn entry_value<'a>(&'a self, level: u8, slot: usize, context: &ExplorationContext) -> Value<'a> {
		match T::object_model_table().group(level).and_then(|group| group.get(slot)) {
			Some(entry) => (entry.accessor)(self, context),
			None => Value::Null,
		}
	}
}

/// Whether `id` is a wildcard segment (`*` or empty).
pub fn is_wildcard(id: &str) -> bool {
	id.is_empty() || id.starts_with('*')
}

/// Order an entry name against the leading identifier of `id`.
///
/// The identifier ends at `.`, `[`, `^`, or end of string, so `heaters`
/// matches `heaters.state` and `heaters[0]` but not `heatersX`. Wildcards
/// compare equal to every name.
pub fn compare_name(name: &str, id: &str) -> Ordering {
	if is_wildcard(id) {
		return Ordering::Equal;
	}
	name.cmp(&id[..next_element(id)])
}

/// Byte offset of the first `.`, `[`, `^`, or the end of `selector`.
pub fn next_element(selector: &str) -> usize {
	selector.find(['.', '[', '^']).unwrap_or(selector.len())
}

#[cfg(test)]
mod tests;
