use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Accessor, Describe, ExplorationContext, Value};

/// A collection whose size and elements are computed on demand.
///
/// Descriptors are views, not owners. Reading goes through [`Self::read`],
/// which holds the collection's read guard for as long as the returned
/// [`ArrayGuard`] lives, so a count and the elements read with it agree.
pub trait ArrayDescriptor {
	/// Acquire the read side of the collection's guard.
	fn read(&self) -> Box<dyn ArrayGuard + '_>;
}

/// Consistent read view of one collection.
pub trait ArrayGuard {
	/// Number of elements.
	fn count(&self, context: &ExplorationContext) -> usize;

	/// Element `index`; `Null` past the end.
	fn element(&self, index: usize, context: &ExplorationContext) -> Value<'_>;
}

/// Locked vector published as an object model array.
///
/// Subsystems mutate through [`Self::write`]. Readers take the recursive read
/// side, so re-entering the same array while a writer waits cannot deadlock.
pub struct SharedArray<T> {
	items: RwLock<Vec<T>>,
	element: Accessor<T>,
}

impl<T> SharedArray<T> {
	/// Wrap `items`, reading each element through `element`.
	pub fn new(items: Vec<T>, element: Accessor<T>) -> Self {
		Self {
			items: RwLock::new(items),
			element,
		}
	}

	/// Exclusive access for resizing or replacing elements.
	pub fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
		self.items.write()
	}

	/// Shared access outside a report.
	pub fn items(&self) -> RwLockReadGuard<'_, Vec<T>> {
		self.items.read_recursive()
	}
}

impl<T: Describe> SharedArray<T> {
	/// Array of nested objects, each reported at table level 0.
	pub fn objects(items: Vec<T>) -> Self {
		Self::new(items, |item, _| Value::object(item))
	}
}

impl<T> ArrayDescriptor for SharedArray<T> {
	fn read(&self) -> Box<dyn ArrayGuard + '_> {
		Box::new(SharedArrayGuard {
			items: self.items.read_recursive(),
			element: self.element,
		})
	}
}

struct SharedArrayGuard<'a, T> {
	items: RwLockReadGuard<'a, Vec<T>>,
	element: Accessor<T>,
}

impl<T> ArrayGuard for SharedArrayGuard<'_, T> {
	fn count(&self, _context: &ExplorationContext) -> usize {
		self.items.len()
	}

	fn element(&self, index: usize, context: &ExplorationContext) -> Value<'_> {
		match self.items.get(index) {
			Some(item) => (self.element)(item, context),
			None => Value::Null,
		}
	}
}
