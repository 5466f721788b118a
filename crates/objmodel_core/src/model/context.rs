use crate::model::{EntryFlags, ModelError, Result};

/// Fixed capacity of the exploration index stack.
pub const MAX_INDICES: usize = 4;

/// Rendering switches parsed from a report flag-letter string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFlags {
	/// `s`: render bitmaps and enums as bare integers.
	pub short_form: bool,
	/// `f`: report only entries flagged live.
	pub only_live: bool,
	/// `v`: include entries flagged verbose.
	pub include_verbose: bool,
}

impl ReportFlags {
	/// Parse flag letters; unrecognized letters are ignored.
	pub fn parse(letters: &str) -> Self {
		let mut flags = Self::default();
		for letter in letters.chars() {
			match letter {
				'v' => flags.include_verbose = true,
				's' => flags.short_form = true,
				'f' => flags.only_live = true,
				_ => {}
			}
		}
		flags
	}
}

/// Per-request traversal state: report flags and the array index stack.
///
/// The stack is one buffer split by two cursors. `indices[..counted]` holds the
/// indices the current descent has entered, innermost last; array element
/// accessors read them to learn which element they are. `indices[counted..provided]`
/// holds caller-supplied indices (loop variables) not yet consumed by `^`.
/// Literal pushes slide the pending region up, so they never overwrite it.
#[derive(Debug, Clone)]
pub struct ExplorationContext {
	flags: ReportFlags,
	want_array_length: bool,
	indices: [i32; MAX_INDICES],
	provided: usize,
	counted: usize,
}

impl ExplorationContext {
	/// Create a context with no indices.
	pub fn new(flags: ReportFlags, want_array_length: bool) -> Self {
		Self {
			flags,
			want_array_length,
			indices: [0; MAX_INDICES],
			provided: 0,
			counted: 0,
		}
	}

	/// Create a context from a flag-letter string.
	pub fn from_letters(letters: &str, want_array_length: bool) -> Self {
		Self::new(ReportFlags::parse(letters), want_array_length)
	}

	/// Create a context whose provided stack is pre-populated, outermost index first.
	pub fn with_provided_indices(flags: ReportFlags, want_array_length: bool, indices: &[i32]) -> Result<Self> {
		let mut context = Self::new(flags, want_array_length);
		for &index in indices {
			context.provide_index(index)?;
		}
		Ok(context)
	}

	/// Parsed report flags.
	pub fn flags(&self) -> ReportFlags {
		self.flags
	}

	/// Whether bitmaps and enums render in short form.
	pub fn short_form(&self) -> bool {
		self.flags.short_form
	}

	/// Whether the caller asked for an array length instead of contents.
	pub fn want_array_length(&self) -> bool {
		self.want_array_length
	}

	/// Number of caller-supplied indices not yet consumed by `^`.
	pub fn provided_count(&self) -> usize {
		self.provided - self.counted
	}

	/// Number of indices entered by the current descent.
	pub fn counted_count(&self) -> usize {
		self.counted
	}

	/// Whether an entry with `flags` passes the live-only and verbose filters.
	pub fn should_report(&self, flags: EntryFlags) -> bool {
		(!self.flags.only_live || flags.contains(EntryFlags::LIVE)) && (self.flags.include_verbose || !flags.contains(EntryFlags::VERBOSE))
	}

	/// Push a caller-supplied index onto the provided stack.
	pub fn provide_index(&mut self, index: i32) -> Result<()> {
		if self.provided == MAX_INDICES {
			return Err(internal(ModelError::TooManyIndices { max: MAX_INDICES }));
		}
		self.indices[self.provided] = index;
		self.provided += 1;
		Ok(())
	}

	/// Enter element `index` of an array reached by a literal or while serializing.
	pub fn add_index(&mut self, index: i32) -> Result<()> {
		if self.provided == MAX_INDICES {
			return Err(internal(ModelError::TooManyIndices { max: MAX_INDICES }));
		}
		self.indices.copy_within(self.counted..self.provided, self.counted + 1);
		self.indices[self.counted] = index;
		self.counted += 1;
		self.provided += 1;
		log::trace!("index push {index} (depth={})", self.counted);
		Ok(())
	}

	/// Enter the next caller-supplied index.
	pub fn advance_index(&mut self) -> Result<()> {
		if self.counted == self.provided {
			return Err(internal(ModelError::IndexNotProvided { provided: self.provided }));
		}
		self.counted += 1;
		log::trace!("index advance to {} (depth={})", self.indices[self.counted - 1], self.counted);
		Ok(())
	}

	/// Leave the innermost entered index. A consumed provided index is dropped with it.
	pub fn remove_index(&mut self) -> Result<()> {
		if self.counted == 0 {
			return Err(internal(ModelError::IndexUnderflow { depth: 0, counted: 0 }));
		}
		self.indices.copy_within(self.counted..self.provided, self.counted - 1);
		self.counted -= 1;
		self.provided -= 1;
		Ok(())
	}

	/// Read the counted index `depth` levels out from the innermost one.
	pub fn index(&self, depth: usize) -> Result<i32> {
		if depth < self.counted {
			return Ok(self.indices[self.counted - depth - 1]);
		}
		Err(internal(ModelError::IndexUnderflow {
			depth,
			counted: self.counted,
		}))
	}

	/// Read the innermost counted index.
	pub fn last_index(&self) -> Result<i32> {
		self.index(0)
	}
}

fn internal(err: ModelError) -> ModelError {
	log::error!("{err}");
	err
}
