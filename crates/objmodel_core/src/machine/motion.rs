use crate::model::{Describe, EntryFlags, ObjectModelEntry, ObjectModelTable, SharedArray, Value};

/// One motion axis.
pub struct Axis {
	/// Axis letter, e.g. `X`.
	pub letter: char,
	/// Whether the axis has been homed since power-up.
	pub homed: bool,
	/// Commanded position in machine coordinates.
	pub machine_position: f32,
	/// Lower travel limit.
	pub min: f32,
	/// Upper travel limit.
	pub max: f32,
	/// Driver numbers moving this axis.
	pub drivers: SharedArray<u32>,
}

impl Axis {
	/// Unhomed axis at the origin, driven by `drivers`.
	pub fn new(letter: char, min: f32, max: f32, drivers: Vec<u32>) -> Self {
		Self {
			letter,
			homed: false,
			machine_position: 0.0,
			min,
			max,
			drivers: SharedArray::new(drivers, |driver, _| Value::UInt32(*driver)),
		}
	}
}

const AXIS_ENTRIES: &[ObjectModelEntry<Axis>] = &[
	ObjectModelEntry::new("drivers", EntryFlags::VERBOSE, |axis, _| Value::Array(&axis.drivers)),
	ObjectModelEntry::new("homed", EntryFlags::LIVE, |axis, _| Value::Bool(axis.homed)),
	ObjectModelEntry::new("letter", EntryFlags::NONE, |axis, _| Value::Char(axis.letter)),
	ObjectModelEntry::new("machinePosition", EntryFlags::LIVE, |axis, _| Value::Float(axis.machine_position, 3)),
	ObjectModelEntry::new("max", EntryFlags::NONE, |axis, _| Value::Float(axis.max, 1)),
	ObjectModelEntry::new("min", EntryFlags::NONE, |axis, _| Value::Float(axis.min, 1)),
];

static AXIS_TABLE: ObjectModelTable<Axis> = ObjectModelTable::new(AXIS_ENTRIES, &[1, 6]);

impl Describe for Axis {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&AXIS_TABLE
	}
}

/// Bitmap of homed axes, bit `n` for axis `n`.
pub fn homed_bitmap(axes: &[Axis]) -> u32 {
	axes.iter()
		.take(32)
		.enumerate()
		.filter(|(_, axis)| axis.homed)
		.fold(0, |bits, (index, _)| bits | (1 << index))
}
