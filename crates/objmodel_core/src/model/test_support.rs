use crate::model::{Describe, EntryFlags, ObjectModelEntry, ObjectModelTable, SharedArray, Value};

pub(crate) struct Probe {
	pub(crate) state: u32,
	pub(crate) current: f32,
}

const PROBE_ENTRIES: &[ObjectModelEntry<Probe>] = &[
	ObjectModelEntry::new("current", EntryFlags::LIVE, |probe, _| Value::Float(probe.current, 1)),
	ObjectModelEntry::new("state", EntryFlags::NONE, |probe, _| Value::Enum32(probe.state)),
];

static PROBE_TABLE: ObjectModelTable<Probe> = ObjectModelTable::new(PROBE_ENTRIES, &[1, 2]);

impl Describe for Probe {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&PROBE_TABLE
	}
}

pub(crate) struct Rig {
	pub(crate) flags: u32,
	pub(crate) grid: SharedArray<SharedArray<i32>>,
	pub(crate) heaters: SharedArray<Probe>,
	pub(crate) name: String,
	pub(crate) count: i32,
}

const RIG_ENTRIES: &[ObjectModelEntry<Rig>] = &[
	// 0: rig
	ObjectModelEntry::new("flags", EntryFlags::NONE, |rig, _| Value::Bitmap32(rig.flags)),
	ObjectModelEntry::new("grid", EntryFlags::NONE, |rig, _| Value::Array(&rig.grid)),
	ObjectModelEntry::new("heaters", EntryFlags::LIVE, |rig, _| Value::Array(&rig.heaters)),
	ObjectModelEntry::new("name", EntryFlags::VERBOSE, |rig, _| Value::String(&rig.name)),
	ObjectModelEntry::new("sub", EntryFlags::NONE, |rig, _| Value::Object(rig, 1)),
	// 1: rig.sub
	ObjectModelEntry::new("count", EntryFlags::LIVE, |rig, _| Value::Int32(rig.count)),
];

static RIG_TABLE: ObjectModelTable<Rig> = ObjectModelTable::new(RIG_ENTRIES, &[2, 5, 1]);

impl Describe for Rig {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&RIG_TABLE
	}
}

pub(crate) fn row(values: Vec<i32>) -> SharedArray<i32> {
	SharedArray::new(values, |value, _| Value::Int32(*value))
}

/// Two heaters reading 12.3 and 45.6, bitmap `0b101`, a 2x3 grid.
pub(crate) fn rig() -> Rig {
	Rig {
		flags: 0b101,
		grid: SharedArray::new(vec![row(vec![1, 2, 3]), row(vec![4, 5, 6])], |row, _| Value::Array(row)),
		heaters: SharedArray::objects(vec![
			Probe { state: 2, current: 12.3 },
			Probe { state: 0, current: 45.6 },
		]),
		name: "bench \"rig\"".to_owned(),
		count: 7,
	}
}

pub(crate) struct Cell {
	pub(crate) value: i32,
}

const CELL_ENTRIES: &[ObjectModelEntry<Cell>] = &[
	ObjectModelEntry::new("column", EntryFlags::NONE, |_, context| context.index(0).map_or(Value::Null, Value::Int32)),
	ObjectModelEntry::new("row", EntryFlags::NONE, |_, context| context.index(1).map_or(Value::Null, Value::Int32)),
	ObjectModelEntry::new("value", EntryFlags::NONE, |cell, _| Value::Int32(cell.value)),
];

static CELL_TABLE: ObjectModelTable<Cell> = ObjectModelTable::new(CELL_ENTRIES, &[1, 3]);

impl Describe for Cell {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&CELL_TABLE
	}
}

/// Rows of cells whose accessors read their own position from the index stack.
pub(crate) struct Board {
	pub(crate) cells: SharedArray<SharedArray<Cell>>,
	pub(crate) slots: SharedArray<u8>,
}

const BOARD_ENTRIES: &[ObjectModelEntry<Board>] = &[
	ObjectModelEntry::new("cells", EntryFlags::NONE, |board, _| Value::Array(&board.cells)),
	ObjectModelEntry::new("slots", EntryFlags::NONE, |board, _| Value::Array(&board.slots)),
];

static BOARD_TABLE: ObjectModelTable<Board> = ObjectModelTable::new(BOARD_ENTRIES, &[1, 2]);

impl Describe for Board {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&BOARD_TABLE
	}
}

/// 2x3 cells valued `10 * row + column`, and three slots reporting their index.
pub(crate) fn board() -> Board {
	let rows: Vec<SharedArray<Cell>> = (0..2)
		.map(|row| SharedArray::objects((0..3).map(|column| Cell { value: 10 * row + column }).collect()))
		.collect();
	Board {
		cells: SharedArray::new(rows, |row, _| Value::Array(row)),
		slots: SharedArray::new(vec![0; 3], |_, context| context.last_index().map_or(Value::Null, Value::Int32)),
	}
}
