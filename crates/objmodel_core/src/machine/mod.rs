mod config;
mod heater;
mod motion;
mod network;

/// Snapshot configuration types and loader.
pub use config::{AxisConfig, MachineConfig, NetworkConfig, StateConfig};
/// Heater subsystem.
pub use heater::{Heater, HeaterModel, HeaterStatus};
/// Motion subsystem.
pub use motion::{Axis, homed_bitmap};
/// Network subsystem.
pub use network::{Interface, Network, pack_ipv4};

use crate::model::{Describe, EntryFlags, ObjectModelEntry, ObjectModelTable, Result, SharedArray, Value};

/// Machine-wide status fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineState {
	/// Selected tool, `-1` for none.
	pub current_tool: i32,
	/// `FFF`, `CNC`, or `Laser`.
	pub machine_mode: String,
	/// Coarse machine status, e.g. `idle`.
	pub status: String,
	/// Wall-clock time in Unix seconds, 0 when unset.
	pub time: u64,
	/// Seconds since power-up.
	pub up_time: u32,
}

/// Root of the object model.
pub struct Machine {
	/// Heater channels.
	pub heaters: SharedArray<Heater>,
	/// Heater numbers driving bed zones, `-1` for unused zones.
	pub bed_heaters: SharedArray<i32>,
	/// Minimum temperature for extrusion.
	pub cold_extrude_temperature: f32,
	/// Motion axes.
	pub axes: SharedArray<Axis>,
	/// Speed override fraction.
	pub speed_factor: f32,
	/// Network subsystem.
	pub network: Network,
	/// Machine-wide status.
	pub state: MachineState,
}

impl Machine {
	/// Build a machine from parsed configuration, validating it first.
	pub fn from_config(config: MachineConfig) -> Result<Self> {
		config.into_machine()
	}

	/// Bitmap of homed axes read under the axes guard.
	pub fn axes_homed(&self) -> u32 {
		homed_bitmap(&self.axes.items())
	}

	/// Check every shipped schema table.
	pub fn verify_tables() -> Result<()> {
		Machine::object_model_table().verify("Machine")?;
		Heater::object_model_table().verify("Heater")?;
		Axis::object_model_table().verify("Axis")?;
		Network::object_model_table().verify("Network")?;
		Interface::object_model_table().verify("Interface")
	}
}

const MACHINE_ENTRIES: &[ObjectModelEntry<Machine>] = &[
	// 0: root
	ObjectModelEntry::new("heat", EntryFlags::LIVE, |machine, _| Value::Object(machine, 1)),
	ObjectModelEntry::new("move", EntryFlags::LIVE, |machine, _| Value::Object(machine, 3)),
	ObjectModelEntry::new("network", EntryFlags::NONE, |machine, _| Value::object(&machine.network)),
	ObjectModelEntry::new("state", EntryFlags::LIVE, |machine, _| Value::Object(machine, 2)),
	// 1: heat
	ObjectModelEntry::new("bedHeaters", EntryFlags::NONE, |machine, _| Value::Array(&machine.bed_heaters)),
	ObjectModelEntry::new("coldExtrudeTemperature", EntryFlags::VERBOSE, |machine, _| Value::Float(machine.cold_extrude_temperature, 1)),
	ObjectModelEntry::new("heaters", EntryFlags::LIVE, |machine, _| Value::Array(&machine.heaters)),
	// 2: state
	ObjectModelEntry::new("currentTool", EntryFlags::LIVE, |machine, _| Value::Int32(machine.state.current_tool)),
	ObjectModelEntry::new("machineMode", EntryFlags::NONE, |machine, _| Value::String(&machine.state.machine_mode)),
	ObjectModelEntry::new("status", EntryFlags::LIVE, |machine, _| Value::String(&machine.state.status)),
	ObjectModelEntry::new("time", EntryFlags::LIVE, |machine, _| Value::date_time(machine.state.time)),
	ObjectModelEntry::new("upTime", EntryFlags::LIVE, |machine, _| Value::UInt32(machine.state.up_time)),
	// 3: move
	ObjectModelEntry::new("axes", EntryFlags::LIVE, |machine, _| Value::Array(&machine.axes)),
	ObjectModelEntry::new("axesHomed", EntryFlags::LIVE, |machine, _| Value::Bitmap32(machine.axes_homed())),
	ObjectModelEntry::new("speedFactor", EntryFlags::NONE, |machine, _| Value::Float(machine.speed_factor, 2)),
];

static MACHINE_TABLE: ObjectModelTable<Machine> = ObjectModelTable::new(MACHINE_ENTRIES, &[4, 4, 3, 5, 3]);

impl Describe for Machine {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&MACHINE_TABLE
	}
}
