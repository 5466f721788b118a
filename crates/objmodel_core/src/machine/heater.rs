use serde::Deserialize;

use crate::model::{Describe, EntryFlags, ObjectModelEntry, ObjectModelTable, Value};

/// Heater status as reported to the web interface. Ordinals are part of the protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaterStatus {
	/// Switched off.
	#[default]
	Off = 0,
	/// Holding the standby temperature.
	Standby = 1,
	/// Holding the active temperature.
	Active = 2,
	/// Fault detected, heater disabled.
	Fault = 3,
	/// Auto-tune in progress.
	Tuning = 4,
	/// Remote heater not responding.
	Offline = 5,
}

impl HeaterStatus {
	/// Wire ordinal.
	pub fn ordinal(self) -> u32 {
		self as u32
	}
}

/// First-order process model used by the heater controller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaterModel {
	/// Seconds between a power change and the first temperature response.
	pub dead_time: f32,
	/// Whether closed-loop control is enabled.
	pub enabled: bool,
	/// Degrees gained at full power.
	pub gain: f32,
	/// Maximum PWM fraction.
	pub max_pwm: f32,
	/// Seconds to reach 63% of the final temperature.
	pub time_constant: f32,
}

impl Default for HeaterModel {
	fn default() -> Self {
		Self {
			dead_time: 5.5,
			enabled: true,
			gain: 340.0,
			max_pwm: 1.0,
			time_constant: 140.0,
		}
	}
}

/// One heater channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Heater {
	/// Active setpoint.
	pub active: f32,
	/// Standby setpoint.
	pub standby: f32,
	/// Last measured temperature.
	pub current: f32,
	/// Sensor number, `-1` when unassigned.
	pub sensor: i32,
	/// Controller status.
	pub state: HeaterStatus,
	/// Process model.
	pub model: HeaterModel,
}

impl Default for Heater {
	fn default() -> Self {
		Self {
			active: 0.0,
			standby: 0.0,
			current: 0.0,
			sensor: -1,
			state: HeaterStatus::Off,
			model: HeaterModel::default(),
		}
	}
}

const HEATER_ENTRIES: &[ObjectModelEntry<Heater>] = &[
	// 0: heater
	ObjectModelEntry::new("active", EntryFlags::NONE, |heater, _| Value::Float(heater.active, 1)),
	ObjectModelEntry::new("current", EntryFlags::LIVE, |heater, _| Value::Float(heater.current, 1)),
	ObjectModelEntry::new("model", EntryFlags::NONE, |heater, _| Value::Object(heater, 1)),
	ObjectModelEntry::new("number", EntryFlags::NONE, |_, context| context.last_index().map_or(Value::Null, Value::Int32)),
	ObjectModelEntry::new("sensor", EntryFlags::NONE, |heater, _| Value::Int32(heater.sensor)),
	ObjectModelEntry::new("standby", EntryFlags::NONE, |heater, _| Value::Float(heater.standby, 1)),
	ObjectModelEntry::new("state", EntryFlags::LIVE, |heater, _| Value::Enum32(heater.state.ordinal())),
	// 1: heater.model
	ObjectModelEntry::new("deadTime", EntryFlags::NONE, |heater, _| Value::Float(heater.model.dead_time, 1)),
	ObjectModelEntry::new("enabled", EntryFlags::NONE, |heater, _| Value::Bool(heater.model.enabled)),
	ObjectModelEntry::new("gain", EntryFlags::NONE, |heater, _| Value::Float(heater.model.gain, 1)),
	ObjectModelEntry::new("maxPwm", EntryFlags::NONE, |heater, _| Value::Float(heater.model.max_pwm, 2)),
	ObjectModelEntry::new("timeConstant", EntryFlags::NONE, |heater, _| Value::Float(heater.model.time_constant, 1)),
];

static HEATER_TABLE: ObjectModelTable<Heater> = ObjectModelTable::new(HEATER_ENTRIES, &[2, 7, 5]);

impl Describe for Heater {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&HEATER_TABLE
	}
}
