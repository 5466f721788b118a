use std::fs;
use std::path::Path;

use chrono::DateTime;
use serde::Deserialize;

use crate::machine::{Axis, Heater, Interface, Machine, MachineState, Network};
use crate::model::{DATE_TIME_BITS, ModelError, Result, SharedArray, Value};

const MACHINE_MODES: [&str; 3] = ["FFF", "CNC", "Laser"];

/// Machine snapshot as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConfig {
	/// Heater channels.
	pub heaters: Vec<Heater>,
	/// Heater number per bed zone, `-1` for unused.
	pub bed_heaters: Vec<i32>,
	/// Minimum extrusion temperature.
	pub cold_extrude_temperature: f32,
	/// Motion axes.
	pub axes: Vec<AxisConfig>,
	/// Speed override fraction.
	pub speed_factor: f32,
	/// Network settings.
	pub network: NetworkConfig,
	/// Machine-wide status.
	pub state: StateConfig,
}

impl Default for MachineConfig {
	fn default() -> Self {
		Self {
			heaters: Vec::new(),
			bed_heaters: Vec::new(),
			cold_extrude_temperature: 160.0,
			axes: Vec::new(),
			speed_factor: 1.0,
			network: NetworkConfig::default(),
			state: StateConfig::default(),
		}
	}
}

/// One axis as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisConfig {
	/// Axis letter.
	pub letter: char,
	/// Homed flag.
	pub homed: bool,
	/// Commanded machine position.
	pub machine_position: f32,
	/// Lower travel limit.
	pub min: f32,
	/// Upper travel limit.
	pub max: f32,
	/// Driver numbers.
	pub drivers: Vec<u32>,
}

impl Default for AxisConfig {
	fn default() -> Self {
		Self {
			letter: 'X',
			homed: false,
			machine_position: 0.0,
			min: 0.0,
			max: 200.0,
			drivers: Vec::new(),
		}
	}
}

/// Network settings as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
	/// Announced host name.
	pub hostname: String,
	/// Interfaces.
	pub interfaces: Vec<Interface>,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			hostname: "duet".to_owned(),
			interfaces: Vec::new(),
		}
	}
}

/// Machine-wide status as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateConfig {
	/// Selected tool, `-1` for none.
	pub current_tool: i32,
	/// `FFF`, `CNC`, or `Laser`.
	pub machine_mode: String,
	/// Coarse status label.
	pub status: String,
	/// RFC 3339 wall-clock time, absent when the clock is unset.
	pub time: Option<String>,
	/// Seconds since power-up.
	pub up_time: u32,
}

impl Default for StateConfig {
	fn default() -> Self {
		Self {
			current_tool: -1,
			machine_mode: "FFF".to_owned(),
			status: "idle".to_owned(),
			time: None,
			up_time: 0,
		}
	}
}

impl MachineConfig {
	/// Read a JSON snapshot file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path)?;
		log::debug!("loading snapshot {} ({} bytes)", path.display(), text.len());
		Self::from_json_str(&text)
	}

	/// Parse snapshot JSON text.
	pub fn from_json_str(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Reject snapshots the firmware could never have produced.
	pub fn validate(&self) -> Result<()> {
		for (number, heater) in self.heaters.iter().enumerate() {
			if ![heater.active, heater.standby, heater.current].iter().all(|value| value.is_finite()) {
				return Err(invalid(format!("heater {number}: temperatures must be finite")));
			}
			if heater.sensor < -1 {
				return Err(invalid(format!("heater {number}: sensor {} out of range", heater.sensor)));
			}
			if !(heater.model.max_pwm > 0.0 && heater.model.max_pwm <= 1.0) {
				return Err(invalid(format!("heater {number}: maxPwm {} outside (0, 1]", heater.model.max_pwm)));
			}
		}

		for (zone, heater) in self.bed_heaters.iter().enumerate() {
			let in_range = usize::try_from(*heater).is_ok_and(|heater| heater < self.heaters.len());
			if *heater != -1 && !in_range {
				return Err(invalid(format!("bed zone {zone}: heater {heater} does not exist")));
			}
		}

		if self.axes.len() > 32 {
			return Err(invalid(format!("{} axes exceed the homed bitmap", self.axes.len())));
		}
		for (index, axis) in self.axes.iter().enumerate() {
			if !axis.letter.is_ascii_uppercase() {
				return Err(invalid(format!("axis {index}: letter '{}' must be A-Z", axis.letter)));
			}
			if self.axes[..index].iter().any(|other| other.letter == axis.letter) {
				return Err(invalid(format!("axis {index}: duplicate letter '{}'", axis.letter)));
			}
			if axis.min > axis.max {
				return Err(invalid(format!("axis {}: min {} above max {}", axis.letter, axis.min, axis.max)));
			}
		}

		if !MACHINE_MODES.contains(&self.state.machine_mode.as_str()) {
			return Err(invalid(format!("unknown machine mode '{}'", self.state.machine_mode)));
		}
		self.state.unix_time()?;

		Ok(())
	}

	pub(crate) fn into_machine(self) -> Result<Machine> {
		self.validate()?;
		if cfg!(debug_assertions) {
			Machine::verify_tables()?;
		}

		let time = self.state.unix_time()?;
		let axes = self
			.axes
			.into_iter()
			.map(|config| Axis {
				homed: config.homed,
				machine_position: config.machine_position,
				..Axis::new(config.letter, config.min, config.max, config.drivers)
			})
			.collect();

		Ok(Machine {
			heaters: SharedArray::objects(self.heaters),
			bed_heaters: SharedArray::new(self.bed_heaters, |heater, _| Value::Int32(*heater)),
			cold_extrude_temperature: self.cold_extrude_temperature,
			axes: SharedArray::objects(axes),
			speed_factor: self.speed_factor,
			network: Network::new(self.network.hostname, self.network.interfaces),
			state: MachineState {
				current_tool: self.state.current_tool,
				machine_mode: self.state.machine_mode,
				status: self.state.status,
				time,
				up_time: self.state.up_time,
			},
		})
	}
}

impl StateConfig {
	/// Wall-clock time as Unix seconds, 0 when unset.
	pub fn unix_time(&self) -> Result<u64> {
		let Some(text) = &self.time else {
			return Ok(0);
		};

		let parsed = DateTime::parse_from_rfc3339(text).map_err(|err| invalid(format!("time '{text}': {err}")))?;
		u64::try_from(parsed.timestamp())
			.ok()
			.filter(|seconds| *seconds != 0 && *seconds >> DATE_TIME_BITS == 0)
			.ok_or_else(|| invalid(format!("time '{text}' outside the representable range")))
	}
}

fn invalid(reason: String) -> ModelError {
	ModelError::InvalidSnapshot { reason }
}
