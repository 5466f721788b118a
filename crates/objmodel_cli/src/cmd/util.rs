use std::path::Path;

use objmodel::machine::{Machine, MachineConfig};
use objmodel::model::Result;

/// Load and validate a machine snapshot.
pub(crate) fn load_machine(path: &Path) -> Result<Machine> {
	let config = MachineConfig::open(path)?;
	let machine = Machine::from_config(config)?;
	log::info!("loaded {}", path.display());
	Ok(machine)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Re-indent already serialized JSON text.
pub(crate) fn pretty_json(text: &str) -> Result<String> {
	let value: serde_json::Value = serde_json::from_str(text)?;
	Ok(serde_json::to_string_pretty(&value)?)
}
