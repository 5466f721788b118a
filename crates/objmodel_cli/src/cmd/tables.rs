use objmodel::machine::{Axis, Heater, Interface, Machine, Network};
use objmodel::model::{Describe, EntryFlags, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long = "type", value_enum)]
	pub kind: Option<TableKind>,
}

/// Published types with schema tables.
#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TableKind {
	Machine,
	Heater,
	Axis,
	Network,
	Interface,
}

const ALL_KINDS: [TableKind; 5] = [TableKind::Machine, TableKind::Heater, TableKind::Axis, TableKind::Network, TableKind::Interface];

/// Verify and list schema tables, level by level.
pub fn run(args: Args) -> Result<()> {
	let Args { kind } = args;

	let mut tables = Vec::new();
	for candidate in ALL_KINDS {
		if kind.is_some_and(|kind| kind != candidate) {
			continue;
		}
		tables.push(match candidate {
			TableKind::Machine => table_json::<Machine>("Machine")?,
			TableKind::Heater => table_json::<Heater>("Heater")?,
			TableKind::Axis => table_json::<Axis>("Axis")?,
			TableKind::Network => table_json::<Network>("Network")?,
			TableKind::Interface => table_json::<Interface>("Interface")?,
		});
	}

	emit_json(&TablesJson { tables })
}

fn table_json<T: Describe>(type_name: &'static str) -> Result<TableJson> {
	let table = T::object_model_table();
	table.verify(type_name)?;

	let levels = (0..table.group_count())
		.filter_map(|level| u8::try_from(level).ok())
		.filter_map(|level| table.group(level).map(|group| (level, group)))
		.map(|(level, group)| LevelJson {
			level,
			entries: group
				.iter()
				.map(|entry| EntryJson {
					name: entry.name,
					live: entry.flags.contains(EntryFlags::LIVE),
					verbose: entry.flags.contains(EntryFlags::VERBOSE),
				})
				.collect(),
		})
		.collect();

	Ok(TableJson {
		type_name,
		levels,
	})
}

#[derive(serde::Serialize)]
struct TablesJson {
	tables: Vec<TableJson>,
}

#[derive(serde::Serialize)]
struct TableJson {
	#[serde(rename = "type")]
	type_name: &'static str,
	levels: Vec<LevelJson>,
}

#[derive(serde::Serialize)]
struct LevelJson {
	level: u8,
	entries: Vec<EntryJson>,
}

#[derive(serde::Serialize)]
struct EntryJson {
	name: &'static str,
	live: bool,
	verbose: bool,
}
