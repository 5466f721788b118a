use std::path::PathBuf;

use objmodel::model::{ReportOptions, Result, report_to_string};

use crate::cmd::util::{load_machine, pretty_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, default_value = "")]
	pub filter: String,
	#[arg(long, default_value = "")]
	pub flags: String,
	#[arg(long)]
	pub length: bool,
	#[arg(long)]
	pub pretty: bool,
}

/// Serialize the part of a machine snapshot selected by `--filter`.
///
/// Anomalies in the filter render as `null`; the command only fails when the
/// snapshot cannot be loaded.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		filter,
		flags,
		length,
		pretty,
	} = args;

	let machine = load_machine(&path)?;
	let options = ReportOptions::from_letters(&flags, length);
	let text = report_to_string(&machine, &filter, &options)?;

	if pretty {
		println!("{}", pretty_json(&text)?);
	} else {
		println!("{text}");
	}

	Ok(())
}
