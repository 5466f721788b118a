use std::path::PathBuf;

use objmodel::model::{ReportFlags, Result, evaluate};
use serde_json::value::RawValue;

use crate::cmd::util::{emit_json, load_machine};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	pub selector: String,
	#[arg(long = "index", allow_hyphen_values = true)]
	pub indices: Vec<i32>,
	#[arg(long, default_value = "")]
	pub flags: String,
}

/// Evaluate one selector strictly, failing on any anomaly.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		selector,
		indices,
		flags,
	} = args;

	let machine = load_machine(&path)?;
	let value = evaluate(&machine, &selector, &indices)?;
	let rendered = value.to_json(ReportFlags::parse(&flags).short_form);

	let payload = EvalJson {
		selector,
		indices,
		kind: value.as_value().kind(),
		value: RawValue::from_string(rendered)?,
	};
	emit_json(&payload)
}

#[derive(serde::Serialize)]
struct EvalJson {
	selector: String,
	indices: Vec<i32>,
	kind: &'static str,
	value: Box<RawValue>,
}
