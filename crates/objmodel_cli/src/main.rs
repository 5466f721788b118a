#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "objmodel", about = "Machine object model reports and selector evaluation")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Report(cmd::report::Args),
	Eval(cmd::eval::Args),
	Tables(cmd::tables::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> objmodel::model::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Report(args) => cmd::report::run(args),
		Commands::Eval(args) => cmd::eval::run(args),
		Commands::Tables(args) => cmd::tables::run(args),
	}
}
