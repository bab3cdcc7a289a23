#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;
mod json;

#[derive(Parser)]
#[command(name = "crous", about = "CROUS frame inspection and conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the frame header and value statistics of a file.
	Info {
		path: PathBuf,
	},
	/// Decode a frame and render its value tree.
	Show {
		path: PathBuf,
		#[arg(long)]
		json: bool,
		#[arg(long)]
		max_depth: Option<u32>,
	},
	/// Encode a JSON document into a CROUS frame.
	Encode {
		path: PathBuf,
		#[arg(short, long)]
		out: PathBuf,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> crous::codec::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path } => cmd::info::run(path),
		Commands::Show { path, json, max_depth } => cmd::show::run(path, json, max_depth),
		Commands::Encode { path, out } => cmd::encode::run(path, out),
	}
}
