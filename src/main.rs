extern crate clap;
extern crate linedupe;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};

use linedupe::logging::init_logging;
use linedupe::run;
use linedupe::types::Config;

/// Count duplicate lines in text files
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
  /// Files to scan for duplicate lines
  files: Vec<PathBuf>,
}

fn main() {
  let cli = Cli::parse();

  if let Err(error) = init_logging() {
    eprintln!("Could not initialize logging: {error}");
  }

  if cli.files.is_empty() {
    if let Err(error) = Cli::command().print_help() {
      eprintln!("ERROR:\n{error}");
      process::exit(1);
    }
    return;
  }

  let config = Config { paths: cli.files };
  match run(config, io::stdout(), io::stderr()) {
    Ok(summary) => log::debug!(
      "Processed {} file(s), {} failed",
      summary.processed,
      summary.failed
    ),
    Err(error) => {
      eprintln!("ERROR:\n{error}");
      process::exit(1);
    }
  }
}
