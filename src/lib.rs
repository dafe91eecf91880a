pub mod types;
pub mod counting;
pub mod stats;
pub mod output;
pub mod logging;

extern crate colored;
extern crate pad;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use counting::count_lines;
use output::{output_file_error, output_header, output_stats};
use stats::collect_stats;
use types::{Config, FileStats, OccurrenceMap, RunSummary};

/// Scan a single file and compute its duplication statistics.
/// The file is closed again before this returns.
pub fn analyze_file(path: &Path) -> io::Result<FileStats> {
  let file = File::open(path)?;
  let start = Instant::now();

  let mut occurrences = OccurrenceMap::new();
  let mut stats = FileStats::new(&path.to_string_lossy());
  stats.total_lines = count_lines(BufReader::new(file), &mut occurrences)?;
  collect_stats(&occurrences, &mut stats);
  stats.elapsed = start.elapsed();

  Ok(stats)
}

/// Run linedupe with the given configuration.
/// Files that cannot be opened or read are reported to `error_stream`
/// and skipped, all other files get one row in `output_stream`.
pub fn run<A: Write, E: Write>(
  config: Config,
  mut output_stream: A,
  mut error_stream: E,
) -> Result<RunSummary, Box<dyn Error>> {
  let mut summary = RunSummary::default();

  output_header(&mut output_stream)?;

  for path in &config.paths {
    log::trace!("Scanning {}", path.display());

    match analyze_file(path) {
      Ok(stats) => {
        output_stats(&stats, &mut output_stream)?;
        summary.processed += 1;
      }
      Err(error) => {
        output_file_error(
          &path.to_string_lossy(),
          &error,
          &mut error_stream,
        )?;
        summary.failed += 1;
      }
    }
  }

  Ok(summary)
}
