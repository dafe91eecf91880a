use colored::Colorize;
use pad::{Alignment, PadStr};
use std::error::Error;
use std::fmt::Display;
use std::io::Write;

use crate::types::FileStats;

const COUNT_WIDTH: usize = 10;
const PERCENT_WIDTH: usize = 8;
const MAX_WIDTH: usize = 8;

fn column(value: impl Display, width: usize) -> String {
  value
    .to_string()
    .pad_to_width_with_alignment(width, Alignment::Right)
}

/// Format the header row of the statistics table.
pub fn format_header() -> String {
  format!(
    "{} {} {} {}  {}",
    column("Lines", COUNT_WIDTH),
    column("Dupes", COUNT_WIDTH),
    column("Dupe %", PERCENT_WIDTH),
    column("Max", MAX_WIDTH),
    "File",
  )
}

/// Format the statistics of a single file as one table row.
///
/// # Examples
///
/// ```rust
/// use linedupe::output::format_stats_row;
/// use linedupe::types::FileStats;
///
/// let stats = FileStats {
///   total_lines: 6,
///   excess_duplicates: 3,
///   max_duplicates: 2,
///   ..FileStats::new("notes.txt")
/// };
///
/// assert_eq!(
///   format_stats_row(&stats),
///   "         6          3    50.0%        2  notes.txt",
/// );
/// ```
pub fn format_stats_row(stats: &FileStats) -> String {
  format!(
    "{} {} {} {}  {}",
    column(stats.total_lines, COUNT_WIDTH),
    column(stats.excess_duplicates, COUNT_WIDTH),
    column(format!("{:.1}%", stats.duplication_percentage()), PERCENT_WIDTH),
    column(stats.max_duplicates, MAX_WIDTH),
    stats.name,
  )
}

/// Write the table header to the specified stream
pub fn output_header<A: Write>(
  mut output_stream: A,
) -> Result<(), Box<dyn Error>> {
  writeln!(&mut output_stream, "{}", format_header().bold())?;
  Ok(())
}

/// Write the statistics row of a file to the specified stream
/// and log the detailed duplicate line metrics.
pub fn output_stats<A: Write>(
  stats: &FileStats,
  mut output_stream: A,
) -> Result<(), Box<dyn Error>> {
  writeln!(&mut output_stream, "{}", format_stats_row(stats))?;

  log::debug!(
    "{}: {} lines in {:?}",
    stats.name,
    stats.total_lines,
    stats.elapsed
  );
  if let (Some(min), Some(max)) = (stats.min_length, stats.max_length) {
    let mean = stats
      .mean_duplicate_length()
      .map_or_else(|| "n/a".to_string(), |mean| format!("{:.2}", mean));
    log::debug!(
      "{}: duplicate line length min {} / max {} / mean {} bytes",
      stats.name,
      min,
      max,
      mean
    );
  }

  Ok(())
}

/// Report a file that could not be processed to the diagnostic stream
pub fn output_file_error<A: Write>(
  name: &str,
  error: &dyn Error,
  mut error_stream: A,
) -> Result<(), Box<dyn Error>> {
  writeln!(&mut error_stream, "{}: {}", name, error)?;
  Ok(())
}
