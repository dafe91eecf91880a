use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Maps the exact content of a line (without its line ending)
/// to the number of times it occurs in a file.
pub type OccurrenceMap = HashMap<Vec<u8>, usize>;

pub struct Config {
  /// Files to scan, in the order they were given on the command line
  pub paths: Vec<PathBuf>,
}

/// Duplication statistics of a single file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStats {
  pub name: String,
  pub total_lines: usize,
  /// Number of distinct lines that occur more than once
  pub duplicate_lines: usize,
  /// Occurrences of duplicated lines beyond their first one
  pub excess_duplicates: usize,
  /// Highest number of extra copies of any single line
  pub max_duplicates: usize,
  /// Byte length of the shortest duplicated line
  pub min_length: Option<usize>,
  /// Byte length of the longest duplicated line
  pub max_length: Option<usize>,
  pub length_sum: usize,
  pub elapsed: Duration,
}

impl FileStats {
  pub fn new(name: &str) -> FileStats {
    FileStats {
      name: name.to_string(),
      ..Default::default()
    }
  }

  /// Share of all lines that are extra copies, in percent.
  /// Files without any lines report 0 %.
  pub fn duplication_percentage(&self) -> f64 {
    if self.total_lines == 0 {
      return 0.0;
    }
    (self.excess_duplicates as f64 / self.total_lines as f64) * 100.0
  }

  /// Mean byte length of the duplicated lines,
  /// or `None` if no line is duplicated.
  pub fn mean_duplicate_length(&self) -> Option<f64> {
    if self.duplicate_lines == 0 {
      return None;
    }
    Some(self.length_sum as f64 / self.duplicate_lines as f64)
  }
}

/// Outcome of a whole run over all given paths.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub processed: usize,
  pub failed: usize,
}
