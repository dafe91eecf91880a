use crate::types::{FileStats, OccurrenceMap};

/// Aggregate the duplicated lines of `occurrences` into `stats`.
/// Lines that occur only once are ignored.
pub fn collect_stats(occurrences: &OccurrenceMap, stats: &mut FileStats) {
  for (line, &count) in occurrences {
    if count <= 1 {
      continue;
    }

    let length = line.len();

    stats.duplicate_lines += 1;
    stats.excess_duplicates += count - 1;
    stats.max_duplicates = stats.max_duplicates.max(count - 1);
    stats.length_sum += length;
    stats.min_length =
      Some(stats.min_length.map_or(length, |min| min.min(length)));
    stats.max_length =
      Some(stats.max_length.map_or(length, |max| max.max(length)));
  }
}
