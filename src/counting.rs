use crate::types::OccurrenceMap;
use std::io::{self, BufRead};

/// Count every line of `reader` into `occurrences`
/// and return the total number of lines read.
///
/// Lines are split at `\n` and a trailing `\r` is dropped,
/// also on a last line without `\n`.
/// That last line is counted as well.
/// Content is compared byte by byte, so the input does not need to be UTF-8.
///
/// # Examples
///
/// ```rust
/// use linedupe::counting::count_lines;
/// use linedupe::types::OccurrenceMap;
///
/// let mut occurrences = OccurrenceMap::new();
/// let total = count_lines("a\nb\na".as_bytes(), &mut occurrences).unwrap();
///
/// assert_eq!(total, 3);
/// assert_eq!(occurrences[&b"a".to_vec()], 2);
/// assert_eq!(occurrences[&b"b".to_vec()], 1);
/// ```
pub fn count_lines<R: BufRead>(
  mut reader: R,
  occurrences: &mut OccurrenceMap,
) -> io::Result<usize> {
  let mut total = 0;
  let mut buffer = Vec::new();

  loop {
    buffer.clear();
    if reader.read_until(b'\n', &mut buffer)? == 0 {
      break;
    }

    if buffer.last() == Some(&b'\n') {
      buffer.pop();
    }
    if buffer.last() == Some(&b'\r') {
      buffer.pop();
    }

    total += 1;
    if let Some(count) = occurrences.get_mut(&buffer) {
      *count += 1;
    } else {
      occurrences.insert(buffer.clone(), 1);
    }
  }

  Ok(total)
}
