//! Diagnostic logging through the `log` facade with an `env_logger` backend.
//!
//! Only warnings and errors are shown by default.
//! Setting `RUST_LOG=debug` additionally reports the processing time
//! and the duplicate line length metrics of every file.

use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

/// Install the global logger. Must be called at most once per process.
pub fn init_logging() -> Result<(), SetLoggerError> {
  let mut builder = Builder::new();
  builder.filter_level(LevelFilter::Warn).parse_default_env();

  builder.format(|buf, record| {
    let level = record.level();
    let level_style = buf.default_level_style(level);
    writeln!(
      buf,
      "{level_style}{:<5}{level_style:#} {}",
      level,
      record.args()
    )
  });

  builder.try_init()
}
