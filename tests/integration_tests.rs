use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

fn linedupe() -> Command {
  Command::new(env!("CARGO_BIN_EXE_linedupe"))
}

#[test]
fn it_prints_usage_without_arguments() {
  linedupe()
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn it_prints_usage_with_help_flag() {
  linedupe()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn it_prints_the_version() {
  linedupe()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::starts_with(format!(
      "linedupe {}",
      env!("CARGO_PKG_VERSION")
    )));
}

#[test]
fn it_reports_duplication_statistics() -> Result<(), Box<dyn Error>> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("letters.txt");
  fs::write(&path, "a\nb\na\nc\nb\na\n")?;

  linedupe()
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("     Lines      Dupes   Dupe %"))
    .stdout(predicate::str::contains(format!(
      "         6          3    50.0%        2  {}",
      path.display()
    )))
    .stderr(predicate::str::is_empty());
  Ok(())
}

#[test]
fn it_handles_an_empty_file() -> Result<(), Box<dyn Error>> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("empty.txt");
  fs::write(&path, "")?;

  linedupe()
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("     0.0%"));
  Ok(())
}

#[test]
fn it_skips_missing_files() -> Result<(), Box<dyn Error>> {
  let temp_dir = tempdir()?;
  let missing = temp_dir.path().join("missing.txt");
  let present = temp_dir.path().join("present.txt");
  fs::write(&present, "x\nx\nx\nx\nx\n")?;

  let output = linedupe().arg(&missing).arg(&present).output()?;

  assert!(output.status.success());
  let stdout = String::from_utf8(output.stdout)?;
  let stderr = String::from_utf8(output.stderr)?;
  assert_eq!(stdout.lines().count(), 2);
  assert!(stdout.contains("    80.0%"));
  assert!(!stdout.contains("missing.txt"));
  assert!(stderr.contains("missing.txt"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn it_skips_files_that_cannot_be_read() -> Result<(), Box<dyn Error>> {
  let temp_dir = tempdir()?;
  let sub_dir = temp_dir.path().join("sub");
  let file = temp_dir.path().join("f.txt");
  fs::create_dir(&sub_dir)?;
  fs::write(&file, "a\na\n")?;

  linedupe()
    .arg(&sub_dir)
    .arg(&file)
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
      "         2          1    50.0%        1  {}",
      file.display()
    )))
    .stderr(predicate::str::starts_with(format!(
      "{}: Is a directory",
      sub_dir.display()
    )));
  Ok(())
}

#[test]
fn it_keeps_the_order_of_the_arguments() -> Result<(), Box<dyn Error>> {
  let temp_dir = tempdir()?;
  let first = temp_dir.path().join("b_first.txt");
  let second = temp_dir.path().join("a_second.txt");
  fs::write(&first, "1\n")?;
  fs::write(&second, "2\n")?;

  let output = linedupe().arg(&first).arg(&second).output()?;
  let stdout = String::from_utf8(output.stdout)?;
  let rows: Vec<&str> = stdout.lines().skip(1).collect();

  assert_eq!(rows.len(), 2);
  assert!(rows[0].ends_with("b_first.txt"));
  assert!(rows[1].ends_with("a_second.txt"));
  Ok(())
}
