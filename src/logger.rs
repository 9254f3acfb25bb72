//! Best-effort error logging to error.log

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::BruteforgeError;
use crate::output::Console;

/// Fixed log file in the working directory
pub const ERROR_LOG: &str = "error.log";

/// Append a timestamped entry for a fatal error.
///
/// Failure to open or write the log is reported to the console and
/// otherwise ignored; logging never aborts the run on its own.
pub fn log_error(err: &BruteforgeError, console: Console) {
    if let Err(e) = append_entry(Path::new(ERROR_LOG), &err.to_string()) {
        tracing::warn!(error = %e, "Could not write to error log");
        console.say(&format!("Error opening error log file: {}", e));
    }
}

fn append_entry(path: &Path, message: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(file, "{}: {}", timestamp, message)
}
