//! Output routing
//!
//! Silent mode is an explicit sink selected once at startup rather than a
//! process-wide redirection of the standard streams. Everything user-facing
//! (usage text, error reports, console-target output lines) goes through
//! `Console`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{BruteforgeError, Result};
use crate::types::OutputTarget;

/// Console sink, real or null
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    Null,
}

impl Console {
    pub fn new(silent: bool) -> Self {
        if silent {
            Console::Null
        } else {
            Console::Stdout
        }
    }

    /// Print one line to the console, or swallow it in silent mode
    pub fn say(&self, text: &str) {
        if let Console::Stdout = self {
            println!("{}", text);
        }
    }
}

#[derive(Debug)]
enum Sink {
    File { path: PathBuf, file: File },
    Console(Console),
}

/// Writer for substituted output lines
#[derive(Debug)]
pub struct OutputWriter {
    sink: Sink,
}

impl OutputWriter {
    /// Open the writer for a target.
    ///
    /// File targets are opened in append mode and created if absent; the
    /// handle is held for the whole run, which leaves file contents and
    /// ordering identical to an open-per-line scheme.
    pub fn open(target: &OutputTarget, console: Console) -> Result<Self> {
        let sink = match target {
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        BruteforgeError::output_open(
                            e.to_string(),
                            Some(path.to_string_lossy().to_string()),
                        )
                    })?;
                Sink::File {
                    path: path.clone(),
                    file,
                }
            }
            OutputTarget::Console => Sink::Console(console),
        };
        Ok(Self { sink })
    }

    /// Emit one output line, newline-terminated
    pub fn emit(&mut self, line: &str) -> Result<()> {
        match &mut self.sink {
            Sink::File { path, file } => writeln!(file, "{}", line).map_err(|e| {
                BruteforgeError::output_write(
                    e.to_string(),
                    Some(path.to_string_lossy().to_string()),
                )
            }),
            Sink::Console(console) => {
                console.say(line);
                Ok(())
            }
        }
    }
}
