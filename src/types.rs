//! Core types and structures for bruteforge

use std::path::PathBuf;

/// The literal token inside a domain template that each combination replaces
pub const PLACEHOLDER: &str = "[here]";

/// Default length of generated combinations
pub const DEFAULT_LENGTH: usize = 6;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Character set for combination generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Only lowercase letters (a-z)
    Letters,
    /// Letters and digits (a-z, 0-9)
    Alphanumeric,
}

impl Default for Charset {
    fn default() -> Self {
        Self::Letters
    }
}

impl Charset {
    pub fn chars(&self) -> &'static [char] {
        match self {
            Charset::Letters => &[
                'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
                'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
            ],
            Charset::Alphanumeric => &[
                'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
                'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
                '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
            ],
        }
    }

    /// Size of the combination space, saturating at u64::MAX when the
    /// space does not fit
    pub fn total_combinations(&self, length: usize) -> u64 {
        u32::try_from(length)
            .ok()
            .and_then(|exp| (self.chars().len() as u64).checked_pow(exp))
            .unwrap_or(u64::MAX)
    }
}

/// Where domain templates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSpec {
    /// A single template given on the command line
    Literal(String),
    /// A file with one template per line
    File(PathBuf),
}

/// Where substituted lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append to a file, creating it if absent
    File(PathBuf),
    /// Write to standard output
    Console,
}

/// Resolved run configuration, immutable once parsed
#[derive(Debug, Clone)]
pub struct Config {
    pub charset: Charset,
    pub length: usize,
    pub domains: DomainSpec,
    pub output: OutputTarget,
    pub silent: bool,
}
