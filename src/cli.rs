//! Command-line argument resolution
//!
//! The flag surface uses single-dash multi-character flags (`-ad`, `-silent`),
//! so arguments are resolved with a plain token loop over `std::env::args`.

use std::path::PathBuf;

use crate::error::{BruteforgeError, Result};
use crate::types::{Charset, Config, DomainSpec, OutputTarget, DEFAULT_LENGTH, DEFAULT_OUTPUT};

/// Usage text printed on missing or unknown flags
pub fn usage_text() -> String {
    [
        "Usage:",
        "  -a   Generate alphabetic combinations",
        "  -ad  Generate alphabetic and numeric combinations",
        "  -l   Length of combinations (default: 6)",
        "  -d   Single domain with placeholder",
        "  -f   File containing list of domains with placeholders",
        "  -o   Output file name (default: output.txt)",
        "  -silent  Run program in silent mode",
    ]
    .join("\n")
}

/// Whether the token stream enables silent mode.
///
/// Walks the tokens the same way the resolver does, skipping values bound
/// to value-taking flags, so `-d -silent` is a domain literal rather than
/// the silence flag. Needed before parsing so that silence also covers
/// flag validation errors.
pub fn silent_requested(tokens: &[String]) -> bool {
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        match token.as_str() {
            "-silent" => return true,
            "-l" | "-d" | "-f" | "-o" => {
                iter.next();
            }
            _ => {}
        }
    }
    false
}

/// Resolve raw command-line tokens (without the program name) into a Config
pub fn parse_args<I, S>(tokens: I) -> Result<Config>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut alphabetic = false;
    let mut alphanumeric = false;
    let mut length_raw: Option<String> = None;
    let mut domain: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut output: Option<String> = None;
    let mut silent = false;

    let mut iter = tokens.into_iter().map(Into::into);
    while let Some(token) = iter.next() {
        match token.as_str() {
            "-a" => alphabetic = true,
            "-ad" => alphanumeric = true,
            "-silent" => silent = true,
            "-l" => length_raw = Some(value_for(&mut iter, "-l")?),
            "-d" => domain = Some(value_for(&mut iter, "-d")?),
            "-f" => file = Some(PathBuf::from(value_for(&mut iter, "-f")?)),
            "-o" => output = Some(value_for(&mut iter, "-o")?),
            other => {
                return Err(BruteforgeError::usage(format!(
                    "unknown flag: {}\n{}",
                    other,
                    usage_text()
                )));
            }
        }
    }

    if !alphabetic && !alphanumeric {
        return Err(BruteforgeError::usage(usage_text()));
    }

    if domain.is_none() && file.is_none() {
        return Err(BruteforgeError::usage(
            "You must specify either a single domain (-d) or a file containing domains (-f)",
        ));
    }

    let length = match length_raw {
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n > 0 => n as usize,
            _ => return Err(BruteforgeError::invalid_length(raw)),
        },
        None => DEFAULT_LENGTH,
    };

    // Alphanumeric wins when both mode flags are set
    let charset = if alphanumeric {
        Charset::Alphanumeric
    } else {
        Charset::Letters
    };

    // The file flag wins when both domain sources are given
    let domains = match file {
        Some(path) => DomainSpec::File(path),
        None => DomainSpec::Literal(domain.unwrap_or_default()),
    };

    // An explicitly empty output name routes lines to the console
    let output = match output.as_deref() {
        Some("") => OutputTarget::Console,
        Some(path) => OutputTarget::File(PathBuf::from(path)),
        None => OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT)),
    };

    Ok(Config {
        charset,
        length,
        domains,
        output,
        silent,
    })
}

fn value_for(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    iter.next().ok_or_else(|| {
        BruteforgeError::usage(format!("flag {} requires a value\n{}", flag, usage_text()))
    })
}
