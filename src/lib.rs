//! Bruteforge - brute-force combination generation for domain templates
//!
//! Enumerates every fixed-length string over a charset and substitutes each
//! into the `[here]` placeholder of one or more domain templates.

pub mod cli;
pub mod domains;
pub mod error;
pub mod generator;
pub mod logger;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{BruteforgeError, Result};
pub use generator::CombinationGenerator;
pub use types::{Charset, Config, DomainSpec, OutputTarget, PLACEHOLDER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
