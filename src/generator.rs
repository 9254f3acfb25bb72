//! Combination generator
//!
//! Enumerates every fixed-length string over a charset in the lexicographic
//! order induced by the charset ordering. The generator is an odometer over
//! char indices, rightmost position fastest, which emits the same sequence
//! as the recursive prefix-extension form and never needs the size of the
//! combination space up front (26^14 already exceeds u64).

use crate::error::Result;
use crate::types::Charset;

/// Generator for fixed-length combinations over a charset
#[derive(Debug)]
pub struct CombinationGenerator {
    charset: Charset,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl CombinationGenerator {
    /// Create a new generator for combinations of given length
    pub fn new(charset: Charset, length: usize) -> Self {
        Self {
            charset,
            odometer: vec![0; length],
            exhausted: false,
        }
    }

    /// Check if generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Advance the odometer by one step, rightmost position fastest
    fn advance(&mut self) {
        let base = self.charset.chars().len();
        for pos in (0..self.odometer.len()).rev() {
            self.odometer[pos] += 1;
            if self.odometer[pos] < base {
                return;
            }
            self.odometer[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CombinationGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let chars = self.charset.chars();
        let combination: String = self.odometer.iter().map(|&i| chars[i]).collect();
        self.advance();
        Some(combination)
    }
}

/// Drive a fallible sink over every combination, stopping at the first error
pub fn for_each_combination<F>(charset: Charset, length: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    for combination in CombinationGenerator::new(charset, length) {
        visit(&combination)?;
    }
    Ok(())
}
