use std::collections::HashMap;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, trace};

const LITERALS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    #[error("no digit found scanning forward")]
    FirstNotFound,

    #[error("no digit found scanning backward")]
    LastNotFound,
}

/// Strings recognized as a single decimal digit, mapped to its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitTable {
    tokens: HashMap<&'static str, u32>,
    max_token_len: usize,
}

impl DigitTable {
    /// Literal digits `"0".."9"` and spelled words `"zero".."nine"`.
    pub fn new() -> Self {
        Self::from_tokens(LITERALS.iter().chain(WORDS.iter()))
    }

    /// Literal digits only.
    pub fn literal() -> Self {
        Self::from_tokens(LITERALS.iter())
    }

    fn from_tokens<'a>(keys: impl Iterator<Item = &'a &'static str>) -> Self {
        // both key lists are indexed by value
        let tokens = keys
            .enumerate()
            .map(|(i, &key)| (key, (i % 10) as u32))
            .collect::<HashMap<_, _>>();
        let max_token_len = tokens.keys().map(|k| k.len()).max().unwrap_or(0);

        Self {
            tokens,
            max_token_len,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }

    pub fn get(&self, token: &str) -> Option<u32> {
        self.tokens.get(token).copied()
    }

    /// Value of the shortest token starting at byte offset `pos`, if any.
    pub fn match_at(&self, line: &str, pos: usize) -> Option<u32> {
        let remaining = line.len().checked_sub(pos)?;

        let found = (1..=remaining.min(self.max_token_len))
            .find_map(|len| line.get(pos..pos + len).and_then(|s| self.get(s)));

        trace!(pos, ?found, "match_at");
        found
    }

    pub fn first_digit(&self, line: &str) -> Result<u32, DigitError> {
        (0..line.len())
            .find_map(|pos| self.match_at(line, pos))
            .ok_or(DigitError::FirstNotFound)
    }

    pub fn last_digit(&self, line: &str) -> Result<u32, DigitError> {
        (0..line.len())
            .rev()
            .find_map(|pos| self.match_at(line, pos))
            .ok_or(DigitError::LastNotFound)
    }

    pub fn score_line(&self, line: &str) -> Result<u32, DigitError> {
        let first = self.first_digit(line)?;
        let last = self.last_digit(line)?;

        debug!(line, first, last, "scored line");

        Ok(first * 10 + last)
    }
}

impl Default for DigitTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Sums the scores of all lines, stopping at the first line without a digit.
pub fn sum_calibration(
    table: &DigitTable,
    input: impl Iterator<Item = impl AsRef<str>>,
) -> Result<u64> {
    let total = input
        .enumerate()
        .try_fold(0u64, |total, (i, line)| -> Result<u64> {
            let line = line.as_ref();
            let score = table
                .score_line(line)
                .with_context(|| format!("line {}: {line:?}", i + 1))?;

            Ok(total + u64::from(score))
        })?;

    info!(total, "calibration sum");

    Ok(total)
}

pub fn sum_literal_digits(input: impl Iterator<Item = impl AsRef<str>>) -> Result<u64> {
    sum_calibration(&DigitTable::literal(), input)
}

pub fn sum_all_digits(input: impl Iterator<Item = impl AsRef<str>>) -> Result<u64> {
    sum_calibration(&DigitTable::new(), input)
}
