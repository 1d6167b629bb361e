//! Line-oriented integer reader for the fixed input formats.

use crate::error::{Error, Result};

/// Walks input text line by line, keeping 1-based line numbers for errors.
pub struct Lines<'a> {
    iter: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Lines {
            iter: text.lines(),
            line: 0,
        }
    }

    /// Number of the line most recently read.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_line(&mut self) -> Result<&'a str> {
        self.line += 1;
        self.iter
            .next()
            .ok_or(Error::MissingLine { line: self.line })
    }

    /// Reads the next line as exactly `expected` integers.
    pub fn next_ints(&mut self, expected: usize) -> Result<Vec<i64>> {
        let line = self.next_line()?;
        let values = read_words(line)
            .map(|token| parse_int(self.line, token))
            .collect::<Result<Vec<_>>>()?;

        if values.len() != expected {
            return Err(Error::TokenCount {
                line: self.line,
                expected,
                found: values.len(),
            });
        }
        Ok(values)
    }
}

pub fn read_words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

fn parse_int(line: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|_| Error::BadToken {
        line,
        token: token.to_owned(),
    })
}

/// Non-negative `value` as a `usize`.
pub fn non_negative(what: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(Error::Negative { what, value });
    }
    Ok(value as usize)
}
