//! Input clean-up and alphabet checks for ABC sequences.

use crate::error::CensusError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

pub const ALPHABET: [char; 6] = ['A', 'B', 'C', 'a', 'b', 'c'];

lazy_static! {
    static ref VALID_SEQUENCE: Regex = Regex::new(r"^[ABCabc]*$").expect("valid sequence regex");
}

/// Removes spaces and commas, so "A, B C" becomes "ABC".
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| c != ' ' && c != ',').collect()
}

/// True if `sequence` only uses letters from [`ALPHABET`]. The empty string is valid.
pub fn is_valid(sequence: &str) -> bool {
    VALID_SEQUENCE.is_match(sequence)
}

/// Distinct characters outside [`ALPHABET`], in order of first appearance.
pub fn invalid_characters(sequence: &str) -> Vec<char> {
    let mut ret: Vec<char> = Vec::new();
    for c in sequence.chars() {
        if !ALPHABET.contains(&c) && !ret.contains(&c) {
            ret.push(c);
        }
    }
    ret
}

/// A sanitized sequence that passed validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    pub fn parse(raw: &str) -> Result<Self, CensusError> {
        let sanitized = sanitize(raw);
        if is_valid(&sanitized) {
            Ok(Self(sanitized))
        } else {
            Err(CensusError::InvalidSequence {
                invalid: invalid_characters(&sanitized),
            })
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
