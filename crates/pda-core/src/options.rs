//! Parser configuration
//!
//! The defaults reproduce the permissive behavior of the line grammar
//! exactly. Both knobs only ever turn accepted input into errors; they never
//! change what a successfully parsed line means.

use serde::{Deserialize, Serialize};

/// How forgiving the tokenizer is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Missing delimiters and markers degrade to empty text, which then fails
    /// integer parsing. Identifiers are accepted verbatim.
    #[default]
    Lenient,
    /// Missing delimiters, missing markers and malformed identifiers are
    /// reported as such.
    Strict,
}

/// What happens when a later line repeats an earlier line's key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last write wins
    #[default]
    Overwrite,
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub strictness: Strictness,
    pub duplicates: DuplicatePolicy,
}

impl ParseOptions {
    /// Strict tokenizer, duplicates rejected
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
            duplicates: DuplicatePolicy::Reject,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
