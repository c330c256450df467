//! String normalization applied before scoring.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;

/// How the extractor normalizes the query and each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Processor {
    /// Score strings exactly as given
    None,
    /// Unicode lowercase
    #[default]
    Lowercase,
    /// Lowercase, turn every non-alphanumeric character into a space, trim
    Full,
}

impl Processor {
    /// Normalize a string, borrowing when nothing changes.
    pub fn apply<'s>(self, s: &'s str) -> Cow<'s, str> {
        match self {
            Processor::None => Cow::Borrowed(s),
            Processor::Lowercase => lowercase(s),
            Processor::Full => Cow::Owned(full_process(s)),
        }
    }

    /// Config / CLI name.
    pub fn name(self) -> &'static str {
        match self {
            Processor::None => "none",
            Processor::Lowercase => "lowercase",
            Processor::Full => "full",
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Processor {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Processor::None),
            "lowercase" => Ok(Processor::Lowercase),
            "full" => Ok(Processor::Full),
            _ => Err(FuzzyError::UnknownProcessor(s.to_string())),
        }
    }
}

fn lowercase(s: &str) -> Cow<'_, str> {
    // Titlecase letters such as U+01C5 change too, but are not is_uppercase()
    if s.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// Lowercase and strip punctuation: `"Hello, World!"` becomes `"hello  world"`.
pub fn full_process(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.trim().to_lowercase()
}
