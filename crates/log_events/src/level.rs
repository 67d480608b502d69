use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log event, least to most significant.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Verbose,
    Debug,
    #[default]
    Information,
    Warning,
    Error,
    Fatal,
}

const LEVEL_NAMES: &[(&str, Level)] = &[
    ("Verbose", Level::Verbose),
    ("Debug", Level::Debug),
    ("Information", Level::Information),
    ("Warning", Level::Warning),
    ("Error", Level::Error),
    ("Fatal", Level::Fatal),
];

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Verbose => "Verbose",
            Level::Debug => "Debug",
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("`{text}` is not a recognized level")]
pub struct ParseLevelError {
    pub text: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Matches level names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for (name, level) in LEVEL_NAMES {
            if name.eq_ignore_ascii_case(s) {
                return Ok(*level);
            }
        }
        Err(ParseLevelError {
            text: s.to_string(),
        })
    }
}
