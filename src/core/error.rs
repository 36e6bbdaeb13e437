// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input carried no integer where one was expected.
    ///
    /// Examples:
    /// - `abc`
    /// - `+` (sign with no digits)
    /// - empty string
    Invalid(String),
}

#[derive(Debug)]
pub enum BacklightError {
    /// A brightness file could not be opened or read.
    Read { path: PathBuf, source: io::Error },

    /// A brightness file could not be opened or written.
    Write { path: PathBuf, source: io::Error },

    /// A brightness file was read but did not hold a non-negative integer.
    Malformed { path: PathBuf, contents: String },
}

// ---------------- Display ----------------

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Invalid(input) =>
                write!(f, "invalid brightness command '{input}'"),
        }
    }
}

impl fmt::Display for BacklightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BacklightError::Read { path, .. } =>
                write!(f, "failed to read {}", path.display()),
            BacklightError::Write { path, .. } =>
                write!(f, "failed to write {}", path.display()),
            BacklightError::Malformed { path, contents } =>
                write!(f, "failed to read from {}: unexpected contents '{}'", path.display(), contents.trim()),
        }
    }
}

impl std::error::Error for CommandError {}

impl std::error::Error for BacklightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BacklightError::Read { source, .. } | BacklightError::Write { source, .. } => Some(source),
            BacklightError::Malformed { .. } => None,
        }
    }
}
