//! Crate-level error types.

use std::fmt;

/// Errors produced by the motion-lab crate.
///
/// Building and playing animations never fails; these cover the surfaces
/// around it (configuration files, preset lookup, clipboard, commands).
#[derive(Debug)]
pub enum LabError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// TOML preset catalog parsing failure.
    PresetParse(String),
    /// Keyframe list that does not have the closed `[rest, peak, rest]` shape.
    InvalidKeyframes(String),
    /// No preset with the given name in the catalog.
    PresetNotFound(String),
    /// The clipboard rejected a write.
    Clipboard(String),
    /// A command message that could not be decoded.
    UnknownCommand(String),
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::PresetParse(msg) => write!(f, "preset parse error: {msg}"),
            Self::InvalidKeyframes(msg) => {
                write!(f, "invalid keyframes: {msg}")
            }
            Self::PresetNotFound(name) => {
                write!(f, "no preset named '{name}'")
            }
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
            Self::UnknownCommand(msg) => {
                write!(f, "unknown command: {msg}")
            }
        }
    }
}

impl std::error::Error for LabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LabError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
