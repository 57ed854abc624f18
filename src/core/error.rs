// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::core::phase::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration value was rejected.
    ///
    /// Examples:
    /// - a phase duration of zero
    /// - a color name that is not in the palette
    InvalidConfig(ConfigError),

    /// A call was rejected because it is invalid in the current state.
    ///
    /// Examples:
    /// - start while already running
    InvalidState(StateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Every phase must last at least one millisecond.
    ZeroDuration(Phase),

    UnknownColor(String),
    UnknownPreset(String),
    UnknownStyle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    AlreadyRunning,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "{e}"),
            Error::InvalidState(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration(phase) =>
                write!(f, "{} duration must be greater than zero", phase.as_str()),
            ConfigError::UnknownColor(name) =>
                write!(f, "unknown color '{name}' (use red, green, blue, yellow or #RRGGBB)"),
            ConfigError::UnknownPreset(name) =>
                write!(f, "unknown preset '{name}' (use uplifting, relaxing, meditative or custom)"),
            ConfigError::UnknownStyle(name) =>
                write!(f, "unknown animation style '{name}' (use orbit or grow)"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::AlreadyRunning =>
                write!(f, "already running"),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ConfigError {}
impl std::error::Error for StateError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::InvalidConfig(e)
    }
}

impl From<StateError> for Error {
    fn from(e: StateError) -> Self {
        Error::InvalidState(e)
    }
}
