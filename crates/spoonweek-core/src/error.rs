//! Core error types for spoonweek-core.
//!
//! Validation failures are fatal to a compile call. Consistency problems found
//! after compilation are reported as [`ConsistencyWarning`](crate::schedule::ConsistencyWarning)
//! values instead, since they do not make the schedule unusable.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for spoonweek-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to locate the configuration directory
    #[error("Cannot resolve data directory: {0}")]
    DataDir(String),
}

/// A malformed rule or source entry.
///
/// `index` is the position of the rule (or source item) in the sequence the
/// caller supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Specific-day rule naming a day outside 0-6
    #[error("rule {index}: day {day} is out of range (expected 0-6)")]
    DayOutOfRange { index: usize, day: i64 },

    /// Hour or minute field outside its range
    #[error("rule {index} ('{title}'): {field} = {value} is out of range")]
    TimeOutOfRange {
        index: usize,
        title: String,
        field: &'static str,
        value: u8,
    },

    /// End time not strictly after start time
    #[error("rule {index} ('{title}'): end {end} must be after start {start}")]
    InvalidTimeRange {
        index: usize,
        title: String,
        start: String,
        end: String,
    },

    /// Required field absent from a source item
    #[error("item {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// Source item flagged as both weekday and weekend repeat
    #[error("item {index}: both 'repeat-weekday' and 'repeat-weekend' are set")]
    AmbiguousRepeat { index: usize },

    /// Source item that could not be decoded at all
    #[error("item {index}: {message}")]
    Malformed { index: usize, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
