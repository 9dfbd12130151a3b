//! Error types for recurrence inference.
//!
//! Every invariant the pipeline relies on has its own variant. None of them is
//! recoverable: the caller aborts the whole run and writes no output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("event '{event}' has no {property} property")]
    MissingProperty { event: String, property: String },

    #[error("invalid {property} value '{value}'")]
    InvalidTimestamp { property: String, value: String },

    /// An additional occurrence does not start strictly after its representative.
    #[error("occurrence of '{event}' at {occurrence} does not start after {representative} ({seconds}s offset)")]
    NonPositiveOffset {
        event: String,
        representative: String,
        occurrence: String,
        seconds: i64,
    },

    #[error("occurrence of '{event}' at {occurrence} lasts {found}, expected {expected}")]
    DurationMismatch {
        event: String,
        occurrence: String,
        expected: String,
        found: String,
    },

    #[error("occurrences of '{event}' reduce to a {seconds}s interval, which is not a whole number of days")]
    IntervalNotWholeDays { event: String, seconds: i64 },

    #[error("occurrence of '{event}' uses {found} time, expected {expected}")]
    ZoneMismatch {
        event: String,
        expected: String,
        found: String,
    },

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    /// Expanding the synthesized rule did not reproduce the observed dates.
    #[error("rule for '{event}' does not reproduce its occurrences: expected {expected}, expanded {found}")]
    VerificationFailed {
        event: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Codec(#[from] ics_codec::IcsError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
