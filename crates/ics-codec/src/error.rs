//! Error types for ICS decoding.

use thiserror::Error;

/// Errors that can occur while reading iCalendar data.
///
/// Line numbers count lines of the unfolded text, starting at 1.
#[derive(Error, Debug)]
pub enum IcsError {
    /// The content-line parser rejected the input.
    #[error("ICS parse error: {0}")]
    Parse(String),

    /// An `END` line closed a different component than the one that is open.
    #[error("line {line}: expected END:{expected}, found END:{found}")]
    UnbalancedComponent {
        line: usize,
        expected: String,
        found: String,
    },

    /// The input ended while a component was still open.
    #[error("component {name} is never closed")]
    UnterminatedComponent { name: String },

    /// The top-level component is missing or is not a VCALENDAR.
    #[error("expected a VCALENDAR at the top level, found {found}")]
    NotACalendar { found: String },

    /// Content after the closing `END:VCALENDAR`.
    #[error("unexpected content after END:VCALENDAR at line {line}")]
    TrailingContent { line: usize },
}

/// Convenience alias used throughout ics-codec.
pub type Result<T> = std::result::Result<T, IcsError>;
