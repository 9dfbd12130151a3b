//! # recurrence-engine
//!
//! Reconstructs recurring events from calendars that were exported as flat
//! lists of occurrences.
//!
//! Occurrences that describe the same logical event (same summary, class,
//! location, description, categories and start time-of-day) are grouped, the
//! gaps between them are reduced to a minimal whole-day interval by gcd, and
//! the group is rewritten as a single VEVENT with an `RRULE` and an `EXDATE`
//! list for the grid slots that never occurred.
//!
//! ## Modules
//!
//! - [`timestamp`] — DTSTART/DTEND/EXDATE values and wall-clock arithmetic
//! - [`occurrence`] — discrete VEVENTs and their extents
//! - [`similarity`] — same-logical-event classifier
//! - [`grouper`] — first-match grouping against representatives
//! - [`interval`] — gcd reduction of occurrence offsets
//! - [`synthesizer`] — RRULE + EXDATE synthesis
//! - [`expander`] — RRULE expansion used to verify synthesized rules
//! - [`rebuilder`] — drives the pipeline over a whole calendar
//! - [`error`] — Error types

pub mod error;
pub mod expander;
pub mod grouper;
pub mod interval;
pub mod occurrence;
pub mod rebuilder;
pub mod similarity;
pub mod synthesizer;
pub mod timestamp;

pub use error::EngineError;
pub use expander::expand_rule;
pub use grouper::{group_occurrences, Group};
pub use interval::{gcd, gcd_all, reduce_interval, Reduction, SECONDS_PER_DAY};
pub use occurrence::{is_discrete_event, Extent, Instance, Occurrence};
pub use rebuilder::{compact, compact_ics, CompactOptions, Compaction, CompactionStats};
pub use similarity::are_similar;
pub use synthesizer::{synthesize, ExceptionList, Frequency, RecurrenceRule, Synthesis};
pub use timestamp::{TimeKind, Timestamp};
