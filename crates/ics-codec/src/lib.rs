//! # ics-codec
//!
//! iCalendar (RFC 5545) reader and writer built on `icalendar::parser`.
//!
//! The codec works at the content-line level: it understands line folding,
//! property parameters and the `BEGIN`/`END` component tree, but it does not
//! interpret property values. Components it does not know about (VTIMEZONE,
//! VTODO, X- components) come through a decode/encode cycle intact and in
//! order.
//!
//! ## Quick start
//!
//! ```rust
//! use ics_codec::{decode, encode};
//!
//! let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
//! let calendar = decode(ics).unwrap();
//! assert_eq!(calendar.name, "VCALENDAR");
//! assert_eq!(encode(&calendar), ics);
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — ICS text → [`Component`] tree
//! - [`encoder`] — [`Component`] tree → folded ICS text
//! - [`types`] — `Component`, `Property`, `Parameter`
//! - [`error`] — Error types for decode failures

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::decode;
pub use encoder::encode;
pub use error::IcsError;
pub use types::{Component, Parameter, Property};
