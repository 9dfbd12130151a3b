//! Discrete event occurrences read from VEVENT components.

use std::fmt;

use chrono::Duration;
use ics_codec::{Component, Property};

use crate::error::{EngineError, Result};
use crate::timestamp::Timestamp;

/// Properties that turn a VEVENT into a recurrence set (or a member of one).
const RECURRENCE_PROPERTIES: [&str; 3] = ["RRULE", "RDATE", "RECURRENCE-ID"];

/// Whether `component` is a single, non-recurring VEVENT.
///
/// Events that already carry RRULE/RDATE or override an instance through
/// RECURRENCE-ID are left alone by the compactor.
pub fn is_discrete_event(component: &Component) -> bool {
    component.is("VEVENT")
        && !RECURRENCE_PROPERTIES
            .iter()
            .any(|name| component.has_property(name))
}

/// Where an occurrence ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extent {
    /// An explicit DTEND.
    End(Timestamp),
    /// A DURATION value. Day and week parts count wall-clock days.
    Duration(Duration),
    /// Neither DTEND nor DURATION.
    Unspecified,
}

impl Extent {
    /// The length of an occurrence starting at `start` and ending here.
    pub fn length_from(&self, start: &Timestamp) -> Length {
        match self {
            Extent::End(end) => Length::Seconds(end.seconds_since(start)),
            Extent::Duration(duration) => Length::Seconds(duration.num_seconds()),
            Extent::Unspecified => Length::Unspecified,
        }
    }
}

/// Comparable occurrence length.
///
/// DTEND and DURATION compare equal when they describe the same span, so
/// `DTEND` one hour after the start matches `DURATION:PT1H` and `PT60M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Seconds(i64),
    Unspecified,
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Seconds(secs) => write!(f, "{}s", secs),
            Length::Unspecified => f.write_str("no end"),
        }
    }
}

/// The dates of one occurrence, detached from its component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub start: Timestamp,
    pub end: Extent,
}

/// One concrete, dated event from the input document.
///
/// Borrows the VEVENT it was read from; identity is the identity of that
/// component, not value equality.
#[derive(Debug, Clone)]
pub struct Occurrence<'a> {
    component: &'a Component,
    pub start: Timestamp,
    pub end: Extent,
}

impl<'a> Occurrence<'a> {
    pub fn from_component(component: &'a Component) -> Result<Self> {
        let start = component
            .property("DTSTART")
            .ok_or_else(|| EngineError::MissingProperty {
                event: label_of(component),
                property: "DTSTART".to_string(),
            })
            .and_then(Timestamp::from_property)?;

        let end = if let Some(dtend) = component.property("DTEND") {
            Extent::End(Timestamp::from_property(dtend)?)
        } else if let Some(duration) = component.property("DURATION") {
            Extent::Duration(parse_duration(duration)?)
        } else {
            Extent::Unspecified
        };

        Ok(Self {
            component,
            start,
            end,
        })
    }

    /// The VEVENT this occurrence was read from.
    pub fn component(&self) -> &'a Component {
        self.component
    }

    fn text(&self, name: &str) -> Option<&'a str> {
        self.component.property(name).map(|p| p.value.as_str())
    }

    pub fn summary(&self) -> Option<&'a str> {
        self.text("SUMMARY")
    }

    /// The CLASS property (PUBLIC, PRIVATE, CONFIDENTIAL, ...).
    pub fn classification(&self) -> Option<&'a str> {
        self.text("CLASS")
    }

    pub fn location(&self) -> Option<&'a str> {
        self.text("LOCATION")
    }

    pub fn description(&self) -> Option<&'a str> {
        self.text("DESCRIPTION")
    }

    /// Every category across all CATEGORIES properties, sorted.
    ///
    /// Values are split on unescaped commas only; `Work\, Team` is one
    /// category.
    pub fn categories(&self) -> Vec<&'a str> {
        let mut categories: Vec<&'a str> = self
            .component
            .properties_named("CATEGORIES")
            .flat_map(|p| split_list(&p.value))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort_unstable();
        categories
    }

    /// A human-readable name for messages and logs.
    pub fn label(&self) -> String {
        label_of(self.component)
    }

    /// Whether both occurrences were read from the very same component.
    pub fn is_same_instance(&self, other: &Occurrence<'_>) -> bool {
        std::ptr::eq(self.component, other.component)
    }

    pub fn instance(&self) -> Instance {
        Instance {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// Parse an RFC 5545 DURATION value such as `PT1H`, `PT90M` or `P1W`.
///
/// Negative durations are rejected; an event cannot end before it starts.
pub fn parse_duration(property: &Property) -> Result<Duration> {
    let invalid = || EngineError::InvalidTimestamp {
        property: property.name.clone(),
        value: property.value.clone(),
    };

    let text = property.value.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    if text.starts_with('-') {
        return Err(invalid());
    }

    let parsed = iso8601::duration(text).map_err(|_| invalid())?;
    let std_duration: std::time::Duration = parsed.into();
    Duration::from_std(std_duration).map_err(|_| invalid())
}

/// Split a multi-valued TEXT property on commas that are not escaped with
/// a backslash. Escapes are kept as written.
fn split_list(value: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (index, c) in value.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ',' => {
                items.push(&value[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    items.push(&value[start..]);
    items
}

fn label_of(component: &Component) -> String {
    component
        .property("SUMMARY")
        .or_else(|| component.property("UID"))
        .map(|p| p.value.clone())
        .unwrap_or_else(|| "(untitled)".to_string())
}
