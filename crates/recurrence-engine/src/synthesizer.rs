//! Build a recurrence rule and exception list from a reduced interval.
//!
//! The rule describes a regular grid: the representative's start plus every
//! multiple of the interval up to the last observed occurrence. Grid slots
//! that were never observed become exceptions.

use std::collections::BTreeSet;
use std::fmt;

use ics_codec::Property;
use serde::Serialize;

use crate::interval::{Reduction, SECONDS_PER_DAY};
use crate::timestamp::Timestamp;

const DAYS_PER_WEEK: i64 = 7;

/// Recurrence frequency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Weekly,
    Daily,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Weekly => "WEEKLY",
            Frequency::Daily => "DAILY",
        }
    }

    /// Length of one unit in seconds.
    pub fn unit_secs(self) -> i64 {
        match self {
            Frequency::Weekly => DAYS_PER_WEEK * SECONDS_PER_DAY,
            Frequency::Daily => SECONDS_PER_DAY,
        }
    }
}

/// Frequency, interval count and inclusive end of a synthesized schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Positive number of `frequency` units between occurrences.
    pub interval: u64,
    /// Start of the last observed occurrence.
    pub until: Timestamp,
}

impl RecurrenceRule {
    /// Spacing between grid slots in seconds.
    pub fn interval_secs(&self) -> i64 {
        self.frequency.unit_secs() * self.interval as i64
    }

    /// RRULE value text, e.g. `FREQ=WEEKLY;INTERVAL=1;UNTIL=20240129T090000Z`.
    pub fn to_value(&self) -> String {
        format!(
            "FREQ={};INTERVAL={};UNTIL={}",
            self.frequency.as_str(),
            self.interval,
            self.until.until_value()
        )
    }

    pub fn to_property(&self) -> Property {
        Property::new("RRULE", self.to_value())
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

/// Grid timestamps that must be suppressed from the rule's expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionList {
    /// Ascending.
    pub dates: Vec<Timestamp>,
}

impl ExceptionList {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// A single comma-separated EXDATE property, or `None` when there is
    /// nothing to exclude.
    pub fn to_property(&self) -> Option<Property> {
        let first = self.dates.first()?;
        let mut property = first.to_property("EXDATE");
        property.value = self
            .dates
            .iter()
            .map(Timestamp::wire_value)
            .collect::<Vec<_>>()
            .join(",");
        Some(property)
    }
}

/// The synthesized recurrence for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub rule: RecurrenceRule,
    pub exceptions: ExceptionList,
}

/// Offsets of the grid slots after the start: `interval, 2·interval, …` up to
/// and including `max_offset` when it lies on the grid.
pub fn grid_offsets(interval_secs: i64, max_offset: i64) -> impl Iterator<Item = i64> {
    let slots = if interval_secs > 0 {
        max_offset / interval_secs
    } else {
        0
    };
    (1..=slots).map(move |k| k * interval_secs)
}

/// Synthesize the recurrence rule and exceptions for a representative start.
///
/// WEEKLY is chosen whenever the reduced interval is a whole number of weeks,
/// DAILY otherwise. UNTIL is the last observed occurrence.
pub fn synthesize(start: &Timestamp, reduction: &Reduction) -> Synthesis {
    let interval_secs = reduction.interval_secs();
    let max_offset = reduction.max_offset();
    let observed: BTreeSet<i64> = reduction.offsets().iter().copied().collect();

    let dates = grid_offsets(interval_secs, max_offset)
        .filter(|offset| !observed.contains(offset))
        .map(|offset| start.shifted(offset))
        .collect();

    let days = interval_secs / SECONDS_PER_DAY;
    let (frequency, interval) = if days % DAYS_PER_WEEK == 0 {
        (Frequency::Weekly, days / DAYS_PER_WEEK)
    } else {
        (Frequency::Daily, days)
    };

    Synthesis {
        rule: RecurrenceRule {
            frequency,
            interval: interval.unsigned_abs(),
            until: start.shifted(max_offset),
        },
        exceptions: ExceptionList { dates },
    }
}
