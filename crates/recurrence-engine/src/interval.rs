//! Reduce a group's occurrence offsets to the minimal repeating interval.

use crate::error::{EngineError, Result};
use crate::occurrence::{Instance, Occurrence};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Offsets of the additional occurrences and their greatest common divisor.
///
/// Only constructible through [`Reduction::new`] (or [`reduce_interval`]), so
/// a value always describes a positive whole-day grid that every offset lies
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    interval_secs: i64,
    offsets: Vec<i64>,
}

impl Reduction {
    /// Returns `None` unless `offsets` is non-empty, `interval_secs` is a
    /// positive number of days and every offset is a positive multiple of it.
    pub fn new(interval_secs: i64, offsets: Vec<i64>) -> Option<Self> {
        let on_grid = |offset: &i64| *offset > 0 && offset % interval_secs == 0;
        let valid = interval_secs > 0
            && interval_secs % SECONDS_PER_DAY == 0
            && !offsets.is_empty()
            && offsets.iter().all(on_grid);
        valid.then_some(Self {
            interval_secs,
            offsets,
        })
    }

    /// Minimal interval in seconds.
    pub fn interval_secs(&self) -> i64 {
        self.interval_secs
    }

    /// Seconds from the representative's start, in input order.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// The largest offset: the last observed occurrence.
    pub fn max_offset(&self) -> i64 {
        self.offsets.iter().copied().max().unwrap_or(self.interval_secs)
    }
}

/// Greatest common divisor (Euclid). `gcd(a, 0) == |a|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Fold [`gcd`] over `values`. A single value is its own gcd; `None` when empty.
pub fn gcd_all(values: &[i64]) -> Option<i64> {
    values.iter().copied().reduce(gcd)
}

/// Compute the interval that evenly divides every offset from the
/// representative's start.
///
/// Returns `Ok(None)` when there are no additional occurrences.
///
/// # Errors
///
/// - [`EngineError::ZoneMismatch`] when an occurrence's start is written in a
///   different kind of time than the representative's.
/// - [`EngineError::NonPositiveOffset`] when an occurrence does not start
///   strictly after the representative.
/// - [`EngineError::DurationMismatch`] when an occurrence lasts longer or
///   shorter than the representative.
/// - [`EngineError::IntervalNotWholeDays`] when the offsets reduce to a
///   sub-day interval.
pub fn reduce_interval(
    representative: &Occurrence<'_>,
    others: &[Instance],
) -> Result<Option<Reduction>> {
    let start = &representative.start;
    let expected_length = representative.end.length_from(start);

    let mut offsets = Vec::with_capacity(others.len());
    for other in others {
        if other.start.kind != start.kind {
            return Err(EngineError::ZoneMismatch {
                event: representative.label(),
                expected: start.kind.to_string(),
                found: other.start.kind.to_string(),
            });
        }

        let seconds = other.start.seconds_since(start);
        if seconds <= 0 {
            return Err(EngineError::NonPositiveOffset {
                event: representative.label(),
                representative: start.to_string(),
                occurrence: other.start.to_string(),
                seconds,
            });
        }

        let length = other.end.length_from(&other.start);
        if length != expected_length {
            return Err(EngineError::DurationMismatch {
                event: representative.label(),
                occurrence: other.start.to_string(),
                expected: expected_length.to_string(),
                found: length.to_string(),
            });
        }

        offsets.push(seconds);
    }

    let Some(interval_secs) = gcd_all(&offsets) else {
        return Ok(None);
    };

    if interval_secs % SECONDS_PER_DAY != 0 {
        return Err(EngineError::IntervalNotWholeDays {
            event: representative.label(),
            seconds: interval_secs,
        });
    }

    Reduction::new(interval_secs, offsets)
        .map(Some)
        .ok_or_else(|| EngineError::IntervalNotWholeDays {
            event: representative.label(),
            seconds: interval_secs,
        })
}
