//! Calendar timestamps as they appear in DTSTART, DTEND and EXDATE.
//!
//! A [`Timestamp`] is a wall-clock date-time plus the [`TimeKind`] it was
//! written in. All arithmetic happens on the wall-clock value, so two
//! occurrences at 10:00 Europe/Berlin one week apart are exactly seven days
//! apart even when a DST transition falls between them.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use ics_codec::Property;

use crate::error::{EngineError, Result};

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// How a timestamp is anchored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeKind {
    /// `VALUE=DATE`: an all-day date without time-of-day.
    Date,
    /// Local time with no zone (RFC 5545 "floating" time).
    Floating,
    /// UTC, written with a trailing `Z`.
    Utc,
    /// Local time in the zone named by the `TZID` parameter.
    Zoned(String),
}

impl fmt::Display for TimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeKind::Date => f.write_str("all-day"),
            TimeKind::Floating => f.write_str("floating"),
            TimeKind::Utc => f.write_str("UTC"),
            TimeKind::Zoned(tzid) => write!(f, "TZID={}", tzid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// Wall-clock value. Midnight for [`TimeKind::Date`].
    pub wall: NaiveDateTime,
    pub kind: TimeKind,
}

impl Timestamp {
    pub fn date(date: NaiveDate) -> Self {
        Self {
            wall: date.and_time(NaiveTime::MIN),
            kind: TimeKind::Date,
        }
    }

    pub fn floating(wall: NaiveDateTime) -> Self {
        Self {
            wall,
            kind: TimeKind::Floating,
        }
    }

    pub fn utc(wall: NaiveDateTime) -> Self {
        Self {
            wall,
            kind: TimeKind::Utc,
        }
    }

    pub fn zoned(wall: NaiveDateTime, tzid: &str) -> Self {
        Self {
            wall,
            kind: TimeKind::Zoned(tzid.to_string()),
        }
    }

    /// Read a timestamp from a DTSTART/DTEND-style property.
    ///
    /// A value is a date when `VALUE=DATE` is set or when it is exactly eight
    /// digits. A trailing `Z` wins over any `TZID` parameter.
    pub fn from_property(property: &Property) -> Result<Self> {
        let invalid = || EngineError::InvalidTimestamp {
            property: property.name.clone(),
            value: property.value.clone(),
        };

        let value = property.value.trim();
        let is_date = property
            .param("VALUE")
            .is_some_and(|v| v.eq_ignore_ascii_case("DATE"))
            || (value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()));

        if is_date {
            let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
            return Ok(Self::date(date));
        }

        if let Some(body) = value.strip_suffix('Z') {
            let wall = NaiveDateTime::parse_from_str(body, DATE_TIME_FORMAT).map_err(|_| invalid())?;
            return Ok(Self::utc(wall));
        }

        let wall = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map_err(|_| invalid())?;
        Ok(match property.param("TZID") {
            Some(tzid) => Self::zoned(wall, tzid),
            None => Self::floating(wall),
        })
    }

    /// Hour, minute and second, or `None` for all-day dates.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        match self.kind {
            TimeKind::Date => None,
            _ => Some(self.wall.time()),
        }
    }

    /// Whole seconds from `earlier` to `self` on the wall clock.
    pub fn seconds_since(&self, earlier: &Timestamp) -> i64 {
        (self.wall - earlier.wall).num_seconds()
    }

    /// The same kind of timestamp, `seconds` later.
    pub fn shifted(&self, seconds: i64) -> Self {
        Self {
            wall: self.wall + Duration::seconds(seconds),
            kind: self.kind.clone(),
        }
    }

    /// The property value text, without parameters.
    pub fn wire_value(&self) -> String {
        match self.kind {
            TimeKind::Date => self.wall.format(DATE_FORMAT).to_string(),
            TimeKind::Utc => format!("{}Z", self.wall.format(DATE_TIME_FORMAT)),
            TimeKind::Floating | TimeKind::Zoned(_) => {
                self.wall.format(DATE_TIME_FORMAT).to_string()
            }
        }
    }

    /// Build a property carrying this timestamp, with `VALUE=DATE` or `TZID`
    /// parameters as the kind requires.
    pub fn to_property(&self, name: &str) -> Property {
        let property = Property::new(name, self.wire_value());
        match &self.kind {
            TimeKind::Date => property.with_param("VALUE", "DATE"),
            TimeKind::Zoned(tzid) => property.with_param("TZID", tzid),
            TimeKind::Floating | TimeKind::Utc => property,
        }
    }

    /// The value to use for `UNTIL` in an RRULE whose DTSTART is `self`.
    ///
    /// RFC 5545 requires UTC for zoned starts. Zones that are not IANA names
    /// cannot be converted, so they fall back to local time.
    pub fn until_value(&self) -> String {
        let TimeKind::Zoned(tzid) = &self.kind else {
            return self.wire_value();
        };

        let local = self.wall.format(DATE_TIME_FORMAT).to_string();
        let Ok(tz) = tzid.parse::<chrono_tz::Tz>() else {
            tracing::warn!(tzid = %tzid, "unknown TZID, writing UNTIL in local time");
            return local;
        };
        match tz.from_local_datetime(&self.wall).earliest() {
            Some(zoned) => format!("{}Z", zoned.with_timezone(&Utc).format(DATE_TIME_FORMAT)),
            None => {
                tracing::warn!(tzid = %tzid, wall = %self.wall, "UNTIL falls in a DST gap, writing local time");
                local
            }
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TimeKind::Date => write!(f, "{}", self.wall.date()),
            TimeKind::Floating => write!(f, "{}", self.wall),
            TimeKind::Utc => write!(f, "{} UTC", self.wall),
            TimeKind::Zoned(tzid) => write!(f, "{} ({})", self.wall, tzid),
        }
    }
}
