//! RRULE expansion -- turns a synthesized rule back into concrete start times.
//!
//! Wraps the `rrule` crate. Expansion runs on wall-clock values pinned to UTC,
//! which matches how offsets are computed during inference: a grid step is
//! always an exact number of days, regardless of the zone the event lives in.

use chrono::{NaiveDateTime, Utc};
use rrule::RRuleSet;

use crate::error::{EngineError, Result};
use crate::synthesizer::{ExceptionList, RecurrenceRule};
use crate::timestamp::Timestamp;

const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Expand `rule` from `start`, suppressing `exceptions`.
///
/// Returns wall-clock start times in chronological order, `start` included.
///
/// # Errors
/// Returns `EngineError::InvalidRule` if the `rrule` crate rejects the rule
/// (for example an INTERVAL beyond its supported range).
pub fn expand_rule(
    start: &Timestamp,
    rule: &RecurrenceRule,
    exceptions: &ExceptionList,
) -> Result<Vec<NaiveDateTime>> {
    // DTSTART and UNTIL must share a timezone; UTC requires the trailing "Z".
    let mut rrule_text = format!(
        "DTSTART;TZID=UTC:{}\nRRULE:FREQ={};INTERVAL={};UNTIL={}Z",
        start.wall.format(DATE_TIME_FORMAT),
        rule.frequency.as_str(),
        rule.interval,
        rule.until.wall.format(DATE_TIME_FORMAT),
    );

    if !exceptions.is_empty() {
        let exdates: Vec<String> = exceptions
            .dates
            .iter()
            .map(|d| d.wall.format(DATE_TIME_FORMAT).to_string())
            .collect();
        rrule_text.push_str(&format!("\nEXDATE;TZID=UTC:{}", exdates.join(",")));
    }

    let rrule_set: RRuleSet = rrule_text
        .parse()
        .map_err(|e| EngineError::InvalidRule(format!("{}", e)))?;

    // `.all(limit)` caps instances before EXDATE filtering, so size the limit
    // to the whole grid.
    let slots = rule.until.seconds_since(start) / rule.interval_secs().max(1) + 1;
    let max_count = u16::try_from(slots).unwrap_or(u16::MAX);

    let instances = rrule_set.all(max_count);

    Ok(instances
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .collect())
}
