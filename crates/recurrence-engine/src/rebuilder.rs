//! Rebuild a calendar with inferred recurrence sets.
//!
//! This module drives the whole pipeline: occurrences are read from the
//! calendar's discrete VEVENTs, grouped, reduced to an interval and turned into
//! RRULE/EXDATE properties on the group representative. Everything that is not
//! a discrete occurrence is passed through untouched.

use std::iter;

use chrono::NaiveDateTime;
use ics_codec::Component;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::expander::expand_rule;
use crate::grouper::{group_occurrences, Group};
use crate::interval::{reduce_interval, SECONDS_PER_DAY};
use crate::occurrence::{is_discrete_event, Occurrence};
use crate::synthesizer::{synthesize, Synthesis};

/// Options for [`compact`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactOptions {
    /// Stable-sort occurrences by start before grouping, so the earliest one
    /// becomes the representative. Without it, an occurrence listed after a
    /// later-dated sibling fails with [`EngineError::NonPositiveOffset`].
    pub sort_occurrences: bool,
    /// Expand every synthesized rule and require that it reproduces the
    /// observed start times exactly.
    pub verify: bool,
}

/// Counters describing one compaction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompactionStats {
    /// Discrete VEVENTs read from the input.
    pub occurrences_read: usize,
    /// VEVENTs written in their place, one per group.
    pub events_written: usize,
    /// Written events that carry a synthesized RRULE.
    pub recurring_events: usize,
    /// Dates listed in synthesized EXDATE properties.
    pub exception_dates: usize,
    /// Top-level components copied unchanged (timezones, todos, existing
    /// recurrence sets, ...).
    pub passthrough_components: usize,
}

/// The rebuilt calendar and what happened to it.
#[derive(Debug, Clone)]
pub struct Compaction {
    pub calendar: Component,
    pub stats: CompactionStats,
}

/// Decode ICS text, compact it and encode the result.
pub fn compact_ics(input: &str, options: &CompactOptions) -> Result<(String, CompactionStats)> {
    let calendar = ics_codec::decode(input)?;
    let Compaction { calendar, stats } = compact(&calendar, options)?;
    Ok((ics_codec::encode(&calendar), stats))
}

/// Replace the calendar's discrete occurrences with one event per group.
///
/// Non-occurrence components keep their relative order and come first; the
/// rebuilt events follow in order of first appearance. Calendar-level
/// properties are preserved.
///
/// # Errors
///
/// Any unreadable occurrence or violated grouping invariant aborts the whole
/// run; no partially rebuilt calendar is returned.
pub fn compact(calendar: &Component, options: &CompactOptions) -> Result<Compaction> {
    let (discrete, passthrough): (Vec<&Component>, Vec<&Component>) = calendar
        .components
        .iter()
        .partition(|component| is_discrete_event(component));

    let mut occurrences = discrete
        .into_iter()
        .map(Occurrence::from_component)
        .collect::<Result<Vec<_>>>()?;

    if options.sort_occurrences {
        occurrences.sort_by_key(|occurrence| occurrence.start.wall);
    }

    let mut stats = CompactionStats {
        occurrences_read: occurrences.len(),
        passthrough_components: passthrough.len(),
        ..CompactionStats::default()
    };

    let groups = group_occurrences(occurrences);
    let mut events = Vec::with_capacity(groups.len());
    for group in &groups {
        let (event, synthesis) = rebuild_event(group, options)?;
        if let Some(synthesis) = synthesis {
            stats.recurring_events += 1;
            stats.exception_dates += synthesis.exceptions.len();
        }
        events.push(event);
    }
    stats.events_written = events.len();

    let mut components: Vec<Component> = passthrough.into_iter().cloned().collect();
    components.extend(events);

    info!(
        occurrences = stats.occurrences_read,
        events = stats.events_written,
        recurring = stats.recurring_events,
        "compacted calendar"
    );

    Ok(Compaction {
        calendar: Component {
            name: calendar.name.clone(),
            properties: calendar.properties.clone(),
            components,
        },
        stats,
    })
}

/// Build the output VEVENT for one group.
///
/// A group without additional occurrences yields an unchanged copy of its
/// representative and no synthesis.
pub fn rebuild_event(
    group: &Group<'_>,
    options: &CompactOptions,
) -> Result<(Component, Option<Synthesis>)> {
    let representative = &group.representative;
    let mut event = representative.component().clone();

    let Some(reduction) = reduce_interval(representative, &group.others)? else {
        return Ok((event, None));
    };
    let synthesis = synthesize(&representative.start, &reduction);

    debug!(
        event = %representative.label(),
        occurrences = group.occurrence_count(),
        interval_days = reduction.interval_secs() / SECONDS_PER_DAY,
        rule = %synthesis.rule,
        exceptions = synthesis.exceptions.len(),
        "synthesized recurrence"
    );

    if options.verify {
        verify_synthesis(representative, reduction.offsets(), &synthesis)?;
    }

    event.remove_properties("RRULE");
    event.remove_properties("EXDATE");
    event.push_property(synthesis.rule.to_property());
    if let Some(exdate) = synthesis.exceptions.to_property() {
        event.push_property(exdate);
    }

    Ok((event, Some(synthesis)))
}

/// Expand the synthesized rule and compare it with the observed start times.
fn verify_synthesis(
    representative: &Occurrence<'_>,
    offsets: &[i64],
    synthesis: &Synthesis,
) -> Result<()> {
    let start = &representative.start;
    let expanded = expand_rule(start, &synthesis.rule, &synthesis.exceptions)?;

    let mut expected: Vec<NaiveDateTime> = iter::once(start.wall)
        .chain(offsets.iter().map(|&offset| start.shifted(offset).wall))
        .collect();
    expected.sort_unstable();

    if expanded != expected {
        return Err(EngineError::VerificationFailed {
            event: representative.label(),
            expected: expected.len(),
            found: expanded.len(),
        });
    }

    debug!(event = %representative.label(), "verified synthesized rule");
    Ok(())
}
