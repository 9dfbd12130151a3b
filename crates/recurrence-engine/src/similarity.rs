//! Decide whether two occurrences are the same logical recurring event.

use crate::occurrence::Occurrence;

/// Two occurrences are similar when every descriptive attribute matches, they
/// start at the same time of day, and they are not the same occurrence.
///
/// Compared attributes: SUMMARY, CLASS, LOCATION, DESCRIPTION and CATEGORIES
/// (as a sorted set of values). Absent on both sides counts as equal. The
/// start date and weekday are ignored; all-day starts only match other all-day
/// starts.
pub fn are_similar(a: &Occurrence<'_>, b: &Occurrence<'_>) -> bool {
    a.summary() == b.summary()
        && a.classification() == b.classification()
        && a.location() == b.location()
        && a.description() == b.description()
        && a.categories() == b.categories()
        && a.start.time_of_day() == b.start.time_of_day()
        && !a.is_same_instance(b)
}
