//! Tests for first-match occurrence grouping.

use ics_codec::{Component, Property};
use recurrence_engine::{group_occurrences, Occurrence, Timestamp};

fn event(summary: &str, start: &str, end: &str) -> Component {
    Component::new("VEVENT")
        .with_property(Property::new("SUMMARY", summary))
        .with_property(Property::new("DTSTART", start))
        .with_property(Property::new("DTEND", end))
}

fn occurrences(components: &[Component]) -> Vec<Occurrence<'_>> {
    components
        .iter()
        .map(|c| Occurrence::from_component(c).unwrap())
        .collect()
}

fn start_of(value: &str) -> Timestamp {
    Timestamp::from_property(&Property::new("DTSTART", value)).unwrap()
}

#[test]
fn empty_input_produces_no_groups() {
    let groups = group_occurrences(Vec::new());
    assert!(groups.is_empty());
}

#[test]
fn similar_occurrences_join_first_representative() {
    let components = vec![
        event("Standup", "20240108T090000", "20240108T091500"),
        event("Standup", "20240109T090000", "20240109T091500"),
        event("Standup", "20240110T090000", "20240110T091500"),
    ];
    let groups = group_occurrences(occurrences(&components));

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert!(std::ptr::eq(group.representative.component(), &components[0]));
    assert_eq!(group.others.len(), 2);
    assert_eq!(group.others[0].start, start_of("20240109T090000"));
    assert_eq!(group.others[1].start, start_of("20240110T090000"));
    assert_eq!(group.occurrence_count(), 3);
    assert!(group.is_recurring());
}

#[test]
fn group_order_follows_first_appearance() {
    let components = vec![
        event("Retro", "20240112T150000", "20240112T160000"),
        event("Standup", "20240108T090000", "20240108T091500"),
        event("Retro", "20240126T150000", "20240126T160000"),
        event("Lunch", "20240108T120000", "20240108T130000"),
        event("Standup", "20240109T090000", "20240109T091500"),
    ];
    let groups = group_occurrences(occurrences(&components));

    let summaries: Vec<&str> = groups
        .iter()
        .map(|g| g.representative.summary().unwrap())
        .collect();
    assert_eq!(summaries, vec!["Retro", "Standup", "Lunch"]);
    assert_eq!(groups[0].others.len(), 1);
    assert_eq!(groups[1].others.len(), 1);
    assert!(!groups[2].is_recurring());
}

#[test]
fn same_summary_different_time_forms_separate_groups() {
    let components = vec![
        event("Gym", "20240108T070000", "20240108T080000"),
        event("Gym", "20240110T180000", "20240110T190000"),
        event("Gym", "20240115T070000", "20240115T080000"),
    ];
    let groups = group_occurrences(occurrences(&components));

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].others.len(), 1);
    assert_eq!(groups[0].others[0].start, start_of("20240115T070000"));
    assert_eq!(groups[1].occurrence_count(), 1);
}

#[test]
fn grouping_is_deterministic() {
    let components = vec![
        event("A", "20240108T090000", "20240108T100000"),
        event("B", "20240108T110000", "20240108T120000"),
        event("A", "20240115T090000", "20240115T100000"),
        event("B", "20240122T110000", "20240122T120000"),
    ];

    let first = group_occurrences(occurrences(&components));
    let second = group_occurrences(occurrences(&components));

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert!(std::ptr::eq(
            a.representative.component(),
            b.representative.component()
        ));
        assert_eq!(a.others, b.others);
    }
}

#[test]
fn later_dated_first_occurrence_stays_representative() {
    // Grouping never reorders: the first occurrence in input order wins even
    // when a later one is earlier in time.
    let components = vec![
        event("Standup", "20240115T090000", "20240115T091500"),
        event("Standup", "20240108T090000", "20240108T091500"),
    ];
    let groups = group_occurrences(occurrences(&components));
    assert_eq!(groups[0].representative.start, start_of("20240115T090000"));
    assert_eq!(groups[0].others[0].start, start_of("20240108T090000"));
}
