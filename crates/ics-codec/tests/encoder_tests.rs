use ics_codec::{decode, encode, Component, Property};

// ============================================================================
// Component encoding
// ============================================================================

#[test]
fn encode_uses_crlf_and_nesting() {
    let cal = Component::new("VCALENDAR")
        .with_property(Property::new("VERSION", "2.0"))
        .with_component(Component::new("VEVENT").with_property(Property::new("SUMMARY", "Lunch")));

    assert_eq!(
        encode(&cal),
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nSUMMARY:Lunch\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
    );
}

#[test]
fn encode_parameters_in_order() {
    let cal = Component::new("VCALENDAR").with_component(
        Component::new("VEVENT").with_property(
            Property::new("DTSTART", "20240108T100000")
                .with_param("TZID", "Europe/Berlin")
                .with_param("VALUE", "DATE-TIME"),
        ),
    );
    assert!(encode(&cal).contains("\r\nDTSTART;TZID=Europe/Berlin;VALUE=DATE-TIME:20240108T100000\r\n"));
}

#[test]
fn encode_quotes_parameter_values_with_delimiters() {
    let prop = Property::new("DTSTART", "20240108T100000").with_param("TZID", "GMT+01:00");
    let cal = Component::new("VCALENDAR").with_property(prop);
    assert!(encode(&cal).contains("DTSTART;TZID=\"GMT+01:00\":20240108T100000"));
}

#[test]
fn encode_keeps_property_order() {
    let event = Component::new("VEVENT")
        .with_property(Property::new("UID", "b"))
        .with_property(Property::new("SUMMARY", "a"))
        .with_property(Property::new("CATEGORIES", "Work"))
        .with_property(Property::new("CATEGORIES", "Team"));
    let text = encode(&Component::new("VCALENDAR").with_component(event));

    let uid = text.find("UID:b").unwrap();
    let summary = text.find("SUMMARY:a").unwrap();
    let work = text.find("CATEGORIES:Work").unwrap();
    let team = text.find("CATEGORIES:Team").unwrap();
    assert!(uid < summary && summary < work && work < team);
}

// ============================================================================
// Line folding
// ============================================================================

#[test]
fn short_lines_are_not_folded() {
    let cal = Component::new("VCALENDAR").with_property(Property::new("X-NOTE", "X".repeat(60)));
    assert!(!encode(&cal).contains("\r\n "));
}

#[test]
fn long_lines_are_folded_and_decode_back() {
    let description = "Quarterly planning. ".repeat(15);
    let cal = Component::new("VCALENDAR").with_component(
        Component::new("VEVENT").with_property(Property::new("DESCRIPTION", description.as_str())),
    );
    let text = encode(&cal);

    assert!(text.contains("\r\n "));
    for part in text.split("\r\n") {
        assert!(part.len() <= 76, "physical line too long: {}", part.len());
    }

    let back = decode(&text).unwrap();
    assert_eq!(back.components[0].property("DESCRIPTION").unwrap().value, description);
}
