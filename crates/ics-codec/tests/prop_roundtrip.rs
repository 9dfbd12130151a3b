/// Property-based tests for content-line round-trips.
///
/// Encoding folds long lines; decoding must give back exactly the value that
/// was encoded, whatever mix of ASCII and multi-byte characters it contains.
use ics_codec::{decode, encode, Component, Property};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]([a-zA-Z0-9 ,;:=\\-\\.]{0,200}[a-zA-Z0-9])?",
        prop::string::string_regex("[\u{00e0}-\u{00ff}\u{4e00}-\u{4e20}a-z]([\u{00e0}-\u{00ff}\u{4e00}-\u{4e20} a-z]{0,120}[a-z])?").unwrap(),
    ]
}

proptest! {
    #[test]
    fn property_values_survive_encode_decode(value in arb_value()) {
        let cal = Component::new("VCALENDAR")
            .with_component(Component::new("VEVENT").with_property(Property::new("DESCRIPTION", value.clone())));
        let back = decode(&encode(&cal)).unwrap();
        prop_assert_eq!(&back.components[0].property("DESCRIPTION").unwrap().value, &value);
    }

    #[test]
    fn encoded_lines_stay_short(value in arb_value()) {
        let cal = Component::new("VCALENDAR").with_property(Property::new("X-NOTE", value));
        for part in encode(&cal).split("\r\n") {
            prop_assert!(part.len() <= 76);
        }
    }

    #[test]
    fn property_order_survives(values in prop::collection::vec("[a-z]{1,20}", 1..8)) {
        let mut event = Component::new("VEVENT");
        for value in &values {
            event.push_property(Property::new("CATEGORIES", value.as_str()));
        }
        let back = decode(&encode(&Component::new("VCALENDAR").with_component(event))).unwrap();
        let decoded: Vec<&str> = back.components[0]
            .properties_named("CATEGORIES")
            .map(|p| p.value.as_str())
            .collect();
        let expected: Vec<&str> = values.iter().map(String::as_str).collect();
        prop_assert_eq!(decoded, expected);
    }
}
