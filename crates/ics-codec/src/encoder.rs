//! ICS encoder: writes a [`Component`] tree as RFC 5545 text.
//!
//! The tree is handed to `icalendar::parser` types, whose `Display` writes
//! CRLF-terminated, folded content lines.

use icalendar::parser;

use crate::types::{Component, Property};

/// Encode a component tree (normally a VCALENDAR) as ICS text.
pub fn encode(component: &Component) -> String {
    let mut out = String::new();
    write_parsed(&to_parsed(component), &mut out);
    out
}

/// Mirrors `icalendar`'s (crate-private) component writer: `parser::Component`
/// has no `Display` impl in icalendar 0.17, but `parser::Property` does.
fn write_parsed(component: &parser::Component<'_>, out: &mut String) {
    use std::fmt::Write;
    let _ = write!(out, "BEGIN:{}\r\n", component.name.as_str());
    for property in &component.properties {
        let _ = write!(out, "{property}");
    }
    for child in &component.components {
        write_parsed(child, out);
    }
    let _ = write!(out, "END:{}\r\n", component.name.as_str());
}

fn to_parsed(component: &Component) -> parser::Component<'_> {
    parser::Component {
        name: component.name.as_str().into(),
        properties: component.properties.iter().map(property_to_parsed).collect(),
        components: component.components.iter().map(to_parsed).collect(),
    }
}

fn property_to_parsed(property: &Property) -> parser::Property<'_> {
    parser::Property {
        name: property.name.as_str().into(),
        val: property.value.as_str().into(),
        params: property
            .params
            .iter()
            .map(|param| parser::Parameter {
                key: param.name.as_str().into(),
                val: (!param.raw.is_empty()).then(|| param.raw.as_str().into()),
            })
            .collect(),
    }
}
