//! ICS decoder: converts RFC 5545 text into a [`Component`] tree.
//!
//! Unfolding and content-line parsing are done by `icalendar::parser`. Its
//! `read_calendar` is lenient about document structure (it merges several
//! calendars and accepts stray top-level components), so the BEGIN/END
//! nesting is checked first: exactly one VCALENDAR, properly closed, nothing
//! after it.

use icalendar::parser::{self, read_calendar, unfold};

use crate::error::{IcsError, Result};
use crate::types::{Component, Parameter, Property};

/// Decode ICS text into its top-level VCALENDAR component.
///
/// Accepts CRLF or bare LF line endings. Property and component names are
/// upper-cased; values and parameter values are kept as written.
///
/// # Errors
///
/// Returns an [`IcsError`] for content lines the parser rejects, unbalanced
/// or unterminated components, a non-VCALENDAR root, or trailing content.
pub fn decode(input: &str) -> Result<Component> {
    let unfolded = unfold(input);
    check_nesting(&unfolded)?;

    let calendar = read_calendar(&unfolded).map_err(|e| IcsError::Parse(e.to_string()))?;

    Ok(Component {
        name: "VCALENDAR".to_string(),
        properties: calendar.properties.iter().map(property_from).collect(),
        components: calendar.components.iter().map(component_from).collect(),
    })
}

/// Walk the BEGIN/END lines of unfolded text.
fn check_nesting(unfolded: &str) -> Result<()> {
    let mut open: Vec<String> = Vec::new();
    let mut closed = false;

    for (index, raw) in unfolded.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }
        if closed {
            return Err(IcsError::TrailingContent { line });
        }

        let (key, rest) = text.split_once(':').unwrap_or((text, ""));
        let name = rest.trim().to_ascii_uppercase();

        if key.eq_ignore_ascii_case("BEGIN") {
            if open.is_empty() && name != "VCALENDAR" {
                return Err(IcsError::NotACalendar { found: name });
            }
            open.push(name);
        } else if key.eq_ignore_ascii_case("END") {
            match open.pop() {
                Some(expected) if expected == name => closed = open.is_empty(),
                Some(expected) => {
                    return Err(IcsError::UnbalancedComponent {
                        line,
                        expected,
                        found: name,
                    })
                }
                None => {
                    return Err(IcsError::UnbalancedComponent {
                        line,
                        expected: "(nothing open)".to_string(),
                        found: name,
                    })
                }
            }
        } else if open.is_empty() {
            return Err(IcsError::NotACalendar {
                found: key.to_ascii_uppercase(),
            });
        }
    }

    if let Some(name) = open.pop() {
        return Err(IcsError::UnterminatedComponent { name });
    }
    if !closed {
        return Err(IcsError::NotACalendar {
            found: "empty input".to_string(),
        });
    }
    Ok(())
}

fn component_from(parsed: &parser::Component<'_>) -> Component {
    Component {
        name: parsed.name.as_ref().to_ascii_uppercase(),
        properties: parsed.properties.iter().map(property_from).collect(),
        components: parsed.components.iter().map(component_from).collect(),
    }
}

fn property_from(parsed: &parser::Property<'_>) -> Property {
    let mut property = Property::new(parsed.name.as_ref(), parsed.val.to_string());
    property.params = parsed
        .params
        .iter()
        .map(|param| {
            let value = param.val.as_ref().map(|v| v.as_ref()).unwrap_or("");
            Parameter::from_wire(param.key.as_ref(), value)
        })
        .collect();
    property
}
