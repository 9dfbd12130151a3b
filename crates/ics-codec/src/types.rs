//! Structured iCalendar document model.
//!
//! A calendar is a tree of [`Component`]s. Each component holds an ordered list
//! of [`Property`] content lines and nested components. Names are stored
//! upper-cased so lookups are case-insensitive by construction.

/// A property parameter such as `TZID=Europe/Berlin` or `VALUE=DATE`.
///
/// The value is kept in its raw wire form (quotes included) so unknown
/// parameters re-encode exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub raw: String,
}

impl Parameter {
    /// Build a parameter, quoting the value when it contains `:`, `;` or `,`.
    pub fn new(name: &str, value: &str) -> Self {
        let raw = if value.contains([':', ';', ',']) {
            format!("\"{}\"", value)
        } else {
            value.to_string()
        };
        Self {
            name: name.to_ascii_uppercase(),
            raw,
        }
    }

    /// Build a parameter from a value as it appeared on the wire.
    ///
    /// Quoted values are kept verbatim; bare values are quoted the same way
    /// as [`Parameter::new`].
    pub fn from_wire(name: &str, value: &str) -> Self {
        if value.starts_with('"') {
            Self {
                name: name.to_ascii_uppercase(),
                raw: value.to_string(),
            }
        } else {
            Self::new(name, value)
        }
    }

    /// The parameter value with surrounding double quotes removed.
    pub fn value(&self) -> &str {
        self.raw
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(&self.raw)
    }
}

/// A single content line: `NAME;PARAM=x:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: String,
}

impl Property {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Builder-style parameter append.
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.push(Parameter::new(name, value));
        self
    }

    /// Look up a parameter value by (case-insensitive) name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(Parameter::value)
    }
}

/// A `BEGIN:NAME` … `END:NAME` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub properties: Vec<Property>,
    pub components: Vec<Component>,
}

impl Component {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            properties: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Builder-style property append.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Builder-style child append.
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Whether this component has the given (case-insensitive) name.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// First property with the given name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// All properties with the given name, in document order.
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Remove every property with the given name.
    pub fn remove_properties(&mut self, name: &str) {
        self.properties.retain(|p| !p.name.eq_ignore_ascii_case(name));
    }
}
