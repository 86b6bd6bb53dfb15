//! Style and live-property values.

use std::fmt;

/// A value stored in a [`StyleTable`](super::StyleTable) rule or set on a live
/// object property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Hex color including the leading `#`, e.g. `"#883c8cbd"`.
    Color(String),
    /// A bare number (opacity, radius, widths).
    Number(f64),
    /// A boolean flag.
    Bool(bool),
    /// Free text.
    Text(String),
}

impl Value {
    /// Build a color value. The `#` prefix is added if missing.
    pub fn color(hex: impl AsRef<str>) -> Self {
        let hex = hex.as_ref();
        if hex.starts_with('#') {
            Value::Color(hex.to_owned())
        } else {
            Value::Color(format!("#{hex}"))
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The color string, if this is a color.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }

    /// The boolean payload, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(c) => f.write_str(c),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(t) => write!(f, "\"{t}\""),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_adds_hash() {
        assert_eq!(Value::color("333"), Value::Color("#333".into()));
        assert_eq!(Value::color("#333"), Value::Color("#333".into()));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Number(0.3).as_number(), Some(0.3));
        assert_eq!(Value::color("#fff").as_color(), Some("#fff"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::from("hi").as_text(), Some("hi"));
        assert!(Value::Bool(true).as_number().is_none());
    }

    #[test]
    fn display() {
        assert_eq!(Value::color("#2A2A2A").to_string(), "#2A2A2A");
        assert_eq!(Value::Number(10.0).to_string(), "10");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
    }
}
