//! StyleTable: selector → property → value.
//!
//! The table is supplied whole at startup and never partially updated. It is
//! handed to the [`StyleMachine`](crate::state::StyleMachine) explicitly, so
//! two windows in one process can carry different tables.

use std::collections::HashMap;

use crate::elements::ElementKind;

use super::parser::{parse_style_table, ParseError};
use super::properties::{bindings, required_states, StyleProperty};
use super::selector::{Selector, StyleState};
use super::value::Value;

/// Errors raised when the table cannot answer a lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown style selector `{0}`")]
    UnknownStyleSelector(String),
    #[error("style selector `{selector}` has no `{property}` value")]
    MissingProperty { selector: String, property: String },
    #[error("style selector `{selector}` property `{property}` must be a {expected}")]
    InvalidValue {
        selector: String,
        property: String,
        expected: &'static str,
    },
}

/// The properties of one selector.
pub type StyleRule = HashMap<String, Value>;

/// Mapping from selector key (`Button`, `Button:hover`) to its properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    rules: HashMap<String, StyleRule>,
}

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its text form. See [`parse_style_table`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_style_table(input)
    }

    /// The built-in dark theme.
    pub fn builtin() -> Self {
        Self::new()
            .with("Platform", "accent_color", Value::color("#3c8cbd"))
            .with("Button", "background_color", Value::color("#333"))
            .with("Button", "border_color", Value::color("#444"))
            .with("Button", "font_color", Value::color("#EEE"))
            .with("Button", "icon_opacity", Value::Number(1.0))
            .with("Button:inactive", "background_color", Value::color("#222"))
            .with("Button:inactive", "border_color", Value::color("#333"))
            .with("Button:inactive", "font_color", Value::color("#666"))
            .with("Button:inactive", "icon_opacity", Value::Number(0.3))
            .with("Button:hover", "background_color", Value::color("#383838"))
            .with("Button:hover", "border_color", Value::color("#883c8cbd"))
            .with("Button:hover", "font_color", Value::color("#EEE"))
            .with("Button:hover", "icon_opacity", Value::Number(1.0))
            .with("Button:clicked", "background_color", Value::color("#333c8cbd"))
            .with("Button:clicked", "border_color", Value::color("#883c8cbd"))
            .with("Button:clicked", "font_color", Value::color("#FFF"))
            .with("Button:clicked", "icon_opacity", Value::Number(1.0))
            .with("Label", "font_color", Value::color("#EEE"))
            .with("Label:inactive", "font_color", Value::color("#666"))
            // alt background #282828
            .with("MainFrame", "background_color", Value::color("#2A2A2A"))
            .with("MainFrame", "border_color", Value::color("#383838"))
            .with("MainFrame", "border_radius", Value::Number(10.0))
            .with("MainFrame:inactive", "background_color", Value::color("#222"))
            .with("MainFrame:inactive", "border_color", Value::color("#333"))
            .with("MainFrame:inactive", "border_radius", Value::Number(10.0))
    }

    /// Set a value (builder).
    pub fn with(mut self, selector: &str, property: impl Into<String>, value: Value) -> Self {
        self.insert(selector, property, value);
        self
    }

    /// Set a value, overwriting any previous one.
    pub fn insert(&mut self, selector: &str, property: impl Into<String>, value: Value) {
        self.ensure_rule(selector).insert(property.into(), value);
    }

    /// Overlay `other` onto this table. Its values win per property.
    pub fn merge(&mut self, other: StyleTable) {
        for (selector, rule) in other.rules {
            self.ensure_rule(&selector).extend(rule);
        }
    }

    /// [`merge`](Self::merge) as a builder.
    pub fn merged(mut self, other: StyleTable) -> Self {
        self.merge(other);
        self
    }

    /// Get or create the rule for a selector.
    pub(crate) fn ensure_rule(&mut self, selector: &str) -> &mut StyleRule {
        self.rules.entry(selector.to_owned()).or_default()
    }

    /// The rule for a selector key, if present.
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.get(selector)
    }

    /// A single value, if present.
    pub fn get(&self, selector: &str, property: &str) -> Option<&Value> {
        self.rules.get(selector)?.get(property)
    }

    /// Look up a selector, failing with [`StyleError::UnknownStyleSelector`].
    pub fn lookup(&self, selector: &Selector) -> Result<&StyleRule, StyleError> {
        let key = selector.key();
        self.rules
            .get(&key)
            .ok_or(StyleError::UnknownStyleSelector(key))
    }

    /// Look up one property of a selector.
    pub fn value(&self, selector: &Selector, property: StyleProperty) -> Result<&Value, StyleError> {
        self.lookup(selector)?
            .get(property.key())
            .ok_or_else(|| StyleError::MissingProperty {
                selector: selector.key(),
                property: property.key().to_owned(),
            })
    }

    /// The frame corner radius used while the chrome is in its normal state.
    pub fn frame_radius(&self) -> Result<f64, StyleError> {
        let selector = Selector::new(ElementKind::MainFrame, StyleState::Default);
        self.value(&selector, StyleProperty::BorderRadius)?
            .as_number()
            .ok_or_else(|| StyleError::InvalidValue {
                selector: selector.key(),
                property: StyleProperty::BorderRadius.key().to_owned(),
                expected: "number",
            })
    }

    /// Check that every selector the style machine can derive exists and
    /// carries every property its kind exposes.
    pub fn validate(&self) -> Result<(), StyleError> {
        for kind in ElementKind::ALL {
            for &state in required_states(kind) {
                let selector = Selector::new(kind, state);
                for binding in bindings(kind) {
                    self.value(&selector, binding.property)?;
                }
            }
        }
        self.frame_radius()?;
        Ok(())
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no selectors.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate selector keys (unordered).
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        StyleTable::builtin().validate().unwrap();
    }

    #[test]
    fn merge_overrides_per_property() {
        let base = StyleTable::builtin();
        let merged = base.clone().merged(
            StyleTable::new()
                .with("Label", "font_color", Value::color("#fff"))
                .with("Extra", "x", Value::Number(1.0)),
        );
        assert_eq!(merged.get("Label", "font_color"), Some(&Value::color("#fff")));
        assert_eq!(merged.get("Button", "font_color"), base.get("Button", "font_color"));
        assert_eq!(merged.len(), base.len() + 1);
        merged.validate().unwrap();
    }

    #[test]
    fn builtin_frame_radius() {
        assert_eq!(StyleTable::builtin().frame_radius(), Ok(10.0));
    }

    #[test]
    fn lookup_unknown_selector() {
        let table = StyleTable::new();
        let err = table
            .lookup(&Selector::new(ElementKind::Button, StyleState::Hover))
            .unwrap_err();
        assert_eq!(err, StyleError::UnknownStyleSelector("Button:hover".into()));
    }

    #[test]
    fn value_missing_property() {
        let table = StyleTable::new().with("Label", "background_color", Value::color("#000"));
        let err = table
            .value(
                &Selector::new(ElementKind::Label, StyleState::Default),
                StyleProperty::FontColor,
            )
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingProperty {
                selector: "Label".into(),
                property: "font_color".into(),
            }
        );
    }

    #[test]
    fn validate_reports_missing_clicked_state() {
        let mut table = StyleTable::builtin();
        table.rules.remove("Button:clicked");
        assert_eq!(
            table.validate(),
            Err(StyleError::UnknownStyleSelector("Button:clicked".into()))
        );
    }

    #[test]
    fn frame_radius_must_be_number() {
        let table = StyleTable::builtin().with("MainFrame", "border_radius", Value::from("ten"));
        assert!(matches!(
            table.frame_radius(),
            Err(StyleError::InvalidValue { expected: "number", .. })
        ));
    }

    #[test]
    fn parse_matches_builder() {
        let parsed = StyleTable::parse("[Label]\nfont_color = #EEE").unwrap();
        let built = StyleTable::new().with("Label", "font_color", Value::color("#EEE"));
        assert_eq!(parsed, built);
    }

    #[test]
    fn insert_overwrites() {
        let mut table = StyleTable::new();
        table.insert("Label", "font_color", Value::color("#111"));
        table.insert("Label", "font_color", Value::color("#222"));
        assert_eq!(table.get("Label", "font_color"), Some(&Value::color("#222")));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.selectors().collect::<Vec<_>>(), vec!["Label"]);
    }
}
