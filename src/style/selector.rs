//! Style selectors: element kind plus an optional state suffix.

use std::fmt;

use crate::elements::ElementKind;

/// The state suffix of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleState {
    /// No suffix.
    Default,
    /// `:hover`
    Hover,
    /// `:clicked`
    Clicked,
    /// `:inactive`
    Inactive,
}

impl StyleState {
    /// The suffix appended to the kind tag, including the leading colon.
    pub fn suffix(self) -> &'static str {
        match self {
            StyleState::Default => "",
            StyleState::Hover => ":hover",
            StyleState::Clicked => ":clicked",
            StyleState::Inactive => ":inactive",
        }
    }
}

/// A style-table key such as `Button` or `Button:hover`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector {
    pub kind: ElementKind,
    pub state: StyleState,
}

impl Selector {
    /// Build a selector from its kind and state.
    pub fn new(kind: ElementKind, state: StyleState) -> Self {
        Self { kind, state }
    }

    /// The string key used in the style table.
    pub fn key(&self) -> String {
        format!("{}{}", self.kind.tag(), self.state.suffix())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.state.suffix())
    }
}
