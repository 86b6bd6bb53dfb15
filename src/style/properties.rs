//! Per-kind style property bindings.
//!
//! Each [`ElementKind`] exposes a fixed set of style properties. A
//! [`PropertyBinding`] says where a style-table value lands on the live
//! object: either on the object itself or on one of its named parts (the
//! button background rectangle, its icon, its text).

use crate::elements::ElementKind;

use super::selector::StyleState;

/// Name of the button's background rectangle part.
pub const PART_BACKGROUND: &str = "buttonBackground";
/// Name of the button's icon part.
pub const PART_ICON: &str = "icon";
/// Name of the button's text part.
pub const PART_TEXT: &str = "text";

/// A style-table property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    BackgroundColor,
    BorderColor,
    FontColor,
    IconOpacity,
    BorderRadius,
}

impl StyleProperty {
    /// The key as written in the style table.
    pub fn key(self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background_color",
            StyleProperty::BorderColor => "border_color",
            StyleProperty::FontColor => "font_color",
            StyleProperty::IconOpacity => "icon_opacity",
            StyleProperty::BorderRadius => "border_radius",
        }
    }
}

/// Where a style property is written on a live object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBinding {
    /// The style-table property read.
    pub property: StyleProperty,
    /// Named part of the live object, or `None` for the object itself.
    pub part: Option<&'static str>,
    /// Live property name written.
    pub target: &'static str,
}

const fn bind(
    property: StyleProperty,
    part: Option<&'static str>,
    target: &'static str,
) -> PropertyBinding {
    PropertyBinding {
        property,
        part,
        target,
    }
}

const BUTTON: &[PropertyBinding] = &[
    bind(StyleProperty::BackgroundColor, Some(PART_BACKGROUND), "color"),
    bind(StyleProperty::BorderColor, Some(PART_BACKGROUND), "borderColor"),
    bind(StyleProperty::FontColor, Some(PART_TEXT), "color"),
    bind(StyleProperty::IconOpacity, Some(PART_ICON), "opacity"),
];

const LABEL: &[PropertyBinding] = &[bind(StyleProperty::FontColor, None, "color")];

const FRAME: &[PropertyBinding] = &[
    bind(StyleProperty::BackgroundColor, None, "color"),
    bind(StyleProperty::BorderColor, None, "borderColor"),
];

/// The style properties a kind exposes. Layouts expose none.
pub fn bindings(kind: ElementKind) -> &'static [PropertyBinding] {
    match kind {
        ElementKind::Button => BUTTON,
        ElementKind::Label => LABEL,
        ElementKind::MainFrame => FRAME,
        ElementKind::Row | ElementKind::Column | ElementKind::ScrollBox => &[],
    }
}

/// The selector states a complete style table must define for a kind.
pub fn required_states(kind: ElementKind) -> &'static [StyleState] {
    match kind {
        ElementKind::Button => &[
            StyleState::Default,
            StyleState::Hover,
            StyleState::Clicked,
            StyleState::Inactive,
        ],
        ElementKind::Label | ElementKind::MainFrame => &[StyleState::Default, StyleState::Inactive],
        ElementKind::Row | ElementKind::Column | ElementKind::ScrollBox => &[],
    }
}

/// Whether live objects of this kind are restyled by the state machine.
pub fn is_styled(kind: ElementKind) -> bool {
    !bindings(kind).is_empty()
}
