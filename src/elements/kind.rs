//! ElementKind: the closed set of element and layout kinds.

use std::fmt;
use std::str::FromStr;

/// Every kind of node a composition can declare.
///
/// The host markup tags each live object with the kind's [`tag`](Self::tag)
/// (the `qmlType` property); [`FromStr`] parses that tag back once at the host
/// boundary so the rest of the crate matches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The root window frame with custom decorations.
    MainFrame,
    /// Horizontal layout.
    Row,
    /// Vertical layout.
    Column,
    /// Scrollable vertical layout.
    ScrollBox,
    /// Push button with text and icon.
    Button,
    /// Static text.
    Label,
}

/// Error returned when a host kind tag names no [`ElementKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind tag `{0}`")]
pub struct UnknownKind(pub String);

impl ElementKind {
    /// All kinds, in declaration order.
    pub const ALL: [ElementKind; 6] = [
        ElementKind::MainFrame,
        ElementKind::Row,
        ElementKind::Column,
        ElementKind::ScrollBox,
        ElementKind::Button,
        ElementKind::Label,
    ];

    /// The tag written into markup and used as the style selector base.
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::MainFrame => "MainFrame",
            ElementKind::Row => "Row",
            ElementKind::Column => "Column",
            ElementKind::ScrollBox => "ScrollBox",
            ElementKind::Button => "Button",
            ElementKind::Label => "Label",
        }
    }

    /// Whether nodes of this kind hold children.
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            ElementKind::MainFrame | ElementKind::Row | ElementKind::Column | ElementKind::ScrollBox
        )
    }

    /// Whether live objects of this kind expose hover/press/release signals.
    pub fn is_interactive(self) -> bool {
        matches!(self, ElementKind::Button)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}
