//! Built-in elements and layouts.
//!
//! Every element knows its [`ElementKind`] and how to write its own markup
//! fragment. Layout fragments contain the split marker line where the
//! compiler inserts children.

pub mod button;
pub mod frame;
pub mod kind;
pub mod label;
pub mod layout;

pub use button::Button;
pub use frame::{MainFrame, FRAME_OBJECT_NAME, RESIZE_GRIP_NAME, TITLE_BAR_NAME};
pub use kind::{ElementKind, UnknownKind};
pub use label::Label;
pub use layout::{Column, Row, ScrollBox};

use crate::event::Callbacks;
use crate::style::properties::{PART_BACKGROUND, PART_ICON, PART_TEXT};

/// Object names the built-in fragments give their internal parts. The host
/// resolves names depth-first, so a declared node under one of these names
/// would bind to the part instead of its own object.
pub const RESERVED_NAMES: [&str; 6] = [
    PART_BACKGROUND,
    PART_ICON,
    PART_TEXT,
    FRAME_OBJECT_NAME,
    TITLE_BAR_NAME,
    RESIZE_GRIP_NAME,
];

/// Whether `name` is taken by an internal part of a built-in element.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Something that can be registered in a [`Composition`](crate::compose::Composition).
pub trait Element {
    /// The element's kind.
    fn kind(&self) -> ElementKind;

    /// The markup fragment for this element registered under `name`.
    fn fragment(&self, name: &str) -> String;

    /// Callbacks declared on the element. Called once, at registration.
    fn take_callbacks(&mut self) -> Callbacks {
        Callbacks::new()
    }
}
