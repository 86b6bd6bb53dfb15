//! Button element: text, theme icon, and interaction callbacks.
//!
//! The markup gives the button three named parts the style machine writes
//! to: the background rectangle, the icon and the text.

use super::kind::ElementKind;
use super::Element;
use crate::event::{callback, Callbacks, EventContext, EventKind};
use crate::markup::escape_string;
use crate::style::properties::{PART_BACKGROUND, PART_ICON, PART_TEXT};

/// An interactive push button.
///
/// # Examples
///
/// ```ignore
/// let save = Button::new("Save")
///     .with_icon("document-save")
///     .on_press(|ctx| ctx.set_text(ctx.node(), "Saved"));
/// ```
pub struct Button {
    text: String,
    icon: Option<String>,
    callbacks: Callbacks,
}

impl Button {
    /// Create a button with caption `text`, no icon and no callbacks.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            callbacks: Callbacks::new(),
        }
    }

    /// Set the theme icon name (builder).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Declare the press (click) handler.
    pub fn on_press(
        mut self,
        f: impl Fn(&mut EventContext<'_>) -> crate::Result<()> + 'static,
    ) -> Self {
        self.callbacks.insert(EventKind::Press, callback(f));
        self
    }

    /// Declare the hover handler.
    pub fn on_hover(
        mut self,
        f: impl Fn(&mut EventContext<'_>) -> crate::Result<()> + 'static,
    ) -> Self {
        self.callbacks.insert(EventKind::Hover, callback(f));
        self
    }

    /// Declare a click handler, run after the press handler.
    pub fn on_click(
        mut self,
        f: impl Fn(&mut EventContext<'_>) -> crate::Result<()> + 'static,
    ) -> Self {
        self.callbacks.insert(EventKind::Click, callback(f));
        self
    }

    /// The caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The theme icon name, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl Element for Button {
    fn kind(&self) -> ElementKind {
        ElementKind::Button
    }

    fn fragment(&self, name: &str) -> String {
        let text = escape_string(&self.text);
        let icon = escape_string(self.icon.as_deref().unwrap_or_default());
        format!(
            r##"Button {{
    objectName: "{name}"
    property string qmlType: "Button"
    text: "{text}"
    hoverEnabled: true
    Layout.fillWidth: true

    background: Rectangle {{
        objectName: "{PART_BACKGROUND}"
        property color borderColor: "#444"
        implicitHeight: 32
        radius: 4
        color: "#333"
        border.width: 1
        border.color: borderColor
    }}

    contentItem: Row {{
        spacing: 6
        leftPadding: 6

        Image {{
            objectName: "{PART_ICON}"
            source: "image://theme/{icon}"
            sourceSize.width: 16
            sourceSize.height: 16
            opacity: 1.0
        }}

        Text {{
            objectName: "{PART_TEXT}"
            text: "{text}"
            color: "#EEE"
        }}
    }}
}}"##,
            name = escape_string(name),
        )
    }

    fn take_callbacks(&mut self) -> Callbacks {
        std::mem::take(&mut self.callbacks)
    }
}
