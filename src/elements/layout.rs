//! Layouts: Row, Column, ScrollBox.
//!
//! Each fragment ends its head with the split marker, indented one level
//! inside the block that receives the children.

use super::kind::ElementKind;
use super::Element;
use crate::markup::{escape_string, SPLIT_MARKER};

const DEFAULT_SPACING: u32 = 6;

/// Organizes elements side by side.
#[derive(Debug, Clone)]
pub struct Row {
    spacing: u32,
}

impl Row {
    /// Create a row with the default spacing.
    pub fn new() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }

    /// Gap between children, in pixels (builder).
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Row {
    fn kind(&self) -> ElementKind {
        ElementKind::Row
    }

    fn fragment(&self, name: &str) -> String {
        format!(
            r#"RowLayout {{
    objectName: "{name}"
    property string qmlType: "Row"
    spacing: {spacing}
    {SPLIT_MARKER}
}}"#,
            name = escape_string(name),
            spacing = self.spacing,
        )
    }
}

/// Stacks elements vertically.
#[derive(Debug, Clone)]
pub struct Column {
    spacing: u32,
}

impl Column {
    /// Create a column with the default spacing.
    pub fn new() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }

    /// Set the gap between children (builder).
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Column {
    fn kind(&self) -> ElementKind {
        ElementKind::Column
    }

    fn fragment(&self, name: &str) -> String {
        format!(
            r#"ColumnLayout {{
    objectName: "{name}"
    property string qmlType: "Column"
    spacing: {spacing}
    {SPLIT_MARKER}
}}"#,
            name = escape_string(name),
            spacing = self.spacing,
        )
    }
}

/// A vertically scrolling column.
#[derive(Debug, Clone, Default)]
pub struct ScrollBox;

impl ScrollBox {
    /// Create a scroll box.
    pub fn new() -> Self {
        Self
    }
}

impl Element for ScrollBox {
    fn kind(&self) -> ElementKind {
        ElementKind::ScrollBox
    }

    fn fragment(&self, name: &str) -> String {
        format!(
            r#"ScrollView {{
    objectName: "{name}"
    property string qmlType: "ScrollBox"
    Layout.fillWidth: true
    Layout.fillHeight: true
    clip: true

    ColumnLayout {{
        width: parent.width
        spacing: {DEFAULT_SPACING}
        {SPLIT_MARKER}
    }}
}}"#,
            name = escape_string(name),
        )
    }
}
