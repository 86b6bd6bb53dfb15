//! MainFrame: the top-level frameless window.
//!
//! The window draws its own chrome: a rounded frame rectangle, a title bar
//! that starts a system move and a corner grip that starts a system resize.
//! Children are inserted into the column inside the frame.

use super::kind::ElementKind;
use super::Element;
use crate::markup::{escape_string, SPLIT_MARKER};

/// Object name of the frame rectangle the style machine restyles on focus
/// and chrome changes.
pub const FRAME_OBJECT_NAME: &str = "mainRect";
/// Object name of the title bar that starts a system move.
pub const TITLE_BAR_NAME: &str = "titleBar";
/// Object name of the corner grip that starts a system resize.
pub const RESIZE_GRIP_NAME: &str = "resizeGrip";

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

/// The root layout of every composition.
#[derive(Debug, Clone)]
pub struct MainFrame {
    title: String,
    width: u32,
    height: u32,
}

impl MainFrame {
    /// Create an 800×600 frame titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Initial window size (builder).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Initial `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Element for MainFrame {
    fn kind(&self) -> ElementKind {
        ElementKind::MainFrame
    }

    fn fragment(&self, name: &str) -> String {
        format!(
            r##"import QtQuick 2.15
import QtQuick.Controls 2.15
import QtQuick.Layouts 1.15
import QtQuick.Window 2.15

ApplicationWindow {{
    objectName: "{name}"
    property string qmlType: "MainFrame"
    title: "{title}"
    width: {width}
    height: {height}
    visible: true
    color: "transparent"
    flags: Qt.FramelessWindowHint | Qt.Window

    Rectangle {{
        id: {FRAME_OBJECT_NAME}
        objectName: "{FRAME_OBJECT_NAME}"
        property bool isActive: true
        property int borderWidth: 1
        property int margins: 1
        property color borderColor: "#444"
        anchors.fill: parent
        anchors.margins: margins
        radius: 10
        color: "#2B2B2B"
        border.width: borderWidth
        border.color: borderColor

        MouseArea {{
            objectName: "{TITLE_BAR_NAME}"
            anchors.left: parent.left
            anchors.right: parent.right
            anchors.top: parent.top
            height: 32
            onPressed: logic.start_move()
        }}

        MouseArea {{
            objectName: "{RESIZE_GRIP_NAME}"
            anchors.right: parent.right
            anchors.bottom: parent.bottom
            width: 12
            height: 12
            cursorShape: Qt.SizeFDiagCursor
            onPressed: logic.start_resize(12)
        }}

        ColumnLayout {{
            anchors.fill: parent
            anchors.topMargin: 32
            anchors.margins: 8
            spacing: 6
            {SPLIT_MARKER}
        }}
    }}
}}"##,
            name = escape_string(name),
            title = escape_string(&self.title),
            width = self.width,
            height = self.height,
        )
    }
}
