//! Window chrome controller: native move/resize pass-through.
//!
//! The frameless window draws its own title bar and resize grips. Those
//! controls hand the pointer back to the host's native gesture through
//! [`ChromeController`].

use crate::live::Host;

/// Errors from chrome requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChromeError {
    #[error("invalid window edge code {0:#x}")]
    InvalidEdge(u32),
}

/// A window edge or corner, carrying the host's edge bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Edge {
    Top = 0x1,
    Left = 0x2,
    Right = 0x4,
    Bottom = 0x8,
    TopLeft = 0x1 | 0x2,
    TopRight = 0x1 | 0x4,
    BottomLeft = 0x8 | 0x2,
    BottomRight = 0x8 | 0x4,
}

impl Edge {
    pub const ALL: [Edge; 8] = [
        Edge::Top,
        Edge::Left,
        Edge::Right,
        Edge::Bottom,
        Edge::TopLeft,
        Edge::TopRight,
        Edge::BottomLeft,
        Edge::BottomRight,
    ];

    /// The host's integer code for this edge.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether this edge is a corner (two bits set).
    pub fn is_corner(self) -> bool {
        self.code().count_ones() == 2
    }
}

impl TryFrom<u32> for Edge {
    type Error = ChromeError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Edge::ALL
            .into_iter()
            .find(|edge| edge.code() == code)
            .ok_or(ChromeError::InvalidEdge(code))
    }
}

/// Delegates window move/resize to the host's native gestures. Holds no
/// state; custom title bars and resize grips call it directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeController;

impl ChromeController {
    /// Create a controller.
    pub fn new() -> Self {
        Self
    }

    /// Start a native window move. Returns whether the host accepted it.
    pub fn begin_move(&self, host: &mut dyn Host) -> bool {
        let accepted = host.start_system_move();
        tracing::trace!("system move requested, accepted = {}", accepted);
        accepted
    }

    /// Start a native resize along `edge`. Returns whether the host accepted
    /// it.
    pub fn begin_resize(&self, host: &mut dyn Host, edge: Edge) -> bool {
        let accepted = host.start_system_resize(edge);
        tracing::trace!("system resize along {:?} requested, accepted = {}", edge, accepted);
        accepted
    }

    /// [`begin_resize`](Self::begin_resize) with the host's raw edge code.
    pub fn begin_resize_raw(&self, host: &mut dyn Host, code: u32) -> Result<bool, ChromeError> {
        let edge = Edge::try_from(code)?;
        Ok(self.begin_resize(host, edge))
    }
}
