//! Events delivered by the host runtime.

use crate::live::LiveId;
use crate::state::Chrome;

/// A per-element live signal the core can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    HoverChanged,
    Pressed,
    Released,
    /// Logical outcome of a release over the pressed element while the
    /// window is active. Never delivered by the host directly.
    Activated,
}

/// A notification from the host runtime, dispatched on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    WindowActivated,
    WindowDeactivated,
    WindowStateChanged(Chrome),
    HoverChanged { source: LiveId, hovered: bool },
    Pressed { source: LiveId },
    Released { source: LiveId },
}

impl HostEvent {
    /// The element that emitted this event, for per-element events.
    pub fn source(&self) -> Option<LiveId> {
        match *self {
            HostEvent::HoverChanged { source, .. }
            | HostEvent::Pressed { source }
            | HostEvent::Released { source } => Some(source),
            _ => None,
        }
    }

    /// The live signal this event arrives on, for per-element events.
    pub fn signal(&self) -> Option<Signal> {
        match self {
            HostEvent::HoverChanged { .. } => Some(Signal::HoverChanged),
            HostEvent::Pressed { .. } => Some(Signal::Pressed),
            HostEvent::Released { .. } => Some(Signal::Released),
            _ => None,
        }
    }
}
