//! The host runtime boundary.
//!
//! The host parses compiled markup into a live object graph it owns. The core
//! only ever holds [`LiveId`] handles into that graph and talks to it through
//! the object-safe [`Host`] trait.

use slotmap::new_key_type;

use crate::chrome::Edge;
use crate::elements::ElementKind;
use crate::style::Value;

new_key_type! {
    /// Opaque, non-owning handle to an object in the host's live graph.
    pub struct LiveId;
}

/// Errors a host reports when a live object cannot be mutated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("live object {0:?} no longer exists")]
    StaleObject(LiveId),
    #[error("live object {object:?} has no part named `{part}`")]
    MissingPart { object: LiveId, part: String },
}

/// Operations the core needs from the host rendering/windowing runtime.
pub trait Host {
    /// The top-level window object.
    fn window(&self) -> LiveId;

    /// Find an object named `name` anywhere below `scope` (not `scope` itself).
    fn find_child(&self, scope: LiveId, name: &str) -> Option<LiveId>;

    /// Every object below `scope`, in depth-first order.
    fn descendants(&self, scope: LiveId) -> Vec<LiveId>;

    /// The raw kind tag the markup attached to an object, if any.
    fn kind_tag(&self, object: LiveId) -> Option<&str>;

    /// Read a property.
    fn property(&self, object: LiveId, name: &str) -> Option<Value>;

    /// Write a property.
    fn set_property(&mut self, object: LiveId, name: &str, value: Value) -> Result<(), HostError>;

    /// Hand the pointer to the native window-move gesture.
    fn start_system_move(&mut self) -> bool;

    /// Hand the pointer to the native window-resize gesture along `edge`.
    fn start_system_resize(&mut self, edge: Edge) -> bool;

    /// The element kind of an object, parsed from its tag.
    fn kind_of(&self, object: LiveId) -> Option<ElementKind> {
        self.kind_tag(object)?.parse().ok()
    }

    /// A named part of an object (e.g. a button's background rectangle).
    fn part(&self, object: LiveId, part: &str) -> Result<LiveId, HostError> {
        self.find_child(object, part)
            .ok_or_else(|| HostError::MissingPart {
                object,
                part: part.to_owned(),
            })
    }
}
