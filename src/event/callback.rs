//! Application callbacks and the per-event context they receive.
//!
//! A callback is a shared `Fn` taking an [`EventContext`]. The context names
//! the node that fired (its id, name and position among its siblings), so a
//! single handler can serve many repeated items without capturing per-item
//! state.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::input::Signal;
use crate::compose::{Composition, NodeId};
use crate::error::Result;
use crate::live::{Host, LiveId};
use crate::style::Value;

/// The kinds of event an application can attach a callback to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A press completed by a release over the same element (click
    /// semantics). Occupies the element's primary interaction slot.
    Press,
    /// The pointer entered or left the element.
    Hover,
    /// Fired on activation, after the primary slot.
    Click,
}

impl EventKind {
    /// The live signal a callback of this kind listens on.
    pub fn signal(self) -> Signal {
        match self {
            EventKind::Press | EventKind::Click => Signal::Activated,
            EventKind::Hover => Signal::HoverChanged,
        }
    }
}

/// A shared application handler.
pub type Callback = Rc<dyn Fn(&mut EventContext<'_>) -> Result<()>>;

/// Wrap a closure as a [`Callback`].
pub fn callback(f: impl Fn(&mut EventContext<'_>) -> Result<()> + 'static) -> Callback {
    Rc::new(f)
}

/// At most one callback per [`EventKind`].
#[derive(Clone, Default)]
pub struct Callbacks {
    handlers: HashMap<EventKind, Callback>,
}

impl Callbacks {
    /// Create an empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, returning the one it replaces.
    pub fn insert(&mut self, kind: EventKind, handler: Callback) -> Option<Callback> {
        self.handlers.insert(kind, handler)
    }

    /// The handler registered for `kind`.
    pub fn get(&self, kind: EventKind) -> Option<&Callback> {
        self.handlers.get(&kind)
    }

    /// Whether a handler is registered for `kind`.
    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Declared kinds in `Press`, `Hover`, `Click` order.
    pub fn kinds(&self) -> Vec<EventKind> {
        [EventKind::Press, EventKind::Hover, EventKind::Click]
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// What a callback sees when it runs.
pub struct EventContext<'a> {
    node: NodeId,
    kind: EventKind,
    hovered: bool,
    composition: &'a Composition,
    host: &'a mut dyn Host,
}

impl<'a> EventContext<'a> {
    /// Build a context for one handler invocation.
    pub(crate) fn new(
        node: NodeId,
        kind: EventKind,
        hovered: bool,
        composition: &'a Composition,
        host: &'a mut dyn Host,
    ) -> Self {
        Self {
            node,
            kind,
            hovered,
            composition,
            host,
        }
    }

    /// The node whose event fired.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The firing node's declared name.
    pub fn name(&self) -> &str {
        self.composition
            .get(self.node)
            .map(|data| data.name.as_str())
            .unwrap_or_default()
    }

    /// The firing node's position among its siblings.
    pub fn index(&self) -> usize {
        self.composition
            .get(self.node)
            .map(|data| data.index)
            .unwrap_or_default()
    }

    /// The callback kind being invoked.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Whether the pointer is over the element after this event.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// The composition the window was built from.
    pub fn composition(&self) -> &Composition {
        self.composition
    }

    /// Find a node by declared name anywhere in the composition.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.composition.find(name)
    }

    /// The live object bound to `node`.
    pub fn live(&self, node: NodeId) -> Result<LiveId> {
        Ok(self.composition.live(node)?)
    }

    /// Read a property of a bound node's live object.
    pub fn property(&self, node: NodeId, name: &str) -> Result<Option<Value>> {
        let live = self.live(node)?;
        Ok(self.host.property(live, name))
    }

    /// Write a property of a bound node's live object.
    pub fn set_property(&mut self, node: NodeId, name: &str, value: Value) -> Result<()> {
        let live = self.live(node)?;
        self.host.set_property(live, name, value)?;
        Ok(())
    }

    /// Replace the text of a bound label or button.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> Result<()> {
        self.set_property(node, "text", Value::Text(text.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Callback {
        callback(|_| Ok(()))
    }

    #[test]
    fn insert_replaces_previous_handler() {
        let mut callbacks = Callbacks::new();
        assert!(callbacks.insert(EventKind::Press, noop()).is_none());
        assert!(callbacks.insert(EventKind::Press, noop()).is_some());
        assert_eq!(callbacks.len(), 1);
    }

    #[test]
    fn kinds_in_fixed_order() {
        let mut callbacks = Callbacks::new();
        callbacks.insert(EventKind::Click, noop());
        callbacks.insert(EventKind::Press, noop());
        assert_eq!(callbacks.kinds(), vec![EventKind::Press, EventKind::Click]);
        assert!(!callbacks.contains(EventKind::Hover));
    }

    #[test]
    fn kinds_map_to_signals() {
        assert_eq!(EventKind::Press.signal(), Signal::Activated);
        assert_eq!(EventKind::Click.signal(), Signal::Activated);
        assert_eq!(EventKind::Hover.signal(), Signal::HoverChanged);
    }

    #[test]
    fn debug_lists_kinds() {
        let mut callbacks = Callbacks::new();
        callbacks.insert(EventKind::Hover, noop());
        assert_eq!(format!("{callbacks:?}"), "{Hover}");
    }
}
