//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::elements::ElementKind;
use crate::event::{Callback, Callbacks, EventKind};
use crate::live::LiveId;

new_key_type! {
    /// Unique identifier for a composition node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single declared node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Lookup key into the live graph. Empty means the node is not bound.
    pub name: String,
    /// Layout or element kind.
    pub kind: ElementKind,
    /// Markup template. Layout fragments carry one split marker line.
    pub fragment: String,
    /// Position among the parent's children.
    pub index: usize,
    pub(crate) callbacks: Callbacks,
    pub(crate) live: Option<LiveId>,
}

impl NodeData {
    /// Create an unbound node with no callbacks.
    pub fn new(kind: ElementKind, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            fragment: fragment.into(),
            index: 0,
            callbacks: Callbacks::new(),
            live: None,
        }
    }

    /// Replace the declared callbacks (builder).
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Declare one callback (builder).
    pub fn on(mut self, kind: EventKind, handler: Callback) -> Self {
        self.callbacks.insert(kind, handler);
        self
    }

    /// Whether the node is a layout and may hold children.
    pub fn is_layout(&self) -> bool {
        self.kind.is_layout()
    }

    /// Whether the node takes part in binding.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Callbacks declared on the node.
    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    /// The bound live object, if binding found one.
    pub fn live(&self) -> Option<LiveId> {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::callback;

    #[test]
    fn new_defaults() {
        let data = NodeData::new(ElementKind::Button, "ok", "Button {}");
        assert_eq!(data.name, "ok");
        assert_eq!(data.kind, ElementKind::Button);
        assert_eq!(data.index, 0);
        assert!(data.callbacks().is_empty());
        assert!(data.live().is_none());
        assert!(data.is_named());
        assert!(!data.is_layout());
    }

    #[test]
    fn unnamed_node() {
        let data = NodeData::new(ElementKind::Label, "", "Label {}");
        assert!(!data.is_named());
    }

    #[test]
    fn builder_on() {
        let data = NodeData::new(ElementKind::Button, "ok", "")
            .on(EventKind::Press, callback(|_| Ok(())))
            .on(EventKind::Hover, callback(|_| Ok(())));
        assert_eq!(data.callbacks().kinds(), vec![EventKind::Press, EventKind::Hover]);
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
