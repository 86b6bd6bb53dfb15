//! Tree operations: root, registration, walk, live handles.

use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::binding::BindError;
use crate::elements::{is_reserved_name, Element, ElementKind};
use crate::event::{Callback, EventKind};
use crate::live::LiveId;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// Errors from building a composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("`{name}` is a {kind} and cannot hold children")]
    NotALayout { name: String, kind: ElementKind },
    #[error("node does not exist in this composition")]
    UnknownNode,
    #[error("composition already has a root")]
    RootAlreadySet,
    #[error("`{name}` names an internal element part and cannot be declared")]
    ReservedName { name: String },
}

/// The declared tree of layouts and elements, backed by a slotmap arena.
///
/// Nodes are registered through [`add`](Self::add), which appends to the
/// parent's ordered children and records the name in the parent's scope.
/// Shape is fixed once compilation starts; only live handles change later.
#[derive(Debug, Default)]
pub struct Composition {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    scopes: SecondaryMap<NodeId, HashMap<String, NodeId>>,
    root: Option<NodeId>,
}

impl Composition {
    /// Create an empty composition (no root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composition whose root is `element`.
    pub fn with_root(name: &str, element: impl Element) -> (Self, NodeId) {
        let mut composition = Self::new();
        let root = composition.insert_root(element.into_node(name));
        (composition, root)
    }

    /// Set the root node. Fails if a root already exists.
    pub fn set_root(&mut self, name: &str, element: impl Element) -> Result<NodeId, ComposeError> {
        self.set_root_node(element.into_node(name))
    }

    /// Set a prebuilt root node.
    pub fn set_root_node(&mut self, data: NodeData) -> Result<NodeId, ComposeError> {
        if self.root.is_some() {
            return Err(ComposeError::RootAlreadySet);
        }
        Ok(self.insert_root(data))
    }

    fn insert_root(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.scopes.insert(id, HashMap::new());
        self.root = Some(id);
        id
    }

    /// Register `element` under `parent` with `name` (empty for an unbound
    /// node) and return its handle.
    pub fn add(
        &mut self,
        parent: NodeId,
        name: &str,
        element: impl Element,
    ) -> Result<NodeId, ComposeError> {
        self.add_node(parent, element.into_node(name))
    }

    /// Register a prebuilt node under `parent`.
    ///
    /// A name already registered in `parent`'s scope is silently shadowed by
    /// the new node. Names of internal element parts (see
    /// [`RESERVED_NAMES`](crate::elements::RESERVED_NAMES)) are rejected.
    pub fn add_node(&mut self, parent: NodeId, mut data: NodeData) -> Result<NodeId, ComposeError> {
        if is_reserved_name(&data.name) {
            return Err(ComposeError::ReservedName { name: data.name });
        }
        let parent_data = self.nodes.get(parent).ok_or(ComposeError::UnknownNode)?;
        if !parent_data.is_layout() {
            return Err(ComposeError::NotALayout {
                name: parent_data.name.clone(),
                kind: parent_data.kind,
            });
        }

        data.index = self.children(parent).len();
        let name = data.name.clone();
        let is_layout = data.is_layout();

        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if is_layout {
            self.scopes.insert(id, HashMap::new());
        }
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        if !name.is_empty() {
            if let Some(scope) = self.scopes.get_mut(parent) {
                if scope.insert(name.clone(), id).is_some() {
                    tracing::debug!("name `{}` registered twice in one scope, earlier node shadowed", name);
                }
            }
        }
        Ok(id)
    }

    /// The node registered as `name` directly in `scope`'s registry.
    pub fn lookup(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        self.scopes.get(scope)?.get(name).copied()
    }

    /// First node named `name` in depth-first order from the root.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let root = self.root?;
        self.walk_depth_first(root)
            .into_iter()
            .find(|&id| self.nodes.get(id).is_some_and(|data| data.name == name))
    }

    /// Every non-empty name, in depth-first order.
    pub fn names(&self) -> Vec<&str> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        self.walk_depth_first(root)
            .into_iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|data| data.is_named())
            .map(|data| data.name.as_str())
            .collect()
    }

    /// Replace or declare the `kind` callback on `node`, returning the
    /// previous one.
    pub fn connect(
        &mut self,
        node: NodeId,
        kind: EventKind,
        handler: Callback,
    ) -> Result<Option<Callback>, ComposeError> {
        let data = self.nodes.get_mut(node).ok_or(ComposeError::UnknownNode)?;
        Ok(data.callbacks.insert(kind, handler))
    }

    /// The `kind` callback declared on `node`.
    pub fn callback(&self, node: NodeId, kind: EventKind) -> Option<Callback> {
        self.nodes.get(node)?.callbacks.get(kind).cloned()
    }

    /// The live object bound to `node`.
    pub fn live(&self, node: NodeId) -> Result<LiveId, BindError> {
        let data = self.nodes.get(node).ok_or(BindError::UnknownNode)?;
        data.live.ok_or_else(|| BindError::UnboundNode {
            name: data.name.clone(),
        })
    }

    /// Record the live object bound to `node`.
    pub(crate) fn set_live(&mut self, node: NodeId, live: LiveId) {
        if let Some(data) = self.nodes.get_mut(node) {
            debug_assert!(data.live.is_none(), "live handle is write-once per binding pass");
            data.live = Some(live);
        }
    }

    /// Forget every live handle, before binding again.
    pub fn clear_bindings(&mut self) {
        for data in self.nodes.values_mut() {
            data.live = None;
        }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node, in registration order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// The root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the composition has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is a node of this composition.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

/// Turn an element into node data under a name.
trait IntoNode {
    fn into_node(self, name: &str) -> NodeData;
}

impl<E: Element> IntoNode for E {
    fn into_node(mut self, name: &str) -> NodeData {
        let callbacks = self.take_callbacks();
        NodeData::new(self.kind(), name, self.fragment(name)).with_callbacks(callbacks)
    }
}
