//! Composition tree: the declared, slotmap-backed tree of layouts and elements.

pub mod node;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::{ComposeError, Composition};
