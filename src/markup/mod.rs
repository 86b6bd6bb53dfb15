//! Markup compiler: recursive, indentation-aware emission of host markup.

pub mod compiler;
pub mod fragment;

pub use compiler::{compile, compile_node, CompileError};
pub use fragment::{escape_string, Fragment, SPLIT_MARKER};
