//! Object binder: declared nodes → live objects, callbacks → connections.

pub mod binder;

pub use binder::{bind, BindError, Binding};
