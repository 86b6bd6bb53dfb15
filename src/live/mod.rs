//! Live object graph boundary: handles and the host trait.

pub mod host;

pub use host::{Host, HostError, LiveId};
