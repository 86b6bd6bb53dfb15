//! Event system: host events, the signal/slot connection table, callbacks.

pub mod callback;
pub mod connection;
pub mod input;

pub use callback::{callback, Callback, Callbacks, EventContext, EventKind};
pub use connection::{Connection, Connections, Slot};
pub use input::{HostEvent, Signal};
