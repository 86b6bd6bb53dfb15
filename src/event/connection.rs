//! Connection table: live signal → slot.
//!
//! Binding does not hand closures to the host. It records, per live object,
//! which [`Slot`]s listen on which [`Signal`]; the window walks this table
//! when it dispatches a [`HostEvent`](super::HostEvent).

use slotmap::SecondaryMap;

use super::callback::EventKind;
use super::input::Signal;
use crate::compose::NodeId;
use crate::live::LiveId;

/// What runs when a signal fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Default visual feedback: run the style state machine for the source.
    StyleTransition,
    /// The application callback of `kind` declared on `node`.
    Callback { node: NodeId, kind: EventKind },
}

/// One signal-to-slot connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub signal: Signal,
    pub slot: Slot,
}

/// All connections of a bound window, keyed by live source.
#[derive(Debug, Default)]
pub struct Connections {
    by_source: SecondaryMap<LiveId, Vec<Connection>>,
}

impl Connections {
    /// Create an empty connection table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `slot` to `signal` on `source`. Connecting the same pair twice
    /// is a no-op. Slots run in connection order.
    pub fn connect(&mut self, source: LiveId, signal: Signal, slot: Slot) {
        let connection = Connection { signal, slot };
        match self.by_source.get_mut(source) {
            Some(list) => {
                if !list.contains(&connection) {
                    list.push(connection);
                }
            }
            None => {
                self.by_source.insert(source, vec![connection]);
            }
        }
    }

    /// The slots listening on `signal` of `source`, in connection order.
    pub fn slots(&self, source: LiveId, signal: Signal) -> Vec<Slot> {
        self.by_source
            .get(source)
            .map(|list| {
                list.iter()
                    .filter(|c| c.signal == signal)
                    .map(|c| c.slot)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether anything listens on `signal` of `source`.
    pub fn is_connected(&self, source: LiveId, signal: Signal) -> bool {
        self.by_source
            .get(source)
            .is_some_and(|list| list.iter().any(|c| c.signal == signal))
    }

    /// Number of live objects with at least one connection.
    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }

    /// Total number of connections.
    pub fn len(&self) -> usize {
        self.by_source.values().map(Vec::len).sum()
    }

    /// Whether no connection exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every connection (before re-binding).
    pub fn clear(&mut self) {
        self.by_source.clear();
    }
}
