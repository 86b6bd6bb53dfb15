//! Window: a bound composition, its host and its style state.
//!
//! [`Window::dispatch`] runs one host event to completion. Per-element
//! events walk the connection table of their source in connection order;
//! a release that completes a click then runs the `Activated` slots,
//! primary slot first.

use crate::binding::{bind, Binding};
use crate::chrome::{ChromeController, Edge};
use crate::compose::{Composition, NodeId};
use crate::error::Result;
use crate::event::{Callback, EventContext, EventKind, HostEvent, Signal, Slot};
use crate::live::{Host, LiveId};
use crate::state::{StyleMachine, WindowState};
use crate::style::{StyleTable, Value};

/// A composition bound to a running host.
pub struct Window<H: Host> {
    composition: Composition,
    host: H,
    machine: StyleMachine,
    binding: Binding,
    chrome: ChromeController,
}

impl<H: Host> Window<H> {
    /// Bind `composition` to `host` and apply the initial styles.
    pub fn attach(mut composition: Composition, host: H, table: StyleTable) -> Result<Self> {
        let binding = bind(&mut composition, &host);
        let mut machine = StyleMachine::new(table);
        if let Some(frame) = binding.frame() {
            machine.set_frame(frame);
        }
        for &(object, kind) in binding.styled() {
            machine.track(object, kind);
        }

        let mut window = Self {
            composition,
            host,
            machine,
            binding,
            chrome: ChromeController::new(),
        };
        window.machine.apply_all(&mut window.host)?;
        Ok(window)
    }

    // ── Accessors ─────────────────────────────────────────────────────

    /// The declared composition, with live handles filled in.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// The host runtime.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host runtime.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The binding produced at attach time.
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The style state machine.
    pub fn machine(&self) -> &StyleMachine {
        &self.machine
    }

    /// The current focus and chrome axes.
    pub fn state(&self) -> WindowState {
        self.machine.window_state()
    }

    /// Find a node by declared name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.composition.find(name)
    }

    // ── Live access ───────────────────────────────────────────────────

    /// The live object bound to `node`.
    pub fn live(&self, node: NodeId) -> Result<LiveId> {
        Ok(self.composition.live(node)?)
    }

    /// Read a live property of a bound node.
    pub fn property(&self, node: NodeId, name: &str) -> Result<Option<Value>> {
        let live = self.live(node)?;
        Ok(self.host.property(live, name))
    }

    /// Write a live property of a bound node.
    pub fn set_property(&mut self, node: NodeId, name: &str, value: Value) -> Result<()> {
        let live = self.live(node)?;
        self.host.set_property(live, name, value)?;
        Ok(())
    }

    /// Replace the text of a bound label or button.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> Result<()> {
        self.set_property(node, "text", Value::Text(text.into()))
    }

    /// Register a callback after binding, replacing the previous handler of
    /// the same kind.
    pub fn connect(&mut self, node: NodeId, kind: EventKind, handler: Callback) -> Result<()> {
        let live = self.live(node)?;
        self.composition.connect(node, kind, handler)?;
        self.binding.wire_callback(node, live, kind);
        Ok(())
    }

    // ── Chrome ────────────────────────────────────────────────────────

    /// Start a native window move.
    pub fn begin_move(&mut self) -> bool {
        self.chrome.begin_move(&mut self.host)
    }

    /// Start a native window resize along `edge`.
    pub fn begin_resize(&mut self, edge: Edge) -> bool {
        self.chrome.begin_resize(&mut self.host, edge)
    }

    /// Start a native window resize from the host's raw edge code.
    pub fn begin_resize_raw(&mut self, code: u32) -> Result<bool> {
        Ok(self.chrome.begin_resize_raw(&mut self.host, code)?)
    }

    // ── Dispatch ──────────────────────────────────────────────────────

    /// Process one host event.
    pub fn dispatch(&mut self, event: HostEvent) -> Result<()> {
        tracing::trace!("dispatch {:?}", event);
        match event {
            HostEvent::WindowActivated => self.machine.on_activate(&mut self.host),
            HostEvent::WindowDeactivated => self.machine.on_deactivate(&mut self.host),
            HostEvent::WindowStateChanged(chrome) => {
                self.machine.on_window_state_changed(&mut self.host, chrome)
            }
            HostEvent::HoverChanged { source, .. }
            | HostEvent::Pressed { source }
            | HostEvent::Released { source } => self.dispatch_element(source, event),
        }
    }

    fn dispatch_element(&mut self, source: LiveId, event: HostEvent) -> Result<()> {
        let Some(signal) = event.signal() else {
            return Ok(());
        };
        let hovered = match event {
            HostEvent::HoverChanged { hovered, .. } => hovered,
            _ => self.machine.element(source).is_some_and(|e| e.hovered),
        };

        let mut activated = false;
        for slot in self.binding.connections().slots(source, signal) {
            match slot {
                Slot::StyleTransition => {
                    activated |= self.machine.handle(&mut self.host, &event)?;
                }
                Slot::Callback { node, kind } => self.invoke(node, kind, hovered)?,
            }
        }

        if activated {
            let mut slots = self.binding.connections().slots(source, Signal::Activated);
            // The primary slot runs before click handlers.
            slots.sort_by_key(|slot| {
                !matches!(slot, Slot::Callback { kind: EventKind::Press, .. })
            });
            tracing::debug!("{:?} activated, {} handlers", source, slots.len());
            for slot in slots {
                if let Slot::Callback { node, kind } = slot {
                    self.invoke(node, kind, hovered)?;
                }
            }
        }
        Ok(())
    }

    fn invoke(&mut self, node: NodeId, kind: EventKind, hovered: bool) -> Result<()> {
        let Some(handler) = self.composition.callback(node, kind) else {
            return Ok(());
        };
        let mut ctx = EventContext::new(node, kind, hovered, &self.composition, &mut self.host);
        handler(&mut ctx)
    }
}

impl<H: Host + std::fmt::Debug> std::fmt::Debug for Window<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("host", &self.host)
            .field("state", &self.machine.window_state())
            .field("nodes", &self.composition.len())
            .finish_non_exhaustive()
    }
}
