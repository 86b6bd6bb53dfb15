//! StyleMachine: derives selectors from the state axes and writes the
//! matching style values onto live objects.
//!
//! Pointer transitions are recorded whatever the focus is; focus only
//! affects which selector is derived and whether a release activates.
//! Applying a selector is idempotent, so the machine can always restyle
//! from the current axes.

use slotmap::SecondaryMap;

use super::axes::{Chrome, Focus, Pointer, WindowState};
use crate::elements::ElementKind;
use crate::error::Result;
use crate::event::HostEvent;
use crate::live::{Host, LiveId};
use crate::style::properties::bindings;
use crate::style::{Selector, StyleState, StyleTable, Value};

/// Frame property mirroring the focus axis.
pub const FRAME_ACTIVE_PROPERTY: &str = "isActive";

/// Derive the selector for an element of `kind`.
///
/// Inactive focus wins over every pointer state; a held press wins over
/// hover.
pub fn derive_selector(kind: ElementKind, focus: Focus, pointer: Pointer) -> Selector {
    let state = match (focus, pointer) {
        (Focus::Inactive, _) => StyleState::Inactive,
        (Focus::Active, Pointer::Pressed) => StyleState::Clicked,
        (Focus::Active, Pointer::Hovered) => StyleState::Hover,
        (Focus::Active, Pointer::Idle) => StyleState::Default,
    };
    Selector::new(kind, state)
}

/// Pointer flags of one tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementState {
    pub kind: ElementKind,
    pub hovered: bool,
    pub pressed: bool,
}

impl ElementState {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            hovered: false,
            pressed: false,
        }
    }

    /// The pointer axis derived from the two flags.
    pub fn pointer(&self) -> Pointer {
        Pointer::from_flags(self.hovered, self.pressed)
    }
}

/// The style state machine of one window.
#[derive(Debug)]
pub struct StyleMachine {
    table: StyleTable,
    window: WindowState,
    frame: Option<LiveId>,
    elements: SecondaryMap<LiveId, ElementState>,
}

impl StyleMachine {
    /// Create a machine driven by `table`. Focus starts active, chrome normal.
    pub fn new(table: StyleTable) -> Self {
        Self {
            table,
            window: WindowState::default(),
            frame: None,
            elements: SecondaryMap::new(),
        }
    }

    /// The style table in use.
    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    /// The current focus and chrome axes.
    pub fn window_state(&self) -> WindowState {
        self.window
    }

    /// The focus axis.
    pub fn focus(&self) -> Focus {
        self.window.focus
    }

    /// The chrome axis.
    pub fn chrome(&self) -> Chrome {
        self.window.chrome
    }

    /// The frame object receiving the `MainFrame` rule.
    pub fn frame(&self) -> Option<LiveId> {
        self.frame
    }

    /// Set the frame object receiving the `MainFrame` rule.
    pub fn set_frame(&mut self, frame: LiveId) {
        self.frame = Some(frame);
    }

    /// Start tracking a styled live element. Re-tracking resets its flags.
    pub fn track(&mut self, object: LiveId, kind: ElementKind) {
        self.elements.insert(object, ElementState::new(kind));
    }

    /// Whether `object` is tracked.
    pub fn is_tracked(&self, object: LiveId) -> bool {
        self.elements.contains_key(object)
    }

    /// The pointer state of a tracked element.
    pub fn element(&self, object: LiveId) -> Option<&ElementState> {
        self.elements.get(object)
    }

    /// Number of tracked elements.
    pub fn tracked(&self) -> usize {
        self.elements.len()
    }

    /// Forget the frame and every tracked element.
    pub fn reset(&mut self) {
        self.frame = None;
        self.elements.clear();
    }

    /// The selector an element currently derives.
    pub fn selector_for(&self, object: LiveId) -> Option<Selector> {
        let element = self.elements.get(object)?;
        Some(derive_selector(element.kind, self.window.focus, element.pointer()))
    }

    // ── Applying ──────────────────────────────────────────────────────

    /// Write every property `kind` exposes for `selector` onto `object`.
    pub fn apply_selector(
        &self,
        host: &mut dyn Host,
        object: LiveId,
        selector: &Selector,
    ) -> Result<()> {
        for binding in bindings(selector.kind) {
            let value = self.table.value(selector, binding.property)?.clone();
            let target = match binding.part {
                Some(part) => host.part(object, part)?,
                None => object,
            };
            host.set_property(target, binding.target, value)?;
        }
        Ok(())
    }

    /// Restyle one tracked element from the current axes.
    pub fn apply(&self, host: &mut dyn Host, object: LiveId) -> Result<()> {
        let Some(selector) = self.selector_for(object) else {
            tracing::trace!("{:?} is not tracked, nothing to style", object);
            return Ok(());
        };
        tracing::trace!("apply {} to {:?}", selector, object);
        self.apply_selector(host, object, &selector)
    }

    /// Apply the focus colors to the frame and mirror focus in `isActive`.
    pub fn apply_frame(&self, host: &mut dyn Host) -> Result<()> {
        let Some(frame) = self.frame else {
            return Ok(());
        };
        let selector = derive_selector(ElementKind::MainFrame, self.window.focus, Pointer::Idle);
        self.apply_selector(host, frame, &selector)?;
        host.set_property(
            frame,
            FRAME_ACTIVE_PROPERTY,
            Value::Bool(self.window.focus.is_active()),
        )?;
        Ok(())
    }

    /// Apply the chrome rule: no radius, border or margins while the window
    /// fills the screen.
    pub fn apply_chrome(&self, host: &mut dyn Host) -> Result<()> {
        let Some(frame) = self.frame else {
            return Ok(());
        };
        let (radius, border, margins) = if self.window.chrome.is_expanded() {
            (0.0, 0.0, 0.0)
        } else {
            (self.table.frame_radius()?, 1.0, 1.0)
        };
        host.set_property(frame, "radius", Value::Number(radius))?;
        host.set_property(frame, "borderWidth", Value::Number(border))?;
        host.set_property(frame, "margins", Value::Number(margins))?;
        Ok(())
    }

    /// Restyle the frame and every tracked element.
    pub fn apply_all(&self, host: &mut dyn Host) -> Result<()> {
        self.apply_frame(host)?;
        self.apply_chrome(host)?;
        self.restyle_elements(host)
    }

    fn restyle_elements(&self, host: &mut dyn Host) -> Result<()> {
        for object in self.elements.keys() {
            self.apply(host, object)?;
        }
        Ok(())
    }

    // ── Window transitions ────────────────────────────────────────────

    /// The window gained focus: restyle the frame and every tracked element.
    pub fn on_activate(&mut self, host: &mut dyn Host) -> Result<()> {
        self.set_focus(host, Focus::Active)
    }

    /// The window lost focus: restyle everything to its inactive rule.
    pub fn on_deactivate(&mut self, host: &mut dyn Host) -> Result<()> {
        self.set_focus(host, Focus::Inactive)
    }

    fn set_focus(&mut self, host: &mut dyn Host, focus: Focus) -> Result<()> {
        tracing::trace!("focus {:?} -> {:?}", self.window.focus, focus);
        self.window.focus = focus;
        self.apply_frame(host)?;
        self.restyle_elements(host)
    }

    /// The window was maximized, made full-screen or restored.
    pub fn on_window_state_changed(&mut self, host: &mut dyn Host, chrome: Chrome) -> Result<()> {
        tracing::trace!("chrome {:?} -> {:?}", self.window.chrome, chrome);
        self.window.chrome = chrome;
        self.apply_chrome(host)
    }

    // ── Pointer transitions ───────────────────────────────────────────

    /// Pointer entered or left `object`.
    pub fn on_hover_changed(
        &mut self,
        host: &mut dyn Host,
        object: LiveId,
        hovered: bool,
    ) -> Result<()> {
        if let Some(element) = self.elements.get_mut(object) {
            element.hovered = hovered;
        }
        self.apply(host, object)
    }

    /// Pointer down on `object`. A press lands under the pointer, so it also
    /// marks the element hovered; hosts that send no enter events (touch)
    /// still complete clicks.
    pub fn on_pressed(&mut self, host: &mut dyn Host, object: LiveId) -> Result<()> {
        if let Some(element) = self.elements.get_mut(object) {
            element.pressed = true;
            element.hovered = true;
        }
        self.apply(host, object)
    }

    /// Returns whether the release completes a click: the element was
    /// pressed, the pointer is still over it, and the window is active.
    pub fn on_released(&mut self, host: &mut dyn Host, object: LiveId) -> Result<bool> {
        let focus = self.window.focus;
        let activated = match self.elements.get_mut(object) {
            Some(element) => {
                let was_pressed = std::mem::replace(&mut element.pressed, false);
                was_pressed && element.hovered && focus.is_active()
            }
            None => false,
        };
        self.apply(host, object)?;
        Ok(activated)
    }

    /// Route any host event to its transition. Returns whether it activated
    /// an element.
    pub fn handle(&mut self, host: &mut dyn Host, event: &HostEvent) -> Result<bool> {
        match *event {
            HostEvent::WindowActivated => self.on_activate(host)?,
            HostEvent::WindowDeactivated => self.on_deactivate(host)?,
            HostEvent::WindowStateChanged(chrome) => self.on_window_state_changed(host, chrome)?,
            HostEvent::HoverChanged { source, hovered } => {
                self.on_hover_changed(host, source, hovered)?
            }
            HostEvent::Pressed { source } => self.on_pressed(host, source)?,
            HostEvent::Released { source } => return self.on_released(host, source),
        }
        Ok(false)
    }
}
