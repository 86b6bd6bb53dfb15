//! Pilot: programmatic interaction with a headless window.
//!
//! The `Pilot` compiles a composition, loads it into a [`HeadlessHost`] and
//! attaches a [`Window`]. It then simulates host events by element name:
//! pointer hover, press, release, click, window focus and window state.

use super::headless::HeadlessHost;
use crate::app::AppConfig;
use crate::compose::{Composition, NodeId};
use crate::error::Result;
use crate::event::HostEvent;
use crate::live::{Host, LiveId};
use crate::markup::compile;
use crate::state::Chrome;
use crate::style::{StyleTable, Value};
use crate::window::Window;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless window driver for testing.
///
/// # Examples
///
/// ```ignore
/// use cell_ui::testing::Pilot;
///
/// let mut pilot = Pilot::new(ui)?;
/// pilot.click("ok")?;
/// assert_eq!(pilot.selector("ok").as_deref(), Some("Button:hover"));
/// ```
pub struct Pilot {
    window: Window<HeadlessHost>,
    markup: String,
}

impl Pilot {
    /// Compile `composition` and attach it with the built-in style table.
    pub fn new(composition: Composition) -> Result<Self> {
        Self::with_style(composition, StyleTable::builtin())
    }

    /// Compile `composition` and attach it with the given style table.
    pub fn with_style(composition: Composition, style: StyleTable) -> Result<Self> {
        Self::build(composition, style, |_| {})
    }

    /// Build with the style table and title of an [`AppConfig`]. Nothing is
    /// written to the config's markup path.
    pub fn with_config(composition: Composition, config: AppConfig) -> Result<Self> {
        if config.validate_style {
            config.style.validate()?;
        }
        let mut pilot = Self::with_style(composition, config.style)?;
        if let Some(title) = config.title {
            let window = pilot.host().window();
            pilot
                .window
                .host_mut()
                .set_property(window, "title", Value::Text(title))?;
        }
        Ok(pilot)
    }

    /// Compile, then let `prepare` alter the live graph (for example drop an
    /// object) before binding.
    pub fn build(
        composition: Composition,
        style: StyleTable,
        prepare: impl FnOnce(&mut HeadlessHost),
    ) -> Result<Self> {
        let markup = compile(&composition)?;
        let mut host = HeadlessHost::from_markup(&markup);
        prepare(&mut host);
        let window = Window::attach(composition, host, style)?;
        Ok(Self { window, markup })
    }

    // ── Element events ───────────────────────────────────────────────

    /// Move the pointer onto the element named `name`.
    pub fn hover(&mut self, name: &str) -> Result<()> {
        let source = self.live(name)?;
        self.window.dispatch(HostEvent::HoverChanged { source, hovered: true })
    }

    /// Move the pointer off the element named `name`.
    pub fn leave(&mut self, name: &str) -> Result<()> {
        let source = self.live(name)?;
        self.window.dispatch(HostEvent::HoverChanged { source, hovered: false })
    }

    /// Pointer down on the element named `name`.
    pub fn press(&mut self, name: &str) -> Result<()> {
        let source = self.live(name)?;
        self.window.dispatch(HostEvent::Pressed { source })
    }

    /// Pointer up on the element named `name`.
    pub fn release(&mut self, name: &str) -> Result<()> {
        let source = self.live(name)?;
        self.window.dispatch(HostEvent::Released { source })
    }

    /// Hover, press and release the element named `name`. The pointer stays
    /// over it.
    pub fn click(&mut self, name: &str) -> Result<()> {
        self.hover(name)?;
        self.press(name)?;
        self.release(name)
    }

    // ── Window events ────────────────────────────────────────────────

    /// Give the window focus.
    pub fn activate(&mut self) -> Result<()> {
        self.window.dispatch(HostEvent::WindowActivated)
    }

    /// Take focus away from the window.
    pub fn deactivate(&mut self) -> Result<()> {
        self.window.dispatch(HostEvent::WindowDeactivated)
    }

    /// Change the window chrome state.
    pub fn set_chrome(&mut self, chrome: Chrome) -> Result<()> {
        self.window.dispatch(HostEvent::WindowStateChanged(chrome))
    }

    /// Maximize the window.
    pub fn maximize(&mut self) -> Result<()> {
        self.set_chrome(Chrome::Maximized)
    }

    /// Restore the window to normal size.
    pub fn restore(&mut self) -> Result<()> {
        self.set_chrome(Chrome::Normal)
    }

    // ── Query ────────────────────────────────────────────────────────

    /// The compiled markup the host was loaded from.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The attached window.
    pub fn window(&self) -> &Window<HeadlessHost> {
        &self.window
    }

    /// Mutable access to the attached window.
    pub fn window_mut(&mut self) -> &mut Window<HeadlessHost> {
        &mut self.window
    }

    /// The headless host.
    pub fn host(&self) -> &HeadlessHost {
        self.window.host()
    }

    /// The declared node named `name`.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.window.find(name)
    }

    /// The live object of the declared node named `name`, or of the host
    /// object named `name` when no node declares it.
    pub fn live(&self, name: &str) -> Result<LiveId> {
        match self.node(name) {
            Some(node) => self.window.live(node),
            None => self.host().find(name).ok_or_else(|| {
                crate::binding::BindError::UnboundNode {
                    name: name.to_owned(),
                }
                .into()
            }),
        }
    }

    /// The selector the element named `name` currently derives.
    pub fn selector(&self, name: &str) -> Option<String> {
        let live = self.live(name).ok()?;
        Some(self.window.machine().selector_for(live)?.key())
    }

    /// A live property of the object named `name`, or of its part.
    pub fn property(&self, name: &str, part: Option<&str>, property: &str) -> Option<Value> {
        let mut object = self.live(name).ok()?;
        if let Some(part) = part {
            object = self.host().part(object, part).ok()?;
        }
        self.host().property(object, property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Button, MainFrame, FRAME_OBJECT_NAME};

    fn pilot() -> Pilot {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        ui.add(root, "ok", Button::new("OK")).unwrap();
        Pilot::new(ui).unwrap()
    }

    #[test]
    fn click_leaves_button_hovered() {
        let mut pilot = pilot();
        assert_eq!(pilot.selector("ok").as_deref(), Some("Button"));
        pilot.click("ok").unwrap();
        assert_eq!(pilot.selector("ok").as_deref(), Some("Button:hover"));
        pilot.leave("ok").unwrap();
        assert_eq!(pilot.selector("ok").as_deref(), Some("Button"));
    }

    #[test]
    fn press_shows_clicked_colors() {
        let mut pilot = pilot();
        pilot.hover("ok").unwrap();
        pilot.press("ok").unwrap();
        assert_eq!(
            pilot.property("ok", Some("text"), "color"),
            Some(Value::color("#FFF"))
        );
    }

    #[test]
    fn live_falls_back_to_host_names() {
        let pilot = pilot();
        assert!(pilot.live(FRAME_OBJECT_NAME).is_ok());
        assert!(pilot.live("nowhere").is_err());
        assert!(pilot.selector("nowhere").is_none());
    }

    #[test]
    fn with_config_sets_title() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        ui.add(root, "ok", Button::new("OK")).unwrap();
        let pilot = Pilot::with_config(ui, AppConfig::new().with_title("Other")).unwrap();
        assert_eq!(pilot.property("window", None, "title"), Some(Value::from("Other")));
        assert!(pilot.markup().contains("title: \"Test\""));
    }

    #[test]
    fn maximize_and_restore() {
        let mut pilot = pilot();
        pilot.maximize().unwrap();
        assert_eq!(
            pilot.property(FRAME_OBJECT_NAME, None, "radius"),
            Some(Value::Number(0.0))
        );
        pilot.restore().unwrap();
        assert_eq!(
            pilot.property(FRAME_OBJECT_NAME, None, "radius"),
            Some(Value::Number(10.0))
        );
    }
}
