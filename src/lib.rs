//! # cell-ui
//!
//! A declarative UI composition layer between application logic and a host
//! windowing runtime.
//!
//! Applications describe a window as a tree of layouts and elements. The
//! crate compiles that tree into QML-flavoured markup for the host, binds the
//! host's live objects back to the declared nodes by name, and runs a style
//! state machine that keeps colors, borders, opacity and corner radius in step
//! with window focus, pointer state and window chrome state.
//!
//! ## Core Systems
//!
//! - **[`compose`]**: slotmap-backed composition tree with per-layout name scopes
//! - **[`elements`]**: built-in layouts (`MainFrame`, `Row`, `Column`, `ScrollBox`) and elements (`Button`, `Label`)
//! - **[`markup`]**: recursive, indentation-aware markup compiler
//! - **[`binding`]**: object binder and connection wiring
//! - **[`state`]**: focus/pointer/chrome axes and the style state machine
//! - **[`style`]**: style table, selectors, per-kind property bindings, text loader
//! - **[`chrome`]**: native window move/resize pass-through
//! - **[`event`]**: host events, signal/slot connections, application callbacks
//! - **[`live`]**: the host boundary trait and live object handles
//! - **[`window`]** / **[`app`]**: orchestration and configuration
//! - **[`testing`]**: headless host and `Pilot`
//!
//! ## Example
//!
//! ```ignore
//! use cell_ui::prelude::*;
//!
//! let (mut ui, root) = Composition::with_root("window", MainFrame::new("Demo"));
//! let row = ui.add(root, "row", Row::new())?;
//! ui.add(row, "ok", Button::new("OK").on_press(|ctx| ctx.set_text(ctx.node(), "Done")))?;
//!
//! let app = Application::new(AppConfig::new(), ui)?;
//! // start the host on app.markup_path(), then:
//! let mut window = app.attach(host)?;
//! window.dispatch(event)?;
//! ```

// Foundation
pub mod error;
pub mod live;

// Declaration
pub mod compose;
pub mod elements;
pub mod markup;

// Styling
pub mod state;
pub mod style;

// Events and binding
pub mod binding;
pub mod event;

// Window
pub mod app;
pub mod chrome;
pub mod window;

// Headless harness
pub mod testing;

pub use error::{Error, Result};

/// The types most applications need.
pub mod prelude {
    pub use crate::app::{AppConfig, Application};
    pub use crate::chrome::Edge;
    pub use crate::compose::{Composition, NodeId};
    pub use crate::elements::{Button, Column, Label, MainFrame, Row, ScrollBox};
    pub use crate::event::{callback, EventContext, EventKind, HostEvent};
    pub use crate::live::{Host, LiveId};
    pub use crate::state::Chrome;
    pub use crate::style::{StyleTable, Value};
    pub use crate::window::Window;
    pub use crate::{Error, Result};
}
