//! Style state machine: focus, chrome and pointer axes drive selector
//! derivation and style application.

pub mod axes;
pub mod machine;

pub use axes::{Chrome, Focus, Pointer, WindowState};
pub use machine::{derive_selector, ElementState, StyleMachine, FRAME_ACTIVE_PROPERTY};
