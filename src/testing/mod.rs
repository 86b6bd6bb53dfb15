//! Headless testing harness: an in-memory host and a window driver.
//!
//! Use [`HeadlessHost`] to load compiled markup into a live graph without a
//! renderer, and the [`Pilot`] to drive a bound window by element name.

pub mod headless;
pub mod pilot;

pub use headless::{HeadlessHost, LiveObject};
pub use pilot::Pilot;
