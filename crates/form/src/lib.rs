//! Form state for the Hedonic estimator.
//!
//! The [`Controller`] owns everything a view needs to render the estimator:
//! the panel and toggle state, one [`Dropdown`] per variable, and the
//! formatted price. Views forward user actions to it and read state back; the
//! controller itself never touches a UI toolkit.
//!
//! # Modules
//!
//! - [`Layout`] and [`ElementId`] describe which elements a view provides.
//!   Anything absent is skipped without error.
//! - [`Pulse`] tracks the brief highlight shown after the price changes.
//!
//! # Features
//!
//! - `gui` — Enables [`gui::run`], a native egui window driving a
//!   [`Controller`]. This feature adds a dependency on `eframe`.

mod controller;
mod dropdown;
mod element;
mod pulse;

#[cfg(feature = "gui")]
pub mod gui;

pub use controller::Controller;
pub use dropdown::Dropdown;
pub use element::{ElementId, Layout, ParseElementError};
pub use pulse::{PULSE_DURATION, Pulse};
