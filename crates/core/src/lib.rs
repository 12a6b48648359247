//! Core traits and types for Hedonic.
//!
//! This crate defines the shared abstractions that estimators and their front
//! ends build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call

mod model;

pub use model::{Model, Snapshot};
