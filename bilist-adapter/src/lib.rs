//! Adapter utilities for the `bilist` crate.
//!
//! The `bilist` crate is UI-agnostic and only holds the controller state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Geometry-based sentinel visibility for hosts without a native visibility primitive
//! - A simulated scroll container (for TUIs, demos and tests)
//! - A render plan that places sentinels, loaders and items in visual order
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod plan;
mod sim;


pub use geometry::GeometryObserver;
pub use plan::{Slot, render_plan};
pub use sim::SimViewport;
