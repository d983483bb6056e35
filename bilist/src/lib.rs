//! A headless controller for lists that load more content at either end.
//!
//! For geometry-based visibility detection and a simulated scroll container, see the
//! `bilist-adapter` crate.
//!
//! The controller covers three concerns:
//! - detecting when a zero-size sentinel at either end of the content becomes visible
//! - throttling the resulting "need more" notifications per edge
//! - keeping the visible content in place when items are added at the edge the viewport is
//!   anchored to (prepend in a forward list, append in a reversed one)
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll container ([`ScrollViewport`])
//! - sentinel visibility ([`VisibilityObserver`] or pushed [`VisibilityEntry`] values)
//! - timestamps in milliseconds
//! - a call to [`ListController::settle`] after each content mutation is laid out
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod detector;
mod diagnostics;
mod options;
mod orientation;
mod state;
mod throttle;
mod viewport;


pub use anchor::{AnchorRecorder, Correction, PendingAction, ScrollMetrics};
pub use controller::{Dispatch, ListController, PollSummary};
pub use detector::{EdgeProximityDetector, VisibilityEntry, VisibilityObserver};
pub use diagnostics::{Diagnostic, DiagnosticsSink, Severity};
pub use options::{EdgeCallback, ListConfig, ListOptions};
pub use orientation::{Axis, Direction, Edge, Orientation, ParseOrientationError};
pub use state::{ControllerState, SentinelSlot};
pub use throttle::{Throttle, ThrottleGate, Throttled};
pub use viewport::ScrollViewport;
