use crate::{Direction, Orientation, PendingAction};

/// A lightweight, serializable snapshot of a controller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// debugging overlays and test assertions; restoring a controller from it is not supported
/// because the viewport and callbacks cannot be captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerState {
    pub orientation: Orientation,
    pub direction: Direction,
    pub mounted: bool,
    pub pending: Option<PendingAction>,
    pub has_more_at_head: bool,
    pub has_more_at_tail: bool,
    pub head_last_pass_ms: Option<u64>,
    pub tail_last_pass_ms: Option<u64>,
}

/// What the rendering layer should draw at an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SentinelSlot {
    /// The zero-size marker watched for visibility.
    Sentinel,
    /// A loading placeholder shown while more content is pending at this edge.
    Loader,
}
