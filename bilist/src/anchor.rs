use crate::{Direction, Edge, ScrollViewport};

/// Main-axis scroll geometry captured right before the content is mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub extent_before: u64,
    pub offset_before: u64,
}

impl ScrollMetrics {
    pub fn capture(viewport: &dyn ScrollViewport, direction: Direction) -> Self {
        Self {
            extent_before: viewport.scroll_extent(direction.axis),
            offset_before: viewport.scroll_offset(direction.axis),
        }
    }
}

/// The anchor correction applied by a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    /// The edge that requested more content.
    pub edge: Edge,
    /// `extent_after - extent_before`.
    pub delta: i64,
    /// The signed amount added to the recorded offset (`delta` or `0`).
    pub shift: i64,
    /// The offset written back to the viewport.
    pub offset: u64,
}

/// An edge-fire waiting for its content mutation to settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingAction {
    pub edge: Edge,
    pub metrics: ScrollMetrics,
}

/// The `idle -> pending(edge) -> idle` state machine that keeps the visual anchor in place
/// across a content mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorRecorder {
    pending: Option<PendingAction>,
}

impl AnchorRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    pub fn pending_edge(&self) -> Option<Edge> {
        self.pending.map(|p| p.edge)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Enters `pending(edge)`. Returns the action it replaced, if any.
    pub fn record(&mut self, edge: Edge, metrics: ScrollMetrics) -> Option<PendingAction> {
        self.pending.replace(PendingAction { edge, metrics })
    }

    /// Leaves `pending(edge)`, computing the offset that keeps the anchor in place.
    ///
    /// Returns `None` when nothing is pending; the caller must not touch the viewport then.
    pub fn settle(&mut self, extent_after: u64, direction: Direction) -> Option<Correction> {
        let PendingAction { edge, metrics } = self.pending.take()?;
        let delta = signed_delta(metrics.extent_before, extent_after);
        let shift = direction.correction(edge, delta);
        Some(Correction {
            edge,
            delta,
            shift,
            offset: metrics.offset_before.saturating_add_signed(shift),
        })
    }

    /// Drops any pending action without computing a correction.
    pub fn clear(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }
}

fn signed_delta(before: u64, after: u64) -> i64 {
    if after >= before {
        i64::try_from(after - before).unwrap_or(i64::MAX)
    } else {
        i64::try_from(before - after).map_or(i64::MIN, |d| -d)
    }
}
