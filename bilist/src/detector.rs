use crate::{Edge, ScrollViewport};

/// A single visibility report for a sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityEntry {
    pub sentinel: Edge,
    /// Visible share of the sentinel inside the viewport, in `0.0..=1.0`.
    pub ratio: f32,
}

impl VisibilityEntry {
    pub fn new(sentinel: Edge, ratio: f32) -> Self {
        Self { sentinel, ratio }
    }

    pub fn visible(sentinel: Edge) -> Self {
        Self::new(sentinel, 1.0)
    }

    pub fn hidden(sentinel: Edge) -> Self {
        Self::new(sentinel, 0.0)
    }

    pub fn is_visible(&self) -> bool {
        self.ratio.is_finite() && self.ratio > 0.0
    }
}

/// The host's visibility-detection mechanism (e.g. a native intersection observer, or a
/// layout pass in a TUI).
///
/// The controller tells the observer which sentinels are rendered and disconnects it on
/// unmount. Observers may report on every recomputation; edge-triggering is handled by
/// [`EdgeProximityDetector`].
pub trait VisibilityObserver {
    fn observe(&mut self, sentinel: Edge);

    fn unobserve(&mut self, sentinel: Edge);

    fn disconnect(&mut self);

    /// Recomputes visibility of observed sentinels and reports the resulting entries.
    fn take_records(
        &mut self,
        viewport: &dyn ScrollViewport,
        emit: &mut dyn FnMut(VisibilityEntry),
    );
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct SentinelState {
    observed: bool,
    visible: bool,
}

/// Turns a raw stream of visibility reports into "became visible" transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeProximityDetector {
    sentinels: [SentinelState; 2],
}

impl EdgeProximityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a freshly rendered sentinel. Its visibility starts out unknown (hidden),
    /// so the first positive report fires.
    pub fn observe(&mut self, sentinel: Edge) {
        self.sentinels[sentinel.index()] = SentinelState {
            observed: true,
            visible: false,
        };
    }

    pub fn unobserve(&mut self, sentinel: Edge) {
        self.sentinels[sentinel.index()] = SentinelState::default();
    }

    pub fn disconnect(&mut self) {
        self.sentinels = Default::default();
    }

    pub fn is_observed(&self, sentinel: Edge) -> bool {
        self.sentinels[sentinel.index()].observed
    }

    pub fn is_visible(&self, sentinel: Edge) -> bool {
        self.sentinels[sentinel.index()].visible
    }

    /// Feeds one report. Returns the sentinel's edge when it just became visible.
    pub fn report(&mut self, entry: VisibilityEntry) -> Option<Edge> {
        let state = &mut self.sentinels[entry.sentinel.index()];
        if !state.observed {
            return None;
        }
        let was_visible = state.visible;
        state.visible = entry.is_visible();
        (state.visible && !was_visible).then_some(entry.sentinel)
    }
}
