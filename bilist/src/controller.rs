use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::diagnostics;
use crate::{
    AnchorRecorder, ControllerState, Correction, Diagnostic, Direction, Edge, EdgeCallback,
    EdgeProximityDetector, ListOptions, Orientation, PendingAction, ScrollMetrics,
    ScrollViewport, SentinelSlot, ThrottleGate, VisibilityEntry, VisibilityObserver,
};

/// What happened to a single visibility report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// No viewport is mounted; the report was dropped.
    Detached,
    /// Not a hidden-to-visible transition of an observed sentinel.
    Ignored,
    /// The edge's throttle gate was closed.
    Throttled,
    /// The edge passed the gate but the item source has nothing more at that edge.
    Exhausted,
    /// Metrics were recorded and the edge's callback was invoked.
    Requested(Edge),
}

impl Dispatch {
    pub fn requested(self) -> Option<Edge> {
        match self {
            Self::Requested(edge) => Some(edge),
            _ => None,
        }
    }
}

/// Outcome of [`ListController::poll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollSummary {
    /// Number of visibility entries the observer reported.
    pub entries: usize,
    pub head_requested: bool,
    pub tail_requested: bool,
}

impl PollSummary {
    pub fn requested(&self, edge: Edge) -> bool {
        match edge {
            Edge::Head => self.head_requested,
            Edge::Tail => self.tail_requested,
        }
    }

    pub fn any_requested(&self) -> bool {
        self.head_requested || self.tail_requested
    }
}

struct Mount<V> {
    viewport: V,
    observer: Option<Box<dyn VisibilityObserver>>,
}

/// A headless controller for a list that loads more content at either end.
///
/// The controller does not render or fetch anything. Adapters drive it by calling:
/// - `mount` once the scroll container exists, and `unmount` when it goes away
/// - `poll(now_ms)` after layout/scroll changes (or `on_visibility` if the host toolkit pushes
///   visibility reports itself)
/// - `settle()` once the items added in response to a request are reflected in the layout
///
/// `settle` keeps the content that was on screen before the mutation in the same place.
pub struct ListController<V> {
    options: ListOptions,
    direction: Direction,
    gates: [ThrottleGate; 2],
    detector: EdgeProximityDetector,
    anchor: AnchorRecorder,
    mount: Option<Mount<V>>,
}

impl<V: ScrollViewport> ListController<V> {
    pub fn new(options: ListOptions) -> Self {
        let direction = options.orientation.resolve();
        let gate = ThrottleGate::new(options.cooldown_ms);
        bdebug!(
            orientation = options.orientation.name(),
            cooldown_ms = options.cooldown_ms,
            "ListController::new"
        );
        Self {
            options,
            direction,
            gates: [gate; 2],
            detector: EdgeProximityDetector::new(),
            anchor: AnchorRecorder::new(),
            mount: None,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn report(&self, diagnostic: Diagnostic) {
        diagnostics::emit(
            self.options.on_diagnostic.as_ref(),
            self.options.suppress_diagnostics,
            diagnostic,
        );
    }

    /// Replaces the options, keeping the orientation chosen at construction.
    ///
    /// Intended to be called on every render with freshly built options (has-more flags,
    /// callbacks). A different orientation is reported and ignored.
    pub fn set_options(&mut self, mut options: ListOptions) {
        if options.orientation != self.options.orientation {
            self.report(Diagnostic::OrientationChanged {
                configured: self.options.orientation,
                requested: options.orientation,
            });
            options.orientation = self.options.orientation;
        }
        if options.cooldown_ms != self.options.cooldown_ms {
            for gate in &mut self.gates {
                gate.set_cooldown_ms(options.cooldown_ms);
            }
        }
        self.options = options;
        btrace!(
            has_more_at_head = self.options.has_more_at_head,
            has_more_at_tail = self.options.has_more_at_tail,
            "ListController::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// The orientation is fixed; a different value is reported and ignored.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.options.orientation {
            return;
        }
        self.report(Diagnostic::OrientationChanged {
            configured: self.options.orientation,
            requested: orientation,
        });
    }

    /// Same as `set_orientation`, for hosts that carry the orientation as text.
    pub fn set_orientation_name(&mut self, name: &str) {
        match name.parse::<Orientation>() {
            Ok(orientation) => self.set_orientation(orientation),
            Err(_) => self.report(Diagnostic::UnknownOrientation {
                name: name.to_string(),
            }),
        }
    }

    /// Changes the cooldown of both edges. Last-pass timestamps are kept.
    pub fn set_cooldown_ms(&mut self, cooldown_ms: u64) {
        self.options.cooldown_ms = cooldown_ms;
        for gate in &mut self.gates {
            gate.set_cooldown_ms(cooldown_ms);
        }
    }

    pub fn gate(&self, edge: Edge) -> &ThrottleGate {
        &self.gates[edge.index()]
    }

    pub fn has_more_at(&self, edge: Edge) -> bool {
        self.options.has_more_at(edge)
    }

    pub fn set_has_more(&mut self, has_more_at_head: bool, has_more_at_tail: bool) {
        self.options.has_more_at_head = has_more_at_head;
        self.options.has_more_at_tail = has_more_at_tail;
    }

    pub fn set_has_more_at(&mut self, edge: Edge, has_more: bool) {
        match edge {
            Edge::Head => self.options.has_more_at_head = has_more,
            Edge::Tail => self.options.has_more_at_tail = has_more,
        }
    }

    pub fn set_on_head_needed(
        &mut self,
        on_head_needed: Option<impl Fn(&VisibilityEntry) + Send + Sync + 'static>,
    ) {
        self.options.on_head_needed = on_head_needed.map(|f| Arc::new(f) as EdgeCallback);
    }

    pub fn set_on_tail_needed(
        &mut self,
        on_tail_needed: Option<impl Fn(&VisibilityEntry) + Send + Sync + 'static>,
    ) {
        self.options.on_tail_needed = on_tail_needed.map(|f| Arc::new(f) as EdgeCallback);
    }

    /// Attaches the scroll container and the host's visibility observer.
    ///
    /// Mounting over an existing mount unmounts it first.
    pub fn mount(&mut self, viewport: V, observer: impl VisibilityObserver + 'static) {
        self.attach(viewport, Some(Box::new(observer)));
    }

    /// Attaches the scroll container only. Visibility must then be pushed through
    /// `on_visibility`.
    pub fn mount_viewport(&mut self, viewport: V) {
        self.attach(viewport, None);
    }

    fn attach(&mut self, viewport: V, observer: Option<Box<dyn VisibilityObserver>>) {
        if self.mount.is_some() {
            self.unmount();
        }
        let mut mount = Mount { viewport, observer };
        for edge in Edge::BOTH {
            self.detector.observe(edge);
            if let Some(observer) = mount.observer.as_mut() {
                observer.observe(edge);
            }
        }
        self.mount = Some(mount);
        bdebug!("ListController::mount");
    }

    /// Detaches the observer and drops any pending request without touching the viewport.
    ///
    /// Returns the viewport that was mounted.
    pub fn unmount(&mut self) -> Option<V> {
        let mut mount = self.mount.take()?;
        if let Some(observer) = mount.observer.as_mut() {
            observer.disconnect();
        }
        self.detector.disconnect();
        let _dropped = self.anchor.clear();
        bdebug!(dropped_pending = _dropped.is_some(), "ListController::unmount");
        Some(mount.viewport)
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.mount.as_ref().map(|m| &m.viewport)
    }

    /// Mutable access for the host (e.g. to lay out newly added items).
    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.mount.as_mut().map(|m| &mut m.viewport)
    }

    /// Feeds a single visibility report.
    ///
    /// A report that makes an observed sentinel visible goes through the edge's throttle gate,
    /// then the has-more flag. If both allow it, the current scroll metrics are recorded, the
    /// sentinel is swapped for a loader, and the edge's callback runs.
    ///
    /// Pending requests never block a report. A qualifying fire while an edge is pending (the
    /// same edge or the other one) replaces the recorded metrics and emits
    /// [`Diagnostic::PendingOverwritten`]; settlement then applies to the newer fire.
    pub fn on_visibility(&mut self, entry: VisibilityEntry, now_ms: u64) -> Dispatch {
        let Some(mount) = self.mount.as_mut() else {
            return Dispatch::Detached;
        };
        let Some(edge) = self.detector.report(entry) else {
            return Dispatch::Ignored;
        };
        if !self.gates[edge.index()].try_pass(now_ms) {
            return Dispatch::Throttled;
        }
        if !self.options.has_more_at(edge) {
            btrace!(?edge, "edge visible but nothing more to load");
            return Dispatch::Exhausted;
        }

        let metrics = ScrollMetrics::capture(&mount.viewport, self.direction);
        let replaced = self.anchor.record(edge, metrics);

        // The loader replaces the sentinel on screen. The detector keeps tracking the edge so
        // hosts that push visibility can retry an edge whose load never settled.
        let reshown = replaced.map(|prev| prev.edge).filter(|&prev| prev != edge);
        if let Some(observer) = mount.observer.as_mut() {
            observer.unobserve(edge);
            if let Some(prev) = reshown {
                observer.observe(prev);
            }
        }
        if let Some(prev) = reshown {
            self.detector.observe(prev);
        }
        if let Some(prev) = replaced {
            self.report(Diagnostic::PendingOverwritten {
                previous: prev.edge,
                next: edge,
            });
        }

        bdebug!(
            ?edge,
            extent_before = metrics.extent_before,
            offset_before = metrics.offset_before,
            now_ms,
            "edge requested"
        );
        if let Some(cb) = self.options.callback_for(edge) {
            cb(&entry);
        }
        Dispatch::Requested(edge)
    }

    /// Pulls visibility records from the mounted observer and dispatches them in order.
    pub fn poll(&mut self, now_ms: u64) -> PollSummary {
        let mut entries = Vec::new();
        if let Some(mount) = self.mount.as_mut() {
            if let Some(observer) = mount.observer.as_mut() {
                observer.take_records(&mount.viewport, &mut |entry| entries.push(entry));
            }
        }

        let mut summary = PollSummary {
            entries: entries.len(),
            ..PollSummary::default()
        };
        for entry in entries {
            match self.on_visibility(entry, now_ms) {
                Dispatch::Requested(Edge::Head) => summary.head_requested = true,
                Dispatch::Requested(Edge::Tail) => summary.tail_requested = true,
                _ => {}
            }
        }
        summary
    }

    /// The "mutation settled" hook.
    ///
    /// Call once per content change, after the new items are reflected in the viewport's
    /// scroll extent. With a pending edge, writes the anchored offset to the viewport (exactly
    /// once), shows that edge's sentinel again and returns the correction. Without one, or
    /// without a mounted viewport, does nothing.
    pub fn settle(&mut self) -> Option<Correction> {
        let mount = self.mount.as_mut()?;
        let axis = self.direction.axis;
        let extent_after = mount.viewport.scroll_extent(axis);
        let correction = self.anchor.settle(extent_after, self.direction)?;

        mount.viewport.set_scroll_offset(axis, correction.offset);

        self.detector.observe(correction.edge);
        if let Some(observer) = mount.observer.as_mut() {
            observer.observe(correction.edge);
        }
        bdebug!(
            edge = ?correction.edge,
            delta = correction.delta,
            shift = correction.shift,
            offset = correction.offset,
            "settled"
        );
        Some(correction)
    }

    pub fn pending(&self) -> Option<Edge> {
        self.anchor.pending_edge()
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        self.anchor.pending()
    }

    /// What to render at `edge`: the sentinel, or a loader while that edge is pending.
    pub fn sentinel_slot(&self, edge: Edge) -> SentinelSlot {
        if self.anchor.pending_edge() == Some(edge) {
            SentinelSlot::Loader
        } else {
            SentinelSlot::Sentinel
        }
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            orientation: self.options.orientation,
            direction: self.direction,
            mounted: self.mount.is_some(),
            pending: self.anchor.pending(),
            has_more_at_head: self.options.has_more_at_head,
            has_more_at_tail: self.options.has_more_at_tail,
            head_last_pass_ms: self.gates[Edge::Head.index()].last_passed_ms(),
            tail_last_pass_ms: self.gates[Edge::Tail.index()].last_passed_ms(),
        }
    }
}

impl<V> Drop for ListController<V> {
    fn drop(&mut self) {
        if let Some(observer) = self.mount.as_mut().and_then(|m| m.observer.as_mut()) {
            observer.disconnect();
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ListController<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListController")
            .field("options", &self.options)
            .field("direction", &self.direction)
            .field("gates", &self.gates)
            .field("detector", &self.detector)
            .field("anchor", &self.anchor)
            .field("viewport", &self.mount.as_ref().map(|m| &m.viewport))
            .finish_non_exhaustive()
    }
}
