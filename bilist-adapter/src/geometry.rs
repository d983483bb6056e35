use bilist::{Direction, Edge, Orientation, ScrollViewport, VisibilityEntry, VisibilityObserver};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Watch {
    #[default]
    Off,
    /// Observed, nothing reported yet.
    Fresh,
    Reported(bool),
}

/// A [`VisibilityObserver`] that derives sentinel visibility from scroll geometry.
///
/// Useful for hosts without a native visibility primitive (TUIs, canvas renderers, tests). The
/// leading edge's sentinel sits at offset 0 and the trailing edge's at the end of the scroll
/// extent. A zero-size sentinel counts as fully visible when it lies inside the viewport,
/// boundaries included, optionally widened by `margin` on both sides so loading starts before
/// the edge is actually reached.
///
/// Like a native intersection observer, it reports a sentinel once when it starts being
/// observed and then only when its visibility changes.
#[derive(Clone, Debug)]
pub struct GeometryObserver {
    direction: Direction,
    margin: u64,
    watch: [Watch; 2],
}

impl GeometryObserver {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            direction: orientation.resolve(),
            margin: 0,
            watch: [Watch::Off; 2],
        }
    }

    pub fn with_margin(mut self, margin: u64) -> Self {
        self.margin = margin;
        self
    }

    pub fn margin(&self) -> u64 {
        self.margin
    }

    pub fn is_observing(&self, sentinel: Edge) -> bool {
        self.watch[sentinel.index()] != Watch::Off
    }

    /// Position of a sentinel along the main axis.
    pub fn sentinel_position(&self, sentinel: Edge, viewport: &dyn ScrollViewport) -> u64 {
        if sentinel == self.direction.leading {
            0
        } else {
            viewport.scroll_extent(self.direction.axis)
        }
    }

    pub fn is_in_view(&self, sentinel: Edge, viewport: &dyn ScrollViewport) -> bool {
        let axis = self.direction.axis;
        let offset = viewport.scroll_offset(axis);
        let start = offset.saturating_sub(self.margin);
        let end = offset
            .saturating_add(viewport.viewport_extent(axis))
            .saturating_add(self.margin);
        let at = self.sentinel_position(sentinel, viewport);
        start <= at && at <= end
    }
}

impl VisibilityObserver for GeometryObserver {
    fn observe(&mut self, sentinel: Edge) {
        self.watch[sentinel.index()] = Watch::Fresh;
    }

    fn unobserve(&mut self, sentinel: Edge) {
        self.watch[sentinel.index()] = Watch::Off;
    }

    fn disconnect(&mut self) {
        self.watch = [Watch::Off; 2];
    }

    fn take_records(
        &mut self,
        viewport: &dyn ScrollViewport,
        emit: &mut dyn FnMut(VisibilityEntry),
    ) {
        for sentinel in Edge::BOTH {
            let prev = self.watch[sentinel.index()];
            if prev == Watch::Off {
                continue;
            }
            let visible = self.is_in_view(sentinel, viewport);
            if prev == Watch::Reported(visible) {
                continue;
            }
            self.watch[sentinel.index()] = Watch::Reported(visible);
            atrace!(?sentinel, visible, "GeometryObserver: visibility changed");
            emit(VisibilityEntry::new(
                sentinel,
                if visible { 1.0 } else { 0.0 },
            ));
        }
    }
}
