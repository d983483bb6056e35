use crate::Axis;

/// The live scroll container of a rendered list.
///
/// Implemented by the host for whatever it renders into (a DOM element, a TUI pane, a test
/// double). All values are in the host's layout units along `axis`.
pub trait ScrollViewport {
    /// Visible size of the container.
    fn viewport_extent(&self, axis: Axis) -> u64;

    /// Total size of the scrollable content.
    fn scroll_extent(&self, axis: Axis) -> u64;

    /// Distance from the start of the content to the start of the visible region.
    fn scroll_offset(&self, axis: Axis) -> u64;

    fn set_scroll_offset(&mut self, axis: Axis, offset: u64);

    /// Largest offset the container can scroll to.
    fn max_scroll_offset(&self, axis: Axis) -> u64 {
        self.scroll_extent(axis)
            .saturating_sub(self.viewport_extent(axis))
    }
}

impl<V: ScrollViewport + ?Sized> ScrollViewport for &mut V {
    fn viewport_extent(&self, axis: Axis) -> u64 {
        (**self).viewport_extent(axis)
    }

    fn scroll_extent(&self, axis: Axis) -> u64 {
        (**self).scroll_extent(axis)
    }

    fn scroll_offset(&self, axis: Axis) -> u64 {
        (**self).scroll_offset(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, offset: u64) {
        (**self).set_scroll_offset(axis, offset);
    }
}
