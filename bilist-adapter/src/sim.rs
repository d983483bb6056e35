use alloc::collections::VecDeque;

use bilist::{Axis, Direction, Edge, ScrollViewport};

/// An in-memory scroll container.
///
/// Items are stored in visual order (offset 0 first) with their main-axis sizes. Like a real
/// container without native scroll anchoring, inserting items at the start does not move the
/// scroll offset, and offsets written through [`ScrollViewport::set_scroll_offset`] are clamped
/// to the scrollable range.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimViewport {
    axis: Axis,
    viewport_extent: u64,
    cross_extent: u64,
    items: VecDeque<u32>,
    content_extent: u64,
    offset: u64,
}

impl SimViewport {
    pub fn new(axis: Axis, viewport_extent: u64) -> Self {
        Self {
            axis,
            viewport_extent,
            cross_extent: 0,
            items: VecDeque::new(),
            content_extent: 0,
            offset: 0,
        }
    }

    pub fn with_items(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.insert_at_end(sizes);
        self
    }

    pub fn with_cross_extent(mut self, cross_extent: u64) -> Self {
        self.cross_extent = cross_extent;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn content_extent(&self) -> u64 {
        self.content_extent
    }

    pub fn max_offset(&self) -> u64 {
        self.content_extent.saturating_sub(self.viewport_extent)
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u64) {
        self.viewport_extent = viewport_extent;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scrolls to `offset`, clamped. Returns the applied offset.
    pub fn scroll_to(&mut self, offset: u64) -> u64 {
        self.offset = offset.min(self.max_offset());
        self.offset
    }

    pub fn scroll_by(&mut self, delta: i64) -> u64 {
        self.scroll_to(self.offset.saturating_add_signed(delta))
    }

    pub fn scroll_to_start(&mut self) -> u64 {
        self.scroll_to(0)
    }

    pub fn scroll_to_end(&mut self) -> u64 {
        self.scroll_to(self.max_offset())
    }

    /// Inserts items before the first one. `sizes` are given in visual order.
    pub fn insert_at_start(&mut self, sizes: impl IntoIterator<Item = u32>) {
        let mut added = 0u64;
        let mut new_items: VecDeque<u32> = sizes.into_iter().collect();
        for size in &new_items {
            added = added.saturating_add(u64::from(*size));
        }
        new_items.append(&mut self.items);
        self.items = new_items;
        self.content_extent = self.content_extent.saturating_add(added);
        adebug!(added, extent = self.content_extent, "SimViewport: inserted at start");
    }

    pub fn insert_at_end(&mut self, sizes: impl IntoIterator<Item = u32>) {
        for size in sizes {
            self.content_extent = self.content_extent.saturating_add(u64::from(size));
            self.items.push_back(size);
        }
    }

    /// Adds items at a semantic edge, mapping it to the visual side through `direction`.
    ///
    /// `sizes` are given in the order they appear on screen.
    pub fn insert_at_edge(
        &mut self,
        edge: Edge,
        direction: Direction,
        sizes: impl IntoIterator<Item = u32>,
    ) {
        if edge == direction.leading {
            self.insert_at_start(sizes);
        } else {
            self.insert_at_end(sizes);
        }
    }

    /// Start offset of the item at `visual_index`.
    pub fn item_start(&self, visual_index: usize) -> Option<u64> {
        if visual_index >= self.items.len() {
            return None;
        }
        Some(
            self.items
                .iter()
                .take(visual_index)
                .map(|&s| u64::from(s))
                .sum(),
        )
    }

    /// The item under the start of the viewport, with the distance from its start to the
    /// viewport start.
    pub fn first_visible(&self) -> Option<(usize, u64)> {
        let mut start = 0u64;
        for (i, &size) in self.items.iter().enumerate() {
            let end = start.saturating_add(u64::from(size));
            if end > self.offset {
                return Some((i, self.offset - start));
            }
            start = end;
        }
        None
    }
}

impl ScrollViewport for SimViewport {
    fn viewport_extent(&self, axis: Axis) -> u64 {
        if axis == self.axis {
            self.viewport_extent
        } else {
            self.cross_extent
        }
    }

    fn scroll_extent(&self, axis: Axis) -> u64 {
        if axis == self.axis {
            self.content_extent
        } else {
            self.cross_extent
        }
    }

    fn scroll_offset(&self, axis: Axis) -> u64 {
        if axis == self.axis { self.offset } else { 0 }
    }

    fn set_scroll_offset(&mut self, axis: Axis, offset: u64) {
        if axis == self.axis {
            self.scroll_to(offset);
        }
    }
}
