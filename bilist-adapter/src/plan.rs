use bilist::{Edge, ListController, ScrollViewport, SentinelSlot};

/// One element of a rendered list, in visual order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// A zero-size marker the host must report visibility for.
    Sentinel(Edge),
    /// A loading placeholder shown instead of the sentinel while that edge is pending.
    Loader(Edge),
    /// The item at this index of the data (head = 0).
    Item(usize),
}

fn edge_slot<V: ScrollViewport>(c: &ListController<V>, edge: Edge) -> Slot {
    match c.sentinel_slot(edge) {
        SentinelSlot::Sentinel => Slot::Sentinel(edge),
        SentinelSlot::Loader => Slot::Loader(edge),
    }
}

/// Emits what to draw, from scroll offset 0 to the end of the content.
///
/// Forward orientations start with the head; reversed ones start with the tail and list items
/// from the last index down.
pub fn render_plan<V: ScrollViewport>(
    c: &ListController<V>,
    item_count: usize,
    mut emit: impl FnMut(Slot),
) {
    let direction = c.direction();
    emit(edge_slot(c, direction.leading));
    if direction.leading == Edge::Head {
        (0..item_count).for_each(|i| emit(Slot::Item(i)));
    } else {
        (0..item_count).rev().for_each(|i| emit(Slot::Item(i)));
    }
    emit(edge_slot(c, direction.trailing()));
}
