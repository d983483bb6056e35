use bilist::{Axis, Edge, ListController, ListOptions, Orientation, ScrollViewport, VisibilityEntry};

/// A horizontal strip whose geometry is owned by the host toolkit.
#[derive(Debug)]
struct Strip {
    width: u64,
    content: u64,
    scroll_left: u64,
}

impl ScrollViewport for Strip {
    fn viewport_extent(&self, _axis: Axis) -> u64 {
        self.width
    }

    fn scroll_extent(&self, _axis: Axis) -> u64 {
        self.content
    }

    fn scroll_offset(&self, _axis: Axis) -> u64 {
        self.scroll_left
    }

    fn set_scroll_offset(&mut self, _axis: Axis, offset: u64) {
        self.scroll_left = offset;
    }
}

fn main() {
    // Example: a host whose toolkit pushes visibility changes itself (e.g. a native
    // intersection observer), so no `VisibilityObserver` is mounted.
    let mut c = ListController::new(
        ListOptions::new(Orientation::ForwardHorizontal)
            .with_has_more(true, false)
            .with_on_head_needed(Some(|e: &VisibilityEntry| {
                println!("need more at {:?} (ratio {})", e.sentinel, e.ratio)
            })),
    );

    // The viewport only exists after the first render.
    c.mount_viewport(Strip {
        width: 300,
        content: 1_000,
        scroll_left: 200,
    });

    let dispatch = c.on_visibility(VisibilityEntry::new(Edge::Head, 0.4), 0);
    println!("dispatch={dispatch:?} slot={:?}", c.sentinel_slot(Edge::Head));

    // Ten items were prepended and laid out.
    if let Some(strip) = c.viewport_mut() {
        strip.content = 1_400;
    }
    let correction = c.settle();
    println!(
        "correction={correction:?} scroll_left={:?}",
        c.viewport().map(|s| s.scroll_left)
    );

    let dispatch = c.on_visibility(VisibilityEntry::visible(Edge::Tail), 50);
    println!("tail: {dispatch:?}");
}
