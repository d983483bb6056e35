use std::iter::repeat_n;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bilist::{Edge, ListController, ListOptions, Orientation, VisibilityEntry};
use bilist_adapter::{GeometryObserver, SimViewport, Slot, render_plan};

fn main() {
    // Example: a chat log rendered bottom-up (newest message at the bottom).
    //
    // The adapter flow is typically:
    // 1) poll the controller after every scroll/layout change
    // 2) when an edge is requested, fetch and insert the items (here: synchronously)
    // 3) once the new items are laid out, call settle() so the visible messages stay put
    let orientation = Orientation::ReverseVertical;
    let older_wanted = Arc::new(AtomicBool::new(false));

    let mut c = ListController::new(
        ListOptions::new(orientation)
            .with_cooldown_ms(250)
            .with_has_more(false, true)
            .with_on_tail_needed(Some({
                let older_wanted = Arc::clone(&older_wanted);
                move |_: &VisibilityEntry| older_wanted.store(true, Ordering::Relaxed)
            }))
            .with_on_diagnostic(Some(|d: &bilist::Diagnostic| eprintln!("diagnostic: {d}"))),
    );
    c.mount(
        SimViewport::new(bilist::Axis::Vertical, 24).with_items(repeat_n(2, 30)),
        GeometryObserver::new(orientation).with_margin(4),
    );
    if let Some(v) = c.viewport_mut() {
        v.scroll_to_end();
    }

    let mut pages_left = 3;
    let mut now_ms = 0u64;
    while now_ms < 4_000 {
        now_ms += 100;

        // The user keeps scrolling up.
        if let Some(v) = c.viewport_mut() {
            v.scroll_by(-6);
        }
        c.poll(now_ms);

        if older_wanted.swap(false, Ordering::Relaxed) {
            let direction = c.direction();
            if let Some(v) = c.viewport_mut() {
                v.insert_at_edge(Edge::Tail, direction, repeat_n(2, 10));
            }
            pages_left -= 1;
            c.set_has_more(false, pages_left > 0);
            if let Some(k) = c.settle() {
                println!(
                    "t={now_ms} loaded older page: delta={} offset={} first_visible={:?}",
                    k.delta,
                    k.offset,
                    c.viewport().and_then(|v| v.first_visible())
                );
            }
        }
    }

    let mut loaders = 0;
    let mut items = 0;
    let count = c.viewport().map_or(0, |v| v.len());
    render_plan(&c, count, |slot| match slot {
        Slot::Loader(_) => loaders += 1,
        Slot::Item(_) => items += 1,
        Slot::Sentinel(_) => {}
    });
    println!("done: items={items} loaders={loaders} state={:?}", c.state());
}
