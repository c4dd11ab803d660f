// Example: host-driven snap animation, interrupted by a second drag.
use carousel::{Carousel, CarouselOptions, DragEnd, DragUpdate};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(20, 120.0).with_snap_duration_ms(400),
    );
    c.set_viewport_width(360.0);

    // A fast flick: the projected offset decides the target.
    c.drag_update(DragUpdate {
        translation_x: -90.0,
    });
    let r = c.drag_end(
        DragEnd {
            translation_x: -90.0,
            location_x: 190.0,
            predicted_end_location_x: -310.0,
            predicted_end_translation_x: -590.0,
        },
        0,
    );
    println!("swipe -> {r:?}");

    let mut now_ms = 0u64;
    loop {
        // Simulate a 60fps "tick".
        now_ms = now_ms.saturating_add(16);

        let Some(off) = c.tick(now_ms) else {
            break;
        };

        // Render: a UI would iterate items and draw them.
        let mut first: Option<usize> = None;
        let mut last: Option<usize> = None;
        c.for_each_visible_item(|it| {
            first.get_or_insert(it.index);
            last = Some(it.index);
        });

        if now_ms % 80 == 0 {
            println!("t={now_ms}ms off={off:.1} first={first:?} last={last:?}");
        }

        // Simulate the user grabbing the row again mid-animation, then cancelling.
        if (160..160 + 16).contains(&now_ms) {
            c.drag_update(DragUpdate { translation_x: 40.0 });
            println!("grabbed at offset {:.1}", c.offset_x());
            c.drag_cancel(now_ms);
        }
    }

    println!("done: index={} off={}", c.current_index(), c.offset_x());
}
