use carousel::{Carousel, CarouselOptions, DragEnd, DragUpdate};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(5, 100.0)
            .with_on_index_changed(Some(|index| println!("on_index_changed({index})"))),
    );
    c.set_viewport_width(300.0);

    // A slow drag two and a half items to the left.
    c.drag_update(DragUpdate {
        translation_x: -260.0,
    });
    let resolution = c.drag_end(
        DragEnd {
            translation_x: -260.0,
            location_x: 240.0,
            predicted_end_location_x: 238.0,
            predicted_end_translation_x: -262.0,
        },
        0,
    );
    println!("resolution={resolution:?}");

    c.finish_animation();
    println!("offset_x={} visible={:?}", c.offset_x(), c.visible_range());
}
