use carousel_adapter::Controller;

fn main() {
    // Example: a framework-neutral controller driven by raw pointer samples.
    //
    // An adapter would:
    // - forward pointer down/move/up/cancel events from its input layer
    // - call tick(now_ms) in a frame loop / timer while a snap animation runs
    // - draw the items returned by render_visible() at their `x`
    let cards: Vec<String> = (1..=12).map(|n| format!("card {n}")).collect();
    let mut c = Controller::new(
        cards,
        120.0,
        |title: &String| format!("[{title}]"),
        |index| println!("on_index_changed({index})"),
    );
    c.on_viewport_width(360.0);

    // A quick flick to the left.
    let mut now_ms = 0u64;
    c.on_pointer_down(300.0, now_ms);
    for x in [280.0, 240.0, 190.0, 130.0] {
        now_ms += 8;
        c.on_pointer_move(x, now_ms);
    }
    now_ms += 8;
    let resolution = c.on_pointer_up(80.0, now_ms);
    println!("resolution={resolution:?}");

    loop {
        now_ms += 16;
        let Some(off) = c.tick(now_ms) else {
            break;
        };
        if now_ms % 80 == 0 {
            let visible: Vec<String> = c.render_visible().into_iter().map(|it| it.view).collect();
            println!("t={now_ms} off={off:.1} visible={visible:?}");
        }
    }

    println!(
        "done: index={} item={:?} off={}",
        c.current_index(),
        c.current_item(),
        c.carousel().offset_x()
    );
}
