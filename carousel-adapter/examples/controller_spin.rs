use carousel::{CarouselOptions, VisualState};
use carousel_adapter::Controller;

fn main() {
    // Example: a controller owning both the engine and an easing slide board.
    //
    // An adapter would:
    // - forward clicks and key presses with the current frame time
    // - call tick(now_ms) in a frame loop / timer until it returns false
    // - draw whatever for_each_slide reports for the current frame
    let options = CarouselOptions::new().with_initial_active_index(5);
    let mut c = match Controller::new(40, options) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("cannot build controller: {err}");
            return;
        }
    };

    let mut now_ms = 0u64;
    c.go_to_index(12, now_ms);

    while c.tick(now_ms) {
        if now_ms % 160 == 0 {
            let mut line = String::new();
            c.for_each_slide(now_ms, |s| {
                if s.state != VisualState::Hidden {
                    line.push_str(&format!(" #{}@{:.0}", s.index, s.style.offset_x));
                }
            });
            println!("t={now_ms:>4} active={}{line}", c.active_index());
        }
        now_ms += 16;
    }

    println!("settled at t={now_ms}: active={}", c.active_index());
}
