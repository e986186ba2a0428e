// Example: a headless carousel driven by a fake frame loop, printing every surface command.
use carousel::{AttachAt, Carousel, CarouselOptions, ContainerStyle, Slide, Surface};

struct PrintSurface {
    count: usize,
}

impl Surface for PrintSurface {
    fn slide_count(&self) -> usize {
        self.count
    }

    fn apply_container(&mut self, style: &ContainerStyle) {
        println!(
            "container: perspective={} duration={}ms timing={}",
            style.perspective, style.transition_duration_ms, style.timing_function
        );
    }

    fn attach(&mut self, slide: &Slide, at: AttachAt) {
        println!("attach #{} at {at:?}", slide.index);
    }

    fn detach(&mut self, index: usize) {
        println!("detach #{index}");
    }

    fn update(&mut self, slide: &Slide) {
        println!(
            "update #{} {:?} x={:.1} z={:.1} brightness={:.2} order={:?}",
            slide.index,
            slide.state,
            slide.style.offset_x,
            slide.style.offset_z,
            slide.style.brightness,
            slide.style.stack_order
        );
    }
}

fn main() {
    let options = CarouselOptions::new()
        .with_visible_count(2)
        .with_initial_active_index(30);
    let mut c = match Carousel::new(PrintSurface { count: 100 }, options) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("cannot build carousel: {err}");
            return;
        }
    };
    println!("mounted: {:?}", c.snapshot());

    // Spin far enough to the right that the rendered window has to rebalance.
    let mut now_ms = 0u64;
    c.go_to_index(50, now_ms);
    while c.tick(now_ms) {
        now_ms += 16;
    }

    println!("settled after {now_ms}ms: {:?}", c.snapshot());
    println!("timing: {:?}", c.timing());
}
