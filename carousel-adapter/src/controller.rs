use carousel::{Carousel, CarouselError, CarouselInput, CarouselOptions};

use crate::{RenderedSlide, SlideBoard};

/// A framework-neutral controller that wraps a `carousel::Carousel` over a [`SlideBoard`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `go_to_index` / `handle_input` / `on_slide_click` when UI events occur
/// - `tick(now_ms)` each frame until it returns `false`
/// - `for_each_slide(now_ms, ..)` to draw the attached strip with eased geometry
///
/// Every entry point takes `now_ms` so the board's style tweens start at the right instant.
#[derive(Debug)]
pub struct Controller {
    c: Carousel<SlideBoard>,
}

impl Controller {
    pub fn new(slide_count: usize, options: CarouselOptions) -> Result<Self, CarouselError> {
        let c = Carousel::new(SlideBoard::new(slide_count), options)?;
        Ok(Self { c })
    }

    pub fn from_carousel(c: Carousel<SlideBoard>) -> Self {
        Self { c }
    }

    pub fn carousel(&self) -> &Carousel<SlideBoard> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<SlideBoard> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<SlideBoard> {
        self.c
    }

    pub fn board(&self) -> &SlideBoard {
        self.c.surface()
    }

    pub fn active_index(&self) -> usize {
        self.c.active_index()
    }

    /// `true` while either the engine is stepping or the board is still easing.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.c.is_animating() || !self.board().is_settled(now_ms)
    }

    pub fn go_to_index(&mut self, index: usize, now_ms: u64) {
        self.sync_clock(now_ms);
        self.c.go_to_index(index, now_ms);
    }

    pub fn handle_input(&mut self, input: CarouselInput, now_ms: u64) -> bool {
        self.sync_clock(now_ms);
        self.c.handle_input(input, now_ms)
    }

    /// A click on a rendered slide. Ignored while a spin is running.
    pub fn on_slide_click(&mut self, index: usize, now_ms: u64) -> bool {
        self.handle_input(CarouselInput::Select(index), now_ms)
    }

    pub fn stop(&mut self, now_ms: u64) {
        self.sync_clock(now_ms);
        self.c.stop();
    }

    pub fn set_perspective(&mut self, perspective: u32, now_ms: u64) -> Result<(), CarouselError> {
        self.sync_clock(now_ms);
        self.c.set_perspective(perspective)
    }

    /// Advances the engine and the board. Returns `true` while anything is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.sync_clock(now_ms);
        let busy = self.c.tick(now_ms);
        self.c.surface_mut().settle(now_ms);
        busy || !self.board().is_settled(now_ms)
    }

    pub fn for_each_slide(&self, now_ms: u64, f: impl FnMut(RenderedSlide)) {
        self.board().for_each_slide(now_ms, f);
    }

    fn sync_clock(&mut self, now_ms: u64) {
        self.c.surface_mut().set_clock_ms(now_ms);
    }
}
