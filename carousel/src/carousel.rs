use crate::scheduler::Scheduler;
use crate::state::{CarouselSnapshot, CarouselState};
use crate::timing::TransitionTiming;
use crate::{
    CarouselError, CarouselInput, CarouselOptions, Direction, IndexWindow, SchedulerPhase, Slide,
    SpinState, Surface, TimingFunction,
};

/// A headless 3-D perspective carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the host's [`Surface`] owns them.
/// - Only a bounded window of slides around the active one is attached to the surface at any
///   time, so sequences of any length cost the same to drive.
/// - Time is supplied by the host: requests take `now_ms`, and [`Carousel::tick`] must be called
///   once per display frame while [`Carousel::is_animating`] is `true`.
///
/// Out-of-range indexes are clamped, never rejected.
#[derive(Debug)]
pub struct Carousel<S> {
    state: CarouselState,
    scheduler: Scheduler,
    surface: S,
}

impl<S: Surface> Carousel<S> {
    /// Validates `options`, attaches the initial window to `surface` and styles it.
    pub fn new(surface: S, options: CarouselOptions) -> Result<Self, CarouselError> {
        let total = surface.slide_count();
        if total == 0 {
            return Err(CarouselError::EmptySequence);
        }
        if !options.slide_width.is_finite() || options.slide_width <= 0.0 {
            return Err(CarouselError::InvalidSlideWidth(options.slide_width));
        }

        let options = options.clamped(total);
        cdebug!(
            total,
            active = options.initial_active_index,
            visible_count = options.visible_count,
            visible_ratio = options.visible_ratio,
            "Carousel::new"
        );

        let mut carousel = Self {
            state: CarouselState::new(options, total),
            scheduler: Scheduler::default(),
            surface,
        };
        carousel.state.mount(&mut carousel.surface);
        Ok(carousel)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Effective (clamped) options.
    pub fn options(&self) -> &CarouselOptions {
        &self.state.options
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Always `false`: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.state.len() == 0
    }

    pub fn active_index(&self) -> usize {
        self.state.active
    }

    pub fn perspective(&self) -> u32 {
        self.state.options.perspective
    }

    pub fn transition_duration_ms(&self) -> u32 {
        self.state.options.transition_duration_ms
    }

    pub fn timing_function(&self) -> TimingFunction {
        self.state.options.timing_function
    }

    pub fn visible_count(&self) -> usize {
        self.state.options.visible_count
    }

    pub fn visible_ratio(&self) -> f32 {
        self.state.options.visible_ratio
    }

    pub fn timing(&self) -> TransitionTiming {
        self.state.timing
    }

    pub fn rendered_window(&self) -> IndexWindow {
        self.state.window.rendered()
    }

    pub fn visible_window(&self) -> IndexWindow {
        self.state.window.visible()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.state.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.state.slides
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.scheduler.phase()
    }

    pub fn spin_state(&self) -> Option<SpinState> {
        self.scheduler.spin()
    }

    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            active_index: self.state.active,
            rendered: self.rendered_window(),
            visible: self.visible_window(),
            phase: self.phase(),
            spin: self.spin_state(),
        }
    }

    /// Moves toward `index` (clamped): one step for a neighbour, a spin for anything further.
    ///
    /// Any transition in flight is cancelled first and lands on a committed state.
    pub fn go_to_index(&mut self, index: usize, now_ms: u64) {
        let target = self.state.clamp_index(index);
        ctrace!(index, target, now_ms, "go_to_index");
        self.scheduler
            .request(&mut self.state, &mut self.surface, target, now_ms);
    }

    pub fn step_left(&mut self, now_ms: u64) {
        self.go_to_index(self.state.active.saturating_sub(1), now_ms);
    }

    pub fn step_right(&mut self, now_ms: u64) {
        self.go_to_index(self.state.active.saturating_add(1), now_ms);
    }

    pub fn go_to_start(&mut self, now_ms: u64) {
        self.go_to_index(0, now_ms);
    }

    pub fn go_to_end(&mut self, now_ms: u64) {
        self.go_to_index(self.state.len().saturating_sub(1), now_ms);
    }

    /// Cancels any in-flight animation without changing the active index.
    ///
    /// A half-applied step is completed immediately. Stopping an idle carousel does nothing.
    pub fn stop(&mut self) {
        self.scheduler.cancel(&mut self.state, &mut self.surface);
    }

    /// Frame callback. Returns `true` while a transition is still in flight.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.scheduler
            .tick(&mut self.state, &mut self.surface, now_ms)
    }

    /// Translates an input-layer request. Returns `false` when the input was ignored.
    ///
    /// Slide selection is ignored while a spin is running; the other inputs always apply.
    pub fn handle_input(&mut self, input: CarouselInput, now_ms: u64) -> bool {
        match input {
            CarouselInput::Select(index) => {
                if self.phase() == SchedulerPhase::MultiStep {
                    ctrace!(index, "selection ignored during spin");
                    return false;
                }
                self.go_to_index(index, now_ms);
            }
            CarouselInput::StepLeft => self.step_left(now_ms),
            CarouselInput::StepRight => self.step_right(now_ms),
            CarouselInput::Start => self.go_to_start(now_ms),
            CarouselInput::End => self.go_to_end(now_ms),
            CarouselInput::Stop => self.stop(),
        }
        true
    }

    /// Changes the 3-D depth scale and restyles the visible flanks.
    ///
    /// Rejected while a transition is in flight; call [`Carousel::stop`] first.
    pub fn set_perspective(&mut self, perspective: u32) -> Result<(), CarouselError> {
        if !self.scheduler.is_idle() {
            cwarn!(
                perspective,
                "set_perspective rejected: the carousel is animating; stop it first"
            );
            return Err(CarouselError::TransitionInFlight);
        }
        self.state.options.perspective = perspective;
        self.surface.apply_container(&self.state.container());
        self.state.restyle_flank(Direction::Left, &mut self.surface);
        self.state.restyle_flank(Direction::Right, &mut self.surface);
        Ok(())
    }

    /// Changes the base duration. Takes effect from the next step.
    pub fn set_transition_duration_ms(&mut self, transition_duration_ms: u32) {
        self.state.options.transition_duration_ms = transition_duration_ms;
        self.state.retime();
        self.surface.apply_container(&self.state.container());
    }

    pub fn set_timing_function(&mut self, timing_function: TimingFunction) {
        self.state.options.timing_function = timing_function;
        self.surface.apply_container(&self.state.container());
    }
}
