use alloc::vec::Vec;

use crate::geometry::{self, GeometryParams};
use crate::timing::{self, TransitionTiming};
use crate::window::{Rebalance, WindowManager};
use crate::{
    AttachAt, CarouselOptions, ContainerStyle, Direction, IndexWindow, SchedulerPhase, Slide,
    SlideStyle, SpinState, Surface, VisualState,
};

/// A lightweight, serializable snapshot of the committed carousel state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub active_index: usize,
    pub rendered: IndexWindow,
    pub visible: IndexWindow,
    pub phase: SchedulerPhase,
    pub spin: Option<SpinState>,
}

/// Everything the window manager and the scheduler mutate, owned by the facade.
#[derive(Clone, Debug)]
pub(crate) struct CarouselState {
    /// Already clamped.
    pub(crate) options: CarouselOptions,
    pub(crate) slides: Vec<Slide>,
    /// Logical active index. Moves at the start of a step.
    pub(crate) active: usize,
    /// Slide currently marked [`VisualState::Active`]. Catches up with `active` when the
    /// delayed phase of a step commits.
    pub(crate) presented: usize,
    pub(crate) window: WindowManager,
    pub(crate) timing: TransitionTiming,
}

impl CarouselState {
    pub(crate) fn new(options: CarouselOptions, total: usize) -> Self {
        let active = options.initial_active_index;
        Self {
            slides: (0..total).map(Slide::detached).collect(),
            active,
            presented: active,
            window: WindowManager::new(
                total,
                active,
                options.visible_count,
                options.buffer_depth,
                options.rebalance_threshold,
            ),
            timing: timing::transition_timing(options.transition_duration_ms, options.visible_ratio),
            options,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub(crate) fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len().saturating_sub(1))
    }

    pub(crate) fn geometry(&self) -> GeometryParams {
        GeometryParams {
            slide_width: self.options.slide_width,
            visible_ratio: self.options.visible_ratio,
            perspective_depth: geometry::perspective_depth(self.options.perspective),
            visible_count: self.options.visible_count,
        }
    }

    pub(crate) fn container(&self) -> ContainerStyle {
        ContainerStyle {
            perspective: self.options.perspective,
            transition_duration_ms: self.options.transition_duration_ms,
            timing_function: self.options.timing_function,
        }
    }

    pub(crate) fn retime(&mut self) {
        self.timing = timing::transition_timing(
            self.options.transition_duration_ms,
            self.options.visible_ratio,
        );
    }

    /// Attaches the initial rendered window and styles it around the active slide.
    pub(crate) fn mount<S: Surface>(&mut self, surface: &mut S) {
        surface.apply_container(&self.container());

        let rendered = self.window.rendered();
        for index in rendered.head..=rendered.tail {
            self.attach(index, AttachAt::Tail, surface);
        }

        self.promote(surface);
        self.restyle_flank(Direction::Left, surface);
        self.restyle_flank(Direction::Right, surface);
    }

    /// Restyles one flank by rank, walking outward from the active slide.
    ///
    /// Stops at the first slide beyond the visible ranks that is already hidden: everything
    /// further out is hidden as well.
    pub(crate) fn restyle_flank<S: Surface>(&mut self, direction: Direction, surface: &mut S) {
        let rendered = self.window.rendered();
        match direction {
            Direction::Left => {
                for (rank, index) in (rendered.head..self.active).rev().enumerate() {
                    if !self.place(index, rank, direction, surface) {
                        break;
                    }
                }
            }
            Direction::Right => {
                let start = self.active.saturating_add(1);
                for (rank, index) in (start..=rendered.tail).enumerate() {
                    if !self.place(index, rank, direction, surface) {
                        break;
                    }
                }
            }
        }
    }

    /// Styles one flank slide. Returns `false` once the walk can stop.
    fn place<S: Surface>(
        &mut self,
        index: usize,
        rank: usize,
        direction: Direction,
        surface: &mut S,
    ) -> bool {
        let params = self.geometry();
        let slide = &mut self.slides[index];
        debug_assert!(slide.state.is_attached(), "restyling a detached slide");

        if !params.is_visible_rank(rank) {
            if slide.state == VisualState::Hidden {
                return false;
            }
            slide.state = VisualState::Hidden;
            slide.style = geometry::hidden_style(direction, slide.style.stack_order);
            surface.update(slide);
            return true;
        }

        slide.style = geometry::slide_style(rank, direction, &params);
        // The outgoing active slide keeps its mark until the delayed phase demotes it.
        if slide.state != VisualState::Active {
            slide.state = VisualState::Visible;
        }
        surface.update(slide);
        true
    }

    /// Moves the [`VisualState::Active`] mark from the presented slide to the active one.
    pub(crate) fn promote<S: Surface>(&mut self, surface: &mut S) {
        if self.presented != self.active {
            let previous = &mut self.slides[self.presented];
            if previous.state == VisualState::Active {
                previous.state = VisualState::Visible;
                surface.update(previous);
            }
        }

        let slide = &mut self.slides[self.active];
        slide.state = VisualState::Active;
        slide.style = SlideStyle::NEUTRAL;
        surface.update(slide);
        self.presented = self.active;
    }

    /// Lets the window manager follow a committed step, then restyles both flanks.
    pub(crate) fn shift_window<S: Surface>(&mut self, direction: Direction, surface: &mut S) {
        let visible_count = self.options.visible_count;
        if let Some(rebalance) = self.window.shift(direction, self.active, visible_count) {
            self.apply_rebalance(rebalance, surface);
        }
        self.restyle_flank(Direction::Left, surface);
        self.restyle_flank(Direction::Right, surface);
    }

    fn apply_rebalance<S: Surface>(&mut self, rebalance: Rebalance, surface: &mut S) {
        match rebalance.direction {
            Direction::Right => {
                for index in rebalance.attach {
                    self.attach(index, AttachAt::Tail, surface);
                }
            }
            Direction::Left => {
                for index in rebalance.attach.rev() {
                    self.attach(index, AttachAt::Head, surface);
                }
            }
        }
        for index in rebalance.detach {
            self.detach(index, surface);
        }
    }

    fn attach<S: Surface>(&mut self, index: usize, at: AttachAt, surface: &mut S) {
        let slide = &mut self.slides[index];
        slide.state = VisualState::Hidden;
        slide.style = SlideStyle::NEUTRAL;
        surface.attach(slide, at);
    }

    fn detach<S: Surface>(&mut self, index: usize, surface: &mut S) {
        let slide = &mut self.slides[index];
        debug_assert_ne!(slide.state, VisualState::Active, "detaching the active slide");
        slide.state = VisualState::Detached;
        slide.style = SlideStyle::NEUTRAL;
        surface.detach(index);
    }
}
