use crate::TimingFunction;
use crate::constants::{
    MAX_REBALANCE_THRESHOLD, MAX_SLIDES_PER_SIDE, MAX_VISIBLE_COUNT, MAX_VISIBLE_RATIO,
    MIN_VISIBLE_COUNT, MIN_VISIBLE_RATIO, REBALANCE_THRESHOLD,
};

/// Configuration for [`crate::Carousel`].
///
/// Values are validated when the carousel is built: counts and ratios are clamped into their
/// domains, and only a non-positive slide width is rejected outright.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Slides shown on each flank besides the active one. Clamped to `[1, 5]`.
    pub visible_count: usize,
    /// Spacing density of visible slides. Clamped to `[0.7, 1.0]`; drives the transition timings.
    pub visible_ratio: f32,
    /// Base transition speed in milliseconds.
    pub transition_duration_ms: u32,
    /// 3-D depth scale of the container.
    pub perspective: u32,
    /// Starting active slide. Clamped to the sequence.
    pub initial_active_index: usize,
    /// Passed through to the rendering surface.
    pub timing_function: TimingFunction,
    /// Width of one slide in surface units.
    pub slide_width: f32,
    /// Target number of attached slides on each side of the active one.
    pub buffer_depth: usize,
    /// How close the visible window may get to the rendered boundary before the buffer is
    /// replenished.
    pub rebalance_threshold: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            visible_count: 2,
            visible_ratio: MIN_VISIBLE_RATIO,
            transition_duration_ms: 200,
            perspective: 1000,
            initial_active_index: 0,
            timing_function: TimingFunction::EaseOut,
            slide_width: 100.0,
            buffer_depth: MAX_SLIDES_PER_SIDE,
            rebalance_threshold: REBALANCE_THRESHOLD,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    pub fn with_visible_ratio(mut self, visible_ratio: f32) -> Self {
        self.visible_ratio = visible_ratio;
        self
    }

    pub fn with_transition_duration_ms(mut self, transition_duration_ms: u32) -> Self {
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    pub fn with_perspective(mut self, perspective: u32) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_initial_active_index(mut self, initial_active_index: usize) -> Self {
        self.initial_active_index = initial_active_index;
        self
    }

    pub fn with_timing_function(mut self, timing_function: TimingFunction) -> Self {
        self.timing_function = timing_function;
        self
    }

    pub fn with_slide_width(mut self, slide_width: f32) -> Self {
        self.slide_width = slide_width;
        self
    }

    /// Sets the per-side buffer depth and the rebalance threshold together.
    pub fn with_buffer(mut self, buffer_depth: usize, rebalance_threshold: usize) -> Self {
        self.buffer_depth = buffer_depth;
        self.rebalance_threshold = rebalance_threshold;
        self
    }

    /// Returns a copy with every clampable field moved into its domain.
    ///
    /// `slide_count` must be at least one.
    pub fn clamped(&self, slide_count: usize) -> Self {
        let rebalance_threshold = self.rebalance_threshold.min(MAX_REBALANCE_THRESHOLD);
        Self {
            visible_count: clamp_visible_count(self.visible_count),
            visible_ratio: clamp_visible_ratio(self.visible_ratio),
            initial_active_index: self
                .initial_active_index
                .min(slide_count.saturating_sub(1)),
            // Visible flank + threshold must fit inside the buffer.
            buffer_depth: self
                .buffer_depth
                .max(MAX_VISIBLE_COUNT + rebalance_threshold + 1),
            rebalance_threshold,
            ..*self
        }
    }
}

pub fn clamp_visible_count(visible_count: usize) -> usize {
    visible_count.clamp(MIN_VISIBLE_COUNT, MAX_VISIBLE_COUNT)
}

pub fn clamp_visible_ratio(visible_ratio: f32) -> f32 {
    if visible_ratio.is_nan() {
        return MIN_VISIBLE_RATIO;
    }
    visible_ratio.clamp(MIN_VISIBLE_RATIO, MAX_VISIBLE_RATIO)
}
