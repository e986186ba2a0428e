use alloc::collections::VecDeque;
use alloc::vec::Vec;

use carousel::{AttachAt, ContainerStyle, Slide, SlideStyle, Surface, VisualState};

use crate::{Easing, StyleTween};

/// A slide as it should be drawn at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedSlide {
    pub index: usize,
    pub state: VisualState,
    pub style: SlideStyle,
}

#[derive(Clone, Copy, Debug, Default)]
struct BoardSlide {
    state: VisualState,
    style: SlideStyle,
    tween: Option<StyleTween>,
}

impl BoardSlide {
    fn style_at(&self, now_ms: u64) -> SlideStyle {
        match self.tween {
            Some(t) => t.sample(now_ms),
            None => self.style,
        }
    }
}

/// An in-memory [`Surface`] that keeps the attached strip in order and eases every style change
/// over the container's transition duration.
///
/// The engine does not pass time to the surface, so the owner sets the clock with
/// [`SlideBoard::set_clock_ms`] before driving the carousel. [`crate::Controller`] does this for
/// you.
#[derive(Clone, Debug)]
pub struct SlideBoard {
    order: VecDeque<usize>,
    slides: Vec<BoardSlide>,
    container: Option<ContainerStyle>,
    clock_ms: u64,
}

impl SlideBoard {
    pub fn new(slide_count: usize) -> Self {
        Self {
            order: VecDeque::new(),
            slides: alloc::vec![BoardSlide::default(); slide_count],
            container: None,
            clock_ms: 0,
        }
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Sets the instant that subsequent style updates start easing from.
    pub fn set_clock_ms(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    pub fn container(&self) -> Option<ContainerStyle> {
        self.container
    }

    /// Attached sequence indexes in strip order.
    pub fn attached(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn attached_len(&self) -> usize {
        self.order.len()
    }

    pub fn state(&self, index: usize) -> VisualState {
        self.slides.get(index).map(|s| s.state).unwrap_or_default()
    }

    /// Style of an attached slide at `now_ms`.
    pub fn style_at(&self, index: usize, now_ms: u64) -> Option<SlideStyle> {
        let slide = self.slides.get(index)?;
        slide.state.is_attached().then(|| slide.style_at(now_ms))
    }

    /// Visits the attached strip in order, with styles sampled at `now_ms`.
    pub fn for_each_slide(&self, now_ms: u64, mut f: impl FnMut(RenderedSlide)) {
        for &index in &self.order {
            let slide = &self.slides[index];
            f(RenderedSlide {
                index,
                state: slide.state,
                style: slide.style_at(now_ms),
            });
        }
    }

    /// `true` once no attached slide is still easing at `now_ms`.
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.order.iter().all(|&i| {
            self.slides[i]
                .tween
                .is_none_or(|t: StyleTween| t.is_done(now_ms))
        })
    }

    /// Folds finished tweens into their slide's resting style.
    pub fn settle(&mut self, now_ms: u64) {
        for &index in &self.order {
            let slide = &mut self.slides[index];
            if let Some(t) = slide.tween {
                if t.is_done(now_ms) {
                    slide.style = t.to;
                    slide.tween = None;
                }
            }
        }
    }

    fn easing(&self) -> Easing {
        self.container
            .map(|c| Easing::from(c.timing_function))
            .unwrap_or(Easing::Linear)
    }

    fn duration_ms(&self) -> u64 {
        self.container
            .map(|c| u64::from(c.transition_duration_ms))
            .unwrap_or(0)
    }
}

impl Surface for SlideBoard {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn apply_container(&mut self, style: &ContainerStyle) {
        self.container = Some(*style);
    }

    fn attach(&mut self, slide: &Slide, at: AttachAt) {
        let Some(entry) = self.slides.get_mut(slide.index) else {
            return;
        };
        // Fresh slides appear in place; only later updates ease.
        *entry = BoardSlide {
            state: slide.state,
            style: slide.style,
            tween: None,
        };
        match at {
            AttachAt::Head => self.order.push_front(slide.index),
            AttachAt::Tail => self.order.push_back(slide.index),
        }
    }

    fn detach(&mut self, index: usize) {
        self.order.retain(|&i| i != index);
        if let Some(entry) = self.slides.get_mut(index) {
            *entry = BoardSlide::default();
        }
    }

    fn update(&mut self, slide: &Slide) {
        let now_ms = self.clock_ms;
        let duration_ms = self.duration_ms();
        let easing = self.easing();
        let Some(entry) = self.slides.get_mut(slide.index) else {
            return;
        };
        entry.state = slide.state;

        let target = slide.style;
        match entry.tween {
            // Re-sending the current target keeps the tween running.
            Some(t) if t.to == target => return,
            Some(mut t) if duration_ms > 0 => {
                t.retarget(now_ms, target, duration_ms);
                entry.style = target;
                entry.tween = Some(t);
                return;
            }
            _ => {}
        }

        let from = entry.style_at(now_ms);
        entry.style = target;
        entry.tween = (duration_ms > 0 && from != target)
            .then(|| StyleTween::new(from, target, now_ms, duration_ms, easing));
    }
}
