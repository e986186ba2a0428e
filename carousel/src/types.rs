use core::fmt;

use crate::constants::FULL_BRIGHTNESS;

/// One of the two flanks around the active slide, or the direction of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The direction that moves `from` toward `to`. Equal indexes resolve to `Left`.
    pub fn toward(from: usize, to: usize) -> Self {
        if to > from { Self::Right } else { Self::Left }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Moves `index` one slot in this direction, saturating at zero.
    pub fn step(self, index: usize) -> usize {
        match self {
            Self::Left => index.saturating_sub(1),
            Self::Right => index.saturating_add(1),
        }
    }
}

/// Presentation state of a slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualState {
    /// Not attached to the rendering surface.
    #[default]
    Detached,
    /// Attached but styled off-screen.
    Hidden,
    /// On a flank, positioned and dimmed by rank.
    Visible,
    /// The foregrounded slide.
    Active,
}

impl VisualState {
    pub fn is_attached(self) -> bool {
        !matches!(self, Self::Detached)
    }
}

/// Geometry last applied to a slide.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideStyle {
    /// Horizontal offset from the active slide (negative on the left flank).
    pub offset_x: f32,
    /// Depth offset; zero for the active slide, negative for everything receding.
    pub offset_z: f32,
    pub brightness: f32,
    /// Explicit stacking order, only assigned on the right flank.
    pub stack_order: Option<u32>,
}

impl SlideStyle {
    /// Geometry of the active slide (and of freshly attached slides).
    pub const NEUTRAL: Self = Self {
        offset_x: 0.0,
        offset_z: 0.0,
        brightness: FULL_BRIGHTNESS,
        stack_order: None,
    };
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// One item of the total sequence, as tracked by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub index: usize,
    pub state: VisualState,
    pub style: SlideStyle,
}

impl Slide {
    pub(crate) fn detached(index: usize) -> Self {
        Self {
            index,
            state: VisualState::Detached,
            style: SlideStyle::NEUTRAL,
        }
    }
}

/// An inclusive range of sequence indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexWindow {
    pub head: usize,
    pub tail: usize, // inclusive
}

impl IndexWindow {
    pub fn new(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.head <= index && index <= self.tail
    }

    pub fn contains_window(&self, other: IndexWindow) -> bool {
        self.head <= other.head && other.tail <= self.tail
    }

    /// `tail - head`, i.e. one less than the number of indexes covered.
    pub fn span(&self) -> usize {
        self.tail.saturating_sub(self.head)
    }
}

/// Transient progress of a multi-step spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinState {
    pub direction: Direction,
    pub target: usize,
    pub total_steps: usize,
    pub completed_steps: usize,
}

/// Coarse state of the transition scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulerPhase {
    #[default]
    Idle,
    /// A single step is waiting for its delayed phase.
    SingleStep,
    /// A spin is stepping toward a distant target.
    MultiStep,
}

/// Where a newly attached slide goes in the rendered strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachAt {
    /// Prepend.
    Head,
    /// Append.
    Tail,
}

/// Named easing curve handed to the rendering surface.
///
/// The engine never evaluates it; see `carousel-adapter` for a sampler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimingFunction {
    SmoothFade,
    SmoothSlideIn,
    AcceleratedSlide,
    #[default]
    EaseOut,
    EaseIn,
    EaseInOut,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl TimingFunction {
    /// Control points `(x1, y1, x2, y2)` of the underlying cubic bezier.
    pub fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Self::SmoothFade => (0.77, 0.05, 0.11, 1.17),
            Self::SmoothSlideIn => (0.77, 0.05, 0.6, 0.78),
            Self::AcceleratedSlide => (0.85, 0.42, 0.8, 0.75),
            Self::EaseOut => (0.25, 0.46, 0.45, 0.94),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => (x1, y1, x2, y2),
        }
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, y1, x2, y2) = self.control_points();
        write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

/// Container-level values written to the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerStyle {
    pub perspective: u32,
    pub transition_duration_ms: u32,
    pub timing_function: TimingFunction,
}

/// An index-selection request coming from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselInput {
    /// A slide was picked (e.g. clicked). Ignored while a spin is running.
    Select(usize),
    StepLeft,
    StepRight,
    Start,
    End,
    Stop,
}
