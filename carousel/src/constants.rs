//! Tuned constants shared by the geometry, timing and windowing code.

/// Brightness of the slide nearest to the active one.
pub const MAX_BRIGHTNESS: f32 = 0.7;

/// Brightness floor for the outermost visible rank.
pub const MIN_BRIGHTNESS: f32 = 0.1;

/// Brightness of slides that are not dimmed (the active slide and hidden slides).
pub const FULL_BRIGHTNESS: f32 = 1.0;

/// Stack order of the nearest slide on the advancing (right) flank.
pub const MAX_STACK_ORDER: u32 = 99;

/// Numerator of the transition ratio. Lower values mean snappier transitions.
pub const TRANSITION_SCALAR: f64 = 0.00648;

/// Shifts the denominator of the transition ratio.
///
/// `visible_ratio` must stay above this value, which is why the ratio is clamped to
/// [`MIN_VISIBLE_RATIO`]..=[`MAX_VISIBLE_RATIO`].
pub const TRANSITION_BASE_OFFSET: f64 = 0.676;

pub const MIN_VISIBLE_COUNT: usize = 1;
pub const MAX_VISIBLE_COUNT: usize = 5;

pub const MIN_VISIBLE_RATIO: f32 = 0.7;
pub const MAX_VISIBLE_RATIO: f32 = 1.0;

/// Upper bound of the rendered window width.
pub const MAX_RENDERED_SLIDES: usize = 40;

/// Target buffer depth on each side of the active slide.
pub const MAX_SLIDES_PER_SIDE: usize = MAX_RENDERED_SLIDES / 2;

/// A rebalance fires once the visible window gets this close to the rendered boundary.
pub const REBALANCE_THRESHOLD: usize = 3;

/// Largest accepted rebalance threshold.
pub const MAX_REBALANCE_THRESHOLD: usize = 16;

/// Depth added per rank, as a fraction of the perspective.
pub const PERSPECTIVE_DEPTH_FACTOR: f32 = 0.1;
