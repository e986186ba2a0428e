//! Maps a slide's rank on a flank to its geometry.
//!
//! Rank `0` is the neighbour of the active slide; ranks grow outward. Everything here is a pure
//! function of its inputs.

use crate::constants::{
    FULL_BRIGHTNESS, MAX_BRIGHTNESS, MAX_STACK_ORDER, MIN_BRIGHTNESS, PERSPECTIVE_DEPTH_FACTOR,
};
use crate::{Direction, SlideStyle};

/// Inputs of the geometry calculator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryParams {
    pub slide_width: f32,
    pub visible_ratio: f32,
    /// Depth added per rank (see [`perspective_depth`]).
    pub perspective_depth: f32,
    pub visible_count: usize,
}

impl GeometryParams {
    /// Horizontal distance between two neighbouring ranks.
    pub fn visible_slide_width(&self) -> f32 {
        self.slide_width * self.visible_ratio
    }

    pub fn is_visible_rank(&self, rank: usize) -> bool {
        rank < self.visible_count
    }
}

pub fn perspective_depth(perspective: u32) -> f32 {
    perspective as f32 * PERSPECTIVE_DEPTH_FACTOR
}

/// Brightness for a visible rank, linearly dimming from [`MAX_BRIGHTNESS`] outward.
pub fn brightness(rank: usize, visible_count: usize) -> f32 {
    let visible_count = visible_count.max(1);
    let remaining = visible_count.saturating_sub(rank) as f32 / visible_count as f32;
    ((MAX_BRIGHTNESS - MIN_BRIGHTNESS) * remaining + MIN_BRIGHTNESS)
        .clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

/// Stack order of a rank on the given flank. Only the right flank gets an explicit value.
pub fn stack_order(rank: usize, direction: Direction) -> Option<u32> {
    match direction {
        Direction::Left => None,
        Direction::Right => Some(MAX_STACK_ORDER.saturating_sub(rank as u32)),
    }
}

/// Geometry of a visible slide at `rank` on the `direction` flank.
///
/// Callers are expected to hide slides whose rank is not visible (see
/// [`GeometryParams::is_visible_rank`]) instead of styling them.
pub fn slide_style(rank: usize, direction: Direction, params: &GeometryParams) -> SlideStyle {
    let slots = (rank + 1) as f32;
    let offset_x = params.visible_slide_width() * slots;
    SlideStyle {
        offset_x: match direction {
            Direction::Left => -offset_x,
            Direction::Right => offset_x,
        },
        offset_z: -(params.perspective_depth * slots),
        brightness: brightness(rank, params.visible_count),
        stack_order: stack_order(rank, direction),
    }
}

/// Geometry of a slide that was just hidden on the `direction` flank.
///
/// Offsets and dimming are cleared. The right flank keeps `previous_stack_order` so the slide
/// stays beneath nearer ones while it fades out.
pub fn hidden_style(direction: Direction, previous_stack_order: Option<u32>) -> SlideStyle {
    SlideStyle {
        offset_x: 0.0,
        offset_z: 0.0,
        brightness: FULL_BRIGHTNESS,
        stack_order: match direction {
            Direction::Left => None,
            Direction::Right => previous_stack_order,
        },
    }
}
