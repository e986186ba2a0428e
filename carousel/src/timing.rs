//! Derives the two-phase transition timings from the base duration.

use crate::constants::{TRANSITION_BASE_OFFSET, TRANSITION_SCALAR};

/// Delays used by the transition scheduler, in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTiming {
    /// Gap between the receding-flank and advancing-flank restyles of one step.
    pub phase_delay_ms: f64,
    /// Minimum time between two steps of a spin.
    pub fade_duration_ms: f64,
}

/// Ratio applied to the base duration. Decreases as `visible_ratio` grows.
///
/// `visible_ratio` must already be clamped; the denominator degenerates outside `[0.7, 1.0]`.
pub fn transition_ratio(visible_ratio: f32) -> f64 {
    TRANSITION_SCALAR / (f64::from(visible_ratio) - TRANSITION_BASE_OFFSET)
}

pub fn transition_timing(transition_duration_ms: u32, visible_ratio: f32) -> TransitionTiming {
    let duration = f64::from(transition_duration_ms);
    let ratio = transition_ratio(visible_ratio);
    TransitionTiming {
        phase_delay_ms: duration * ratio,
        fade_duration_ms: duration + duration * ratio,
    }
}
