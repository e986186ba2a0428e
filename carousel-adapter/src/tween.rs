use carousel::SlideStyle;

use crate::Easing;

/// Interpolates a slide's geometry between two style snapshots.
///
/// Offsets and brightness are eased; the stack order snaps to the target immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTween {
    pub from: SlideStyle,
    pub to: SlideStyle,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl StyleTween {
    pub fn new(
        from: SlideStyle,
        to: SlideStyle,
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> SlideStyle {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let lerp = |from: f32, to: f32| from + (to - from) * eased;
        SlideStyle {
            offset_x: lerp(self.from.offset_x, self.to.offset_x),
            offset_z: lerp(self.from.offset_z, self.to.offset_z),
            brightness: lerp(self.from.brightness, self.to.brightness),
            stack_order: self.to.stack_order,
        }
    }

    /// Restarts toward `new_to` from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, new_to: SlideStyle, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}
