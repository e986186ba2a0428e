use carousel::TimingFunction;

/// A CSS-style cubic bezier easing curve through `(0, 0)` and `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

const EPSILON: f32 = 1e-6;

impl CubicBezier {
    /// `x1` and `x2` are clamped to `[0, 1]` so the curve stays a function of time.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Eased progress for linear progress `x`.
    pub fn sample(self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        curve(self.y1, self.y2, t)
    }

    fn solve_t(self, x: f32) -> f32 {
        // Newton first; it converges in a few iterations for every sane curve.
        let mut t = x;
        for _ in 0..8 {
            let err = curve(self.x1, self.x2, t) - x;
            if abs(err) < EPSILON {
                return t;
            }
            let slope = curve_slope(self.x1, self.x2, t);
            if abs(slope) < EPSILON {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let v = curve(self.x1, self.x2, t);
            if abs(v - x) < EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

impl From<TimingFunction> for CubicBezier {
    fn from(f: TimingFunction) -> Self {
        let (x1, y1, x2, y2) = f.control_points();
        Self::new(x1, y1, x2, y2)
    }
}

fn curve(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
}

fn curve_slope(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Bezier(curve) => curve.sample(t),
        }
    }
}

impl From<TimingFunction> for Easing {
    fn from(f: TimingFunction) -> Self {
        Self::Bezier(f.into())
    }
}
