//! Easing curves.
//!
//! An easing reshapes normalized progress before it reaches the track
//! interpolators. The curve families and their `In`/`Out`/`InOut` variants
//! follow the classic Penner / Tween.js definitions so that selectors such as
//! `"Bounce.InOut"` or `"Sinusoidal.In"` behave as animators written against
//! that vocabulary expect.

use std::f32::consts::PI;

/// Which end(s) of the curve are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseMode {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end.
    InOut,
}

/// Easing function selector.
///
/// [`Easing::ease`] maps `t` in `[0, 1]` to eased progress. Every curve
/// returns exactly `0` at `t = 0` and exactly `1` at `t = 1`; `Elastic` and
/// `Back` overshoot in between.
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    /// Constant speed (identity).
    #[default]
    Linear,
    Quadratic(EaseMode),
    Cubic(EaseMode),
    Quartic(EaseMode),
    Quintic(EaseMode),
    Sinusoidal(EaseMode),
    Exponential(EaseMode),
    Circular(EaseMode),
    Elastic(EaseMode),
    Back(EaseMode),
    Bounce(EaseMode),
    /// User supplied curve. Its endpoints are still pinned to 0 and 1.
    Custom(fn(f32) -> f32),
}

const BACK_OVERSHOOT: f32 = 1.701_58;

impl Easing {
    /// Applies the curve. Input is clamped to `[0, 1]`; NaN counts as 0.
    #[must_use]
    pub fn ease(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::Quadratic(mode) => power(mode, t, 2),
            Easing::Cubic(mode) => power(mode, t, 3),
            Easing::Quartic(mode) => power(mode, t, 4),
            Easing::Quintic(mode) => power(mode, t, 5),
            Easing::Sinusoidal(mode) => sinusoidal(mode, t),
            Easing::Exponential(mode) => exponential(mode, t),
            Easing::Circular(mode) => circular(mode, t),
            Easing::Elastic(mode) => elastic(mode, t),
            Easing::Back(mode) => back(mode, t),
            Easing::Bounce(mode) => bounce(mode, t),
            Easing::Custom(f) => f(t),
        }
    }

    /// Parses a Tween.js style selector such as `"Bounce.InOut"`.
    ///
    /// Matching is case-insensitive. `"Linear"` and `"Linear.None"` select the
    /// identity. Anything unrecognised falls back to [`Easing::Linear`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown easing '{name}', falling back to Linear");
            Easing::Linear
        })
    }

    /// Strict variant of [`Easing::from_name`].
    #[must_use]
    pub fn try_from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let (family, mode) = match name.split_once('.') {
            Some((family, mode)) => (family, Some(mode)),
            None => (name.as_str(), None),
        };

        if family == "linear" {
            return match mode {
                None | Some("none") => Some(Easing::Linear),
                Some(_) => None,
            };
        }

        let mode = match mode? {
            "in" => EaseMode::In,
            "out" => EaseMode::Out,
            "inout" => EaseMode::InOut,
            _ => return None,
        };

        Some(match family {
            "quadratic" => Easing::Quadratic(mode),
            "cubic" => Easing::Cubic(mode),
            "quartic" => Easing::Quartic(mode),
            "quintic" => Easing::Quintic(mode),
            "sinusoidal" => Easing::Sinusoidal(mode),
            "exponential" => Easing::Exponential(mode),
            "circular" => Easing::Circular(mode),
            "elastic" => Easing::Elastic(mode),
            "back" => Easing::Back(mode),
            "bounce" => Easing::Bounce(mode),
            _ => return None,
        })
    }
}

/// Quadratic through quintic share one shape: `t^n` and its mirror.
fn power(mode: EaseMode, t: f32, n: i32) -> f32 {
    match mode {
        EaseMode::In => t.powi(n),
        EaseMode::Out => 1.0 - (1.0 - t).powi(n),
        EaseMode::InOut => {
            if t < 0.5 {
                0.5 * (2.0 * t).powi(n)
            } else {
                1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
            }
        }
    }
}

fn sinusoidal(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1.0 - (t * PI / 2.0).cos(),
        EaseMode::Out => (t * PI / 2.0).sin(),
        EaseMode::InOut => 0.5 * (1.0 - (PI * t).cos()),
    }
}

fn exponential(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1024_f32.powf(t - 1.0),
        EaseMode::Out => 1.0 - 2_f32.powf(-10.0 * t),
        EaseMode::InOut => {
            let k = t * 2.0;
            if k < 1.0 {
                0.5 * 1024_f32.powf(k - 1.0)
            } else {
                0.5 * (2.0 - 2_f32.powf(-10.0 * (k - 1.0)))
            }
        }
    }
}

fn circular(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1.0 - (1.0 - t * t).sqrt(),
        EaseMode::Out => {
            let k = t - 1.0;
            (1.0 - k * k).sqrt()
        }
        EaseMode::InOut => {
            let k = t * 2.0;
            if k < 1.0 {
                -0.5 * ((1.0 - k * k).sqrt() - 1.0)
            } else {
                let k = k - 2.0;
                0.5 * ((1.0 - k * k).sqrt() + 1.0)
            }
        }
    }
}

fn elastic(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => -(2_f32.powf(10.0 * (t - 1.0))) * ((t - 1.1) * 5.0 * PI).sin(),
        EaseMode::Out => 2_f32.powf(-10.0 * t) * ((t - 0.1) * 5.0 * PI).sin() + 1.0,
        EaseMode::InOut => {
            let k = t * 2.0;
            let wave = ((k - 1.1) * 5.0 * PI).sin();
            if k < 1.0 {
                -0.5 * 2_f32.powf(10.0 * (k - 1.0)) * wave
            } else {
                0.5 * 2_f32.powf(-10.0 * (k - 1.0)) * wave + 1.0
            }
        }
    }
}

fn back(mode: EaseMode, t: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    match mode {
        EaseMode::In => t * t * ((s + 1.0) * t - s),
        EaseMode::Out => {
            let k = t - 1.0;
            k * k * ((s + 1.0) * k + s) + 1.0
        }
        EaseMode::InOut => {
            let s = s * 1.525;
            let k = t * 2.0;
            if k < 1.0 {
                0.5 * (k * k * ((s + 1.0) * k - s))
            } else {
                let k = k - 2.0;
                0.5 * (k * k * ((s + 1.0) * k + s) + 2.0)
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let k = t - 1.5 / D;
        N * k * k + 0.75
    } else if t < 2.5 / D {
        let k = t - 2.25 / D;
        N * k * k + 0.9375
    } else {
        let k = t - 2.625 / D;
        N * k * k + 0.984_375
    }
}

fn bounce(mode: EaseMode, t: f32) -> f32 {
    match mode {
        EaseMode::In => 1.0 - bounce_out(1.0 - t),
        EaseMode::Out => bounce_out(t),
        EaseMode::InOut => {
            if t < 0.5 {
                0.5 * (1.0 - bounce_out(1.0 - 2.0 * t))
            } else {
                0.5 * bounce_out(2.0 * t - 1.0) + 0.5
            }
        }
    }
}
