// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spring-driven selector motion.
//!
//! A move is described by a [`SelectorAnimation`]: where the selector starts,
//! where it is going, when the move began, and the [`SpringCurve`] that shapes
//! it. Animations are plain values sampled against a caller-supplied clock in
//! milliseconds, so they can be evaluated deterministically in tests.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::{Color, MotionConfig};

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(not(feature = "std"))]
fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// `ln(1000)`: the spring envelope decays to 0.1% by the end of the move.
const SETTLE_LN: f64 = 6.907_755_278_982_137;

/// Damped harmonic oscillator mapping normalized time to progress.
///
/// Progress starts at `0` and is exactly `1` once normalized time reaches `1`.
/// Underdamped curves (`damping < 1`) overshoot past `1` before settling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    /// Damping ratio. Must be finite and positive.
    pub damping: f64,
    /// Initial velocity in units of total travel per duration.
    pub initial_velocity: f64,
}

impl SpringCurve {
    /// Builds the curve described by a [`MotionConfig`].
    #[must_use]
    pub const fn from_motion(motion: &MotionConfig) -> Self {
        Self {
            damping: motion.damping,
            initial_velocity: motion.initial_velocity,
        }
    }

    /// Progress at normalized time `u`.
    #[must_use]
    pub fn progress(&self, u: f64) -> f64 {
        if u.is_nan() || u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        1.0 - self.displacement(u)
    }

    /// Remaining distance to the target, starting at `1` with velocity `-v0`.
    fn displacement(&self, u: f64) -> f64 {
        let zeta = self.damping;
        let v0 = self.initial_velocity;

        if zeta < 1.0 {
            // The envelope decays at `zeta * omega`, which is `SETTLE_LN`.
            let omega = SETTLE_LN / zeta;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (SETTLE_LN - v0) / omega_d;
            exp(-SETTLE_LN * u) * ((omega_d * u).cos() + b * (omega_d * u).sin())
        } else if zeta == 1.0 {
            let omega = SETTLE_LN;
            (1.0 + (omega - v0) * u) * exp(-omega * u)
        } else {
            // Pick the frequency so the slower of the two modes settles in time.
            // Roots are `-omega * (zeta -/+ root)`. With `s = zeta + root` the
            // slow factor `zeta - root` equals `1 / s`, so the slow root is
            // exactly `-SETTLE_LN` and the fast one is `-SETTLE_LN * s * s`.
            let inv = 1.0 / zeta;
            let root = zeta * (1.0 - inv * inv).sqrt();
            let s = zeta + root;
            let r1 = -SETTLE_LN;
            let r2 = -SETTLE_LN * s * s;
            // `(-v0 - r2) / (r1 - r2)` scaled by `1 / -r2`; stays finite when
            // `r2` overflows.
            let c1 = (1.0 + v0 / r2) / (1.0 - 1.0 / (s * s));
            let c2 = 1.0 - c1;
            c1 * exp(r1 * u) + c2 * exp(r2 * u)
        }
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::from_motion(&MotionConfig::default())
    }
}

/// An in-flight move of the selector marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorAnimation {
    /// Position when the move started.
    pub from: Point,
    /// Target position.
    pub to: Point,
    /// Color when the move started.
    pub from_color: Color,
    /// Target color.
    pub to_color: Color,
    /// Clock reading when the move started, in milliseconds.
    pub start_ms: u64,
    /// Length of the move in milliseconds.
    pub duration_ms: u64,
    /// Shape of the move.
    pub curve: SpringCurve,
}

impl SelectorAnimation {
    /// Normalized time at `now_ms`; `1` once the move is over.
    #[must_use]
    pub fn normalized_time(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        elapsed as f64 / self.duration_ms as f64
    }

    /// Position and color of the selector at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> (Point, Color) {
        let t = self.curve.progress(self.normalized_time(now_ms));
        (
            self.from.lerp(self.to, t),
            self.from_color.lerp(self.to_color, t),
        )
    }

    /// Returns `true` once the selector has reached its target.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.start_ms.saturating_add(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectorAnimation, SpringCurve};
    use crate::Color;
    use kurbo::Point;

    #[test]
    fn progress_is_pinned_at_endpoints() {
        for damping in [0.3, 0.7, 1.0, 2.5] {
            let curve = SpringCurve {
                damping,
                initial_velocity: 0.7,
            };
            assert_eq!(curve.progress(0.0), 0.0, "damping {damping}");
            assert_eq!(curve.progress(-1.0), 0.0, "damping {damping}");
            assert_eq!(curve.progress(1.0), 1.0, "damping {damping}");
            assert_eq!(curve.progress(3.0), 1.0, "damping {damping}");
            let near_end = curve.progress(0.999);
            assert!(
                (near_end - 1.0).abs() < 0.02,
                "damping {damping} ends at {near_end}"
            );
        }
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let curve = SpringCurve::default();
        assert!(curve.progress(0.5) > 1.0, "expected overshoot mid-move");
    }

    #[test]
    fn critically_damped_spring_from_rest_is_monotonic() {
        let curve = SpringCurve {
            damping: 1.0,
            initial_velocity: 0.0,
        };
        let mut last = 0.0;
        for step in 1..=100 {
            let p = curve.progress(f64::from(step) / 100.0);
            assert!(p >= last, "progress went backwards at step {step}");
            assert!(p <= 1.0, "progress overshot at step {step}");
            last = p;
        }
    }

    #[test]
    fn overdamped_spring_stays_between_endpoints() {
        let curve = SpringCurve {
            damping: 2.0,
            initial_velocity: 0.0,
        };
        let mid = curve.progress(0.5);
        assert!(mid > 0.0 && mid < 1.0, "mid-move progress {mid}");
    }

    #[test]
    fn heavy_damping_stays_finite() {
        for damping in [1e10, 1e160, f64::MAX] {
            let curve = SpringCurve {
                damping,
                initial_velocity: 0.7,
            };
            for step in 1..100 {
                let u = f64::from(step) / 100.0;
                let p = curve.progress(u);
                assert!(p.is_finite(), "damping {damping} gives {p} at {u}");
                assert!(p > 0.0 && p <= 1.0, "damping {damping} gives {p} at {u}");
            }
        }
    }

    #[test]
    fn animation_samples_against_clock() {
        let anim = SelectorAnimation {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 0.0),
            from_color: Color::BLACK,
            to_color: Color::WHITE,
            start_ms: 1000,
            duration_ms: 200,
            curve: SpringCurve::default(),
        };

        assert_eq!(anim.sample(900), (Point::new(0.0, 0.0), Color::BLACK));
        assert_eq!(anim.sample(1000), (Point::new(0.0, 0.0), Color::BLACK));
        assert!(!anim.is_finished(1199));
        assert!(anim.is_finished(1200));
        assert_eq!(anim.sample(1200), (Point::new(100.0, 0.0), Color::WHITE));

        // Position overshoots mid-move, color never leaves its range.
        let (pos, color) = anim.sample(1100);
        assert!(pos.x > 100.0, "x = {}", pos.x);
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let anim = SelectorAnimation {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 5.0),
            from_color: Color::BLACK,
            to_color: Color::WHITE,
            start_ms: 50,
            duration_ms: 0,
            curve: SpringCurve::default(),
        };
        assert!(anim.is_finished(50));
        assert_eq!(anim.sample(50).0, Point::new(10.0, 5.0));
    }
}
