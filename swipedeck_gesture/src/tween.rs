// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven tween animation for a scalar offset.
//!
//! ## Overview
//!
//! A [`Tween`] interpolates one `f64` from a start to a target over a fixed
//! duration, shaped by an [`Easing`] curve. It owns no clock: the host passes
//! a frame timestamp (nanoseconds, any monotonic origin) to
//! [`Tween::sample`], and the start time latches on the first sample. An
//! animation whose host stops ticking simply stalls; there are no timeouts.
//!
//! Both easing curves are monotonic and stay within `[0, 1]`, so a tween
//! never overshoots its target.

/// Easing curves for settle and fly-off animations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Easing {
    /// Constant-velocity interpolation.
    Linear,
    /// Symmetric ease-in-ease-out cubic bézier (`0.645, 0.045, 0.355, 1.0`).
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Map a linear fraction in `[0, 1]` through the curve.
    ///
    /// Out-of-range fractions clamp to the endpoints.
    pub fn transform(self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseInOutCubic => cubic_bezier(0.645, 0.045, 0.355, 1.0, fraction),
        }
    }
}

/// Evaluate a CSS-style cubic bézier easing at `fraction`.
///
/// Solves for the curve parameter at the given x via Newton–Raphson, with a
/// bisection fallback when the derivative degenerates, then samples y.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..24 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Duration and easing for a tween.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenSpec {
    /// Animation duration in milliseconds. Zero completes on the first sample.
    pub duration_millis: u64,
    /// Easing curve applied to linear progress.
    pub easing: Easing,
}

impl TweenSpec {
    /// Create a spec with the given duration and easing.
    pub const fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear spec with the given duration.
    pub const fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

/// A scalar animation from a start value to a target value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    start: f64,
    target: f64,
    spec: TweenSpec,
    start_time_nanos: Option<u64>,
}

impl Tween {
    /// Begin a tween from `start` toward `target`.
    ///
    /// The clock latches on the first [`Tween::sample`], so a tween created
    /// mid-frame starts from its first observed timestamp.
    pub fn new(start: f64, target: f64, spec: TweenSpec) -> Self {
        Self {
            start,
            target,
            spec,
            start_time_nanos: None,
        }
    }

    /// The value this tween ends at.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Sample the tween at a frame timestamp.
    ///
    /// Returns the eased value for that instant; at or past the duration this
    /// is exactly the target. Timestamps earlier than the latched start clamp
    /// to the start value.
    pub fn sample(&mut self, frame_time_nanos: u64) -> f64 {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        if self.spec.duration_millis == 0 {
            return self.target;
        }
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration = self.spec.duration_millis * 1_000_000;
        #[allow(
            clippy::cast_precision_loss,
            reason = "durations are far below 2^52 nanoseconds"
        )]
        let linear = (elapsed as f64 / duration as f64).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear);
        self.start + (self.target - self.start) * progress
    }

    /// Whether the tween has run its full duration by `frame_time_nanos`.
    ///
    /// False until the start time has latched via [`Tween::sample`], except
    /// for zero-duration tweens, which are finished from the outset.
    pub fn is_finished(&self, frame_time_nanos: u64) -> bool {
        if self.spec.duration_millis == 0 {
            return true;
        }
        match self.start_time_nanos {
            Some(start) => {
                frame_time_nanos.saturating_sub(start) >= self.spec.duration_millis * 1_000_000
            }
            None => false,
        }
    }
}
