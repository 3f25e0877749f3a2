// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flip animation curves and their sampled easing functions.

use core::f64::consts::TAU;
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`, `sqrt`

/// The named animation curves a flip can use for its reveal phase.
///
/// Apply one to a subtree with
/// [`FlipEnvironment::with_flip_animation`](crate::FlipEnvironment::with_flip_animation).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlipAnimation {
    /// A spring with noticeable overshoot.
    Bouncy,
    /// A curve that starts fast and decelerates.
    EaseOut,
    /// Constant speed.
    #[default]
    Linear,
    /// A spring without overshoot.
    Smooth,
    /// A spring with a small overshoot.
    Snappy,
    /// A plain spring without overshoot.
    Spring,
}

impl FlipAnimation {
    /// All animation curves, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Bouncy,
        Self::EaseOut,
        Self::Linear,
        Self::Smooth,
        Self::Snappy,
        Self::Spring,
    ];

    /// Returns the stable name of this curve, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bouncy => "bouncy",
            Self::EaseOut => "easeOut",
            Self::Linear => "linear",
            Self::Smooth => "smooth",
            Self::Snappy => "snappy",
            Self::Spring => "spring",
        }
    }

    /// Returns the easing function this curve samples.
    #[must_use]
    pub const fn easing(self) -> Easing {
        match self {
            Self::Bouncy => Easing::Spring { bounce: 0.3 },
            Self::EaseOut => Easing::EASE_OUT,
            Self::Linear => Easing::Linear,
            Self::Smooth | Self::Spring => Easing::Spring { bounce: 0.0 },
            Self::Snappy => Easing::Spring { bounce: 0.15 },
        }
    }
}

impl fmt::Display for FlipAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`FlipAnimation`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFlipAnimationError;

impl fmt::Display for ParseFlipAnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "expected one of `bouncy`, `easeOut`, `linear`, `smooth`, `snappy`, `spring`",
        )
    }
}

impl core::error::Error for ParseFlipAnimationError {}

impl FromStr for FlipAnimation {
    type Err = ParseFlipAnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|animation| animation.name() == s)
            .ok_or(ParseFlipAnimationError)
    }
}

/// A flip animation curve together with its duration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlipAnimationValue {
    /// The curve used for the reveal phase.
    pub animation: FlipAnimation,
    /// The duration of the reveal phase. The approach phase takes half of it.
    pub duration: Duration,
}

impl FlipAnimationValue {
    /// The duration used when none is given: 0.2 seconds.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

    /// Creates a new animation value.
    #[must_use]
    pub const fn new(animation: FlipAnimation, duration: Duration) -> Self {
        Self {
            animation,
            duration,
        }
    }

    /// Duration of the linear approach phase, which ends edge-on.
    #[must_use]
    pub fn approach_duration(&self) -> Duration {
        self.duration / 2
    }

    /// Duration of the reveal phase, which runs under the configured curve.
    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        self.duration
    }
}

impl Default for FlipAnimationValue {
    fn default() -> Self {
        Self::new(FlipAnimation::Linear, Self::DEFAULT_DURATION)
    }
}

/// A timing function mapping linear progress to eased progress.
///
/// Every easing maps `0.0` to `0.0` and `1.0` to exactly `1.0`; springs may
/// overshoot in between.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Identity.
    Linear,
    /// A cubic Bézier from `(0, 0)` to `(1, 1)` with the two given control points.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
    /// A damped spring whose period is the animation duration.
    ///
    /// `bounce` of `0` is critically damped; larger values overshoot more.
    Spring {
        /// Damping reduction in `[0, 1)`.
        bounce: f64,
    },
}

impl Easing {
    /// The standard ease-out curve.
    pub const EASE_OUT: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Samples the curve at `progress` (clamped to `[0, 1]`) of an animation
    /// lasting `duration`.
    ///
    /// Only springs depend on `duration`; their stiffness scales with it.
    #[must_use]
    pub fn sample(self, progress: f64, duration: Duration) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => progress,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let t = solve_bezier_t(progress, x1, x2);
                bezier_component(t, y1, y2)
            }
            Self::Spring { bounce } => {
                let period = duration.as_secs_f64();
                if period <= 0.0 {
                    return 1.0;
                }
                spring_value(progress * period, period, bounce)
            }
        }
    }
}

/// One coordinate of a unit cubic Bézier with endpoints 0 and 1.
fn bezier_component(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_derivative(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Finds the curve parameter whose x coordinate is `x`.
fn solve_bezier_t(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut t = x;
    for _ in 0..8 {
        let error = bezier_component(t, x1, x2) - x;
        if error.abs() < EPSILON {
            return t;
        }
        let slope = bezier_derivative(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    // Newton did not converge; x(t) is monotonic for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    while hi - lo > EPSILON {
        let value = bezier_component(t, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

/// Position of a unit spring released at 0 towards 1, `time` seconds in.
fn spring_value(time: f64, period: f64, bounce: f64) -> f64 {
    let omega = TAU / period;
    let zeta = (1.0 - bounce).clamp(0.0, 1.0);
    if zeta >= 1.0 {
        let decay = exp(-omega * time);
        return 1.0 - decay * (1.0 + omega * time);
    }
    let damped = omega * (1.0 - zeta * zeta).sqrt();
    let decay = exp(-zeta * omega * time);
    1.0 - decay * ((damped * time).cos() + zeta * omega / damped * (damped * time).sin())
}

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

// Kurbo's float shims stop short of `exp`.
#[cfg(not(feature = "std"))]
fn exp(x: f64) -> f64 {
    libm::exp(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn default_is_linear_over_two_tenths() {
        let value = FlipAnimationValue::default();
        assert_eq!(value.animation, FlipAnimation::Linear);
        assert_eq!(value.duration, Duration::from_millis(200));
        assert_eq!(value.approach_duration(), Duration::from_millis(100));
        assert_eq!(value.reveal_duration(), Duration::from_millis(200));
    }

    #[test]
    fn names_parse_back() {
        for animation in FlipAnimation::ALL {
            assert_eq!(animation.name().parse(), Ok(animation));
        }
        assert_eq!("ease_out".parse::<FlipAnimation>(), Err(ParseFlipAnimationError));
    }

    #[test]
    fn every_curve_pins_its_endpoints() {
        for animation in FlipAnimation::ALL {
            let easing = animation.easing();
            assert!(easing.sample(0.0, SECOND).abs() < 1e-9, "{animation} at 0");
            assert_eq!(easing.sample(1.0, SECOND), 1.0, "{animation} at 1");
            assert_eq!(easing.sample(1.5, SECOND), 1.0, "{animation} past 1");
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        for step in 1..10 {
            let progress = f64::from(step) / 10.0;
            assert!(Easing::EASE_OUT.sample(progress, SECOND) > progress);
        }
    }

    #[test]
    fn bouncy_overshoots_and_smooth_does_not() {
        let samples = |easing: Easing| (1..100).map(move |i| easing.sample(f64::from(i) / 100.0, SECOND));
        let bouncy_peak = samples(FlipAnimation::Bouncy.easing()).fold(0.0, f64::max);
        let smooth_peak = samples(FlipAnimation::Smooth.easing()).fold(0.0, f64::max);
        assert!(bouncy_peak > 1.0);
        assert!(smooth_peak <= 1.0);
    }

    #[test]
    fn exp_matches_known_values() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - core::f64::consts::E).abs() < 1e-12);
        assert!(exp(-40.0) < 1e-17);
    }

    #[test]
    fn critically_damped_spring_settles_monotonically() {
        let spring = FlipAnimation::Spring.easing();
        let mut previous = 0.0;
        for i in 1..100 {
            let value = spring.sample(f64::from(i) / 100.0, SECOND);
            assert!(value >= previous, "spring went backwards at {i}");
            previous = value;
        }
        // e^(-2π)(1 + 2π) short of the target just before the end.
        assert!(previous > 0.98);
    }

    #[test]
    fn zero_length_spring_is_settled() {
        assert_eq!(FlipAnimation::Spring.easing().sample(0.5, Duration::ZERO), 1.0);
    }
}
