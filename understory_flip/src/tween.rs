// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host-driven tween between two scalar values.

use core::time::Duration;

use crate::animation::Easing;

/// Interpolates a scalar from `from` to `to` over `duration` under an [`Easing`].
///
/// A tween owns no clock. The host moves it forward with [`Tween::advance`],
/// which reports completion together with any time left over, so a caller
/// chaining tweens can hand that remainder to the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    /// Creates a tween that has not started yet.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Moves the tween forward by `dt`.
    ///
    /// Returns `Some(leftover)` once the tween has reached its end, where
    /// `leftover` is the part of `dt` it did not need. A zero-length tween
    /// completes on its first advance, whatever `dt` is.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        let remaining = self.duration.saturating_sub(self.elapsed);
        if dt >= remaining {
            self.elapsed = self.duration;
            Some(dt - remaining)
        } else {
            self.elapsed += dt;
            None
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// The eased value at the current time.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.sample(self.progress(), self.duration);
        self.from + (self.to - self.from) * eased
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The value the tween ends at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn linear_tween_interpolates() {
        let mut tween = Tween::new(0.0, 90.0, ms(100), Easing::Linear);
        assert_eq!(tween.value(), 0.0);

        assert_eq!(tween.advance(ms(50)), None);
        assert!((tween.value() - 45.0).abs() < 1e-9);
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(ms(50)), Some(Duration::ZERO));
        assert_eq!(tween.value(), 90.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn overshooting_dt_reports_leftover() {
        let mut tween = Tween::new(10.0, 20.0, ms(100), Easing::Linear);
        tween.advance(ms(30));
        assert_eq!(tween.advance(ms(100)), Some(ms(30)));
        assert_eq!(tween.value(), 20.0);
    }

    #[test]
    fn zero_length_tween_completes_immediately() {
        let mut tween = Tween::new(0.0, -90.0, Duration::ZERO, Easing::Linear);
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.advance(Duration::ZERO), Some(Duration::ZERO));
        assert_eq!(tween.value(), -90.0);
    }

    #[test]
    fn eased_tween_follows_curve() {
        let mut tween = Tween::new(0.0, 1.0, ms(1000), Easing::EASE_OUT);
        tween.advance(ms(500));
        assert!(tween.value() > 0.5);
    }
}
