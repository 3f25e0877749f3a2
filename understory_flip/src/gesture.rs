// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and swipe recognition from raw pointer positions.
//!
//! ## Usage
//!
//! 1) Call [`FlipGestureRecognizer::on_down`] when a pointer is pressed on the view.
//! 2) Optionally call [`FlipGestureRecognizer::on_move`] as it moves.
//! 3) Call [`FlipGestureRecognizer::on_up`] on release to get the recognized trigger.
//! 4) Call [`FlipGestureRecognizer::cancel`] if the pointer is lost.
//!
//! ```
//! use kurbo::Point;
//! use understory_flip::{FlipDirection, FlipGestureRecognizer, FlipTrigger};
//!
//! let mut gesture = FlipGestureRecognizer::default();
//! gesture.on_down(Point::new(100.0, 100.0));
//! let trigger = gesture.on_up(Point::new(40.0, 110.0));
//! assert_eq!(trigger, Some(FlipTrigger::Swipe(FlipDirection::Left)));
//! ```

use kurbo::{Point, Vec2};

use crate::direction::FlipDirection;
use crate::resolver::FlipTrigger;

/// Thresholds for [`FlipGestureRecognizer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureOptions {
    /// Minimum travel, in view units, for a release to count as a swipe.
    pub swipe_threshold: f64,
    /// Maximum travel for a release to still count as a tap.
    pub tap_slop: f64,
    /// Whether swipes are recognized at all.
    ///
    /// Hosts driven by focus and activation rather than a pointer can turn
    /// this off and deliver taps only.
    pub swipes_enabled: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: 20.0,
            tap_slop: 10.0,
            swipes_enabled: true,
        }
    }
}

/// Recognizes taps and four-way swipes from pointer down/move/up positions.
///
/// Positions are in view coordinates with y growing downwards.
#[derive(Clone, Debug, Default)]
pub struct FlipGestureRecognizer {
    options: GestureOptions,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl FlipGestureRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            start_pos: None,
            last_pos: None,
        }
    }

    /// The thresholds in use.
    #[must_use]
    pub fn options(&self) -> GestureOptions {
        self.options
    }

    /// Starts tracking a press at `pos`, discarding any earlier one.
    pub fn on_down(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move and returns the delta since the previous position.
    pub fn on_move(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Ends the press at `pos` and classifies it.
    ///
    /// Travel of at least [`GestureOptions::swipe_threshold`] is a swipe along
    /// the dominant axis, travel within [`GestureOptions::tap_slop`] is a tap,
    /// and anything in between is dropped.
    pub fn on_up(&mut self, pos: Point) -> Option<FlipTrigger> {
        let start = self.start_pos.take()?;
        self.last_pos = None;
        let offset = pos - start;
        let distance = offset.hypot();

        if distance <= self.options.tap_slop {
            Some(FlipTrigger::Tap)
        } else if self.options.swipes_enabled && distance >= self.options.swipe_threshold {
            Some(FlipTrigger::Swipe(dominant_direction(offset)))
        } else {
            tracing::trace!(distance, "pointer travel is neither tap nor swipe");
            None
        }
    }

    /// Abandons the current press without producing a trigger.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}

fn dominant_direction(offset: Vec2) -> FlipDirection {
    if offset.x.abs() >= offset.y.abs() {
        if offset.x < 0.0 {
            FlipDirection::Left
        } else {
            FlipDirection::Right
        }
    } else if offset.y < 0.0 {
        FlipDirection::Up
    } else {
        FlipDirection::Down
    }
}
