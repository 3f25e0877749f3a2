// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase flip choreographer.
//!
//! A flip rotates the card shell by half of its total angle under a linear
//! curve, swaps the displayed face while the shell is edge-on, and then
//! rotates the shell the rest of the way under the configured curve.
//! Swapping at the edge-on point, together with a content counter-rotation
//! of a full half turn, keeps the displayed face from ever appearing
//! mirrored.

use core::time::Duration;

use smallvec::SmallVec;

use crate::animation::{Easing, FlipAnimationValue};
use crate::direction::FlipDirection;
use crate::face::Face;
use crate::tween::Tween;

/// Something that happened while advancing a flip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipEvent {
    /// The approach phase ended and the displayed face was swapped.
    Midpoint {
        /// The face now displayed.
        face: Face,
    },
    /// The reveal phase ended; the view is idle again.
    Completed {
        /// The face displayed at rest.
        face: Face,
    },
}

/// Events produced by one [`FlipState::advance`] call, in order.
pub type FlipEvents = SmallVec<[FlipEvent; 2]>;

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Approach {
        tween: Tween,
        delta: f64,
        reveal: FlipAnimationValue,
    },
    Reveal {
        tween: Tween,
    },
}

/// Per-view flip state: the displayed face and the rotation angles.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipState {
    face: Face,
    last_direction: FlipDirection,
    shell_degrees: f64,
    content_degrees: f64,
    phase: Phase,
}

impl FlipState {
    /// Creates an idle state showing `face`.
    #[must_use]
    pub fn new(face: Face) -> Self {
        let rest = rest_degrees(face);
        Self {
            face,
            last_direction: FlipDirection::default(),
            shell_degrees: rest,
            content_degrees: rest,
            phase: Phase::Idle,
        }
    }

    /// The face currently displayed.
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns `true` from the moment a flip begins until both of its phases
    /// have completed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The direction of the most recent flip, which selects the rotation axis.
    #[must_use]
    pub fn last_direction(&self) -> FlipDirection {
        self.last_direction
    }

    /// Rotation of the card shell, in degrees.
    #[must_use]
    pub fn shell_degrees(&self) -> f64 {
        self.shell_degrees
    }

    /// Rotation of the displayed content, in degrees.
    #[must_use]
    pub fn content_degrees(&self) -> f64 {
        self.content_degrees
    }

    /// Begins a flip in `direction`, revealing under `animation`.
    ///
    /// Returns `false` and changes nothing while another flip is in flight.
    pub fn begin(&mut self, direction: FlipDirection, animation: FlipAnimationValue) -> bool {
        if self.is_animating() {
            return false;
        }
        self.last_direction = direction;

        // Restart from the face's rest angle so the rotation keeps its sense
        // instead of unwinding through zero.
        let rest = rest_degrees(self.face);
        self.shell_degrees = rest;
        self.content_degrees = rest;

        let delta = direction.delta_degrees();
        self.phase = Phase::Approach {
            tween: Tween::new(
                rest,
                rest + delta / 2.0,
                animation.approach_duration(),
                Easing::Linear,
            ),
            delta,
            reveal: animation,
        };
        tracing::debug!(%direction, ?animation, face = ?self.face, "flip started");
        true
    }

    /// Moves the flip forward by `dt`.
    ///
    /// Time left over when a phase ends flows into the next one, so a single
    /// call can report both [`FlipEvent::Midpoint`] and
    /// [`FlipEvent::Completed`]. Does nothing while idle.
    pub fn advance(&mut self, dt: Duration) -> FlipEvents {
        let mut events = FlipEvents::new();
        let mut remaining = dt;
        loop {
            match &mut self.phase {
                Phase::Idle => break,
                Phase::Approach {
                    tween,
                    delta,
                    reveal,
                } => {
                    let leftover = tween.advance(remaining);
                    self.shell_degrees = tween.value();
                    let Some(leftover) = leftover else {
                        break;
                    };
                    let (delta, reveal) = (*delta, *reveal);

                    self.content_degrees += delta;
                    self.face = self.face.toggled();
                    events.push(FlipEvent::Midpoint { face: self.face });
                    tracing::debug!(face = ?self.face, "flip midpoint");

                    self.phase = Phase::Reveal {
                        tween: Tween::new(
                            self.shell_degrees,
                            self.shell_degrees + delta / 2.0,
                            reveal.reveal_duration(),
                            reveal.animation.easing(),
                        ),
                    };
                    remaining = leftover;
                }
                Phase::Reveal { tween } => {
                    let leftover = tween.advance(remaining);
                    self.shell_degrees = tween.value();
                    if leftover.is_none() {
                        break;
                    }
                    self.shell_degrees = tween.target();
                    self.phase = Phase::Idle;
                    events.push(FlipEvent::Completed { face: self.face });
                    tracing::debug!(face = ?self.face, "flip completed");
                    break;
                }
            }
        }
        events
    }
}

impl Default for FlipState {
    fn default() -> Self {
        Self::new(Face::Front)
    }
}

fn rest_degrees(face: Face) -> f64 {
    if face.is_back() { 180.0 } else { 0.0 }
}
