// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_flip --heading-base-level=0

//! Understory Flip: a headless two-faced flip card.
//!
//! This crate models a view with a front and a back face that flips between
//! them with a 3D-style rotation when tapped or swiped. It focuses on:
//! - Resolving taps and swipes into flip directions.
//! - Choreographing the flip in two phases, swapping faces while the card is
//!   edge-on so the content never appears mirrored.
//! - Producing per-frame transforms and accessibility hints.
//!
//! It does **not** own a renderer, an event loop, or a clock. Callers are
//! expected to:
//! - Forward pointer input (or already-recognized taps/swipes) to a [`FlipView`].
//! - Call [`FlipView::advance`] with the elapsed frame time while it is animating.
//! - Paint the content from [`FlipView::frame`] with its transform.
//! - Pass a [`FlipEnvironment`] down their view tree to choose the animation.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use understory_flip::{Face, FlipAnimation, FlipEnvironment, FlipView};
//!
//! let env = FlipEnvironment::new()
//!     .with_flip_animation(FlipAnimation::Bouncy, Duration::from_millis(500));
//! let mut card = FlipView::new(false, || "front", || "back");
//!
//! assert!(card.tap(&env));
//! // Ignored: a flip is already running.
//! assert!(!card.tap(&env));
//!
//! // The linear approach takes half of the duration, then the face swaps.
//! card.advance(Duration::from_millis(250));
//! assert_eq!(card.face(), Face::Back);
//!
//! card.advance(Duration::from_millis(500));
//! assert!(card.is_flipped());
//! assert!(!card.is_animating());
//!
//! let frame = card.frame(Rect::new(0.0, 0.0, 320.0, 200.0));
//! assert_eq!(frame.content, "back");
//! ```
//!
//! ## Flip choreography
//!
//! A flip in direction `d` rotates by `+180°` for right/up and `-180°` for
//! left/down, about the vertical axis for left/right and the horizontal axis
//! for up/down:
//! 1. The shell rotates the first half turn under a linear curve, over half
//!    of the configured duration.
//! 2. With the shell edge-on, the content angle jumps by the full half turn
//!    and the displayed face toggles.
//! 3. The shell rotates the second half turn under the configured curve,
//!    over the configured duration.
//!
//! Triggers arriving while a flip runs are ignored.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod direction;
mod environment;
mod face;
mod gesture;
mod render;
mod resolver;
mod state;
mod tween;
mod view;

pub use animation::{Easing, FlipAnimation, FlipAnimationValue, ParseFlipAnimationError};
pub use direction::{FlipAxis, FlipDirection, FlipDirections, ParseFlipDirectionError};
pub use environment::FlipEnvironment;
pub use face::Face;
pub use gesture::{FlipGestureRecognizer, GestureOptions};
pub use render::{AccessibilityRole, FlipFrame, FlipTransform};
pub use resolver::{FlipOptions, FlipTrigger};
pub use state::{FlipEvent, FlipEvents, FlipState};
pub use tween::Tween;
pub use view::FlipView;

/// Old name of [`FlipAnimation`].
#[deprecated(note = "renamed to `FlipAnimation`")]
pub type FlipViewAnimation = FlipAnimation;
