// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flip view component.

use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect, Vec2};

use crate::direction::{FlipDirection, FlipDirections};
use crate::environment::FlipEnvironment;
use crate::face::Face;
use crate::gesture::{FlipGestureRecognizer, GestureOptions};
use crate::render::{AccessibilityRole, FlipFrame, FlipTransform};
use crate::resolver::{FlipOptions, FlipTrigger};
use crate::state::{FlipEvents, FlipState};

/// A view with a front and a back face that flips between them.
///
/// `Front` and `Back` build the content of each face; both must produce the
/// same type `T` (for example a host widget handle or a display list).
///
/// The view owns no clock: feed it triggers, call [`FlipView::advance`] every
/// frame while [`FlipView::is_animating`], and paint [`FlipView::frame`].
/// [`FlipView::is_flipped`] is the value the host observes; it changes
/// exactly when the displayed face is swapped.
pub struct FlipView<Front, Back> {
    front: Front,
    back: Back,
    options: FlipOptions,
    gesture: FlipGestureRecognizer,
    state: FlipState,
    isolated_layer: bool,
    revision: u64,
}

impl<Front, Back> fmt::Debug for FlipView<Front, Back> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlipView")
            .field("options", &self.options)
            .field("gesture", &self.gesture)
            .field("state", &self.state)
            .field("isolated_layer", &self.isolated_layer)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<T, Front, Back> FlipView<Front, Back>
where
    Front: Fn() -> T,
    Back: Fn() -> T,
{
    /// Creates a view showing its back if `is_flipped`, otherwise its front.
    ///
    /// Taps flip to the right and swipes in every direction are honoured.
    pub fn new(is_flipped: bool, front: Front, back: Back) -> Self {
        Self {
            front,
            back,
            options: FlipOptions::default(),
            gesture: FlipGestureRecognizer::default(),
            state: FlipState::new(Face::from_is_flipped(is_flipped)),
            isolated_layer: false,
            revision: 0,
        }
    }

    /// Sets the direction taps (and external writes of the flipped value) flip in.
    #[must_use]
    pub fn with_tap_direction(mut self, direction: FlipDirection) -> Self {
        self.options.tap_direction = direction;
        self
    }

    /// Restricts the swipe directions that flip the view.
    #[must_use]
    pub fn with_swipe_directions(mut self, directions: impl Into<FlipDirections>) -> Self {
        self.options.swipe_directions = directions.into();
        self
    }

    /// Sets the thresholds used to recognize pointer gestures.
    #[must_use]
    pub fn with_gesture_options(mut self, options: GestureOptions) -> Self {
        self.gesture = FlipGestureRecognizer::new(options);
        self
    }

    /// Asks the host to paint the view in an isolated compositing layer.
    ///
    /// Use this when the view lives in a scrolling or virtualized list, where
    /// the rotation has been seen to render incorrectly otherwise. It has no
    /// effect on flipping itself.
    #[must_use]
    pub fn with_list_bug_fix(mut self) -> Self {
        self.isolated_layer = true;
        self
    }

    /// The tap direction and allowed swipe directions.
    #[must_use]
    pub fn options(&self) -> FlipOptions {
        self.options
    }

    /// Returns `true` while the back face is displayed.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.state.face().is_back()
    }

    /// The face currently displayed.
    #[must_use]
    pub fn face(&self) -> Face {
        self.state.face()
    }

    /// Returns `true` while a flip is in flight; new triggers are ignored then.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Direction of the most recent flip.
    #[must_use]
    pub fn last_direction(&self) -> FlipDirection {
        self.state.last_direction()
    }

    /// The underlying choreography state.
    #[must_use]
    pub fn state(&self) -> &FlipState {
        &self.state
    }

    /// Counter bumped on every observable change; redraw when it moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Flips in the tap direction.
    pub fn tap(&mut self, env: &FlipEnvironment) -> bool {
        self.trigger(FlipTrigger::Tap, env)
    }

    /// Flips in `direction` if it is an allowed swipe direction.
    pub fn swipe(&mut self, direction: FlipDirection, env: &FlipEnvironment) -> bool {
        self.trigger(FlipTrigger::Swipe(direction), env)
    }

    /// Resolves `trigger` and starts a flip, reading the animation from `env`.
    ///
    /// Returns `false` if the trigger was rejected or a flip is already running.
    pub fn trigger(&mut self, trigger: FlipTrigger, env: &FlipEnvironment) -> bool {
        let Some(direction) = self.options.resolve(trigger) else {
            tracing::trace!(?trigger, "swipe direction not allowed");
            return false;
        };
        self.begin(direction, env)
    }

    /// Writes the flipped value from outside.
    ///
    /// A different value flips the view in the tap direction. Writes are
    /// ignored while a flip is running; the view keeps its own value then.
    pub fn set_is_flipped(&mut self, is_flipped: bool, env: &FlipEnvironment) -> bool {
        if is_flipped == self.is_flipped() {
            tracing::trace!(is_flipped, "flipped value unchanged");
            return false;
        }
        self.begin(self.options.tap_direction, env)
    }

    /// A pointer was pressed on the view.
    pub fn pointer_down(&mut self, pos: Point) {
        self.gesture.on_down(pos);
    }

    /// The pressed pointer moved; returns the delta since its last position.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Vec2> {
        self.gesture.on_move(pos)
    }

    /// The pressed pointer was released; flips on a recognized tap or swipe.
    pub fn pointer_up(&mut self, pos: Point, env: &FlipEnvironment) -> bool {
        match self.gesture.on_up(pos) {
            Some(trigger) => self.trigger(trigger, env),
            None => false,
        }
    }

    /// The pressed pointer was lost.
    pub fn pointer_cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Moves a running flip forward by `dt` and reports what happened.
    pub fn advance(&mut self, dt: Duration) -> FlipEvents {
        if !self.state.is_animating() {
            return FlipEvents::new();
        }
        let before = self.state.clone();
        let events = self.state.advance(dt);
        if self.state != before {
            self.revision += 1;
        }
        events
    }

    /// Builds the displayed face and its transform for `bounds`.
    pub fn frame(&self, bounds: Rect) -> FlipFrame<T> {
        let face = self.state.face();
        let content = match face {
            Face::Front => (self.front)(),
            Face::Back => (self.back)(),
        };
        let transform = FlipTransform {
            axis: self.state.last_direction().axis(),
            shell_degrees: self.state.shell_degrees(),
            content_degrees: self.state.content_degrees(),
        };
        FlipFrame {
            face,
            content,
            transform,
            affine: transform.to_affine(bounds),
            role: AccessibilityRole::Button,
            toggled: face.is_back(),
            isolated_layer: self.isolated_layer,
        }
    }

    fn begin(&mut self, direction: FlipDirection, env: &FlipEnvironment) -> bool {
        if !self.state.begin(direction, env.flip_animation()) {
            tracing::trace!(%direction, "flip already in progress");
            return false;
        }
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FlipEvent;

    fn card(is_flipped: bool) -> FlipView<impl Fn() -> &'static str, impl Fn() -> &'static str> {
        FlipView::new(is_flipped, || "front", || "back")
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    #[test]
    fn frame_builds_displayed_face() {
        let view = card(false);
        let frame = view.frame(BOUNDS);
        assert_eq!(frame.content, "front");
        assert_eq!(frame.role, AccessibilityRole::Button);
        assert!(!frame.toggled);
        assert!(!frame.isolated_layer);

        let view = card(true).with_list_bug_fix();
        let frame = view.frame(BOUNDS);
        assert_eq!(frame.content, "back");
        assert!(frame.toggled);
        assert!(frame.isolated_layer);
        assert!(!frame.transform.is_mirrored());
    }

    #[test]
    fn tap_flips_to_back() {
        let env = FlipEnvironment::new();
        let mut view = card(false);
        assert!(view.tap(&env));
        assert_eq!(view.last_direction(), FlipDirection::Right);

        let events = view.advance(Duration::from_secs(1));
        assert_eq!(events.last(), Some(&FlipEvent::Completed { face: Face::Back }));
        assert!(view.is_flipped());
        assert_eq!(view.frame(BOUNDS).content, "back");
    }

    #[test]
    fn revision_moves_only_on_change() {
        let env = FlipEnvironment::new();
        let mut view = card(false);
        assert_eq!(view.revision(), 0);

        view.advance(Duration::from_millis(16));
        assert!(!view.set_is_flipped(false, &env));
        assert_eq!(view.revision(), 0);

        view.tap(&env);
        assert_eq!(view.revision(), 1);
        assert!(!view.tap(&env));
        assert_eq!(view.revision(), 1);

        view.advance(Duration::from_millis(16));
        assert_eq!(view.revision(), 2);

        // No time passed, nothing moved.
        view.advance(Duration::ZERO);
        assert!(view.is_animating());
        assert_eq!(view.revision(), 2);

        view.advance(Duration::from_secs(1));
        assert_eq!(view.revision(), 3);
        view.advance(Duration::from_millis(16));
        assert_eq!(view.revision(), 3);
    }

    #[test]
    fn gesture_options_reach_the_recognizer() {
        let env = FlipEnvironment::new();
        let mut view = card(false).with_gesture_options(GestureOptions {
            swipe_threshold: 100.0,
            tap_slop: 2.0,
            swipes_enabled: true,
        });

        // Long enough for the default threshold, short of this one.
        view.pointer_down(Point::new(0.0, 0.0));
        assert!(!view.pointer_up(Point::new(50.0, 0.0), &env));
        assert!(!view.is_animating());

        view.pointer_down(Point::new(0.0, 0.0));
        assert!(view.pointer_up(Point::new(-120.0, 0.0), &env));
        assert_eq!(view.last_direction(), FlipDirection::Left);
    }

    #[test]
    fn pointer_swipe_flips_vertically() {
        let env = FlipEnvironment::new();
        let mut view = card(false);
        view.pointer_down(Point::new(100.0, 80.0));
        assert!(view.pointer_move(Point::new(100.0, 60.0)).is_some());
        assert!(view.pointer_up(Point::new(102.0, 20.0), &env));
        assert_eq!(view.last_direction(), FlipDirection::Up);

        view.advance(Duration::from_millis(100));
        assert_eq!(
            view.frame(BOUNDS).transform.axis,
            crate::direction::FlipAxis::Horizontal
        );
    }

    #[test]
    fn cancelled_pointer_does_not_flip() {
        let env = FlipEnvironment::new();
        let mut view = card(false);
        view.pointer_down(Point::new(0.0, 0.0));
        view.pointer_cancel();
        assert!(!view.pointer_up(Point::new(0.0, 0.0), &env));
        assert!(!view.is_animating());
    }
}
