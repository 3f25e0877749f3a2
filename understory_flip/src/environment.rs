// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inherited flip configuration.
//!
//! A [`FlipEnvironment`] is a chain of scopes, mirroring the host's view tree.
//! A scope either overrides the flip animation or inherits it from its
//! parent; the root resolves to [`FlipAnimationValue::default`]. Scopes are
//! cheap to clone and share their ancestors.
//!
//! ```
//! use core::time::Duration;
//! use understory_flip::{FlipAnimation, FlipEnvironment};
//!
//! let root = FlipEnvironment::new();
//! let cards = root.with_flip_animation(FlipAnimation::Bouncy, Duration::from_millis(500));
//! let card = cards.scope();
//!
//! assert_eq!(root.flip_animation().animation, FlipAnimation::Linear);
//! assert_eq!(card.flip_animation().animation, FlipAnimation::Bouncy);
//! ```

use alloc::rc::Rc;
use core::time::Duration;

use crate::animation::{FlipAnimation, FlipAnimationValue};

/// One scope in an inherited flip configuration chain.
#[derive(Clone, Debug, Default)]
pub struct FlipEnvironment {
    inner: Option<Rc<Scope>>,
}

#[derive(Debug)]
struct Scope {
    flip_animation: Option<FlipAnimationValue>,
    parent: FlipEnvironment,
}

impl FlipEnvironment {
    /// Creates a root environment using the default animation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a child scope that inherits everything from this one.
    #[must_use]
    pub fn scope(&self) -> Self {
        self.child(None)
    }

    /// Creates a child scope whose flips reveal with `animation` over `duration`.
    #[must_use]
    pub fn with_flip_animation(&self, animation: FlipAnimation, duration: Duration) -> Self {
        self.child(Some(FlipAnimationValue::new(animation, duration)))
    }

    /// Creates a child scope using the default duration of 0.2 seconds.
    #[must_use]
    pub fn with_flip_animation_default_duration(&self, animation: FlipAnimation) -> Self {
        self.with_flip_animation(animation, FlipAnimationValue::DEFAULT_DURATION)
    }

    /// Old name of [`FlipEnvironment::with_flip_animation`].
    #[deprecated(note = "renamed to `with_flip_animation`")]
    #[must_use]
    pub fn with_flip_view_animation(&self, animation: FlipAnimation, duration: Duration) -> Self {
        self.with_flip_animation(animation, duration)
    }

    /// Resolves the animation from the nearest scope that sets one.
    #[must_use]
    pub fn flip_animation(&self) -> FlipAnimationValue {
        let mut current = self.inner.as_deref();
        while let Some(scope) = current {
            if let Some(value) = scope.flip_animation {
                return value;
            }
            current = scope.parent.inner.as_deref();
        }
        FlipAnimationValue::default()
    }

    fn child(&self, flip_animation: Option<FlipAnimationValue>) -> Self {
        Self {
            inner: Some(Rc::new(Scope {
                flip_animation,
                parent: self.clone(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_default() {
        let root = FlipEnvironment::new();
        assert_eq!(root.flip_animation(), FlipAnimationValue::default());
    }

    #[test]
    fn nearest_override_wins() {
        let root = FlipEnvironment::new();
        let outer = root.with_flip_animation(FlipAnimation::Smooth, Duration::from_secs(1));
        let inner = outer
            .scope()
            .with_flip_animation(FlipAnimation::Snappy, Duration::from_millis(300));

        assert_eq!(outer.flip_animation().animation, FlipAnimation::Smooth);
        assert_eq!(inner.flip_animation().animation, FlipAnimation::Snappy);
        assert_eq!(inner.flip_animation().duration, Duration::from_millis(300));
        // Children never leak into their parents.
        assert_eq!(root.flip_animation(), FlipAnimationValue::default());
    }

    #[test]
    fn siblings_are_independent() {
        let root = FlipEnvironment::new();
        let a = root.with_flip_animation_default_duration(FlipAnimation::EaseOut);
        let b = root.scope();
        assert_eq!(a.flip_animation().animation, FlipAnimation::EaseOut);
        assert_eq!(a.flip_animation().duration, FlipAnimationValue::DEFAULT_DURATION);
        assert_eq!(b.flip_animation(), FlipAnimationValue::default());
    }

    #[test]
    #[expect(deprecated, reason = "exercising the old name")]
    fn deprecated_name_forwards() {
        let env = FlipEnvironment::new()
            .with_flip_view_animation(FlipAnimation::Spring, Duration::from_millis(400));
        assert_eq!(
            env.flip_animation(),
            FlipAnimationValue::new(FlipAnimation::Spring, Duration::from_millis(400))
        );
    }
}
