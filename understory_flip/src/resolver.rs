// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping of taps and swipes onto flip directions.

use crate::direction::{FlipDirection, FlipDirections};

/// An input that may flip a view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlipTrigger {
    /// The view was tapped (or otherwise activated).
    Tap,
    /// The view was swiped towards the given edge.
    Swipe(FlipDirection),
}

/// Which direction a tap flips in and which swipes are honoured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlipOptions {
    /// Direction used for taps and for external changes of the flipped value.
    pub tap_direction: FlipDirection,
    /// Swipe directions that flip the view; other swipes are ignored.
    pub swipe_directions: FlipDirections,
}

impl FlipOptions {
    /// Resolves a trigger to the direction it flips in, if any.
    #[must_use]
    pub fn resolve(&self, trigger: FlipTrigger) -> Option<FlipDirection> {
        match trigger {
            FlipTrigger::Tap => Some(self.tap_direction),
            FlipTrigger::Swipe(direction) => self
                .swipe_directions
                .allows(direction)
                .then_some(direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_tap_right_and_allow_all_swipes() {
        let options = FlipOptions::default();
        assert_eq!(options.resolve(FlipTrigger::Tap), Some(FlipDirection::Right));
        for direction in FlipDirection::ALL {
            assert_eq!(options.resolve(FlipTrigger::Swipe(direction)), Some(direction));
        }
    }

    #[test]
    fn taps_use_configured_direction() {
        let options = FlipOptions {
            tap_direction: FlipDirection::Down,
            swipe_directions: FlipDirections::empty(),
        };
        assert_eq!(options.resolve(FlipTrigger::Tap), Some(FlipDirection::Down));
    }

    #[test]
    fn disallowed_swipes_resolve_to_none() {
        let options = FlipOptions {
            swipe_directions: FlipDirections::HORIZONTAL,
            ..FlipOptions::default()
        };
        assert_eq!(options.resolve(FlipTrigger::Swipe(FlipDirection::Up)), None);
        assert_eq!(options.resolve(FlipTrigger::Swipe(FlipDirection::Down)), None);
        assert_eq!(
            options.resolve(FlipTrigger::Swipe(FlipDirection::Left)),
            Some(FlipDirection::Left)
        );
    }
}
