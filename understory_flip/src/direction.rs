// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flip directions, their rotation axes, and direction sets.

use core::fmt;
use core::str::FromStr;

/// The direction a [`FlipView`](crate::FlipView) rotates in.
///
/// Horizontal directions rotate about the vertical axis and vertical
/// directions rotate about the horizontal axis. [`Right`](Self::Right) and
/// [`Up`](Self::Up) rotate by a positive half turn; [`Left`](Self::Left) and
/// [`Down`](Self::Down) by a negative one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    /// Flip towards the left edge.
    Left,
    /// Flip towards the right edge.
    #[default]
    Right,
    /// Flip towards the top edge.
    Up,
    /// Flip towards the bottom edge.
    Down,
}

impl FlipDirection {
    /// All directions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the axis this direction rotates about.
    #[must_use]
    pub const fn axis(self) -> FlipAxis {
        match self {
            Self::Left | Self::Right => FlipAxis::Vertical,
            Self::Up | Self::Down => FlipAxis::Horizontal,
        }
    }

    /// Returns the full rotation of one flip in this direction, in degrees.
    ///
    /// This is `+180` for [`Right`](Self::Right) and [`Up`](Self::Up) and
    /// `-180` for [`Left`](Self::Left) and [`Down`](Self::Down).
    #[must_use]
    pub const fn delta_degrees(self) -> f64 {
        match self {
            Self::Right | Self::Up => 180.0,
            Self::Left | Self::Down => -180.0,
        }
    }

    /// Returns the lowercase name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`FlipDirection`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFlipDirectionError;

impl fmt::Display for ParseFlipDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `left`, `right`, `up`, `down`")
    }
}

impl core::error::Error for ParseFlipDirectionError {}

impl FromStr for FlipDirection {
    type Err = ParseFlipDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name() == s)
            .ok_or(ParseFlipDirectionError)
    }
}

/// The axis a flip rotates about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Rotation about the vertical (y) axis; the view narrows horizontally.
    Vertical,
    /// Rotation about the horizontal (x) axis; the view narrows vertically.
    Horizontal,
}

bitflags::bitflags! {
    /// A set of [`FlipDirection`]s, used to restrict which swipes flip a view.
    ///
    /// The default set contains every direction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FlipDirections: u8 {
        /// Swipes towards the left edge.
        const LEFT  = 0b0001;
        /// Swipes towards the right edge.
        const RIGHT = 0b0010;
        /// Swipes towards the top edge.
        const UP    = 0b0100;
        /// Swipes towards the bottom edge.
        const DOWN  = 0b1000;
        /// Horizontal swipes.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Vertical swipes.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
    }
}

impl Default for FlipDirections {
    fn default() -> Self {
        Self::all()
    }
}

impl FlipDirections {
    /// Returns `true` if `direction` is a member of this set.
    #[must_use]
    pub fn allows(self, direction: FlipDirection) -> bool {
        self.contains(direction.into())
    }
}

impl From<FlipDirection> for FlipDirections {
    fn from(direction: FlipDirection) -> Self {
        match direction {
            FlipDirection::Left => Self::LEFT,
            FlipDirection::Right => Self::RIGHT,
            FlipDirection::Up => Self::UP,
            FlipDirection::Down => Self::DOWN,
        }
    }
}

impl FromIterator<FlipDirection> for FlipDirections {
    fn from_iter<I: IntoIterator<Item = FlipDirection>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.into())
    }
}
