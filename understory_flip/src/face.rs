// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two faces of a flip view.

/// One of the two faces of a [`FlipView`](crate::FlipView).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Face {
    /// The face shown while the view is not flipped.
    #[default]
    Front,
    /// The face shown while the view is flipped.
    Back,
}

impl Face {
    /// Returns the face for a bound "is flipped" value.
    #[must_use]
    pub const fn from_is_flipped(is_flipped: bool) -> Self {
        if is_flipped { Self::Back } else { Self::Front }
    }

    /// Returns `true` for [`Face::Back`].
    #[must_use]
    pub const fn is_back(self) -> bool {
        matches!(self, Self::Back)
    }

    /// Returns the other face.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Face::Front.toggled(), Face::Back);
        assert_eq!(Face::Back.toggled().toggled(), Face::Back);
    }

    #[test]
    fn is_flipped_maps_to_back() {
        assert_eq!(Face::from_is_flipped(true), Face::Back);
        assert_eq!(Face::from_is_flipped(false), Face::Front);
        assert!(Face::from_is_flipped(true).is_back());
    }
}
