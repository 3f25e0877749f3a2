// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render composition: what to draw for a flip view, and how.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `cos`
use kurbo::{Affine, Rect};

use crate::direction::FlipAxis;
use crate::face::Face;

/// The rotation applied to a flip view's displayed content.
///
/// The content rotates by `content_degrees` inside a shell rotating by
/// `shell_degrees`, both about `axis`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlipTransform {
    /// Axis both rotations share.
    pub axis: FlipAxis,
    /// Rotation of the outer shell, in degrees.
    pub shell_degrees: f64,
    /// Rotation of the content within the shell, in degrees.
    pub content_degrees: f64,
}

impl FlipTransform {
    /// Combined rotation of the content, in degrees.
    #[must_use]
    pub fn total_degrees(&self) -> f64 {
        self.shell_degrees + self.content_degrees
    }

    /// Apparent width (vertical axis) or height (horizontal axis) of the
    /// content relative to its laid-out size, under orthographic projection.
    ///
    /// Negative values mean the content would be seen from behind.
    #[must_use]
    pub fn projected_scale(&self) -> f64 {
        self.total_degrees().to_radians().cos()
    }

    /// Returns `true` when the content faces away from the viewer.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.projected_scale() < -1e-9
    }

    /// Flattens the rotation into a 2D transform about the centre of `bounds`.
    #[must_use]
    pub fn to_affine(&self, bounds: Rect) -> Affine {
        let scale = self.projected_scale();
        let (sx, sy) = match self.axis {
            FlipAxis::Vertical => (scale, 1.0),
            FlipAxis::Horizontal => (1.0, scale),
        };
        let center = bounds.center().to_vec2();
        Affine::translate(center) * Affine::scale_non_uniform(sx, sy) * Affine::translate(-center)
    }
}

/// Role a flip view reports to assistive technology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessibilityRole {
    /// The whole view activates on tap.
    Button,
}

/// Everything a host needs to paint one frame of a flip view.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipFrame<T> {
    /// The face being displayed.
    pub face: Face,
    /// Content built for [`FlipFrame::face`].
    pub content: T,
    /// Rotation state for this frame.
    pub transform: FlipTransform,
    /// [`FlipFrame::transform`] flattened for the bounds the frame was built for.
    pub affine: Affine,
    /// Assistive technology role for the view's whole area.
    pub role: AccessibilityRole,
    /// Whether the view currently shows its back, for assistive technology.
    pub toggled: bool,
    /// The host should paint this view in its own compositing layer.
    ///
    /// Set by [`FlipView::with_list_bug_fix`](crate::FlipView::with_list_bug_fix);
    /// rotation artifacts have been seen when the view is composited together
    /// with recycled cells of a virtualized list.
    pub isolated_layer: bool,
}
