//! Affine transforms for paths.
//!
//! [`Path`](crate::Path) moves, rotates and scales its points through a [`Transform2D`];
//! rotation and scaling pivot on the path's anchor via [`Transform2D::rotate_about`] and
//! [`Transform2D::scale_about`].

use tracery_core::math::{DMat3, Point};

/// A 2D affine transformation matrix.
///
/// Internally uses a 3x3 matrix whose last row is always [0, 0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: DMat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        matrix: DMat3::IDENTITY,
    };

    /// Create a translation transform.
    pub fn translate(offset: Point) -> Self {
        Self {
            matrix: DMat3::from_translation(offset),
        }
    }

    /// Create a rotation transform about the origin (angle in radians).
    pub fn rotate(angle: f64) -> Self {
        Self {
            matrix: DMat3::from_angle(angle),
        }
    }

    /// Create a rotation about `pivot`. The pivot maps to itself.
    pub fn rotate_about(angle: f64, pivot: Point) -> Self {
        Self::translate(-pivot)
            .then_rotate(angle)
            .then_translate(pivot)
    }

    /// Create a uniform scale transform.
    pub fn scale(factor: f64) -> Self {
        Self::scale_xy(Point::splat(factor))
    }

    /// Create a non-uniform scale transform.
    pub fn scale_xy(scale: Point) -> Self {
        Self {
            matrix: DMat3::from_scale(scale),
        }
    }

    /// Create a per-axis scale away from `pivot`. The pivot maps to itself.
    pub fn scale_about(scale: Point, pivot: Point) -> Self {
        Self::translate(-pivot)
            .then_scale_xy(scale)
            .then_translate(pivot)
    }

    /// Combine two transforms (self then other).
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Add a translation after this transform.
    pub fn then_translate(&self, offset: Point) -> Self {
        self.then(&Transform2D::translate(offset))
    }

    /// Add a rotation after this transform.
    pub fn then_rotate(&self, angle: f64) -> Self {
        self.then(&Transform2D::rotate(angle))
    }

    /// Add a non-uniform scale after this transform.
    pub fn then_scale_xy(&self, scale: Point) -> Self {
        self.then(&Transform2D::scale_xy(scale))
    }

    /// Transform a point.
    pub fn transform_point(&self, point: Point) -> Point {
        self.matrix.transform_point2(point)
    }
}
