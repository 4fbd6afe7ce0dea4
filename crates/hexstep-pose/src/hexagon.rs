//! Hexagonal body frame.
//!
//! ```text
//!       |-f-|
//!       *---*---*--------    f - front
//!      /    |    \     |     s - side
//!     /     |     \    s     m - middle
//!    /      |      \   |
//!   *------cog------* ---
//!    \      |      /|
//!     \     |     / |
//!      \    |    /  |
//!       *---*---*   |
//!           |       |
//!           |---m---|
//! ```
//!
//! The six vertices are the leg attachment points, indexed in canonical
//! leg order; `head` marks the forward direction and `cog` the centroid.

use hexstep_core::geometry::{Point3, Transform};
use hexstep_core::{BodyDimensions, LegId, NUM_LEGS};

/// The eight reference points of the body: six attachment vertices plus
/// head and centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexagon {
    vertices: [Point3; NUM_LEGS],
    head: Point3,
    cog: Point3,
}

impl Hexagon {
    /// Body-frame hexagon for the given dimensions, flat on z = 0.
    pub fn new(body: &BodyDimensions) -> Self {
        let BodyDimensions {
            front,
            middle,
            side,
        } = *body;
        let xs = [middle, front, -front, -middle, -front, front];
        let ys = [0.0, side, side, 0.0, -side, -side];

        let mut vertices = [Point3::origin(); NUM_LEGS];
        for i in 0..NUM_LEGS {
            vertices[i] = Point3::new(xs[i], ys[i], 0.0);
        }

        Self {
            vertices,
            head: Point3::new(0.0, side, 0.0),
            cog: Point3::origin(),
        }
    }

    pub const fn vertices(&self) -> &[Point3; NUM_LEGS] {
        &self.vertices
    }

    /// Attachment vertex for one leg.
    pub const fn vertex(&self, leg: LegId) -> Point3 {
        self.vertices[leg.index()]
    }

    pub const fn head(&self) -> Point3 {
        self.head
    }

    pub const fn cog(&self) -> Point3 {
        self.cog
    }

    /// Clone of this hexagon with every point pushed through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        let mut vertices = self.vertices;
        for v in &mut vertices {
            *v = transform.transform_point(v);
        }
        Self {
            vertices,
            head: transform.transform_point(&self.head),
            cog: transform.transform_point(&self.cog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hexstep_core::geometry::{body_transform, Vector3};

    fn hexagon() -> Hexagon {
        Hexagon::new(&BodyDimensions::new(100.0, 140.0, 120.0))
    }

    #[test]
    fn vertices_follow_canonical_layout() {
        let hex = hexagon();
        assert_relative_eq!(hex.vertex(LegId::RightMiddle), Point3::new(140.0, 0.0, 0.0));
        assert_relative_eq!(hex.vertex(LegId::RightFront), Point3::new(100.0, 120.0, 0.0));
        assert_relative_eq!(hex.vertex(LegId::LeftFront), Point3::new(-100.0, 120.0, 0.0));
        assert_relative_eq!(hex.vertex(LegId::LeftMiddle), Point3::new(-140.0, 0.0, 0.0));
        assert_relative_eq!(hex.vertex(LegId::LeftBack), Point3::new(-100.0, -120.0, 0.0));
        assert_relative_eq!(hex.vertex(LegId::RightBack), Point3::new(100.0, -120.0, 0.0));
    }

    #[test]
    fn head_and_cog() {
        let hex = hexagon();
        assert_relative_eq!(hex.head(), Point3::new(0.0, 120.0, 0.0));
        assert_relative_eq!(hex.cog(), Point3::origin());
    }

    #[test]
    fn transformed_moves_every_point() {
        let hex = hexagon();
        let t = body_transform(0.0, 0.0, 90.0, Vector3::new(0.0, 0.0, 50.0));
        let moved = hex.transformed(&t);
        // Right middle vertex rotates onto the y-axis and rises.
        assert_relative_eq!(
            moved.vertex(LegId::RightMiddle),
            Point3::new(0.0, 140.0, 50.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(moved.cog(), Point3::new(0.0, 0.0, 50.0), epsilon = 1e-12);
        // The original is untouched.
        assert_relative_eq!(hex.cog(), Point3::origin());
    }
}
