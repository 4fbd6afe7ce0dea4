//! Geometry primitives shared by the kinematics crates.
//!
//! Positions and directions are `nalgebra` types over `f64`. Angles cross
//! every public API boundary in degrees; radians appear only at the point
//! where a trigonometric function is evaluated.

use nalgebra::{Isometry3, Point2, Translation3, UnitQuaternion};

/// A position in 3d space.
pub type Point3 = nalgebra::Point3<f64>;

/// A displacement or direction in 3d space.
pub type Vector3 = nalgebra::Vector3<f64>;

/// A rigid transform: rotation composed with translation. Composable via
/// `*` and invertible via `.inverse()`.
pub type Transform = Isometry3<f64>;

/// Build a body transform from intrinsic roll/pitch/yaw angles (degrees)
/// and a world-space translation.
pub fn body_transform(roll_deg: f64, pitch_deg: f64, yaw_deg: f64, translation: Vector3) -> Transform {
    let rotation = UnitQuaternion::from_euler_angles(
        roll_deg.to_radians(),
        pitch_deg.to_radians(),
        yaw_deg.to_radians(),
    );
    Isometry3::from_parts(Translation3::from(translation), rotation)
}

/// Pure rotation about the z-axis by `theta_deg` degrees.
pub fn rot_z_deg(theta_deg: f64) -> Transform {
    Isometry3::rotation(Vector3::z() * theta_deg.to_radians())
}

/// Containment slack for support-polygon tests. A point this close to an
/// edge still counts as inside, so a foot exactly under the centroid does
/// not flip the stability verdict on rounding noise.
const CONTAINMENT_TOL: f64 = 1e-3;

/// Whether `p` lies inside the triangle `(a, b, c)`, by barycentric
/// coordinates. Degenerate (collinear) triangles contain nothing.
pub fn point_in_triangle(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> bool {
    let u = b - a;
    let v = c - a;
    let w = p - a;

    let denom = u.x * v.y - u.y * v.x;
    if denom.abs() < f64::EPSILON {
        return false;
    }

    let beta = (w.x * v.y - w.y * v.x) / denom;
    let gamma = (u.x * w.y - u.y * w.x) / denom;
    let alpha = 1.0 - beta - gamma;

    let lo = -CONTAINMENT_TOL;
    let hi = 1.0 + CONTAINMENT_TOL;
    (lo..=hi).contains(&alpha) && (lo..=hi).contains(&beta) && (lo..=hi).contains(&gamma)
}

/// Whether `p` lies inside the convex polygon `vertices`, given in
/// counter-clockwise order. Every edge must keep `p` on its left side.
pub fn point_in_convex_polygon(p: &Point2<f64>, vertices: &[Point2<f64>]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        let edge = b - a;
        let to_p = p - a;
        let cross = edge.x * to_p.y - edge.y * to_p.x;
        // Scale the slack by edge length so the tolerance stays a distance.
        if cross < -CONTAINMENT_TOL * edge.norm() {
            return false;
        }
    }
    true
}

/// Project a 3d point onto the ground plane (z = 0), keeping x and y.
pub fn ground_projection(p: &Point3) -> Point2<f64> {
    Point2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn body_transform_translates_points() {
        let t = body_transform(0.0, 0.0, 0.0, Vector3::new(1.0, 2.0, 3.0));
        let p = t.transform_point(&Point3::origin());
        assert_relative_eq!(p, Point3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn yaw_rotates_x_axis_toward_y() {
        let t = body_transform(0.0, 0.0, 90.0, Vector3::zeros());
        let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn transform_composes_and_inverts() {
        let a = body_transform(10.0, 20.0, 30.0, Vector3::new(1.0, 0.0, 0.0));
        let b = body_transform(0.0, 0.0, 45.0, Vector3::new(0.0, 2.0, 0.0));
        let p = Point3::new(0.5, -0.25, 1.0);

        let via_composition = (a * b).transform_point(&p);
        let via_chain = a.transform_point(&b.transform_point(&p));
        assert_relative_eq!(via_composition, via_chain, epsilon = 1e-12);

        let back = (a * b).inverse().transform_point(&via_composition);
        assert_relative_eq!(back, p, epsilon = 1e-12);
    }

    #[test]
    fn rot_z_quarter_turn() {
        let t = rot_z_deg(90.0);
        let p = t.transform_point(&Point3::new(2.0, 0.0, 5.0));
        assert_relative_eq!(p, Point3::new(0.0, 2.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn triangle_contains_centroid() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 0.0);
        let c = Point2::new(0.0, 3.0);
        assert!(point_in_triangle(&Point2::new(1.0, 1.0), &a, &b, &c));
        assert!(!point_in_triangle(&Point2::new(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn triangle_edge_point_counts_as_inside() {
        let a = Point2::new(-1.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 2.0);
        assert!(point_in_triangle(&Point2::new(0.0, 0.0), &a, &b, &c));
    }

    #[test]
    fn degenerate_triangle_contains_nothing() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(!point_in_triangle(&Point2::new(1.0, 1.0), &a, &b, &c));
    }

    #[test]
    fn convex_polygon_containment() {
        let square = [
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
        ];
        assert!(point_in_convex_polygon(&Point2::new(0.0, 0.0), &square));
        assert!(point_in_convex_polygon(&Point2::new(0.99, 0.99), &square));
        assert!(!point_in_convex_polygon(&Point2::new(1.5, 0.0), &square));
    }

    #[test]
    fn polygon_with_fewer_than_three_vertices_is_empty() {
        let segment = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(!point_in_convex_polygon(&Point2::new(0.5, 0.0), &segment));
    }
}
