//! Forward kinematics of one leg.
//!
//! ```text
//!    p0 *----* p1
//!             \        p0 = body contact point (origin)
//!              * p2    p1 = coxa joint
//!              |       p2 = femur joint (knee)
//!              * p3    p3 = foot tip
//! ```
//!
//! Angle conventions (degrees, counter-clockwise positive):
//! - `alpha` — coxa swing about the local z-axis.
//! - `beta`  — femur pitch above the local x-axis; at `beta = 0` the femur
//!   lies flat.
//! - `gamma` — tibia angle measured from the axis perpendicular to the
//!   femur; at `gamma = 0` the tibia hangs straight down from the knee.

use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use hexstep_core::geometry::{rot_z_deg, Point3, Transform, Vector3};
use hexstep_core::LegDimensions;

/// The three joint angles of one leg, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl JointAngles {
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// A resolved leg: its joint angles plus the four chain points they place,
/// in the attachment-local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegPose {
    angles: JointAngles,
    points: [Point3; 4],
}

impl LegPose {
    pub const fn angles(&self) -> JointAngles {
        self.angles
    }

    /// Chain points ordered body contact, coxa joint, femur joint, foot tip.
    pub const fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    pub const fn body_contact(&self) -> Point3 {
        self.points[0]
    }

    pub const fn coxa_joint(&self) -> Point3 {
        self.points[1]
    }

    pub const fn femur_joint(&self) -> Point3 {
        self.points[2]
    }

    pub const fn foot_tip(&self) -> Point3 {
        self.points[3]
    }
}

/// One link of the chain: pitch about y by `pitch_deg`, then step `length`
/// along the parent x-axis.
fn link_transform(pitch_deg: f64, length: f64) -> Transform {
    Isometry3::from_parts(
        Translation3::new(length, 0.0, 0.0),
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), pitch_deg.to_radians()),
    )
}

/// Place all four chain points for the given angles. Total — any angle
/// triple yields a pose.
pub fn forward_kinematics(dims: &LegDimensions, angles: JointAngles) -> LegPose {
    let twist = rot_z_deg(angles.alpha);

    // Pitch rotations compose down the chain; the tibia link carries the
    // remaining 90 - gamma so that gamma = 0 points it straight down.
    let to_coxa = link_transform(-angles.beta, dims.coxa);
    let to_femur = to_coxa * link_transform(90.0 - angles.gamma, dims.femur);
    let to_foot = to_femur * link_transform(0.0, dims.tibia);

    let origin = Point3::origin();
    let points = [
        origin,
        twist.transform_point(&to_coxa.transform_point(&origin)),
        twist.transform_point(&to_femur.transform_point(&origin)),
        twist.transform_point(&to_foot.transform_point(&origin)),
    ];

    LegPose { angles, points }
}
