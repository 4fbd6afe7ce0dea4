//! Analytic inverse kinematics for one leg.
//!
//! The coxa angle falls out of the horizontal projection of the target;
//! femur and tibia come from the law of cosines on the planar two-link
//! subproblem between the femur joint and the target:
//!
//! ```text
//! p0   p1
//!  *---*            d     = planar distance from p1 to target
//!   \   \           theta = interior angle at p1, opposite the tibia
//!    \   * p2       phi   = elevation of the target seen from p1
//!     \  |          eps   = interior angle at the knee, opposite d
//!      \ |
//!       * p3 (target)
//! ```
//!
//! Targets outside `[|femur - tibia|, femur + tibia]` are a normal,
//! expected `Unreachable` outcome — gait search probes infeasible points
//! all the time — not a program fault.

use hexstep_core::{KinematicsError, LegDimensions};
use hexstep_core::geometry::Point3;
use hexstep_core::leg::Joint;

use crate::linkage::JointAngles;

/// The two mirror solutions of the planar two-link subproblem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elbow {
    /// Knee above the line from the femur joint to the target.
    Up,
    /// Knee below that line.
    Down,
}

/// Fixed solution branch. The solver always bends the knee upward,
/// matching the natural bend of the physical leg; the mirror branch exists
/// only so the choice is explicit rather than an incidental sign.
pub const ELBOW_BRANCH: Elbow = Elbow::Up;

/// Slack on the reachability boundary so a target at exactly full
/// extension still solves.
const REACH_EPS: f64 = 1e-9;

/// Solve for the joint angles that place the foot tip at `target`
/// (attachment-local coordinates).
pub fn inverse_kinematics(
    dims: &LegDimensions,
    target: &Point3,
) -> Result<JointAngles, KinematicsError> {
    let alpha = target.y.atan2(target.x).to_degrees();

    // Planar subproblem in the vertical plane through the coxa axis.
    let horizontal = target.x.hypot(target.y);
    let r = horizontal - dims.coxa;
    let z = target.z;
    let distance = r.hypot(z);

    let min_reach = dims.min_reach();
    let max_reach = dims.max_reach();
    if !(distance >= min_reach - REACH_EPS && distance <= max_reach + REACH_EPS)
        || distance < REACH_EPS
    {
        return Err(KinematicsError::Unreachable {
            distance,
            min_reach,
            max_reach,
        });
    }

    let femur = dims.femur;
    let tibia = dims.tibia;

    // Law of cosines; clamp guards boundary targets against rounding.
    let cos_theta = ((femur * femur + distance * distance - tibia * tibia)
        / (2.0 * femur * distance))
        .clamp(-1.0, 1.0);
    let theta = cos_theta.acos().to_degrees();
    let phi = z.atan2(r).to_degrees();

    let cos_eps =
        ((femur * femur + tibia * tibia - distance * distance) / (2.0 * femur * tibia)).clamp(-1.0, 1.0);
    let eps = cos_eps.acos().to_degrees();

    let (beta, gamma) = match ELBOW_BRANCH {
        Elbow::Up => (theta + phi, eps - 90.0),
        Elbow::Down => (phi - theta, 270.0 - eps),
    };

    let angles = JointAngles::new(alpha, beta, gamma);
    for (joint, angle_deg) in [
        (Joint::Coxa, angles.alpha),
        (Joint::Femur, angles.beta),
        (Joint::Tibia, angles.gamma),
    ] {
        let range = dims.range(joint);
        if !range.contains(angle_deg) {
            return Err(KinematicsError::JointLimitExceeded {
                joint,
                angle_deg,
                min_deg: range.min_deg,
                max_deg: range.max_deg,
            });
        }
    }

    Ok(angles)
}
