//! Single-leg linkage model for a three-segment (coxa, femur, tibia) leg.
//!
//! # Architecture
//!
//! ```text
//! JointAngles ──► forward_kinematics ──► LegPose (chain points)
//! Point3      ──► inverse_kinematics ──► JointAngles | KinematicsError
//! ```
//!
//! Both directions operate in the leg's attachment-local frame: the origin
//! is the body contact point, the x-axis points along the leg's neutral
//! direction, and z points up. Composing attachment frames into a full
//! body is the job of `hexstep-pose`.

pub mod linkage;
pub mod solver;

pub use linkage::{forward_kinematics, JointAngles, LegPose};
pub use solver::{inverse_kinematics, Elbow, ELBOW_BRANCH};
