//! Geometry primitives, leg identifiers, configuration, and errors shared
//! by the hexstep hexapod kinematics crates.

pub mod config;
pub mod error;
pub mod geometry;
pub mod leg;

pub use config::{AngleRange, BodyDimensions, HexapodConfig, LegDimensions};
pub use error::{ConfigError, HexstepError, KinematicsError};
pub use geometry::{body_transform, rot_z_deg, Point3, Transform, Vector3};
pub use leg::{Joint, LegId, NUM_LEGS};
