use thiserror::Error;

use crate::leg::Joint;

/// Top-level error type for the hexstep stack.
#[derive(Debug, Error)]
pub enum HexstepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),
}

/// Setup-time configuration errors. Degenerate robot dimensions are caught
/// here, before any kinematics runs. `Clone` because these travel inside
/// cloneable pose and gait results.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{joint} segment length must be > 0, got {length}")]
    NonPositiveSegment { joint: Joint, length: f64 },

    #[error("{joint} angle range is empty: min {min_deg} >= max {max_deg}")]
    InvalidAngleRange {
        joint: Joint,
        min_deg: f64,
        max_deg: f64,
    },

    #[error("body {field} offset must be > 0, got {value}")]
    NonPositiveBodyOffset { field: &'static str, value: f64 },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Per-leg kinematics failures. These are expected outcomes — gait search
/// routinely asks legs for infeasible points — so they are `Copy` with
/// static payloads for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// The planar distance from the femur joint to the target lies outside
    /// what the femur-tibia pair can span.
    #[error(
        "target unreachable: planar distance {distance:.3} outside [{min_reach:.3}, {max_reach:.3}]"
    )]
    Unreachable {
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },

    /// The target is mathematically reachable, but a solved angle lies
    /// outside the joint's configured safe range.
    #[error("{joint} angle {angle_deg:.3} outside configured range [{min_deg}, {max_deg}]")]
    JointLimitExceeded {
        joint: Joint,
        angle_deg: f64,
        min_deg: f64,
        max_deg: f64,
    },
}
