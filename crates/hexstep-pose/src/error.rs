//! Errors for whole-body pose resolution.

use thiserror::Error;

use hexstep_core::{ConfigError, KinematicsError, LegId};

/// One leg's inverse-kinematics failure, attributable to the leg at fault.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegFailure {
    pub leg: LegId,
    pub error: KinematicsError,
}

impl std::fmt::Display for LegFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.leg, self.error)
    }
}

/// Why a `VirtualHexapod` could not be built.
#[derive(Debug, Clone, Error)]
pub enum PoseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// At least one leg could not reach its target. Construction is
    /// all-or-nothing; every failing leg is listed so the caller can
    /// decide whether the pose is salvageable.
    #[error("pose unsolvable for {} of 6 legs: {}", failures.len(), list_failures(failures))]
    Legs { failures: Vec<LegFailure> },
}

impl PoseError {
    /// The legs that failed, empty for configuration errors.
    pub fn failed_legs(&self) -> Vec<LegId> {
        match self {
            Self::Config(_) => Vec::new(),
            Self::Legs { failures } => failures.iter().map(|f| f.leg).collect(),
        }
    }
}

fn list_failures(failures: &[LegFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexstep_core::leg::Joint;

    #[test]
    fn legs_variant_lists_every_failure() {
        let err = PoseError::Legs {
            failures: vec![
                LegFailure {
                    leg: LegId::RightFront,
                    error: KinematicsError::Unreachable {
                        distance: 40.0,
                        min_reach: 5.0,
                        max_reach: 25.0,
                    },
                },
                LegFailure {
                    leg: LegId::LeftBack,
                    error: KinematicsError::JointLimitExceeded {
                        joint: Joint::Coxa,
                        angle_deg: 120.0,
                        min_deg: -90.0,
                        max_deg: 90.0,
                    },
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("pose unsolvable for 2 of 6 legs"));
        assert!(msg.contains("rightFront"));
        assert!(msg.contains("leftBack"));
        assert_eq!(err.failed_legs(), vec![LegId::RightFront, LegId::LeftBack]);
    }

    #[test]
    fn config_variant_has_no_failed_legs() {
        let err = PoseError::Config(ConfigError::NonPositiveSegment {
            joint: Joint::Femur,
            length: 0.0,
        });
        assert!(err.failed_legs().is_empty());
        assert!(err.to_string().contains("femur"));
    }

    #[test]
    fn pose_error_clones_through_both_variants() {
        let config_err = PoseError::Config(ConfigError::NonPositiveSegment {
            joint: Joint::Femur,
            length: 0.0,
        });
        assert_eq!(config_err.clone().to_string(), config_err.to_string());

        let legs_err = PoseError::Legs {
            failures: vec![LegFailure {
                leg: LegId::LeftMiddle,
                error: KinematicsError::Unreachable {
                    distance: 40.0,
                    min_reach: 5.0,
                    max_reach: 25.0,
                },
            }],
        };
        assert_eq!(legs_err.clone().to_string(), legs_err.to_string());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn pose_error_is_send_sync() {
        assert_send_sync::<PoseError>();
    }
}
