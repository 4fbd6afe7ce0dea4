//! Robot dimension configuration.
//!
//! These structs are the loader boundary: an external preset loader
//! deserializes them (serde), the core only validates. Validation happens
//! once at setup — degenerate dimensions are configuration errors here,
//! never per-frame kinematics failures.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::leg::{Joint, NUM_LEGS};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_coxa_range() -> AngleRange {
    AngleRange {
        min_deg: -90.0,
        max_deg: 90.0,
    }
}
const fn default_femur_range() -> AngleRange {
    AngleRange {
        min_deg: -180.0,
        max_deg: 180.0,
    }
}
const fn default_tibia_range() -> AngleRange {
    AngleRange {
        min_deg: -180.0,
        max_deg: 180.0,
    }
}

// ---------------------------------------------------------------------------
// AngleRange
// ---------------------------------------------------------------------------

/// Allowed range for one joint angle, in degrees, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min_deg: f64,
    pub max_deg: f64,
}

impl AngleRange {
    pub const fn new(min_deg: f64, max_deg: f64) -> Self {
        Self { min_deg, max_deg }
    }

    pub fn contains(&self, angle_deg: f64) -> bool {
        angle_deg >= self.min_deg && angle_deg <= self.max_deg
    }
}

// ---------------------------------------------------------------------------
// LegDimensions
// ---------------------------------------------------------------------------

/// Fixed geometry of one leg: the three segment lengths plus per-joint
/// angle limits. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegDimensions {
    /// Length of the coxa segment (body contact to coxa joint).
    pub coxa: f64,
    /// Length of the femur segment (coxa joint to femur joint).
    pub femur: f64,
    /// Length of the tibia segment (femur joint to foot tip).
    pub tibia: f64,

    #[serde(default = "default_coxa_range")]
    pub coxa_range: AngleRange,
    #[serde(default = "default_femur_range")]
    pub femur_range: AngleRange,
    #[serde(default = "default_tibia_range")]
    pub tibia_range: AngleRange,
}

impl LegDimensions {
    /// Leg dimensions with the default joint limits.
    pub const fn new(coxa: f64, femur: f64, tibia: f64) -> Self {
        Self {
            coxa,
            femur,
            tibia,
            coxa_range: default_coxa_range(),
            femur_range: default_femur_range(),
            tibia_range: default_tibia_range(),
        }
    }

    /// Validate segment lengths and angle ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (joint, length) in [
            (Joint::Coxa, self.coxa),
            (Joint::Femur, self.femur),
            (Joint::Tibia, self.tibia),
        ] {
            if !(length > 0.0) {
                return Err(ConfigError::NonPositiveSegment {
                    joint,
                    length,
                });
            }
        }
        for (joint, range) in [
            (Joint::Coxa, self.coxa_range),
            (Joint::Femur, self.femur_range),
            (Joint::Tibia, self.tibia_range),
        ] {
            if !(range.min_deg < range.max_deg) {
                return Err(ConfigError::InvalidAngleRange {
                    joint,
                    min_deg: range.min_deg,
                    max_deg: range.max_deg,
                });
            }
        }
        Ok(())
    }

    /// Angle range for the named joint.
    pub fn range(&self, joint: Joint) -> AngleRange {
        match joint {
            Joint::Coxa => self.coxa_range,
            Joint::Femur => self.femur_range,
            Joint::Tibia => self.tibia_range,
        }
    }

    /// Longest planar distance the femur-tibia pair can span.
    pub fn max_reach(&self) -> f64 {
        self.femur + self.tibia
    }

    /// Shortest planar distance the femur-tibia pair can span.
    pub fn min_reach(&self) -> f64 {
        (self.femur - self.tibia).abs()
    }
}

// ---------------------------------------------------------------------------
// BodyDimensions
// ---------------------------------------------------------------------------

/// Hexagonal body geometry. Leg attachment vertices follow the pattern
/// `x = [middle, front, -front, -middle, -front, front]`,
/// `y = [0, side, side, 0, -side, -side]` in canonical leg order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDimensions {
    /// X offset of the front (and back) attachment vertices.
    pub front: f64,
    /// X offset of the middle attachment vertices.
    pub middle: f64,
    /// Y offset of the front and back attachment vertices.
    pub side: f64,
}

impl BodyDimensions {
    pub const fn new(front: f64, middle: f64, side: f64) -> Self {
        Self {
            front,
            middle,
            side,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("front", self.front),
            ("middle", self.middle),
            ("side", self.side),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveBodyOffset { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// HexapodConfig
// ---------------------------------------------------------------------------

/// Full robot configuration: body geometry plus one dimension set per leg,
/// in canonical leg order. Owned by the `VirtualHexapod` built from it and
/// shared read-only with every per-leg computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexapodConfig {
    pub body: BodyDimensions,
    pub legs: [LegDimensions; NUM_LEGS],
}

impl HexapodConfig {
    /// Configuration where all six legs share the same dimensions.
    pub const fn uniform(body: BodyDimensions, leg: LegDimensions) -> Self {
        Self {
            body,
            legs: [leg; NUM_LEGS],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.body.validate()?;
        for leg in &self.legs {
            leg.validate()?;
        }
        Ok(())
    }
}
