//! Leg identifiers and joint names.
//!
//! The six legs are numbered counter-clockwise starting from the right
//! middle leg, which points along the body x-axis:
//!
//! ```text
//!       x2          x1
//!        \   head  /
//!         *---*---*
//!        /    |    \
//!       /     |     \
//! x3 --*-----cog-----*-- x0     ^ body y
//!       \     |     /           |
//!        \    |    /            *--> body x
//!         *---*---*
//!        /         \
//!      x4           x5
//! ```
//!
//! Each leg's local x-axis makes a fixed angle with the body x-axis
//! (0, 45, 135, 180, 225, 315 degrees for legs 0 through 5).

use serde::{Deserialize, Serialize};

/// A hexapod always has exactly six legs.
pub const NUM_LEGS: usize = 6;

/// Canonical leg positions, counter-clockwise from the right middle leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegId {
    RightMiddle,
    RightFront,
    LeftFront,
    LeftMiddle,
    LeftBack,
    RightBack,
}

impl LegId {
    /// All legs in canonical (counter-clockwise) order.
    pub const ALL: [Self; NUM_LEGS] = [
        Self::RightMiddle,
        Self::RightFront,
        Self::LeftFront,
        Self::LeftMiddle,
        Self::LeftBack,
        Self::RightBack,
    ];

    /// Index into per-leg arrays, 0 through 5.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Angle between this leg's local x-axis and the body x-axis, in degrees.
    pub const fn axis_angle_deg(self) -> f64 {
        match self {
            Self::RightMiddle => 0.0,
            Self::RightFront => 45.0,
            Self::LeftFront => 135.0,
            Self::LeftMiddle => 180.0,
            Self::LeftBack => 225.0,
            Self::RightBack => 315.0,
        }
    }

    /// Whether the leg attaches on the left side of the body.
    pub const fn is_left(self) -> bool {
        matches!(self, Self::LeftFront | Self::LeftMiddle | Self::LeftBack)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RightMiddle => "rightMiddle",
            Self::RightFront => "rightFront",
            Self::LeftFront => "leftFront",
            Self::LeftMiddle => "leftMiddle",
            Self::LeftBack => "leftBack",
            Self::RightBack => "rightBack",
        }
    }
}

impl std::fmt::Display for LegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The three joints of one leg, proximal to distal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    Coxa,
    Femur,
    Tibia,
}

impl Joint {
    pub const ALL: [Self; 3] = [Self::Coxa, Self::Femur, Self::Tibia];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Coxa => "coxa",
            Self::Femur => "femur",
            Self::Tibia => "tibia",
        }
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_indices_match_canonical_order() {
        for (i, leg) in LegId::ALL.iter().enumerate() {
            assert_eq!(leg.index(), i);
        }
    }

    #[test]
    fn axis_angles_step_counter_clockwise() {
        assert_eq!(LegId::RightMiddle.axis_angle_deg(), 0.0);
        assert_eq!(LegId::RightFront.axis_angle_deg(), 45.0);
        assert_eq!(LegId::LeftFront.axis_angle_deg(), 135.0);
        assert_eq!(LegId::LeftMiddle.axis_angle_deg(), 180.0);
        assert_eq!(LegId::LeftBack.axis_angle_deg(), 225.0);
        assert_eq!(LegId::RightBack.axis_angle_deg(), 315.0);
    }

    #[test]
    fn left_right_split() {
        let left: Vec<_> = LegId::ALL.iter().filter(|l| l.is_left()).collect();
        assert_eq!(left.len(), 3);
        assert!(!LegId::RightMiddle.is_left());
        assert!(LegId::LeftBack.is_left());
    }

    #[test]
    fn display_names() {
        assert_eq!(LegId::RightMiddle.to_string(), "rightMiddle");
        assert_eq!(Joint::Femur.to_string(), "femur");
    }
}
