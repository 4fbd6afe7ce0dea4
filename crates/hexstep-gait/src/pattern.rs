//! Gait patterns: per-leg phase offsets plus a duty factor.
//!
//! A gait assigns each leg a phase offset in [0, 1). A leg's own phase is
//! the cycle phase plus its offset, wrapped; the leg is in stance while
//! that phase is below the duty factor (the stance fraction of the cycle)
//! and in swing for the remainder.

use hexstep_core::{ConfigError, LegId, NUM_LEGS};

/// Slack when wrapping a phase into [0, 1). Offsets built from thirds and
/// sixths do not sum exactly in floating point, so a leg phase that should
/// land on the cycle boundary can come out just shy of 1.0; anything that
/// close wraps to 0.
const PHASE_TOL: f64 = 1e-9;

/// Lift order for the staggered (ripple and wave) gaits: back to front,
/// alternating sides.
const SWING_ORDER: [LegId; NUM_LEGS] = [
    LegId::LeftBack,
    LegId::RightFront,
    LegId::LeftMiddle,
    LegId::RightBack,
    LegId::LeftFront,
    LegId::RightMiddle,
];

/// An ordered grouping of the six legs into lift phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitPattern {
    offsets: [f64; NUM_LEGS],
    duty_factor: f64,
}

impl GaitPattern {
    /// Tripod gait: two alternating trios, half the cycle each. The trio
    /// of right middle, left front, and left back lifts first.
    pub fn tripod() -> Self {
        let mut offsets = [0.0; NUM_LEGS];
        for leg in [LegId::RightMiddle, LegId::LeftFront, LegId::LeftBack] {
            offsets[leg.index()] = 0.5;
        }
        Self {
            offsets,
            duty_factor: 0.5,
        }
    }

    /// Ripple gait: staggered single-leg lifts with overlapping swings,
    /// four feet down at any time.
    pub fn ripple() -> Self {
        Self::staggered(2.0 / 3.0)
    }

    /// Wave gait: one leg in swing at a time, five feet always down.
    pub fn wave() -> Self {
        Self::staggered(5.0 / 6.0)
    }

    /// Custom pattern. Offsets must lie in [0, 1) and the duty factor
    /// strictly between 0 and 1.
    pub fn custom(offsets: [f64; NUM_LEGS], duty_factor: f64) -> Result<Self, ConfigError> {
        if !(duty_factor > 0.0 && duty_factor < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "duty_factor".into(),
                message: format!("must be strictly between 0 and 1, got {duty_factor}"),
            });
        }
        for (i, offset) in offsets.iter().enumerate() {
            if !(0.0..1.0).contains(offset) {
                return Err(ConfigError::InvalidValue {
                    field: format!("offsets[{i}]"),
                    message: format!("must lie in [0, 1), got {offset}"),
                });
            }
        }
        Ok(Self {
            offsets,
            duty_factor,
        })
    }

    /// Evenly staggered offsets so leg k of [`SWING_ORDER`] begins its
    /// swing at cycle phase k/6.
    fn staggered(duty_factor: f64) -> Self {
        let mut offsets = [0.0; NUM_LEGS];
        for (slot, leg) in SWING_ORDER.iter().enumerate() {
            offsets[leg.index()] = (duty_factor - slot as f64 / 6.0).rem_euclid(1.0);
        }
        Self {
            offsets,
            duty_factor,
        }
    }

    pub const fn duty_factor(&self) -> f64 {
        self.duty_factor
    }

    pub const fn offsets(&self) -> &[f64; NUM_LEGS] {
        &self.offsets
    }

    /// Fraction of the cycle one step (one swing window) covers.
    pub fn step_span(&self) -> f64 {
        1.0 - self.duty_factor
    }

    /// This leg's own phase at the given cycle phase, wrapped into [0, 1).
    /// A result within [`PHASE_TOL`] of 1.0 is rounding noise on the cycle
    /// boundary and wraps to 0, so a swing that ends exactly there reads
    /// as landed.
    fn leg_phase(&self, leg: LegId, phase: f64) -> f64 {
        let wrapped = (phase + self.offsets[leg.index()]).rem_euclid(1.0);
        if wrapped >= 1.0 - PHASE_TOL {
            0.0
        } else {
            wrapped
        }
    }

    /// Whether the leg is grounded at the given cycle phase.
    pub fn is_stance(&self, leg: LegId, phase: f64) -> bool {
        self.leg_phase(leg, phase) < self.duty_factor
    }

    /// Progress through the swing window at the given cycle phase, in
    /// [0, 1]. Meaningful only for a leg currently in swing; clamped so a
    /// leg sampled just past its window reads as touched down.
    pub fn swing_progress(&self, leg: LegId, phase: f64) -> f64 {
        let into_swing = (self.leg_phase(leg, phase) - self.duty_factor).rem_euclid(1.0);
        (into_swing / (1.0 - self.duty_factor)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tripod_trios_alternate() {
        let gait = GaitPattern::tripod();
        // First half-cycle: trio A (RM, LF, LB) swings.
        for phase in [0.1, 0.25, 0.4] {
            assert!(!gait.is_stance(LegId::RightMiddle, phase));
            assert!(!gait.is_stance(LegId::LeftFront, phase));
            assert!(!gait.is_stance(LegId::LeftBack, phase));
            assert!(gait.is_stance(LegId::RightFront, phase));
            assert!(gait.is_stance(LegId::LeftMiddle, phase));
            assert!(gait.is_stance(LegId::RightBack, phase));
        }
        // Second half-cycle: roles swap.
        for phase in [0.6, 0.75, 0.9] {
            assert!(gait.is_stance(LegId::RightMiddle, phase));
            assert!(!gait.is_stance(LegId::RightFront, phase));
        }
    }

    #[test]
    fn tripod_always_three_grounded() {
        let gait = GaitPattern::tripod();
        for k in 0..100 {
            let phase = k as f64 / 100.0;
            let grounded = LegId::ALL
                .iter()
                .filter(|leg| gait.is_stance(**leg, phase))
                .count();
            assert_eq!(grounded, 3, "phase {phase}");
        }
    }

    #[test]
    fn wave_lifts_one_leg_at_a_time() {
        let gait = GaitPattern::wave();
        for k in 0..600 {
            let phase = k as f64 / 600.0;
            let swinging = LegId::ALL
                .iter()
                .filter(|leg| !gait.is_stance(**leg, phase))
                .count();
            assert!(swinging <= 1, "phase {phase}: {swinging} legs in swing");
        }
    }

    #[test]
    fn ripple_keeps_at_least_four_grounded() {
        let gait = GaitPattern::ripple();
        for k in 0..600 {
            let phase = k as f64 / 600.0;
            let grounded = LegId::ALL
                .iter()
                .filter(|leg| gait.is_stance(**leg, phase))
                .count();
            assert!(grounded >= 4, "phase {phase}: only {grounded} grounded");
        }
    }

    #[test]
    fn swing_progress_spans_the_window() {
        let gait = GaitPattern::tripod();
        // Trio A swings over phases [0, 0.5).
        assert_relative_eq!(gait.swing_progress(LegId::RightMiddle, 0.0), 0.0);
        assert_relative_eq!(gait.swing_progress(LegId::RightMiddle, 0.25), 0.5);
        assert_relative_eq!(gait.swing_progress(LegId::RightMiddle, 0.5), 1.0);
    }

    #[test]
    fn every_leg_swings_once_per_cycle() {
        for gait in [GaitPattern::tripod(), GaitPattern::ripple(), GaitPattern::wave()] {
            for leg in LegId::ALL {
                let swung = (0..1000)
                    .map(|k| k as f64 / 1000.0)
                    .filter(|phase| !gait.is_stance(leg, *phase))
                    .count() as f64
                    / 1000.0;
                assert_relative_eq!(swung, gait.step_span(), epsilon = 5e-3);
            }
        }
    }

    #[test]
    fn window_end_rounding_does_not_leak_into_swing() {
        let gait = GaitPattern::ripple();
        // RightMiddle's swing window wraps around the cycle and ends at
        // exactly phase 1/6; LeftFront's ends at the cycle boundary. Both
        // offsets carry float residue, so naive wrapping would leave the
        // leg phases at 0.999... and both legs stuck in swing.
        assert!(gait.is_stance(LegId::RightMiddle, 1.0 / 6.0));
        assert!(gait.is_stance(LegId::LeftFront, 0.0));
        assert_relative_eq!(gait.swing_progress(LegId::RightMiddle, 1.0 / 6.0), 1.0);
        assert_relative_eq!(gait.swing_progress(LegId::LeftFront, 0.0), 1.0);
    }

    #[test]
    fn custom_rejects_degenerate_duty() {
        assert!(GaitPattern::custom([0.0; NUM_LEGS], 0.0).is_err());
        assert!(GaitPattern::custom([0.0; NUM_LEGS], 1.0).is_err());
        assert!(GaitPattern::custom([0.0; NUM_LEGS], 0.5).is_ok());
    }

    #[test]
    fn custom_rejects_out_of_range_offset() {
        let mut offsets = [0.0; NUM_LEGS];
        offsets[2] = 1.5;
        let err = GaitPattern::custom(offsets, 0.5).unwrap_err();
        assert!(err.to_string().contains("offsets[2]"));
    }
}
