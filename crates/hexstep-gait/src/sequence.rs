//! Frame-by-frame walk-sequence generation.
//!
//! Each frame advances the body along the travel command by one slice of a
//! step, holds the grounded feet in place, flies the swinging feet along
//! their lift trajectories, resolves the whole pose through inverse
//! kinematics, and checks that the grounded feet statically support the
//! body. A frame that fails to resolve or support is retried with a
//! shrunken stride; when the retry budget runs out the walk is reported
//! infeasible together with the frames resolved so far.

use thiserror::Error;
use tracing::{debug, warn};

use hexstep_core::geometry::{body_transform, rot_z_deg, Point3, Vector3};
use hexstep_core::{ConfigError, HexapodConfig, LegId, NUM_LEGS};
use hexstep_pose::{attachment_frame, PoseError, VirtualHexapod};

use crate::pattern::GaitPattern;
use crate::swing::swing_foot_position;

/// How far beyond the end-of-step body pose a touch-down target leads, in
/// steps. Half a step centers the foot's stroke on its neutral point.
const TOUCHDOWN_LEAD_STEPS: f64 = 0.5;

/// Stride multiplier applied on each infeasible-frame retry.
const RETRY_SHRINK: f64 = 0.5;

/// Nominal body displacement per step, expressed in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TravelCommand {
    /// Displacement toward the head (+y of the body frame).
    pub forward: f64,
    /// Displacement to the robot's right (+x of the body frame).
    pub sideways: f64,
    /// Counter-clockwise yaw change, in degrees.
    pub turn_deg: f64,
}

impl TravelCommand {
    /// Walk straight ahead by `distance` per step.
    pub const fn forward(distance: f64) -> Self {
        Self {
            forward: distance,
            sideways: 0.0,
            turn_deg: 0.0,
        }
    }

    /// Crab-walk to the right by `distance` per step.
    pub const fn sideways(distance: f64) -> Self {
        Self {
            forward: 0.0,
            sideways: distance,
            turn_deg: 0.0,
        }
    }

    /// Turn in place by `degrees` per step, counter-clockwise positive.
    pub const fn turn(degrees: f64) -> Self {
        Self {
            forward: 0.0,
            sideways: 0.0,
            turn_deg: degrees,
        }
    }
}

/// Tunable parameters of the walk generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GaitParams {
    pub pattern: GaitPattern,
    /// Height of the body origin above the ground plane.
    pub body_height: f64,
    /// Peak foot clearance above the lift-off/touch-down chord.
    pub step_height: f64,
    /// Snapshots emitted per step. One frame per step keeps the sequence
    /// in lockstep with the step count; more frames sample the swing arcs.
    pub frames_per_step: usize,
    /// Stride-shrink retries allowed per frame before the walk is declared
    /// infeasible.
    pub max_retries: usize,
}

impl Default for GaitParams {
    fn default() -> Self {
        Self {
            pattern: GaitPattern::tripod(),
            body_height: 100.0,
            step_height: 30.0,
            frames_per_step: 1,
            max_retries: 3,
        }
    }
}

impl GaitParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.body_height > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "body_height".into(),
                message: format!("must be > 0, got {}", self.body_height),
            });
        }
        if !(self.step_height >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "step_height".into(),
                message: format!("must be >= 0, got {}", self.step_height),
            });
        }
        if self.frames_per_step == 0 {
            return Err(ConfigError::InvalidValue {
                field: "frames_per_step".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// One resolved snapshot of the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkFrame {
    /// Fully solved pose at the end of the frame.
    pub hexapod: VirtualHexapod,
    /// Gait-cycle phase at the end of the frame, wrapped into [0, 1).
    pub phase: f64,
    /// Which legs were airborne during the frame, canonical leg order.
    pub swing: [bool; NUM_LEGS],
}

impl WalkFrame {
    /// Grounded-leg mask, the complement of [`WalkFrame::swing`].
    pub fn grounded(&self) -> [bool; NUM_LEGS] {
        let mut grounded = [false; NUM_LEGS];
        for i in 0..NUM_LEGS {
            grounded[i] = !self.swing[i];
        }
        grounded
    }
}

/// A replayable walk: the starting stance plus one frame per slice.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkSequence {
    start: VirtualHexapod,
    frames: Vec<WalkFrame>,
}

impl WalkSequence {
    /// Neutral stance the walk departs from.
    pub const fn start(&self) -> &VirtualHexapod {
        &self.start
    }

    pub fn frames(&self) -> &[WalkFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Why one frame was rejected.
#[derive(Debug, Error)]
pub enum FrameRejection {
    /// Inverse kinematics failed for at least one leg.
    #[error(transparent)]
    Pose(#[from] PoseError),

    /// The pose resolved, but the grounded feet do not contain the body's
    /// center of gravity.
    #[error("resolved pose is statically unstable (grounded legs: {grounded:?})")]
    Unstable { grounded: [bool; NUM_LEGS] },
}

/// A frame could not be accepted even at the smallest retry stride.
#[derive(Debug, Error)]
#[error("walk infeasible at step {step}, frame {frame}, after {retries} retries: {cause}")]
pub struct GaitInfeasible {
    pub step: usize,
    pub frame: usize,
    pub retries: usize,
    pub cause: FrameRejection,
    /// Frames resolved before the failure, replayable as a shorter walk.
    pub partial: WalkSequence,
}

/// Walk generation failures.
#[derive(Debug, Error)]
pub enum GaitError {
    #[error("Gait parameter error: {0}")]
    Params(#[from] ConfigError),

    /// The starting stance itself cannot be reached with this
    /// configuration and body height.
    #[error("Starting stance unreachable: {0}")]
    Setup(#[from] PoseError),

    #[error(transparent)]
    Infeasible(#[from] Box<GaitInfeasible>),
}

/// Generate a walk of `steps` steps under `command`.
///
/// The robot starts in the neutral stance: body level at
/// `params.body_height`, every foot straight out at coxa + femur and on
/// the ground. Each returned frame has passed full inverse kinematics and
/// the static stability check, so replaying the sequence never fails and
/// never tips the body.
pub fn generate_walk(
    config: &HexapodConfig,
    command: TravelCommand,
    params: &GaitParams,
    steps: usize,
) -> Result<WalkSequence, GaitError> {
    params.validate()?;
    let generator = Generator::new(config.clone(), command, params.clone())?;
    generator.run(steps)
}

/// A leg's in-flight trajectory, fixed at lift-off.
struct SwingPlan {
    lift_off: Point3,
    touch_down: Point3,
}

struct Generator {
    config: HexapodConfig,
    command: TravelCommand,
    params: GaitParams,
    /// Body origin in world space.
    position: Vector3,
    yaw_deg: f64,
    /// Current world-space foot tips, canonical leg order.
    feet: [Point3; NUM_LEGS],
    plans: [Option<SwingPlan>; NUM_LEGS],
    start: VirtualHexapod,
}

impl Generator {
    fn new(
        config: HexapodConfig,
        command: TravelCommand,
        params: GaitParams,
    ) -> Result<Self, GaitError> {
        let position = Vector3::new(0.0, 0.0, params.body_height);
        let transform = body_transform(0.0, 0.0, 0.0, position);

        let mut feet = [Point3::origin(); NUM_LEGS];
        for leg in LegId::ALL {
            let i = leg.index();
            let frame = attachment_frame(&config.body, &transform, leg);
            feet[i] = frame.transform_point(&neutral_local(&config, leg, params.body_height));
        }

        let start = VirtualHexapod::build(config.clone(), transform, &feet)?;

        Ok(Self {
            config,
            command,
            params,
            position,
            yaw_deg: 0.0,
            feet,
            plans: [const { None }; NUM_LEGS],
            start,
        })
    }

    fn run(mut self, steps: usize) -> Result<WalkSequence, GaitError> {
        let mut frames = Vec::with_capacity(steps * self.params.frames_per_step);

        for step in 0..steps {
            for frame_idx in 0..self.params.frames_per_step {
                match self.resolve_frame(step, frame_idx) {
                    Ok(frame) => frames.push(frame),
                    Err(cause) => {
                        warn!(step, frame = frame_idx, "walk generation aborted: {cause}");
                        return Err(GaitError::Infeasible(Box::new(GaitInfeasible {
                            step,
                            frame: frame_idx,
                            retries: self.params.max_retries,
                            cause,
                            partial: WalkSequence {
                                start: self.start,
                                frames,
                            },
                        })));
                    }
                }
            }
        }

        Ok(WalkSequence {
            start: self.start,
            frames,
        })
    }

    /// Resolve one frame, shrinking the stride on failure until the retry
    /// budget runs out. A frame is accepted only when every leg solves and
    /// the grounded feet statically support the body.
    fn resolve_frame(
        &mut self,
        step: usize,
        frame_idx: usize,
    ) -> Result<WalkFrame, FrameRejection> {
        let pattern = self.params.pattern;
        let slices = self.params.frames_per_step as f64;
        let dphase = pattern.step_span() / slices;
        let phase_start = (step * self.params.frames_per_step + frame_idx) as f64 * dphase;
        let phase_mid = phase_start + dphase / 2.0;
        let phase_end = phase_start + dphase;

        // A leg is airborne this frame if its swing window covers the
        // frame's midpoint, or if an earlier frame's swing has not landed
        // yet (windows need not align with frame boundaries).
        let mut swing = [false; NUM_LEGS];
        for leg in LegId::ALL {
            let i = leg.index();
            if self.plans[i].is_some() {
                swing[i] = true;
            } else if !pattern.is_stance(leg, phase_mid) {
                let touch_down = self.touchdown_target(leg);
                self.plans[i] = Some(SwingPlan {
                    lift_off: self.feet[i],
                    touch_down,
                });
                swing[i] = true;
            }
        }

        let world_step = rot_z_deg(self.yaw_deg).transform_vector(&Vector3::new(
            self.command.sideways,
            self.command.forward,
            0.0,
        ));
        let frame_delta = world_step / slices;
        let yaw_delta = self.command.turn_deg / slices;

        let mut scale = 1.0;
        let mut attempt = 0usize;
        loop {
            let position = self.position + frame_delta * scale;
            let yaw_deg = self.yaw_deg + yaw_delta * scale;
            let transform = body_transform(0.0, 0.0, yaw_deg, position);

            let mut targets = self.feet;
            for leg in LegId::ALL {
                let i = leg.index();
                if let Some(plan) = &self.plans[i] {
                    let t = pattern.swing_progress(leg, phase_end);
                    let nominal =
                        swing_foot_position(&plan.lift_off, &plan.touch_down, self.params.step_height, t);
                    // Retries shrink only the horizontal stroke; the lift
                    // profile stays as commanded.
                    targets[i] = Point3::new(
                        self.feet[i].x + (nominal.x - self.feet[i].x) * scale,
                        self.feet[i].y + (nominal.y - self.feet[i].y) * scale,
                        nominal.z,
                    );
                }
            }

            match VirtualHexapod::build(self.config.clone(), transform, &targets) {
                Ok(hexapod) => {
                    let mut grounded = [false; NUM_LEGS];
                    for i in 0..NUM_LEGS {
                        grounded[i] = !swing[i];
                    }
                    if !hexapod.is_statically_stable(&grounded) {
                        if attempt >= self.params.max_retries {
                            return Err(FrameRejection::Unstable { grounded });
                        }
                        attempt += 1;
                        scale *= RETRY_SHRINK;
                        warn!(
                            step,
                            frame = frame_idx,
                            attempt,
                            scale,
                            "frame statically unstable, shrinking stride"
                        );
                        continue;
                    }

                    self.position = position;
                    self.yaw_deg = yaw_deg;
                    self.feet = targets;
                    for leg in LegId::ALL {
                        let i = leg.index();
                        if self.plans[i].is_some() && pattern.swing_progress(leg, phase_end) >= 1.0 {
                            self.plans[i] = None;
                        }
                    }
                    debug!(step, frame = frame_idx, scale, "resolved walk frame");
                    return Ok(WalkFrame {
                        hexapod,
                        phase: phase_end.rem_euclid(1.0),
                        swing,
                    });
                }
                Err(cause) => {
                    if attempt >= self.params.max_retries {
                        return Err(FrameRejection::Pose(cause));
                    }
                    attempt += 1;
                    scale *= RETRY_SHRINK;
                    warn!(
                        step,
                        frame = frame_idx,
                        attempt,
                        scale,
                        "frame infeasible, shrinking stride: {cause}"
                    );
                }
            }
        }
    }

    /// Where a foot lifting off now should land: the leg's neutral point
    /// under the body pose led ahead of the end of the current step.
    fn touchdown_target(&self, leg: LegId) -> Point3 {
        let lead = 1.0 + TOUCHDOWN_LEAD_STEPS;
        let world_step = rot_z_deg(self.yaw_deg).transform_vector(&Vector3::new(
            self.command.sideways,
            self.command.forward,
            0.0,
        ));
        let position = self.position + world_step * lead;
        let yaw_deg = self.yaw_deg + self.command.turn_deg * lead;
        let ahead = body_transform(0.0, 0.0, yaw_deg, position);
        attachment_frame(&self.config.body, &ahead, leg)
            .transform_point(&neutral_local(&self.config, leg, self.params.body_height))
    }
}

/// Neutral foot position in the attachment frame: straight out at
/// coxa + femur, on the ground for a level body at `body_height`.
fn neutral_local(config: &HexapodConfig, leg: LegId, body_height: f64) -> Point3 {
    let dims = &config.legs[leg.index()];
    Point3::new(dims.coxa + dims.femur, 0.0, -body_height)
}
