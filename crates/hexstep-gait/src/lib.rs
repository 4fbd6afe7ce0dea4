//! Walk-sequence generation for the virtual hexapod.
//!
//! # Architecture
//!
//! ```text
//! GaitPattern ──► phase schedule (swing/stance per leg)
//! swing       ──► foot lift trajectory between lift-off and touch-down
//! sequence    ──► frame-by-frame body/foot targets ──► VirtualHexapod::build
//! ```
//!
//! The generator is a small state machine over gait phase. Every frame is
//! resolved through full inverse kinematics and checked for static
//! stability before it is appended, so a returned [`WalkSequence`] is
//! replayable as-is; rejected frames shrink the step under a bounded retry
//! budget and surface as [`GaitInfeasible`] when the budget runs out.

pub mod pattern;
pub mod sequence;
pub mod swing;

pub use pattern::GaitPattern;
pub use sequence::{
    generate_walk, FrameRejection, GaitError, GaitInfeasible, GaitParams, TravelCommand, WalkFrame,
    WalkSequence,
};
pub use swing::swing_foot_position;
