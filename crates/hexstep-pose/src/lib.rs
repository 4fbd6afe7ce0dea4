//! Virtual hexapod pose model.
//!
//! Composes six leg linkages with a hexagonal body frame:
//!
//! ```text
//! HexapodConfig + Transform + foot targets ──► build ──► VirtualHexapod
//! HexapodConfig + Transform + joint angles ──► from_joint_angles ──► VirtualHexapod
//! VirtualHexapod ──► project ──► world-space joint and foot coordinates
//! ```
//!
//! `build` runs inverse kinematics per leg and reports every failing leg;
//! `project` is a pure derivation and never mutates stored state.

pub mod error;
pub mod hexagon;
pub mod hexapod;

pub use error::{LegFailure, PoseError};
pub use hexagon::Hexagon;
pub use hexapod::{attachment_frame, HexapodProjection, VirtualHexapod};
