//! Arm Visualizer Kinematics Core
//!
//! This crate contains the kinematics core for the robotic-arm visualizer:
//! - DhParameters: Denavit-Hartenberg description of one link
//! - KinematicChain: ordered joints with forward kinematics
//! - IkSolver: damped least-squares inverse kinematics
//! - ArmDescription: serializable arm definition (RON)
//! - TargetMailbox: latest-value-wins joint-target handoff
//!
//! Angles are radians and translations are meters throughout; descriptions
//! may use degrees and convert at build time. Mesh loading and rendering
//! live in separate crates that consume the frames this crate produces.

pub mod chain;
pub mod describe;
pub mod dh;
pub mod ik;
pub mod mailbox;
pub mod presets;
pub mod types;

pub use chain::*;
pub use describe::*;
pub use dh::*;
pub use ik::*;
pub use mailbox::*;
pub use types::*;
