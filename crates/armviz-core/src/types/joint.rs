//! Joint-related type definitions

use serde::{Deserialize, Serialize};

/// Joint type
///
/// Determines which DH coordinate the joint variable drives: revolute joints
/// vary theta, prismatic joints vary d.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JointType {
    #[default]
    Revolute,
    Prismatic,
}

impl JointType {
    /// Check if the joint variable is an angle (radians) rather than a displacement (meters)
    pub fn is_angular(&self) -> bool {
        matches!(self, JointType::Revolute)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            JointType::Revolute => "Revolute",
            JointType::Prismatic => "Prismatic",
        }
    }

    /// All joint types for UI
    pub fn all() -> &'static [JointType] {
        &[JointType::Revolute, JointType::Prismatic]
    }
}

/// Joint limits
///
/// Advisory metadata only: the kinematics never clamps a joint variable to
/// its limits. Enforcement is a caller-level policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointLimits {
    /// Lower position limit (rad or m)
    pub lower: f64,
    /// Upper position limit (rad or m)
    pub upper: f64,
}

impl Default for JointLimits {
    fn default() -> Self {
        Self {
            lower: -std::f64::consts::PI,
            upper: std::f64::consts::PI,
        }
    }
}

impl JointLimits {
    /// Create default limits for revolute joints (-PI to PI)
    pub fn default_revolute() -> Self {
        Self::default()
    }

    /// Create default limits for prismatic joints (-1m to 1m)
    pub fn default_prismatic() -> Self {
        Self {
            lower: -1.0,
            upper: 1.0,
        }
    }

    /// Create limits with specified range
    pub fn with_range(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Default limits for the given joint type
    pub fn default_for(joint_type: JointType) -> Self {
        match joint_type {
            JointType::Revolute => Self::default_revolute(),
            JointType::Prismatic => Self::default_prismatic(),
        }
    }

    /// Check whether a value lies within the limits
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}
