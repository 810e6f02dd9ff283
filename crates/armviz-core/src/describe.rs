//! Serializable arm descriptions
//!
//! An [`ArmDescription`] is plain structured data: the DH table plus
//! everything needed to build a [`KinematicChain`]. Descriptions load and
//! save as RON files so an arm can be defined outside the code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::{ConfigurationError, KinematicChain};
use crate::dh::DhParameters;
use crate::types::{JointLimits, JointType, Pose};

/// Unit of the angular values (theta, alpha, rpy, revolute limits) in a
/// description. Translations are meters regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }
}

/// One row of the arm definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointDescription {
    #[serde(default)]
    pub joint_type: JointType,
    /// Joint angle; rest value for revolute joints
    #[serde(default)]
    pub theta: f64,
    /// Link twist
    #[serde(default)]
    pub alpha: f64,
    /// Link offset; rest value for prismatic joints (meters)
    #[serde(default)]
    pub d: f64,
    /// Link length (meters)
    #[serde(default)]
    pub a: f64,
    /// Advisory limits; defaults to the type-appropriate range when absent
    #[serde(default)]
    pub limits: Option<JointLimits>,
    /// Physical mount offset from the DH frame; `None` means no offset
    #[serde(default)]
    pub offset: Option<Pose>,
}

/// A complete, serializable arm definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmDescription {
    pub name: String,
    #[serde(default)]
    pub angle_unit: AngleUnit,
    /// World pose of the base frame
    #[serde(default)]
    pub base: Option<Pose>,
    /// Tool transform after the last joint
    #[serde(default)]
    pub tool: Option<Pose>,
    pub joints: Vec<JointDescription>,
}

/// Errors from loading or saving descriptions
#[derive(Debug, Clone, thiserror::Error)]
pub enum DescriptionError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ArmDescription {
    /// Degree-of-freedom count of the described arm
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    /// Build the kinematic chain, converting all angular values to radians
    pub fn build(&self) -> Result<KinematicChain, ConfigurationError> {
        let unit = self.angle_unit;

        let mut dh_table = Vec::with_capacity(self.joints.len());
        let mut joint_types = Vec::with_capacity(self.joints.len());
        let mut joint_limits = Vec::with_capacity(self.joints.len());
        let mut offsets = Vec::with_capacity(self.joints.len());

        for joint in &self.joints {
            dh_table.push(DhParameters::new(
                joint.a,
                unit.to_radians(joint.alpha),
                joint.d,
                unit.to_radians(joint.theta),
            ));
            joint_types.push(joint.joint_type);

            // Revolute limits are angles and follow the description's unit;
            // prismatic limits are meters.
            joint_limits.push(match joint.limits {
                Some(limits) if joint.joint_type.is_angular() => JointLimits::with_range(
                    unit.to_radians(limits.lower),
                    unit.to_radians(limits.upper),
                ),
                Some(limits) => limits,
                None => JointLimits::default_for(joint.joint_type),
            });

            offsets.push(joint.offset.map(|pose| convert_pose(pose, unit)));
        }

        let base = self
            .base
            .map(|pose| convert_pose(pose, unit))
            .unwrap_or_default();

        let mut chain = KinematicChain::new(dh_table, base, joint_types, joint_limits)?
            .with_mount_offsets(offsets)?;
        if let Some(tool) = self.tool {
            chain = chain.with_tool(convert_pose(tool, unit));
        }
        Ok(chain)
    }

    /// Parse a description from a RON string
    pub fn from_ron_str(text: &str) -> Result<Self, DescriptionError> {
        ron::from_str(text).map_err(|e| DescriptionError::Parse(e.to_string()))
    }

    /// Serialize the description as pretty RON
    pub fn to_ron_string(&self) -> Result<String, DescriptionError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| DescriptionError::Serialize(e.to_string()))
    }

    /// Load a description from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| DescriptionError::Io(e.to_string()))?;
        let description = Self::from_ron_str(&content)?;
        tracing::info!(path = %path.display(), name = %description.name, "loaded arm description");
        Ok(description)
    }

    /// Save the description to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DescriptionError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| DescriptionError::Io(e.to_string()))?;
        tracing::info!(path = %path.display(), name = %self.name, "saved arm description");
        Ok(())
    }
}

fn convert_pose(pose: Pose, unit: AngleUnit) -> Pose {
    Pose::new(
        pose.xyz,
        [
            unit.to_radians(pose.rpy[0]),
            unit.to_radians(pose.rpy[1]),
            unit.to_radians(pose.rpy[2]),
        ],
    )
}
