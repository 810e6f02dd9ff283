//! Kinematic chain: ordered joints from base to end-effector

mod transforms;

use thiserror::Error;

use crate::dh::DhParameters;
use crate::types::{JointLimits, JointType, Pose};

/// Malformed chain construction input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{field} has {actual} entries but the DH table has {expected} rows")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("joint {index}: lower limit {lower} exceeds upper limit {upper}")]
    InvertedLimits {
        index: usize,
        lower: f64,
        upper: f64,
    },
    #[error("chain requires at least one joint")]
    Empty,
}

/// Joint-variable input of the wrong shape
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DimensionError {
    #[error("expected {expected} joint values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("joint index {index} out of range for a {dof}-DOF chain")]
    IndexOutOfRange { index: usize, dof: usize },
}

/// One joint of the chain, identified by its position (0 = base)
#[derive(Debug, Clone)]
pub struct Joint {
    /// DH parameters of the link this joint drives
    pub dh: DhParameters,
    pub joint_type: JointType,
    /// Advisory limits on the variable coordinate
    pub limits: JointLimits,
    /// Physical offset from the pure DH frame to the actual link frame
    pub mount_offset: Option<Pose>,
    /// Current value of the variable coordinate (theta or d)
    variable: f64,
}

impl Joint {
    /// Current value of the variable coordinate
    pub fn variable(&self) -> f64 {
        self.variable
    }
}

/// An ordered kinematic chain from base to end-effector.
///
/// Constructed once from a DH table and mutated only through the atomic
/// joint-variable setters; every forward-kinematics call derives fresh
/// frames from the current variables.
#[derive(Debug, Clone)]
pub struct KinematicChain {
    joints: Vec<Joint>,
    /// World pose of joint 0's reference frame
    base: Pose,
    /// Transform from the last DH frame to the end-effector frame
    tool: Option<Pose>,
    revision: u64,
}

impl KinematicChain {
    /// Build a chain from parallel per-joint sequences.
    ///
    /// All sequences must have the same nonzero length and every limit pair
    /// must satisfy `lower <= upper`. Joint variables initialize to the DH
    /// table's stored value in the variable slot (the rest value).
    pub fn new(
        dh_table: Vec<DhParameters>,
        base_frame: Pose,
        joint_types: Vec<JointType>,
        joint_limits: Vec<JointLimits>,
    ) -> Result<Self, ConfigurationError> {
        if dh_table.is_empty() {
            return Err(ConfigurationError::Empty);
        }
        let expected = dh_table.len();
        if joint_types.len() != expected {
            return Err(ConfigurationError::LengthMismatch {
                field: "joint_types",
                expected,
                actual: joint_types.len(),
            });
        }
        if joint_limits.len() != expected {
            return Err(ConfigurationError::LengthMismatch {
                field: "joint_limits",
                expected,
                actual: joint_limits.len(),
            });
        }
        for (index, limits) in joint_limits.iter().enumerate() {
            if limits.lower > limits.upper {
                return Err(ConfigurationError::InvertedLimits {
                    index,
                    lower: limits.lower,
                    upper: limits.upper,
                });
            }
        }

        let joints = dh_table
            .into_iter()
            .zip(joint_types)
            .zip(joint_limits)
            .map(|((dh, joint_type), limits)| Joint {
                variable: dh.rest_value(joint_type),
                dh,
                joint_type,
                limits,
                mount_offset: None,
            })
            .collect();

        Ok(Self {
            joints,
            base: base_frame,
            tool: None,
            revision: 0,
        })
    }

    /// Attach per-joint mount offsets (`None` = no physical offset)
    pub fn with_mount_offsets(
        mut self,
        offsets: Vec<Option<Pose>>,
    ) -> Result<Self, ConfigurationError> {
        if offsets.len() != self.joints.len() {
            return Err(ConfigurationError::LengthMismatch {
                field: "mount_offsets",
                expected: self.joints.len(),
                actual: offsets.len(),
            });
        }
        for (joint, offset) in self.joints.iter_mut().zip(offsets) {
            joint.mount_offset = offset;
        }
        Ok(self)
    }

    /// Attach a tool transform composed after the last joint
    pub fn with_tool(mut self, tool: Pose) -> Self {
        self.tool = Some(tool);
        self
    }

    /// Degree-of-freedom count
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    /// Joints in base-to-tip order
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// A single joint by index
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    /// World pose of joint 0's reference frame
    pub fn base(&self) -> Pose {
        self.base
    }

    /// Tool transform, if any
    pub fn tool(&self) -> Option<Pose> {
        self.tool
    }

    /// Monotonic counter bumped by every successful variable update
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current joint variables in base-to-tip order
    pub fn joint_variables(&self) -> Vec<f64> {
        self.joints.iter().map(|j| j.variable).collect()
    }

    /// Set all joint variables at once.
    ///
    /// Atomic: the length is validated before any joint changes, so a failed
    /// update leaves every variable untouched. Values are not clamped to the
    /// advisory limits.
    pub fn set_joint_variables(&mut self, values: &[f64]) -> Result<(), DimensionError> {
        if values.len() != self.joints.len() {
            return Err(DimensionError::WrongLength {
                expected: self.joints.len(),
                actual: values.len(),
            });
        }
        for (joint, &value) in self.joints.iter_mut().zip(values) {
            joint.variable = value;
        }
        self.revision += 1;
        Ok(())
    }

    /// Set a single joint's variable
    pub fn set_joint_variable(&mut self, index: usize, value: f64) -> Result<(), DimensionError> {
        let dof = self.joints.len();
        let joint = self
            .joints
            .get_mut(index)
            .ok_or(DimensionError::IndexOutOfRange { index, dof })?;
        joint.variable = value;
        self.revision += 1;
        Ok(())
    }
}
