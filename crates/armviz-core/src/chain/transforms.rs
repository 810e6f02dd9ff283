//! Forward kinematics for KinematicChain

use crate::types::Frame;

use super::{DimensionError, KinematicChain};

impl KinematicChain {
    /// Compute the world frame of every link plus the end-effector.
    ///
    /// Returns `dof() + 1` frames in base-to-tip order: entry `i` is link
    /// `i`'s frame, the last entry is the end-effector frame. Purely a
    /// function of the current joint variables and the fixed DH constants.
    pub fn forward_kinematics(&self) -> Vec<Frame> {
        let values = self.joint_variables();
        self.compute_frames(&values)
    }

    /// Forward kinematics for a candidate variable vector, without mutating
    /// the chain
    pub fn forward_kinematics_with(&self, values: &[f64]) -> Result<Vec<Frame>, DimensionError> {
        if values.len() != self.dof() {
            return Err(DimensionError::WrongLength {
                expected: self.dof(),
                actual: values.len(),
            });
        }
        Ok(self.compute_frames(values))
    }

    /// End-effector frame at the current joint variables
    pub fn end_effector_frame(&self) -> Frame {
        let frames = self.forward_kinematics();
        // compute_frames always appends the end-effector entry
        frames[frames.len() - 1]
    }

    /// Workspace radius estimate: sum of |a| + |d| over the DH table
    pub fn max_reach(&self) -> f64 {
        self.joints
            .iter()
            .map(|j| j.dh.a.abs() + j.dh.d.abs())
            .sum()
    }

    pub(crate) fn compute_frames(&self, values: &[f64]) -> Vec<Frame> {
        debug_assert_eq!(values.len(), self.dof());

        let mut frames = Vec::with_capacity(self.dof() + 1);
        let mut cumulative = self.base.to_mat4();

        for (joint, &value) in self.joints.iter().zip(values) {
            cumulative *= joint.dh.to_mat4_with(joint.joint_type, value);

            // Mount offsets adjust the reported link frame only; the running
            // chain stays pure DH.
            let link = match joint.mount_offset {
                Some(offset) => cumulative * offset.to_mat4(),
                None => cumulative,
            };
            frames.push(Frame::from_mat4(link));
        }

        let end_effector = match self.tool {
            Some(tool) => cumulative * tool.to_mat4(),
            None => cumulative,
        };
        frames.push(Frame::from_mat4(end_effector));

        frames
    }
}
