//! Frame type definition

use glam::{DMat4, DQuat, DVec3};

/// One link's (or the end-effector's) pose relative to the world frame.
///
/// Frames are ephemeral: every forward-kinematics call produces a fresh
/// sequence and the caller owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    matrix: DMat4,
}

impl Frame {
    pub fn from_mat4(matrix: DMat4) -> Self {
        Self { matrix }
    }

    /// The full homogeneous transform
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Origin of the frame in world coordinates
    pub fn position(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// Orientation as a quaternion
    pub fn rotation(&self) -> DQuat {
        DQuat::from_mat4(&self.matrix)
    }

    /// The frame's x axis in world coordinates
    pub fn x_axis(&self) -> DVec3 {
        self.matrix.x_axis.truncate()
    }

    /// The frame's y axis in world coordinates
    pub fn y_axis(&self) -> DVec3 {
        self.matrix.y_axis.truncate()
    }

    /// The frame's z axis in world coordinates
    pub fn z_axis(&self) -> DVec3 {
        self.matrix.z_axis.truncate()
    }
}

impl From<DMat4> for Frame {
    fn from(matrix: DMat4) -> Self {
        Self::from_mat4(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_frame_axes() {
        let frame = Frame::from_mat4(DMat4::IDENTITY);
        assert_eq!(frame.position(), DVec3::ZERO);
        assert_eq!(frame.x_axis(), DVec3::X);
        assert_eq!(frame.y_axis(), DVec3::Y);
        assert_eq!(frame.z_axis(), DVec3::Z);
    }

    #[test]
    fn position_reads_translation_column() {
        let frame = Frame::from_mat4(DMat4::from_translation(DVec3::new(1.0, -2.0, 3.0)));
        let p = frame.position();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, -2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);
    }
}
