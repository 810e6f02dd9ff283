//! Pose type definition

use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Pose (position and orientation)
///
/// Rotation follows the roll-pitch-yaw convention: extrinsic rotations about
/// the fixed X, Y, Z axes in that order, i.e. `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub xyz: [f64; 3],
    pub rpy: [f64; 3], // roll, pitch, yaw in radians
}

impl Pose {
    pub fn new(xyz: [f64; 3], rpy: [f64; 3]) -> Self {
        Self { xyz, rpy }
    }

    pub fn from_position(xyz: [f64; 3]) -> Self {
        Self { xyz, rpy: [0.0; 3] }
    }

    pub fn to_mat4(&self) -> DMat4 {
        let translation = DVec3::from(self.xyz);
        DMat4::from_rotation_translation(self.to_quat(), translation)
    }

    /// Convert to quaternion representation
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::ZYX, self.rpy[2], self.rpy[1], self.rpy[0])
    }

    /// Get position as DVec3
    pub fn position(&self) -> DVec3 {
        DVec3::from(self.xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        let mat = Pose::default().to_mat4();
        assert_eq!(mat, DMat4::IDENTITY);
    }

    #[test]
    fn translation_only() {
        let pose = Pose::from_position([1.0, 2.0, 3.0]);
        let p = pose.to_mat4().transform_point3(DVec3::ZERO);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn yaw_rotates_x_axis_to_y() {
        let pose = Pose::new([0.0; 3], [0.0, 0.0, FRAC_PI_2]);
        let v = pose.to_mat4().transform_vector3(DVec3::X);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rpy_applies_roll_before_yaw() {
        // Roll 90deg about X then yaw 90deg about fixed Z:
        // the local Y axis ends up along world Z after roll, unchanged by yaw.
        let pose = Pose::new([0.0; 3], [FRAC_PI_2, 0.0, FRAC_PI_2]);
        let v = pose.to_mat4().transform_vector3(DVec3::Y);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-12);
    }
}
