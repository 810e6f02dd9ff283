//! Denavit-Hartenberg link parameters

use glam::{DMat4, DVec4};
use serde::{Deserialize, Serialize};

use crate::types::JointType;

/// DH parameters of one link, standard (distal) convention.
///
/// The link transform is `A = Rz(theta) * Tz(d) * Tx(a) * Rx(alpha)`.
/// Exactly one of {d, theta} is the joint's variable coordinate depending on
/// the joint type (revolute varies theta, prismatic varies d); the stored
/// value in that slot is the joint's rest value. Angles are radians,
/// translations are meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DhParameters {
    /// Link length (meters)
    pub a: f64,
    /// Link twist (radians)
    pub alpha: f64,
    /// Link offset (meters)
    pub d: f64,
    /// Joint angle (radians)
    pub theta: f64,
}

impl DhParameters {
    pub fn new(a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self { a, alpha, d, theta }
    }

    /// Homogeneous transform from the stored parameters
    pub fn to_mat4(&self) -> DMat4 {
        dh_matrix(self.a, self.alpha, self.d, self.theta)
    }

    /// Homogeneous transform with the joint variable substituted into the
    /// variable slot for the given joint type
    pub fn to_mat4_with(&self, joint_type: JointType, variable: f64) -> DMat4 {
        match joint_type {
            JointType::Revolute => dh_matrix(self.a, self.alpha, self.d, variable),
            JointType::Prismatic => dh_matrix(self.a, self.alpha, variable, self.theta),
        }
    }

    /// The rest value of the variable coordinate for the given joint type
    pub fn rest_value(&self, joint_type: JointType) -> f64 {
        match joint_type {
            JointType::Revolute => self.theta,
            JointType::Prismatic => self.d,
        }
    }
}

/// Standard DH transformation matrix
fn dh_matrix(a: f64, alpha: f64, d: f64, theta: f64) -> DMat4 {
    let (sa, ca) = alpha.sin_cos();
    let (st, ct) = theta.sin_cos();

    // Column-major: each DVec4 below is one column of
    //   | ct  -st*ca   st*sa   a*ct |
    //   | st   ct*ca  -ct*sa   a*st |
    //   |  0      sa      ca      d |
    //   |  0       0       0      1 |
    DMat4::from_cols(
        DVec4::new(ct, st, 0.0, 0.0),
        DVec4::new(-st * ca, ct * ca, sa, 0.0),
        DVec4::new(st * sa, -ct * sa, ca, 0.0),
        DVec4::new(a * ct, a * st, d, 1.0),
    )
}
