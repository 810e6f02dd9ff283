//! Ready-made arm descriptions for tests and demos

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::describe::{AngleUnit, ArmDescription, JointDescription};
use crate::types::{JointType, Pose};

fn revolute_row(theta: f64, alpha: f64, d: f64, a: f64) -> JointDescription {
    JointDescription {
        joint_type: JointType::Revolute,
        theta,
        alpha,
        d,
        a,
        limits: None,
        offset: None,
    }
}

fn description(name: &str, joints: Vec<JointDescription>) -> ArmDescription {
    ArmDescription {
        name: name.to_string(),
        angle_unit: AngleUnit::Radians,
        base: None,
        tool: None,
        joints,
    }
}

/// Planar 2-link arm with unit link lengths, both joints about Z
pub fn planar_two_link() -> ArmDescription {
    description(
        "planar_two_link",
        vec![
            revolute_row(0.0, 0.0, 0.0, 1.0),
            revolute_row(0.0, 0.0, 0.0, 1.0),
        ],
    )
}

/// Simple 3-DOF arm: base rotation on a 0.5m column, then two planar links
pub fn planar_three_dof() -> ArmDescription {
    description(
        "planar_three_dof",
        vec![
            revolute_row(0.0, 0.0, 0.5, 0.0),
            revolute_row(0.0, 0.0, 0.0, 1.0),
            revolute_row(0.0, 0.0, 0.0, 0.8),
        ],
    )
}

/// 3-DOF arm with a physical mount offset on the shoulder link,
/// demonstrating how offsets move the actual joint frame off the DH frame
pub fn three_dof_with_offsets() -> ArmDescription {
    let mut arm = description(
        "three_dof_with_offsets",
        vec![
            revolute_row(0.0, 0.0, 0.3, 0.0),
            revolute_row(0.0, FRAC_PI_2, 0.0, 0.5),
            revolute_row(0.0, 0.0, 0.0, 0.7),
        ],
    );
    arm.joints[1].offset = Some(Pose::new([0.2, 0.0, 0.1], [0.0, 0.0, FRAC_PI_4]));
    arm
}

/// 6-DOF industrial-style arm with wrist twists
pub fn articulated_six_dof() -> ArmDescription {
    description(
        "articulated_six_dof",
        vec![
            revolute_row(0.0, FRAC_PI_2, 0.4, 0.0),
            revolute_row(0.0, 0.0, 0.0, 0.6),
            revolute_row(0.0, FRAC_PI_2, 0.0, 0.2),
            revolute_row(0.0, -FRAC_PI_2, 0.5, 0.0),
            revolute_row(0.0, FRAC_PI_2, 0.0, 0.0),
            revolute_row(0.0, 0.0, 0.3, 0.0),
        ],
    )
}

/// PUMA 560-like parameters (classic industrial manipulator)
pub fn puma_560() -> ArmDescription {
    description(
        "puma_560",
        vec![
            revolute_row(0.0, FRAC_PI_2, 0.6718, 0.0),
            revolute_row(0.0, 0.0, 0.0, 0.4318),
            revolute_row(0.0, -FRAC_PI_2, 0.0, 0.0203),
            revolute_row(0.0, FRAC_PI_2, 0.4318, 0.0),
            revolute_row(0.0, -FRAC_PI_2, 0.0, 0.0),
            revolute_row(0.0, 0.0, 0.0, 0.0),
        ],
    )
}
