//! Damped least-squares inverse kinematics
//!
//! Iteratively solves for joint variables that place the end-effector at a
//! target position, using a numerical Jacobian and a damped pseudo-inverse
//! (Levenberg-Marquardt style). Works for any chain the crate can model.

use glam::{DMat3, DVec3};

use crate::chain::{DimensionError, KinematicChain};

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum solver iterations
    pub max_iterations: u32,
    /// Position error tolerance (meters)
    pub tolerance: f64,
    /// Damping factor for the pseudo-inverse. Higher is more robust near
    /// singularities, slower to converge.
    pub damping: f64,
    /// Fraction of each joint update applied per iteration (0-1)
    pub step_size: f64,
    /// Perturbation used by the numerical Jacobian
    pub jacobian_epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-3,
            damping: 0.1,
            step_size: 0.5,
            jacobian_epsilon: 1e-6,
        }
    }
}

/// Result of an IK solve
#[derive(Debug, Clone)]
pub struct IkResult {
    /// Best joint variables found (base-to-tip order)
    pub joint_variables: Vec<f64>,
    /// Whether the position error dropped below tolerance
    pub converged: bool,
    /// Iterations spent
    pub iterations: u32,
    /// Position error at the returned configuration (meters)
    pub final_error: f64,
    /// Position error at the start of each iteration
    pub error_history: Vec<f64>,
}

/// Damped least-squares position IK solver
pub struct IkSolver {
    config: SolverConfig,
}

impl IkSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Solve for the target position, warm-starting from the chain's
    /// current joint variables. The chain itself is not mutated; apply the
    /// result with [`KinematicChain::set_joint_variables`].
    pub fn solve(&self, chain: &KinematicChain, target: DVec3) -> IkResult {
        self.run(chain, target, chain.joint_variables())
    }

    /// Solve from an explicit starting configuration
    pub fn solve_from(
        &self,
        chain: &KinematicChain,
        target: DVec3,
        initial: &[f64],
    ) -> Result<IkResult, DimensionError> {
        if initial.len() != chain.dof() {
            return Err(DimensionError::WrongLength {
                expected: chain.dof(),
                actual: initial.len(),
            });
        }
        Ok(self.run(chain, target, initial.to_vec()))
    }

    /// Check whether the target is plausibly inside the workspace.
    ///
    /// Returns the verdict and the distance from the chain base to the
    /// target; anything beyond `max_reach()` plus a 10% margin is rejected.
    pub fn check_reachability(&self, chain: &KinematicChain, target: DVec3) -> (bool, f64) {
        let distance = (target - chain.base().position()).length();
        (distance <= chain.max_reach() * 1.1, distance)
    }

    fn run(&self, chain: &KinematicChain, target: DVec3, mut q: Vec<f64>) -> IkResult {
        let mut error_history = Vec::new();

        for iteration in 0..self.config.max_iterations {
            let current = end_effector_position(chain, &q);
            let error_vec = target - current;
            let error_norm = error_vec.length();
            error_history.push(error_norm);

            tracing::trace!(iteration, error = error_norm, "ik iteration");

            if error_norm < self.config.tolerance {
                tracing::debug!(iterations = iteration, error = error_norm, "ik converged");
                return IkResult {
                    joint_variables: q,
                    converged: true,
                    iterations: iteration,
                    final_error: error_norm,
                    error_history,
                };
            }

            let jacobian = numerical_jacobian(chain, &q, current, self.config.jacobian_epsilon);

            // Damped least squares: (J*J^T + lambda*I) * dx = e, dq = J^T * dx
            let damped = damped_jjt(&jacobian, self.config.damping);
            if damped.determinant().abs() < 1e-12 {
                tracing::debug!(iteration, "ik aborted on singular system");
                return IkResult {
                    joint_variables: q,
                    converged: false,
                    iterations: iteration,
                    final_error: error_norm,
                    error_history,
                };
            }
            let delta_x = damped.inverse() * error_vec;

            for (qi, column) in q.iter_mut().zip(&jacobian) {
                *qi += self.config.step_size * column.dot(delta_x);
            }
        }

        let final_error = (target - end_effector_position(chain, &q)).length();
        tracing::debug!(
            iterations = self.config.max_iterations,
            error = final_error,
            "ik did not converge"
        );
        IkResult {
            joint_variables: q,
            converged: false,
            iterations: self.config.max_iterations,
            final_error,
            error_history,
        }
    }
}

fn end_effector_position(chain: &KinematicChain, values: &[f64]) -> DVec3 {
    let frames = chain.compute_frames(values);
    frames[frames.len() - 1].position()
}

/// 3xN Jacobian by forward differences, one column per joint
fn numerical_jacobian(
    chain: &KinematicChain,
    values: &[f64],
    current: DVec3,
    epsilon: f64,
) -> Vec<DVec3> {
    let mut columns = Vec::with_capacity(values.len());
    let mut perturbed = values.to_vec();

    for i in 0..values.len() {
        let original = perturbed[i];
        perturbed[i] = original + epsilon;
        let position = end_effector_position(chain, &perturbed);
        perturbed[i] = original;

        columns.push((position - current) / epsilon);
    }

    columns
}

/// J*J^T + lambda*I for a Jacobian given as columns
fn damped_jjt(columns: &[DVec3], damping: f64) -> DMat3 {
    let mut m = DMat3::from_diagonal(DVec3::splat(damping));
    for c in columns {
        m.x_axis += *c * c.x;
        m.y_axis += *c * c.y;
        m.z_axis += *c * c.z;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dh::DhParameters;
    use crate::types::{JointLimits, JointType, Pose};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn revolute_chain(table: Vec<DhParameters>) -> KinematicChain {
        let n = table.len();
        KinematicChain::new(
            table,
            Pose::default(),
            vec![JointType::Revolute; n],
            vec![JointLimits::default_revolute(); n],
        )
        .unwrap()
    }

    fn planar_two_link() -> KinematicChain {
        revolute_chain(vec![
            DhParameters::new(1.0, 0.0, 0.0, 0.0),
            DhParameters::new(1.0, 0.0, 0.0, 0.0),
        ])
    }

    fn six_dof_arm() -> KinematicChain {
        revolute_chain(vec![
            DhParameters::new(0.0, FRAC_PI_2, 0.4, 0.0),
            DhParameters::new(0.6, 0.0, 0.0, 0.0),
            DhParameters::new(0.2, FRAC_PI_2, 0.0, 0.0),
            DhParameters::new(0.0, -FRAC_PI_2, 0.5, 0.0),
            DhParameters::new(0.0, FRAC_PI_2, 0.0, 0.0),
            DhParameters::new(0.0, 0.0, 0.3, 0.0),
        ])
    }

    #[test]
    fn reaches_planar_target() {
        let chain = planar_two_link();
        let target = DVec3::new(1.0, 1.0, 0.0);

        let solver = IkSolver::with_defaults();
        let result = solver
            .solve_from(&chain, target, &[0.5, 0.5])
            .unwrap();

        assert!(result.converged, "final error {}", result.final_error);

        let frames = chain
            .forward_kinematics_with(&result.joint_variables)
            .unwrap();
        let ee = frames.last().unwrap().position();
        assert_relative_eq!(ee.x, 1.0, epsilon = 1e-2);
        assert_relative_eq!(ee.y, 1.0, epsilon = 1e-2);
    }

    #[test]
    fn fk_ik_roundtrip_six_dof() {
        let chain = six_dof_arm();

        let q_target = [0.5, 0.3, -0.4, 0.2, 0.1, -0.3];
        let frames = chain.forward_kinematics_with(&q_target).unwrap();
        let target = frames.last().unwrap().position();

        let solver = IkSolver::new(SolverConfig {
            max_iterations: 500,
            ..SolverConfig::default()
        });
        let result = solver.solve_from(&chain, target, &[0.1; 6]).unwrap();

        assert!(result.converged, "final error {}", result.final_error);
        assert!(result.final_error < 1e-3);
    }

    #[test]
    fn warm_start_from_current_variables() {
        let mut chain = six_dof_arm();
        let target = DVec3::new(0.3, 0.1, 0.6);

        let solver = IkSolver::new(SolverConfig {
            max_iterations: 500,
            ..SolverConfig::default()
        });
        let cold = solver.solve_from(&chain, target, &[0.1; 6]).unwrap();
        assert!(cold.converged, "final error {}", cold.final_error);

        // Seed the chain with the solution; solve() warm-starts from it
        chain.set_joint_variables(&cold.joint_variables).unwrap();
        let warm = solver.solve(&chain, target);
        assert!(warm.converged);
        assert!(warm.iterations <= cold.iterations);
    }

    #[test]
    fn unreachable_target_does_not_converge() {
        let chain = planar_two_link();
        let solver = IkSolver::new(SolverConfig {
            max_iterations: 50,
            ..SolverConfig::default()
        });
        let result = solver.solve(&chain, DVec3::new(5.0, 5.0, 5.0));

        assert!(!result.converged);
        assert!(result.final_error > 1.0);
        assert_eq!(result.error_history.len(), 50);
    }

    #[test]
    fn initial_vector_length_checked() {
        let chain = planar_two_link();
        let solver = IkSolver::with_defaults();
        let err = solver
            .solve_from(&chain, DVec3::ZERO, &[0.0; 3])
            .unwrap_err();
        assert_eq!(
            err,
            DimensionError::WrongLength {
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn reachability_check() {
        let chain = planar_two_link();
        let solver = IkSolver::with_defaults();

        let (ok, distance) = solver.check_reachability(&chain, DVec3::new(1.0, 0.5, 0.0));
        assert!(ok);
        assert_relative_eq!(distance, (1.25f64).sqrt(), epsilon = 1e-12);

        let (ok, distance) = solver.check_reachability(&chain, DVec3::new(10.0, 0.0, 0.0));
        assert!(!ok);
        assert_relative_eq!(distance, 10.0, epsilon = 1e-12);
    }
}
