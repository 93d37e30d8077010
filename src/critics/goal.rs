//! Distance-to-goal critic.

use ndarray::{Array1, ArrayView3};

use crate::config::CriticsConfig;
use crate::core::{Path, PoseStamped};

use super::traits::Critic;

/// Penalizes the Euclidean distance between each trajectory's end point and
/// the goal (the last path pose).
pub struct GoalCritic {
    power: f32,
    weight: f32,
}

impl GoalCritic {
    pub fn new(config: &CriticsConfig) -> Self {
        Self {
            power: config.goal_cost_power,
            weight: config.goal_cost_weight,
        }
    }
}

impl Critic for GoalCritic {
    fn name(&self) -> &'static str {
        "GoalCritic"
    }

    fn score(
        &self,
        _robot_pose: &PoseStamped,
        trajectories: ArrayView3<'_, f32>,
        path: &Path,
        costs: &mut Array1<f32>,
    ) {
        let goal = match path.goal() {
            Some(goal) => goal,
            None => return,
        };
        let gx = goal.pose.position.x;
        let gy = goal.pose.position.y;
        let last = trajectories.shape()[1] - 1;

        for (b, cost) in costs.iter_mut().enumerate() {
            let dx = trajectories[[b, last, 0]] - gx;
            let dy = trajectories[[b, last, 1]] - gy;
            let dist = dx.hypot(dy);
            *cost += (self.weight * dist).powf(self.power);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array3;

    fn make_trajectories(ends: &[(f32, f32)]) -> Array3<f32> {
        let mut traj = Array3::zeros((ends.len(), 4, 3));
        for (b, &(x, y)) in ends.iter().enumerate() {
            traj[[b, 3, 0]] = x;
            traj[[b, 3, 1]] = y;
        }
        traj
    }

    #[test]
    fn test_scores_terminal_distance() {
        let critic = GoalCritic::new(&CriticsConfig {
            goal_cost_weight: 2.0,
            goal_cost_power: 1.0,
            ..CriticsConfig::default()
        });
        let path = Path::from_waypoints(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let traj = make_trajectories(&[(1.0, 0.0), (0.0, 0.0), (1.0, 0.5)]);
        let mut costs = Array1::zeros(3);

        critic.score(
            &PoseStamped::from_xy_yaw(0.0, 0.0, 0.0),
            traj.view(),
            &path,
            &mut costs,
        );

        assert_relative_eq!(costs[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(costs[1], 2.0, epsilon = 1e-6);
        assert_relative_eq!(costs[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_contribution_is_additive() {
        let critic = GoalCritic::new(&CriticsConfig::default());
        let path = Path::from_waypoints(&[(1.0, 0.0, 0.0)]);
        let traj = make_trajectories(&[(0.0, 0.0)]);
        let mut costs = Array1::from_elem(1, 3.0);

        critic.score(
            &PoseStamped::from_xy_yaw(0.0, 0.0, 0.0),
            traj.view(),
            &path,
            &mut costs,
        );

        // Previous contents are kept
        assert!(costs[0] > 3.0);
    }

    #[test]
    fn test_empty_path_contributes_nothing() {
        let critic = GoalCritic::new(&CriticsConfig::default());
        let traj = make_trajectories(&[(0.5, 0.5)]);
        let mut costs = Array1::zeros(1);

        critic.score(
            &PoseStamped::from_xy_yaw(0.0, 0.0, 0.0),
            traj.view(),
            &Path::default(),
            &mut costs,
        );

        assert_eq!(costs[0], 0.0);
    }
}
