//! Terminal-heading critic.

use ndarray::{Array1, ArrayView3};

use crate::config::CriticsConfig;
use crate::core::{angle_diff, Path, PoseStamped};

use super::traits::Critic;

/// Penalizes the angular distance between each trajectory's terminal yaw
/// and the heading of the goal pose.
pub struct GoalAngleCritic {
    power: f32,
    weight: f32,
}

impl GoalAngleCritic {
    pub fn new(config: &CriticsConfig) -> Self {
        Self {
            power: config.goal_angle_cost_power,
            weight: config.goal_angle_cost_weight,
        }
    }
}

impl Critic for GoalAngleCritic {
    fn name(&self) -> &'static str {
        "GoalAngleCritic"
    }

    fn score(
        &self,
        _robot_pose: &PoseStamped,
        trajectories: ArrayView3<'_, f32>,
        path: &Path,
        costs: &mut Array1<f32>,
    ) {
        let goal_yaw = match path.goal() {
            Some(goal) => goal.yaw(),
            None => return,
        };
        let last = trajectories.shape()[1] - 1;

        for (b, cost) in costs.iter_mut().enumerate() {
            let yaw = trajectories[[b, last, 2]];
            let err = angle_diff(yaw, goal_yaw).abs();
            *cost += (self.weight * err).powf(self.power);
        }
    }
}
