//! Cost-grid collision critic.

use ndarray::{Array1, ArrayView3};

use crate::config::CriticsConfig;
use crate::core::{Path, PoseStamped};
use crate::costmap::{cost_values, SharedCostmap};

use super::traits::Critic;

/// Samples the cost grid along each trajectory.
///
/// A trajectory touching an inscribed, lethal or unknown cell (or leaving
/// the grid) receives the collision sentinel: large enough to dominate every
/// other critic, finite so the softmax stays well-behaved when the whole
/// batch collides. Otherwise the contribution grows with the mean inflated
/// cost along the trajectory, normalized to [0, 1].
pub struct ObstacleCritic {
    power: f32,
    weight: f32,
    collision_cost: f32,
    costmap: SharedCostmap,
}

impl ObstacleCritic {
    pub fn new(config: &CriticsConfig, costmap: SharedCostmap) -> Self {
        Self {
            power: config.obstacle_cost_power,
            weight: config.obstacle_cost_weight,
            collision_cost: config.collision_cost,
            costmap,
        }
    }
}

impl Critic for ObstacleCritic {
    fn name(&self) -> &'static str {
        "ObstacleCritic"
    }

    fn score(
        &self,
        _robot_pose: &PoseStamped,
        trajectories: ArrayView3<'_, f32>,
        _path: &Path,
        costs: &mut Array1<f32>,
    ) {
        let horizon = trajectories.shape()[1];

        for (b, cost) in costs.iter_mut().enumerate() {
            let mut inflated_sum = 0.0;
            let mut blocked = false;

            for t in 0..horizon {
                let x = trajectories[[b, t, 0]];
                let y = trajectories[[b, t, 1]];
                match self.costmap.world_to_grid(x, y) {
                    Some((ix, iy)) => {
                        let cell = self.costmap.cost(ix, iy);
                        if cell >= cost_values::INSCRIBED {
                            blocked = true;
                            break;
                        }
                        inflated_sum += cell as f32 / cost_values::MAX_INFLATED as f32;
                    }
                    // Off-grid samples count as unknown space
                    None => {
                        blocked = true;
                        break;
                    }
                }
            }

            if blocked {
                *cost += self.collision_cost;
            } else {
                let mean = inflated_sum / horizon as f32;
                *cost += (self.weight * mean).powf(self.power);
            }
        }
    }
}
