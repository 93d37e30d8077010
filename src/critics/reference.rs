//! Reference-path adherence critic.

use ndarray::{Array1, ArrayView3};

use crate::config::CriticsConfig;
use crate::core::{Path, PoseStamped};

use super::traits::Critic;

/// Penalizes the mean distance from trajectory points to the nearest
/// reference path segment.
///
/// A path with fewer than two poses has no segments and contributes
/// nothing.
pub struct ReferenceCritic {
    power: f32,
    weight: f32,
}

impl ReferenceCritic {
    pub fn new(config: &CriticsConfig) -> Self {
        Self {
            power: config.reference_cost_power,
            weight: config.reference_cost_weight,
        }
    }
}

impl Critic for ReferenceCritic {
    fn name(&self) -> &'static str {
        "ReferenceCritic"
    }

    fn score(
        &self,
        _robot_pose: &PoseStamped,
        trajectories: ArrayView3<'_, f32>,
        path: &Path,
        costs: &mut Array1<f32>,
    ) {
        if path.len() < 2 {
            return;
        }
        let points: Vec<(f32, f32)> = path
            .poses
            .iter()
            .map(|p| (p.pose.position.x, p.pose.position.y))
            .collect();

        let horizon = trajectories.shape()[1];
        for (b, cost) in costs.iter_mut().enumerate() {
            let mut sum = 0.0;
            for t in 0..horizon {
                let x = trajectories[[b, t, 0]];
                let y = trajectories[[b, t, 1]];
                let mut nearest = f32::INFINITY;
                for seg in points.windows(2) {
                    let d = point_segment_distance(x, y, seg[0], seg[1]);
                    if d < nearest {
                        nearest = d;
                    }
                }
                sum += nearest;
            }
            let mean = sum / horizon as f32;
            *cost += (self.weight * mean).powf(self.power);
        }
    }
}

/// Distance from a point to a segment [a, b].
fn point_segment_distance(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (ax, ay) = a;
    let (bx, by) = b;
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    // Degenerate segment collapses to a point
    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    (px - cx).hypot(py - cy)
}
