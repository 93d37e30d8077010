//! Critic registry and score aggregation.

use std::sync::Arc;

use log::{debug, warn};
use ndarray::{Array1, ArrayView3};

use crate::config::CriticsConfig;
use crate::core::{Path, PoseStamped};
use crate::costmap::SharedCostmap;
use crate::error::{GatiError, Result};

use super::goal::GoalCritic;
use super::goal_angle::GoalAngleCritic;
use super::obstacle::ObstacleCritic;
use super::reference::ReferenceCritic;
use super::traits::Critic;

/// Build a critic from its registered name.
///
/// This table replaces runtime plugin discovery: composition stays
/// configuration-driven, but every critic is a known type.
pub fn build_critic(
    name: &str,
    config: &CriticsConfig,
    costmap: &SharedCostmap,
) -> Result<Box<dyn Critic>> {
    match name {
        "GoalCritic" => Ok(Box::new(GoalCritic::new(config))),
        "GoalAngleCritic" => Ok(Box::new(GoalAngleCritic::new(config))),
        "ReferenceCritic" => Ok(Box::new(ReferenceCritic::new(config))),
        "ObstacleCritic" => Ok(Box::new(ObstacleCritic::new(config, Arc::clone(costmap)))),
        other => Err(GatiError::UnknownCritic(other.to_string())),
    }
}

/// Ordered collection of critics producing one additive cost per trajectory.
pub struct CriticScorer {
    critics: Vec<Box<dyn Critic>>,
}

impl CriticScorer {
    /// Instantiate every configured critic.
    pub fn from_config(config: &CriticsConfig, costmap: &SharedCostmap) -> Result<Self> {
        let mut critics = Vec::with_capacity(config.names.len());
        for name in &config.names {
            critics.push(build_critic(name, config, costmap)?);
        }
        if critics.is_empty() {
            warn!("No critics configured; every trajectory will score zero");
        } else {
            debug!(
                "Configured critics: {}",
                config.names.join(", ")
            );
        }
        Ok(Self { critics })
    }

    /// Zero `costs` and let every critic add its contribution.
    pub fn score(
        &self,
        robot_pose: &PoseStamped,
        trajectories: ArrayView3<'_, f32>,
        path: &Path,
        costs: &mut Array1<f32>,
    ) {
        costs.fill(0.0);
        for critic in &self.critics {
            critic.score(robot_pose, trajectories, path, costs);
        }
    }

    /// Names of the active critics, in invocation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.critics.iter().map(|c| c.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.critics.is_empty()
    }
}
