//! Configuration loading for the controller.
//!
//! Every parameter has a default, so an empty TOML document configures the
//! documented defaults. Validation happens once at configure time; the
//! sampling clip rule is the only bound enforced afterwards.

use crate::error::{GatiError, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GatiConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub critics: CriticsConfig,
}

/// Optimizer parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct ControllerConfig {
    /// Integration step length in seconds
    #[serde(default = "default_model_dt")]
    pub model_dt: f32,

    /// Prediction horizon in steps
    #[serde(default = "default_time_steps")]
    pub time_steps: usize,

    /// Number of control sequences sampled per iteration
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Optimization iterations per control tick
    #[serde(default = "default_iteration_count")]
    pub iteration_count: usize,

    /// Softmax temperature; lower concentrates weight on low-cost samples
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Forward velocity limit (m/s)
    #[serde(default = "default_vx_max")]
    pub vx_max: f32,

    /// Lateral velocity limit (m/s), holonomic models only
    #[serde(default = "default_vy_max")]
    pub vy_max: f32,

    /// Angular velocity limit (rad/s)
    #[serde(default = "default_wz_max")]
    pub wz_max: f32,

    /// Forward velocity sampling std-dev (m/s)
    #[serde(default = "default_vx_std")]
    pub vx_std: f32,

    /// Lateral velocity sampling std-dev (m/s)
    #[serde(default = "default_vy_std")]
    pub vy_std: f32,

    /// Angular velocity sampling std-dev (rad/s)
    #[serde(default = "default_wz_std")]
    pub wz_std: f32,

    /// Kinematic model name: "diff", "omni" or "ackermann"
    #[serde(default = "default_motion_model")]
    pub motion_model: String,

    /// Minimum turning radius (m), ackermann only
    #[serde(default = "default_min_turning_radius")]
    pub min_turning_radius: f32,

    /// Frame of the emitted command
    #[serde(default = "default_base_frame")]
    pub base_frame: String,

    /// Sampling seed; 0 uses entropy (non-deterministic)
    #[serde(default)]
    pub seed: u64,
}

/// Critic selection and parameters.
///
/// `names` is the ordered list of critics to run; costs are additive, so the
/// order only matters for logging.
#[derive(Clone, Debug, Deserialize)]
pub struct CriticsConfig {
    #[serde(default = "default_critic_names")]
    pub names: Vec<String>,

    #[serde(default = "default_power")]
    pub goal_cost_power: f32,
    #[serde(default = "default_goal_cost_weight")]
    pub goal_cost_weight: f32,

    #[serde(default = "default_power")]
    pub goal_angle_cost_power: f32,
    #[serde(default = "default_goal_angle_cost_weight")]
    pub goal_angle_cost_weight: f32,

    #[serde(default = "default_power")]
    pub reference_cost_power: f32,
    #[serde(default = "default_reference_cost_weight")]
    pub reference_cost_weight: f32,

    #[serde(default = "default_power")]
    pub obstacle_cost_power: f32,
    #[serde(default = "default_obstacle_cost_weight")]
    pub obstacle_cost_weight: f32,

    /// Cost assigned to a trajectory that touches a blocked cell.
    /// Large but finite so the softmax stays well-behaved when every
    /// sample collides.
    #[serde(default = "default_collision_cost")]
    pub collision_cost: f32,
}

fn default_model_dt() -> f32 {
    0.1
}
fn default_time_steps() -> usize {
    15
}
fn default_batch_size() -> usize {
    200
}
fn default_iteration_count() -> usize {
    2
}
fn default_temperature() -> f32 {
    0.25
}
fn default_vx_max() -> f32 {
    0.5
}
fn default_vy_max() -> f32 {
    1.3
}
fn default_wz_max() -> f32 {
    1.3
}
fn default_vx_std() -> f32 {
    0.1
}
fn default_vy_std() -> f32 {
    0.1
}
fn default_wz_std() -> f32 {
    0.3
}
fn default_motion_model() -> String {
    "diff".to_string()
}
fn default_min_turning_radius() -> f32 {
    0.4
}
fn default_base_frame() -> String {
    "base_link".to_string()
}

fn default_critic_names() -> Vec<String> {
    vec![
        "GoalCritic".to_string(),
        "GoalAngleCritic".to_string(),
        "ReferenceCritic".to_string(),
        "ObstacleCritic".to_string(),
    ]
}
fn default_power() -> f32 {
    1.0
}
// Weight scale is tied to the default temperature: the batch cost spread
// must stay near the temperature or the softmax collapses onto the single
// best sample. Goal progress stays the dominant term so the optimizer
// steers around obstacles instead of stopping short on the reference line.
fn default_goal_cost_weight() -> f32 {
    3.0
}
fn default_goal_angle_cost_weight() -> f32 {
    2.0
}
fn default_reference_cost_weight() -> f32 {
    1.5
}
fn default_obstacle_cost_weight() -> f32 {
    10.0
}
fn default_collision_cost() -> f32 {
    1e6
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            model_dt: default_model_dt(),
            time_steps: default_time_steps(),
            batch_size: default_batch_size(),
            iteration_count: default_iteration_count(),
            temperature: default_temperature(),
            vx_max: default_vx_max(),
            vy_max: default_vy_max(),
            wz_max: default_wz_max(),
            vx_std: default_vx_std(),
            vy_std: default_vy_std(),
            wz_std: default_wz_std(),
            motion_model: default_motion_model(),
            min_turning_radius: default_min_turning_radius(),
            base_frame: default_base_frame(),
            seed: 0,
        }
    }
}

impl Default for CriticsConfig {
    fn default() -> Self {
        Self {
            names: default_critic_names(),
            goal_cost_power: default_power(),
            goal_cost_weight: default_goal_cost_weight(),
            goal_angle_cost_power: default_power(),
            goal_angle_cost_weight: default_goal_angle_cost_weight(),
            reference_cost_power: default_power(),
            reference_cost_weight: default_reference_cost_weight(),
            obstacle_cost_power: default_power(),
            obstacle_cost_weight: default_obstacle_cost_weight(),
            collision_cost: default_collision_cost(),
        }
    }
}

impl GatiConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GatiError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GatiConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the constraints that make the optimizer well-defined.
    pub fn validate(&self) -> Result<()> {
        let c = &self.controller;
        if c.model_dt <= 0.0 {
            return Err(GatiError::Config(format!(
                "model_dt must be positive, got {}",
                c.model_dt
            )));
        }
        if c.time_steps == 0 {
            return Err(GatiError::Config("time_steps must be nonzero".to_string()));
        }
        if c.batch_size == 0 {
            return Err(GatiError::Config("batch_size must be nonzero".to_string()));
        }
        if c.temperature <= 0.0 {
            return Err(GatiError::Config(format!(
                "temperature must be positive, got {}",
                c.temperature
            )));
        }
        if c.min_turning_radius <= 0.0 {
            return Err(GatiError::Config(format!(
                "min_turning_radius must be positive, got {}",
                c.min_turning_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GatiConfig::from_toml("").unwrap();
        assert_eq!(config.controller.time_steps, 15);
        assert_eq!(config.controller.batch_size, 200);
        assert_eq!(config.controller.motion_model, "diff");
        assert_eq!(config.critics.names.len(), 4);
    }

    #[test]
    fn test_partial_override() {
        let config = GatiConfig::from_toml(
            r#"
            [controller]
            batch_size = 64
            motion_model = "omni"

            [critics]
            names = ["GoalCritic"]
            goal_cost_weight = 12.0
            "#,
        )
        .unwrap();
        assert_eq!(config.controller.batch_size, 64);
        assert_eq!(config.controller.motion_model, "omni");
        // Untouched fields keep their defaults
        assert_eq!(config.controller.time_steps, 15);
        assert_eq!(config.critics.names, vec!["GoalCritic"]);
        assert_eq!(config.critics.goal_cost_weight, 12.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = GatiConfig::default();
        config.controller.model_dt = 0.0;
        assert!(config.validate().is_err());

        let mut config = GatiConfig::default();
        config.controller.batch_size = 0;
        assert!(config.validate().is_err());

        let mut config = GatiConfig::default();
        config.controller.temperature = -1.0;
        assert!(config.validate().is_err());
    }
}
