//! gati-ctrl — sampling-based local motion control for mobile robots.
//!
//! The crate implements a Model Predictive Path Integral (MPPI) controller:
//! every control tick it samples a batch of perturbed control sequences
//! around a warm-started nominal sequence, rolls them through a kinematic
//! motion model, scores the resulting trajectories with a configurable set
//! of critics, and collapses the batch into the next command via a softmax
//! weighted by negative cost.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 optimization/                       │  ← MPPI loop
//! │        (state batches, noise, optimizer)            │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   critics/                          │  ← Trajectory scoring
//! │    (goal, goal angle, reference path, obstacle)     │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │              motion / costmap / config              │  ← Models & interfaces
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use gati_ctrl::{GatiConfig, GridCostmap, Optimizer, Path, PoseStamped, Twist};
//!
//! let costmap = Arc::new(GridCostmap::new(100, 100, 0.05, -2.5, -2.5));
//! let mut controller = Optimizer::new(GatiConfig::default(), costmap).unwrap();
//! controller.activate();
//!
//! let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
//! let speed = Twist::default();
//! let plan = Path::from_waypoints(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
//!
//! let command = controller.eval_control(&pose, &speed, &plan).unwrap();
//! assert!(command.twist.linear.x.is_finite());
//! ```

pub mod config;
pub mod core;
pub mod costmap;
pub mod critics;
pub mod error;
pub mod motion;
pub mod optimization;

// Core types
pub use crate::core::{
    Header, Path, Point3, Pose, PoseStamped, Quaternion, Twist, TwistStamped, Vector3,
};

// Configuration and errors
pub use config::{ControllerConfig, CriticsConfig, GatiConfig};
pub use error::{GatiError, Result};

// Models and interfaces
pub use costmap::{cost_values, Costmap, GridCostmap, SharedCostmap};
pub use motion::{ControlLayout, MotionModel};

// Scoring
pub use critics::{
    Critic, CriticScorer, GoalAngleCritic, GoalCritic, ObstacleCritic, ReferenceCritic,
};

// Optimization
pub use optimization::{NoiseGenerator, Optimizer, StateBatches};
