//! Trajectory scoring pipeline.
//!
//! Each critic is a pure function adding a non-negative contribution to a
//! per-trajectory cost vector; the scorer runs the configured critics in
//! order and the optimizer consumes the summed result. Critics are resolved
//! by name through a registration table.

pub mod goal;
pub mod goal_angle;
pub mod obstacle;
pub mod reference;
pub mod scorer;
pub mod traits;

pub use goal::GoalCritic;
pub use goal_angle::GoalAngleCritic;
pub use obstacle::ObstacleCritic;
pub use reference::ReferenceCritic;
pub use scorer::{build_critic, CriticScorer};
pub use traits::Critic;
