//! The critic seam of the scoring pipeline.

use ndarray::{Array1, ArrayView3};

use crate::core::{Path, PoseStamped};

/// A pure scoring function over a batch of candidate trajectories.
///
/// Implementations add a non-negative contribution per trajectory to the
/// caller's cost vector and keep no state between calls beyond their
/// configuration. Contributions are additive, so the set of active critics
/// composes freely and their order does not affect the result.
pub trait Critic: Send + Sync {
    /// Name the critic is registered under.
    fn name(&self) -> &'static str;

    /// Add this critic's contribution to `costs`.
    ///
    /// `trajectories` has shape `[batch, horizon, 3]` with world-frame
    /// columns (x, y, yaw); `costs` has shape `[batch]`.
    fn score(
        &self,
        robot_pose: &PoseStamped,
        trajectories: ArrayView3<'_, f32>,
        path: &Path,
        costs: &mut Array1<f32>,
    );
}
