//! Kinematic motion models and the state-tensor column layout they induce.
//!
//! A motion model decides which control dimensions exist (holonomic models
//! add a lateral velocity), how columns are laid out in the batched state
//! tensor, and how velocities advance from one step to the next. The layout
//! is an immutable value computed from the variant; views over the state
//! tensor take it by reference and never mutate it.

use ndarray::{s, ArrayView2, ArrayViewMut2};
use std::ops::Range;

use crate::error::{GatiError, Result};

/// Kinematic model variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionModel {
    /// Differential drive: controls (vx, wz)
    Differential,
    /// Omnidirectional: controls (vx, vy, wz)
    Omnidirectional,
    /// Car-like: controls (vx, wz) with curvature-limited wz
    Ackermann,
}

impl MotionModel {
    /// All known variants.
    pub const fn variants() -> [MotionModel; 3] {
        [
            MotionModel::Differential,
            MotionModel::Omnidirectional,
            MotionModel::Ackermann,
        ]
    }

    /// Resolve a configured name to a variant.
    pub fn parse(name: &str) -> Result<MotionModel> {
        match name {
            "diff" => Ok(MotionModel::Differential),
            "omni" => Ok(MotionModel::Omnidirectional),
            "ackermann" => Ok(MotionModel::Ackermann),
            other => Err(GatiError::UnknownMotionModel(other.to_string())),
        }
    }

    /// Configured name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            MotionModel::Differential => "diff",
            MotionModel::Omnidirectional => "omni",
            MotionModel::Ackermann => "ackermann",
        }
    }

    /// Whether the model commands an independent lateral velocity.
    #[inline]
    pub fn is_holonomic(self) -> bool {
        matches!(self, MotionModel::Omnidirectional)
    }

    /// Advance one step: write the next velocity slice from the current rows.
    ///
    /// All variants are first-order: the velocity reached at step t+1 equals
    /// the velocity commanded at step t. The Ackermann curvature limit is
    /// enforced on the commands themselves before propagation, so it holds
    /// here by construction.
    ///
    /// `rows` is the full state slice at step t, shape `[batch, dim]`;
    /// `next_velocities` is the velocity slice at step t+1, shape
    /// `[batch, control_dim]`.
    pub fn step(
        self,
        rows: &ArrayView2<f32>,
        next_velocities: &mut ArrayViewMut2<f32>,
        layout: &ControlLayout,
    ) {
        next_velocities.assign(&rows.slice(s![.., layout.control_range()]));
    }
}

/// Column offsets of the batched state tensor for one motion model.
///
/// Rows are laid out as `[controls | velocities | dt]`; control and velocity
/// blocks have the same width, and the lateral columns exist only for
/// holonomic models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlLayout {
    /// Commanded forward velocity column
    pub control_vx: usize,
    /// Commanded lateral velocity column, holonomic models only
    pub control_vy: Option<usize>,
    /// Commanded angular velocity column
    pub control_wz: usize,
    /// Reached forward velocity column
    pub vx: usize,
    /// Reached lateral velocity column, holonomic models only
    pub vy: Option<usize>,
    /// Reached angular velocity column
    pub wz: usize,
    /// Time delta column
    pub dt: usize,
    /// Number of control (and velocity) columns
    pub control_dim: usize,
    /// Total number of columns per row
    pub dim: usize,
}

impl ControlLayout {
    /// Compute the layout for a motion model.
    pub fn for_model(model: MotionModel) -> Self {
        if model.is_holonomic() {
            Self {
                control_vx: 0,
                control_vy: Some(1),
                control_wz: 2,
                vx: 3,
                vy: Some(4),
                wz: 5,
                dt: 6,
                control_dim: 3,
                dim: 7,
            }
        } else {
            Self {
                control_vx: 0,
                control_vy: None,
                control_wz: 1,
                vx: 2,
                vy: None,
                wz: 3,
                dt: 4,
                control_dim: 2,
                dim: 5,
            }
        }
    }

    /// Column range of the control block.
    #[inline]
    pub fn control_range(&self) -> Range<usize> {
        0..self.control_dim
    }

    /// Column range of the velocity block.
    #[inline]
    pub fn velocity_range(&self) -> Range<usize> {
        self.control_dim..2 * self.control_dim
    }
}
