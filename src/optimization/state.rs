//! Batched state storage for the sampling optimizer.
//!
//! One dense rank-3 tensor holds every sampled control sequence together
//! with the velocities it produces: `[batch, horizon, columns]`, where the
//! column layout comes from the active motion model. All accessors return
//! views that alias the backing storage; nothing is copied.

use ndarray::{s, Array3, ArrayView2, ArrayView3, ArrayViewMut2, ArrayViewMut3};

use crate::core::Twist;
use crate::motion::{ControlLayout, MotionModel};

/// Batched controls, velocities and time deltas.
pub struct StateBatches {
    data: Array3<f32>,
    layout: ControlLayout,
    model: MotionModel,
}

impl StateBatches {
    /// Create empty storage for a motion model; call [`reset`](Self::reset)
    /// before use.
    pub fn new(model: MotionModel) -> Self {
        let layout = ControlLayout::for_model(model);
        Self {
            data: Array3::zeros((0, 0, layout.dim)),
            layout,
            model,
        }
    }

    /// Switch the column layout to another motion model.
    ///
    /// Invalidates the current contents; callers reset afterwards.
    pub fn set_layout(&mut self, model: MotionModel) {
        self.model = model;
        self.layout = ControlLayout::for_model(model);
    }

    /// (Re)allocate to `[batch, horizon]`, zero everything and write the
    /// time-delta column.
    pub fn reset(&mut self, batch: usize, horizon: usize, model_dt: f32) {
        if self.data.dim() != (batch, horizon, self.layout.dim) {
            self.data = Array3::zeros((batch, horizon, self.layout.dim));
        } else {
            self.data.fill(0.0);
        }
        self.data
            .slice_mut(s![.., .., self.layout.dt])
            .fill(model_dt);
    }

    #[inline]
    pub fn batch(&self) -> usize {
        self.data.dim().0
    }

    #[inline]
    pub fn horizon(&self) -> usize {
        self.data.dim().1
    }

    #[inline]
    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    #[inline]
    pub fn model(&self) -> MotionModel {
        self.model
    }

    /// Full control block, shape `[batch, horizon, control_dim]`.
    pub fn controls(&self) -> ArrayView3<'_, f32> {
        self.data.slice(s![.., .., self.layout.control_range()])
    }

    pub fn controls_mut(&mut self) -> ArrayViewMut3<'_, f32> {
        let range = self.layout.control_range();
        self.data.slice_mut(s![.., .., range])
    }

    /// Full velocity block, shape `[batch, horizon, control_dim]`.
    pub fn velocities(&self) -> ArrayView3<'_, f32> {
        self.data.slice(s![.., .., self.layout.velocity_range()])
    }

    pub fn controls_vx(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., .., self.layout.control_vx])
    }

    pub fn controls_vx_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.data.slice_mut(s![.., .., self.layout.control_vx])
    }

    /// Lateral command column.
    ///
    /// Panics when the active motion model is not holonomic; the column does
    /// not exist in that layout.
    pub fn controls_vy(&self) -> ArrayView2<'_, f32> {
        let col = self.lateral_control_column();
        self.data.slice(s![.., .., col])
    }

    pub fn controls_vy_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        let col = self.lateral_control_column();
        self.data.slice_mut(s![.., .., col])
    }

    pub fn controls_wz(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., .., self.layout.control_wz])
    }

    pub fn controls_wz_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.data.slice_mut(s![.., .., self.layout.control_wz])
    }

    /// Forward command and angular command columns as one disjoint mutable
    /// pair, for constraints that couple them.
    pub fn controls_vx_wz_mut(&mut self) -> (ArrayViewMut2<'_, f32>, ArrayViewMut2<'_, f32>) {
        self.data.multi_slice_mut((
            s![.., .., self.layout.control_vx],
            s![.., .., self.layout.control_wz],
        ))
    }

    pub fn velocities_vx(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., .., self.layout.vx])
    }

    pub fn velocities_vx_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.data.slice_mut(s![.., .., self.layout.vx])
    }

    /// Lateral velocity column; panics for non-holonomic layouts.
    pub fn velocities_vy(&self) -> ArrayView2<'_, f32> {
        let col = self.lateral_velocity_column();
        self.data.slice(s![.., .., col])
    }

    pub fn velocities_vy_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        let col = self.lateral_velocity_column();
        self.data.slice_mut(s![.., .., col])
    }

    pub fn velocities_wz(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., .., self.layout.wz])
    }

    pub fn velocities_wz_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.data.slice_mut(s![.., .., self.layout.wz])
    }

    /// Time-delta column, shape `[batch, horizon]`.
    pub fn time_intervals(&self) -> ArrayView2<'_, f32> {
        self.data.slice(s![.., .., self.layout.dt])
    }

    /// Broadcast the measured robot twist into the first velocity row of
    /// every batch element.
    pub fn set_initial_velocities(&mut self, twist: &Twist) {
        self.data
            .slice_mut(s![.., 0_usize, self.layout.vx])
            .fill(twist.linear.x);
        if let Some(vy) = self.layout.vy {
            self.data
                .slice_mut(s![.., 0_usize, vy])
                .fill(twist.linear.y);
        }
        self.data
            .slice_mut(s![.., 0_usize, self.layout.wz])
            .fill(twist.angular.z);
    }

    /// Roll velocities forward through the motion model: row t+1's velocity
    /// slice is the model step applied to row t. Row 0 is left untouched
    /// (it holds the measured twist).
    pub fn propagate(&mut self) {
        let layout = self.layout;
        let model = self.model;
        let horizon = self.horizon();
        for t in 0..horizon.saturating_sub(1) {
            let (rows, mut next) = self
                .data
                .multi_slice_mut((s![.., t, ..], s![.., t + 1, layout.velocity_range()]));
            model.step(&rows.view(), &mut next, &layout);
        }
    }

    fn lateral_control_column(&self) -> usize {
        self.layout
            .control_vy
            .expect("lateral command column requires a holonomic motion model")
    }

    fn lateral_velocity_column(&self) -> usize {
        self.layout
            .vy
            .expect("lateral velocity column requires a holonomic motion model")
    }
}
