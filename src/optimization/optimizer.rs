//! The sampling optimizer: noised rollouts, critic scoring and the softmax
//! update of the nominal control sequence.
//!
//! One `eval_control` call runs a fixed number of iterations. Every
//! iteration samples a batch of perturbed control sequences around the
//! nominal one, rolls them through the kinematic model into world-frame
//! trajectories, scores the batch, and rewrites the nominal sequence as the
//! softmax-weighted average of the batch. The first row of the nominal
//! sequence becomes the command.
//!
//! The batch reductions run sequentially, so for a fixed sampling seed the
//! emitted command is bitwise reproducible.

use log::{debug, info, warn};
use ndarray::{azip, s, Array1, Array2, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};

use crate::config::GatiConfig;
use crate::core::{Header, Path, PoseStamped, Twist, TwistStamped};
use crate::costmap::SharedCostmap;
use crate::critics::CriticScorer;
use crate::error::{GatiError, Result};
use crate::motion::MotionModel;

use super::noise::NoiseGenerator;
use super::state::StateBatches;

/// Receding-horizon sampling controller.
pub struct Optimizer {
    config: GatiConfig,
    motion_model: MotionModel,
    state: StateBatches,
    control_sequence: Array2<f32>,
    generated_trajectories: Array3<f32>,
    costs: Array1<f32>,
    iteration_mean_costs: Vec<f32>,
    noise: NoiseGenerator,
    scorer: CriticScorer,
    costmap: SharedCostmap,
    active: bool,
}

impl Optimizer {
    /// Configure a controller against a cost grid.
    ///
    /// Fails on invalid numeric parameters, an unknown motion model name or
    /// an unknown critic name; the caller retries with a fixed
    /// configuration.
    pub fn new(config: GatiConfig, costmap: SharedCostmap) -> Result<Self> {
        config.validate()?;
        let motion_model = MotionModel::parse(&config.controller.motion_model)?;
        let scorer = CriticScorer::from_config(&config.critics, &costmap)?;
        let noise = NoiseGenerator::new(config.controller.seed);

        let mut optimizer = Self {
            motion_model,
            state: StateBatches::new(motion_model),
            control_sequence: Array2::zeros((0, 0)),
            generated_trajectories: Array3::zeros((0, 0, 3)),
            costs: Array1::zeros(0),
            iteration_mean_costs: Vec::new(),
            noise,
            scorer,
            costmap,
            config,
            active: false,
        };
        optimizer.reset();

        let c = &optimizer.config.controller;
        info!(
            "Optimizer configured: model '{}', batch {} x horizon {} @ {:.3}s, {} iterations",
            optimizer.motion_model.name(),
            c.batch_size,
            c.time_steps,
            c.model_dt,
            c.iteration_count
        );
        Ok(optimizer)
    }

    /// Apply a new configuration.
    ///
    /// An unknown motion model name keeps the previous selection with a
    /// warning; everything else behaves like [`new`](Self::new). Resets the
    /// warm start.
    pub fn reconfigure(&mut self, config: GatiConfig) -> Result<()> {
        config.validate()?;
        match MotionModel::parse(&config.controller.motion_model) {
            Ok(model) => {
                if model != self.motion_model {
                    self.motion_model = model;
                    self.state.set_layout(model);
                }
            }
            Err(_) => warn!(
                "Motion model '{}' is unknown, keeping '{}'",
                config.controller.motion_model,
                self.motion_model.name()
            ),
        }
        self.scorer = CriticScorer::from_config(&config.critics, &self.costmap)?;
        self.noise = NoiseGenerator::new(config.controller.seed);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Zero the nominal sequence and reshape every tensor to the configured
    /// batch and horizon.
    pub fn reset(&mut self) {
        let c = &self.config.controller;
        let (batch, horizon) = (c.batch_size, c.time_steps);
        self.state.reset(batch, horizon, c.model_dt);

        let control_dim = self.state.layout().control_dim;
        if self.control_sequence.dim() != (horizon, control_dim) {
            self.control_sequence = Array2::zeros((horizon, control_dim));
        } else {
            self.control_sequence.fill(0.0);
        }
        if self.generated_trajectories.dim() != (batch, horizon, 3) {
            self.generated_trajectories = Array3::zeros((batch, horizon, 3));
        } else {
            self.generated_trajectories.fill(0.0);
        }
        if self.costs.len() != batch {
            self.costs = Array1::zeros(batch);
        } else {
            self.costs.fill(0.0);
        }
        self.iteration_mean_costs.clear();
    }

    pub fn activate(&mut self) {
        self.active = true;
        debug!("Optimizer activated");
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        debug!("Optimizer deactivated");
    }

    /// Drop transient per-tick data; the controller must be re-activated
    /// before the next use.
    pub fn cleanup(&mut self) {
        self.deactivate();
        self.reset();
        debug!("Optimizer cleaned up");
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn motion_model(&self) -> MotionModel {
        self.motion_model
    }

    #[inline]
    pub fn config(&self) -> &GatiConfig {
        &self.config
    }

    /// Compute the next command for the current pose, speed and plan.
    pub fn eval_control(
        &mut self,
        robot_pose: &PoseStamped,
        robot_speed: &Twist,
        path: &Path,
    ) -> Result<TwistStamped> {
        let goal = path.goal().ok_or(GatiError::EmptyPath)?;
        if self
            .costmap
            .world_to_grid(goal.pose.position.x, goal.pose.position.y)
            .is_none()
        {
            warn!(
                "Goal pose ({:.2}, {:.2}) lies outside the cost grid",
                goal.pose.position.x, goal.pose.position.y
            );
        }

        self.iteration_mean_costs.clear();
        for _ in 0..self.config.controller.iteration_count {
            self.generate_noised_trajectories(robot_pose, robot_speed);
            self.scorer.score(
                robot_pose,
                self.generated_trajectories.view(),
                path,
                &mut self.costs,
            );
            self.iteration_mean_costs
                .push(self.costs.mean().unwrap_or(0.0));
            self.update_control_sequence();
        }

        Ok(self.control_from_sequence(path.header.stamp))
    }

    /// Trajectories generated by the last iteration, shape
    /// `[batch, horizon, 3]` with columns (x, y, yaw).
    pub fn generated_trajectories(&self) -> ArrayView3<'_, f32> {
        self.generated_trajectories.view()
    }

    /// Sampled controls of the last iteration, shape
    /// `[batch, horizon, control_dim]`.
    pub fn control_batches(&self) -> ArrayView3<'_, f32> {
        self.state.controls()
    }

    /// Costs of the last scored batch.
    pub fn costs(&self) -> ArrayView1<'_, f32> {
        self.costs.view()
    }

    /// Nominal control sequence, shape `[horizon, control_dim]`.
    pub fn nominal_control_sequence(&self) -> ArrayView2<'_, f32> {
        self.control_sequence.view()
    }

    /// Mean batch cost per iteration of the last `eval_control` call.
    pub fn iteration_mean_costs(&self) -> &[f32] {
        &self.iteration_mean_costs
    }

    /// Integrate the nominal control sequence alone into a world-frame
    /// trajectory, shape `[horizon, 3]`. Debug aid for publishing the plan
    /// the controller is currently committed to.
    pub fn nominal_trajectory(
        &self,
        robot_pose: &PoseStamped,
        robot_speed: &Twist,
    ) -> Array2<f32> {
        let c = &self.config.controller;
        let mut state = StateBatches::new(self.motion_model);
        state.reset(1, c.time_steps, c.model_dt);
        state.controls_mut().assign(&self.control_sequence);
        state.set_initial_velocities(robot_speed);
        state.propagate();

        let mut out = Array3::zeros((1, c.time_steps, 3));
        integrate_state(&state, robot_pose, self.motion_model, &mut out);
        out.index_axis_move(Axis(0), 0)
    }

    /// Sample perturbed controls, clip them, and roll them into world-frame
    /// trajectories.
    fn generate_noised_trajectories(&mut self, robot_pose: &PoseStamped, robot_speed: &Twist) {
        self.sample_noised_controls();
        self.apply_control_constraints();
        self.state.set_initial_velocities(robot_speed);
        self.state.propagate();
        integrate_state(
            &self.state,
            robot_pose,
            self.motion_model,
            &mut self.generated_trajectories,
        );
    }

    /// Controls become nominal sequence plus per-column Gaussian noise.
    fn sample_noised_controls(&mut self) {
        let (vx_std, vy_std, wz_std) = {
            let c = &self.config.controller;
            (c.vx_std, c.vy_std, c.wz_std)
        };

        {
            let mut vx = self.state.controls_vx_mut();
            self.noise.fill_gaussian(&mut vx, vx_std);
        }
        if self.motion_model.is_holonomic() {
            let mut vy = self.state.controls_vy_mut();
            self.noise.fill_gaussian(&mut vy, vy_std);
        }
        {
            let mut wz = self.state.controls_wz_mut();
            self.noise.fill_gaussian(&mut wz, wz_std);
        }

        let mut controls = self.state.controls_mut();
        controls += &self.control_sequence;
    }

    /// Clamp every control column to its limit; Ackermann additionally
    /// couples wz to vx through the minimum turning radius.
    fn apply_control_constraints(&mut self) {
        let (vx_max, vy_max, wz_max, min_radius) = {
            let c = &self.config.controller;
            (c.vx_max, c.vy_max, c.wz_max, c.min_turning_radius)
        };

        {
            let mut vx = self.state.controls_vx_mut();
            vx.mapv_inplace(|v| v.clamp(-vx_max, vx_max));
        }
        if self.motion_model.is_holonomic() {
            let mut vy = self.state.controls_vy_mut();
            vy.mapv_inplace(|v| v.clamp(-vy_max, vy_max));
        }
        {
            let mut wz = self.state.controls_wz_mut();
            wz.mapv_inplace(|v| v.clamp(-wz_max, wz_max));
        }

        if self.motion_model == MotionModel::Ackermann {
            let (vx, mut wz) = self.state.controls_vx_wz_mut();
            azip!((&v in &vx, w in &mut wz) {
                let bound = v.abs() / min_radius;
                *w = w.clamp(-bound, bound);
            });
        }
    }

    /// Rewrite the nominal sequence as the softmax-weighted batch average.
    fn update_control_sequence(&mut self) {
        let temperature = self.config.controller.temperature;

        let min_cost = self.costs.fold(f32::INFINITY, |acc, &c| acc.min(c));
        let mut weights = self.costs.mapv(|c| (-(c - min_cost) / temperature).exp());
        let total: f32 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            warn!("Degenerate softmax normalization ({total}); keeping previous sequence");
            return;
        }
        weights /= total;

        let controls = self.state.controls();
        self.control_sequence.fill(0.0);
        for (b, &w) in weights.iter().enumerate() {
            self.control_sequence
                .scaled_add(w, &controls.index_axis(Axis(0), b));
        }
    }

    /// Package the first nominal row as a stamped twist in the base frame.
    fn control_from_sequence(&self, stamp: f64) -> TwistStamped {
        let layout = self.state.layout();
        let vx = self.control_sequence[[0, layout.control_vx]];
        let wz = self.control_sequence[[0, layout.control_wz]];
        let vy = layout
            .control_vy
            .map(|col| self.control_sequence[[0, col]])
            .unwrap_or(0.0);

        TwistStamped {
            header: Header::new(stamp, self.config.controller.base_frame.clone()),
            twist: Twist::from_components(vx, vy, wz),
        }
    }
}

/// Integrate propagated velocities into world-frame (x, y, yaw) samples.
///
/// Yaw is the cumulative sum of wz * dt on top of the initial heading; the
/// translation of each step uses the heading at the *start* of the step
/// (the yaw column shifted right by one, with the initial heading first).
/// The emitted yaw column is the post-step yaw.
fn integrate_state(
    state: &StateBatches,
    robot_pose: &PoseStamped,
    model: MotionModel,
    out: &mut Array3<f32>,
) {
    let x0 = robot_pose.pose.position.x;
    let y0 = robot_pose.pose.position.y;
    let yaw0 = robot_pose.yaw();

    let dts = state.time_intervals();
    let wz = state.velocities_wz();

    let mut yaw = &wz * &dts;
    yaw.accumulate_axis_inplace(Axis(1), |&prev, cur| *cur += prev);
    yaw += yaw0;

    let mut yaw_offset = yaw.clone();
    yaw_offset
        .slice_mut(s![.., 1..])
        .assign(&yaw.slice(s![.., ..-1]));
    yaw_offset.slice_mut(s![.., 0]).fill(yaw0);

    let yaw_cos = yaw_offset.mapv(f32::cos);
    let yaw_sin = yaw_offset.mapv(f32::sin);

    let vx = state.velocities_vx();
    let mut dx = &vx * &yaw_cos;
    let mut dy = &vx * &yaw_sin;
    if model.is_holonomic() {
        let vy = state.velocities_vy();
        dx = dx - &vy * &yaw_sin;
        dy = dy + &vy * &yaw_cos;
    }

    let mut x = &dx * &dts;
    x.accumulate_axis_inplace(Axis(1), |&prev, cur| *cur += prev);
    x += x0;
    let mut y = &dy * &dts;
    y.accumulate_axis_inplace(Axis(1), |&prev, cur| *cur += prev);
    y += y0;

    out.slice_mut(s![.., .., 0]).assign(&x);
    out.slice_mut(s![.., .., 1]).assign(&y);
    out.slice_mut(s![.., .., 2]).assign(&yaw);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ControllerConfig, CriticsConfig};
    use crate::costmap::GridCostmap;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;
    use std::sync::Arc;

    fn empty_costmap() -> SharedCostmap {
        Arc::new(GridCostmap::new(80, 80, 0.05, -2.0, -2.0))
    }

    fn small_config() -> GatiConfig {
        GatiConfig {
            controller: ControllerConfig {
                batch_size: 32,
                time_steps: 8,
                seed: 42,
                ..ControllerConfig::default()
            },
            critics: CriticsConfig::default(),
        }
    }

    fn straight_path() -> Path {
        let mut path = Path::from_waypoints(&[
            (0.0, 0.0, 0.0),
            (0.5, 0.0, 0.0),
            (1.0, 0.0, 0.0),
        ]);
        path.header.stamp = 4.5;
        path
    }

    #[test]
    fn test_integration_straight_line() {
        let mut state = StateBatches::new(MotionModel::Differential);
        state.reset(2, 5, 0.1);
        state.velocities_vx_mut().fill(0.3);

        let pose = PoseStamped::from_xy_yaw(1.0, 2.0, 0.0);
        let mut out = Array3::zeros((2, 5, 3));
        integrate_state(&state, &pose, MotionModel::Differential, &mut out);

        for b in 0..2 {
            for t in 0..5 {
                assert_relative_eq!(
                    out[[b, t, 0]],
                    1.0 + 0.3 * 0.1 * (t + 1) as f32,
                    epsilon = 1e-5
                );
                assert_relative_eq!(out[[b, t, 1]], 2.0, epsilon = 1e-5);
                assert_relative_eq!(out[[b, t, 2]], 0.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_integration_uses_start_of_step_heading() {
        let mut state = StateBatches::new(MotionModel::Differential);
        state.reset(1, 4, 0.1);
        state.velocities_vx_mut().fill(0.5);
        state.velocities_wz_mut().fill(1.0);

        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, FRAC_PI_2);
        let mut out = Array3::zeros((1, 4, 3));
        integrate_state(&state, &pose, MotionModel::Differential, &mut out);

        // First step translates along the initial heading (+Y), while the
        // emitted yaw already includes the first rotation increment.
        assert_relative_eq!(out[[0, 0, 0]], 0.0, epsilon = 1e-5);
        assert_relative_eq!(out[[0, 0, 1]], 0.05, epsilon = 1e-5);
        assert_relative_eq!(out[[0, 0, 2]], FRAC_PI_2 + 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_integration_lateral_velocity() {
        let mut state = StateBatches::new(MotionModel::Omnidirectional);
        state.reset(1, 3, 0.1);
        state.velocities_vy_mut().fill(0.4);

        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        let mut out = Array3::zeros((1, 3, 3));
        integrate_state(&state, &pose, MotionModel::Omnidirectional, &mut out);

        // Pure vy at yaw 0 moves along +Y
        for t in 0..3 {
            assert_relative_eq!(out[[0, t, 0]], 0.0, epsilon = 1e-5);
            assert_relative_eq!(out[[0, t, 1]], 0.4 * 0.1 * (t + 1) as f32, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_shapes_are_stable() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        let speed = Twist::default();

        for _ in 0..3 {
            optimizer.eval_control(&pose, &speed, &straight_path()).unwrap();
            assert_eq!(optimizer.generated_trajectories().shape(), &[32, 8, 3]);
            assert_eq!(optimizer.costs().len(), 32);
            assert_eq!(optimizer.nominal_control_sequence().shape(), &[8, 2]);
        }
    }

    #[test]
    fn test_controls_respect_limits() {
        let mut config = small_config();
        config.controller.vx_max = 0.2;
        config.controller.wz_max = 0.3;
        config.controller.vx_std = 0.5;
        config.controller.wz_std = 0.8;
        let mut optimizer = Optimizer::new(config, empty_costmap()).unwrap();

        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();

        let controls = optimizer.control_batches();
        for b in 0..32 {
            for t in 0..8 {
                assert!(controls[[b, t, 0]].abs() <= 0.2 + 1e-6);
                assert!(controls[[b, t, 1]].abs() <= 0.3 + 1e-6);
            }
        }
    }

    #[test]
    fn test_ackermann_curvature_constraint() {
        let mut config = small_config();
        config.controller.motion_model = "ackermann".to_string();
        config.controller.min_turning_radius = 0.5;
        config.controller.wz_std = 1.0;
        let mut optimizer = Optimizer::new(config, empty_costmap()).unwrap();

        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();

        let controls = optimizer.control_batches();
        for b in 0..32 {
            for t in 0..8 {
                let vx = controls[[b, t, 0]];
                let wz = controls[[b, t, 1]];
                assert!(wz.abs() <= vx.abs() / 0.5 + 1e-5);
            }
        }
    }

    #[test]
    fn test_zero_cost_collapses_to_batch_mean() {
        let mut config = small_config();
        config.critics.names = vec![];
        let mut optimizer = Optimizer::new(config, empty_costmap()).unwrap();

        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();

        let mean = optimizer
            .control_batches()
            .mean_axis(Axis(0))
            .expect("non-empty batch");
        let sequence = optimizer.nominal_control_sequence();
        for t in 0..8 {
            for c in 0..2 {
                assert_relative_eq!(sequence[[t, c]], mean[[t, c]], epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_vanishing_temperature_is_greedy() {
        let mut config = small_config();
        config.controller.temperature = 1e-6;
        config.controller.iteration_count = 1;
        config.critics.names = vec!["GoalCritic".to_string()];
        let mut optimizer = Optimizer::new(config, empty_costmap()).unwrap();

        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();

        let costs = optimizer.costs();
        let best = costs
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(b, _)| b)
            .unwrap();

        let controls = optimizer.control_batches();
        let sequence = optimizer.nominal_control_sequence();
        for t in 0..8 {
            for c in 0..2 {
                assert_relative_eq!(
                    sequence[[t, c]],
                    controls[[best, t, c]],
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn test_softmax_weights_form_convex_combination() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();

        // Every nominal entry lies within the sampled batch envelope
        let controls = optimizer.control_batches();
        let sequence = optimizer.nominal_control_sequence();
        for t in 0..8 {
            for c in 0..2 {
                let column = controls.slice(s![.., t, c]);
                let lo = column.fold(f32::INFINITY, |a, &v| a.min(v));
                let hi = column.fold(f32::NEG_INFINITY, |a, &v| a.max(v));
                assert!(sequence[[t, c]] >= lo - 1e-5);
                assert!(sequence[[t, c]] <= hi + 1e-5);
            }
        }
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        let result = optimizer.eval_control(&pose, &Twist::default(), &Path::default());
        assert!(matches!(result, Err(GatiError::EmptyPath)));
    }

    #[test]
    fn test_unknown_model_rejected_at_configure() {
        let mut config = small_config();
        config.controller.motion_model = "hover".to_string();
        let result = Optimizer::new(config, empty_costmap());
        assert!(matches!(result, Err(GatiError::UnknownMotionModel(_))));
    }

    #[test]
    fn test_reconfigure_keeps_model_on_unknown_name() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        assert_eq!(optimizer.motion_model(), MotionModel::Differential);

        let mut config = small_config();
        config.controller.motion_model = "hover".to_string();
        optimizer.reconfigure(config).unwrap();

        assert_eq!(optimizer.motion_model(), MotionModel::Differential);
    }

    #[test]
    fn test_reconfigure_switches_model() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();

        let mut config = small_config();
        config.controller.motion_model = "omni".to_string();
        optimizer.reconfigure(config).unwrap();

        assert_eq!(optimizer.motion_model(), MotionModel::Omnidirectional);
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();
        // Holonomic layout has three control columns
        assert_eq!(optimizer.nominal_control_sequence().shape(), &[8, 3]);
    }

    #[test]
    fn test_reset_zeroes_warm_start() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();
        assert!(optimizer
            .nominal_control_sequence()
            .iter()
            .any(|&v| v != 0.0));

        optimizer.reset();
        assert!(optimizer
            .nominal_control_sequence()
            .iter()
            .all(|&v| v == 0.0));
    }

    #[test]
    fn test_command_carries_path_stamp_and_base_frame() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        let command = optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();
        assert_eq!(command.header.stamp, 4.5);
        assert_eq!(command.header.frame_id, "base_link");
    }

    #[test]
    fn test_nominal_trajectory_matches_horizon() {
        let mut optimizer = Optimizer::new(small_config(), empty_costmap()).unwrap();
        let pose = PoseStamped::from_xy_yaw(0.0, 0.0, 0.0);
        optimizer
            .eval_control(&pose, &Twist::default(), &straight_path())
            .unwrap();

        let trajectory = optimizer.nominal_trajectory(&pose, &Twist::default());
        assert_eq!(trajectory.shape(), &[8, 3]);
        // The committed plan should make forward progress toward the goal
        assert!(trajectory[[7, 0]] > 0.0);
    }
}
