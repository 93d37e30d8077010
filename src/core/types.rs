//! Message types exchanged with the host process.
//!
//! These mirror the stamped geometry messages the host publishes and
//! consumes: a pose with quaternion orientation, a velocity twist, and an
//! ordered path of stamped poses whose last element is the goal.
//!
//! Coordinate system: ROS REP-103 (X forward, Y left, yaw CCW from +X).

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;

/// Frame and timestamp attached to stamped messages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Time in seconds since the host epoch
    pub stamp: f64,
    /// Coordinate frame the data is expressed in
    pub frame_id: String,
}

impl Header {
    /// Create a header with the given stamp and frame.
    pub fn new(stamp: f64, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

/// Position in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Orientation quaternion.
///
/// Only the yaw component is meaningful for a planar robot; the conversion
/// helpers below assume roll = pitch = 0 when constructing, but extract yaw
/// correctly from a full quaternion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Identity rotation (yaw = 0).
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// Pure yaw rotation about +Z.
    #[inline]
    pub fn from_yaw(yaw: f32) -> Self {
        let half = yaw * 0.5;
        Self {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        }
    }

    /// Extract the yaw angle in [-π, π).
    #[inline]
    pub fn yaw(&self) -> f32 {
        let siny_cosp = 2.0 * (self.w * self.z + self.x * self.y);
        let cosy_cosp = 1.0 - 2.0 * (self.y * self.y + self.z * self.z);
        normalize_angle(siny_cosp.atan2(cosy_cosp))
    }
}

/// Position + orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point3,
    pub orientation: Quaternion,
}

/// Pose with frame and timestamp.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseStamped {
    pub header: Header,
    pub pose: Pose,
}

impl PoseStamped {
    /// Create a planar stamped pose from (x, y, yaw).
    pub fn from_xy_yaw(x: f32, y: f32, yaw: f32) -> Self {
        Self {
            header: Header::default(),
            pose: Pose {
                position: Point3::new(x, y, 0.0),
                orientation: Quaternion::from_yaw(yaw),
            },
        }
    }

    /// Yaw of the pose orientation.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.pose.orientation.yaw()
    }
}

/// 3D vector, used for twist components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Robot velocity: linear (x, y, z) and angular (x, y, z).
///
/// The controller reads `linear.x`, `linear.y` (holonomic models only) and
/// `angular.z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

impl Twist {
    /// Planar twist from (vx, vy, wz).
    pub fn from_components(vx: f32, vy: f32, wz: f32) -> Self {
        Self {
            linear: Vector3::new(vx, vy, 0.0),
            angular: Vector3::new(0.0, 0.0, wz),
        }
    }
}

/// Twist with frame and timestamp, the controller output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TwistStamped {
    pub header: Header,
    pub twist: Twist,
}

/// Ordered sequence of stamped poses; the last element is the goal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub header: Header,
    pub poses: Vec<PoseStamped>,
}

impl Path {
    /// Build a path from planar (x, y, yaw) waypoints.
    pub fn from_waypoints(waypoints: &[(f32, f32, f32)]) -> Self {
        Self {
            header: Header::default(),
            poses: waypoints
                .iter()
                .map(|&(x, y, yaw)| PoseStamped::from_xy_yaw(x, y, yaw))
                .collect(),
        }
    }

    /// The goal pose, if the path is non-empty.
    #[inline]
    pub fn goal(&self) -> Option<&PoseStamped> {
        self.poses.last()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }
}
