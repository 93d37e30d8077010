//! Foundation types: host messages and angle math.

pub mod math;
pub mod types;

pub use math::{angle_diff, normalize_angle};
pub use types::{Header, Path, Point3, Pose, PoseStamped, Quaternion, Twist, TwistStamped, Vector3};
