pub mod angle;
pub mod format;
pub mod tolerance;

pub use angle::{is_angle_between, normalize_angle, normalize_angle_signed};
pub use format::{to_fixed, FixedFormat};
pub use tolerance::{eq, eq_eps, gt, gt_eps, length, lt, lt_eps, range};

/// 2D point type used for `nalgebra` interop.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for `nalgebra` interop.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-6;
