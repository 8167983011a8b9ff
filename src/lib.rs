pub mod error;
pub mod geometry;
pub mod math;
pub mod matrix;

pub use error::{MatrixError, PlanarError, Result};
pub use geometry::{
    add_integrating, angle_between, cross, from_point, from_polar, neighbors, rotate,
    vector_equals, vector_equals_eps, Point, Rectangle, Size, Vector, ZERO_SIZE, ZERO_VECTOR,
};
pub use math::{
    eq, eq_eps, gt, gt_eps, is_angle_between, length, lt, lt_eps, normalize_angle,
    normalize_angle_signed, range, to_fixed, FixedFormat, EPSILON,
};
pub use matrix::Matrix;
