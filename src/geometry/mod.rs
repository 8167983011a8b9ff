mod point;
mod rectangle;
mod size;
mod vector;

pub use point::Point;
pub use rectangle::Rectangle;
pub use size::{Size, ZERO_SIZE};
pub use vector::{
    add_integrating, angle_between, cross, from_point, from_polar, neighbors, rotate,
    vector_equals, vector_equals_eps, Vector, ZERO_VECTOR,
};

pub(crate) use size::index_coord;
