use std::fmt;

use super::Point;

/// Width and height of a grid or rectangle.
///
/// Both components are expected to be non-negative. Enumeration visits the
/// integer points `0 <= x < width`, `0 <= y < height`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// The empty size.
pub const ZERO_SIZE: Size = Size::ZERO;

impl Size {
    /// The empty size, `[0, 0]`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square size with `height == width`.
    #[must_use]
    pub const fn square(width: f64) -> Self {
        Self::new(width, width)
    }

    /// Number of integer columns, `x` in `0..width`.
    #[must_use]
    pub fn columns(&self) -> usize {
        extent(self.width)
    }

    /// Number of integer rows, `y` in `0..height`.
    #[must_use]
    pub fn rows(&self) -> usize {
        extent(self.height)
    }

    /// Iterates over every integer point in row-major order
    /// (`y` outer, `x` inner).
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |y| {
            (0..columns).map(move |x| Point::new(index_coord(x), index_coord(y)))
        })
    }

    /// Calls `f` once for every integer point, in row-major order.
    pub fn for_each<F: FnMut(Point)>(&self, f: F) {
        self.points().for_each(f);
    }

    /// Half-open containment: low edges included, high edges excluded.
    #[must_use]
    pub fn within(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns -0.0 into 0.0.
        write!(f, "[{}, {}]", self.width + 0.0, self.height + 0.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn extent(v: f64) -> usize {
    if v > 0.0 {
        v.ceil() as usize
    } else {
        0
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn index_coord(i: usize) -> f64 {
    i as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_defaults_height_to_width() {
        assert_eq!(Size::square(4.0), Size::new(4.0, 4.0));
    }

    #[test]
    fn for_each_is_row_major() {
        let mut visited = Vec::new();
        Size::new(3.0, 2.0).for_each(|p| visited.push((p.x, p.y)));
        assert_eq!(
            visited,
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (2.0, 1.0),
            ]
        );
    }

    #[test]
    fn for_each_on_empty_sizes() {
        assert_eq!(ZERO_SIZE.points().count(), 0);
        assert_eq!(Size::new(3.0, 0.0).points().count(), 0);
        assert_eq!(Size::new(-2.0, 5.0).points().count(), 0);
    }

    #[test]
    fn fractional_extent_rounds_up() {
        let size = Size::new(2.5, 1.0);
        assert_eq!(size.columns(), 3);
        assert_eq!(size.points().last(), Some(Point::new(2.0, 0.0)));
    }

    #[test]
    fn within_is_half_open() {
        let size = Size::new(3.0, 2.0);
        assert!(size.within(Point::new(0.0, 0.0)));
        assert!(size.within(Point::new(2.0, 1.0)));
        assert!(size.within(Point::new(2.9, 1.9)));
        assert!(!size.within(Point::new(3.0, 0.0)));
        assert!(!size.within(Point::new(0.0, 2.0)));
        assert!(!size.within(Point::new(3.0, 2.0)));
        assert!(!size.within(Point::new(-0.1, 0.0)));
        assert!(!size.within(Point::new(0.0, -0.1)));
    }

    #[test]
    fn display() {
        assert_eq!(Size::new(3.0, 2.0).to_string(), "[3, 2]");
        assert_eq!(Size::square(1.5).to_string(), "[1.5, 1.5]");
        assert_eq!(ZERO_SIZE.to_string(), "[0, 0]");
    }

    #[test]
    fn display_drops_sign_of_negative_zero() {
        assert_eq!(Size::new(-0.0, 1.0).to_string(), "[0, 1]");
        assert_eq!(Size::new(2.0, -0.0).to_string(), "[2, 0]");
        assert_eq!(Size::new(-1.0, 1.0).to_string(), "[-1, 1]");
    }
}
