use super::{Point, Size};

/// An axis-aligned rectangle on the integer grid.
///
/// `p0` is the origin corner; `p1` is the opposite corner, always derived
/// as `p0 + (width - 1, height - 1)` so that a rectangle of size `[w, h]`
/// spans exactly `w x h` grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    p0: Point,
    size: Size,
    p1: Point,
}

impl Rectangle {
    /// Creates a rectangle from its origin corner and size.
    #[must_use]
    pub fn new(p0: Point, size: Size) -> Self {
        let p1 = p0 + Point::new(size.width - 1.0, size.height - 1.0);
        Self { p0, size, p1 }
    }

    /// The origin corner.
    #[must_use]
    pub fn p0(&self) -> Point {
        self.p0
    }

    /// The corner farthest from the origin.
    #[must_use]
    pub fn p1(&self) -> Point {
        self.p1
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Open containment: points on any of the four edges are outside.
    #[must_use]
    pub fn within(&self, p: Point) -> bool {
        p.x > self.p0.x && p.y > self.p0.y && p.x < self.p1.x && p.y < self.p1.y
    }

    /// Returns a rectangle of the same size with its origin at `p`.
    #[must_use]
    pub fn move_to(&self, p: Point) -> Self {
        Self::new(p, self.size)
    }

    /// Returns a rectangle translated by `v`.
    #[must_use]
    pub fn move_by(&self, v: impl Into<Point>) -> Self {
        self.move_to(self.p0 + v.into())
    }
}
