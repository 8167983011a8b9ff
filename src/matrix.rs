use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::geometry::{index_coord, Point, Size};

/// A dense, mutable 2D grid addressed by [`Point`].
///
/// Cells are stored row-major and populated once at construction. Points
/// must have non-negative integer coordinates inside the grid; anything
/// else is rejected with [`MatrixError::OutOfBounds`] by the checked
/// accessors and panics through `Index`/`IndexMut`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    size: Size,
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a grid over `size`, calling `create` once per point in
    /// row-major order (`y` outer, `x` inner).
    pub fn new<F>(size: Size, create: F) -> Self
    where
        F: FnMut(Point) -> T,
    {
        let columns = size.columns();
        let rows = size.rows();
        tracing::trace!(columns, rows, "allocating matrix");
        let cells = size.points().map(create).collect();
        Self {
            size,
            columns,
            rows,
            cells,
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the element at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if `p` is not a grid point.
    pub fn get(&self, p: Point) -> Result<&T> {
        let i = self.offset(p)?;
        Ok(&self.cells[i])
    }

    /// Returns a mutable reference to the element at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if `p` is not a grid point.
    pub fn get_mut(&mut self, p: Point) -> Result<&mut T> {
        let i = self.offset(p)?;
        Ok(&mut self.cells[i])
    }

    /// Replaces the element at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfBounds`] if `p` is not a grid point.
    pub fn set(&mut self, p: Point, elem: T) -> Result<()> {
        *self.get_mut(p)? = elem;
        Ok(())
    }

    /// Iterates over `(point, element)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.size.points().zip(self.cells.iter())
    }

    /// Calls `f` with every point and its current element, in the same
    /// order as [`Size::for_each`].
    pub fn for_each<F: FnMut(Point, &T)>(&self, mut f: F) {
        for (p, elem) in self.iter() {
            f(p, elem);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn offset(&self, p: Point) -> std::result::Result<usize, MatrixError> {
        let out_of_bounds = MatrixError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.columns,
            height: self.rows,
        };
        if !(p.x >= 0.0 && p.y >= 0.0) || p.x.fract() > 0.0 || p.y.fract() > 0.0 {
            return Err(out_of_bounds);
        }
        if p.x >= index_coord(self.columns) || p.y >= index_coord(self.rows) {
            return Err(out_of_bounds);
        }
        Ok(p.y as usize * self.columns + p.x as usize)
    }
}

impl<T> Index<Point> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `p` is not a grid point.
    fn index(&self, p: Point) -> &T {
        match self.offset(p) {
            Ok(i) => &self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<Point> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if `p` is not a grid point.
    fn index_mut(&mut self, p: Point) -> &mut T {
        match self.offset(p) {
            Ok(i) => &mut self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}
