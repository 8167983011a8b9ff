use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;

use super::Point;
use crate::math::angle::{normalize_angle, PI};
use crate::math::{eq_eps, FixedFormat, Vector2, EPSILON};

/// A 2D vector holding both its Cartesian `(x, y)` and Polar `(r, theta)`
/// coordinates.
///
/// Both forms are computed once at construction from whichever was
/// supplied, and the value is immutable afterwards. The provenance flag
/// records which form was authoritative; it only affects [`vector_equals`].
///
/// Polar coordinates are taken as given: `r` may be negative and `theta`
/// is not normalized. Cartesian construction yields `r >= 0` and
/// `theta = atan2(y, x)` in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
    r: f64,
    theta: f64,
    cartesian: bool,
}

/// The zero vector, Cartesian `(0, 0)`.
pub const ZERO_VECTOR: Vector = Vector::ZERO;

#[allow(clippy::should_implement_trait)]
impl Vector {
    /// The zero vector, Cartesian `(0, 0)`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        r: 0.0,
        theta: 0.0,
        cartesian: true,
    };

    /// Creates a vector from Cartesian coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            r: (x * x + y * y).sqrt(),
            theta: y.atan2(x),
            cartesian: true,
        }
    }

    /// Creates a vector from a radius and an angle in radians.
    #[must_use]
    pub fn polar(r: f64, theta: f64) -> Self {
        Self {
            x: r * theta.cos(),
            y: r * theta.sin(),
            r,
            theta,
            cartesian: false,
        }
    }

    /// Creates a vector from `(x, y)` if `cartesian`, otherwise from `(r, theta)`.
    #[must_use]
    pub fn with_mode(a: f64, b: f64, cartesian: bool) -> Self {
        if cartesian {
            Self::new(a, b)
        } else {
            Self::polar(a, b)
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Polar radius as stored. Negative after scaling by a negative factor.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Polar angle as stored.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Whether the vector was constructed from Cartesian coordinates.
    #[must_use]
    pub fn is_cartesian(&self) -> bool {
        self.cartesian
    }

    #[must_use]
    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    #[must_use]
    pub fn subtract(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    /// Scales the radius by `s`, keeping the angle.
    ///
    /// The result is Polar with radius `r * s`; a negative `s` yields a
    /// negative radius rather than a rotated angle.
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self::polar(self.r * s, self.theta)
    }

    /// Magnitude, `|r|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.r.abs()
    }

    /// The stored angle, without renormalization.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.theta
    }

    #[must_use]
    pub fn dot(&self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// A Polar vector of length `d` in the same direction.
    ///
    /// The zero vector has angle `atan2(0, 0) = 0`, so it normalizes to
    /// `(d, 0)`.
    #[must_use]
    pub fn normalize(self, d: f64) -> Self {
        Self::polar(d, self.theta)
    }

    /// A Polar unit vector in the same direction.
    #[must_use]
    pub fn unit(self) -> Self {
        self.normalize(1.0)
    }

    /// Tolerant equality with [`EPSILON`]. See [`vector_equals_eps`].
    #[must_use]
    pub fn equals(self, v: Self) -> bool {
        vector_equals(self, v)
    }

    /// Tolerant equality with tolerance `e`. See [`vector_equals_eps`].
    #[must_use]
    pub fn equals_eps(self, v: Self, e: f64) -> bool {
        vector_equals_eps(self, v, e)
    }

    /// Renders as `[x, y]` with each component formatted by `format`.
    #[must_use]
    pub fn format_with(&self, format: FixedFormat) -> String {
        format!("[{}, {}]", format.format(self.x), format.format(self.y))
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        from_point(p)
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(FixedFormat::default()))
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        vector_equals_eps(*self, *other, epsilon)
    }
}

/// Creates a vector from Polar coordinates.
#[must_use]
pub fn from_polar(r: f64, theta: f64) -> Vector {
    Vector::polar(r, theta)
}

/// Creates a Cartesian vector from any point-like value.
#[must_use]
pub fn from_point(p: impl Into<Point>) -> Vector {
    let p = p.into();
    Vector::new(p.x, p.y)
}

/// All integer-offset Cartesian vectors in the square of radius `d`
/// around `v`, `v` itself included, in row-major order.
#[must_use]
pub fn neighbors(v: Vector, d: u32) -> Vec<Vector> {
    let mut out = Vec::with_capacity(neighbor_count(d));
    let d = i64::from(d);
    for dy in -d..=d {
        for dx in -d..=d {
            out.push(Vector::new(v.x + offset(dx), v.y + offset(dy)));
        }
    }
    out
}

/// Number of points in the square of radius `d`, or 0 if that overflows.
fn neighbor_count(d: u32) -> usize {
    usize::try_from(2 * u64::from(d) + 1)
        .ok()
        .and_then(|side| side.checked_mul(side))
        .unwrap_or(0)
}

#[allow(clippy::cast_precision_loss)]
fn offset(i: i64) -> f64 {
    i as f64
}

/// Absolute difference of the two angles after normalizing each to
/// `[0, 2π)`. Not folded into `[0, π]`.
#[must_use]
pub fn angle_between(v0: Vector, v1: Vector) -> f64 {
    (normalize_angle(v0.theta) - normalize_angle(v1.theta)).abs()
}

/// Scalar 2D cross product, `x0 * y1 - y0 * x1`.
#[must_use]
pub fn cross(v0: Vector, v1: Vector) -> f64 {
    v0.x * v1.y - v0.y * v1.x
}

/// Rotates `v` by `theta` in Polar space. The resulting angle is not
/// normalized.
#[must_use]
pub fn rotate(v: Vector, theta: f64) -> Vector {
    from_polar(v.r, v.theta + theta)
}

/// Adds `v1` to `v0`, accumulating magnitude along `v0`'s direction when
/// the two are collinear.
///
/// - Same direction: Polar `(r0 + r1, theta0)`.
/// - Opposite direction: Polar `(r0 - r1, theta0)`.
/// - Otherwise: ordinary Cartesian sum.
#[must_use]
pub fn add_integrating(v0: Vector, v1: Vector) -> Vector {
    let theta_diff = angle_between(v0, v1);
    if theta_diff < EPSILON {
        tracing::trace!(theta_diff, "integrating parallel vectors");
        Vector::polar(v0.r + v1.r, v0.theta)
    } else if eq_eps(theta_diff, PI, EPSILON) {
        tracing::trace!(theta_diff, "integrating opposing vectors");
        Vector::polar(v0.r - v1.r, v0.theta)
    } else {
        Vector::new(v0.x + v1.x, v0.y + v1.y)
    }
}

/// Tolerant equality with [`EPSILON`]. See [`vector_equals_eps`].
#[must_use]
pub fn vector_equals(v0: Vector, v1: Vector) -> bool {
    vector_equals_eps(v0, v1, EPSILON)
}

/// Tolerant equality with tolerance `e`.
///
/// When both vectors share a provenance only their authoritative fields
/// are compared: `(x, y)` for Cartesian, `(r, theta)` for Polar. Mixed
/// provenance compares all four fields.
#[must_use]
pub fn vector_equals_eps(v0: Vector, v1: Vector, e: f64) -> bool {
    match (v0.cartesian, v1.cartesian) {
        (true, true) => eq_eps(v0.x, v1.x, e) && eq_eps(v0.y, v1.y, e),
        (false, false) => eq_eps(v0.r, v1.r, e) && eq_eps(v0.theta, v1.theta, e),
        _ => {
            eq_eps(v0.r, v1.r, e)
                && eq_eps(v0.theta, v1.theta, e)
                && eq_eps(v0.x, v1.x, e)
                && eq_eps(v0.y, v1.y, e)
        }
    }
}
