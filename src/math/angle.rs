//! Angle constants, normalization and circular range tests.
//!
//! All angles are in radians. Nothing here renormalizes its output beyond
//! what the function name promises.

use std::f64::consts;

use super::tolerance::{gt, lt};

pub const PI: f64 = consts::PI;
pub const PI_2: f64 = consts::FRAC_PI_2;
pub const PI_3: f64 = consts::FRAC_PI_3;
pub const PI_4: f64 = consts::FRAC_PI_4;
pub const PI_5: f64 = consts::PI / 5.0;
pub const PI_6: f64 = consts::FRAC_PI_6;
pub const PI_7: f64 = consts::PI / 7.0;
pub const PI_8: f64 = consts::FRAC_PI_8;
pub const PI_16: f64 = consts::PI / 16.0;
pub const TWO_PI: f64 = consts::TAU;

/// Normalizes an angle to `[0, 2π)`.
#[must_use]
pub fn normalize_angle(theta: f64) -> f64 {
    let angle = theta % TWO_PI;
    if angle < 0.0 {
        angle + TWO_PI
    } else {
        angle
    }
}

/// Normalizes an angle to `(-π, π]`.
#[must_use]
pub fn normalize_angle_signed(theta: f64) -> f64 {
    let angle = normalize_angle(theta);
    if angle > PI {
        angle - TWO_PI
    } else {
        angle
    }
}

/// Checks whether `angle` lies on the counter-clockwise arc from `theta0`
/// to `theta1`, with tolerance at both ends.
///
/// When `theta1 <= theta0` (after normalization) the arc wraps through zero.
#[must_use]
pub fn is_angle_between(angle: f64, theta0: f64, theta1: f64) -> bool {
    let angle = normalize_angle(angle);
    let alpha0 = normalize_angle(theta0);
    let alpha1 = normalize_angle(theta1);

    if alpha1 > alpha0 {
        gt(angle, alpha0) && lt(angle, alpha1)
    } else {
        gt(angle, alpha0) || lt(angle, alpha1)
    }
}
