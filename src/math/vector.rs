//! 2D vector math.
//!
//! Angles measure counter-clockwise rotation from 0, which points straight up
//! the y-axis (toward negative y in screen coordinates). Results of
//! [`to_angle`] are always normalized to `[0, 360)`.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::math::rect::Rect;

/// A 2D vector with `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by a scalar.
    pub fn scale_by(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale_by(s)
    }
}

/// Normalize a vector so that the max component is 1.
///
/// The zero vector is returned unchanged rather than dividing by zero.
pub fn normalize(v: Vec2) -> Vec2 {
    let ms = v.x.abs().max(v.y.abs());
    if ms != 0.0 {
        Vec2::new(v.x / ms, v.y / ms)
    } else {
        v
    }
}

/// Convert a vector to degrees of counter-clockwise rotation from straight up.
///
/// Axis-aligned vectors short-circuit so the tangent never divides by zero;
/// the zero vector maps to the fixed axis angle 90. The result is rounded to
/// the nearest whole degree in `[0, 360)`.
pub fn to_angle(v: Vec2) -> f32 {
    let dx = v.x as f64;
    let dy = v.y as f64;
    if dy == 0.0 {
        return if dx > 0.0 { 270.0 } else { 90.0 };
    }
    if dx == 0.0 {
        return if dy < 0.0 { 0.0 } else { 180.0 };
    }
    let tangent = dx / dy;
    let mut angle = tangent.atan().to_degrees();
    if dy > 0.0 {
        angle += 180.0;
    } else {
        angle = (360.0 + angle) % 360.0;
    }
    (angle.round().rem_euclid(360.0)) as f32
}

const TAN_ACCURACY: f64 = 1000.0; // 3 digits after the decimal

fn round_tan(v: f64) -> f64 {
    (v * TAN_ACCURACY).round() / TAN_ACCURACY
}

/// Convert degrees into a max-component-normalized vector.
///
/// Inverse of [`to_angle`] under the same convention. The intermediate
/// tangent is rounded to 3 decimals before the zero test so floating noise
/// near the axis boundaries cannot flip the sign of a component.
pub fn from_angle(degrees: f32) -> Vec2 {
    let degrees = (360.0 - degrees as f64).rem_euclid(360.0);
    let tan = round_tan(degrees.to_radians().tan());
    if tan == 0.0 {
        // An angle near 0 or 180 degrees.
        return if degrees.round() % 360.0 == 0.0 {
            Vec2::new(0.0, -1.0)
        } else {
            Vec2::new(0.0, 1.0)
        };
    }
    if tan.abs() >= 1.0 {
        // |x| > |y| so normalize on |x|.
        let y = round_tan(-1.0 / tan) as f32;
        if (0.0..=180.0).contains(&degrees) {
            Vec2::new(1.0, y)
        } else {
            Vec2::new(-1.0, -y)
        }
    } else {
        // |y| > |x| so normalize on |y|.
        let x = if (0.0..=180.0).contains(&degrees) {
            tan.abs() as f32
        } else {
            -(tan.abs() as f32)
        };
        let y = if (90.0..=270.0).contains(&degrees) {
            1.0
        } else {
            -1.0
        };
        Vec2::new(x, y)
    }
}

/// Random integer-valued vector within `rect`, bounds inclusive.
pub fn random_in_rect(rect: &Rect) -> Vec2 {
    Vec2::new(
        fastrand::i32(rect.left() as i32..=rect.right() as i32) as f32,
        fastrand::i32(rect.top() as i32..=rect.bottom() as i32) as f32,
    )
}

/// Random integer-valued vector from `(0, 0)` to `(x, y)`, bounds inclusive.
pub fn random_within(x: i32, y: i32) -> Vec2 {
    Vec2::new(fastrand::i32(0..=x) as f32, fastrand::i32(0..=y) as f32)
}
