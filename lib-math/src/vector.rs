use core::ops::{Mul, Sub};

/// Three axis sample as produced by an accelerometer (m/s²) or a gyroscope (rad/s), expressed in
/// the device frame.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Take the dot product of two vectors.
    ///
    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Scalar component of this vector along `axis`, i.e. the length of its projection onto the
    /// axis. Returns `None` when the axis is too short (shorter than `min_axis`) to define a
    /// direction.
    ///
    pub fn component_along(&self, axis: &Vector, min_axis: f32) -> Option<f32> {
        let len = axis.magnitude();
        if !(len >= min_axis) || len == 0.0 {
            return None;
        }
        Some(self.dot(axis) / len)
    }

    /// Exponential smoothing towards `sample`: `self := alpha * self + (1 - alpha) * sample`.
    ///
    #[inline]
    pub fn smooth_towards(&mut self, sample: &Vector, alpha: f32) {
        let beta = 1.0 - alpha;
        self.x = alpha * self.x + beta * sample.x;
        self.y = alpha * self.y + beta * sample.y;
        self.z = alpha * self.z + beta * sample.z;
    }

    /// Are all three components finite (no NaN or infinity)?
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vector
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
