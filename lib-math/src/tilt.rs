use crate::*;

/// Static tilt of the device derived from the direction of the acceleration it measures, in
/// degrees. Only meaningful while the device is not accelerating much, since gravity is then the
/// dominant part of the reading. There is no yaw here: gravity cannot give us a yaw value.
///
/// Pitch = rotation around Y-axis, `atan2(x, |(y, z)|)`
/// Roll = rotation around X-axis, `atan2(y, z)`
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt
{
    pub pitch: f32,
    pub roll: f32,
}

impl Tilt
{
    /// Device lying flat, screen up.
    ///
    pub const fn level() -> Self {
        Tilt { pitch: 0.0, roll: 0.0 }
    }

    /// Is either the absolute pitch or the absolute roll strictly inside `(low, high)` degrees?
    ///
    pub fn within_band(&self, low: f32, high: f32) -> bool {
        let inside = |angle: f32| {
            let angle = libm::fabsf(angle);
            angle > low && angle < high
        };
        inside(self.pitch) || inside(self.roll)
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        libm::fabsf(self.pitch - other.pitch) <= tol
            && libm::fabsf(self.roll - other.roll) <= tol
    }
}

impl From<Vector> for Tilt {
    fn from(value: Vector) -> Self {
        Tilt::from(&value)
    }
}

impl From<&Vector> for Tilt {
    fn from(accel: &Vector) -> Self {
        let yz = libm::sqrtf(accel.y * accel.y + accel.z * accel.z);
        Tilt {
            pitch: libm::atan2f(accel.x, yz) * RAD_TO_DEG,
            roll: libm::atan2f(accel.y, accel.z) * RAD_TO_DEG,
        }
    }
}
