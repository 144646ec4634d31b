use crate::*;

/// Separates gravity from the raw accelerometer signal with an exponential moving average, what
/// remains is the linear (motion induced) acceleration.
///
/// The estimate starts at zero after every reset, so the first few outputs are off until the
/// average has settled. The conditioner's warm-up window absorbs that.
///
#[derive(Debug, Clone)]
pub struct GravitySeparator
{
    /// Smoothing factor, closer to 1 means slower to follow the accelerometer.
    pub alpha: f32,

    /// Current gravity estimate in device space.
    pub gravity: Vector,
}

impl GravitySeparator
{
    #[inline]
    pub fn new(alpha: f32) -> Self {
        GravitySeparator {
            alpha,
            gravity: Vector::zero(),
        }
    }

    /// Feed one accelerometer sample, returns the updated gravity estimate together with the
    /// linear acceleration of this sample.
    ///
    pub fn update(&mut self, accel: &Vector) -> (Vector, Vector) {
        self.gravity.smooth_towards(accel, self.alpha);
        (self.gravity, *accel - self.gravity)
    }

    pub fn reset(&mut self) {
        self.gravity = Vector::zero();
    }
}

/// Projects linear acceleration onto the true vertical, i.e. the axis defined by the gravity
/// estimate, so the result does not depend on how the device is being held. Returns `None` while
/// gravity is too weak (shorter than `min_gravity`) to define that axis.
///
pub fn project_vertical(linear: &Vector, gravity: &Vector, min_gravity: f32) -> Option<f32> {
    linear.component_along(gravity, min_gravity)
}
