use math::{Tilt, Vector};

/// Per tick evidence that the device is being operated: either it is being turned around, or it
/// is held at the typical reading angle.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageReading
{
    pub gyro_magnitude: f32,
    pub tilt: Tilt,
    pub gyro_active: bool,
    pub oriented: bool,
}

impl UsageReading
{
    #[inline]
    pub fn is_using_device(&self) -> bool {
        self.gyro_active || self.oriented
    }
}

/// Stateless phone usage classifier.
///
#[derive(Debug, Clone, Copy)]
pub struct PhoneUsageDetector
{
    /// In rad/s; rotation rates above this mean the device is being handled.
    pub gyro_threshold: f32,

    /// In degrees; pitch or roll strictly inside this band counts as a reading posture.
    pub tilt_min: f32,
    pub tilt_max: f32,
}

impl PhoneUsageDetector
{
    pub const fn new(gyro_threshold: f32, tilt_min: f32, tilt_max: f32) -> Self {
        PhoneUsageDetector { gyro_threshold, tilt_min, tilt_max }
    }

    pub fn classify(&self, gyro: &Vector, accel: &Vector) -> UsageReading {
        let gyro_magnitude = gyro.magnitude();
        let tilt = Tilt::from(accel);
        UsageReading {
            gyro_magnitude,
            tilt,
            gyro_active: gyro_magnitude > self.gyro_threshold,
            oriented: tilt.within_band(self.tilt_min, self.tilt_max),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const DETECTOR: PhoneUsageDetector = PhoneUsageDetector::new(0.2, 20.0, 85.0);

    #[test]
    fn test_flat_and_still_is_not_usage() {
        let reading = DETECTOR.classify(&Vector::new(0.01, 0.02, 0.0), &Vector::new(0.0, 0.0, 9.81));
        assert!(!reading.gyro_active);
        assert!(!reading.oriented);
        assert!(!reading.is_using_device());
    }

    #[test]
    fn test_rotation_is_usage() {
        let reading = DETECTOR.classify(&Vector::new(0.0, 0.25, 0.0), &Vector::new(0.0, 0.0, 9.81));
        assert!(reading.gyro_active);
        assert!(reading.is_using_device());
    }

    #[test]
    fn test_gyro_threshold_is_exclusive() {
        let reading = DETECTOR.classify(&Vector::new(0.2, 0.0, 0.0), &Vector::new(0.0, 0.0, 9.81));
        assert!(!reading.gyro_active);
    }

    #[test]
    fn test_reading_posture_is_usage() {
        // Held at ~40 degrees, screen towards the user.
        let reading = DETECTOR.classify(&Vector::zero(), &Vector::new(0.0, 6.3, 7.5));
        assert!(!reading.gyro_active);
        assert!(reading.oriented, "{:?}", reading.tilt);
        assert!(reading.is_using_device());
    }

    #[test]
    fn test_upright_in_pocket_is_not_usage() {
        let reading = DETECTOR.classify(&Vector::new(0.05, 0.05, 0.05), &Vector::new(0.0, 9.81, 0.3));
        assert!(!reading.oriented, "{:?}", reading.tilt);
        assert!(!reading.is_using_device());
    }
}
