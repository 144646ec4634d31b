use crate::*;

/// Which local feedback the user wants when a hazard alert fires. The engine does not produce any
/// sound or vibration itself, it only forwards these toggles with every alert.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSettings
{
    pub sound: bool,
    pub vibration: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        FeedbackSettings { sound: true, vibration: true }
    }
}

/// All tunables of the motion engine. Times are in milliseconds, accelerations in m/s² and
/// angular rates in rad/s. The defaults are tuned for a handheld phone sampled at ~50Hz.
///
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig
{
    /// Gravity separator smoothing factor.
    pub gravity_alpha: f32,

    /// Below this gravity magnitude there is no usable vertical axis yet.
    pub min_gravity_magnitude: f32,

    /// Signal conditioner low-pass factor.
    pub lowpass_alpha: f32,

    /// Slow mean tracking factor used once the warm-up is over.
    pub highpass_alpha: f32,

    /// Fast mean convergence factor used during the warm-up.
    pub warmup_mean_alpha: f32,

    /// No steps are detected this long after the start of a session.
    pub warmup_ms: u64,

    /// Amount of filtered samples in the adaptive threshold window.
    pub buffer_size: usize,

    pub threshold_factor: f32,
    pub min_threshold: f32,
    pub max_threshold: f32,

    /// A peak ends when the signal drops below `threshold * hysteresis_ratio`.
    pub hysteresis_ratio: f32,

    pub min_step_interval_ms: u64,
    pub max_step_interval_ms: u64,

    /// Amount of recent step times kept for density checks.
    pub history_size: usize,
    pub density_window_ms: u64,
    pub density_min_steps: usize,

    /// Steps accepted without a density check at the start of a walk.
    pub bootstrap_steps: u64,

    /// Window in which `density_min_steps` steps must fall to confirm walking for hazards.
    pub walking_window_ms: u64,

    pub idle_walking_ms: u64,
    pub idle_reset_ms: u64,

    pub gyro_active_threshold: f32,
    pub tilt_min_deg: f32,
    pub tilt_max_deg: f32,

    pub feedback: FeedbackSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravity_alpha: 0.8,
            min_gravity_magnitude: 0.1,
            lowpass_alpha: 0.5,
            highpass_alpha: 0.95,
            warmup_mean_alpha: 0.9,
            warmup_ms: 2000,
            buffer_size: 25,
            threshold_factor: 1.5,
            min_threshold: 0.5,
            max_threshold: 3.5,
            hysteresis_ratio: 0.5,
            min_step_interval_ms: 300,
            max_step_interval_ms: 2000,
            history_size: 4,
            density_window_ms: 3000,
            density_min_steps: 2,
            bootstrap_steps: 2,
            walking_window_ms: 2000,
            idle_walking_ms: 2500,
            idle_reset_ms: 5000,
            gyro_active_threshold: 0.2,
            tilt_min_deg: 20.0,
            tilt_max_deg: 85.0,
            feedback: FeedbackSettings::default(),
        }
    }
}

impl EngineConfig
{
    /// Rejects configurations the engine cannot run with.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if self.history_size == 0 {
            return Err(ConfigError::ZeroHistorySize);
        }

        let smoothing = [
            ("gravity_alpha", self.gravity_alpha),
            ("lowpass_alpha", self.lowpass_alpha),
            ("highpass_alpha", self.highpass_alpha),
            ("warmup_mean_alpha", self.warmup_mean_alpha),
        ];
        for (name, value) in smoothing {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::SmoothingOutOfRange { name, value });
            }
        }

        if !(self.threshold_factor > 0.0) {
            return Err(ConfigError::InvalidThresholdFactor(self.threshold_factor));
        }
        if !(self.min_threshold > 0.0 && self.min_threshold <= self.max_threshold) {
            return Err(ConfigError::InvalidThresholds {
                min: self.min_threshold,
                max: self.max_threshold,
            });
        }
        if !(self.hysteresis_ratio > 0.0 && self.hysteresis_ratio <= 1.0) {
            return Err(ConfigError::InvalidHysteresis(self.hysteresis_ratio));
        }
        if self.min_step_interval_ms >= self.max_step_interval_ms {
            return Err(ConfigError::InvalidStepInterval {
                min_ms: self.min_step_interval_ms,
                max_ms: self.max_step_interval_ms,
            });
        }
        if !(self.tilt_min_deg >= 0.0 && self.tilt_min_deg < self.tilt_max_deg) {
            return Err(ConfigError::InvalidTiltBand {
                low: self.tilt_min_deg,
                high: self.tilt_max_deg,
            });
        }
        if self.idle_reset_ms < self.idle_walking_ms {
            return Err(ConfigError::InvalidIdleTimeouts {
                walking_ms: self.idle_walking_ms,
                reset_ms: self.idle_reset_ms,
            });
        }
        if self.density_window_ms == 0 {
            return Err(ConfigError::ZeroWindow("density_window_ms"));
        }
        if self.walking_window_ms == 0 {
            return Err(ConfigError::ZeroWindow("walking_window_ms"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let config = EngineConfig { buffer_size: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBufferSize));
    }

    #[test]
    fn test_zero_history_is_rejected() {
        let config = EngineConfig { history_size: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHistorySize));
    }

    #[test]
    fn test_smoothing_factor_of_one_is_rejected() {
        let config = EngineConfig { lowpass_alpha: 1.0, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SmoothingOutOfRange { name: "lowpass_alpha", value: 1.0 })
        );
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let config = EngineConfig { min_threshold: 4.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThresholds { .. })));

        let config = EngineConfig { min_step_interval_ms: 2000, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidStepInterval { .. })));

        let config = EngineConfig { tilt_min_deg: 90.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTiltBand { .. })));

        let config = EngineConfig { idle_reset_ms: 1000, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidIdleTimeouts { .. })));
    }

    #[test]
    fn test_non_positive_threshold_factor_is_rejected() {
        let config = EngineConfig { threshold_factor: 0.0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::InvalidThresholdFactor(0.0));
        assert!(err.to_string().contains("factor"), "{}", err);
    }

    #[test]
    fn test_error_messages() {
        let message = ConfigError::ZeroBufferSize.to_string();
        assert!(message.contains("buffer"), "{}", message);
    }
}
