use core::{error::Error, fmt};

/// Malformed engine configuration. This is the only error the engine ever reports, and only when
/// it is constructed: once running, every sensor tick is accepted.
///
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError
{
    ZeroBufferSize,
    ZeroHistorySize,
    SmoothingOutOfRange { name: &'static str, value: f32 },
    InvalidThresholds { min: f32, max: f32 },
    InvalidThresholdFactor(f32),
    InvalidHysteresis(f32),
    InvalidStepInterval { min_ms: u64, max_ms: u64 },
    InvalidTiltBand { low: f32, high: f32 },
    InvalidIdleTimeouts { walking_ms: u64, reset_ms: u64 },
    ZeroWindow(&'static str),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroBufferSize => write!(f, "Sample buffer size must be at least 1"),
            Self::ZeroHistorySize => write!(f, "Step history size must be at least 1"),
            Self::SmoothingOutOfRange { name, value } => {
                write!(f, "Smoothing factor {} must be in [0, 1), got {}", name, value)
            },
            Self::InvalidThresholds { min, max } => {
                write!(f, "Step threshold bounds must satisfy 0 < min <= max, got {}..{}", min, max)
            },
            Self::InvalidThresholdFactor(factor) => {
                write!(f, "Step threshold factor must be positive, got {}", factor)
            },
            Self::InvalidHysteresis(ratio) => {
                write!(f, "Hysteresis ratio must be in (0, 1], got {}", ratio)
            },
            Self::InvalidStepInterval { min_ms, max_ms } => {
                write!(f, "Step interval bounds must satisfy min < max, got {}ms..{}ms", min_ms, max_ms)
            },
            Self::InvalidTiltBand { low, high } => {
                write!(f, "Tilt band must satisfy 0 <= low < high, got {}..{} degrees", low, high)
            },
            Self::InvalidIdleTimeouts { walking_ms, reset_ms } => write!(
                f,
                "Idle reset ({}ms) must not be shorter than the walking timeout ({}ms)",
                reset_ms, walking_ms
            ),
            Self::ZeroWindow(name) => write!(f, "Time window {} must be longer than 0ms", name),
        }
    }
}
