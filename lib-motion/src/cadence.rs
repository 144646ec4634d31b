/// Coarse walking speed derived from the step rate.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedClass
{
    #[default]
    None,
    Slow,
    Normal,
    Fast,
}

impl SpeedClass
{
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedClass::None => "none",
            SpeedClass::Slow => "slow",
            SpeedClass::Normal => "normal",
            SpeedClass::Fast => "fast",
        }
    }
}

/// Step rates (steps/min) below this are slow.
pub const SLOW_CADENCE_LIMIT: f32 = 80.0;

/// Step rates (steps/min) at or above this are fast.
pub const FAST_CADENCE_LIMIT: f32 = 120.0;

/// Class assigned to the bootstrap step, for which no interval exists yet.
pub const BOOTSTRAP_SPEED: SpeedClass = SpeedClass::Normal;

/// Step rate in steps per minute for an interval between two steps.
///
#[inline]
pub fn cadence_from_interval(interval_ms: u64) -> f32 {
    60_000.0 / interval_ms as f32
}

pub fn classify_cadence(cadence: f32) -> SpeedClass {
    if cadence < SLOW_CADENCE_LIMIT {
        SpeedClass::Slow
    } else if cadence < FAST_CADENCE_LIMIT {
        SpeedClass::Normal
    } else {
        SpeedClass::Fast
    }
}

/// Speed class for the interval between two accepted steps. A zero interval never passes step
/// validation, it is treated as the fastest possible cadence.
///
pub fn classify_interval(interval_ms: u64) -> SpeedClass {
    if interval_ms == 0 {
        return SpeedClass::Fast;
    }
    classify_cadence(cadence_from_interval(interval_ms))
}
