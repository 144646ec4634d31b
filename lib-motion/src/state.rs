use crate::*;

/// Externally observable snapshot of the engine, recomputed on every tick.
///
/// `step_count` and `total_alerts` never decrease within a session, only a session reset brings
/// them back to zero.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionState
{
    pub step_count: u64,
    pub is_walking: bool,
    pub walking_speed: SpeedClass,
    pub is_using_device: bool,
    pub is_hazard: bool,
    pub total_alerts: u64,

    /// Combined state of the last classification. Only [`ActivityState::Hazard`] while the walk
    /// is confirmed, so a lone bootstrap step with the phone in use is `UsingDevice`.
    pub activity: ActivityState,
}
