/// Combined activity state, derived from the confirmed walking and usage flags every tick.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityState
{
    #[default]
    Safe,
    Walking,
    UsingDevice,
    Hazard,
}

impl ActivityState
{
    pub fn from_flags(walking_confirmed: bool, using_device: bool) -> Self {
        match (walking_confirmed, using_device) {
            (true, true) => ActivityState::Hazard,
            (true, false) => ActivityState::Walking,
            (false, true) => ActivityState::UsingDevice,
            (false, false) => ActivityState::Safe,
        }
    }
}

/// Debounces the hazard flag: one continuous "walking while using the device" episode counts as
/// a single alert, raised on the tick the episode starts.
///
#[derive(Debug, Clone, Default)]
pub struct HazardMonitor
{
    pub is_hazard: bool,
    pub total_alerts: u64,
}

impl HazardMonitor
{
    pub const fn new() -> Self {
        HazardMonitor { is_hazard: false, total_alerts: 0 }
    }

    /// Update with this tick's state, returns `true` only on the rising edge of the hazard.
    ///
    pub fn update(&mut self, state: ActivityState) -> bool {
        let hazard = state == ActivityState::Hazard;
        let rising = hazard && !self.is_hazard;
        self.is_hazard = hazard;
        if rising {
            self.total_alerts += 1;
        }
        rising
    }

    pub fn reset(&mut self) {
        *self = HazardMonitor::new();
    }
}
