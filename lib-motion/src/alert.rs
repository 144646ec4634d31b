use alloc::{format, string::String};

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind
{
    WalkingUsingPhone,
}

impl AlertKind
{
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::WalkingUsingPhone => "walking_using_phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity
{
    Low,
    Medium,
    High,
}

impl Severity
{
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl From<SpeedClass> for Severity {
    /// Faster walking while looking at a screen is more dangerous.
    fn from(speed: SpeedClass) -> Self {
        match speed {
            SpeedClass::Normal => Severity::Medium,
            SpeedClass::Fast => Severity::High,
            SpeedClass::Slow | SpeedClass::None => Severity::Low,
        }
    }
}

/// Everything a subscriber needs to report, store or announce a hazard alert.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AlertPayload
{
    pub kind: AlertKind,
    pub severity: Severity,

    /// Sequence number of the session the alert fired in.
    pub session: u64,

    pub step_count: u64,

    /// Standard deviation of the step detector's sample window when the alert fired.
    pub std_dev: f32,

    pub walking_speed: SpeedClass,
    pub timestamp: Timestamp,

    /// Which local feedback the user has enabled.
    pub feedback: FeedbackSettings,
}

impl AlertPayload
{
    /// Human readable summary of the alert.
    pub fn description(&self) -> String {
        format!(
            "Walking ({}) while using the phone, {} steps so far",
            self.walking_speed.as_str(),
            self.step_count
        )
    }
}

/// Receives hazard alerts from the engine. Delivery is fire and forget: whatever the subscriber
/// does with the alert (network, storage, sound, vibration) the engine never learns whether it
/// worked.
///
pub trait AlertSink {
    fn on_hazard_alert(&mut self, alert: &AlertPayload);
}

impl<F> AlertSink for F
where
    F: FnMut(&AlertPayload),
{
    fn on_hazard_alert(&mut self, alert: &AlertPayload) {
        self(alert)
    }
}
