use crate::*;
use cfg_if::cfg_if;
use math::{clampf, mean_std_dev};
use queue::RingQueue;

/// Hysteresis state of the peak detector.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeakState
{
    /// Waiting for the signal to rise above the threshold.
    Below,

    /// Signal went above the threshold, tracking the highest value seen so far.
    Above { peak: f32 },
}

impl PeakState
{
    /// Advance the state machine by one sample. Returns the new state and, when a peak has just
    /// ended, the height of that peak.
    ///
    /// Rising uses `threshold`, falling uses `threshold * hysteresis_ratio`, so a signal hovering
    /// around the threshold does not chatter.
    ///
    pub fn advance(self, centered: f32, threshold: f32, hysteresis_ratio: f32) -> (PeakState, Option<f32>) {
        match self {
            PeakState::Below if centered > threshold => (PeakState::Above { peak: centered }, None),
            PeakState::Below => (PeakState::Below, None),
            PeakState::Above { peak } if centered < threshold * hysteresis_ratio => {
                (PeakState::Below, Some(peak))
            },
            PeakState::Above { peak } => (PeakState::Above { peak: libm::fmaxf(peak, centered) }, None),
        }
    }
}

/// A completed peak, not yet validated as a real step.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCandidate
{
    pub t: Timestamp,
    pub peak: f32,
}

/// Peak detector with a threshold that adapts to how strongly the device is currently moving:
/// the threshold follows the standard deviation of the last few filtered samples.
///
#[derive(Debug)]
pub struct AdaptiveStepDetector
{
    /// Last `buffer_size` low-pass filtered samples.
    buffer: RingQueue<f32>,

    state: PeakState,

    pub threshold_factor: f32,
    pub min_threshold: f32,
    pub max_threshold: f32,
    pub hysteresis_ratio: f32,

    /// Standard deviation of the sample window as of the last detection tick.
    pub std_dev: f32,

    /// Threshold used on the last detection tick.
    pub threshold: f32,
}

impl AdaptiveStepDetector
{
    /// Creates a detector over a window of `buffer_size` samples, `None` if the window is empty.
    ///
    pub fn new(config: &EngineConfig) -> Option<Self> {
        Some(AdaptiveStepDetector {
            buffer: RingQueue::new(config.buffer_size)?,
            state: PeakState::Below,
            threshold_factor: config.threshold_factor,
            min_threshold: config.min_threshold,
            max_threshold: config.max_threshold,
            hysteresis_ratio: config.hysteresis_ratio,
            std_dev: 0.0,
            threshold: config.min_threshold,
        })
    }

    /// Remember a filtered sample. Happens on every tick, also during the warm-up, so the window
    /// is filled by the time detection starts.
    ///
    #[inline]
    pub fn push_sample(&mut self, filtered: f32) {
        self.buffer.push(filtered);
    }

    /// The window is only usable once it has been filled completely.
    ///
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.buffer.is_full()
    }

    #[inline]
    pub fn state(&self) -> PeakState {
        self.state
    }

    /// Run the peak detector on one centered sample.
    ///
    pub fn detect(&mut self, centered: f32, t: Timestamp) -> Option<StepCandidate> {
        if !self.is_ready() {
            return None;
        }

        let (_, std_dev) = mean_std_dev(self.buffer.iter());
        self.std_dev = std_dev;
        self.threshold = clampf(std_dev * self.threshold_factor, self.min_threshold, self.max_threshold);

        let (state, peak) = self.state.advance(centered, self.threshold, self.hysteresis_ratio);
        self.state = state;

        let candidate = peak.map(|peak| StepCandidate { t, peak });
        if let Some(candidate) = &candidate {
            log::trace!(
                "Step candidate at {}ms: peak={:.3}, threshold={:.3}, std_dev={:.3}",
                candidate.t, candidate.peak, self.threshold, self.std_dev
            );
            cfg_if! { if #[cfg(feature = "csv")] {
                println!("step-candidate: {},{}", candidate.t, candidate.peak);
            }}
        }
        candidate
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = PeakState::Below;
        self.std_dev = 0.0;
        self.threshold = self.min_threshold;
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn ready_detector(fill: f32) -> AdaptiveStepDetector {
        let mut detector = AdaptiveStepDetector::new(&EngineConfig::default()).unwrap();
        for _ in 0..25 {
            detector.push_sample(fill);
        }
        detector
    }

    #[test]
    fn test_peak_state_rises_and_falls() {
        let state = PeakState::Below;
        let (state, peak) = state.advance(1.2, 1.0, 0.5);
        assert_eq!(state, PeakState::Above { peak: 1.2 });
        assert_eq!(peak, None);

        let (state, _) = state.advance(2.0, 1.0, 0.5);
        let (state, _) = state.advance(1.5, 1.0, 0.5);
        assert_eq!(state, PeakState::Above { peak: 2.0 });

        let (state, peak) = state.advance(0.4, 1.0, 0.5);
        assert_eq!(state, PeakState::Below);
        assert_eq!(peak, Some(2.0));
    }

    #[test]
    fn test_peak_state_hysteresis_band() {
        // Dropping below the threshold but not below half of it keeps the peak open.
        let (state, _) = PeakState::Below.advance(1.1, 1.0, 0.5);
        let (state, peak) = state.advance(0.8, 1.0, 0.5);
        assert_eq!(state, PeakState::Above { peak: 1.1 });
        assert_eq!(peak, None);
        let (state, peak) = state.advance(1.05, 1.0, 0.5);
        assert_eq!(state, PeakState::Above { peak: 1.1 });
        assert_eq!(peak, None);
    }

    #[test]
    fn test_not_ready_until_window_full() {
        let mut detector = AdaptiveStepDetector::new(&EngineConfig::default()).unwrap();
        for _ in 0..24 {
            detector.push_sample(0.0);
            assert_eq!(detector.detect(10.0, 0), None);
            assert_eq!(detector.state(), PeakState::Below);
        }
        detector.push_sample(0.0);
        assert!(detector.is_ready());
        assert_eq!(detector.detect(10.0, 0), None);
        assert!(matches!(detector.state(), PeakState::Above { .. }));
    }

    #[test]
    fn test_threshold_clamped_to_minimum() {
        let mut detector = ready_detector(0.0);
        detector.detect(0.0, 0);
        assert_eq!(detector.std_dev, 0.0);
        assert_eq!(detector.threshold, 0.5);
    }

    #[test]
    fn test_threshold_clamped_to_maximum() {
        let mut detector = ready_detector(0.0);
        for i in 0..25 {
            detector.push_sample(if i % 2 == 0 { 10.0 } else { -10.0 });
        }
        detector.detect(0.0, 0);
        assert!(detector.std_dev > 9.0);
        assert_eq!(detector.threshold, 3.5);
    }

    #[test]
    fn test_emits_one_candidate_per_peak() {
        let mut detector = ready_detector(0.0);
        let signal = [0.0, 0.6, 1.2, 0.9, 0.3, 0.0, 0.7, 0.2];
        let candidates: Vec<StepCandidate> = signal
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| detector.detect(value, i as u64 * 20))
            .collect();

        assert_eq!(candidates, vec![
            StepCandidate { t: 100, peak: 1.2 },
            StepCandidate { t: 140, peak: 0.7 },
        ]);
    }

    #[test]
    fn test_reset_clears_window_and_state() {
        let mut detector = ready_detector(0.0);
        detector.detect(2.0, 0);
        detector.reset();
        assert!(!detector.is_ready());
        assert_eq!(detector.state(), PeakState::Below);
    }
}
