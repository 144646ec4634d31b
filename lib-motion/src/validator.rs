use crate::*;
use queue::RingQueue;

/// Outcome of validating one step candidate.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepVerdict
{
    /// First step after a reset or a long pause, accepted without any timing checks.
    Bootstrap,

    Accepted { interval_ms: u64, speed: SpeedClass },

    /// Too close to the previous step to be a separate human step.
    TooSoon { interval_ms: u64 },

    /// Too long after the previous step to belong to the same walk.
    TooLate { interval_ms: u64 },

    /// Timing is fine but there are not enough recent steps around it.
    Sparse { interval_ms: u64 },
}

impl StepVerdict
{
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, StepVerdict::Bootstrap | StepVerdict::Accepted { .. })
    }
}

/// Filters step candidates on their timing, counts the steps that pass, and keeps track of
/// whether the user is currently walking and how fast.
///
#[derive(Debug)]
pub struct StepValidator
{
    /// Times of the most recent steps that passed the interval check.
    history: RingQueue<Timestamp>,

    /// Time of the last accepted step, `None` until the first (bootstrap) step of a walk.
    pub last_step: Option<Timestamp>,

    pub step_count: u64,
    pub is_walking: bool,
    pub walking_speed: SpeedClass,

    min_interval_ms: u64,
    max_interval_ms: u64,
    density_window_ms: u64,
    density_min_steps: usize,
    bootstrap_steps: u64,
    idle_walking_ms: u64,
    idle_reset_ms: u64,
}

impl StepValidator
{
    /// Creates a validator remembering `history_size` steps, `None` if that is zero.
    ///
    pub fn new(config: &EngineConfig) -> Option<Self> {
        Some(StepValidator {
            history: RingQueue::new(config.history_size)?,
            last_step: None,
            step_count: 0,
            is_walking: false,
            walking_speed: SpeedClass::None,
            min_interval_ms: config.min_step_interval_ms,
            max_interval_ms: config.max_step_interval_ms,
            density_window_ms: config.density_window_ms,
            density_min_steps: config.density_min_steps,
            bootstrap_steps: config.bootstrap_steps,
            idle_walking_ms: config.idle_walking_ms,
            idle_reset_ms: config.idle_reset_ms,
        })
    }

    /// Ages the walking state. After a short pause the user is no longer walking, after a long
    /// one the next step starts a new walk (it will be a bootstrap step again).
    ///
    pub fn decay(&mut self, now: Timestamp) {
        let Some(last_step) = self.last_step else {
            return;
        };
        let idle = elapsed_ms(now, last_step);
        if idle > self.idle_walking_ms && self.is_walking {
            log::debug!("No step for {}ms, no longer walking", idle);
            self.is_walking = false;
            self.walking_speed = SpeedClass::None;
        }
        if idle > self.idle_reset_ms {
            log::debug!("No step for {}ms, next step starts a new walk", idle);
            self.is_walking = false;
            self.walking_speed = SpeedClass::None;
            self.last_step = None;
        }
    }

    /// Accept or reject a step candidate, updating the step count and walking state on
    /// acceptance. Rejections leave the state untouched (apart from the density history).
    ///
    pub fn validate(&mut self, candidate: &StepCandidate) -> StepVerdict {
        let now = candidate.t;

        let Some(last_step) = self.last_step else {
            self.history.push(now);
            self.accept(now, BOOTSTRAP_SPEED);
            log::debug!("Bootstrap step at {}ms (peak {:.2}), count={}", now, candidate.peak, self.step_count);
            return StepVerdict::Bootstrap;
        };

        let interval_ms = elapsed_ms(now, last_step);
        if interval_ms <= self.min_interval_ms {
            log::debug!("Rejected step at {}ms: {}ms after previous step", now, interval_ms);
            return StepVerdict::TooSoon { interval_ms };
        }
        if interval_ms >= self.max_interval_ms {
            log::debug!("Rejected step at {}ms: {}ms after previous step", now, interval_ms);
            return StepVerdict::TooLate { interval_ms };
        }

        self.history.push(now);
        let dense = self.step_count < self.bootstrap_steps
            || count_within(self.history.iter(), now, self.density_window_ms) >= self.density_min_steps;
        if !dense {
            log::debug!("Rejected step at {}ms: not enough recent steps", now);
            return StepVerdict::Sparse { interval_ms };
        }

        let speed = classify_interval(interval_ms);
        self.accept(now, speed);
        log::debug!(
            "Step at {}ms after {}ms ({:?}, peak {:.2}), count={}",
            now, interval_ms, speed, candidate.peak, self.step_count
        );
        StepVerdict::Accepted { interval_ms, speed }
    }

    fn accept(&mut self, now: Timestamp, speed: SpeedClass) {
        self.step_count += 1;
        self.is_walking = true;
        self.walking_speed = speed;
        self.last_step = Some(now);
    }

    /// Walking confirmed by step density: the user is walking and at least `min_steps` of the
    /// remembered steps happened within the last `window_ms`.
    ///
    pub fn walking_confirmed(&self, now: Timestamp, window_ms: u64, min_steps: usize) -> bool {
        self.is_walking && count_within(self.history.iter(), now, window_ms) >= min_steps
    }

    /// Remembered step times, oldest first.
    ///
    pub fn history(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.history.iter()
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.last_step = None;
        self.step_count = 0;
        self.is_walking = false;
        self.walking_speed = SpeedClass::None;
    }
}
