use alloc::boxed::Box;

use crate::*;
use cfg_if::cfg_if;

/// Whether alerts of the current session are attributed to a user or anonymous. Switching
/// between the two starts a new session.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode
{
    #[default]
    Anonymous,
    Attributed,
}

/// Intermediate values of the last accelerometer tick, for offline analysis.
///
#[cfg(feature = "debug")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugTrace
{
    pub gravity: Vector,
    pub vertical: Option<f32>,
    pub filtered: f32,
    pub centered: Option<f32>,
    pub threshold: f32,
}

/// All mutable state of the motion engine. Sensor ticks are processed by exclusive reference, one
/// at a time and always to completion.
///
#[derive(Debug)]
pub struct EngineState
{
    pub gravity: GravitySeparator,
    pub conditioner: SignalConditioner,
    pub detector: AdaptiveStepDetector,
    pub validator: StepValidator,
    pub usage: PhoneUsageDetector,
    pub hazard: HazardMonitor,

    /// Latest accelerometer reading, m/s².
    pub accel: Vector,

    /// Latest gyroscope reading, rad/s.
    pub gyro: Vector,

    pub is_using_device: bool,
    pub activity: ActivityState,

    /// Time of the first tick of the current session, the warm-up is measured from here.
    pub session_start: Option<Timestamp>,

    /// Sequence number of the current session.
    pub session: u64,

    min_gravity: f32,
    walking_window_ms: u64,
    walking_min_steps: usize,
    feedback: FeedbackSettings,

    #[cfg(feature = "debug")]
    pub trace: DebugTrace,
}

impl EngineState
{
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(EngineState {
            gravity: GravitySeparator::new(config.gravity_alpha),
            conditioner: SignalConditioner::new(
                config.lowpass_alpha,
                config.highpass_alpha,
                config.warmup_mean_alpha,
                config.warmup_ms,
            ),
            detector: AdaptiveStepDetector::new(config).ok_or(ConfigError::ZeroBufferSize)?,
            validator: StepValidator::new(config).ok_or(ConfigError::ZeroHistorySize)?,
            usage: PhoneUsageDetector::new(
                config.gyro_active_threshold,
                config.tilt_min_deg,
                config.tilt_max_deg,
            ),
            hazard: HazardMonitor::new(),
            accel: Vector::zero(),
            gyro: Vector::zero(),
            is_using_device: false,
            activity: ActivityState::Safe,
            session_start: None,
            session: 1,
            min_gravity: config.min_gravity_magnitude,
            walking_window_ms: config.walking_window_ms,
            walking_min_steps: config.density_min_steps,
            feedback: config.feedback,
            #[cfg(feature = "debug")]
            trace: DebugTrace::default(),
        })
    }

    /// Process one accelerometer tick: the full step pipeline followed by the hazard
    /// classification. Returns the alert to deliver, if this tick started a hazard. A sample with
    /// a NaN or infinite component never reaches the filters, only the classification runs.
    ///
    pub fn on_accelerometer(&mut self, accel: Vector, t: Timestamp) -> Option<AlertPayload> {
        let since_start = self.mark_tick(t);
        self.validator.decay(t);
        if !accel.is_finite() {
            log::trace!("Dropping non-finite accelerometer sample {:?} at {}ms", accel, t);
            return self.classify(t);
        }
        self.accel = accel;

        let (gravity, linear) = self.gravity.update(&accel);
        let vertical = project_vertical(&linear, &gravity, self.min_gravity);

        cfg_if! { if #[cfg(feature = "debug")] {
            self.trace.gravity = gravity;
            self.trace.vertical = vertical;
            self.trace.centered = None;
        }}

        match vertical {
            Some(vertical) => self.detect_step(vertical, since_start, t),
            None => log::trace!(
                "Gravity not resolved yet (|g|={:.3}), skipping step detection",
                gravity.magnitude()
            ),
        }

        self.classify(t)
    }

    /// Process one gyroscope tick. Only the classification stage runs, the step pipeline is
    /// driven by the accelerometer alone. Non-finite samples are dropped and the previous reading
    /// is kept.
    ///
    pub fn on_gyroscope(&mut self, gyro: Vector, t: Timestamp) -> Option<AlertPayload> {
        self.mark_tick(t);
        self.validator.decay(t);
        if gyro.is_finite() {
            self.gyro = gyro;
        } else {
            log::trace!("Dropping non-finite gyroscope sample {:?} at {}ms", gyro, t);
        }
        self.classify(t)
    }

    /// Returns the time passed since the session started, starting the session on its first tick.
    fn mark_tick(&mut self, t: Timestamp) -> u64 {
        let start = *self.session_start.get_or_insert(t);
        elapsed_ms(t, start)
    }

    fn detect_step(&mut self, vertical: f32, since_start: u64, t: Timestamp) {
        let conditioned = self.conditioner.update(vertical, since_start);
        self.detector.push_sample(conditioned.filtered());

        cfg_if! { if #[cfg(feature = "debug")] {
            self.trace.filtered = conditioned.filtered();
        }}

        let Conditioned::Ready { centered, .. } = conditioned else {
            return;
        };
        let candidate = self.detector.detect(centered, t);

        cfg_if! { if #[cfg(feature = "debug")] {
            self.trace.centered = Some(centered);
            self.trace.threshold = self.detector.threshold;
        }}

        if let Some(candidate) = candidate {
            self.validator.validate(&candidate);
        }
    }

    fn classify(&mut self, t: Timestamp) -> Option<AlertPayload> {
        let reading = self.usage.classify(&self.gyro, &self.accel);
        self.is_using_device = reading.is_using_device();

        let walking_confirmed =
            self.validator.walking_confirmed(t, self.walking_window_ms, self.walking_min_steps);
        self.activity = ActivityState::from_flags(walking_confirmed, self.is_using_device);
        if !self.hazard.update(self.activity) {
            return None;
        }

        let speed = self.validator.walking_speed;
        let alert = AlertPayload {
            kind: AlertKind::WalkingUsingPhone,
            severity: Severity::from(speed),
            session: self.session,
            step_count: self.validator.step_count,
            std_dev: self.detector.std_dev,
            walking_speed: speed,
            timestamp: t,
            feedback: self.feedback,
        };
        log::info!(
            "Hazard #{} at {}ms: {} (severity {}, gyro {:.2}rad/s, pitch {:.0}, roll {:.0})",
            self.hazard.total_alerts,
            t,
            alert.description(),
            alert.severity.as_str(),
            reading.gyro_magnitude,
            reading.tilt.pitch,
            reading.tilt.roll,
        );
        Some(alert)
    }

    pub fn snapshot(&self) -> MotionState {
        MotionState {
            step_count: self.validator.step_count,
            is_walking: self.validator.is_walking,
            walking_speed: self.validator.walking_speed,
            is_using_device: self.is_using_device,
            is_hazard: self.hazard.is_hazard,
            total_alerts: self.hazard.total_alerts,
            activity: self.activity,
        }
    }

    /// Start a new session: every filter, buffer, counter and timer goes back to its initial
    /// state so nothing carries over from the previous session.
    ///
    pub fn reset(&mut self) {
        self.gravity.reset();
        self.conditioner.reset();
        self.detector.reset();
        self.validator.reset();
        self.hazard.reset();
        self.accel = Vector::zero();
        self.gyro = Vector::zero();
        self.is_using_device = false;
        self.activity = ActivityState::Safe;
        self.session_start = None;
        self.session += 1;

        cfg_if! { if #[cfg(feature = "debug")] {
            self.trace = DebugTrace::default();
        }}
    }
}

/// Motion classification engine: turns a stream of accelerometer and gyroscope ticks into a step
/// count, walking/usage classification and debounced "walking while using the phone" alerts.
///
/// Not thread safe by itself, ticks must be fed from one thread. With the `std` feature other
/// threads can follow the state through a `SnapshotCell` (see `MotionEngine::publish_to`).
///
pub struct MotionEngine
{
    state: EngineState,
    mode: SessionMode,
    sink: Option<Box<dyn AlertSink + Send>>,
    #[cfg(feature = "std")]
    published: Option<SnapshotCell>,
}

impl MotionEngine
{
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(MotionEngine {
            state: EngineState::new(&config)?,
            mode: SessionMode::default(),
            sink: None,
            #[cfg(feature = "std")]
            published: None,
        })
    }

    /// Deliver hazard alerts to `sink`, replacing any previous subscriber.
    ///
    pub fn set_alert_sink<S>(&mut self, sink: S)
    where
        S: AlertSink + Send + 'static,
    {
        self.sink = Some(Box::new(sink));
    }

    /// Publish a snapshot to `cell` after every tick and session reset.
    ///
    #[cfg(feature = "std")]
    pub fn publish_to(&mut self, cell: SnapshotCell) {
        cell.publish(self.state.snapshot());
        self.published = Some(cell);
    }

    pub fn on_accelerometer(&mut self, accel: Vector, t: Timestamp) {
        let alert = self.state.on_accelerometer(accel, t);
        self.finish_tick(alert);
    }

    pub fn on_gyroscope(&mut self, gyro: Vector, t: Timestamp) {
        let alert = self.state.on_gyroscope(gyro, t);
        self.finish_tick(alert);
    }

    fn finish_tick(&mut self, alert: Option<AlertPayload>) {
        if let (Some(alert), Some(sink)) = (&alert, self.sink.as_mut()) {
            sink.on_hazard_alert(alert);
        }
        self.publish();
    }

    fn publish(&self) {
        cfg_if! { if #[cfg(feature = "std")] {
            if let Some(cell) = &self.published {
                cell.publish(self.state.snapshot());
            }
        }}
    }

    pub fn snapshot(&self) -> MotionState {
        self.state.snapshot()
    }

    pub fn reset_session(&mut self) {
        self.state.reset();
        log::info!("Started session {} ({:?})", self.state.session, self.mode);
        self.publish();
    }

    /// Change the session mode. Only an actual change starts a new session.
    ///
    pub fn switch_mode(&mut self, mode: SessionMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.reset_session();
    }

    #[inline]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[inline]
    pub fn session(&self) -> u64 {
        self.state.session
    }

    /// Read access to the internal state, for diagnostics.
    #[inline]
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
