use math::ema;

/// Output of the signal conditioner for one tick.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conditioned
{
    /// Still inside the warm-up window, the mean is converging and no step detection may happen.
    WarmingUp { filtered: f32 },

    /// Zero centered signal ready for peak detection.
    Ready { filtered: f32, centered: f32 },
}

impl Conditioned
{
    #[inline]
    pub fn filtered(&self) -> f32 {
        match self {
            Conditioned::WarmingUp { filtered } => *filtered,
            Conditioned::Ready { filtered, .. } => *filtered,
        }
    }
}

/// Low-pass filters the vertical acceleration and removes its slowly drifting offset by tracking
/// a running mean (a high-pass filter, effectively).
///
#[derive(Debug, Clone)]
pub struct SignalConditioner
{
    pub lowpass_alpha: f32,
    pub highpass_alpha: f32,
    pub warmup_mean_alpha: f32,
    pub warmup_ms: u64,

    /// Low-pass filtered vertical acceleration.
    pub filtered: f32,

    /// Slow moving average of the signal, subtracted to center it around zero.
    pub mean: f32,
}

impl SignalConditioner
{
    pub fn new(lowpass_alpha: f32, highpass_alpha: f32, warmup_mean_alpha: f32, warmup_ms: u64) -> Self {
        SignalConditioner {
            lowpass_alpha,
            highpass_alpha,
            warmup_mean_alpha,
            warmup_ms,
            filtered: 0.0,
            mean: 0.0,
        }
    }

    /// Condition one vertical acceleration sample, `since_start_ms` is the time passed since the
    /// session started.
    ///
    pub fn update(&mut self, vertical: f32, since_start_ms: u64) -> Conditioned {
        self.filtered = ema(self.filtered, vertical, self.lowpass_alpha);

        if since_start_ms < self.warmup_ms {
            // Pull the mean in quickly while gravity is still settling.
            self.mean = ema(self.mean, vertical, self.warmup_mean_alpha);
            return Conditioned::WarmingUp { filtered: self.filtered };
        }

        self.mean = ema(self.mean, self.filtered, self.highpass_alpha);
        Conditioned::Ready {
            filtered: self.filtered,
            centered: self.filtered - self.mean,
        }
    }

    pub fn reset(&mut self) {
        self.filtered = 0.0;
        self.mean = 0.0;
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn conditioner() -> SignalConditioner {
        SignalConditioner::new(0.5, 0.95, 0.9, 2000)
    }

    #[test]
    fn test_warm_up_blocks_output() {
        let mut conditioner = conditioner();
        for t in (0..2000).step_by(20) {
            let out = conditioner.update(5.0, t);
            assert!(matches!(out, Conditioned::WarmingUp { .. }), "{:?} at {}", out, t);
        }
        assert!(matches!(conditioner.update(5.0, 2000), Conditioned::Ready { .. }));
    }

    #[test]
    fn test_warm_up_mean_converges_fast() {
        let mut conditioner = conditioner();
        for t in (0..2000).step_by(20) {
            conditioner.update(3.0, t);
        }
        // 100 samples of 0.9 smoothing leave practically nothing of the initial zero.
        assert!(libm::fabsf(conditioner.mean - 3.0) < 1e-3, "{}", conditioner.mean);
    }

    #[test]
    fn test_constant_offset_is_removed() {
        let mut conditioner = conditioner();
        let mut last = conditioner.update(0.7, 0);
        for i in 1..500u64 {
            last = conditioner.update(0.7, i * 20);
        }
        match last {
            Conditioned::Ready { filtered, centered } => {
                assert!(libm::fabsf(filtered - 0.7) < 1e-4);
                assert!(libm::fabsf(centered) < 1e-3, "{}", centered);
            },
            other => panic!("expected ready output, got {:?}", other),
        }
    }

    #[test]
    fn test_lowpass_step() {
        let mut conditioner = conditioner();
        let out = conditioner.update(4.0, 0);
        assert_eq!(out.filtered(), 2.0);
    }

    #[test]
    fn test_reset() {
        let mut conditioner = conditioner();
        conditioner.update(4.0, 3000);
        conditioner.reset();
        assert_eq!(conditioner.filtered, 0.0);
        assert_eq!(conditioner.mean, 0.0);
    }
}
