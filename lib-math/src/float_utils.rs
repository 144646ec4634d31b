/// Constrain `value` to the range `[low, high]`. Unlike `f32::clamp` this does not panic when the
/// bounds are inverted, the lower bound simply wins.
///
pub fn clampf(value: f32, low: f32, high: f32) -> f32 {
    libm::fmaxf(low, libm::fminf(value, high))
}

/// Exponential moving average step: `alpha * previous + (1 - alpha) * sample`.
///
#[inline]
pub fn ema(previous: f32, sample: f32, alpha: f32) -> f32 {
    alpha * previous + (1.0 - alpha) * sample
}

/// Arithmetic mean and (population) standard deviation of a window of samples, computed in a
/// single pass with Welford's algorithm so the window never has to be copied. An empty window
/// yields `(0.0, 0.0)`.
///
pub fn mean_std_dev<I>(values: I) -> (f32, f32)
where
    I: IntoIterator<Item = f32>,
{
    let mut count = 0u32;
    let mut mean = 0.0f32;
    let mut m2 = 0.0f32;

    for value in values {
        count += 1;
        let delta = value - mean;
        mean += delta / count as f32;
        m2 += delta * (value - mean);
    }

    if count == 0 {
        return (0.0, 0.0);
    }
    (mean, libm::sqrtf(libm::fmaxf(m2 / count as f32, 0.0)))
}
