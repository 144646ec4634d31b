use crate::*;

/// Time passed between `since` and `now`. Sensor timestamps are not guaranteed to be strictly
/// increasing, a tick from the past counts as no time having passed.
///
#[inline]
pub fn elapsed_ms(now: Timestamp, since: Timestamp) -> u64 {
    now.saturating_sub(since)
}

/// Counts how many of the given timestamps lie within the last `window_ms` before `now`
/// (inclusive on both ends).
///
pub fn count_within<I>(times: I, now: Timestamp, window_ms: u64) -> usize
where
    I: IntoIterator<Item = Timestamp>,
{
    times
        .into_iter()
        .filter(|&t| t <= now && elapsed_ms(now, t) <= window_ms)
        .count()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(elapsed_ms(1500, 1000), 500);
        assert_eq!(elapsed_ms(1000, 1500), 0);
    }

    #[test]
    fn test_count_within_window() {
        let times = [1000, 2500, 3900, 4000];
        assert_eq!(count_within(times, 4000, 2000), 3);
        assert_eq!(count_within(times, 4000, 100), 2);
        assert_eq!(count_within(times, 9000, 3000), 0);
        // Entries "from the future" (e.g. stale history) are not counted.
        assert_eq!(count_within(times, 3000, 3000), 2);
    }
}
