use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::*;

/// Hands the latest [`MotionState`] from the processing thread to an emission path (e.g. a
/// periodic network send) running elsewhere. Writers replace the snapshot, readers copy it; the
/// lock is only ever held for that copy so the processing thread is never held up for long.
///
#[derive(Debug, Clone, Default)]
pub struct SnapshotCell
{
    inner: Arc<Mutex<MotionState>>,
}

impl SnapshotCell
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, state: MotionState) {
        *self.lock() = state;
    }

    /// Copy of the most recently published snapshot.
    ///
    pub fn latest(&self) -> MotionState {
        *self.lock()
    }

    // The snapshot is plain data that is only ever replaced whole, a writer that panicked cannot
    // have left it half updated.
    fn lock(&self) -> MutexGuard<'_, MotionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Limits how often snapshots are emitted, independent of the sensor rate.
///
#[derive(Debug, Clone)]
pub struct EmissionThrottle
{
    pub interval_ms: u64,
    last: Option<Timestamp>,
}

impl EmissionThrottle
{
    pub const fn new(interval_ms: u64) -> Self {
        EmissionThrottle { interval_ms, last: None }
    }

    /// Is an emission due at `now`? Marks it as done when it is.
    ///
    pub fn should_emit(&mut self, now: Timestamp) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => elapsed_ms(now, last) >= self.interval_ms,
        };
        if due {
            self.last = Some(now);
        }
        due
    }

    /// The latest snapshot from `cell` if an emission is due at `now`.
    ///
    pub fn poll(&mut self, cell: &SnapshotCell, now: Timestamp) -> Option<MotionState> {
        self.should_emit(now).then(|| cell.latest())
    }
}
