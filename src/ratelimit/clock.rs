//! Clock abstraction so wall-clock reads can be faked in tests.

use std::fmt::Debug;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time in seconds.
///
/// Rate-limit resets are reported by the server as absolute epoch seconds,
/// so both the wait decision and the bucket eviction sweep need a wall
/// clock rather than a monotonic one.
pub(crate) trait Clock: Debug + Send + Sync + 'static {
    fn epoch_seconds(&self) -> u64;
}

/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            // A system clock before 1970 reads as "unknown"
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::Clock;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Manually advanceable clock for timing tests.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct ManualClock {
        now: Arc<AtomicU64>,
    }

    impl ManualClock {
        pub(crate) fn at(epoch_seconds: u64) -> Self {
            Self {
                now: Arc::new(AtomicU64::new(epoch_seconds)),
            }
        }

        pub(crate) fn advance(&self, seconds: u64) {
            self.now.fetch_add(seconds, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn epoch_seconds(&self) -> u64 {
            self.now.load(Ordering::SeqCst)
        }
    }
}
