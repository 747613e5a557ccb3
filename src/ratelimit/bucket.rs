use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::clock::Clock;

/// Last observed rate-limit state for one route path.
///
/// All fields use `0` for "not yet observed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Quota {
    /// Maximum requests per window, as last reported by the server
    pub(crate) limit: u64,
    /// Requests left in the current window
    pub(crate) remaining: u64,
    /// Epoch seconds at which the current window resets
    pub(crate) reset: u64,
}

/// Rate-limit record and serialization point for a single route path.
///
/// A bucket keeps two independent synchronization domains:
///
/// - a fast state lock ([`Mutex<Quota>`]) guarding the observed counters,
///   held only while reading or writing them
/// - a slow execution lock ([`tokio::sync::Mutex`]) guaranteeing that at
///   most one request against this path is in flight or waiting at a time
///
/// Splitting the two keeps the contended state lock out of the long
/// network/sleep section: the wait decision is computed under the state
/// lock, released, and only then does the caller queue up for its turn.
/// A caller queued behind a sleeping one re-evaluates its own delay after
/// the first caller's full turn, so a burst cannot sleep in parallel and
/// fire simultaneously past the reset boundary.
pub(crate) struct Bucket {
    path: &'static str,
    quota: Mutex<Quota>,
    turn: tokio::sync::Mutex<()>,
    clock: Arc<dyn Clock>,
}

impl Bucket {
    pub(crate) fn new(path: &'static str, clock: Arc<dyn Clock>) -> Self {
        Self {
            path,
            quota: Mutex::new(Quota::default()),
            turn: tokio::sync::Mutex::new(()),
            clock,
        }
    }

    /// The route template path this bucket serializes, e.g. `/documents/{key}`.
    pub(crate) const fn path(&self) -> &'static str {
        self.path
    }

    /// Snapshot of the observed counters.
    ///
    /// # Panics
    ///
    /// Panics if the state mutex is poisoned.
    pub(crate) fn quota(&self) -> Quota {
        *self.quota.lock().unwrap()
    }

    /// Runs `operation` as this path's single in-flight request, sleeping
    /// beforehand if the last observed window is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the state mutex is poisoned.
    pub(crate) async fn run_serialized<F, Fut, T>(&self, operation: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let delay = self.required_delay();

        let _turn = self.turn.lock().await;
        if !delay.is_zero() {
            log::debug!(
                "Waiting {}ms to avoid rate-limit on {}",
                delay.as_millis(),
                self.path
            );
            tokio::time::sleep(delay).await;
        }
        operation().await
    }

    /// Overwrites the provided counters, leaving the others untouched.
    ///
    /// Called once per completed HTTP exchange whenever the response
    /// carried a parseable rate-limit header triple, regardless of status.
    ///
    /// # Panics
    ///
    /// Panics if the state mutex is poisoned.
    pub(crate) fn update(&self, limit: Option<u64>, remaining: Option<u64>, reset: Option<u64>) {
        let mut quota = self.quota.lock().unwrap();
        if let Some(limit) = limit {
            quota.limit = limit;
        }
        if let Some(remaining) = remaining {
            quota.remaining = remaining;
        }
        if let Some(reset) = reset {
            quota.reset = reset;
        }
    }

    /// Wait decision, computed under the state lock.
    fn required_delay(&self) -> Duration {
        let quota = self.quota.lock().unwrap();
        if quota.reset == 0 {
            return Duration::ZERO;
        }

        let now = self.clock.epoch_seconds();
        if quota.remaining == 0 && quota.reset > now {
            Duration::from_secs(quota.reset - now)
        } else {
            Duration::ZERO
        }
    }
}

impl fmt::Debug for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quota = self.quota();
        f.debug_struct("Bucket")
            .field("path", &self.path)
            .field("limit", &quota.limit)
            .field("remaining", &quota.remaining)
            .field("reset", &quota.reset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratelimit::clock::test::ManualClock;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::time::Instant;

    fn bucket_with_clock(clock: &ManualClock) -> Arc<Bucket> {
        Arc::new(Bucket::new("/documents/{key}", Arc::new(clock.clone())))
    }

    #[tokio::test]
    async fn no_delay_without_observed_reset() {
        let clock = ManualClock::at(1_000);
        let bucket = bucket_with_clock(&clock);

        assert_eq!(bucket.required_delay(), Duration::ZERO);
    }

    #[tokio::test]
    async fn no_delay_while_quota_remains() {
        let clock = ManualClock::at(1_000);
        let bucket = bucket_with_clock(&clock);
        bucket.update(Some(10), Some(3), Some(1_060));

        assert_eq!(bucket.required_delay(), Duration::ZERO);
    }

    #[tokio::test]
    async fn no_delay_once_reset_has_passed() {
        let clock = ManualClock::at(1_000);
        let bucket = bucket_with_clock(&clock);
        bucket.update(Some(10), Some(0), Some(1_005));
        assert_eq!(bucket.required_delay(), Duration::from_secs(5));

        clock.advance(5);
        assert_eq!(bucket.required_delay(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_quota_delays_until_reset() {
        let clock = ManualClock::at(1_000);
        let bucket = bucket_with_clock(&clock);
        bucket.update(Some(10), Some(0), Some(1_005));

        let started = Instant::now();
        bucket.run_serialized(|| async {}).await;

        assert_eq!(started.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let clock = ManualClock::at(1_000);
        let bucket = bucket_with_clock(&clock);
        bucket.update(Some(10), Some(7), Some(1_060));
        bucket.update(None, Some(6), None);

        assert_eq!(
            bucket.quota(),
            Quota {
                limit: 10,
                remaining: 6,
                reset: 1_060
            }
        );
    }

    #[tokio::test]
    async fn operations_on_one_path_never_overlap() {
        let clock = ManualClock::at(1_000);
        let bucket = bucket_with_clock(&clock);
        let in_flight = Arc::new(AtomicBool::new(false));
        let overlaps = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let bucket = Arc::clone(&bucket);
            let in_flight = Arc::clone(&in_flight);
            let overlaps = Arc::clone(&overlaps);
            handles.push(tokio::spawn(async move {
                bucket
                    .run_serialized(|| async {
                        if in_flight.swap(true, Ordering::SeqCst) {
                            overlaps.fetch_add(1, Ordering::SeqCst);
                        }
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        in_flight.store(false, Ordering::SeqCst);
                    })
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(overlaps.load(Ordering::SeqCst), 0);
    }
}
