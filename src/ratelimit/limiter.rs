use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::bucket::Bucket;
use super::clock::{Clock, SystemClock};

/// How often the eviction sweep scans the registry for expired buckets.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Registry of per-route [`Bucket`]s, created lazily on first access.
///
/// A background sweeper started at construction removes buckets whose
/// observed `reset` has already elapsed, so paths that are no longer
/// requested do not accumulate state forever. The sweeper runs for the
/// lifetime of the owning client and is aborted on drop.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    buckets: Arc<Mutex<HashMap<&'static str, Arc<Bucket>>>>,
    clock: Arc<dyn Clock>,
    sweeper: JoinHandle<()>,
}

impl RateLimiter {
    pub(crate) fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub(crate) fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let buckets: Arc<Mutex<HashMap<&'static str, Arc<Bucket>>>> =
            Arc::new(Mutex::new(HashMap::new()));

        let sweeper = tokio::spawn({
            let buckets = Arc::clone(&buckets);
            let clock = Arc::clone(&clock);
            async move {
                loop {
                    sweep(&buckets, clock.as_ref()).await;
                    tokio::time::sleep(SWEEP_INTERVAL).await;
                }
            }
        });

        Self {
            buckets,
            clock,
            sweeper,
        }
    }

    /// Runs `operation` through the bucket for `path`, returning both the
    /// operation's output and the bucket so response headers can be fed
    /// back into it.
    pub(crate) async fn limit<F, Fut, T>(&self, path: &'static str, operation: F) -> (T, Arc<Bucket>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let bucket = self.acquire(path).await;
        let output = bucket.run_serialized(operation).await;
        (output, bucket)
    }

    /// Returns the bucket registered for `path`, creating a zero-state one
    /// on first access.
    async fn acquire(&self, path: &'static str) -> Arc<Bucket> {
        let mut buckets = self.buckets.lock().await;
        Arc::clone(
            buckets
                .entry(path)
                .or_insert_with(|| Arc::new(Bucket::new(path, Arc::clone(&self.clock)))),
        )
    }

    #[cfg(test)]
    pub(crate) async fn bucket_count(&self) -> usize {
        self.buckets.lock().await.len()
    }
}

/// Removes every bucket whose reset is known and already in the past.
/// Buckets that never observed a reset (`reset == 0`) are kept.
async fn sweep(buckets: &Mutex<HashMap<&'static str, Arc<Bucket>>>, clock: &dyn Clock) {
    let now = clock.epoch_seconds();
    let mut buckets = buckets.lock().await;
    buckets.retain(|path, bucket| {
        let reset = bucket.quota().reset;
        let expired = (1..now).contains(&reset);
        if expired {
            log::debug!("Removing expired bucket \"{path}\"");
        }
        !expired
    });
}

impl Drop for RateLimiter {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratelimit::clock::test::ManualClock;

    #[tokio::test]
    async fn acquire_reuses_bucket_per_path() {
        let limiter = RateLimiter::new();

        let first = limiter.acquire("/documents/{key}").await;
        let second = limiter.acquire("/documents/{key}").await;
        let other = limiter.acquire("/documents").await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(limiter.bucket_count().await, 2);
    }

    #[tokio::test]
    async fn limit_returns_operation_output_and_bucket() {
        let limiter = RateLimiter::new();

        let (output, bucket) = limiter.limit("/documents", || async { 42 }).await;

        assert_eq!(output, 42);
        assert_eq!(bucket.path(), "/documents");
    }

    #[tokio::test(start_paused = true)]
    async fn sweep_evicts_expired_buckets_only() {
        let clock = ManualClock::at(1_000);
        let limiter = RateLimiter::with_clock(Arc::new(clock.clone()));

        let expired = limiter.acquire("/documents/{key}").await;
        let active = limiter.acquire("/documents").await;
        let untouched = limiter.acquire("/documents/{key}/share").await;
        expired.update(Some(10), Some(0), Some(999));
        active.update(Some(10), Some(5), Some(1_001));
        // `untouched` never observed any headers, reset stays 0
        assert_eq!(limiter.bucket_count().await, 3);

        // Let one sweep interval elapse
        tokio::time::sleep(SWEEP_INTERVAL + Duration::from_secs(1)).await;

        assert_eq!(limiter.bucket_count().await, 2);
        assert!(Arc::ptr_eq(&limiter.acquire("/documents").await, &active));
        assert!(Arc::ptr_eq(
            &limiter.acquire("/documents/{key}/share").await,
            &untouched
        ));
    }

    #[tokio::test]
    async fn drop_aborts_sweeper() {
        let limiter = RateLimiter::new();
        let sweeper = limiter.sweeper.abort_handle();
        drop(limiter);

        while !sweeper.is_finished() {
            tokio::task::yield_now().await;
        }
    }
}
