//! Minimum-interval throttle for outgoing geocoding requests
//!
//! One `Throttle` is built per process and shared by `Arc` with every call
//! site that talks to the geocoder. Callers queue in call order; nobody is
//! rejected.

use crate::constants::api::GEOCODE_MIN_INTERVAL_MS;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Spaces out request starts by at least `min_interval`
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Create a throttle; intervals below the service floor are raised to it
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval: min_interval.max(Self::floor()),
            last: Mutex::new(None),
        }
    }

    /// Create a throttle from a millisecond interval
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Smallest interval the throttle will ever use
    pub fn floor() -> Duration {
        Duration::from_millis(GEOCODE_MIN_INTERVAL_MS)
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait for this caller's turn and return the instant it was granted
    ///
    /// The first call returns immediately. Later calls sleep until
    /// `min_interval` has passed since the previous grant. The lock is held
    /// while sleeping, so waiters are granted in the order they arrived.
    pub async fn acquire(&self) -> Instant {
        let mut last = self.last.lock().await;

        if let Some(previous) = *last {
            let ready = previous + self.min_interval;
            if Instant::now() < ready {
                debug!(
                    "Throttling geocode request for {:?}",
                    ready.saturating_duration_since(Instant::now())
                );
                sleep_until(ready).await;
            }
        }

        let granted = Instant::now();
        *last = Some(granted);
        granted
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_interval_never_below_floor() {
        assert_eq!(Throttle::from_millis(10).min_interval(), Duration::from_millis(1100));
        assert_eq!(Throttle::from_millis(2000).min_interval(), Duration::from_millis(2000));
        assert_eq!(Throttle::default().min_interval(), Throttle::floor());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_acquire_is_immediate() {
        let throttle = Throttle::default();
        let start = Instant::now();
        let granted = throttle.acquire().await;
        assert!(granted.duration_since(start) < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_acquires_are_spaced() {
        let throttle = Throttle::default();
        let first = throttle.acquire().await;
        let second = throttle.acquire().await;
        let third = throttle.acquire().await;

        assert!(second.duration_since(first) >= Duration::from_millis(1100));
        assert!(third.duration_since(second) >= Duration::from_millis(1100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_after_idle_gap() {
        let throttle = Throttle::default();
        throttle.acquire().await;

        tokio::time::sleep(Duration::from_secs(5)).await;
        let before = Instant::now();
        let granted = throttle.acquire().await;
        assert!(granted.duration_since(before) < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waiters_served_in_call_order() {
        let throttle = Arc::new(Throttle::default());
        let grants = Arc::new(std::sync::Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for id in 0..4 {
            let throttle = Arc::clone(&throttle);
            let grants = Arc::clone(&grants);
            handles.push(tokio::spawn(async move {
                let at = throttle.acquire().await;
                grants.lock().unwrap().push((id, at));
            }));
            // Let the task reach the lock queue before spawning the next
            tokio::task::yield_now().await;
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let grants = grants.lock().unwrap();
        let ids: Vec<_> = grants.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        for pair in grants.windows(2) {
            assert!(pair[1].1.duration_since(pair[0].1) >= Duration::from_millis(1100));
        }
    }
}
