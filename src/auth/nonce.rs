//! Nonce management for YoBit trade API authentication.
//!
//! YoBit rejects any trade API call whose nonce is not greater than the last
//! nonce it accepted for the same key. Each client owns a [`NonceCounter`]
//! that applies a [`NonceUpdatePolicy`] before every signed request.

use std::future::Future;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use futures_util::future::{self, BoxFuture, FutureExt};
use tokio::sync::Mutex;

use crate::error::YobitError;

/// Maps the current nonce to the next one.
///
/// The update may suspend, for example when the nonce lives in a shared
/// store, so it returns a boxed future. It is called exactly once per signed
/// request, while the counter's lock is held.
pub trait NonceUpdatePolicy: Send + Sync {
    /// Compute the nonce to use for the next request.
    ///
    /// The returned value must be strictly greater than `current`.
    fn next_nonce(&self, current: u64) -> BoxFuture<'_, Result<u64, YobitError>>;
}

/// The default policy: `current + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementNonce;

impl NonceUpdatePolicy for IncrementNonce {
    fn next_nonce(&self, current: u64) -> BoxFuture<'_, Result<u64, YobitError>> {
        let next = current.checked_add(1).ok_or(YobitError::InvalidNonce {
            current,
            next: current,
        });
        future::ready(next).boxed()
    }
}

/// A policy backed by an async closure.
///
/// ```rust
/// use yobit_api_client::YobitError;
/// use yobit_api_client::auth::FnNonceUpdate;
///
/// let policy = FnNonceUpdate::new(|current| async move { Ok::<_, YobitError>(current + 10) });
/// # let _ = policy;
/// ```
pub struct FnNonceUpdate<F> {
    update: F,
}

impl<F> FnNonceUpdate<F> {
    /// Wrap an async closure as a nonce update policy.
    pub fn new<Fut>(update: F) -> Self
    where
        F: Fn(u64) -> Fut + Send + Sync,
        Fut: Future<Output = Result<u64, YobitError>> + Send + 'static,
    {
        Self { update }
    }
}

impl<F, Fut> NonceUpdatePolicy for FnNonceUpdate<F>
where
    F: Fn(u64) -> Fut + Send + Sync,
    Fut: Future<Output = Result<u64, YobitError>> + Send + 'static,
{
    fn next_nonce(&self, current: u64) -> BoxFuture<'_, Result<u64, YobitError>> {
        (self.update)(current).boxed()
    }
}

/// Per-client nonce state.
///
/// Reading the current value, awaiting the policy and committing the result
/// happen under one async lock, so concurrent callers never share a nonce.
pub struct NonceCounter {
    current: Mutex<u64>,
    policy: Arc<dyn NonceUpdatePolicy>,
}

impl NonceCounter {
    /// Create a counter starting at `initial`.
    pub fn new(initial: u64, policy: Arc<dyn NonceUpdatePolicy>) -> Self {
        Self {
            current: Mutex::new(initial),
            policy,
        }
    }

    /// Create a counter starting at the current Unix time in seconds.
    pub fn starting_now(policy: Arc<dyn NonceUpdatePolicy>) -> Self {
        Self::new(unix_time_secs(), policy)
    }

    /// The last committed nonce.
    pub async fn current(&self) -> u64 {
        *self.current.lock().await
    }

    /// Apply the policy and commit the result, returning the new nonce.
    ///
    /// On error the stored nonce is left unchanged.
    pub async fn advance(&self) -> Result<u64, YobitError> {
        let mut current = self.current.lock().await;
        let next = self.policy.next_nonce(*current).await?;
        if next <= *current {
            return Err(YobitError::InvalidNonce {
                current: *current,
                next,
            });
        }
        *current = next;
        Ok(next)
    }
}

impl std::fmt::Debug for NonceCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceCounter").finish_non_exhaustive()
    }
}

/// Seconds since the UNIX epoch.
pub fn unix_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn test_nonce_strictly_increasing() {
        let counter = NonceCounter::new(1000, Arc::new(IncrementNonce));

        let mut last = 1000u64;
        for _ in 0..1000 {
            let nonce = tokio_test::block_on(counter.advance()).unwrap();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
        assert_eq!(last, 2000);
    }

    #[test]
    fn test_starting_now_uses_unix_seconds() {
        let before = unix_time_secs();
        let counter = NonceCounter::starting_now(Arc::new(IncrementNonce));
        let initial = tokio_test::block_on(counter.current());
        assert!(initial >= before);
        assert!(initial <= unix_time_secs());
    }

    #[tokio::test]
    async fn test_custom_async_policy() {
        let policy = FnNonceUpdate::new(|current| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            Ok::<_, YobitError>(current + 5)
        });
        let counter = NonceCounter::new(10, Arc::new(policy));

        assert_eq!(counter.advance().await.unwrap(), 15);
        assert_eq!(counter.advance().await.unwrap(), 20);
        assert_eq!(counter.current().await, 20);
    }

    #[tokio::test]
    async fn test_non_increasing_policy_rejected() {
        let policy = FnNonceUpdate::new(|current| async move { Ok::<_, YobitError>(current) });
        let counter = NonceCounter::new(42, Arc::new(policy));

        let err = counter.advance().await.unwrap_err();
        assert!(matches!(
            err,
            YobitError::InvalidNonce {
                current: 42,
                next: 42
            }
        ));
        assert_eq!(counter.current().await, 42);
    }

    #[tokio::test]
    async fn test_policy_error_keeps_nonce() {
        let policy = FnNonceUpdate::new(|_| async move {
            Err::<u64, _>(YobitError::NonceStore("store offline".to_string()))
        });
        let counter = NonceCounter::new(7, Arc::new(policy));

        assert!(matches!(
            counter.advance().await,
            Err(YobitError::NonceStore(_))
        ));
        assert_eq!(counter.current().await, 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_nonce_unique_across_tasks() {
        // The yield inside the policy would interleave unguarded updates.
        let policy = FnNonceUpdate::new(|current| async move {
            tokio::task::yield_now().await;
            Ok::<_, YobitError>(current + 1)
        });
        let counter = Arc::new(NonceCounter::new(0, Arc::new(policy)));

        let mut handles = vec![];
        for _ in 0..8 {
            let c = counter.clone();
            handles.push(tokio::spawn(async move {
                let mut nonces = Vec::new();
                for _ in 0..100 {
                    nonces.push(c.advance().await.unwrap());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            for nonce in handle.await.unwrap() {
                assert!(all_nonces.insert(nonce), "Nonce must be unique across tasks");
            }
        }
        assert_eq!(all_nonces.len(), 800);
        assert_eq!(counter.current().await, 800);
    }
}
