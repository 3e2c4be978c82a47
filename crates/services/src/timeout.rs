use std::future::Future;
use std::time::Duration;

/// Bounded wait around unreliable storage calls.
///
/// Resolves to `None` on timeout so callers can fall back and continue
/// instead of blocking indefinitely. Not a correctness mechanism: a timed
/// out write may still land later, and last write wins.
pub async fn with_timeout<T>(duration: Duration, future: impl Future<Output = T>) -> Option<T> {
    tokio::time::timeout(duration, future).await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fast_future_resolves() {
        let result = with_timeout(Duration::from_secs(1), async { 42 }).await;
        assert_eq!(result, Some(42));
    }

    #[tokio::test]
    async fn slow_future_times_out() {
        let result = with_timeout(Duration::from_millis(5), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            42
        })
        .await;
        assert_eq!(result, None);
    }
}
