//! Login exchange types and the shared bearer-token cell.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::Result;

/// Body of the `POST login` credential exchange.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    /// Account API key.
    pub(crate) apikey: &'a str,
}

/// Successful login or refresh response body.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    /// Fresh bearer token.
    pub(crate) token: String,
}

/// Lazily-filled bearer token shared by all requests of one client.
///
/// The first caller to find the cell empty runs the login while holding
/// the write lock; concurrent callers queue behind that one exchange and
/// reuse its token. A failed exchange leaves the cell empty, so the next
/// caller retries instead of inheriting the failure.
#[derive(Debug, Default)]
pub(crate) struct TokenCell {
    inner: RwLock<Option<String>>,
}

impl TokenCell {
    /// Returns the cached token without initializing.
    pub(crate) async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Stores a fresh token, replacing any cached one.
    pub(crate) async fn set(&self, token: String) {
        *self.inner.write().await = Some(token);
    }

    /// Returns the cached token, running `init` to fill the cell if empty.
    ///
    /// `init` executes under the write lock, which is what serializes
    /// concurrent first calls into a single exchange. The cell is only
    /// written on success.
    pub(crate) async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if let Some(token) = self.inner.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut slot = self.inner.write().await;
        // Another caller may have filled the cell while we waited.
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        let token = init().await?;
        *slot = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::error::TvdbError;

    #[tokio::test]
    async fn test_init_runs_once_for_concurrent_callers() {
        // Arrange
        let cell = Arc::new(TokenCell::default());
        let calls = Arc::new(AtomicU32::new(0));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let cell = Arc::clone(&cell);
                let calls = Arc::clone(&calls);
                tokio::spawn(async move {
                    cell.get_or_try_init(|| async {
                        tokio::task::yield_now().await;
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(String::from("TOKEN"))
                    })
                    .await
                })
            })
            .collect();

        // Act
        for task in tasks {
            // Assert
            assert_eq!(task.await.unwrap().unwrap(), "TOKEN");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_init_is_not_cached() {
        // Arrange
        let cell = TokenCell::default();
        let calls = AtomicU32::new(0);

        // Act
        let first = cell
            .get_or_try_init(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TvdbError::MissingApiKey)
            })
            .await;
        let second = cell
            .get_or_try_init(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(String::from("RECOVERED"))
            })
            .await;

        // Assert
        assert!(first.is_err());
        assert_eq!(second.unwrap(), "RECOVERED");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_set_replaces_cached_token() {
        // Arrange
        let cell = TokenCell::default();
        cell.set(String::from("OLD")).await;

        // Act
        cell.set(String::from("NEW")).await;

        // Assert
        assert_eq!(cell.get().await.as_deref(), Some("NEW"));
        let token = cell
            .get_or_try_init(|| async { Ok(String::from("UNUSED")) })
            .await
            .unwrap();
        assert_eq!(token, "NEW");
    }
}
