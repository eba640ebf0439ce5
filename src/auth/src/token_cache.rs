// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Result;
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Caches the tokens returned by a [TokenProvider].
///
/// The cache refreshes the token on demand, when it is missing or stale.
/// Concurrent callers that find a stale token share a single refresh: the
/// first caller holds the lock while it fetches a new token, the rest wait
/// for the lock and return the new token, or the error from the refresh.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    state: Arc<Mutex<State>>,
    inner: Arc<T>,
}

#[derive(Debug, Default)]
struct State {
    // The cached token, or the error from the last refresh.
    current: Option<Result<Token>>,
    // Incremented on each refresh.
    generation: u64,
}

impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            state: self.state.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            state: Arc::new(Mutex::new(State::default())),
            inner: Arc::new(inner),
        }
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let seen = {
            let state = self.state.lock().await;
            if let Some(Ok(token)) = &state.current {
                if !token.is_stale(Instant::now()) {
                    return Ok(token.clone());
                }
            }
            state.generation
        };

        let mut state = self.state.lock().await;
        if state.generation != seen {
            // Another caller refreshed the token while we waited for the lock.
            if let Some(result) = &state.current {
                return result.clone();
            }
        }
        tracing::debug!("refreshing token, generation={}", state.generation);
        let result = self.inner.token().await;
        state.current = Some(result.clone());
        state.generation += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use crate::token::tests::MockTokenProvider;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    static TOKEN_VALID_DURATION: Duration = Duration::from_secs(3600);

    fn token(value: &str, expires_at: Option<Instant>) -> Token {
        Token {
            token: value.to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
            refresh_at: None,
        }
    }

    #[tokio::test]
    async fn initial_token_success() -> anyhow::Result<()> {
        let expected = token("test-token", None);
        let expected_clone = expected.clone();

        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Ok(expected_clone));

        let cache = TokenCache::new(mock);
        let actual = cache.token().await?;
        assert_eq!(actual, expected);

        // The second call uses the cached token.
        let actual = cache.token().await?;
        assert_eq!(actual, expected);
        Ok(())
    }

    #[tokio::test]
    async fn initial_token_failure() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(2)
            .returning(|| Err(CredentialsError::from_msg(false, "fail")));

        let cache = TokenCache::new(mock);
        assert!(cache.token().await.is_err());
        // Errors are not cached across calls.
        assert!(cache.token().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_success() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token("initial-token", Some(now + TOKEN_VALID_DURATION));
        let initial_clone = initial.clone();
        let refresh = token("refresh-token", Some(now + 2 * TOKEN_VALID_DURATION));
        let refresh_clone = refresh.clone();

        let mut mock = MockTokenProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(refresh_clone));

        let cache = TokenCache::new(mock);
        let actual = cache.token().await?;
        assert_eq!(actual, initial);

        tokio::time::advance(TOKEN_VALID_DURATION).await;

        let actual = cache.token().await?;
        assert_eq!(actual, refresh);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_at_triggers_refresh() -> anyhow::Result<()> {
        let now = Instant::now();
        let mut initial = token("initial-token", Some(now + TOKEN_VALID_DURATION));
        initial.refresh_at = Some(now + TOKEN_VALID_DURATION / 2);
        let initial_clone = initial.clone();
        let refresh = token("refresh-token", Some(now + 2 * TOKEN_VALID_DURATION));
        let refresh_clone = refresh.clone();

        let mut mock = MockTokenProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(refresh_clone));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?, initial);
        tokio::time::advance(TOKEN_VALID_DURATION / 4).await;
        assert_eq!(cache.token().await?, initial);
        tokio::time::advance(TOKEN_VALID_DURATION / 4).await;
        assert_eq!(cache.token().await?, refresh);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_failure() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token("initial-token", Some(now + TOKEN_VALID_DURATION));
        let initial_clone = initial.clone();

        let mut mock = MockTokenProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Err(CredentialsError::from_msg(false, "fail")));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?, initial);

        tokio::time::advance(TOKEN_VALID_DURATION).await;

        // Return the error, not the expired token.
        assert!(cache.token().await.is_err());
        Ok(())
    }

    #[derive(Clone, Debug)]
    struct FakeTokenProvider {
        result: Result<Token>,
        calls: Arc<StdMutex<i32>>,
    }

    impl FakeTokenProvider {
        fn new(result: Result<Token>) -> Self {
            FakeTokenProvider {
                result,
                calls: Arc::new(StdMutex::new(0)),
            }
        }

        fn calls(&self) -> i32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl TokenProvider for FakeTokenProvider {
        async fn token(&self) -> Result<Token> {
            // Give the waiters in a thundering herd time to pile up.
            tokio::time::sleep(Duration::from_millis(50)).await;
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn thundering_herd_success() {
        let expected = token("initial-token", None);
        let tp = FakeTokenProvider::new(Ok(expected.clone()));
        let cache = TokenCache::new(tp.clone());

        let tasks = (0..100)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token().await })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            let actual = task.await.unwrap();
            assert!(actual.is_ok(), "{actual:?}");
            assert_eq!(actual.unwrap(), expected);
        }
        assert_eq!(tp.calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn thundering_herd_failure_shares_error() {
        let tp = FakeTokenProvider::new(Err(CredentialsError::from_msg(false, "epic fail")));
        let cache = TokenCache::new(tp.clone());

        let tasks = (0..100)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token().await })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            let actual = task.await.unwrap();
            let e = actual.err().map(|e| e.to_string()).unwrap_or_default();
            assert!(e.contains("epic fail"), "{e}");
        }
        // Tasks that start after the refresh completes retry the provider.
        assert!(tp.calls() < 100, "{}", tp.calls());
    }
}
