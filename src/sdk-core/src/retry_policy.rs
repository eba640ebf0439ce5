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

//! Defines traits for retry policies and some common implementations.
//!
//! The service clients can retry requests that fail with transient errors:
//! transport errors, `429 Too Many Requests`, and `5xx` responses other than
//! `501 Not Implemented`. Retries are disabled by default. Applications
//! enable them with [ClientBuilder::with_retries], or configure a custom
//! policy with [ClientBuilder::with_retry_policy] or
//! [RequestOptionsBuilder::with_retry_policy].
//!
//! The retry policy decides if an error is transient, and for how long the
//! retry loop may continue. Wait times between attempts are controlled by the
//! [backoff policy][crate::backoff_policy].
//!
//! # Example
//! ```
//! # use ibm_cloud_sdk_core::retry_policy::*;
//! use std::time::Duration;
//! // Stop after 5 attempts or 30 seconds, whichever limit is reached first.
//! let policy = IbmCloudRetryPolicy
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! ```
//!
//! [ClientBuilder::with_retries]: crate::client_builder::ClientBuilder::with_retries
//! [ClientBuilder::with_retry_policy]: crate::client_builder::ClientBuilder::with_retry_policy
//! [RequestOptionsBuilder::with_retry_policy]: crate::options::RequestOptionsBuilder::with_retry_policy

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors may resolve in future
/// attempts, and for how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the value
    ///   is always non-zero.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This method is called
    ///   before the first attempt, so the first value is zero.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = IbmCloudRetryPolicy.with_time_limit(Duration::from_secs(10));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// While the number of attempts is less than the prescribed limit the
    /// `on_error()` method returns the results of the inner policy. After
    /// that it returns [Exhausted][RetryResult::Exhausted] if the inner
    /// policy returns [Continue][RetryResult::Continue].
    ///
    /// Note that `maximum_attempts` counts the initial attempt: a policy
    /// allowing `N` retries is `with_attempt_limit(N + 1)`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::retry_policy::*;
    /// # use ibm_cloud_sdk_core::error::{ApiError, Error};
    /// use std::time::Instant;
    /// let policy = IbmCloudRetryPolicy.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error {
    ///     Error::service(ApiError::new(503, "try again"), http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// The default retry policy for IBM Cloud services.
///
/// This policy treats the following errors as transient:
/// - errors creating the authentication headers, if the authenticator
///   reports them as transient,
/// - transport errors, such as refused connections or timeouts during an
///   attempt,
/// - `429 Too Many Requests`,
/// - any `5xx` status code except `501 Not Implemented`.
///
/// All other errors are permanent. In particular, responses that fail to
/// deserialize are never retried because the request succeeded.
///
/// This policy does not limit the number of attempts. Decorate it with
/// [with_attempt_limit][RetryPolicyExt::with_attempt_limit] or
/// [with_time_limit][RetryPolicyExt::with_time_limit].
#[derive(Clone, Debug)]
pub struct IbmCloudRetryPolicy;

impl RetryPolicy for IbmCloudRetryPolicy {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> RetryResult {
        if error.is_deserialization() {
            return RetryResult::Permanent(error);
        }
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        match error.api_error().map(|e| e.status_code()) {
            Some(code) if is_retryable_status(code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

fn is_retryable_status(code: u16) -> bool {
    code == http::StatusCode::TOO_MANY_REQUESTS.as_u16()
        || ((500..600).contains(&code) && code != http::StatusCode::NOT_IMPLEMENTED.as_u16())
}

/// A retry policy that never retries.
///
/// This is the policy used when retries are disabled. All errors are
/// returned as [Permanent][RetryResult::Permanent].
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> RetryResult {
        RetryResult::Permanent(error)
    }
}

/// A retry policy that retries all errors.
///
/// Useful in tests, and as the inner policy of a decorator when the
/// application wants to retry every failure.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [IbmCloudRetryPolicy].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = IbmCloudRetryPolicy>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = LimitedElapsedTime::new(Duration::from_secs(10));
    /// ```
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: IbmCloudRetryPolicy,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn remaining_time_now(&self, start: Instant, now: Instant, count: u32) -> Option<Duration> {
        let deadline = start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(now);
        match self.inner.remaining_time(start, count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(start, count, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if Instant::now() >= start + self.maximum_duration {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn remaining_time(&self, start: Instant, count: u32) -> Option<Duration> {
        self.remaining_time_now(start, Instant::now(), count)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [IbmCloudRetryPolicy].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = IbmCloudRetryPolicy>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::retry_policy::*;
    /// // One initial attempt and up to 4 retries.
    /// let policy = LimitedAttemptCount::new(5);
    /// ```
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: IbmCloudRetryPolicy,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }

    /// The maximum number of attempts, including the initial attempt.
    pub fn maximum_attempts(&self) -> u32 {
        self.maximum_attempts
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(start, count, error) {
            RetryResult::Continue(e) if count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            flow => flow,
        }
    }

    fn remaining_time(&self, start: Instant, count: u32) -> Option<Duration> {
        self.inner.remaining_time(start, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, CredentialsError};
    use http::HeaderMap;
    use test_case::test_case;

    fn from_status(code: u16) -> Error {
        Error::service(ApiError::new(code, "test-only"), HeaderMap::new(), bytes::Bytes::new())
    }

    #[test_case(429)]
    #[test_case(500)]
    #[test_case(502)]
    #[test_case(503)]
    #[test_case(504)]
    #[test_case(599)]
    fn ibm_cloud_retryable_status(code: u16) {
        let p = IbmCloudRetryPolicy;
        let now = Instant::now();
        let flow = p.on_error(now, 1, from_status(code));
        assert!(flow.is_continue(), "{code} {flow:?}");
    }

    #[test_case(400)]
    #[test_case(401)]
    #[test_case(403)]
    #[test_case(404)]
    #[test_case(409)]
    #[test_case(501)]
    fn ibm_cloud_permanent_status(code: u16) {
        let p = IbmCloudRetryPolicy;
        let now = Instant::now();
        let flow = p.on_error(now, 1, from_status(code));
        assert!(flow.is_permanent(), "{code} {flow:?}");
    }

    #[test]
    fn ibm_cloud_other_errors() {
        let p = IbmCloudRetryPolicy;
        let now = Instant::now();

        let flow = p.on_error(now, 1, Error::io("err"));
        assert!(flow.is_continue(), "{flow:?}");
        let flow = p.on_error(now, 1, Error::timeout("err"));
        assert!(flow.is_continue(), "{flow:?}");
        let flow = p.on_error(now, 1, Error::authentication(CredentialsError::from_msg(true, "err")));
        assert!(flow.is_continue(), "{flow:?}");

        let flow = p.on_error(now, 1, Error::authentication(CredentialsError::from_msg(false, "err")));
        assert!(flow.is_permanent(), "{flow:?}");
        let flow = p.on_error(now, 1, Error::ser("err"));
        assert!(flow.is_permanent(), "{flow:?}");
        let flow = p.on_error(now, 1, Error::binding("err"));
        assert!(flow.is_permanent(), "{flow:?}");
        let flow = p.on_error(now, 1, Error::cancelled("err"));
        assert!(flow.is_permanent(), "{flow:?}");
        let flow = p.on_error(
            now,
            1,
            Error::deser_with_http_metadata("err", 200, HeaderMap::new(), bytes::Bytes::new()),
        );
        assert!(flow.is_permanent(), "{flow:?}");
        assert!(p.remaining_time(now, 0).is_none());
    }

    #[test]
    fn never_retry() {
        let p = NeverRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, from_status(503)).is_permanent());
        assert!(p.on_error(now, 1, Error::io("err")).is_permanent());
        assert!(p.remaining_time(now, 0).is_none());
    }

    #[test]
    fn always_retry() {
        let p = AlwaysRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, from_status(404)).is_continue());
        assert!(p.on_error(now, 1, Error::ser("err")).is_continue());
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_, _| None);

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(now, 1, from_status(503));
        assert!(rf.is_continue(), "{rf:?}");

        let rt = policy.remaining_time(now, 1);
        assert!(rt.is_some(), "{rt:?}");
    }

    #[test]
    fn limited_time_inner_continues() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, e| RetryResult::Continue(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(10));
        let rf = policy.on_error(now - Duration::from_secs(1), 1, from_status(503));
        assert!(rf.is_continue(), "{rf:?}");

        let rf = policy.on_error(now - Duration::from_secs(20), 1, from_status(503));
        assert!(rf.is_exhausted(), "{rf:?}");
    }

    #[test]
    fn limited_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, e| RetryResult::Permanent(e));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(now - Duration::from_secs(10), 1, from_status(503));
        assert!(rf.is_permanent(), "{rf:?}");

        let rf = policy.on_error(now - Duration::from_secs(70), 1, from_status(503));
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test]
    fn limited_time_remaining_inner_shorter() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(5)));
        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(120));
        let remaining = policy.remaining_time_now(now, now + Duration::from_secs(10), 1);
        assert_eq!(remaining, Some(Duration::from_secs(5)));
    }

    #[test]
    fn limited_time_remaining_inner_longer() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(500)));
        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(120));
        let remaining = policy.remaining_time_now(now, now + Duration::from_secs(100), 1);
        assert_eq!(remaining, Some(Duration::from_secs(20)));
    }

    #[test]
    fn limited_time_remaining_expired() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time().times(1).returning(|_, _| None);
        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(120));
        let remaining = policy.remaining_time_now(now, now + Duration::from_secs(200), 1);
        assert_eq!(remaining, Some(Duration::ZERO));
    }

    #[test]
    fn limited_attempt_count_on_error() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, e| RetryResult::Continue(e));

        let now = Instant::now();
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert_eq!(policy.maximum_attempts(), 3);
        assert!(policy.on_error(now, 1, from_status(503)).is_continue());
        assert!(policy.on_error(now, 2, from_status(503)).is_continue());
        assert!(policy.on_error(now, 3, from_status(503)).is_exhausted());
        assert!(policy.on_error(now, 4, from_status(503)).is_exhausted());
    }

    #[test]
    fn limited_attempt_count_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, e| RetryResult::Permanent(e));

        let now = Instant::now();
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert!(policy.on_error(now, 1, from_status(503)).is_permanent());
        assert!(policy.on_error(now, 5, from_status(503)).is_permanent());
    }

    #[test]
    fn limited_attempt_count_remaining_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(123)));
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert_eq!(
            policy.remaining_time(Instant::now(), 1),
            Some(Duration::from_secs(123))
        );
    }

    #[test]
    fn default_policy_with_limits() {
        let now = Instant::now();
        let policy = LimitedAttemptCount::new(2);
        assert!(policy.on_error(now, 1, from_status(503)).is_continue());
        assert!(policy.on_error(now, 2, from_status(503)).is_exhausted());
        assert!(policy.on_error(now, 1, from_status(404)).is_permanent());

        let policy = LimitedElapsedTime::new(Duration::from_secs(10));
        assert!(policy.on_error(now, 1, from_status(429)).is_continue());
    }

    // Verify `RetryPolicyArg` can be converted from the desired types.
    #[test]
    fn retry_policy_arg() {
        let _ = RetryPolicyArg::from(IbmCloudRetryPolicy.with_attempt_limit(3));
        let policy: Arc<dyn RetryPolicy> = Arc::new(NeverRetry);
        let arg = RetryPolicyArg::from(policy);
        let _: Arc<dyn RetryPolicy> = arg.into();
    }
}
