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

//! Defines traits for backoff policies and a common implementation.
//!
//! The service clients retry requests that fail with transient errors when
//! retries are enabled. Retry strategies should avoid immediately retrying a
//! request, as the service may need time to recover. [Exponential backoff]
//! is a well known algorithm to find an acceptable delay between retries.
//!
//! Services may also request a specific delay using the `Retry-After`
//! header. Backoff policies receive this hint via
//! [on_retry_after][BackoffPolicy::on_retry_after].
//!
//! # Example
//! ```
//! # use ibm_cloud_sdk_core::*;
//! # use ibm_cloud_sdk_core::backoff_policy::*;
//! use exponential_backoff::ExponentialBackoffBuilder;
//! use std::time::Duration;
//!
//! fn make_backoff() -> Result<BackoffPolicyArg> {
//!     let policy = ExponentialBackoffBuilder::new()
//!         .with_initial_delay(Duration::from_millis(100))
//!         .with_maximum_delay(Duration::from_secs(5))
//!         .build()
//!         .map_err(error::Error::binding)?;
//!     Ok(policy.into())
//! }
//! ```
//!
//! [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Defines the trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the backoff delay on a failure.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This method is always called
    ///   after the first attempt.
    fn on_failure(&self, loop_start: Instant, attempt_count: u32) -> Duration;

    /// Returns the backoff delay when the service requested a delay.
    ///
    /// The default implementation uses the hint as-is. Implementations
    /// typically cap the hint to some maximum delay.
    fn on_retry_after(&self, _loop_start: Instant, _attempt_count: u32, hint: Duration) -> Duration {
        hint
    }
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone)]
pub struct BackoffPolicyArg(pub(crate) Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> std::convert::From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;

    #[derive(Debug)]
    struct Fixed;
    impl BackoffPolicy for Fixed {
        fn on_failure(&self, _loop_start: Instant, _attempt_count: u32) -> Duration {
            Duration::from_millis(1)
        }
    }

    // Verify `BackoffPolicyArg` can be converted from the desired types.
    #[test]
    fn backoff_policy_arg() {
        let policy = ExponentialBackoff::default();
        let _ = BackoffPolicyArg::from(policy);

        let policy: Arc<dyn BackoffPolicy> = Arc::new(ExponentialBackoff::default());
        let arg = BackoffPolicyArg::from(policy);
        let _: Arc<dyn BackoffPolicy> = arg.into();
    }

    #[test]
    fn default_retry_after_uses_hint() {
        let hint = Duration::from_secs(17);
        assert_eq!(Fixed.on_retry_after(Instant::now(), 1, hint), hint);
        assert_eq!(Fixed.on_failure(Instant::now(), 1), Duration::from_millis(1));
    }
}
