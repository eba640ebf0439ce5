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

//! Doubling backoff with full jitter.
//!
//! After the `n`-th failed attempt the policy waits a random delay between
//! zero and `initial_delay * 2^(n-1)`, capped at `maximum_delay`. A
//! `Retry-After` hint replaces the random delay, and is capped at
//! `maximum_delay` as well.
//!
//! The clients use this policy when retries are enabled, with the maximum
//! retry interval as the maximum delay.

use std::time::{Duration, Instant};

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Builds [ExponentialBackoff] policies.
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::exponential_backoff::{Error, ExponentialBackoffBuilder};
/// # use ibm_cloud_sdk_core::backoff_policy::BackoffPolicy;
/// use std::time::{Duration, Instant};
/// let backoff = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(500))
///     .with_maximum_delay(Duration::from_secs(10))
///     .build()?;
/// assert!(backoff.on_failure(Instant::now(), 2) <= Duration::from_secs(1));
/// // The service asked for more than the maximum delay.
/// let hint = Duration::from_secs(60);
/// assert_eq!(backoff.on_retry_after(Instant::now(), 1, hint), Duration::from_secs(10));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with a one second initial delay and a thirty second
    /// maximum delay.
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
        }
    }

    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Creates the policy.
    ///
    /// Fails if the initial delay is zero, or if it exceeds the maximum delay.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
        })
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(30);

/// Doubling backoff with full jitter, see the [module][self] docs.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
}

impl ExponentialBackoff {
    /// The upper bound for all delays, including `Retry-After` hints.
    pub fn maximum_delay(&self) -> Duration {
        self.maximum_delay
    }

    /// The delay before jitter.
    fn ceiling(&self, attempt_count: u32) -> Duration {
        // Past 2^31 every delay is capped anyway.
        let doublings = attempt_count.saturating_sub(1).min(31);
        self.initial_delay
            .checked_mul(1_u32 << doublings)
            .map_or(self.maximum_delay, |d| d.min(self.maximum_delay))
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
        }
    }
}

/// Scales `delay` by `fraction`, a value in `[0.0, 1.0)`.
fn jitter(delay: Duration, fraction: f64) -> Duration {
    delay.mul_f64(fraction.clamp(0.0, 1.0))
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        let fraction = rand::Rng::random::<f64>(&mut rand::rng());
        jitter(self.ceiling(attempt_count), fraction)
    }

    fn on_retry_after(&self, _loop_start: Instant, _attempt_count: u32, hint: Duration) -> Duration {
        hint.min(self.maximum_delay)
    }
}
