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

//! The decision a [RetryPolicy][crate::retry_policy::RetryPolicy] makes after
//! a failed attempt.

use crate::error::Error;

/// What the retry loop does with a failed attempt.
///
/// # Example
/// A policy that only retries `503 Service Unavailable`, at most twice.
/// ```
/// # use ibm_cloud_sdk_core::{error::Error, retry_result::RetryResult};
/// #[derive(Debug)]
/// struct OnlyUnavailable;
/// impl ibm_cloud_sdk_core::retry_policy::RetryPolicy for OnlyUnavailable {
///     fn on_error(&self, _: std::time::Instant, attempt_count: u32, error: Error) -> RetryResult {
///         match error.http_status_code() {
///             Some(503) if attempt_count > 2 => RetryResult::Exhausted(error),
///             Some(503) => RetryResult::Continue(error),
///             _ => RetryResult::Permanent(error),
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// Stop, the error is returned as-is.
    Permanent(Error),

    /// Stop, the error is returned wrapped in an
    /// [exhausted][Error::is_exhausted] error.
    Exhausted(Error),

    /// Wait for the backoff delay and try again.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}
