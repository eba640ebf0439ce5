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

//! Per request options.
//!
//! The client defaults are intended to work for most applications. Sometimes
//! an application needs to customize a single call: it may want a shorter
//! deadline, the ability to cancel the call, or a different retry policy. The
//! `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can override these
//! defaults.
//!
//! # Example
//! ```
//! # use ibm_cloud_sdk_core::options::RequestOptions;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! let token = CancellationToken::new();
//! let mut options = RequestOptions::default();
//! options.set_timeout(Duration::from_secs(30));
//! options.set_attempt_timeout(Duration::from_secs(10));
//! options.set_cancellation_token(token.clone());
//! // Later, from another task:
//! token.cancel();
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right request options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    attempt_timeout: Option<Duration>,
    cancellation_token: Option<CancellationToken>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the overall timeout for the request.
    ///
    /// The deadline covers all attempts and the time spent in backoff between
    /// attempts. Once it elapses the request fails with an error where
    /// [is_timeout][crate::error::Error::is_timeout] returns `true`.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the current overall timeout.
    pub fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt.
    /// Attempts that time out may be retried.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets a token to cancel the request.
    ///
    /// Cancelling the token stops the request, including any pending retries.
    /// The request then fails with an error where
    /// [is_cancelled][crate::error::Error::is_cancelled] returns `true`.
    pub fn set_cancellation_token(&mut self, v: CancellationToken) {
        self.cancellation_token = Some(v);
    }

    /// Gets the current cancellation token.
    pub fn cancellation_token(&self) -> &Option<CancellationToken> {
        &self.cancellation_token
    }

    /// Get the current retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The service clients provide a builder for each operation. These builders
/// can be used to set the request parameters, e.g., the account targeted by
/// the operation, as well as any options affecting the request, such as
/// timeouts or cancellation.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the overall timeout, including all attempts and backoff.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the token used to cancel the request.
    fn with_cancellation_token(self, v: CancellationToken) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_cancellation_token(mut self, v: CancellationToken) -> Self {
        self.request_options().set_cancellation_token(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }
}
