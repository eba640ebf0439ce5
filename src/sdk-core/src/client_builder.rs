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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the service URL, the authenticator, or
//! enable retries. The IBM Cloud service clients for Rust use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use ibm_cloud_sdk_core::client_builder::examples;
//! # use ibm_cloud_sdk_core::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different service URL
//!
//! ```
//! # use ibm_cloud_sdk_core::client_builder::examples;
//! # use ibm_cloud_sdk_core::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_service_url("https://private.us-south.user-management.cloud.ibm.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: enable retries
//!
//! ```
//! # use ibm_cloud_sdk_core::client_builder::examples;
//! # use ibm_cloud_sdk_core::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! use std::time::Duration;
//! let client = Client::builder()
//!     .with_retries(3, Duration::from_secs(20))
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_sdk_core::client_builder::examples;
/// # use ibm_cloud_sdk_core::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_authenticator() => {
///         println!("error creating the authenticator {e:?}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error creating the client {e:?}");
///         return Err(e);
///     }
/// };
/// # Result::<()>::Ok(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not create the authenticator.
    ///
    /// The most common cause is missing or invalid credentials, such as an
    /// empty API key, or an unknown authentication type in the external
    /// configuration.
    pub fn is_authenticator(&self) -> bool {
        matches!(&self.0, ErrorKind::Authenticator(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the client configuration is invalid.
    ///
    /// For example, the service URL is empty, or an environment variable
    /// contains a value of the wrong type.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Authenticator(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn config<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create the authenticator")]
    Authenticator(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration")]
    Configuration(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud service clients for Rust a "client" represents a
/// connection to a specific service. Each client library defines a
/// `builder()` function that returns the right builder type. Applications
/// use this builder to change the default configuration.
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::client_builder::examples;
/// # use ibm_cloud_sdk_core::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_service_url("https://private.user-management.cloud.ibm.com")
///     .with_gzip_compression(true)
///     .build()
///     .await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Authenticator = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the service URL.
    ///
    /// Most applications use the default URL. Applications using private
    /// endpoints, or regional endpoints, need to change it.
    pub fn with_service_url<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The service clients can be dynamically instrumented with the
    /// [tracing] framework. Setting this flag enables this instrumentation.
    /// The instrumentation can also be enabled by setting the
    /// `IBM_CLOUD_RUST_LOGGING` environment variable to `true`.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authenticator used by the client.
    ///
    /// Most clients require an authenticator. When none is configured the
    /// client reads the authentication configuration from the environment,
    /// see [with_external_config][Self::with_external_config].
    pub fn with_authenticator<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Enables retries with the IBM Cloud defaults.
    ///
    /// The client retries transport errors, `429` responses, and `5xx`
    /// responses other than `501`, up to `max_retries` times. The delay
    /// between attempts grows exponentially up to `max_retry_interval`. If the
    /// service returns a `Retry-After` header, the client waits for the
    /// requested time, capped to `max_retry_interval`.
    ///
    /// A zero `max_retries` uses the default (4). A zero `max_retry_interval`
    /// uses the default (30 seconds).
    pub fn with_retries(mut self, max_retries: u32, max_retry_interval: Duration) -> Self {
        let (retry, backoff) = internal::retries(max_retries, max_retry_interval);
        self.config.retry_policy = Some(retry);
        self.config.backoff_policy = Some(backoff);
        self
    }

    /// Configure the retry policy.
    ///
    /// Retries are disabled by default. The retry policy determines what
    /// errors are retried, and for how long the client retries a request.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::client_builder::examples;
    /// # use ibm_cloud_sdk_core::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use ibm_cloud_sdk_core::retry_policy::{IbmCloudRetryPolicy, RetryPolicyExt};
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_retry_policy(IbmCloudRetryPolicy.with_attempt_limit(3))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    ///
    /// The backoff policy determines how long to wait in between retry
    /// attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Enables gzip compression of request bodies.
    pub fn with_gzip_compression(mut self, v: bool) -> Self {
        self.config.enable_gzip = v;
        self
    }

    /// Sets the headers included in every request.
    ///
    /// Headers set on a specific request take precedence over these values.
    pub fn with_default_headers(mut self, v: http::HeaderMap) -> Self {
        self.config.default_headers = v;
        self
    }

    /// Disables the verification of the service TLS certificates.
    ///
    /// This is intended for development environments using self-signed
    /// certificates. Do not use it in production.
    pub fn with_ssl_verification_disabled(mut self) -> Self {
        self.config.disable_ssl_verification = true;
        self
    }

    /// Reads additional configuration from the environment.
    ///
    /// The client reads `<SERVICE_NAME>_*` environment variables, and the
    /// `ibm-credentials.env` file, to configure the service URL, the
    /// authenticator, gzip compression, and retries. Explicit settings in this
    /// builder are not overridden, except for the authenticator, which is only
    /// read from the environment when none was configured.
    pub fn with_external_config<V: Into<String>>(mut self, service_name: V) -> Self {
        self.config.external_config = Some(service_name.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::{IbmCloudRetryPolicy, RetryPolicyExt};

    /// The retry count used when the application requests zero retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 4;
    /// The maximum backoff used when the application requests a zero interval.
    pub const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);

    pub trait ClientFactory {
        type Client;
        type Authenticator;
        fn build(
            self,
            config: internal::ClientConfig<Self::Authenticator>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Authenticator = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Creates the policies used by [ClientBuilder::with_retries].
    pub fn retries(
        max_retries: u32,
        max_retry_interval: Duration,
    ) -> (Arc<dyn RetryPolicy>, Arc<dyn BackoffPolicy>) {
        let max_retries = match max_retries {
            0 => DEFAULT_MAX_RETRIES,
            n => n,
        };
        let max_retry_interval = match max_retry_interval {
            d if d.is_zero() => DEFAULT_MAX_RETRY_INTERVAL,
            d => d,
        };
        let retry = IbmCloudRetryPolicy.with_attempt_limit(max_retries.saturating_add(1));
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(std::cmp::min(Duration::from_secs(1), max_retry_interval))
            .with_maximum_delay(max_retry_interval)
            .build()
            .unwrap_or_default();
        (Arc::new(retry), Arc::new(backoff))
    }

    /// Configure a client.
    ///
    /// A common client configuration for all the service clients. The
    /// `Cr` type is the authenticator type used by the clients.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub enable_gzip: bool,
        pub default_headers: http::HeaderMap,
        pub disable_ssl_verification: bool,
        pub external_config: Option<String>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                enable_gzip: false,
                default_headers: http::HeaderMap::new(),
                disable_ssl_verification: false,
                external_config: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Authenticator>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(pub(crate) Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Authenticator>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Authenticator = super::Authenticator;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Authenticator>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Authenticator {
        pub token: String,
    }

    pub mod authenticators {
        pub mod bearer_token {
            #[derive(Clone, Default)]
            pub struct Builder(super::super::Authenticator);
            impl Builder {
                pub fn new<V: Into<String>>(token: V) -> Self {
                    Self(super::super::Authenticator {
                        token: token.into(),
                    })
                }
                pub fn build(self) -> super::super::Authenticator {
                    self.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::error::{ApiError, Error as CoreError};
    use std::error::Error as _;
    use std::time::Instant;
    use test_case::test_case;

    #[test]
    fn error_kinds() {
        let e = Error::cred("test-only");
        assert!(e.is_authenticator(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(!e.is_configuration(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::transport("test-only");
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_authenticator(), "{e:?}");

        let e = Error::config("test-only");
        assert!(e.is_configuration(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::<examples::Authenticator>::default();
        assert!(config.endpoint.is_none(), "{config:?}");
        assert!(config.cred.is_none(), "{config:?}");
        assert!(!config.tracing, "{config:?}");
        assert!(config.retry_policy.is_none(), "{config:?}");
        assert!(config.backoff_policy.is_none(), "{config:?}");
        assert!(!config.enable_gzip, "{config:?}");
        assert!(config.default_headers.is_empty(), "{config:?}");
        assert!(!config.disable_ssl_verification, "{config:?}");
        assert!(config.external_config.is_none(), "{config:?}");
    }

    #[test]
    fn setters() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-test", http::HeaderValue::from_static("test-value"));
        let builder = examples::Client::builder()
            .with_service_url("http://127.0.0.1:1")
            .with_tracing()
            .with_authenticator(
                examples::authenticators::bearer_token::Builder::new("token").build(),
            )
            .with_retries(2, Duration::from_secs(5))
            .with_gzip_compression(true)
            .with_default_headers(headers.clone())
            .with_ssl_verification_disabled()
            .with_external_config("user_management");
        let config = builder.config;
        assert_eq!(config.endpoint.as_deref(), Some("http://127.0.0.1:1"));
        assert!(config.tracing, "{config:?}");
        assert_eq!(config.cred.map(|c| c.token).as_deref(), Some("token"));
        assert!(config.retry_policy.is_some());
        assert!(config.backoff_policy.is_some());
        assert!(config.enable_gzip);
        assert_eq!(config.default_headers, headers);
        assert!(config.disable_ssl_verification);
        assert_eq!(config.external_config.as_deref(), Some("user_management"));
    }

    #[test]
    fn retry_and_backoff_policies() {
        use crate::exponential_backoff::ExponentialBackoff;
        use crate::retry_policy::NeverRetry;
        let config = examples::Client::builder()
            .with_retry_policy(NeverRetry)
            .with_backoff_policy(ExponentialBackoff::default())
            .config;
        assert!(config.retry_policy.is_some(), "{config:?}");
        assert!(config.backoff_policy.is_some(), "{config:?}");
    }

    fn transient() -> CoreError {
        CoreError::service(
            ApiError::new(503, "try-again"),
            http::HeaderMap::new(),
            bytes::Bytes::new(),
        )
    }

    #[test_case(1, 2)]
    #[test_case(3, 4)]
    #[test_case(0, DEFAULT_MAX_RETRIES + 1)]
    fn retries_attempt_limit(max_retries: u32, want_attempts: u32) {
        let (retry, _) = retries(max_retries, Duration::from_secs(10));
        let now = Instant::now();
        for attempt in 1..want_attempts {
            let flow = retry.on_error(now, attempt, transient());
            assert!(flow.is_continue(), "{attempt} {flow:?}");
        }
        let flow = retry.on_error(now, want_attempts, transient());
        assert!(flow.is_exhausted(), "{flow:?}");
    }

    #[test_case(Duration::from_secs(10), Duration::from_secs(10))]
    #[test_case(Duration::from_millis(200), Duration::from_millis(200))]
    #[test_case(Duration::ZERO, DEFAULT_MAX_RETRY_INTERVAL)]
    fn retries_interval(interval: Duration, want: Duration) {
        let (_, backoff) = retries(1, interval);
        let now = Instant::now();
        for attempt in 1..10 {
            let d = backoff.on_failure(now, attempt);
            assert!(d <= want, "{attempt} {d:?}");
        }
        let hint = Duration::from_secs(3600);
        assert_eq!(backoff.on_retry_after(now, 1, hint), want);
    }

    #[tokio::test]
    async fn build() -> anyhow::Result<()> {
        let client = examples::Client::builder()
            .with_service_url("http://127.0.0.1:1")
            .build()
            .await?;
        assert_eq!(client.0.endpoint.as_deref(), Some("http://127.0.0.1:1"));
        Ok(())
    }
}
