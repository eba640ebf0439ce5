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

//! An authenticator that adds no headers.
//!
//! Use this authenticator with services that do not require authentication,
//! or when the authentication headers are set by other means, for example,
//! using the default headers of a service client.

use super::{AuthenticationType, Authenticator, AuthenticatorProvider};
use crate::Result;
use http::HeaderMap;

#[derive(Debug)]
struct NoAuthAuthenticator;

impl AuthenticatorProvider for NoAuthAuthenticator {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }

    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::NoAuth
    }
}

/// A builder for [Authenticator]s that add no headers.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::authenticators::no_auth::Builder;
/// # tokio_test::block_on(async {
/// let authenticator = Builder::new().build();
/// let headers = authenticator.headers().await?;
/// assert!(headers.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {}
    }

    /// Returns an [Authenticator] that adds no headers.
    pub fn build(self) -> Authenticator {
        Authenticator::from(NoAuthAuthenticator)
    }
}
