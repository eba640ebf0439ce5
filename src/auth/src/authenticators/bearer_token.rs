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

//! An authenticator using a static bearer token.
//!
//! The application is responsible for obtaining the token, and for creating
//! a new authenticator when the token expires.

use super::{AuthenticationType, Authenticator, AuthenticatorProvider, BuildResult};
use crate::Result;
use crate::build_errors::validate;
use crate::headers_util::build_bearer_headers;
use crate::token::Token;
use http::HeaderMap;

#[derive(Debug)]
struct BearerTokenAuthenticator {
    token: Token,
}

impl AuthenticatorProvider for BearerTokenAuthenticator {
    async fn headers(&self) -> Result<HeaderMap> {
        build_bearer_headers(&self.token)
    }

    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::BearerToken
    }
}

/// A builder for bearer token [Authenticator]s.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::authenticators::bearer_token::Builder;
/// # tokio_test::block_on(async {
/// let authenticator = Builder::new("my-access-token").build()?;
/// let headers = authenticator.headers().await?;
/// assert!(headers.contains_key(http::header::AUTHORIZATION));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
pub struct Builder {
    token: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns an [Authenticator] with the configured settings.
    ///
    /// # Errors
    /// Returns an error if the token is empty, or if it starts or ends with
    /// braces or quotes.
    pub fn build(self) -> BuildResult<Authenticator> {
        validate("bearer_token", &self.token)?;
        Ok(Authenticator::from(BearerTokenAuthenticator {
            token: Token {
                token: self.token,
                token_type: "Bearer".to_string(),
                expires_at: None,
                refresh_at: None,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let auth = Builder::new("test-token").build()?;
        assert_eq!(auth.authentication_type(), AuthenticationType::BearerToken);
        let headers = auth.headers().await?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION);
        assert_eq!(value, Some(&HeaderValue::from_static("Bearer test-token")));
        assert!(value.is_some_and(HeaderValue::is_sensitive), "{value:?}");
        Ok(())
    }

    #[test]
    fn missing() {
        let err = Builder::new("").build().err();
        assert!(
            err.as_ref().is_some_and(|e| e.is_missing_field()),
            "{err:?}"
        );
    }

    #[test]
    fn invalid() {
        let err = Builder::new("{token}").build().err();
        assert!(
            err.as_ref().is_some_and(|e| e.is_invalid_value()),
            "{err:?}"
        );
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let builder = Builder::new("test-secret-token");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("test-secret-token"), "{fmt}");
        let auth = builder.build()?;
        let fmt = format!("{auth:?}");
        assert!(!fmt.contains("test-secret-token"), "{fmt}");
        Ok(())
    }
}
