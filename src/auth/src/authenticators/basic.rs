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

//! An authenticator using HTTP basic authentication.
//!
//! The authenticator sends `Authorization: Basic <credentials>` with each
//! request, where `<credentials>` is the base64 encoding of
//! `username:password`.

use super::{AuthenticationType, Authenticator, AuthenticatorProvider, BuildResult};
use crate::Result;
use crate::build_errors::validate;
use crate::headers_util::build_basic_headers;
use http::HeaderMap;

struct BasicAuthenticator {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

impl AuthenticatorProvider for BasicAuthenticator {
    async fn headers(&self) -> Result<HeaderMap> {
        build_basic_headers(&self.username, &self.password)
    }

    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::Basic
    }
}

/// A builder for basic authentication [Authenticator]s.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::authenticators::basic::Builder;
/// # tokio_test::block_on(async {
/// let authenticator = Builder::new("my-user", "my-password").build()?;
/// let headers = authenticator.headers().await?;
/// assert!(headers.contains_key(http::header::AUTHORIZATION));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
pub struct Builder {
    username: String,
    password: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given username and password.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns an [Authenticator] with the configured settings.
    ///
    /// # Errors
    /// Returns an error if the username or password are empty, or if they
    /// start or end with braces or quotes.
    pub fn build(self) -> BuildResult<Authenticator> {
        validate("username", &self.username)?;
        validate("password", &self.password)?;
        Ok(Authenticator::from(BasicAuthenticator {
            username: self.username,
            password: self.password,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use test_case::test_case;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let auth = Builder::new("user", "pass").build()?;
        assert_eq!(auth.authentication_type(), AuthenticationType::Basic);
        let headers = auth.headers().await?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION);
        assert_eq!(value, Some(&HeaderValue::from_static("Basic dXNlcjpwYXNz")));
        assert!(value.is_some_and(HeaderValue::is_sensitive), "{value:?}");
        Ok(())
    }

    #[test_case("", "pass")]
    #[test_case("user", "")]
    fn missing(username: &str, password: &str) {
        let got = Builder::new(username, password).build();
        let err = got.err();
        assert!(
            err.as_ref().is_some_and(|e| e.is_missing_field()),
            "{err:?}"
        );
    }

    #[test_case("{user}", "pass")]
    #[test_case("user", "\"pass\"")]
    fn invalid(username: &str, password: &str) {
        let got = Builder::new(username, password).build();
        let err = got.err();
        assert!(
            err.as_ref().is_some_and(|e| e.is_invalid_value()),
            "{err:?}"
        );
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let builder = Builder::new("test-user", "test-password");
        let fmt = format!("{builder:?}");
        assert!(fmt.contains("test-user"), "{fmt}");
        assert!(!fmt.contains("test-password"), "{fmt}");

        let auth = builder.build()?;
        let fmt = format!("{auth:?}");
        assert!(!fmt.contains("test-password"), "{fmt}");
        Ok(())
    }
}
