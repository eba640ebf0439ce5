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
use crate::build_errors::Error as BuildError;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

pub mod basic;
pub mod bearer_token;
pub mod environment;
pub mod iam;
pub mod no_auth;

/// The result type for authenticator builders.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// The authentication types supported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthenticationType {
    /// No authentication headers.
    NoAuth,
    /// HTTP basic authentication.
    Basic,
    /// A static bearer token.
    BearerToken,
    /// IAM access tokens, created from an API key.
    Iam,
}

impl AuthenticationType {
    /// The name used for this type in the external configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoAuth => "noAuth",
            Self::Basic => "basic",
            Self::BearerToken => "bearerToken",
            Self::Iam => "iam",
        }
    }
}

impl std::fmt::Display for AuthenticationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuthenticationType {
    type Err = BuildError;

    /// Parses an authentication type, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [Self::NoAuth, Self::Basic, Self::BearerToken, Self::Iam]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BuildError::unknown_type(format!("{s:?}")))
    }
}

/// An implementation of [AuthenticatorProvider].
///
/// Represents an [Authenticator] used to obtain the authentication headers for
/// requests to IBM Cloud services.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::authenticators::bearer_token::Builder;
/// # use ibm_cloud_auth::authenticators::AuthenticationType;
/// # tokio_test::block_on(async {
/// let authenticator = Builder::new("my-access-token").build()?;
/// assert_eq!(authenticator.authentication_type(), AuthenticationType::BearerToken);
/// let headers = authenticator.headers().await?;
/// println!("{headers:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct Authenticator {
    // Authenticators are shared across threads (`Send + Sync`) and the
    // service clients that hold them are cloneable.
    inner: Arc<dyn dynamic::AuthenticatorProvider>,
}

impl<T> From<T> for Authenticator
where
    T: AuthenticatorProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Authenticator {
    /// Returns the headers to authenticate a request.
    ///
    /// The returned header values are marked as sensitive.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }

    /// Returns the type of this authenticator.
    pub fn authentication_type(&self) -> AuthenticationType {
        self.inner.authentication_type()
    }
}

/// Represents an authenticator used to obtain the headers for requests.
///
/// Implement this trait to provide custom authenticators, or to mock the
/// existing implementations in tests.
pub trait AuthenticatorProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;

    /// The type of authenticator.
    fn authentication_type(&self) -> AuthenticationType;
}

pub(crate) mod dynamic {
    use super::{AuthenticationType, Result};
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `AuthenticatorProvider`.
    #[async_trait::async_trait]
    pub trait AuthenticatorProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
        fn authentication_type(&self) -> AuthenticationType;
    }

    #[async_trait::async_trait]
    impl<T> AuthenticatorProvider for T
    where
        T: super::AuthenticatorProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }

        fn authentication_type(&self) -> AuthenticationType {
            T::authentication_type(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use http::HeaderValue;
    use test_case::test_case;

    #[test_case("noauth", AuthenticationType::NoAuth)]
    #[test_case("NOAUTH", AuthenticationType::NoAuth)]
    #[test_case("basic", AuthenticationType::Basic)]
    #[test_case("bearerToken", AuthenticationType::BearerToken)]
    #[test_case("BEARERTOKEN", AuthenticationType::BearerToken)]
    #[test_case("iam", AuthenticationType::Iam)]
    #[test_case("IAM", AuthenticationType::Iam)]
    fn parse(input: &str, want: AuthenticationType) -> anyhow::Result<()> {
        let got = input.parse::<AuthenticationType>()?;
        assert_eq!(got, want);
        assert_eq!(got.to_string(), want.as_str());
        Ok(())
    }

    #[test_case("")]
    #[test_case("container")]
    #[test_case("cp4d")]
    fn parse_unknown(input: &str) {
        let got = input.parse::<AuthenticationType>();
        assert!(got.as_ref().is_err_and(BuildError::is_unknown_type), "{got:?}");
    }

    #[derive(Debug)]
    struct Fake(std::result::Result<&'static str, &'static str>);

    impl AuthenticatorProvider for Fake {
        async fn headers(&self) -> Result<HeaderMap> {
            let value = self.0.map_err(|m| CredentialsError::from_msg(true, m))?;
            let mut headers = HeaderMap::new();
            headers.insert("x-test", HeaderValue::from_static(value));
            Ok(headers)
        }

        fn authentication_type(&self) -> AuthenticationType {
            AuthenticationType::NoAuth
        }
    }

    #[tokio::test]
    async fn custom_provider() -> anyhow::Result<()> {
        let auth = Authenticator::from(Fake(Ok("value")));
        assert_eq!(auth.authentication_type(), AuthenticationType::NoAuth);
        let headers = auth.headers().await?;
        assert_eq!(
            headers.get("x-test"),
            Some(&HeaderValue::from_static("value"))
        );

        let auth = Authenticator::from(Fake(Err("unavailable")));
        let err = auth.headers().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        Ok(())
    }

    #[test]
    fn send_sync() {
        static_assertions::assert_impl_all!(Authenticator: Clone, Send, Sync, std::fmt::Debug);
    }
}
