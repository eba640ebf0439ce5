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

//! [IAM] authenticator.
//!
//! The IAM authenticator exchanges an IBM Cloud API key for an access token
//! at the IAM token service, and sends the access token with each request.
//! Access tokens are cached. The authenticator fetches a new token once 80%
//! of the token lifetime has elapsed, the next time the headers are needed.
//!
//! # Example
//! ```
//! # use ibm_cloud_auth::authenticators::iam::Builder;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let authenticator = Builder::new("my-api-key")
//!     .with_url("https://private.iam.cloud.ibm.com")
//!     .build()?;
//! # Ok(()) }
//! ```
//!
//! [IAM]: https://cloud.ibm.com/docs/account?topic=account-iamoverview

use super::{AuthenticationType, Authenticator, AuthenticatorProvider, BuildResult};
use crate::Result;
use crate::build_errors::{Error as BuildError, validate};
use crate::errors::{self, CredentialsError, is_retryable};
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use http::header::ACCEPT;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::Instant;

/// The default URL for the IAM token service.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const TOKEN_PATH: &str = "/identity/token";
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";

#[derive(Debug, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    // Seconds since the epoch.
    #[serde(default)]
    expiration: Option<u64>,
}

impl IamTokenResponse {
    /// The token lifetime, from `expires_in` or else from `expiration`.
    ///
    /// A token without either value is used for a single request.
    fn lifetime(&self, now: SystemTime) -> Duration {
        if let Some(secs) = self.expires_in {
            return Duration::from_secs(secs);
        }
        self.expiration
            .map(|secs| UNIX_EPOCH + Duration::from_secs(secs))
            .and_then(|expiration| expiration.duration_since(now).ok())
            .unwrap_or(Duration::ZERO)
    }
}

struct IamTokenProvider {
    client: reqwest::Client,
    apikey: String,
    endpoint: String,
    client_credentials: Option<(String, String)>,
    scope: Option<String>,
    disable_ssl_verification: bool,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamTokenProvider")
            .field("apikey", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field(
                "client_id",
                &self.client_credentials.as_ref().map(|(id, _)| id),
            )
            .field("scope", &self.scope)
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        tracing::debug!("fetching IAM access token from {}", self.endpoint);
        let mut form = vec![
            ("grant_type", GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", RESPONSE_TYPE),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }
        let mut builder = self
            .client
            .post(self.endpoint.as_str())
            .header(ACCEPT, "application/json")
            .form(&form);
        if let Some((id, secret)) = &self.client_credentials {
            builder = builder.basic_auth(id, Some(secret));
        }
        let resp = builder.send().await.map_err(errors::retryable)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| CredentialsError::from_source(is_retryable(status), e))?;
            return Err(CredentialsError::from_msg(
                is_retryable(status),
                format!("the IAM token service returned {status}: {body}"),
            ));
        }
        let response = resp
            .json::<IamTokenResponse>()
            .await
            .map_err(|e| CredentialsError::from_source(!e.is_decode(), e))?;

        let now = Instant::now();
        let lifetime = response.lifetime(SystemTime::now());
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at: Some(now + lifetime),
            refresh_at: Some(now + lifetime * 4 / 5),
        })
    }
}

#[derive(Debug)]
struct IamAuthenticator<T>
where
    T: TokenProvider,
{
    token_provider: T,
}

impl<T> AuthenticatorProvider for IamAuthenticator<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token)
    }

    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::Iam
    }
}

/// A builder for IAM [Authenticator]s.
pub struct Builder {
    apikey: String,
    url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    disable_ssl_verification: bool,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("apikey", &"[censored]")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[censored]"))
            .field("scope", &self.scope)
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given API key.
    pub fn new<T: Into<String>>(apikey: T) -> Self {
        Self {
            apikey: apikey.into(),
            url: None,
            client_id: None,
            client_secret: None,
            scope: None,
            disable_ssl_verification: false,
        }
    }

    /// Sets the URL of the IAM token service.
    ///
    /// The default is [DEFAULT_IAM_URL]. The authenticator appends
    /// `/identity/token` to this URL, unless the URL already ends with that
    /// path.
    pub fn with_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Sets the client id and secret sent to the IAM token service.
    ///
    /// Most applications do not need these values.
    pub fn with_client_id_and_secret<I, S>(mut self, client_id: I, client_secret: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub(crate) fn with_client_id(mut self, v: Option<String>) -> Self {
        self.client_id = v;
        self
    }

    pub(crate) fn with_client_secret(mut self, v: Option<String>) -> Self {
        self.client_secret = v;
        self
    }

    /// Sets the scope requested from the IAM token service.
    pub fn with_scope<T: Into<String>>(mut self, v: T) -> Self {
        self.scope = Some(v.into());
        self
    }

    /// Disables the verification of the IAM token service TLS certificates.
    pub fn with_ssl_verification_disabled(mut self, v: bool) -> Self {
        self.disable_ssl_verification = v;
        self
    }

    fn build_token_provider(self) -> BuildResult<IamTokenProvider> {
        validate("apikey", &self.apikey)?;
        let client_credentials = match (self.client_id, self.client_secret) {
            (None, None) => None,
            (Some(_), None) => return Err(BuildError::missing_field("client_secret")),
            (None, Some(_)) => return Err(BuildError::missing_field("client_id")),
            (Some(id), Some(secret)) => {
                validate("client_id", &id)?;
                validate("client_secret", &secret)?;
                Some((id, secret))
            }
        };
        let url = self.url.unwrap_or_else(|| DEFAULT_IAM_URL.to_string());
        validate("url", &url)?;
        url::Url::parse(&url).map_err(|_| BuildError::invalid_value("url"))?;
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.disable_ssl_verification)
            .build()
            .map_err(BuildError::loading)?;
        Ok(IamTokenProvider {
            client,
            apikey: self.apikey,
            endpoint: token_endpoint(&url),
            client_credentials,
            scope: self.scope,
            disable_ssl_verification: self.disable_ssl_verification,
        })
    }

    /// Returns an [Authenticator] with the configured settings.
    ///
    /// # Errors
    /// Returns an error if the API key is empty, if only one of the client id
    /// and secret is set, or if any value starts or ends with braces or quotes.
    pub fn build(self) -> BuildResult<Authenticator> {
        let token_provider = TokenCache::new(self.build_token_provider()?);
        Ok(Authenticator::from(IamAuthenticator { token_provider }))
    }
}

fn token_endpoint(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.ends_with(TOKEN_PATH) {
        return url.to_string();
    }
    format!("{url}{TOKEN_PATH}")
}
