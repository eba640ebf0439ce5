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

//! Load the authentication configuration from the environment.
//!
//! Applications can configure the service clients without code changes,
//! using environment variables or a credentials file. The properties for a
//! service use the service name as a prefix. For example, for the
//! `user_management` service:
//!
//! ```text
//! USER_MANAGEMENT_URL=https://user-management.cloud.ibm.com
//! USER_MANAGEMENT_AUTH_TYPE=iam
//! USER_MANAGEMENT_APIKEY=my-api-key
//! ```
//!
//! The credentials file uses the same `KEY=value` format. The file is found
//! in the following locations, in order:
//! - The path in the `IBM_CREDENTIALS_FILE` environment variable.
//! - `ibm-credentials.env` in the current directory.
//! - `ibm-credentials.env` in the home directory.
//!
//! Environment variables take precedence over the values in the file.
//!
//! The supported authentication properties are:
//!
//! | Property | Meaning |
//! | -------- | ------- |
//! | `AUTH_TYPE` | `noAuth`, `basic`, `bearerToken`, or `iam`, case insensitive. |
//! | `USERNAME`, `PASSWORD` | The credentials for `basic`. |
//! | `BEARER_TOKEN` | The token for `bearerToken`. |
//! | `APIKEY` | The API key for `iam`. |
//! | `AUTH_URL` | The IAM token service URL. |
//! | `CLIENT_ID`, `CLIENT_SECRET` | The IAM client credentials. |
//! | `SCOPE` | The IAM scope. |
//! | `AUTH_DISABLE_SSL` | Disables TLS verification for the IAM token service. |
//!
//! If `AUTH_TYPE` is not set, but `APIKEY` is, the authentication type is
//! `iam`.

use super::{AuthenticationType, Authenticator, BuildResult};
use super::{basic, bearer_token, iam, no_auth};
use crate::build_errors::Error as BuildError;
use std::collections::HashMap;
use std::path::PathBuf;

/// The environment variable with the path of the credentials file.
pub const CREDENTIALS_FILE_VAR: &str = "IBM_CREDENTIALS_FILE";

/// The name of the default credentials file.
pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

/// The properties for one service, keyed by the name without the prefix.
pub type ServiceProperties = HashMap<String, String>;

/// Reads the properties of a service from the credentials file and the
/// environment.
///
/// The returned keys do not include the service prefix, for example, the
/// value of `USER_MANAGEMENT_URL` is returned under `URL`.
pub fn read_service_properties(service_name: &str) -> BuildResult<ServiceProperties> {
    let prefix = format!("{}_", service_prefix(service_name));
    let mut properties = ServiceProperties::new();
    if let Some(path) = credentials_file() {
        let iter = dotenvy::from_path_iter(&path).map_err(BuildError::loading)?;
        for item in iter {
            let (key, value) = item.map_err(BuildError::loading)?;
            insert_with_prefix(&mut properties, &prefix, key, value);
        }
    }
    for (key, value) in std::env::vars() {
        insert_with_prefix(&mut properties, &prefix, key, value);
    }
    Ok(properties)
}

/// Returns true if the property is set to `true`, ignoring case.
pub fn bool_property(properties: &ServiceProperties, name: &str) -> bool {
    properties
        .get(name)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn service_prefix(service_name: &str) -> String {
    service_name.to_uppercase().replace('-', "_")
}

fn insert_with_prefix(properties: &mut ServiceProperties, prefix: &str, key: String, value: String) {
    if let Some(name) = key.strip_prefix(prefix) {
        if !name.is_empty() {
            properties.insert(name.to_string(), value);
        }
    }
}

fn credentials_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_VAR) {
        return Some(PathBuf::from(path)).filter(|p| p.is_file());
    }
    let local = PathBuf::from(DEFAULT_CREDENTIALS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(DEFAULT_CREDENTIALS_FILE_NAME))
        .filter(|p| p.is_file())
}

/// A builder for [Authenticator]s configured from the environment.
///
/// # Example
/// ```no_run
/// # use ibm_cloud_auth::authenticators::environment::Builder;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let authenticator = Builder::new("user_management").build()?;
/// println!("using {}", authenticator.authentication_type());
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct Builder {
    service_name: String,
}

impl Builder {
    /// Creates a new builder for the given service name.
    pub fn new<T: Into<String>>(service_name: T) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    /// Returns an [Authenticator] using the external configuration.
    ///
    /// # Errors
    /// Returns an error if the credentials file cannot be read, if there is
    /// no configuration for the service, if the authentication type is
    /// unknown, or if the configured values are invalid.
    pub fn build(self) -> BuildResult<Authenticator> {
        let properties = read_service_properties(&self.service_name)?;
        from_properties(&self.service_name, &properties)
    }
}

/// Creates an [Authenticator] from the properties of a service.
pub fn from_properties(
    service_name: &str,
    properties: &ServiceProperties,
) -> BuildResult<Authenticator> {
    let configured = properties
        .get("AUTH_TYPE")
        .or_else(|| properties.get("AUTHTYPE"));
    let auth_type = match configured {
        Some(t) => t.parse::<AuthenticationType>()?,
        None if properties.contains_key("APIKEY") => AuthenticationType::Iam,
        None => {
            return Err(BuildError::unknown_type(format!(
                "no authentication type configured for service {service_name}"
            )));
        }
    };
    let get = |name: &str| properties.get(name).cloned().unwrap_or_default();
    match auth_type {
        AuthenticationType::NoAuth => Ok(no_auth::Builder::new().build()),
        AuthenticationType::Basic => basic::Builder::new(get("USERNAME"), get("PASSWORD")).build(),
        AuthenticationType::BearerToken => bearer_token::Builder::new(get("BEARER_TOKEN")).build(),
        AuthenticationType::Iam => {
            let mut builder = iam::Builder::new(get("APIKEY"))
                .with_client_id(properties.get("CLIENT_ID").cloned())
                .with_client_secret(properties.get("CLIENT_SECRET").cloned())
                .with_ssl_verification_disabled(bool_property(properties, "AUTH_DISABLE_SSL"));
            if let Some(url) = properties.get("AUTH_URL") {
                builder = builder.with_url(url);
            }
            if let Some(scope) = properties.get("SCOPE") {
                builder = builder.with_scope(scope);
            }
            builder.build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::io::Write;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn properties(pairs: &[(&str, &str)]) -> ServiceProperties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn credentials_file_with(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    #[test_case("user_management", "USER_MANAGEMENT")]
    #[test_case("resource-controller", "RESOURCE_CONTROLLER")]
    #[test_case("iam", "IAM")]
    fn prefix(input: &str, want: &str) {
        assert_eq!(service_prefix(input), want);
    }

    #[test]
    #[serial]
    fn read_from_env() -> TestResult {
        let empty = credentials_file_with("")?;
        let path = empty.path().to_string_lossy();
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, path.as_ref());
        let _a = ScopedEnv::set("TEST_SERVICE_AUTH_TYPE", "noauth");
        let _u = ScopedEnv::set("TEST_SERVICE_URL", "https://test.example.com");
        let _o = ScopedEnv::set("OTHER_SERVICE_URL", "https://other.example.com");

        let got = read_service_properties("test_service")?;
        assert_eq!(got.get("AUTH_TYPE").map(String::as_str), Some("noauth"));
        assert_eq!(
            got.get("URL").map(String::as_str),
            Some("https://test.example.com")
        );
        assert_eq!(got.len(), 2, "{got:?}");
        Ok(())
    }

    #[test]
    #[serial]
    fn read_from_file() -> TestResult {
        let file = credentials_file_with(
            "TEST_SERVICE_AUTH_TYPE=basic\nTEST_SERVICE_USERNAME=file-user\nTEST_SERVICE_PASSWORD=file-password\n# comment\nOTHER_URL=ignored\n",
        )?;
        let path = file.path().to_string_lossy();
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, path.as_ref());
        let _u = ScopedEnv::set("TEST_SERVICE_USERNAME", "env-user");

        let got = read_service_properties("test-service")?;
        assert_eq!(got.get("AUTH_TYPE").map(String::as_str), Some("basic"));
        // The environment takes precedence.
        assert_eq!(got.get("USERNAME").map(String::as_str), Some("env-user"));
        assert_eq!(
            got.get("PASSWORD").map(String::as_str),
            Some("file-password")
        );
        assert!(!got.contains_key("URL"), "{got:?}");
        Ok(())
    }

    #[test]
    #[serial]
    fn missing_credentials_file_is_ignored() -> TestResult {
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, "/this/file/does/not/exist.env");
        let _a = ScopedEnv::set("TEST_SERVICE_APIKEY", "test-apikey");
        let got = read_service_properties("test_service")?;
        assert_eq!(got.get("APIKEY").map(String::as_str), Some("test-apikey"));
        Ok(())
    }

    #[test]
    #[serial]
    fn builder() -> TestResult {
        let empty = credentials_file_with("")?;
        let path = empty.path().to_string_lossy();
        let _f = ScopedEnv::set(CREDENTIALS_FILE_VAR, path.as_ref());
        let _a = ScopedEnv::set("TEST_SERVICE_AUTHTYPE", "BearerToken");
        let _t = ScopedEnv::set("TEST_SERVICE_BEARER_TOKEN", "env-token");
        let auth = Builder::new("test_service").build()?;
        assert_eq!(auth.authentication_type(), AuthenticationType::BearerToken);
        Ok(())
    }

    #[tokio::test]
    async fn from_properties_basic() -> TestResult {
        let props = properties(&[
            ("AUTH_TYPE", "basic"),
            ("USERNAME", "user"),
            ("PASSWORD", "pass"),
        ]);
        let auth = from_properties("test", &props)?;
        assert_eq!(auth.authentication_type(), AuthenticationType::Basic);
        let headers = auth.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Basic dXNlcjpwYXNz"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn from_properties_bearer_token() -> TestResult {
        let props = properties(&[("AUTH_TYPE", "bearerToken"), ("BEARER_TOKEN", "token")]);
        let auth = from_properties("test", &props)?;
        let headers = auth.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer token"))
        );
        Ok(())
    }

    #[test_case(&[("AUTH_TYPE", "iam"), ("APIKEY", "key")]; "explicit")]
    #[test_case(&[("APIKEY", "key")]; "implied by apikey")]
    #[test_case(&[("AUTH_TYPE", "IAM"), ("APIKEY", "key"), ("AUTH_URL", "https://iam.test.cloud.ibm.com"), ("CLIENT_ID", "id"), ("CLIENT_SECRET", "secret"), ("AUTH_DISABLE_SSL", "TRUE")]; "all options")]
    fn from_properties_iam(pairs: &[(&str, &str)]) -> TestResult {
        let auth = from_properties("test", &properties(pairs))?;
        assert_eq!(auth.authentication_type(), AuthenticationType::Iam);
        Ok(())
    }

    #[test]
    fn from_properties_noauth() -> TestResult {
        let auth = from_properties("test", &properties(&[("AUTH_TYPE", "NOAUTH")]))?;
        assert_eq!(auth.authentication_type(), AuthenticationType::NoAuth);
        Ok(())
    }

    #[test]
    fn from_properties_errors() {
        let err = from_properties("test", &properties(&[])).err();
        assert!(err.as_ref().is_some_and(|e| e.is_unknown_type()), "{err:?}");

        let err = from_properties("test", &properties(&[("AUTH_TYPE", "cp4d")])).err();
        assert!(err.as_ref().is_some_and(|e| e.is_unknown_type()), "{err:?}");

        let err = from_properties("test", &properties(&[("AUTH_TYPE", "basic")])).err();
        assert!(err.as_ref().is_some_and(|e| e.is_missing_field()), "{err:?}");

        let err = from_properties(
            "test",
            &properties(&[("AUTH_TYPE", "iam"), ("APIKEY", "key"), ("CLIENT_ID", "id")]),
        )
        .err();
        assert!(err.as_ref().is_some_and(|e| e.is_missing_field()), "{err:?}");
    }

    #[test_case("true", true)]
    #[test_case("TRUE", true)]
    #[test_case("false", false)]
    #[test_case("yes", false)]
    fn bool_values(value: &str, want: bool) {
        let props = properties(&[("ENABLE_GZIP", value)]);
        assert_eq!(bool_property(&props, "ENABLE_GZIP"), want);
        assert!(!bool_property(&props, "MISSING"));
    }
}
