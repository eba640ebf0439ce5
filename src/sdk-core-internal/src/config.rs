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

//! Applies the external configuration of a service.
//!
//! The external configuration is read from `<SERVICE_NAME>_*` environment
//! variables and the credentials file. Values set explicitly in the client
//! builder take precedence.

use crate::options::ClientConfig;
use ibm_cloud_auth::authenticators::environment::{
    ServiceProperties, bool_property, from_properties, read_service_properties,
};
use ibm_cloud_sdk_core::client_builder::Error as BuilderError;
use ibm_cloud_sdk_core::client_builder::internal::retries;
use std::time::Duration;

/// Problems with the values in the external configuration.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid value {1:?} for {0}, expected a non-negative integer")]
    InvalidCount(&'static str, String),
    #[error("invalid value {1:?} for {0}, expected a number of seconds or a duration")]
    InvalidDuration(&'static str, String),
}

/// Returns the service name used to read the external configuration, if any.
///
/// Applications can request the external configuration explicitly. Clients
/// without an authenticator always read it, using the default service name.
pub fn external_service_name<'a>(config: &'a ClientConfig, default: &'a str) -> Option<&'a str> {
    match (&config.external_config, &config.cred) {
        (Some(name), _) => Some(name.as_str()),
        (None, None) => Some(default),
        (None, Some(_)) => None,
    }
}

/// Reads the external configuration for `service_name` and applies it.
pub fn apply_external_config(
    config: ClientConfig,
    service_name: &str,
) -> Result<ClientConfig, BuilderError> {
    let properties = read_service_properties(service_name).map_err(BuilderError::config)?;
    tracing::debug!(
        service_name,
        count = properties.len(),
        "applying external configuration"
    );
    apply_properties(config, service_name, &properties)
}

pub(crate) fn apply_properties(
    mut config: ClientConfig,
    service_name: &str,
    properties: &ServiceProperties,
) -> Result<ClientConfig, BuilderError> {
    if config.endpoint.is_none() {
        config.endpoint = properties.get("URL").filter(|u| !u.is_empty()).cloned();
    }
    if bool_property(properties, "DISABLE_SSL") {
        config.disable_ssl_verification = true;
    }
    if bool_property(properties, "ENABLE_GZIP") {
        config.enable_gzip = true;
    }
    if bool_property(properties, "ENABLE_RETRIES") && config.retry_policy.is_none() {
        let max_retries = match properties.get("MAX_RETRIES") {
            None => 0,
            Some(v) => parse_count("MAX_RETRIES", v)?,
        };
        let interval = match properties.get("RETRY_INTERVAL") {
            None => Duration::ZERO,
            Some(v) => parse_interval("RETRY_INTERVAL", v)?,
        };
        let (retry, backoff) = retries(max_retries, interval);
        config.retry_policy = Some(retry);
        if config.backoff_policy.is_none() {
            config.backoff_policy = Some(backoff);
        }
    }
    if config.cred.is_none() {
        let authenticator =
            from_properties(service_name, properties).map_err(BuilderError::cred)?;
        config.cred = Some(authenticator);
    }
    Ok(config)
}

fn parse_count(name: &'static str, value: &str) -> Result<u32, BuilderError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| BuilderError::config(Error::InvalidCount(name, value.to_string())))
}

/// Parses a number of seconds, or a duration such as `"1m 30s"`.
fn parse_interval(name: &'static str, value: &str) -> Result<Duration, BuilderError> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }
    humantime::parse_duration(value)
        .map_err(|_| BuilderError::config(Error::InvalidDuration(name, value.to_string())))
}
