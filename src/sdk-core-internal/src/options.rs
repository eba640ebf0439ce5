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

pub use ibm_cloud_auth::authenticators::Authenticator;

pub type ClientConfig = ibm_cloud_sdk_core::client_builder::internal::ClientConfig<Authenticator>;

pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

/// Describes the service client using the pipeline.
///
/// Each service client defines a single constant of this type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ServiceInfo {
    /// The service name, e.g., "user_management". Also the prefix for the
    /// external configuration.
    pub service_name: &'static str,
    /// The version of the client library.
    pub service_version: &'static str,
    /// The default URL of the service.
    pub default_url: &'static str,
}

pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
