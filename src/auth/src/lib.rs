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

//! IBM Cloud SDK for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate requests to
//! IBM Cloud services. The service clients consume an
//! [Authenticator][authenticators::Authenticator] and use it to create the
//! authentication headers for each request.
//!
//! The crate supports the following authentication types:
//! - [no_auth][authenticators::no_auth]: no authentication headers at all.
//! - [basic][authenticators::basic]: a static username and password.
//! - [bearer_token][authenticators::bearer_token]: a static access token,
//!   managed by the application.
//! - [iam][authenticators::iam]: an IBM Cloud API key, exchanged for access
//!   tokens at the IAM token service. The tokens are cached and refreshed
//!   automatically.
//!
//! Applications can also load the authentication configuration from the
//! environment, see [environment][authenticators::environment].

pub mod build_errors;
pub mod errors;

/// Types and functions to create authenticators.
pub mod authenticators;

/// Types and functions to work with auth tokens.
pub mod token;

pub(crate) mod headers_util;
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// `ibm_cloud_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
