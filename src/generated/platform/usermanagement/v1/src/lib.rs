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

//! IBM Cloud SDK for Rust - User Management API
//!
//! The User Management API manages the users of an IBM Cloud account: invite
//! users, query and update their profiles and settings, and remove them from
//! the account.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use ibm_cloud_user_management_v1::client::UserManagement;
//! let client = UserManagement::builder().build().await?;
//! let response = client
//!     .list_users()
//!     .set_account_id("my-account-id")
//!     .set_limit(10)
//!     .send()
//!     .await?;
//! for user in &response.result().resources {
//!     println!("{user:?}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```
//!
//! The client reads its configuration from `USER_MANAGEMENT_*` environment
//! variables, or the `ibm-credentials.env` file, unless the application
//! configures an authenticator.

/// The messages and enums that are part of this client library.
pub mod model;

pub use ibm_cloud_sdk_core::Result;
pub use ibm_cloud_sdk_core::error::Error;
pub use ibm_cloud_sdk_core::response::DetailedResponse;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

pub(crate) mod tracing;

pub(crate) mod transport;

/// The default URL of the service.
pub const DEFAULT_SERVICE_URL: &str = "https://user-management.cloud.ibm.com";

/// The service name, also the prefix for the external configuration.
pub const DEFAULT_SERVICE_NAME: &str = "user_management";

pub(crate) const SERVICE_INFO: sdki::options::ServiceInfo = sdki::options::ServiceInfo {
    service_name: DEFAULT_SERVICE_NAME,
    service_version: "V1",
    default_url: DEFAULT_SERVICE_URL,
};
