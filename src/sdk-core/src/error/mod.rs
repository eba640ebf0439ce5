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

//! Errors returned by the IBM Cloud service clients.
//!
//! The service clients distinguish between errors detected before a request
//! is sent (e.g. a missing path parameter), errors while sending the request
//! or receiving the response (e.g. a refused connection), and errors reported
//! by the service itself. All of them are represented by [Error].
//!
//! # Example
//!
//! ```
//! use ibm_cloud_sdk_core::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(api_error) = e.api_error() {
//!         println!("the service said {} ({})", api_error.message(), api_error.status_code());
//!     }
//! }
//! ```

mod api_error;
mod core_error;
mod credentials;
pub use api_error::*;
pub use core_error::*;
pub use credentials::*;
