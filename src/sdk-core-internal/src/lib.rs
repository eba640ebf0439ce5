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

//! Implementation details for the IBM Cloud SDK for Rust.
//!
//! This crate contains the request execution pipeline shared by the service
//! clients. The service clients use it to build requests, authenticate them,
//! send them with retries, and decode the responses.
//!
//! <div class="warning">
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in stable SDKs. We (the IBM Cloud SDK for
//! Rust team) control both this crate and the service clients that use it,
//! and we will keep them in sync.
//! </div>

#[cfg(feature = "_internal-http-client")]
pub mod api_header;

#[cfg(feature = "_internal-http-client")]
pub mod config;

#[cfg(feature = "_internal-http-client")]
pub mod http;

#[cfg(feature = "_internal-http-client")]
pub mod observability;

#[cfg(feature = "_internal-http-client")]
pub mod options;

#[cfg(feature = "_internal-http-client")]
pub mod request_builder;
