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

//! IBM Cloud SDK core types.
//!
//! This crate contains the types and functions shared by all the IBM Cloud
//! service clients for Rust: the error type, the per-request options, the
//! retry and backoff policies, and the response wrapper returned by every
//! operation.
//!
//! <div class="warning">
//! The modules marked as hidden are <b>not</b> intended for general use. They
//! exist to support the implementation of the service clients, and may change
//! without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the service clients.
pub mod error;

/// Describes a single HTTP operation before it is bound to a service URL.
#[doc(hidden)]
pub mod operation;

/// Defines traits and helpers to serialize path parameters.
///
/// Path parameters are always required. The helpers in this module convert
/// `Option<T>` to `Result<T, Error>`, so the service clients always write:
///
/// sdk_core::path_parameter::required(req.field.as_ref(), "field")?
#[doc(hidden)]
pub mod path_parameter;

/// Defines traits and helpers to serialize query parameters.
#[doc(hidden)]
pub mod query_parameter;

pub(crate) mod request_parameter;

pub mod backoff_policy;
pub mod client_builder;
pub mod exponential_backoff;
pub mod options;
pub mod response;
pub mod retry_policy;
pub mod retry_result;

#[doc(hidden)]
pub mod retry_loop_internal;
