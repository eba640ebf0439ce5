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

//! Errors created while using an authenticator.

use http::StatusCode;

pub use ibm_cloud_sdk_core::error::CredentialsError;

/// Returns true if a token service response with this status may succeed on
/// a future attempt.
pub(crate) fn is_retryable(c: StatusCode) -> bool {
    matches!(
        c,
        StatusCode::REQUEST_TIMEOUT | StatusCode::TOO_MANY_REQUESTS
    ) || c.is_server_error()
}

pub(crate) fn retryable<T>(source: T) -> CredentialsError
where
    T: std::error::Error + Send + Sync + 'static,
{
    CredentialsError::from_source(true, source)
}

pub(crate) fn non_retryable<T>(source: T) -> CredentialsError
where
    T: std::error::Error + Send + Sync + 'static,
{
    CredentialsError::from_source(false, source)
}
