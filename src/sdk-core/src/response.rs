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

//! Response types.
//!
//! Every operation in the service clients returns a [DetailedResponse]. The
//! response holds the HTTP status code, the response headers, and the
//! decoded result.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use ibm_cloud_sdk_core::Result;
//! # use ibm_cloud_sdk_core::response::DetailedResponse;
//! #[derive(Default)]
//! struct UserProfile {
//!   // ...
//! }
//!
//! async fn get_user_profile(iam_id: &str) -> Result<DetailedResponse<UserProfile>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = get_user_profile("IBMid-123").await?;
//! if let Some(id) = response.headers().get("transaction-id") {
//!     println!("the transaction id is {id:?}");
//! }
//! let profile = response.result();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use ibm_cloud_sdk_core::Result;
//! # use ibm_cloud_sdk_core::response::DetailedResponse;
//! #[derive(Default)]
//! struct UserProfile {
//!   // ...
//! }
//!
//! fn make_mock_response(result: UserProfile) -> Result<DetailedResponse<UserProfile>> {
//!     Ok(DetailedResponse::from(result))
//! }
//! ```

use bytes::Bytes;
use http::HeaderMap;

/// Represents an IBM Cloud service response.
///
/// A response consists of the status code, the headers, and the decoded
/// result. The result is `T::default()` when the service returns an empty
/// body, which is common for `202 Accepted` and `204 No Content` responses.
///
/// If the service returns a non-JSON body the raw bytes are available via
/// [raw_result][DetailedResponse::raw_result].
#[derive(Clone, Debug)]
pub struct DetailedResponse<T> {
    status_code: u16,
    headers: HeaderMap,
    result: T,
    raw_result: Option<Bytes>,
}

impl<T> DetailedResponse<T> {
    /// Creates a response with the given result, a `200 OK` status, and no
    /// headers.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::response::DetailedResponse;
    /// let response = DetailedResponse::from("test".to_string());
    /// assert_eq!(response.status_code(), 200);
    /// assert!(response.headers().is_empty());
    /// assert_eq!(response.result().as_str(), "test");
    /// ```
    pub fn from(result: T) -> Self {
        Self {
            status_code: http::StatusCode::OK.as_u16(),
            headers: HeaderMap::new(),
            result,
            raw_result: None,
        }
    }

    /// Creates a response from all its parts.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::response::DetailedResponse;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("transaction-id", http::HeaderValue::from_static("abc-123"));
    /// let response = DetailedResponse::from_parts(202, headers, (), None);
    /// assert_eq!(response.status_code(), 202);
    /// ```
    pub fn from_parts(
        status_code: u16,
        headers: HeaderMap,
        result: T,
        raw_result: Option<Bytes>,
    ) -> Self {
        Self {
            status_code,
            headers,
            result,
            raw_result,
        }
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The decoded result.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// The raw body, if the service returned a non-JSON payload.
    pub fn raw_result(&self) -> Option<&Bytes> {
        self.raw_result.as_ref()
    }

    /// Consumes the response returning only the result.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Consumes the response returning all its parts.
    pub fn into_parts(self) -> (u16, HeaderMap, T, Option<Bytes>) {
        (self.status_code, self.headers, self.result, self.raw_result)
    }
}
