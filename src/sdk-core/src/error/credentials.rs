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

use std::error::Error;
use std::sync::Arc;

type ArcError = Arc<dyn Error + Send + Sync>;

/// Represents an error creating the authentication headers for a request.
///
/// Authenticators may fail to produce headers. For example, the IAM token
/// service may be temporarily unavailable, or it may reject an API key that
/// was revoked. The first kind of problem is transient, the second is not.
///
/// The retry loop consults [is_transient][CredentialsError::is_transient]
/// to decide if a request should be attempted again.
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::error::CredentialsError;
/// let err = CredentialsError::from_msg(true, "the token service is unavailable");
/// assert!(err.is_transient());
/// assert!(err.to_string().contains("the token service is unavailable"));
/// ```
#[derive(Debug, Clone)]
pub struct CredentialsError {
    is_transient: bool,
    message: String,
    source: Option<ArcError>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping another error.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_sdk_core::error::CredentialsError;
    /// let source = std::io::Error::other("connection refused");
    /// let err = CredentialsError::new(true, "cannot reach the token service", source);
    /// assert!(err.is_transient());
    /// ```
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<M: Into<String>>(is_transient: bool, message: M) -> Self {
        Self {
            is_transient,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` from another error.
    pub fn from_source<T>(is_transient: bool, source: T) -> Self
    where
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if future attempts to create the headers may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        write!(
            f,
            "cannot create the authentication headers, {msg}: {}",
            self.message
        )
    }
}
