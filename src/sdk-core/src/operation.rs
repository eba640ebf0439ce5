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

//! The description of a single HTTP operation.
//!
//! The service clients describe each request with an [Operation]: the HTTP
//! method, the path template, the path and query parameters, the headers,
//! and an optional body. The operation is bound to a service URL, and turned
//! into an HTTP request, only when the client sends it.

use crate::Result;
use crate::error::Error;
use crate::query_parameter::{QueryPairs, QueryParameter};
use bytes::Bytes;
use std::collections::BTreeMap;

/// The body of an [Operation].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Body {
    /// A JSON payload, sent with `Content-Type: application/json` unless the
    /// operation sets a different content type.
    Json(serde_json::Value),
    /// A raw payload and its content type.
    Bytes { content: Bytes, content_type: String },
}

impl Body {
    /// The content type implied by the body.
    pub fn content_type(&self) -> &str {
        match self {
            Self::Json(_) => "application/json",
            Self::Bytes { content_type, .. } => content_type.as_str(),
        }
    }
}

/// Describes one logical API call.
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::operation::Operation;
/// # fn main() -> ibm_cloud_sdk_core::Result<()> {
/// let op = Operation::new(http::Method::GET, "/v2/accounts/{account_id}/users")
///     .with_path_param("account_id", "abc-123")
///     .with_query_param("limit", &Some(10_i32))?
///     .with_header("Accept", "application/json")
///     .with_operation_id("list_users");
/// assert_eq!(op.path_template(), "/v2/accounts/{account_id}/users");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Operation {
    method: http::Method,
    path_template: String,
    path_params: BTreeMap<String, String>,
    query: QueryPairs,
    headers: Vec<(String, String)>,
    header_overrides: http::HeaderMap,
    body: Option<Body>,
    operation_id: Option<String>,
}

impl Operation {
    /// Creates an operation with the given method and path template.
    ///
    /// Placeholders in the template use `{name}` syntax.
    pub fn new<T: Into<String>>(method: http::Method, path_template: T) -> Self {
        Self {
            method,
            path_template: path_template.into(),
            path_params: BTreeMap::new(),
            query: QueryPairs::new(),
            headers: Vec::new(),
            header_overrides: http::HeaderMap::new(),
            body: None,
            operation_id: None,
        }
    }

    /// Sets the value of a path placeholder.
    pub fn with_path_param<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Appends a preformatted query parameter.
    pub fn with_query<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter, skipping `None` values.
    pub fn with_query_param<T>(mut self, name: &str, value: &T) -> Result<Self>
    where
        T: QueryParameter + ?Sized,
    {
        crate::query_parameter::add(&mut self.query, name, value).map_err(Error::ser)?;
        Ok(self)
    }

    /// Adds an operation header, such as `Accept` or `Content-Type`.
    pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the per-call headers.
    ///
    /// These take precedence over any other header in the request.
    pub fn with_header_overrides(mut self, headers: http::HeaderMap) -> Self {
        self.header_overrides = headers;
        self
    }

    /// Serializes `body` as the JSON payload.
    pub fn with_json_body<T: serde::Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(Error::ser)?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    /// Sets a raw payload.
    pub fn with_body<B, C>(mut self, content: B, content_type: C) -> Self
    where
        B: Into<Bytes>,
        C: Into<String>,
    {
        self.body = Some(Body::Bytes {
            content: content.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Sets the operation id reported in the analytics header.
    pub fn with_operation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_id = Some(v.into());
        self
    }

    pub fn method(&self) -> &http::Method {
        &self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    pub fn path_params(&self) -> &BTreeMap<String, String> {
        &self.path_params
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn header_overrides(&self) -> &http::HeaderMap {
        &self.header_overrides
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn operation_id(&self) -> Option<&str> {
        self.operation_id.as_deref()
    }
}
