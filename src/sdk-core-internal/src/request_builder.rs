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

//! Turns an [Operation] into a fully resolved HTTP request.
//!
//! The builder performs no I/O. Building the same operation twice produces
//! identical URLs, headers, and bodies.

use crate::api_header::{self, ANALYTICS_HEADER};
use crate::options::ServiceInfo;
use bytes::Bytes;
use http::header::{CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use ibm_cloud_sdk_core::Result;
use ibm_cloud_sdk_core::error::Error as CoreError;
use ibm_cloud_sdk_core::operation::{Body, Operation};
use ibm_cloud_sdk_core::options::RequestOptions;
use ibm_cloud_sdk_core::path_parameter;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::BTreeMap;
use std::io::Write;

/// Characters encoded when a parameter is substituted into a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Problems detected while building a request.
///
/// These are always wrapped in a [binding][CoreError::is_binding] error.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the service URL is not set")]
    MissingServiceUrl,
    #[error("the service URL {0:?} is not valid, remove any surrounding {{, }}, or \" characters")]
    BadServiceUrlCharacters(String),
    #[error("the service URL {0:?} is not valid: {1}")]
    InvalidServiceUrl(String, #[source] url::ParseError),
    #[error("the template {0:?} has an unterminated placeholder")]
    MalformedTemplate(String),
    #[error("missing value for the {0:?} variable in the service URL template")]
    MissingVariable(String),
    #[error("the header {0:?} has an invalid name or value")]
    InvalidHeader(String),
    #[error("the path parameter {0:?} cannot be {1:?}")]
    DotSegment(String, String),
}

/// A request ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: url::Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Builds requests for one service client.
///
/// Holds the service-level settings: the service URL, the default headers,
/// the SDK headers, and whether request bodies are compressed.
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    service_url: String,
    default_headers: HeaderMap,
    sdk_headers: HeaderMap,
    enable_gzip: bool,
    info: ServiceInfo,
}

impl RequestBuilder {
    pub fn new(info: ServiceInfo) -> Self {
        Self {
            service_url: info.default_url.to_string(),
            default_headers: HeaderMap::new(),
            sdk_headers: api_header::sdk_headers(),
            enable_gzip: false,
            info,
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Changes the service URL, after validating it.
    pub fn set_service_url<V: Into<String>>(&mut self, v: V) -> Result<()> {
        let v = v.into();
        validate_service_url(&v)?;
        self.service_url = v;
        Ok(())
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn set_default_headers(&mut self, v: HeaderMap) {
        self.default_headers = v;
    }

    pub fn enable_gzip(&self) -> bool {
        self.enable_gzip
    }

    pub fn set_enable_gzip(&mut self, v: bool) {
        self.enable_gzip = v;
    }

    /// Builds the request for `operation`.
    ///
    /// Headers are applied in increasing order of precedence: the service
    /// default headers, the SDK headers, the operation headers, and finally
    /// the per-call overrides.
    pub fn build(&self, operation: &Operation, options: &RequestOptions) -> Result<HttpRequest> {
        let url = self.url(operation)?;

        let mut headers = self.default_headers.clone();
        merge(&mut headers, &self.sdk_headers);
        if let Some(prefix) = options.user_agent() {
            let agent = match headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
                Some(sdk) => format!("{prefix} {sdk}"),
                None => prefix.clone(),
            };
            headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &agent)?);
        }
        if let Some(id) = operation.operation_id() {
            let analytics = api_header::analytics(&self.info, id);
            headers.insert(
                ANALYTICS_HEADER,
                header_value(ANALYTICS_HEADER.as_str(), &analytics)?,
            );
        }

        let body = match operation.body() {
            None => None,
            Some(body) => {
                headers.insert(
                    CONTENT_TYPE,
                    header_value(CONTENT_TYPE.as_str(), body.content_type())?,
                );
                Some(body_bytes(body)?)
            }
        };
        for (name, value) in operation.headers() {
            let key = HeaderName::try_from(name.as_str())
                .map_err(|_| CoreError::binding(Error::InvalidHeader(name.clone())))?;
            headers.insert(key, header_value(name, value)?);
        }
        let body = match body {
            Some(b) if self.enable_gzip => {
                headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
                Some(gzip(&b)?)
            }
            b => b,
        };
        merge(&mut headers, operation.header_overrides());

        Ok(HttpRequest {
            method: operation.method().clone(),
            url,
            headers,
            body,
        })
    }

    fn url(&self, operation: &Operation) -> Result<url::Url> {
        if self.service_url.is_empty() {
            return Err(CoreError::binding(Error::MissingServiceUrl));
        }
        let path = resolve_path(operation.path_template(), operation.path_params())?;
        let base = self.service_url.trim_end_matches('/');
        let full = match path.starts_with('/') {
            true => format!("{base}{path}"),
            false => format!("{base}/{path}"),
        };
        let mut url = url::Url::parse(&full)
            .map_err(|e| CoreError::binding(Error::InvalidServiceUrl(full.clone(), e)))?;
        if !operation.query().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in operation.query() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

/// Validates a service URL.
///
/// The URL must be non-empty, must not start or end with braces or quotes,
/// and must be a valid absolute URL.
pub fn validate_service_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(CoreError::binding(Error::MissingServiceUrl));
    }
    const BAD: [char; 3] = ['{', '}', '"'];
    if url.starts_with(&BAD[..]) || url.ends_with(&BAD[..]) {
        return Err(CoreError::binding(Error::BadServiceUrlCharacters(
            url.to_string(),
        )));
    }
    url::Url::parse(url)
        .map_err(|e| CoreError::binding(Error::InvalidServiceUrl(url.to_string(), e)))?;
    Ok(())
}

/// Substitutes the `{name}` variables in a parameterized service URL.
///
/// Used by services with regional endpoints, e.g.
/// `https://{region}.example.cloud.ibm.com`. Values are inserted verbatim.
pub fn construct_service_url(template: &str, variables: &BTreeMap<&str, &str>) -> Result<String> {
    substitute(template, |name| match variables.get(name) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::binding(Error::MissingVariable(name.to_string()))),
    })
}

/// Substitutes the path placeholders, percent-encoding each value.
///
/// URL parsing removes `.` and `..` segments, even when percent-encoded, so
/// these values are rejected.
pub(crate) fn resolve_path(template: &str, params: &BTreeMap<String, String>) -> Result<String> {
    substitute(template, |name| match params.get(name).map(String::as_str) {
        None | Some("") => Err(path_parameter::missing(name)),
        Some(v @ ("." | "..")) => Err(CoreError::binding(Error::DotSegment(
            name.to_string(),
            v.to_string(),
        ))),
        Some(v) => Ok(utf8_percent_encode(v, PATH_SEGMENT).to_string()),
    })
}

fn substitute<F>(template: &str, mut value: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let end = tail
            .find('}')
            .ok_or_else(|| CoreError::binding(Error::MalformedTemplate(template.to_string())))?;
        output.push_str(&value(&tail[..end])?);
        rest = &tail[end + 1..];
    }
    output.push_str(rest);
    Ok(output)
}

/// Compresses a request body.
pub fn gzip(content: &[u8]) -> Result<Bytes> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(content).map_err(CoreError::ser)?;
    let compressed = encoder.finish().map_err(CoreError::ser)?;
    Ok(Bytes::from(compressed))
}

fn body_bytes(body: &Body) -> Result<Bytes> {
    match body {
        Body::Json(v) => serde_json::to_vec(v).map(Bytes::from).map_err(CoreError::ser),
        Body::Bytes { content, .. } => Ok(content.clone()),
        _ => Err(CoreError::ser("unsupported request body")),
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| CoreError::binding(Error::InvalidHeader(name.to_string())))
}

/// Replaces every header in `dest` that also appears in `src`.
fn merge(dest: &mut HeaderMap, src: &HeaderMap) {
    for name in src.keys() {
        dest.remove(name);
        for value in src.get_all(name) {
            dest.append(name.clone(), value.clone());
        }
    }
}
