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

use axum::Json;
use axum::extract::Query;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use ibm_cloud_auth::authenticators::{Authenticator, no_auth};
use ibm_cloud_sdk_core::client_builder::ClientBuilder;
use sdki::http::BaseService;
use sdki::options::{ClientConfig, ServiceInfo};
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;
use tokio::task::JoinHandle;

type Result<T> = anyhow::Result<T>;

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    service_name: "echo_service",
    service_version: "V1",
    default_url: "http://127.0.0.1",
};

pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new()
        .route("/echo", axum::routing::any(echo))
        .route("/error", axum::routing::any(error));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

/// Returns a client builder targeting `endpoint`.
///
/// The builder is preconfigured with an authenticator that adds no headers.
pub fn builder(endpoint: impl Into<String>) -> ClientBuilder<Factory, Authenticator> {
    ibm_cloud_sdk_core::client_builder::internal::new_builder(Factory(endpoint.into()))
        .with_authenticator(no_auth::Builder::new().build())
}

pub struct Factory(String);
impl ibm_cloud_sdk_core::client_builder::internal::ClientFactory for Factory {
    type Client = BaseService;
    type Authenticator = Authenticator;
    async fn build(
        self,
        mut config: ClientConfig,
    ) -> ibm_cloud_sdk_core::client_builder::Result<Self::Client> {
        config.endpoint.get_or_insert(self.0);
        BaseService::new(config, SERVICE_INFO).await
    }
}

async fn echo(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Response {
    match echo_impl(method, query, headers, body).await {
        Err(e) => internal_error(e),
        Ok(v) => (StatusCode::OK, Json(v)).into_response(),
    }
}

async fn echo_impl(
    method: Method,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<serde_json::Value> {
    if let Some(delay) = query
        .get("delay_ms")
        .map(|s| s.parse::<u64>())
        .transpose()?
        .map(tokio::time::Duration::from_millis)
    {
        tokio::time::sleep(delay).await;
    }
    let body = decode_body(&headers, &body)?;
    let query = serde_json::Value::Object(
        query
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect(),
    );
    Ok(json!({
        "method": method.as_str(),
        "headers": headers_to_json(&headers)?,
        "query": query,
        "body": body,
    }))
}

/// Always fails, with the status code in the `status` query parameter.
///
/// The `retry_after` query parameter sets the `Retry-After` header.
async fn error(Query(query): Query<HashMap<String, String>>) -> Response {
    match error_impl(query) {
        Err(e) => internal_error(e),
        Ok(r) => r,
    }
}

fn error_impl(query: HashMap<String, String>) -> Result<Response> {
    let status = query
        .get("status")
        .map(|s| s.parse::<u16>())
        .transpose()?
        .map(StatusCode::from_u16)
        .transpose()?
        .unwrap_or(StatusCode::BAD_REQUEST);
    let payload = json!({
        "errors": [{
            "code": "echo_error",
            "message": "this path always returns an error",
        }],
        "status_code": status.as_u16(),
        "trace": "echo-server-trace",
    });
    let mut response = (status, Json(payload)).into_response();
    if let Some(delay) = query.get("retry_after") {
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from_str(delay)?);
    }
    Ok(response)
}

fn decode_body(headers: &HeaderMap, body: &bytes::Bytes) -> Result<serde_json::Value> {
    if body.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    let gzip = headers
        .get(header::CONTENT_ENCODING)
        .is_some_and(|v| v.as_bytes() == b"gzip");
    let content = if gzip {
        let mut decoded = Vec::new();
        flate2::read::GzDecoder::new(body.as_ref()).read_to_end(&mut decoded)?;
        decoded
    } else {
        body.to_vec()
    };
    let value = serde_json::from_slice::<serde_json::Value>(&content)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&content).into()));
    Ok(value)
}

fn headers_to_json(headers: &HeaderMap) -> Result<serde_json::Value> {
    let headers = headers
        .iter()
        .map(|(k, v)| {
            v.to_str()
                .map(|s| (k.to_string(), serde_json::Value::String(s.to_string())))
        })
        .collect::<std::result::Result<serde_json::Map<_, _>, _>>()?;
    Ok(serde_json::Value::Object(headers))
}

fn internal_error(e: anyhow::Error) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}")).into_response()
}

/// Extracts a header value from an echo response.
pub fn get_header_value(response: &serde_json::Value, name: &str) -> Option<String> {
    response
        .get("headers")
        .and_then(|h| h.get(name))
        .and_then(|h| h.as_str())
        .map(str::to_string)
}

/// Extracts a query parameter value from an echo response.
pub fn get_query_value(response: &serde_json::Value, name: &str) -> Option<String> {
    response
        .get("query")
        .and_then(|h| h.get(name))
        .and_then(|h| h.as_str())
        .map(str::to_string)
}
