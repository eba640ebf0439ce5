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

use crate::config;
use crate::observability;
use crate::options::{ClientConfig, ServiceInfo, tracing_enabled};
use crate::request_builder::{self, HttpRequest, RequestBuilder};
use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use ibm_cloud_auth::authenticators::Authenticator;
use ibm_cloud_sdk_core::Result;
use ibm_cloud_sdk_core::backoff_policy::BackoffPolicy;
use ibm_cloud_sdk_core::client_builder::Error as BuilderError;
use ibm_cloud_sdk_core::error::{ApiError, Error};
use ibm_cloud_sdk_core::exponential_backoff::ExponentialBackoff;
use ibm_cloud_sdk_core::operation::Operation;
use ibm_cloud_sdk_core::options::RequestOptions;
use ibm_cloud_sdk_core::response::DetailedResponse;
use ibm_cloud_sdk_core::retry_loop_internal::{effective_timeout, retry_loop};
use ibm_cloud_sdk_core::retry_policy::{NeverRetry, RetryPolicy};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tracing::Instrument;

/// The request execution pipeline for one service client.
///
/// Cloning a `BaseService` creates an independent copy of the configuration.
/// The copies share the authenticator and the connection pool.
#[derive(Clone, Debug)]
pub struct BaseService {
    inner: reqwest::Client,
    authenticator: Authenticator,
    builder: RequestBuilder,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    tracing: bool,
    info: ServiceInfo,
}

impl BaseService {
    pub async fn new(
        config: ClientConfig,
        info: ServiceInfo,
    ) -> ibm_cloud_sdk_core::client_builder::Result<Self> {
        let external = config::external_service_name(&config, info.service_name).map(str::to_string);
        let config = match external {
            Some(name) => config::apply_external_config(config, &name)?,
            None => config,
        };
        let tracing = tracing_enabled(&config);
        let inner = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.disable_ssl_verification)
            .build()
            .map_err(BuilderError::transport)?;
        let mut builder = RequestBuilder::new(info);
        if let Some(url) = config.endpoint {
            builder.set_service_url(url).map_err(BuilderError::config)?;
        }
        builder.set_default_headers(config.default_headers);
        builder.set_enable_gzip(config.enable_gzip);
        let authenticator = config
            .cred
            .ok_or_else(|| BuilderError::cred("no authenticator configured"))?;
        Ok(Self {
            inner,
            authenticator,
            builder,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            tracing,
            info,
        })
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    pub fn service_url(&self) -> &str {
        self.builder.service_url()
    }

    /// Changes the service URL.
    ///
    /// The URL must be a valid absolute URL. On error the service URL is
    /// unchanged.
    pub fn set_service_url<V: Into<String>>(&mut self, v: V) -> Result<()> {
        self.builder.set_service_url(v)
    }

    pub fn default_headers(&self) -> &HeaderMap {
        self.builder.default_headers()
    }

    /// Replaces the headers included in every request.
    pub fn set_default_headers(&mut self, v: HeaderMap) {
        self.builder.set_default_headers(v);
    }

    pub fn enable_gzip_compression(&self) -> bool {
        self.builder.enable_gzip()
    }

    pub fn set_enable_gzip_compression(&mut self, v: bool) {
        self.builder.set_enable_gzip(v);
    }

    /// Enables retries for the following requests.
    ///
    /// A zero `max_retries` or `max_retry_interval` uses the defaults.
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        let (retry, backoff) =
            ibm_cloud_sdk_core::client_builder::internal::retries(max_retries, max_retry_interval);
        self.retry_policy = Some(retry);
        self.backoff_policy = Some(backoff);
    }

    /// Disables retries for the following requests.
    pub fn disable_retries(&mut self) {
        self.retry_policy = None;
        self.backoff_policy = None;
    }

    /// Substitutes the variables in a parameterized service URL.
    pub fn construct_service_url(
        template: &str,
        variables: &BTreeMap<&str, &str>,
    ) -> Result<String> {
        request_builder::construct_service_url(template, variables)
    }

    /// Builds and sends the request for `operation`, with retries.
    ///
    /// The request fails before any I/O if the operation cannot be bound to
    /// a URL. The overall timeout and the cancellation token in `options`
    /// apply to all the attempts and to the backoff between them.
    pub async fn execute<O>(
        &self,
        operation: Operation,
        options: RequestOptions,
    ) -> Result<DetailedResponse<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let request = self.builder.build(&operation, &options)?;
        let path_template = operation.path_template().to_string();
        let call = async {
            let attempts = self.retry_loop::<O>(request, path_template, options.clone());
            match options.timeout() {
                None => attempts.await,
                Some(timeout) => match tokio::time::timeout(*timeout, attempts).await {
                    Ok(r) => r,
                    Err(e) => Err(Error::timeout(e)),
                },
            }
        };
        match options.cancellation_token() {
            None => call.await,
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::cancelled("cancelled by the application")),
                    r = call => r,
                }
            }
        }
    }

    async fn retry_loop<O>(
        &self,
        request: HttpRequest,
        path_template: String,
        options: RequestOptions,
    ) -> Result<DetailedResponse<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let retry_policy = self.get_retry_policy(&options);
        let backoff_policy = self.get_backoff_policy(&options);
        let this = self.clone();
        let prior_attempt_count = AtomicU32::new(0);
        let inner = async move |remaining_time| {
            let attempt = prior_attempt_count.fetch_add(1, Ordering::Relaxed);
            this.request_attempt::<O>(&request, &path_template, &options, remaining_time, attempt)
                .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        retry_loop(inner, sleep, retry_policy, backoff_policy).await
    }

    async fn request_attempt<O>(
        &self,
        request: &HttpRequest,
        path_template: &str,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
        prior_attempt_count: u32,
    ) -> Result<DetailedResponse<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        if !self.tracing {
            return self.send_attempt(request, options, remaining_time).await;
        }
        let span = observability::create_http_attempt_span(
            request,
            path_template,
            &self.info,
            prior_attempt_count,
        );
        let result = self
            .send_attempt::<O>(request, options, remaining_time)
            .instrument(span.clone())
            .await;
        observability::record_http_response_attributes(
            &span,
            result.as_ref().map(DetailedResponse::status_code),
        );
        result
    }

    async fn send_attempt<O>(
        &self,
        request: &HttpRequest,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<DetailedResponse<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let auth_headers = self
            .authenticator
            .headers()
            .await
            .map_err(Error::authentication)?;
        // The authentication headers replace any value set by the application.
        let mut headers = request.headers.clone();
        for (key, value) in auth_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        let mut builder = self
            .inner
            .request(request.method.clone(), request.url.clone())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        builder = effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let response = builder.send().await.map_err(map_send_error)?;
        if !is_success(response.status()) {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Arc<dyn RetryPolicy> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
            .unwrap_or_else(|| Arc::new(NeverRetry))
    }

    fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

/// Any status below 400 completes the request.
///
/// Redirects are followed by the transport, the remaining `3xx` responses
/// (e.g. `304 Not Modified`) are returned to the application.
fn is_success(status: reqwest::StatusCode) -> bool {
    status.as_u16() < 400
}

/// Returns true for `application/json` and any `+json` media type.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|v| v == "application/json" || v.ends_with("+json"))
}

/// Converts a failed HTTP response into an error.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(|e| Error::transport(parts.headers.clone(), e))?
        .to_bytes();

    let api_error = ApiError::from_response(status_code, &body);
    Err(Error::service(api_error, parts.headers, body))
}

/// Converts a successful HTTP response into a [DetailedResponse].
pub async fn to_http_response<O>(response: reqwest::Response) -> Result<DetailedResponse<O>>
where
    O: serde::de::DeserializeOwned + Default,
{
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(|e| Error::transport(parts.headers.clone(), e))?
        .to_bytes();

    decode(status_code, parts.headers, body)
}

fn decode<O>(status_code: u16, headers: HeaderMap, body: Bytes) -> Result<DetailedResponse<O>>
where
    O: serde::de::DeserializeOwned + Default,
{
    // `202 Accepted`, `204 No Content`, and others may have an empty body.
    if body.is_empty() {
        return Ok(DetailedResponse::from_parts(
            status_code,
            headers,
            O::default(),
            None,
        ));
    }
    if !is_json_content_type(&headers) {
        return Ok(DetailedResponse::from_parts(
            status_code,
            headers,
            O::default(),
            Some(body),
        ));
    }
    match serde_json::from_slice::<O>(&body) {
        Ok(result) => Ok(DetailedResponse::from_parts(
            status_code,
            headers,
            result,
            None,
        )),
        Err(e) => Err(Error::deser_with_http_metadata(
            e,
            status_code,
            headers,
            body,
        )),
    }
}
