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

//! Tracing spans for HTTP requests.

use crate::options::ServiceInfo;
use crate::request_builder::HttpRequest;
use ibm_cloud_sdk_core::error::Error;
use tracing::{Span, field};

pub const OTEL_NAME: &str = "otel.name";
pub const OTEL_STATUS_DESCRIPTION: &str = "otel.status_description";
pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
pub const HTTP_REQUEST_RESEND_COUNT: &str = "http.request.resend_count";
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub const SERVER_ADDRESS: &str = "server.address";
pub const SERVER_PORT: &str = "server.port";
pub const URL_FULL: &str = "url.full";
pub const URL_TEMPLATE: &str = "url.template";
pub const ERROR_TYPE: &str = "error.type";
pub const IBM_CLIENT_SERVICE: &str = "ibm.client.service";
pub const IBM_CLIENT_VERSION: &str = "ibm.client.version";

/// Classifies errors for the `error.type` span field.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorType {
    HttpError(u16),
    ClientTimeout,
    ClientCancelled,
    ClientConnectionError,
    ClientAuthenticationError,
    ClientRequestError,
    ClientResponseDecodeError,
    Internal,
}

impl ErrorType {
    pub fn from_error(err: &Error) -> Self {
        match err {
            e if e.is_timeout() => Self::ClientTimeout,
            e if e.is_cancelled() => Self::ClientCancelled,
            e if e.is_authentication() => Self::ClientAuthenticationError,
            e if e.is_binding() || e.is_serialization() => Self::ClientRequestError,
            e if e.is_deserialization() => Self::ClientResponseDecodeError,
            e if e.is_transport() => Self::ClientConnectionError,
            e => match e.http_status_code() {
                Some(code) => Self::HttpError(code),
                None => Self::Internal,
            },
        }
    }

    pub fn as_str(&self) -> String {
        match self {
            Self::HttpError(code) => code.to_string(),
            Self::ClientTimeout => "CLIENT_TIMEOUT".to_string(),
            Self::ClientCancelled => "CLIENT_CANCELLED".to_string(),
            Self::ClientConnectionError => "CLIENT_CONNECTION_ERROR".to_string(),
            Self::ClientAuthenticationError => "CLIENT_AUTHENTICATION_ERROR".to_string(),
            Self::ClientRequestError => "CLIENT_REQUEST_ERROR".to_string(),
            Self::ClientResponseDecodeError => "CLIENT_RESPONSE_DECODE_ERROR".to_string(),
            Self::Internal => "INTERNAL".to_string(),
        }
    }
}

/// Creates the span for a single HTTP attempt.
pub(crate) fn create_http_attempt_span(
    request: &HttpRequest,
    path_template: &str,
    info: &ServiceInfo,
    prior_attempt_count: u32,
) -> Span {
    let url = &request.url;
    let name = format!("{} {path_template}", request.method);
    let resend_count = match prior_attempt_count {
        0 => None,
        n => Some(n as i64),
    };
    tracing::info_span!(
        "http_request",
        { OTEL_NAME } = name.as_str(),
        { HTTP_REQUEST_METHOD } = request.method.as_str(),
        { SERVER_ADDRESS } = url.host_str().unwrap_or(""),
        { SERVER_PORT } = url.port_or_known_default().map(|p| p as i64).unwrap_or(0),
        { URL_FULL } = url.as_str(),
        { URL_TEMPLATE } = path_template,
        { IBM_CLIENT_SERVICE } = info.service_name,
        { IBM_CLIENT_VERSION } = info.service_version,
        { HTTP_REQUEST_RESEND_COUNT } = resend_count,
        // Fields recorded when the attempt completes.
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
        { OTEL_STATUS_DESCRIPTION } = field::Empty,
    )
}

/// Records the outcome of an attempt.
pub(crate) fn record_http_response_attributes(span: &Span, result: Result<u16, &Error>) {
    match result {
        Ok(status) => {
            span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
        }
        Err(err) => {
            if let Some(status) = err.http_status_code() {
                span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
            }
            let error_type = ErrorType::from_error(err).as_str();
            span.record(ERROR_TYPE, error_type.as_str());
            span.record(OTEL_STATUS_DESCRIPTION, field::display(err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use ibm_cloud_sdk_core::error::{ApiError, CredentialsError};
    use test_case::test_case;

    #[test_case(Error::timeout("test"), ErrorType::ClientTimeout)]
    #[test_case(Error::cancelled("test"), ErrorType::ClientCancelled)]
    #[test_case(Error::authentication(CredentialsError::from_msg(false, "test")), ErrorType::ClientAuthenticationError)]
    #[test_case(Error::binding("test"), ErrorType::ClientRequestError)]
    #[test_case(Error::ser("test"), ErrorType::ClientRequestError)]
    #[test_case(Error::deser("test"), ErrorType::ClientResponseDecodeError)]
    #[test_case(Error::io("test"), ErrorType::ClientConnectionError)]
    #[test_case(Error::service(ApiError::new(503, "unavailable"), http::HeaderMap::new(), Bytes::new()), ErrorType::HttpError(503))]
    #[test_case(Error::exhausted("test"), ErrorType::Internal)]
    fn classify(input: Error, want: ErrorType) {
        assert_eq!(ErrorType::from_error(&input), want);
    }

    #[test_case(ErrorType::HttpError(404), "404")]
    #[test_case(ErrorType::ClientTimeout, "CLIENT_TIMEOUT")]
    #[test_case(ErrorType::ClientConnectionError, "CLIENT_CONNECTION_ERROR")]
    fn format(input: ErrorType, want: &str) {
        assert_eq!(input.as_str(), want);
    }
}
