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

use super::{ApiError, CredentialsError};
use bytes::Bytes;
use http::HeaderMap;
use std::error::Error as StdError;
use std::time::Duration;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all service clients.
///
/// The service clients report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection, the request may exceed its deadline or be cancelled,
/// the retry policy may be exhausted, or the client may be unable to format
/// the request due to invalid or missing application inputs.
///
/// Most applications will just return the error or log it. Some applications
/// may need to interrogate the error details. This type offers a series of
/// predicates to determine the error kind, and accessors to query the most
/// common error details. Applications can query the error
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_sdk_core::error::Error;
/// match example_function() {
///     Err(e) if e.api_error().is_some() => {
///         println!("service error {e}, debug using {:?}", e.api_error());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use ibm_cloud_sdk_core::error::ApiError;
///     # Err(Error::service(ApiError::new(404, "Not Found"), http::HeaderMap::new(), bytes::Bytes::new()))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by an IBM Cloud service.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_sdk_core::error::{ApiError, Error};
    /// let api_error = ApiError::new(404, "the user was not found");
    /// let error = Error::service(api_error.clone(), http::HeaderMap::new(), bytes::Bytes::new());
    /// assert_eq!(error.api_error(), Some(&api_error));
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn service(api_error: ApiError, headers: HeaderMap, payload: Bytes) -> Self {
        let details = ServiceDetails {
            api_error,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The structured error reported by the service, if any.
    ///
    /// The service reports problems with a HTTP status code and (usually) a
    /// JSON payload with more details. Consult the service documentation to
    /// troubleshoot these errors.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.api_error),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_sdk_core::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a cancelled request.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_sdk_core::error::Error;
    /// let error = Error::cancelled("simulated cancellation");
    /// assert!(error.is_cancelled());
    /// ```
    pub fn cancelled<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Cancelled,
            source: Some(source.into()),
        }
    }

    /// The application cancelled the request.
    ///
    /// The request was stopped because the cancellation token in the
    /// [RequestOptions][crate::options::RequestOptions] was triggered. As with
    /// timeouts, the request may or may not have reached the service.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_sdk_core::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it may be the result
    /// of multiple errors received from the service. The
    /// [source][std::error::Error::source] is the error from the last attempt.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is a transient problem that lasts
    /// longer than your retry policy. If your application can tolerate longer
    /// recovery times then extend the retry policy.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization(None),
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a deserialization error for a response that otherwise
    /// succeeded, keeping the HTTP metadata.
    #[doc(hidden)]
    pub fn deser_with_http_metadata<T: Into<BoxError>>(
        source: T,
        status_code: u16,
        headers: HeaderMap,
        payload: Bytes,
    ) -> Self {
        let details = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Deserialization(Some(Box::new(details))),
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The HTTP request
    /// succeeded, so it is never retried. If the request mutates any state in
    /// the service, the change most likely took effect.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause for deserialization problems are bugs in the
    /// service client and (rarely) bugs in the service. The
    /// [http_payload][Error::http_payload] accessor returns the raw response
    /// body, which may help diagnose the problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization(_))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input.
    ///
    /// # Troubleshooting
    ///
    /// Verify custom header names and values are valid, and that any custom
    /// types in the request body serialize to JSON.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot resolve the request URL.
    ///
    /// This indicates the request is missing required parameters, or the
    /// service URL is not configured.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters, or the client
    /// has no valid service URL.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required field
    /// in the request builder was not initialized, or was initialized to an
    /// empty string.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authenticator, such as a
    /// revoked API key. Occasionally this may indicate a failure to contact
    /// the IAM token service.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include a refused connection, a DNS failure, or a broken
    /// connection after the request is sent.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails { headers: None };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. The service may be
    /// unreachable from your network, or a proxy may have dropped the
    /// connection. These errors are retried when retries are enabled.
    pub fn is_io(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Transport(d) if d.headers.is_none()
        )
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer after the response headers
    /// were received. For example, the connection was dropped while reading
    /// the response body.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            headers: Some(headers),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer.
    ///
    /// This includes all [is_io][Error::is_io] errors, and problems reading
    /// the response after the headers were received.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_sdk_core::error::{ApiError, Error};
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::service(ApiError::new(404, "NOT FOUND"), http::HeaderMap::new(), bytes::Bytes::new())
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.api_error.status_code()),
            ErrorKind::Deserialization(Some(d)) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.headers),
            ErrorKind::Deserialization(Some(d)) => Some(&d.headers),
            ErrorKind::Transport(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The raw response body, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.payload),
            ErrorKind::Deserialization(Some(d)) => Some(&d.payload),
            _ => None,
        }
    }

    /// The delay requested by the service via the `Retry-After` header.
    ///
    /// The header may contain a number of seconds or a HTTP date. A date in
    /// the past returns a zero delay.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_sdk_core::error::{ApiError, Error};
    /// use std::time::Duration;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("retry-after", http::HeaderValue::from_static("3"));
    /// let e = Error::service(ApiError::new(429, "slow down"), headers, bytes::Bytes::new());
    /// assert_eq!(e.retry_after(), Some(Duration::from_secs(3)));
    /// ```
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.http_headers()?.get(http::header::RETRY_AFTER)?;
        parse_retry_after(value.to_str().ok()?.trim())
    }

    /// The error was generated before the request started and is transient.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

fn parse_retry_after(value: &str) -> Option<Duration> {
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc2822;

    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    // HTTP dates always use `GMT`, which is obsolete in RFC 2822.
    let date = OffsetDateTime::parse(value, &Rfc2822)
        .or_else(|e| match value.strip_suffix("GMT") {
            Some(prefix) => OffsetDateTime::parse(&format!("{prefix}+0000"), &Rfc2822),
            None => Err(e),
        })
        .ok()?;
    let delta = date - OffsetDateTime::now_utc();
    Some(delta.try_into().unwrap_or(Duration::ZERO))
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request URL {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization(None), Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Deserialization(Some(d)), Some(e)) => {
                write!(
                    f,
                    "cannot deserialize the response with status {}: {e}",
                    d.status_code
                )
            }
            (ErrorKind::Authentication, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Timeout, Some(e)) => write!(f, "deadline exceeded: {e}"),
            (ErrorKind::Cancelled, Some(e)) => write!(f, "the request was cancelled: {e}"),
            (ErrorKind::Exhausted, Some(e)) => {
                write!(f, "retry policy exhausted, last error: {e}")
            }
            (ErrorKind::Transport(_), Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with status {}: {}",
                    d.api_error.status_code(),
                    d.api_error.message()
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization(Option<Box<HttpDetails>>),
    Authentication,
    Timeout,
    Cancelled,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    headers: Option<HeaderMap>,
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: Bytes,
}

#[derive(Debug)]
struct ServiceDetails {
    api_error: ApiError,
    headers: HeaderMap,
    payload: Bytes,
}
