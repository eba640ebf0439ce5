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

use serde_json::Value;

/// The structured error reported by an IBM Cloud service.
///
/// IBM Cloud services do not share a single error payload. Most of them
/// return something like:
///
/// ```json
/// {
///   "trace": "...",
///   "errors": [ { "code": "not_found", "message": "The user was not found" } ],
///   "status_code": 404
/// }
/// ```
///
/// but older services may use `error`, `message`, `errorMessage`, or
/// `description` for the human-readable text. [ApiError::from_response]
/// tolerates all these variations, and keeps the full payload in
/// [details][ApiError::details].
///
/// # Example
/// ```
/// # use ibm_cloud_sdk_core::error::ApiError;
/// let body = bytes::Bytes::from_static(br#"{"errors":[{"message":"not here"}]}"#);
/// let error = ApiError::from_response(404, &body);
/// assert_eq!(error.status_code(), 404);
/// assert_eq!(error.message(), "not here");
/// assert!(error.details().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    status_code: u16,
    message: String,
    details: Option<Value>,
}

impl ApiError {
    /// Creates a new error with the given HTTP status code and message.
    pub fn new<T: Into<String>>(status_code: u16, message: T) -> Self {
        Self {
            status_code,
            message: message.into(),
            details: None,
        }
    }

    /// Sets the details of the error.
    pub fn with_details<T: Into<Value>>(mut self, v: T) -> Self {
        self.details = Some(v.into());
        self
    }

    /// The HTTP status code of the response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full error payload, if the service returned a JSON object.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Creates the error from a failed HTTP response.
    ///
    /// The message is extracted from the first field present in:
    /// `errors[0].message`, `error`, `message`, `errorMessage`, and
    /// `description`. When the payload is not JSON, or none of the fields
    /// are present, the message is the payload text or the canonical reason
    /// for the status code.
    pub fn from_response(status_code: u16, payload: &bytes::Bytes) -> Self {
        let details = serde_json::from_slice::<Value>(payload)
            .ok()
            .filter(Value::is_object);
        let message = details
            .as_ref()
            .and_then(message_from_json)
            .or_else(|| text_message(payload))
            .unwrap_or_else(|| canonical_reason(status_code));
        Self {
            status_code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status_code, self.message)
    }
}

fn message_from_json(v: &Value) -> Option<String> {
    if let Some(m) = v
        .get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Some(m.to_string());
    }
    match v.get("error") {
        Some(Value::String(m)) => return Some(m.clone()),
        Some(Value::Object(o)) => {
            if let Some(m) = o.get("message").and_then(Value::as_str) {
                return Some(m.to_string());
            }
        }
        _ => {}
    };
    ["message", "errorMessage", "description"]
        .iter()
        .find_map(|name| v.get(*name).and_then(Value::as_str))
        .map(str::to_string)
}

fn text_message(payload: &bytes::Bytes) -> Option<String> {
    // A JSON payload without a recognizable message is not useful text.
    if serde_json::from_slice::<Value>(payload).is_ok() {
        return None;
    }
    std::str::from_utf8(payload)
        .ok()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn canonical_reason(status_code: u16) -> String {
    http::StatusCode::from_u16(status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"errors": [{"code": "a", "message": "from-errors"}], "message": "no"}), "from-errors")]
    #[test_case(json!({"error": "from-error", "message": "no"}), "from-error")]
    #[test_case(json!({"error": {"message": "from-error-object"}}), "from-error-object")]
    #[test_case(json!({"message": "from-message", "errorMessage": "no"}), "from-message")]
    #[test_case(json!({"errorMessage": "from-error-message", "description": "no"}), "from-error-message")]
    #[test_case(json!({"description": "from-description"}), "from-description")]
    #[test_case(json!({"errors": []}), "Not Found")]
    #[test_case(json!({"unrelated": "field"}), "Not Found")]
    fn message_precedence(body: Value, want: &str) {
        let payload = bytes::Bytes::from(body.to_string());
        let got = ApiError::from_response(404, &payload);
        assert_eq!(got.status_code(), 404);
        assert_eq!(got.message(), want, "{got:?}");
        assert_eq!(got.details(), Some(&body));
    }

    #[test_case(400, "", "Bad Request")]
    #[test_case(503, "   ", "Service Unavailable")]
    #[test_case(502, "upstream connect error", "upstream connect error")]
    #[test_case(599, "", "Unknown Error")]
    fn not_json(code: u16, body: &'static str, want: &str) {
        let payload = bytes::Bytes::from_static(body.as_bytes());
        let got = ApiError::from_response(code, &payload);
        assert_eq!(got.status_code(), code);
        assert_eq!(got.message(), want, "{got:?}");
        assert!(got.details().is_none(), "{got:?}");
    }

    #[test]
    fn json_array_is_not_details() {
        let payload = bytes::Bytes::from_static(b"[1, 2, 3]");
        let got = ApiError::from_response(500, &payload);
        assert_eq!(got.message(), "Internal Server Error");
        assert!(got.details().is_none(), "{got:?}");
    }

    #[test]
    fn new_and_display() {
        let got = ApiError::new(409, "conflict").with_details(json!({"trace": "abc"}));
        assert_eq!(got.status_code(), 409);
        assert_eq!(got.message(), "conflict");
        assert_eq!(got.details(), Some(&json!({"trace": "abc"})));
        assert_eq!(got.to_string(), "[409] conflict");
    }
}
