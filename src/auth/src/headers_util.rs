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

use crate::Result;
use crate::errors;
use crate::token::Token;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

/// Creates the headers for a token, using `<token_type> <token>`.
pub(crate) fn build_bearer_headers(token: &Token) -> Result<HeaderMap> {
    let token_type = match token.token_type.as_str() {
        "" => "Bearer",
        t => t,
    };
    authorization(format!("{token_type} {}", token.token))
}

/// Creates the headers for basic authentication.
pub(crate) fn build_basic_headers(username: &str, password: &str) -> Result<HeaderMap> {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    authorization(format!("Basic {encoded}"))
}

fn authorization(value: String) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&value).map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
