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

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Returns the error for a missing or empty path parameter.
pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the value of a required path parameter.
///
/// Path parameters are substituted into the request URL, an empty value would
/// change the meaning of the path. Both `None` and empty strings are errors.
pub fn required<'a>(value: Option<&'a str>, name: &str) -> crate::Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test_case(Some("abc-123"), true)]
    #[test_case(Some(""), false)]
    #[test_case(None, false)]
    fn required(input: Option<&str>, ok: bool) {
        let got = super::required(input, "account_id");
        assert_eq!(got.is_ok(), ok, "{got:?}");
        if let Err(e) = got {
            assert!(e.is_binding(), "{e:?}");
            assert!(format!("{e}").contains("account_id"), "{e:?}");
        }
    }
}
