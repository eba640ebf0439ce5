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

//! Errors created during authenticator construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Authenticator] builders.
///
/// Authenticators validate their configuration when they are built, so
/// problems such as an empty API key are detected when the client is created,
/// and not on the first request.
///
/// [Authenticator]: super::authenticators::Authenticator
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// A problem finding or reading the credentials file.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading(_))
    }

    /// The authentication type is invalid or unknown.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    /// A required field was missing from the builder.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// A field has an invalid value.
    ///
    /// Values that start or end with braces or quotes are rejected, they
    /// are usually the result of copying a placeholder from a template.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.0, ErrorKind::InvalidValue(_))
    }

    pub(crate) fn loading<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading(source.into()))
    }

    pub(crate) fn unknown_type<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::UnknownType(source.into()))
    }

    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    pub(crate) fn invalid_value(field: &'static str) -> Error {
        Error(ErrorKind::InvalidValue(field))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not find or read the credentials file {0}")]
    Loading(#[source] BoxError),
    #[error("unknown or invalid authentication type {0}")]
    UnknownType(#[source] BoxError),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("the {0} field has an invalid value, remove any surrounding {{, }}, or \" characters")]
    InvalidValue(&'static str),
}

/// Verifies a required builder field.
pub(crate) fn validate(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    if has_bad_first_or_last_char(value) {
        return Err(Error::invalid_value(field));
    }
    Ok(())
}

fn has_bad_first_or_last_char(value: &str) -> bool {
    const BAD: [char; 3] = ['{', '}', '"'];
    value.starts_with(&BAD[..]) || value.ends_with(&BAD[..])
}
