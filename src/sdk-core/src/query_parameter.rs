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

use crate::request_parameter::RequestParameter;

type Result<T> = std::result::Result<T, crate::request_parameter::Error>;

/// The ordered list of query parameters of a request.
///
/// Repeated names are preserved as separate entries.
pub type QueryPairs = Vec<(String, String)>;

/// Appends a query parameter to `query`.
///
/// - Simple scalars are formatted as usual.
/// - [Option] fields that do not contain a value are not included.
/// - Repeated fields are formatted as repeated query parameters.
/// - Object fields use `field.subfield` format, and may recurse.
///
/// This function is called from the service clients. It is not intended for
/// general use.
pub fn add<T>(query: &mut QueryPairs, name: &str, parameter: &T) -> Result<()>
where
    T: QueryParameter + ?Sized,
{
    QueryParameter::add(parameter, query, name)
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(&self, query: &mut QueryPairs, name: &str) -> Result<()>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, query: &mut QueryPairs, name: &str) -> Result<()> {
        match &self {
            None => Ok(()),
            Some(t) => t.add(query, name),
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(&self, query: &mut QueryPairs, name: &str) -> Result<()> {
        self.iter().try_for_each(|e| e.add(query, name))
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn add(&self, query: &mut QueryPairs, name: &str) -> Result<()> {
        query.push((name.to_string(), self.format()?));
        Ok(())
    }
}

impl QueryParameter for serde_json::Value {
    fn add(&self, query: &mut QueryPairs, name: &str) -> Result<()> {
        match self {
            Self::Object(object) => object
                .iter()
                .try_for_each(|(k, v)| v.add(query, format!("{name}.{k}").as_str())),
            Self::Array(array) => array.iter().try_for_each(|v| v.add(query, name)),
            Self::Null => Ok(()),
            Self::String(s) => {
                query.push((name.to_string(), s.clone()));
                Ok(())
            }
            Self::Number(n) => {
                query.push((name.to_string(), format!("{n}")));
                Ok(())
            }
            Self::Bool(b) => {
                query.push((name.to_string(), format!("{b}")));
                Ok(())
            }
        }
    }
}
