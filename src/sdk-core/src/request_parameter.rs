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

use base64::Engine;

type Result = std::result::Result<String, Error>;

pub(crate) trait RequestParameter {
    fn format(&self) -> Result;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format {0} as a request parameter")]
    NotFinite(String),
}

macro_rules! display_parameter {
    ($($t:ty),*) => {
        $(
            impl RequestParameter for $t {
                fn format(&self) -> Result {
                    Ok(format!("{self}"))
                }
            }
        )*
    };
}

display_parameter!(i32, i64, u32, u64, bool, String);

macro_rules! float_parameter {
    ($($t:ty),*) => {
        $(
            impl RequestParameter for $t {
                fn format(&self) -> Result {
                    if !self.is_finite() {
                        return Err(Error::NotFinite(format!("{self}")));
                    }
                    Ok(format!("{self}"))
                }
            }
        )*
    };
}

float_parameter!(f32, f64);

impl RequestParameter for &str {
    fn format(&self) -> Result {
        Ok(self.to_string())
    }
}

impl RequestParameter for bytes::Bytes {
    fn format(&self) -> Result {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        Ok(URL_SAFE_NO_PAD.encode(self.iter()))
    }
}
