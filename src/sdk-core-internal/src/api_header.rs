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

//! The SDK identification headers.
//!
//! Every request includes a `User-Agent` header identifying this SDK, and a
//! `X-IBMCloud-SDK-Analytics` header identifying the service and operation.

use crate::options::ServiceInfo;
use http::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// The name of the analytics header.
pub const ANALYTICS_HEADER: HeaderName = HeaderName::from_static("x-ibmcloud-sdk-analytics");

const SDK_NAME: &str = "ibm-cloud-sdk-rust";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Formats the `User-Agent` header value.
pub fn user_agent() -> String {
    // Strip the initial "rustc " string from `RUSTC_VERSION`, if present.
    let rustc_version = build_info::RUSTC_VERSION;
    let rustc_version = rustc_version
        .strip_prefix("rustc ")
        .unwrap_or(rustc_version);
    format!(
        "{SDK_NAME}/{} (lang=rust; arch={}; os={}; rustc.version={rustc_version})",
        build_info::PKG_VERSION,
        std::env::consts::ARCH,
        std::env::consts::OS,
    )
}

/// Formats the `X-IBMCloud-SDK-Analytics` header value.
pub fn analytics(info: &ServiceInfo, operation_id: &str) -> String {
    format!(
        "service_name={};service_version={};operation_id={operation_id}",
        info.service_name, info.service_version
    )
}

/// The headers included in every request sent by a client.
///
/// Computed once, when the client is created.
pub fn sdk_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(v) = HeaderValue::from_str(&user_agent()) {
        headers.insert(USER_AGENT, v);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "test_service",
        service_version: "V1",
        default_url: "https://test.cloud.ibm.com",
    };

    #[test]
    fn format_user_agent() {
        let got = user_agent();
        let want_prefix = format!("ibm-cloud-sdk-rust/{} (", build_info::PKG_VERSION);
        assert!(got.starts_with(&want_prefix), "{got}");
        assert!(got.contains("lang=rust;"), "{got}");
        assert!(
            got.contains(&format!("arch={};", std::env::consts::ARCH)),
            "{got}"
        );
        assert!(got.contains(&format!("os={};", std::env::consts::OS)), "{got}");
        assert!(got.ends_with(')'), "{got}");
        assert!(!got.contains("rustc.version=rustc "), "{got}");
    }

    #[test]
    fn format_analytics() {
        let got = analytics(&INFO, "get_user_profile");
        assert_eq!(
            got,
            "service_name=test_service;service_version=V1;operation_id=get_user_profile"
        );
    }

    #[test]
    fn headers() {
        let headers = sdk_headers();
        let got = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());
        assert_eq!(got, Some(user_agent().as_str()));
        assert!(headers.get(ANALYTICS_HEADER).is_none(), "{headers:?}");
    }
}
