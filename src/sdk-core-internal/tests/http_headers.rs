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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use echo_server::get_header_value;
    use http::HeaderMap;
    use http::header::HeaderValue;
    use ibm_cloud_sdk_core::operation::Operation;
    use ibm_cloud_sdk_core::options::RequestOptions;
    use ibm_cloud_sdk_core_internal::api_header::user_agent;
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    fn echo() -> Operation {
        Operation::new(http::Method::POST, "/echo")
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn default_user_agent() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute::<serde_json::Value>(echo(), RequestOptions::default())
            .await?
            .into_result();
        assert_eq!(get_header_value(&response, "user-agent"), Some(user_agent()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent_prefix() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let mut options = RequestOptions::default();
        options.set_user_agent("test-only/1.2.3");
        let response = client
            .execute::<serde_json::Value>(echo(), options)
            .await?
            .into_result();
        let got = get_header_value(&response, "user-agent");
        assert_eq!(got, Some(format!("test-only/1.2.3 {}", user_agent())));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn analytics() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute::<serde_json::Value>(
                echo().with_operation_id("echo_request"),
                RequestOptions::default(),
            )
            .await?
            .into_result();
        let got = get_header_value(&response, "x-ibmcloud-sdk-analytics");
        assert_eq!(
            got.as_deref(),
            Some("service_name=echo_service;service_version=V1;operation_id=echo_request")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn header_precedence() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let defaults = HeaderMap::from_iter([
            (
                http::header::HeaderName::from_static("x-default-only"),
                HeaderValue::from_static("default"),
            ),
            (
                http::header::HeaderName::from_static("x-shared"),
                HeaderValue::from_static("default"),
            ),
        ]);
        let client = echo_server::builder(endpoint)
            .with_default_headers(defaults)
            .build()
            .await?;

        let overrides = HeaderMap::from_iter([(
            http::header::HeaderName::from_static("x-shared"),
            HeaderValue::from_static("override"),
        )]);
        let op = echo()
            .with_header("x-shared", "operation")
            .with_header("x-operation-only", "operation")
            .with_header_overrides(overrides);
        let response = client
            .execute::<serde_json::Value>(op, RequestOptions::default())
            .await?
            .into_result();
        assert_eq!(
            get_header_value(&response, "x-default-only").as_deref(),
            Some("default")
        );
        assert_eq!(
            get_header_value(&response, "x-operation-only").as_deref(),
            Some("operation")
        );
        assert_eq!(
            get_header_value(&response, "x-shared").as_deref(),
            Some("override")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn gzip_body() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_gzip_compression(true)
            .build()
            .await?;
        assert!(client.enable_gzip_compression());

        let payload = json!({"name": "test-user", "tags": ["a", "b"]});
        let op = echo().with_json_body(&payload)?;
        let response = client
            .execute::<serde_json::Value>(op, RequestOptions::default())
            .await?
            .into_result();
        assert_eq!(
            get_header_value(&response, "content-encoding").as_deref(),
            Some("gzip")
        );
        assert_eq!(response.get("body"), Some(&payload));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn raw_body() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let op = echo().with_body("plain text", "text/plain");
        let response = client
            .execute::<serde_json::Value>(op, RequestOptions::default())
            .await?
            .into_result();
        assert_eq!(
            get_header_value(&response, "content-type").as_deref(),
            Some("text/plain")
        );
        assert_eq!(response.get("body"), Some(&json!("plain text")));
        assert_eq!(get_header_value(&response, "content-encoding"), None);
        Ok(())
    }
}
