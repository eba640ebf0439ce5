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

#[cfg(test)]
mod tests {
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_auth::authenticators::bearer_token;
    use ibm_cloud_sdk_core::options::RequestOptionsBuilder;
    use ibm_cloud_user_management_v1::client::UserManagement;
    use ibm_cloud_user_management_v1::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<UserManagement> {
        let client = UserManagement::builder()
            .with_service_url(server.url_str("/"))
            .with_authenticator(bearer_token::Builder::new("test-token").build()?)
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_users() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/accounts/account-1/users"),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(contains(("include_settings", "true")))),
                request::query(url_decoded(contains(("_start", "token-1")))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=user_management;service_version=V1;operation_id=list_users"
                ))),
            ])
            .respond_with(json_encoded(json!({
                "total_results": 1,
                "limit": 10,
                "resources": [{"iam_id": "IBMid-1", "state": "ACTIVE"}],
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_users()
            .set_account_id("account-1")
            .set_limit(10)
            .set_include_settings(true)
            .set_start("token-1")
            .send()
            .await?;
        assert_eq!(response.status_code(), 200);
        let list = response.into_result();
        assert_eq!(list.total_results, 1);
        assert_eq!(list.resources.len(), 1);
        assert_eq!(list.resources[0].state.as_deref(), Some("ACTIVE"));
        assert_eq!(list.next_start(), None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_users_by_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/accounts/account-1/users"),
                request::query(url_decoded(not(contains(key("_start"))))),
            ])
            .respond_with(json_encoded(json!({
                "total_results": 2,
                "limit": 1,
                "next_url": "/v2/accounts/account-1/users?limit=1&_start=page-2",
                "resources": [{"iam_id": "IBMid-1"}],
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/accounts/account-1/users"),
                request::query(url_decoded(contains(("_start", "page-2")))),
            ])
            .respond_with(json_encoded(json!({
                "total_results": 2,
                "limit": 1,
                "resources": [{"iam_id": "IBMid-2"}],
            }))),
        );

        let client = test_client(&server).await?;
        let mut pager = client
            .list_users()
            .set_account_id("account-1")
            .set_limit(1)
            .by_page();
        let mut ids = Vec::new();
        while let Some(page) = pager.next().await {
            let page = page?.into_result();
            ids.extend(page.resources.into_iter().filter_map(|u| u.iam_id));
        }
        assert_eq!(ids, vec!["IBMid-1", "IBMid-2"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn invite_users() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/accounts/account-1/users"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "users": [{"email": "user@example.com", "account_role": "Member"}],
                    "access_groups": ["AccessGroupId-1"],
                })))),
            ])
            .respond_with(
                status_code(202)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"resources": [{"email": "user@example.com", "state": "PROCESSING"}]})
                            .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let response = client
            .invite_users()
            .set_account_id("account-1")
            .set_users([model::InviteUser::new()
                .set_email("user@example.com")
                .set_account_role("Member")])
            .set_access_groups(["AccessGroupId-1"])
            .send()
            .await?;
        assert_eq!(response.status_code(), 202);
        let invited = response.into_result();
        assert_eq!(invited.resources.len(), 1);
        assert_eq!(invited.resources[0].state.as_deref(), Some("PROCESSING"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_user_profile() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/accounts/account-1/users/IBMid-1"),
                request::query(url_decoded(contains(("include_activity", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "iam_id": "IBMid-1",
                "email": "user@example.com",
                "account_id": "account-1",
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_user_profile()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .set_include_activity("true")
            .send()
            .await?;
        let want = model::UserProfile::new()
            .set_iam_id("IBMid-1")
            .set_email("user@example.com")
            .set_account_id("account-1");
        assert_eq!(response.result(), &want);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_user_profile() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v2/accounts/account-1/users/IBMid-1"),
                request::body(json_decoded(eq(json!({"firstname": "Jane", "state": "ACTIVE"})))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let response = client
            .update_user_profile()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .set_firstname("Jane")
            .set_state("ACTIVE")
            .send()
            .await?;
        assert_eq!(response.status_code(), 204);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn remove_user() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v2/accounts/account-1/users/IBMid-1"),
                request::headers(contains(("x-request-id", "req-123"))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let response = client
            .remove_user()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .with_header("X-Request-Id", "req-123")
            .send()
            .await?;
        assert_eq!(response.status_code(), 204);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_settings() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/accounts/account-1/users/IBMid-1/settings",
            ))
            .respond_with(json_encoded(json!({
                "language": "en-us",
                "allowed_ip_addresses": "10.0.0.1,10.0.0.2",
                "self_manage": true,
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v2/accounts/account-1/users/IBMid-1/settings"),
                request::body(json_decoded(eq(json!({"self_manage": false})))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_user_settings()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .send()
            .await?;
        let want = model::UserSettings::new()
            .set_language("en-us")
            .set_allowed_ip_addresses("10.0.0.1,10.0.0.2")
            .set_self_manage(true);
        assert_eq!(response.result(), &want);

        let response = client
            .update_user_settings()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .set_self_manage(false)
            .send()
            .await?;
        assert_eq!(response.status_code(), 204);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn update_keeps_response_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "PATCH",
                "/v2/accounts/account-1/users/IBMid-1/settings",
            ))
            .respond_with(json_encoded(json!({"language": "fr"}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .update_user_settings()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .set_language("fr")
            .send()
            .await?;
        assert_eq!(response.status_code(), 200);
        let raw = response
            .raw_result()
            .map(|b| serde_json::from_slice::<serde_json::Value>(b))
            .transpose()?;
        assert_eq!(raw, Some(json!({"language": "fr"})));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn accept() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/users/accept"),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=user_management;service_version=V1;operation_id=accept"
                ))),
                request::body(json_decoded(eq(json!({"account_id": "account-1"})))),
            ])
            .respond_with(status_code(202)),
        );

        let client = test_client(&server).await?;
        let response = client.accept().set_account_id("account-1").send().await?;
        assert_eq!(response.status_code(), 202);
        assert!(response.raw_result().is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_path_parameters() -> Result<()> {
        // The server fails the test if it receives any request.
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client.list_users().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(format!("{err}").contains("account_id"), "{err}");

        let err = client
            .get_user_profile()
            .set_account_id("account-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(format!("{err}").contains("iam_id"), "{err}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/accounts/account-1/users/IBMid-404",
            ))
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "errors": [{"code": "not_found", "message": "user not found"}],
                            "trace": "trace-404",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_user_profile()
            .set_account_id("account-1")
            .set_iam_id("IBMid-404")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(err.api_error().map(|e| e.message()), Some("user not found"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn client_retries() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/accounts/account-1/users/IBMid-1/settings",
            ))
            .times(2)
            .respond_with(cycle![
                status_code(503).body("try-again"),
                json_encoded(json!({"language": "en-us"})),
            ]),
        );

        let client = UserManagement::builder()
            .with_service_url(server.url_str("/"))
            .with_authenticator(bearer_token::Builder::new("test-token").build()?)
            .with_retries(2, Duration::from_millis(10))
            .build()
            .await?;
        let response = client
            .get_user_settings()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .with_attempt_timeout(Duration::from_secs(5))
            .send()
            .await?;
        assert_eq!(response.result().language.as_deref(), Some("en-us"));
        Ok(())
    }
}
