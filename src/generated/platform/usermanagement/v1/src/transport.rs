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
use crate::model;
use ibm_cloud_sdk_core::operation::Operation;
use ibm_cloud_sdk_core::options::RequestOptions;
use ibm_cloud_sdk_core::path_parameter::required;
use ibm_cloud_sdk_core::response::DetailedResponse;
use sdki::http::BaseService;

const USERS_PATH: &str = "/v2/accounts/{account_id}/users";
const USER_PATH: &str = "/v2/accounts/{account_id}/users/{iam_id}";
const SETTINGS_PATH: &str = "/v2/accounts/{account_id}/users/{iam_id}/settings";
const ACCEPT_PATH: &str = "/v2/users/accept";

/// Implements [UserManagement](super::stub::UserManagement) using the HTTP
/// request pipeline.
#[derive(Clone)]
pub struct UserManagement {
    inner: BaseService,
}

impl std::fmt::Debug for UserManagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagement")
            .field("inner", &self.inner)
            .finish()
    }
}

impl UserManagement {
    pub async fn new(
        config: sdki::options::ClientConfig,
    ) -> ibm_cloud_sdk_core::client_builder::Result<Self> {
        let inner = BaseService::new(config, crate::SERVICE_INFO).await?;
        Ok(Self { inner })
    }
}

impl super::stub::UserManagement for UserManagement {
    async fn list_users(
        &self,
        req: model::ListUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserList>> {
        let account_id = required(Some(req.account_id.as_str()), "account_id")?;
        let operation = Operation::new(http::Method::GET, USERS_PATH)
            .with_path_param("account_id", account_id)
            .with_query_param("limit", &req.limit)?
            .with_query_param("include_settings", &req.include_settings)?
            .with_query_param("search", &req.search)?
            .with_query_param("_start", &req.start)?
            .with_query_param("user_id", &req.user_id)?
            .with_header("Accept", "application/json")
            .with_header_overrides(headers)
            .with_operation_id("list_users");
        self.inner.execute(operation, options).await
    }

    async fn invite_users(
        &self,
        req: model::InviteUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::InvitedUserList>> {
        let account_id = required(Some(req.account_id.as_str()), "account_id")?;
        let operation = Operation::new(http::Method::POST, USERS_PATH)
            .with_path_param("account_id", account_id)
            .with_header("Accept", "application/json")
            .with_json_body(&req)?
            .with_header_overrides(headers)
            .with_operation_id("invite_users");
        self.inner.execute(operation, options).await
    }

    async fn get_user_profile(
        &self,
        req: model::GetUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserProfile>> {
        let operation = Operation::new(http::Method::GET, USER_PATH)
            .with_path_param("account_id", required(Some(req.account_id.as_str()), "account_id")?)
            .with_path_param("iam_id", required(Some(req.iam_id.as_str()), "iam_id")?)
            .with_query_param("include_activity", &req.include_activity)?
            .with_header("Accept", "application/json")
            .with_header_overrides(headers)
            .with_operation_id("get_user_profile");
        self.inner.execute(operation, options).await
    }

    async fn update_user_profile(
        &self,
        req: model::UpdateUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        let operation = Operation::new(http::Method::PATCH, USER_PATH)
            .with_path_param("account_id", required(Some(req.account_id.as_str()), "account_id")?)
            .with_path_param("iam_id", required(Some(req.iam_id.as_str()), "iam_id")?)
            .with_query_param("include_activity", &req.include_activity)?
            .with_json_body(&req)?
            .with_header_overrides(headers)
            .with_operation_id("update_user_profile");
        self.inner
            .execute::<serde_json::Value>(operation, options)
            .await
            .map(discard_result)
    }

    async fn remove_user(
        &self,
        req: model::RemoveUserRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        let operation = Operation::new(http::Method::DELETE, USER_PATH)
            .with_path_param("account_id", required(Some(req.account_id.as_str()), "account_id")?)
            .with_path_param("iam_id", required(Some(req.iam_id.as_str()), "iam_id")?)
            .with_query_param("include_activity", &req.include_activity)?
            .with_header_overrides(headers)
            .with_operation_id("remove_user");
        self.inner
            .execute::<serde_json::Value>(operation, options)
            .await
            .map(discard_result)
    }

    async fn accept(
        &self,
        req: model::AcceptRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        let operation = Operation::new(http::Method::POST, ACCEPT_PATH)
            .with_json_body(&req)?
            .with_header_overrides(headers)
            .with_operation_id("accept");
        self.inner
            .execute::<serde_json::Value>(operation, options)
            .await
            .map(discard_result)
    }

    async fn get_user_settings(
        &self,
        req: model::GetUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserSettings>> {
        let operation = Operation::new(http::Method::GET, SETTINGS_PATH)
            .with_path_param("account_id", required(Some(req.account_id.as_str()), "account_id")?)
            .with_path_param("iam_id", required(Some(req.iam_id.as_str()), "iam_id")?)
            .with_header("Accept", "application/json")
            .with_header_overrides(headers)
            .with_operation_id("get_user_settings");
        self.inner.execute(operation, options).await
    }

    async fn update_user_settings(
        &self,
        req: model::UpdateUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        let operation = Operation::new(http::Method::PATCH, SETTINGS_PATH)
            .with_path_param("account_id", required(Some(req.account_id.as_str()), "account_id")?)
            .with_path_param("iam_id", required(Some(req.iam_id.as_str()), "iam_id")?)
            .with_json_body(&req)?
            .with_header_overrides(headers)
            .with_operation_id("update_user_settings");
        self.inner
            .execute::<serde_json::Value>(operation, options)
            .await
            .map(discard_result)
    }
}

/// These operations have no result type. Any body the service returns is
/// kept as the raw result.
fn discard_result(response: DetailedResponse<serde_json::Value>) -> DetailedResponse<()> {
    let (status_code, headers, result, raw_result) = response.into_parts();
    let raw_result = match (raw_result, result) {
        (Some(raw), _) => Some(raw),
        (None, serde_json::Value::Null) => None,
        (None, value) => serde_json::to_vec(&value).ok().map(bytes::Bytes::from),
    };
    DetailedResponse::from_parts(status_code, headers, (), raw_result)
}
