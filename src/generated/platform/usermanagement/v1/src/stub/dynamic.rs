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
use ibm_cloud_sdk_core::options::RequestOptions;
use ibm_cloud_sdk_core::response::DetailedResponse;

/// A dyn-compatible, crate-private version of [super::UserManagement].
#[async_trait::async_trait]
pub trait UserManagement: std::fmt::Debug + Send + Sync {
    async fn list_users(
        &self,
        req: model::ListUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserList>>;

    async fn invite_users(
        &self,
        req: model::InviteUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::InvitedUserList>>;

    async fn get_user_profile(
        &self,
        req: model::GetUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserProfile>>;

    async fn update_user_profile(
        &self,
        req: model::UpdateUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>>;

    async fn remove_user(
        &self,
        req: model::RemoveUserRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>>;

    async fn accept(
        &self,
        req: model::AcceptRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>>;

    async fn get_user_settings(
        &self,
        req: model::GetUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserSettings>>;

    async fn update_user_settings(
        &self,
        req: model::UpdateUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>>;
}

/// All implementations of [super::UserManagement] also implement [UserManagement].
#[async_trait::async_trait]
impl<T: super::UserManagement> UserManagement for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_users(
        &self,
        req: model::ListUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserList>> {
        T::list_users(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn invite_users(
        &self,
        req: model::InviteUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::InvitedUserList>> {
        T::invite_users(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_user_profile(
        &self,
        req: model::GetUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserProfile>> {
        T::get_user_profile(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_user_profile(
        &self,
        req: model::UpdateUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        T::update_user_profile(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_user(
        &self,
        req: model::RemoveUserRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        T::remove_user(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn accept(
        &self,
        req: model::AcceptRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        T::accept(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_user_settings(
        &self,
        req: model::GetUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserSettings>> {
        T::get_user_settings(self, req, headers, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_user_settings(
        &self,
        req: model::UpdateUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        T::update_user_settings(self, req, headers, options).await
    }
}
