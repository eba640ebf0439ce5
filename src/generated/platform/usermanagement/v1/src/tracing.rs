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

/// Implements a [UserManagement](super::stub::UserManagement) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct UserManagement<T>
where
    T: super::stub::UserManagement + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> UserManagement<T>
where
    T: super::stub::UserManagement + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

// The per-call headers may carry credentials, they are never recorded.
impl<T> super::stub::UserManagement for UserManagement<T>
where
    T: super::stub::UserManagement + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret, skip(headers))]
    async fn list_users(
        &self,
        req: model::ListUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserList>> {
        self.inner.list_users(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn invite_users(
        &self,
        req: model::InviteUsersRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::InvitedUserList>> {
        self.inner.invite_users(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn get_user_profile(
        &self,
        req: model::GetUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserProfile>> {
        self.inner.get_user_profile(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn update_user_profile(
        &self,
        req: model::UpdateUserProfileRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        self.inner.update_user_profile(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn remove_user(
        &self,
        req: model::RemoveUserRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        self.inner.remove_user(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn accept(
        &self,
        req: model::AcceptRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        self.inner.accept(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn get_user_settings(
        &self,
        req: model::GetUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<model::UserSettings>> {
        self.inner.get_user_settings(req, headers, options).await
    }

    #[tracing::instrument(ret, skip(headers))]
    async fn update_user_settings(
        &self,
        req: model::UpdateUserSettingsRequest,
        headers: http::HeaderMap,
        options: RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        self.inner.update_user_settings(req, headers, options).await
    }
}
