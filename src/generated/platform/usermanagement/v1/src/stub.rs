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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

use crate::Result;
use crate::model;
use ibm_cloud_sdk_core::options::RequestOptions;
use ibm_cloud_sdk_core::response::DetailedResponse;

const UNIMPLEMENTED: &str = concat!(
    "this method is not implemented by the stub. ",
    "Mocks and decorators must implement every method they use."
);

/// Defines the trait used to implement [super::client::UserManagement].
///
/// Application developers may need to implement this trait to mock
/// `client::UserManagement`. In other use-cases, application developers only
/// use `client::UserManagement` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
///
/// The `headers` argument contains the per-call headers set by the
/// application.
pub trait UserManagement: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::UserManagement::list_users].
    fn list_users(
        &self,
        _req: model::ListUsersRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<model::UserList>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::invite_users].
    fn invite_users(
        &self,
        _req: model::InviteUsersRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<model::InvitedUserList>>> + Send
    {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::get_user_profile].
    fn get_user_profile(
        &self,
        _req: model::GetUserProfileRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<model::UserProfile>>> + Send
    {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::update_user_profile].
    fn update_user_profile(
        &self,
        _req: model::UpdateUserProfileRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::remove_user].
    fn remove_user(
        &self,
        _req: model::RemoveUserRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::accept].
    fn accept(
        &self,
        _req: model::AcceptRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::get_user_settings].
    fn get_user_settings(
        &self,
        _req: model::GetUserSettingsRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<model::UserSettings>>> + Send
    {
        unimplemented_stub()
    }

    /// Implements [super::client::UserManagement::update_user_settings].
    fn update_user_settings(
        &self,
        _req: model::UpdateUserSettingsRequest,
        _headers: http::HeaderMap,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<DetailedResponse<()>>> + Send {
        unimplemented_stub()
    }
}

async fn unimplemented_stub<T>() -> Result<T> {
    unimplemented!("{UNIMPLEMENTED}");
}
