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

pub mod user_management {
    use crate::Result;
    use crate::model;
    use ibm_cloud_sdk_core::error::Error;
    use ibm_cloud_sdk_core::options::RequestOptions;
    use ibm_cloud_sdk_core::response::DetailedResponse;
    use std::sync::Arc;

    /// A builder for [UserManagement][crate::client::UserManagement].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_user_management_v1::*;
    /// # use builder::user_management::ClientBuilder;
    /// # use client::UserManagement;
    /// let builder : ClientBuilder = UserManagement::builder();
    /// let client = builder
    ///     .with_service_url("https://user-management.test.cloud.ibm.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder = ibm_cloud_sdk_core::client_builder::ClientBuilder<
        client::Factory,
        sdki::options::Authenticator,
    >;

    pub(crate) mod client {
        use super::super::super::client::UserManagement;
        pub struct Factory;
        impl ibm_cloud_sdk_core::client_builder::internal::ClientFactory for Factory {
            type Client = UserManagement;
            type Authenticator = sdki::options::Authenticator;
            async fn build(
                self,
                config: sdki::options::ClientConfig,
            ) -> ibm_cloud_sdk_core::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::UserManagement] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::UserManagement>,
        request: R,
        headers: Vec<(String, String)>,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self {
                stub,
                request: R::default(),
                headers: Vec::new(),
                options: RequestOptions::default(),
            }
        }

        /// Converts the per-call headers, the last value for each name wins.
        fn header_map(&self) -> Result<http::HeaderMap> {
            let mut map = http::HeaderMap::with_capacity(self.headers.len());
            for (name, value) in &self.headers {
                let name = http::HeaderName::from_bytes(name.as_bytes()).map_err(Error::binding)?;
                let value = http::HeaderValue::from_str(value).map_err(Error::binding)?;
                map.insert(name, value);
            }
            Ok(map)
        }
    }

    /// The request builder for [UserManagement::list_users][crate::client::UserManagement::list_users] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_user_management_v1::builder;
    /// use builder::user_management::ListUsers;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    ///
    /// fn prepare_request_builder() -> ListUsers {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListUsers(RequestBuilder<model::ListUsersRequest>);

    impl ListUsers {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListUsersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<model::UserList>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .list_users(self.0.request, headers, self.0.options)
                .await
        }

        /// Returns a pager to iterate over all the pages of users.
        ///
        /// The pager starts with the `start` token in the request, if any.
        pub fn by_page(self) -> UsersPager {
            UsersPager { next: Some(self) }
        }

        /// Sets the value of [account_id][model::ListUsersRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [limit][model::ListUsersRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [include_settings][model::ListUsersRequest::include_settings].
        pub fn set_include_settings<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_settings = Some(v.into());
            self
        }

        /// Sets the value of [search][model::ListUsersRequest::search].
        pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }

        /// Sets the value of [start][model::ListUsersRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets the value of [user_id][model::ListUsersRequest::user_id].
        pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.user_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for ListUsers {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// Iterates over the pages returned by [ListUsers].
    ///
    /// Each page is requested with the `_start` token found in the `next_url`
    /// of the previous page. The pager stops after the last page, or after
    /// the first error.
    #[derive(Debug)]
    pub struct UsersPager {
        next: Option<ListUsers>,
    }

    impl UsersPager {
        /// Fetches the next page, returns `None` once all pages are consumed.
        pub async fn next(&mut self) -> Option<Result<DetailedResponse<model::UserList>>> {
            let builder = self.next.take()?;
            let retry = builder.clone();
            let response = match builder.send().await {
                Err(e) => return Some(Err(e)),
                Ok(r) => r,
            };
            if let Some(start) = response.result().next_start() {
                self.next = Some(retry.set_start(start));
            }
            Some(Ok(response))
        }
    }

    /// The request builder for [UserManagement::invite_users][crate::client::UserManagement::invite_users] calls.
    #[derive(Clone, Debug)]
    pub struct InviteUsers(RequestBuilder<model::InviteUsersRequest>);

    impl InviteUsers {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::InviteUsersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<model::InvitedUserList>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .invite_users(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::InviteUsersRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [users][model::InviteUsersRequest::users].
        pub fn set_users<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<model::InviteUser>,
        {
            self.0.request.users = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [iam_policy][model::InviteUsersRequest::iam_policy].
        pub fn set_iam_policy<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<model::InviteUserIamPolicy>,
        {
            self.0.request.iam_policy = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [access_groups][model::InviteUsersRequest::access_groups].
        pub fn set_access_groups<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.access_groups = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for InviteUsers {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [UserManagement::get_user_profile][crate::client::UserManagement::get_user_profile] calls.
    #[derive(Clone, Debug)]
    pub struct GetUserProfile(RequestBuilder<model::GetUserProfileRequest>);

    impl GetUserProfile {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetUserProfileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<model::UserProfile>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .get_user_profile(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::GetUserProfileRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [iam_id][model::GetUserProfileRequest::iam_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = v.into();
            self
        }

        /// Sets the value of [include_activity][model::GetUserProfileRequest::include_activity].
        pub fn set_include_activity<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.include_activity = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for GetUserProfile {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [UserManagement::update_user_profile][crate::client::UserManagement::update_user_profile] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateUserProfile(RequestBuilder<model::UpdateUserProfileRequest>);

    impl UpdateUserProfile {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::UpdateUserProfileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<()>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .update_user_profile(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::UpdateUserProfileRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [iam_id][model::UpdateUserProfileRequest::iam_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = v.into();
            self
        }

        /// Sets the value of [include_activity][model::UpdateUserProfileRequest::include_activity].
        pub fn set_include_activity<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.include_activity = Some(v.into());
            self
        }

        /// Sets the value of [firstname][model::UpdateUserProfileRequest::firstname].
        pub fn set_firstname<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.firstname = Some(v.into());
            self
        }

        /// Sets the value of [lastname][model::UpdateUserProfileRequest::lastname].
        pub fn set_lastname<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.lastname = Some(v.into());
            self
        }

        /// Sets the value of [state][model::UpdateUserProfileRequest::state].
        pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.state = Some(v.into());
            self
        }

        /// Sets the value of [email][model::UpdateUserProfileRequest::email].
        pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.email = Some(v.into());
            self
        }

        /// Sets the value of [phonenumber][model::UpdateUserProfileRequest::phonenumber].
        pub fn set_phonenumber<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.phonenumber = Some(v.into());
            self
        }

        /// Sets the value of [altphonenumber][model::UpdateUserProfileRequest::altphonenumber].
        pub fn set_altphonenumber<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.altphonenumber = Some(v.into());
            self
        }

        /// Sets the value of [photo][model::UpdateUserProfileRequest::photo].
        pub fn set_photo<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.photo = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for UpdateUserProfile {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [UserManagement::remove_user][crate::client::UserManagement::remove_user] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveUser(RequestBuilder<model::RemoveUserRequest>);

    impl RemoveUser {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::RemoveUserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<()>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .remove_user(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::RemoveUserRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [iam_id][model::RemoveUserRequest::iam_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = v.into();
            self
        }

        /// Sets the value of [include_activity][model::RemoveUserRequest::include_activity].
        pub fn set_include_activity<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.include_activity = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for RemoveUser {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [UserManagement::accept][crate::client::UserManagement::accept] calls.
    #[derive(Clone, Debug)]
    pub struct Accept(RequestBuilder<model::AcceptRequest>);

    impl Accept {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::AcceptRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<()>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .accept(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::AcceptRequest::account_id].
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for Accept {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [UserManagement::get_user_settings][crate::client::UserManagement::get_user_settings] calls.
    #[derive(Clone, Debug)]
    pub struct GetUserSettings(RequestBuilder<model::GetUserSettingsRequest>);

    impl GetUserSettings {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetUserSettingsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<model::UserSettings>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .get_user_settings(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::GetUserSettingsRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [iam_id][model::GetUserSettingsRequest::iam_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for GetUserSettings {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [UserManagement::update_user_settings][crate::client::UserManagement::update_user_settings] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateUserSettings(RequestBuilder<model::UpdateUserSettingsRequest>);

    impl UpdateUserSettings {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::UserManagement>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::UpdateUserSettingsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Adds a header to this call.
        pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
            self.0.headers.push((name.into(), value.into()));
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<DetailedResponse<()>> {
            let headers = self.0.header_map()?;
            (*self.0.stub)
                .update_user_settings(self.0.request, headers, self.0.options)
                .await
        }

        /// Sets the value of [account_id][model::UpdateUserSettingsRequest::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.account_id = v.into();
            self
        }

        /// Sets the value of [iam_id][model::UpdateUserSettingsRequest::iam_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.iam_id = v.into();
            self
        }

        /// Sets the value of [language][model::UpdateUserSettingsRequest::language].
        pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.language = Some(v.into());
            self
        }

        /// Sets the value of [notification_language][model::UpdateUserSettingsRequest::notification_language].
        pub fn set_notification_language<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.notification_language = Some(v.into());
            self
        }

        /// Sets the value of [allowed_ip_addresses][model::UpdateUserSettingsRequest::allowed_ip_addresses].
        pub fn set_allowed_ip_addresses<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.allowed_ip_addresses = Some(v.into());
            self
        }

        /// Sets the value of [self_manage][model::UpdateUserSettingsRequest::self_manage].
        pub fn set_self_manage<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.self_manage = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl ibm_cloud_sdk_core::options::internal::RequestBuilder for UpdateUserSettings {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
