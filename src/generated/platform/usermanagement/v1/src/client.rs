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

use std::sync::Arc;

/// Implements a client for the User Management API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_user_management_v1::client::UserManagement;
/// let client = UserManagement::builder().build().await?;
/// let response = client
///     .get_user_profile()
///     .set_account_id("my-account-id")
///     .set_iam_id("IBMid-1234")
///     .send()
///     .await?;
/// println!("{:?}", response.result());
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Manages the users of an IBM Cloud account.
///
/// # Configuration
///
/// To configure `UserManagement` use the `with_*` methods in the type returned
/// by [builder()][UserManagement::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_service_url()]: by default this client uses the global default URL
///   (`https://user-management.cloud.ibm.com`). Applications using private
///   endpoints need to override this default.
/// * [with_authenticator()]: by default this client reads the authenticator
///   from the external configuration of the `user_management` service.
///
/// [with_service_url()]: super::builder::user_management::ClientBuilder::with_service_url
/// [with_authenticator()]: super::builder::user_management::ClientBuilder::with_authenticator
///
/// # Pooling and Cloning
///
/// `UserManagement` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `UserManagement` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct UserManagement {
    inner: Arc<dyn super::stub::dynamic::UserManagement>,
}

impl UserManagement {
    /// Returns a builder for [UserManagement].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_user_management_v1::client::UserManagement;
    /// let client = UserManagement::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::user_management::ClientBuilder {
        ibm_cloud_sdk_core::client_builder::internal::new_builder(
            super::builder::user_management::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::UserManagement + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: sdki::options::ClientConfig,
    ) -> ibm_cloud_sdk_core::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: sdki::options::ClientConfig,
    ) -> ibm_cloud_sdk_core::client_builder::Result<Arc<dyn super::stub::dynamic::UserManagement>>
    {
        if sdki::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: sdki::options::ClientConfig,
    ) -> ibm_cloud_sdk_core::client_builder::Result<impl super::stub::UserManagement> {
        super::transport::UserManagement::new(conf).await
    }

    async fn build_with_tracing(
        conf: sdki::options::ClientConfig,
    ) -> ibm_cloud_sdk_core::client_builder::Result<impl super::stub::UserManagement> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::UserManagement::new)
    }

    /// Returns a page of the users in an account.
    ///
    /// Use [by_page()][super::builder::user_management::ListUsers::by_page]
    /// to iterate over all the users.
    pub fn list_users(&self) -> super::builder::user_management::ListUsers {
        super::builder::user_management::ListUsers::new(self.inner.clone())
    }

    /// Invites users to the account.
    ///
    /// The service responds with `202 Accepted`, the invitations are
    /// processed asynchronously.
    pub fn invite_users(&self) -> super::builder::user_management::InviteUsers {
        super::builder::user_management::InviteUsers::new(self.inner.clone())
    }

    /// Returns the profile of a user.
    pub fn get_user_profile(&self) -> super::builder::user_management::GetUserProfile {
        super::builder::user_management::GetUserProfile::new(self.inner.clone())
    }

    /// Partially updates the profile of a user.
    pub fn update_user_profile(&self) -> super::builder::user_management::UpdateUserProfile {
        super::builder::user_management::UpdateUserProfile::new(self.inner.clone())
    }

    /// Removes a user from the account.
    pub fn remove_user(&self) -> super::builder::user_management::RemoveUser {
        super::builder::user_management::RemoveUser::new(self.inner.clone())
    }

    /// Accepts an invitation to join an account.
    ///
    /// Requires a user token for the invited user.
    pub fn accept(&self) -> super::builder::user_management::Accept {
        super::builder::user_management::Accept::new(self.inner.clone())
    }

    /// Returns the settings of a user.
    pub fn get_user_settings(&self) -> super::builder::user_management::GetUserSettings {
        super::builder::user_management::GetUserSettings::new(self.inner.clone())
    }

    /// Partially updates the settings of a user.
    pub fn update_user_settings(&self) -> super::builder::user_management::UpdateUserSettings {
        super::builder::user_management::UpdateUserSettings::new(self.inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::model;
    use ibm_cloud_sdk_core::options::{RequestOptions, RequestOptionsBuilder};
    use ibm_cloud_sdk_core::response::DetailedResponse;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        Stub {}
        impl crate::stub::UserManagement for Stub {
            async fn list_users(
                &self,
                req: model::ListUsersRequest,
                headers: http::HeaderMap,
                options: RequestOptions,
            ) -> Result<DetailedResponse<model::UserList>>;
            async fn remove_user(
                &self,
                req: model::RemoveUserRequest,
                headers: http::HeaderMap,
                options: RequestOptions,
            ) -> Result<DetailedResponse<()>>;
        }
    }

    #[tokio::test]
    async fn list_users() -> TestResult {
        let mut mock = MockStub::new();
        mock.expect_list_users()
            .withf(|req, headers, options| {
                req.account_id == "account-1"
                    && req.limit == Some(10)
                    && headers.get("x-test").is_some_and(|v| v == "value")
                    && *options.timeout() == Some(Duration::from_secs(5))
            })
            .times(1)
            .returning(|_, _, _| {
                let list = model::UserList::new()
                    .set_total_results(1)
                    .set_resources([model::UserProfile::new().set_iam_id("IBMid-1")]);
                Ok(DetailedResponse::from(list))
            });

        let client = UserManagement::from_stub(mock);
        let response = client
            .list_users()
            .set_account_id("account-1")
            .set_limit(10)
            .with_header("x-test", "value")
            .with_timeout(Duration::from_secs(5))
            .send()
            .await?;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.result().total_results, 1);
        assert_eq!(
            response.result().resources[0].iam_id.as_deref(),
            Some("IBMid-1")
        );
        Ok(())
    }

    #[tokio::test]
    async fn invalid_header() -> TestResult {
        let mut mock = MockStub::new();
        mock.expect_list_users().times(0);

        let client = UserManagement::from_stub(mock);
        let err = client
            .list_users()
            .set_account_id("account-1")
            .with_header("bad header", "value")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn pager() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockStub::new();
        mock.expect_list_users()
            .withf(|req, _, _| req.start.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                let list = model::UserList::new()
                    .set_next_url("/v2/accounts/account-1/users?_start=page-2")
                    .set_resources([model::UserProfile::new().set_iam_id("IBMid-1")]);
                Ok(DetailedResponse::from(list))
            });
        mock.expect_list_users()
            .withf(|req, _, _| req.start.as_deref() == Some("page-2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                let list = model::UserList::new()
                    .set_resources([model::UserProfile::new().set_iam_id("IBMid-2")]);
                Ok(DetailedResponse::from(list))
            });

        let client = UserManagement::from_stub(mock);
        let mut pager = client.list_users().set_account_id("account-1").by_page();
        let mut ids = Vec::new();
        while let Some(page) = pager.next().await {
            let page = page?;
            ids.extend(page.into_result().resources.into_iter().filter_map(|u| u.iam_id));
        }
        assert_eq!(ids, vec!["IBMid-1", "IBMid-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn pager_stops_on_error() -> TestResult {
        let mut mock = MockStub::new();
        mock.expect_list_users()
            .times(1)
            .returning(|_, _, _| Err(crate::Error::io("simulated")));

        let client = UserManagement::from_stub(mock);
        let mut pager = client.list_users().set_account_id("account-1").by_page();
        let err = pager.next().await.transpose().unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(pager.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn remove_user() -> TestResult {
        let mut mock = MockStub::new();
        mock.expect_remove_user()
            .withf(|req, _, _| req.account_id == "account-1" && req.iam_id == "IBMid-1")
            .times(1)
            .returning(|_, _, _| Ok(DetailedResponse::from_parts(204, http::HeaderMap::new(), (), None)));

        let client = UserManagement::from_stub(mock);
        let response = client
            .remove_user()
            .set_account_id("account-1")
            .set_iam_id("IBMid-1")
            .send()
            .await?;
        assert_eq!(response.status_code(), 204);
        Ok(())
    }
}
