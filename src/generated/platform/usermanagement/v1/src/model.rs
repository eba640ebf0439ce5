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

/// The profile of a user in an account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UserProfile {
    /// An alphanumeric value identifying the user profile.
    pub id: Option<String>,

    /// An alphanumeric value identifying the user's IAM ID.
    pub iam_id: Option<String>,

    /// The realm of the user. The value is either `IBMid` or `SL`.
    pub realm: Option<String>,

    /// The user ID used for login.
    pub user_id: Option<String>,

    pub firstname: Option<String>,

    pub lastname: Option<String>,

    /// The state of the user, e.g. `PROCESSING`, `PENDING`, `ACTIVE`,
    /// `DISABLED_CLASSIC_INFRASTRUCTURE`, or `VPN_ONLY`.
    pub state: Option<String>,

    pub email: Option<String>,

    pub phonenumber: Option<String>,

    pub altphonenumber: Option<String>,

    /// A link to a photo of the user.
    pub photo: Option<String>,

    /// An alphanumeric value identifying the account ID.
    pub account_id: Option<String>,

    /// The timestamp for when the user was added to the account.
    pub added_on: Option<String>,
}

impl UserProfile {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [iam_id][UserProfile::iam_id].
    pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
        self.iam_id = Some(v.into());
        self
    }

    /// Sets the value of [user_id][UserProfile::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets the value of [state][UserProfile::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [email][UserProfile::email].
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the value of [account_id][UserProfile::account_id].
    pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }
}

/// A page of the users in an account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UserList {
    /// The number of users returned.
    pub total_results: i64,

    /// A limit to the number of users returned in a page.
    pub limit: i64,

    /// The first URL of the get users API.
    pub first_url: Option<String>,

    /// The next URL of the get users API. Not set on the last page.
    pub next_url: Option<String>,

    /// A list of users in the account.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<UserProfile>,
}

impl UserList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_results][UserList::total_results].
    pub fn set_total_results<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_results = v.into();
        self
    }

    /// Sets the value of [next_url][UserList::next_url].
    pub fn set_next_url<T: Into<String>>(mut self, v: T) -> Self {
        self.next_url = Some(v.into());
        self
    }

    /// Sets the value of [resources][UserList::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<UserProfile>,
    {
        self.resources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// The `_start` token for the next page, extracted from
    /// [next_url][UserList::next_url].
    pub fn next_start(&self) -> Option<String> {
        let next = self.next_url.as_deref()?;
        // The service may return a relative URL.
        let base = url::Url::parse(crate::DEFAULT_SERVICE_URL).ok()?;
        let next = base.join(next).ok()?;
        next.query_pairs()
            .find(|(k, _)| k == "_start")
            .map(|(_, v)| v.into_owned())
    }
}

/// A user that has been invited to join an account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InvitedUser {
    pub email: Option<String>,

    /// The id associated with the invited user.
    pub id: Option<String>,

    /// The state of the invitation for the user.
    pub state: Option<String>,
}

/// The response of the `invite_users` operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InvitedUserList {
    /// The list of users that have been invited to join the account.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<InvitedUser>,
}

/// The settings of a user.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UserSettings {
    /// The console UI language.
    pub language: Option<String>,

    /// The language for email and phone notifications.
    pub notification_language: Option<String>,

    /// A comma-separated list of IP addresses.
    pub allowed_ip_addresses: Option<String>,

    /// Whether user managed login is enabled.
    pub self_manage: Option<bool>,
}

impl UserSettings {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [language][UserSettings::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Sets the value of [allowed_ip_addresses][UserSettings::allowed_ip_addresses].
    pub fn set_allowed_ip_addresses<T: Into<String>>(mut self, v: T) -> Self {
        self.allowed_ip_addresses = Some(v.into());
        self
    }

    /// Sets the value of [self_manage][UserSettings::self_manage].
    pub fn set_self_manage<T: Into<bool>>(mut self, v: T) -> Self {
        self.self_manage = Some(v.into());
        self
    }
}

/// A user to invite.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InviteUser {
    pub email: Option<String>,

    /// The account role of the user to be invited.
    pub account_role: Option<String>,
}

impl InviteUser {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [email][InviteUser::email].
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the value of [account_role][InviteUser::account_role].
    pub fn set_account_role<T: Into<String>>(mut self, v: T) -> Self {
        self.account_role = Some(v.into());
        self
    }
}

/// An IAM policy assigned to the invited users.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InviteUserIamPolicy {
    /// The policy type, either `access` or `authorization`.
    #[serde(rename = "type")]
    pub r#type: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

impl InviteUserIamPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of the policy `type`.
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [roles][InviteUserIamPolicy::roles].
    pub fn set_roles<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Role>,
    {
        self.roles = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [resources][InviteUserIamPolicy::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Resource>,
    {
        self.resources = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An IAM role.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Role {
    /// An alphanumeric value identifying the origin.
    pub role_id: Option<String>,
}

impl Role {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [role_id][Role::role_id].
    pub fn set_role_id<T: Into<String>>(mut self, v: T) -> Self {
        self.role_id = Some(v.into());
        self
    }
}

/// The resources targeted by a policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Resource {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl Resource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [attributes][Resource::attributes].
    pub fn set_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Attribute>,
    {
        self.attributes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An IAM attribute.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Attribute {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl Attribute {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Attribute::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [value][Attribute::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// The request for [list_users][crate::client::UserManagement::list_users].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUsersRequest {
    /// The account ID. Required.
    pub account_id: String,

    /// The number of results to be returned.
    pub limit: Option<i64>,

    /// Include the language, allowed IP addresses, and authentication settings
    /// of each user.
    pub include_settings: Option<bool>,

    /// Filter the results, e.g. `state:INVALID,email:mail.test.ibm.com`.
    pub search: Option<String>,

    /// The token for the page of results to be returned.
    pub start: Option<String>,

    /// Filter users based on their user ID.
    pub user_id: Option<String>,
}

/// The request for [invite_users][crate::client::UserManagement::invite_users].
///
/// All the fields except the account ID are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct InviteUsersRequest {
    /// The account ID. Required.
    #[serde(skip)]
    pub account_id: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<InviteUser>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub iam_policy: Vec<InviteUserIamPolicy>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_groups: Vec<String>,
}

/// The request for [get_user_profile][crate::client::UserManagement::get_user_profile].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUserProfileRequest {
    /// The account ID. Required.
    pub account_id: String,

    /// The user's IAM ID. Required.
    pub iam_id: String,

    /// Include activity information of the user, such as the last
    /// authentication timestamp.
    pub include_activity: Option<String>,
}

/// The request for [update_user_profile][crate::client::UserManagement::update_user_profile].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateUserProfileRequest {
    /// The account ID. Required.
    #[serde(skip)]
    pub account_id: String,

    /// The user's IAM ID. Required.
    #[serde(skip)]
    pub iam_id: String,

    /// Sent as a query parameter.
    #[serialize_always]
    #[serde(skip)]
    pub include_activity: Option<String>,

    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub state: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub altphonenumber: Option<String>,
    pub photo: Option<String>,
}

/// The request for [remove_user][crate::client::UserManagement::remove_user].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveUserRequest {
    /// The account ID. Required.
    pub account_id: String,

    /// The user's IAM ID. Required.
    pub iam_id: String,

    pub include_activity: Option<String>,
}

/// The request for [get_user_settings][crate::client::UserManagement::get_user_settings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUserSettingsRequest {
    /// The account ID. Required.
    pub account_id: String,

    /// The user's IAM ID. Required.
    pub iam_id: String,
}

/// The request for [update_user_settings][crate::client::UserManagement::update_user_settings].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateUserSettingsRequest {
    /// The account ID. Required.
    #[serde(skip)]
    pub account_id: String,

    /// The user's IAM ID. Required.
    #[serde(skip)]
    pub iam_id: String,

    pub language: Option<String>,
    pub notification_language: Option<String>,
    pub allowed_ip_addresses: Option<String>,
    pub self_manage: Option<bool>,
}

/// The request for [accept][crate::client::UserManagement::accept].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct AcceptRequest {
    /// The account ID. Without it the service uses the account of the
    /// most recent invitation.
    pub account_id: Option<String>,
}
