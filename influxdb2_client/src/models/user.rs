//! Users

use crate::models::Links;
use serde::{Deserialize, Serialize};

/// User Schema
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// User ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User oauth token id
    #[serde(rename = "oauthID", skip_serializing_if = "Option::is_none")]
    pub oauth_id: Option<String>,
    /// User name
    pub name: String,
    /// If inactive the user is inactive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// User links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<UserLinks>,
}

impl User {
    /// Returns instance of user
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// If inactive the user is inactive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    /// User is active
    Active,
    /// User is inactive
    Inactive,
}

/// User links
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserLinks {
    /// User link to Self
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    /// Operation log of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
}

/// List of Users
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Users {
    /// List of user links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// List of users
    #[serde(default)]
    pub users: Vec<User>,
}

/// Request body replacing a user's password
#[derive(Clone, Serialize)]
pub struct PasswordResetBody {
    /// The new password
    pub password: String,
}

impl std::fmt::Debug for PasswordResetBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordResetBody")
            .field("password", &"[REDACTED]")
            .finish()
    }
}
