//! Authorizations

use crate::models::{Links, Permission};
use serde::{Deserialize, Serialize};

/// An API token and the permissions it grants.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    /// If inactive the token is inactive and requests using the token will be
    /// rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// A description of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// ID of org that authorization is scoped to.
    #[serde(rename = "orgID", default)]
    pub org_id: String,
    /// List of permissions for an auth. An auth must have at least one
    /// Permission.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Authorization ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Passed via the Authorization Header and Token Authentication type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// ID of user that created and owns the token.
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Name of user that created and owns the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Name of the org token is scoped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<AuthorizationLinks>,
}

/// If inactive the token is inactive and requests using the token will be
/// rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Token is usable
    Active,
    /// Token is rejected
    Inactive,
}

/// Links of an authorization
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorizationLinks {
    /// URI of resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    /// URI of resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// List of authorizations
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Authorizations {
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Authorizations
    #[serde(default)]
    pub authorizations: Vec<Authorization>,
}

/// Request body creating an authorization
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationPostRequest {
    /// A description of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ID of org that authorization is scoped to.
    #[serde(rename = "orgID")]
    pub org_id: String,
    /// Permissions to grant, at least one.
    pub permissions: Vec<Permission>,
    /// Initial status, `active` when left out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl AuthorizationPostRequest {
    /// Returns instance of AuthorizationPostRequest
    pub fn new(org_id: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Self {
            description: None,
            org_id: org_id.into(),
            permissions,
            status: None,
        }
    }
}

/// Request body changing the status or description of an authorization
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorizationUpdateRequest {
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
