//! Members and owners of a resource

use crate::models::{Links, UserLinks, user};
use serde::{Deserialize, Serialize};

/// A user holding a role on a resource.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceMember {
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
    pub status: Option<user::Status>,
    /// User links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<UserLinks>,
    /// Role of the user on the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Owners share the member shape; only their role differs.
pub type ResourceOwner = ResourceMember;

/// Role on a resource
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May read the resource
    Member,
    /// May read and administer the resource
    Owner,
}

/// Members of a resource
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceMembers {
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Members
    #[serde(default)]
    pub users: Vec<ResourceMember>,
}

/// Owners of a resource
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceOwners {
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Owners
    #[serde(default)]
    pub users: Vec<ResourceOwner>,
}

/// Request body adding a user as member or owner of a resource
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResourceMemberRequestBody {
    /// ID of the user to add
    pub id: String,
    /// Name of the user to add
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
