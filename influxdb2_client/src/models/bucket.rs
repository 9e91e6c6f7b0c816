//! Buckets

use crate::models::{Label, Links, RetentionRule};
use serde::{Deserialize, Serialize};

/// A named container for time series data with a retention policy.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Links to the bucket's sub-resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BucketLinks>,
    /// Bucket ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether the bucket was created by a user or by the system
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    /// Bucket name
    pub name: String,
    /// Bucket description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ID of the owning organization
    #[serde(rename = "orgID", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Retention policy name, for 1.x compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Rules to expire or retain data. No rules means data never expires.
    #[serde(default)]
    pub retention_rules: Vec<RetentionRule>,
    /// Labels attached to the bucket
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

/// Bucket Type
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Created by a user
    User,
    /// Created by the server, such as `_monitoring` or `_tasks`
    System,
}

/// Links of a bucket
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketLinks {
    /// Labels attached to the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// Operation log of the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
    /// Members of the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<String>,
    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Owners of the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,
    /// The bucket itself
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    /// Write endpoint for the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write: Option<String>,
}

/// List of buckets
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Buckets {
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Buckets
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// Request body creating a bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBucketRequest {
    /// Organization ID
    #[serde(rename = "orgID")]
    pub org_id: String,
    /// Bucket name
    pub name: String,
    /// Bucket description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Retention policy name, for 1.x compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp: Option<String>,
    /// Retention rules, at least one
    pub retention_rules: Vec<RetentionRule>,
}

impl PostBucketRequest {
    /// Returns instance of PostBucketRequest
    pub fn new(
        org_id: impl Into<String>,
        name: impl Into<String>,
        retention_rules: Vec<RetentionRule>,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            name: name.into(),
            description: None,
            rp: None,
            retention_rules,
        }
    }
}

/// Request body updating a bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchBucketRequest {
    /// New bucket name
    pub name: String,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New retention rules, at least one
    pub retention_rules: Vec<RetentionRule>,
    /// Labels to set on the bucket
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    /// Organization ID
    #[serde(rename = "orgID", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Retention policy name, for 1.x compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp: Option<String>,
}

impl PatchBucketRequest {
    /// Returns instance of PatchBucketRequest
    pub fn new(name: impl Into<String>, retention_rules: Vec<RetentionRule>) -> Self {
        Self {
            name: name.into(),
            description: None,
            retention_rules,
            labels: vec![],
            org_id: None,
            rp: None,
        }
    }
}
