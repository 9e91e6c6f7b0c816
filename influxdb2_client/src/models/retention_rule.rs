//! Retention rules

use serde::{Deserialize, Serialize};

/// How long a bucket keeps its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionRule {
    /// Rule kind
    #[serde(rename = "type")]
    pub r#type: Type,
    /// Duration in seconds for how long data will be kept in the database.
    /// 0 means infinite.
    pub every_seconds: i64,
    /// Shard duration measured in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_group_duration_seconds: Option<i64>,
}

impl RetentionRule {
    /// Expire data older than `every_seconds`.
    pub fn new(every_seconds: i64) -> Self {
        Self {
            r#type: Type::Expire,
            every_seconds,
            shard_group_duration_seconds: None,
        }
    }
}

/// Rule kind
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Type {
    /// Data older than the rule's duration is deleted
    Expire,
}
