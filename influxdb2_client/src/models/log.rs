//! Operation logs

use crate::models::Links;
use serde::{Deserialize, Serialize};

/// One audit record of a change made to a resource.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationLog {
    /// A description of the event that occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Time event occurred, RFC3339Nano.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// ID of the user who operated the event.
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<OperationLogLinks>,
}

/// Links of an operation log entry
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationLogLinks {
    /// The user who operated the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// One page of operation logs
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationLogs {
    /// Log entries
    #[serde(default)]
    pub logs: Vec<OperationLog>,
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
