//! Health

use serde::{Deserialize, Serialize};

/// Health of the service and, recursively, of its components.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the service or component
    pub name: String,
    /// Human readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Health of individual components
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<HealthCheck>,
    /// Overall status
    pub status: Status,
    /// Server version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Server commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Health status
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Healthy
    #[default]
    Pass,
    /// Unhealthy
    Fail,
}
