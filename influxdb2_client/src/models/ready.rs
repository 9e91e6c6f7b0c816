//! Ready

use serde::{Deserialize, Serialize};

/// Whether the service has started and for how long it has been up.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ready {
    /// Readiness status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Start time, RFC3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    /// Uptime as a Go duration string, e.g. `14m45.911966424s`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<String>,
}

/// Readiness status
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Ready
    Ready,
}
