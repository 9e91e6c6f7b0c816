//! Permissions

use crate::models::Resource;
use serde::{Deserialize, Serialize};

/// One action granted on one resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// What the holder may do
    pub action: Action,
    /// What it may be done to
    pub resource: Resource,
}

impl Permission {
    /// Returns instance of Permission
    pub fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }

    /// Read access to `resource`.
    pub fn read(resource: Resource) -> Self {
        Self::new(Action::Read, resource)
    }

    /// Write access to `resource`.
    pub fn write(resource: Resource) -> Self {
        Self::new(Action::Write, resource)
    }
}

/// Permitted action
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Read access
    Read,
    /// Write access
    Write,
}
