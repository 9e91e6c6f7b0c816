//! Labels

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tag that can be attached to buckets and dashboards.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Label {
    /// Label ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Org ID
    #[serde(rename = "orgID", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Label name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Key/Value pairs associated with this label, usually `color` and
    /// `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, String>>,
}

impl Label {
    /// Returns instance of Label
    pub fn new() -> Self {
        Self::default()
    }

    /// The `color` property, if set.
    pub fn color(&self) -> Option<&str> {
        self.property("color")
    }

    /// The `description` property, if set.
    pub fn description(&self) -> Option<&str> {
        self.property("description")
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key).map(String::as_str)
    }
}

/// Labels attached to a resource
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelsResponse {
    /// Labels
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<crate::models::Links>,
}

/// A single label
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelResponse {
    /// The label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<crate::models::Links>,
}

/// Request body attaching an existing label to a resource
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMapping {
    /// ID of the label to attach
    #[serde(rename = "labelID")]
    pub label_id: String,
}

impl LabelMapping {
    /// Returns instance of LabelMapping
    pub fn new(label_id: impl Into<String>) -> Self {
        Self {
            label_id: label_id.into(),
        }
    }
}
