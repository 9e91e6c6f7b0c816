//! Dashboards

use crate::models::Label;
use serde::{Deserialize, Serialize};

/// A visualization container made of cells.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dashboard {
    /// Dashboard ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ID of the owning organization
    #[serde(rename = "orgID")]
    pub org_id: String,
    /// User-facing name of the dashboard
    pub name: String,
    /// User-facing description of the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Links to the dashboard's sub-resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<DashboardLinks>,
    /// Timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<DashboardMeta>,
    /// Cells laid out on the dashboard
    #[serde(default)]
    pub cells: Vec<Cell>,
    /// Labels attached to the dashboard
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Links of a dashboard
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardLinks {
    /// The dashboard itself
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    /// Cells of the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<String>,
    /// Owners of the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,
    /// Members of the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<String>,
    /// Operation log of the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
    /// Labels attached to the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// Owning organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
}

/// Dashboard timestamps
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A positioned view on a dashboard
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<CellLinks>,
    /// Horizontal position
    #[serde(default)]
    pub x: i32,
    /// Vertical position
    #[serde(default)]
    pub y: i32,
    /// Width
    #[serde(default)]
    pub w: i32,
    /// Height
    #[serde(default)]
    pub h: i32,
    /// The reference to a view from the views API.
    #[serde(rename = "viewID", skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
}

/// Links of a dashboard cell
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellLinks {
    /// The cell itself
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    /// The view shown in the cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

/// Request body creating a dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDashboardRequest {
    /// ID of the owning organization
    #[serde(rename = "orgID")]
    pub org_id: String,
    /// User-facing name of the dashboard
    pub name: String,
    /// User-facing description of the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
