//! Dashboards

use crate::models::{CreateDashboardRequest, Dashboard};
use crate::operation::Operation;
use crate::params::require;
use crate::{Client, RequestError};

impl Client {
    /// Create an empty dashboard in an organization
    pub async fn create_dashboard(
        &self,
        org_id: &str,
        name: &str,
        description: Option<String>,
    ) -> Result<Dashboard, RequestError> {
        require("orgID", org_id)?;
        require("name", name)?;

        let body = CreateDashboardRequest {
            org_id: org_id.into(),
            name: name.into(),
            description,
        };
        let op = Operation::post("/dashboards").json(&body)?;
        self.execute(op).await
    }
}
