//! Authorizations

use crate::models::{
    Authorization, AuthorizationPostRequest, AuthorizationUpdateRequest, Authorizations,
    authorization::Status,
};
use crate::operation::Operation;
use crate::params::{require, require_items};
use crate::{Client, RequestError};

impl Client {
    /// List authorizations, optionally filtered by organization or user.
    pub async fn list_authorizations(
        &self,
        org: Option<&str>,
        org_id: Option<&str>,
        user: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Authorizations, RequestError> {
        let op = Operation::get("/authorizations")
            .query_opt("org", org)
            .query_opt("orgID", org_id)
            .query_opt("user", user)
            .query_opt("userID", user_id);
        self.execute(op).await
    }

    /// Create an authorization. The organization and at least one
    /// permission are required.
    pub async fn create_authorization(
        &self,
        request: AuthorizationPostRequest,
    ) -> Result<Authorization, RequestError> {
        require("orgID", &request.org_id)?;
        require_items("permissions", &request.permissions)?;

        let op = Operation::post("/authorizations").json(&request)?;
        self.execute(op).await
    }

    /// Retrieve an authorization by ID
    pub async fn find_authorization_by_id(
        &self,
        auth_id: &str,
    ) -> Result<Authorization, RequestError> {
        require("authID", auth_id)?;

        self.execute(Operation::get(format!("/authorizations/{auth_id}")))
            .await
    }

    /// Activate or deactivate an authorization, optionally replacing its
    /// description.
    pub async fn update_authorization_status(
        &self,
        auth_id: &str,
        status: Status,
        description: Option<String>,
    ) -> Result<Authorization, RequestError> {
        require("authID", auth_id)?;

        let body = AuthorizationUpdateRequest {
            status: Some(status),
            description,
        };
        let op = Operation::patch(format!("/authorizations/{auth_id}")).json(&body)?;
        self.execute(op).await
    }

    /// Delete an authorization
    pub async fn delete_authorization(&self, auth_id: &str) -> Result<(), RequestError> {
        require("authID", auth_id)?;

        self.execute_no_content(Operation::delete(format!("/authorizations/{auth_id}")))
            .await
    }
}
