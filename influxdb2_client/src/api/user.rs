//! Users

use crate::models::{OperationLogs, PasswordResetBody, User, Users, user::Status};
use crate::operation::Operation;
use crate::params::require;
use crate::{Client, Pagination, RequestError};

impl Client {
    /// List all users
    pub async fn list_users(&self) -> Result<Users, RequestError> {
        self.execute(Operation::get("/users")).await
    }

    /// Create a user
    pub async fn create_user(
        &self,
        name: &str,
        oauth_id: Option<String>,
        status: Option<Status>,
    ) -> Result<User, RequestError> {
        require("name", name)?;

        let body = User {
            oauth_id,
            status,
            ..User::new(name)
        };
        let op = Operation::post("/users").json(&body)?;
        self.execute(op).await
    }

    /// Retrieve a user by ID
    pub async fn find_user_by_id(&self, user_id: &str) -> Result<User, RequestError> {
        require("userID", user_id)?;

        self.execute(Operation::get(format!("/users/{user_id}")))
            .await
    }

    /// Update a user. The password is changed through
    /// [`Self::update_user_password`] instead.
    pub async fn update_user(
        &self,
        user_id: &str,
        name: &str,
        oauth_id: Option<String>,
        status: Option<Status>,
    ) -> Result<User, RequestError> {
        require("userID", user_id)?;
        require("name", name)?;

        let body = User {
            oauth_id,
            status,
            ..User::new(name)
        };
        let op = Operation::patch(format!("/users/{user_id}")).json(&body)?;
        self.execute(op).await
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: &str) -> Result<(), RequestError> {
        require("userID", user_id)?;

        self.execute_no_content(Operation::delete(format!("/users/{user_id}")))
            .await
    }

    /// Replace the password of a user
    pub async fn update_user_password(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<(), RequestError> {
        require("userID", user_id)?;
        require("password", password)?;

        let body = PasswordResetBody {
            password: password.into(),
        };
        let op = Operation::put(format!("/users/{user_id}/password")).json(&body)?;
        self.execute_no_content(op).await
    }

    /// List one page of the operation log of a user
    pub async fn list_user_logs(
        &self,
        user_id: &str,
        pagination: Pagination,
    ) -> Result<OperationLogs, RequestError> {
        require("userID", user_id)?;

        let op = Operation::get(format!("/users/{user_id}/logs")).paginate(pagination)?;
        self.execute(op).await
    }
}
