//! Buckets and their labels, members, owners and logs

use crate::models::{
    AddResourceMemberRequestBody, Bucket, Buckets, LabelMapping, LabelResponse, LabelsResponse,
    OperationLogs, PatchBucketRequest, PostBucketRequest, ResourceMember, ResourceMembers,
    ResourceOwner, ResourceOwners,
};
use crate::operation::Operation;
use crate::params::{require, require_items};
use crate::{Client, Pagination, RequestError};

impl Client {
    /// List one page of buckets, optionally filtered by bucket name or
    /// organization.
    pub async fn list_buckets(
        &self,
        pagination: Pagination,
        name: Option<&str>,
        org: Option<&str>,
        org_id: Option<&str>,
    ) -> Result<Buckets, RequestError> {
        let op = Operation::get("/buckets")
            .paginate(pagination)?
            .query_opt("name", name)
            .query_opt("org", org)
            .query_opt("orgID", org_id);
        self.execute(op).await
    }

    /// List the buckets of a source
    pub async fn list_buckets_in_source(&self, source_id: &str) -> Result<Buckets, RequestError> {
        require("sourceID", source_id)?;

        self.execute(Operation::get(format!("/sources/{source_id}/buckets")))
            .await
    }

    /// Create a bucket. The organization, a name and at least one retention
    /// rule are required.
    pub async fn create_bucket(&self, request: PostBucketRequest) -> Result<Bucket, RequestError> {
        require("orgID", &request.org_id)?;
        require("name", &request.name)?;
        require_items("retentionRules", &request.retention_rules)?;

        let op = Operation::post("/buckets").json(&request)?;
        self.execute(op).await
    }

    /// Retrieve a bucket by ID
    pub async fn find_bucket_by_id(&self, bucket_id: &str) -> Result<Bucket, RequestError> {
        require("bucketID", bucket_id)?;

        self.execute(Operation::get(format!("/buckets/{bucket_id}")))
            .await
    }

    /// Update a bucket. A name and at least one retention rule are required.
    pub async fn update_bucket(
        &self,
        bucket_id: &str,
        request: PatchBucketRequest,
    ) -> Result<Bucket, RequestError> {
        require("bucketID", bucket_id)?;
        require("name", &request.name)?;
        require_items("retentionRules", &request.retention_rules)?;

        let op = Operation::patch(format!("/buckets/{bucket_id}")).json(&request)?;
        self.execute(op).await
    }

    /// Delete a bucket
    pub async fn delete_bucket(&self, bucket_id: &str) -> Result<(), RequestError> {
        require("bucketID", bucket_id)?;

        self.execute_no_content(Operation::delete(format!("/buckets/{bucket_id}")))
            .await
    }

    /// List the labels attached to a bucket
    pub async fn list_bucket_labels(&self, bucket_id: &str) -> Result<LabelsResponse, RequestError> {
        require("bucketID", bucket_id)?;

        self.execute(Operation::get(format!("/buckets/{bucket_id}/labels")))
            .await
    }

    /// Attach an existing label to a bucket
    pub async fn add_bucket_label(
        &self,
        bucket_id: &str,
        label_id: &str,
    ) -> Result<LabelResponse, RequestError> {
        require("bucketID", bucket_id)?;
        require("labelID", label_id)?;

        let op = Operation::post(format!("/buckets/{bucket_id}/labels"))
            .json(&LabelMapping::new(label_id))?;
        self.execute(op).await
    }

    /// Detach a label from a bucket
    pub async fn delete_bucket_label(
        &self,
        bucket_id: &str,
        label_id: &str,
    ) -> Result<(), RequestError> {
        require("bucketID", bucket_id)?;
        require("labelID", label_id)?;

        self.execute_no_content(Operation::delete(format!(
            "/buckets/{bucket_id}/labels/{label_id}"
        )))
        .await
    }

    /// List the members of a bucket
    pub async fn list_bucket_members(
        &self,
        bucket_id: &str,
    ) -> Result<ResourceMembers, RequestError> {
        require("bucketID", bucket_id)?;

        self.execute(Operation::get(format!("/buckets/{bucket_id}/members")))
            .await
    }

    /// Add a user as member of a bucket
    pub async fn add_bucket_member(
        &self,
        bucket_id: &str,
        user_id: &str,
        name: Option<String>,
    ) -> Result<ResourceMember, RequestError> {
        self.add_to_bucket("members", bucket_id, user_id, name)
            .await
    }

    /// Remove a member from a bucket
    pub async fn remove_bucket_member(
        &self,
        bucket_id: &str,
        user_id: &str,
    ) -> Result<(), RequestError> {
        self.remove_from_bucket("members", bucket_id, user_id)
            .await
    }

    /// List the owners of a bucket
    pub async fn list_bucket_owners(&self, bucket_id: &str) -> Result<ResourceOwners, RequestError> {
        require("bucketID", bucket_id)?;

        self.execute(Operation::get(format!("/buckets/{bucket_id}/owners")))
            .await
    }

    /// Add a user as owner of a bucket
    pub async fn add_bucket_owner(
        &self,
        bucket_id: &str,
        user_id: &str,
        name: Option<String>,
    ) -> Result<ResourceOwner, RequestError> {
        self.add_to_bucket("owners", bucket_id, user_id, name).await
    }

    /// Remove an owner from a bucket
    pub async fn remove_bucket_owner(
        &self,
        bucket_id: &str,
        user_id: &str,
    ) -> Result<(), RequestError> {
        self.remove_from_bucket("owners", bucket_id, user_id).await
    }

    /// List one page of the operation log of a bucket
    pub async fn list_bucket_logs(
        &self,
        bucket_id: &str,
        pagination: Pagination,
    ) -> Result<OperationLogs, RequestError> {
        require("bucketID", bucket_id)?;

        let op = Operation::get(format!("/buckets/{bucket_id}/logs")).paginate(pagination)?;
        self.execute(op).await
    }

    // `role` is either "members" or "owners"; both answer with a ResourceMember.
    async fn add_to_bucket(
        &self,
        role: &str,
        bucket_id: &str,
        user_id: &str,
        name: Option<String>,
    ) -> Result<ResourceMember, RequestError> {
        require("bucketID", bucket_id)?;
        require("userID", user_id)?;

        let body = AddResourceMemberRequestBody {
            id: user_id.to_string(),
            name,
        };
        let op = Operation::post(format!("/buckets/{bucket_id}/{role}")).json(&body)?;
        self.execute(op).await
    }

    async fn remove_from_bucket(
        &self,
        role: &str,
        bucket_id: &str,
        user_id: &str,
    ) -> Result<(), RequestError> {
        require("bucketID", bucket_id)?;
        require("userID", user_id)?;

        self.execute_no_content(Operation::delete(format!(
            "/buckets/{bucket_id}/{role}/{user_id}"
        )))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RetentionRule, member::Role};
    use mockito::{Matcher, Server};

    type Error = Box<dyn std::error::Error>;
    type Result<T = (), E = Error> = std::result::Result<T, E>;

    const BUCKET: &str = r#"{
        "id": "b1",
        "type": "user",
        "name": "telemetry",
        "orgID": "o1",
        "retentionRules": [{"type": "expire", "everySeconds": 3600}]
    }"#;

    const MEMBER: &str = r#"{"id":"u1","name":"alice","status":"active","role":"member"}"#;

    #[tokio::test]
    async fn list_buckets() -> Result {
        let token = "some-token";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("GET", "/api/v2/buckets")
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "50".into()),
                Matcher::UrlEncoded("offset".into(), "10".into()),
                Matcher::UrlEncoded("org".into(), "my-org".into()),
            ]))
            .with_body(format!(
                r#"{{"links":{{"self":"/api/v2/buckets","next":"/api/v2/buckets?offset=60"}},"buckets":[{BUCKET}]}}"#
            ))
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let buckets = client
            .list_buckets(Pagination::new(50, 10), None, Some("my-org"), None)
            .await?;

        assert_eq!(buckets.buckets[0].name, "telemetry");
        assert!(!buckets.links.unwrap().is_last_page());
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_in_source() -> Result {
        let token = "some-token";
        let source_id = "s1";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("GET", format!("/api/v2/sources/{source_id}/buckets").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_body(format!(r#"{{"buckets":[{BUCKET}]}}"#))
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let buckets = client.list_buckets_in_source(source_id).await?;

        assert_eq!(buckets.buckets.len(), 1);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket() -> Result {
        let token = "some-token";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("POST", "/api/v2/buckets")
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_body(
                r#"{"orgID":"o1","name":"telemetry","retentionRules":[{"type":"expire","everySeconds":3600}]}"#,
            )
            .with_status(201)
            .with_body(BUCKET)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let bucket = client
            .create_bucket(PostBucketRequest::new(
                "o1",
                "telemetry",
                vec![RetentionRule::new(3600)],
            ))
            .await?;

        assert_eq!(bucket.id.as_deref(), Some("b1"));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn find_bucket_by_id() -> Result {
        let token = "some-token";
        let bucket_id = "b1";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("GET", format!("/api/v2/buckets/{bucket_id}").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_body(BUCKET)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let bucket = client.find_bucket_by_id(bucket_id).await?;

        assert_eq!(bucket.retention_rules, vec![RetentionRule::new(3600)]);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn update_bucket() -> Result {
        let token = "some-token";
        let bucket_id = "b1";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("PATCH", format!("/api/v2/buckets/{bucket_id}").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_body(
                r#"{"name":"telemetry","description":"edge","retentionRules":[{"type":"expire","everySeconds":7200}]}"#,
            )
            .with_body(BUCKET)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let mut request = PatchBucketRequest::new("telemetry", vec![RetentionRule::new(7200)]);
        request.description = Some("edge".to_string());
        client.update_bucket(bucket_id, request).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_bucket() -> Result {
        let token = "some-token";
        let bucket_id = "b1";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("DELETE", format!("/api/v2/buckets/{bucket_id}").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_status(204)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        client.delete_bucket(bucket_id).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn bucket_labels() -> Result {
        let token = "some-token";
        let bucket_id = "b1";
        let label_id = "l1";
        let label = r#"{"id":"l1","orgID":"o1","name":"prod","properties":{"color":"ffb3b3"}}"#;

        let mut mock_server = Server::new_async().await;
        let list = mock_server
            .mock("GET", format!("/api/v2/buckets/{bucket_id}/labels").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_body(format!(r#"{{"labels":[{label}]}}"#))
            .create_async()
            .await;
        let add = mock_server
            .mock("POST", format!("/api/v2/buckets/{bucket_id}/labels").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_body(format!(r#"{{"labelID":"{label_id}"}}"#).as_str())
            .with_status(201)
            .with_body(format!(r#"{{"label":{label}}}"#))
            .create_async()
            .await;
        let delete = mock_server
            .mock(
                "DELETE",
                format!("/api/v2/buckets/{bucket_id}/labels/{label_id}").as_str(),
            )
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_status(204)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let labels = client.list_bucket_labels(bucket_id).await?;
        assert_eq!(labels.labels[0].color(), Some("ffb3b3"));

        let added = client.add_bucket_label(bucket_id, label_id).await?;
        assert_eq!(added.label.unwrap().id.as_deref(), Some(label_id));

        client.delete_bucket_label(bucket_id, label_id).await?;

        list.assert_async().await;
        add.assert_async().await;
        delete.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn bucket_members() -> Result {
        let token = "some-token";
        let bucket_id = "b1";
        let user_id = "u1";

        let mut mock_server = Server::new_async().await;
        let list = mock_server
            .mock("GET", format!("/api/v2/buckets/{bucket_id}/members").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_body(format!(r#"{{"users":[{MEMBER}]}}"#))
            .create_async()
            .await;
        let add = mock_server
            .mock("POST", format!("/api/v2/buckets/{bucket_id}/members").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_body(format!(r#"{{"id":"{user_id}"}}"#).as_str())
            .with_status(201)
            .with_body(MEMBER)
            .create_async()
            .await;
        let remove = mock_server
            .mock(
                "DELETE",
                format!("/api/v2/buckets/{bucket_id}/members/{user_id}").as_str(),
            )
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_status(204)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let members = client.list_bucket_members(bucket_id).await?;
        assert_eq!(members.users[0].role, Some(Role::Member));

        let added = client.add_bucket_member(bucket_id, user_id, None).await?;
        assert_eq!(added.name, "alice");

        client.remove_bucket_member(bucket_id, user_id).await?;

        list.assert_async().await;
        add.assert_async().await;
        remove.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn bucket_owners() -> Result {
        let token = "some-token";
        let bucket_id = "b1";
        let user_id = "u1";
        let owner = MEMBER.replace("member", "owner");

        let mut mock_server = Server::new_async().await;
        let list = mock_server
            .mock("GET", format!("/api/v2/buckets/{bucket_id}/owners").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_body(format!(r#"{{"users":[{owner}]}}"#))
            .create_async()
            .await;
        let add = mock_server
            .mock("POST", format!("/api/v2/buckets/{bucket_id}/owners").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_body(format!(r#"{{"id":"{user_id}","name":"alice"}}"#).as_str())
            .with_status(201)
            .with_body(&owner)
            .create_async()
            .await;
        let remove = mock_server
            .mock(
                "DELETE",
                format!("/api/v2/buckets/{bucket_id}/owners/{user_id}").as_str(),
            )
            .match_header("Authorization", format!("Token {token}").as_str())
            .with_status(204)
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let owners = client.list_bucket_owners(bucket_id).await?;
        assert_eq!(owners.users[0].role, Some(Role::Owner));

        let added = client
            .add_bucket_owner(bucket_id, user_id, Some("alice".to_string()))
            .await?;
        assert_eq!(added.role, Some(Role::Owner));

        client.remove_bucket_owner(bucket_id, user_id).await?;

        list.assert_async().await;
        add.assert_async().await;
        remove.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn list_bucket_logs() -> Result {
        let token = "some-token";
        let bucket_id = "b1";

        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("GET", format!("/api/v2/buckets/{bucket_id}/logs").as_str())
            .match_header("Authorization", format!("Token {token}").as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "20".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_body(
                r#"{"logs":[{"description":"Bucket Created","time":"2021-01-01T00:00:00Z","userID":"u1","links":{"user":"/api/v2/users/u1"}}],"links":{"self":"/api/v2/buckets/b1/logs"}}"#,
            )
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), token);

        let logs = client
            .list_bucket_logs(bucket_id, Pagination::default())
            .await?;

        assert_eq!(logs.logs[0].description.as_deref(), Some("Bucket Created"));
        assert_eq!(logs.logs[0].user_id.as_deref(), Some("u1"));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_checks_every_required_field() {
        let client = Client::new("http://127.0.0.1:1", "some-token");
        let rules = vec![RetentionRule::new(0)];

        let cases = [
            (PostBucketRequest::new("", "telemetry", rules.clone()), "orgID"),
            (PostBucketRequest::new("o1", "", rules.clone()), "name"),
            (PostBucketRequest::new("o1", "telemetry", vec![]), "retentionRules"),
        ];

        for (request, field) in cases {
            let err = client.create_bucket(request).await.unwrap_err();
            assert!(
                matches!(err, RequestError::InvalidArgument { name, .. } if name == field),
                "{err}"
            );
        }
    }

    #[tokio::test]
    async fn update_bucket_checks_every_required_field() {
        let client = Client::new("http://127.0.0.1:1", "some-token");
        let rules = vec![RetentionRule::new(0)];

        let cases = [
            ("", PatchBucketRequest::new("telemetry", rules.clone()), "bucketID"),
            ("b1", PatchBucketRequest::new("", rules.clone()), "name"),
            ("b1", PatchBucketRequest::new("telemetry", vec![]), "retentionRules"),
        ];

        for (bucket_id, request, field) in cases {
            let err = client.update_bucket(bucket_id, request).await.unwrap_err();
            assert!(
                matches!(err, RequestError::InvalidArgument { name, .. } if name == field),
                "{err}"
            );
        }
    }

    #[tokio::test]
    async fn sub_resources_require_both_ids() {
        let client = Client::new("http://127.0.0.1:1", "some-token");

        let errors = [
            (client.add_bucket_label("b1", "").await.unwrap_err(), "labelID"),
            (client.delete_bucket_label("", "l1").await.unwrap_err(), "bucketID"),
            (client.add_bucket_member("b1", "", None).await.unwrap_err(), "userID"),
            (client.remove_bucket_member("", "u1").await.unwrap_err(), "bucketID"),
            (client.add_bucket_owner("", "u1", None).await.unwrap_err(), "bucketID"),
            (client.remove_bucket_owner("b1", "").await.unwrap_err(), "userID"),
        ];

        for (err, field) in errors {
            assert!(
                matches!(err, RequestError::InvalidArgument { name, .. } if name == field),
                "{err}"
            );
        }
    }
}
