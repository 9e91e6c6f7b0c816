//! Health

use crate::models::HealthCheck;
use crate::operation::Operation;
use crate::{Client, RequestError};
use tokio_util::sync::CancellationToken;

impl Client {
    /// Get the health of an instance. No credentials are sent.
    ///
    /// An unhealthy server answers `503 Service Unavailable`, which is
    /// reported as [`RequestError::Http`].
    pub async fn health(&self) -> Result<HealthCheck, RequestError> {
        self.execute(Operation::liveness("/health")).await
    }

    /// Like [`Self::health`], giving up with [`RequestError::Cancelled`]
    /// once `token` is cancelled.
    pub async fn health_with_cancellation(
        &self,
        token: &CancellationToken,
    ) -> Result<HealthCheck, RequestError> {
        self.execute_cancellable(Operation::liveness("/health"), token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health::Status;
    use mockito::{Matcher, Server};

    type Error = Box<dyn std::error::Error>;
    type Result<T = (), E = Error> = std::result::Result<T, E>;

    #[tokio::test]
    async fn health() -> Result {
        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("GET", "/health")
            .match_header("Authorization", Matcher::Missing)
            .with_body(
                r#"{"name":"influxdb","message":"ready for queries and writes","status":"pass","checks":[],"version":"2.7.1","commit":"407fa622e9"}"#,
            )
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), "some-token");

        let health = client.health().await?;

        assert_eq!(health.status, Status::Pass);
        assert_eq!(health.version.as_deref(), Some("2.7.1"));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn unhealthy_server() {
        let mut mock_server = Server::new_async().await;
        let mock = mock_server
            .mock("GET", "/health")
            .with_status(503)
            .with_body(
                r#"{"name":"influxdb","status":"fail","checks":[{"name":"storage","status":"fail","message":"disk full"}]}"#,
            )
            .create_async()
            .await;

        let client = Client::new(mock_server.url(), "some-token");

        let err = client
            .health_with_cancellation(&CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RequestError::Http {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE
            }
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn cancelled_health_check() {
        let client = Client::new("http://127.0.0.1:1", "some-token");
        let token = CancellationToken::new();
        token.cancel();

        let err = client.health_with_cancellation(&token).await.unwrap_err();

        assert!(matches!(err, RequestError::Cancelled));
    }
}
