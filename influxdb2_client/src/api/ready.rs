//! Ready

use crate::models::Ready;
use crate::operation::Operation;
use crate::{Client, RequestError};
use tokio_util::sync::CancellationToken;

impl Client {
    /// Get the readiness of an instance at startup. No credentials are sent.
    pub async fn ready(&self) -> Result<Ready, RequestError> {
        self.execute(Operation::liveness("/ready")).await
    }

    /// Like [`Self::ready`], giving up with [`RequestError::Cancelled`] once
    /// `token` is cancelled.
    pub async fn ready_with_cancellation(
        &self,
        token: &CancellationToken,
    ) -> Result<Ready, RequestError> {
        self.execute_cancellable(Operation::liveness("/ready"), token)
            .await
    }
}
