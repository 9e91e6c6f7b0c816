//! The one request/response pipeline every API call goes through.

use crate::{
    CancelledSnafu, Client, DeserializingSnafu, HttpSnafu, Pagination, RequestError,
    ReqwestProcessingSnafu, SerializingSnafu,
};
use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use snafu::{ResultExt, ensure};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Declared on every request. The server reads the JSON bodies regardless.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Declared on the unauthenticated liveness checks.
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Prefix of every management endpoint.
const API_V2: &str = "/api/v2";

/// A single HTTP call: where it goes, what it carries and which status
/// counts as success.
#[derive(Debug)]
pub(crate) struct Operation {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
    expected: StatusCode,
    authenticated: bool,
}

impl Operation {
    fn new(method: Method, path: String, expected: StatusCode) -> Self {
        Self {
            method,
            path,
            query: vec![],
            body: None,
            expected,
            authenticated: true,
        }
    }

    /// `GET {API_V2}{path}`, expecting `200 OK`.
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, format!("{API_V2}{}", path.into()), StatusCode::OK)
    }

    /// `POST {API_V2}{path}`, expecting `201 Created`.
    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(
            Method::POST,
            format!("{API_V2}{}", path.into()),
            StatusCode::CREATED,
        )
    }

    /// `PATCH {API_V2}{path}`, expecting `200 OK`.
    pub(crate) fn patch(path: impl Into<String>) -> Self {
        Self::new(
            Method::PATCH,
            format!("{API_V2}{}", path.into()),
            StatusCode::OK,
        )
    }

    /// `PUT {API_V2}{path}`, expecting `204 No Content`.
    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(
            Method::PUT,
            format!("{API_V2}{}", path.into()),
            StatusCode::NO_CONTENT,
        )
    }

    /// `DELETE {API_V2}{path}`, expecting `204 No Content`.
    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(
            Method::DELETE,
            format!("{API_V2}{}", path.into()),
            StatusCode::NO_CONTENT,
        )
    }

    /// `GET {path}` at the server root without credentials, expecting `200 OK`.
    pub(crate) fn liveness(path: &'static str) -> Self {
        Self {
            authenticated: false,
            ..Self::new(Method::GET, path.to_string(), StatusCode::OK)
        }
    }

    /// Append a query parameter.
    pub(crate) fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Append a query parameter only when a value is supplied.
    pub(crate) fn query_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Validate `pagination` and append it as `limit` and `offset`.
    pub(crate) fn paginate(self, pagination: Pagination) -> Result<Self, RequestError> {
        pagination.validate()?;
        Ok(self
            .query("limit", pagination.limit.to_string())
            .query("offset", pagination.offset.to_string()))
    }

    /// Use the JSON serialization of `body` as the request body.
    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, RequestError> {
        self.body = Some(serde_json::to_vec(body).context(SerializingSnafu)?);
        Ok(self)
    }

    fn build(self, client: &Client) -> reqwest::RequestBuilder {
        let url = format!("{}{}", client.url, self.path);
        let mut request = if self.authenticated {
            client
                .request(self.method, &url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        } else {
            client
                .reqwest
                .request(self.method, &url)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        };
        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }
        request
    }
}

impl Client {
    /// Send `operation` and check its status, handing back the response
    /// with its body still unread.
    async fn send(&self, operation: Operation) -> Result<reqwest::Response, RequestError> {
        debug!(method = %operation.method, path = %operation.path, "sending request");
        let expected = operation.expected;
        let response = operation
            .build(self)
            .send()
            .await
            .context(ReqwestProcessingSnafu)?;

        let status = response.status();
        trace!(%status, "received response");
        ensure!(status == expected, HttpSnafu { status });
        Ok(response)
    }

    /// Run `operation` and decode the response body as `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
    ) -> Result<T, RequestError> {
        let response = self.send(operation).await?;
        let body = response.bytes().await.context(ReqwestProcessingSnafu)?;
        serde_json::from_slice(&body).context(DeserializingSnafu)
    }

    /// Run `operation`, which answers without a body.
    pub(crate) async fn execute_no_content(&self, operation: Operation) -> Result<(), RequestError> {
        self.send(operation).await.map(drop)
    }

    /// Like [`Self::execute`], but gives up with [`RequestError::Cancelled`]
    /// as soon as `token` is cancelled.
    pub(crate) async fn execute_cancellable<T: DeserializeOwned>(
        &self,
        operation: Operation,
        token: &CancellationToken,
    ) -> Result<T, RequestError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => CancelledSnafu.fail(),
            result = self.execute(operation) => result,
        }
    }
}
