#![warn(missing_docs, clippy::explicit_iter_loop, clippy::use_self)]

//! # influxdb2_client
//!
//! This is a Rust client to the management side of the InfluxDB [2.0 API][2api]:
//! authorizations, buckets, dashboards, users and the health/ready endpoints.
//!
//! [2api]: https://v2.docs.influxdata.com/v2.0/reference/api/
//!
//! Every operation performs exactly one HTTP round trip. Arguments are
//! checked before anything is sent, so a call with an empty identifier or
//! an out of range page size fails without touching the network.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use influxdb2_client::{Client, Pagination};
//!
//! let client = Client::new("http://localhost:8086", "my-token");
//! let buckets = client
//!     .list_buckets(Pagination::default(), None, Some("my-org"), None)
//!     .await?;
//! println!("{buckets:?}");
//! # Ok(())
//! # }
//! ```

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, Secret};
use snafu::Snafu;

/// Errors that occur while making requests to the Influx server.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RequestError {
    /// An argument failed validation; no request was sent.
    #[snafu(display("Invalid argument `{}`: {}", name, reason))]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// The transport failed while sending the request or reading the response.
    #[snafu(display("Error while processing the HTTP request: {}", source))]
    ReqwestProcessing {
        /// Underlying transport error
        source: reqwest::Error,
    },
    /// The server answered with a status other than the one the operation
    /// expects. The response body is not read.
    #[snafu(display("HTTP request returned an unexpected status: {}", status))]
    Http {
        /// Status returned by the server
        status: StatusCode,
    },
    /// The request body could not be serialized.
    #[snafu(display("Error while serializing to JSON: {}", source))]
    Serializing {
        /// Underlying serialization error
        source: serde_json::Error,
    },
    /// The response body did not match the expected shape.
    #[snafu(display("Error while parsing response: {}", source))]
    Deserializing {
        /// Underlying deserialization error
        source: serde_json::Error,
    },
    /// The request was abandoned because its cancellation token fired.
    #[snafu(display("Request was cancelled"))]
    Cancelled,
}

/// Client to a server supporting the InfluxData 2.0 API.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    auth_header: Secret<String>,
    reqwest: reqwest::Client,
}

impl Client {
    /// Create a new client pointing to the URL specified in
    /// `protocol://server:port` format and using the specified token for
    /// authorization.
    ///
    /// # Example
    ///
    /// ```
    /// let client = influxdb2_client::Client::new("http://localhost:8086", "my-token");
    /// ```
    pub fn new(url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let url = url.into();
        let url = url.trim_end_matches('/').to_string();
        Self {
            url,
            auth_header: Secret::new(format!("Token {}", auth_token.into())),
            reqwest: reqwest::Client::new(),
        }
    }

    /// The base URL this client sends requests to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the underlying HTTP transport.
    ///
    /// Connection pooling, proxies, TLS roots and timeouts are all
    /// configured on the [`reqwest::Client`] passed here.
    pub fn with_http_client(mut self, reqwest: reqwest::Client) -> Self {
        self.reqwest = reqwest;
        self
    }

    /// Consolidate common request building code
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.reqwest
            .request(method, url)
            .header("Authorization", self.auth_header.expose_secret())
    }
}

pub mod api;
pub mod models;

#[cfg(feature = "clap")]
pub mod config;

mod operation;
mod params;

pub use params::Pagination;
