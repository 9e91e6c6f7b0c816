//! Connection settings for command line tools built on this client.

use crate::Client;
use secrecy::{ExposeSecret, Secret};
use url::Url;

/// Where the InfluxDB 2 server lives and how to authenticate with it.
///
/// Flatten this into a `clap` parser to accept `--host`/`--token` or the
/// `INFLUX_HOST`/`INFLUX_TOKEN` environment variables.
#[derive(Debug, clap::Parser)]
pub struct ClientConfig {
    /// The host URL of the running InfluxDB 2 server
    #[clap(
        long = "host",
        env = "INFLUX_HOST",
        default_value = "http://localhost:8086"
    )]
    pub host_url: Url,

    /// The token for authentication with the InfluxDB 2 server
    #[clap(long = "token", env = "INFLUX_TOKEN")]
    pub auth_token: Secret<String>,
}

impl ClientConfig {
    /// Build a [`Client`] from these settings.
    pub fn client(&self) -> Client {
        Client::new(self.host_url.as_str(), self.auth_token.expose_secret())
    }
}
