//! Client configuration.

use std::path::PathBuf;

use clap::ValueEnum;
use url::Url;

use crate::error::ClientError;

/// Default address of the game server
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000/";

/// Chat endpoint, relative to the server address
pub const DEFAULT_ENDPOINT: &str = "./chat";

/// What a reset does with the connection it replaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResetPolicy {
    /// Leave the previous connection open until the server closes it
    #[default]
    Abandon,
    /// Ask the previous connection to close
    Close,
}

/// Settings for one client run
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Address the endpoint is resolved against
    pub server: String,
    /// Chat endpoint, absolute or relative to `server`
    pub endpoint: String,
    /// Directory holding `template-response.hbs` and `template-history.hbs`
    pub templates_dir: Option<PathBuf>,
    pub reset_policy: ResetPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            templates_dir: None,
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Resolve the WebSocket URL of the chat endpoint.
    ///
    /// `http` maps to `ws` and `https` to `wss`, the way a browser resolves
    /// a relative WebSocket URL against the page address.
    pub fn endpoint_url(&self) -> Result<String, ClientError> {
        let mut url = Url::parse(&self.server)?.join(&self.endpoint)?;

        let scheme = match url.scheme() {
            "http" | "ws" => "ws",
            "https" | "wss" => "wss",
            other => {
                return Err(ClientError::InvalidEndpoint(format!(
                    "unsupported scheme '{}' in {}",
                    other, url
                )));
            }
        };
        url.set_scheme(scheme).map_err(|_| {
            ClientError::InvalidEndpoint(format!("cannot use {} as {}", url, scheme))
        })?;

        Ok(url.to_string())
    }
}
