//! Client for the respond endpoint

pub mod error;

use async_trait::async_trait;
use error::ClientError;
use fairchat_core::config::DEFAULT_ENDPOINT;
use fairchat_core::{
    ErrorBody, RespondRequest, RespondResponse, RespondResult, RespondTransport,
};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client that posts messages to the respond endpoint
#[derive(Clone, Debug)]
pub struct RespondClient {
    client: Client,
    base_url: String,
    endpoint: String,
}

impl RespondClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> RespondClientBuilder {
        RespondClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL requests are posted to
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    /// Post one message and decode the reply
    ///
    /// A body that is not JSON is a decode failure whatever the status. A
    /// non-success status with a JSON body becomes [`ClientError::ServerError`]
    /// carrying the body's `error` string, if any.
    pub async fn send(&self, request: &RespondRequest) -> Result<RespondResponse, ClientError> {
        let response = self.client.post(self.url()).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Respond endpoint replied");

        if status.is_success() {
            Ok(serde_json::from_slice(&body)?)
        } else {
            let value: serde_json::Value = serde_json::from_slice(&body)?;
            let message = serde_json::from_value::<ErrorBody>(value)
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.is_empty());
            Err(ClientError::from_status(status, message))
        }
    }
}

#[async_trait(?Send)]
impl RespondTransport for RespondClient {
    async fn respond(&self, request: &RespondRequest) -> RespondResult<RespondResponse> {
        Ok(self.send(request).await?)
    }
}

/// Builder for RespondClient
#[derive(Default)]
pub struct RespondClientBuilder {
    base_url: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RespondClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the endpoint path, `/api/respond` when unset
    pub fn endpoint(mut self, path: impl Into<String>) -> Self {
        self.endpoint = Some(path.into());
        self
    }

    /// Set the request timeout (ignored on WASM)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RespondClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url:?}: {e}")))?;

        let endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = if endpoint.starts_with('/') {
            endpoint
        } else {
            format!("/{endpoint}")
        };

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("fairchat-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(RespondClient {
            client,
            base_url,
            endpoint,
        })
    }
}
