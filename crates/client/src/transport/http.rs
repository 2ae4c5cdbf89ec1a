//! HTTP transport for the monitoring backend.
//!
//! Issues the query as a GET with the operation name and parameters in the
//! query string, and decodes the JSON response body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{QueryRequest, Transport};
use crate::{Error, Result};

pub struct HttpTransport {
    client: Client,
    auth_token: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            auth_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set authentication token
    pub fn with_auth_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &QueryRequest) -> Result<Value> {
        let url = Url::parse(&request.endpoint_url).map_err(|e| {
            Error::Transport(format!(
                "invalid endpoint {}: {}",
                request.endpoint_url, e
            ))
        })?;

        let mut query: Vec<(&str, &str)> = vec![("Action", request.operation.as_str())];
        for (key, value) in &request.params {
            query.push((key.as_str(), value.as_str()));
        }

        debug!("Sending {} to {}", request.operation, url);

        let mut req = self
            .client
            .get(url)
            .query(&query)
            .timeout(self.timeout);

        if let Some(token) = &self.auth_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Transport(format!(
                "{} returned {}: {}",
                request.operation, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("failed to decode response body: {}", e)))
    }
}
