//! Transport seam between the query client and the monitoring backend.
//!
//! The backend is reached only through the [`Transport`] trait so tests can
//! inject a stub in place of real network code.

pub mod http;

pub use http::HttpTransport;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Operation name carried by every alarm inventory query.
pub const DESCRIBE_ALARMS: &str = "DescribeAlarms";

/// Request handed to the transport collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub operation: String,
    pub endpoint_url: String,
    pub params: HashMap<String, String>,
}

impl QueryRequest {
    pub fn new(operation: &str, endpoint_url: &str) -> Self {
        Self {
            operation: operation.to_string(),
            endpoint_url: endpoint_url.to_string(),
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

/// Trait for transports that can exchange a request for a raw response.
///
/// Implementations own authentication, connection handling, and any retry
/// policy. Failures surface as `Error::Transport`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the backend and return the raw response document.
    async fn send(&self, request: &QueryRequest) -> Result<Value>;
}
