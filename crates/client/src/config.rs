use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub query: QueryConfig,
    pub transport: TransportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub region: String,
    pub max_records: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> crate::Result<Self> {
        // Load environment variables from .env file if it exists
        let _ = dotenvy::dotenv();

        let config = Config {
            query: QueryConfig {
                region: std::env::var("MONITORING_REGION")
                    .unwrap_or_else(|_| "us-east-1".to_string()),
                max_records: std::env::var("MONITORING_MAX_RECORDS")
                    .ok()
                    .and_then(|s| s.parse().ok()),
            },
            transport: TransportConfig {
                auth_token: std::env::var("MONITORING_AUTH_TOKEN").ok(),
                timeout_secs: std::env::var("MONITORING_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
        };

        if config.transport.auth_token.is_none() {
            tracing::warn!(
                "MONITORING_AUTH_TOKEN is not set. Queries will be sent unauthenticated."
            );
        }

        // Validate required fields
        if config.query.region.is_empty() {
            return Err(crate::Error::Config(
                "MONITORING_REGION must not be empty".to_string(),
            ));
        }
        if config.transport.timeout_secs == 0 {
            return Err(crate::Error::Config(
                "MONITORING_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        if let Some(max) = config.query.max_records {
            if max == 0 {
                return Err(crate::Error::Config(
                    "MONITORING_MAX_RECORDS must be greater than zero".to_string(),
                ));
            }
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: QueryConfig {
                region: "us-east-1".to_string(),
                max_records: None,
            },
            transport: TransportConfig {
                auth_token: None,
                timeout_secs: 30,
            },
        }
    }
}
