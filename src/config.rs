// src/config.rs
use std::time::Duration;

use crate::errors::{ReplError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/";

/// Where and how to reach the execution service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    /// Transport-level timeout. The controller itself never times a submission out.
    pub timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), with `endpoint` taking precedence over
    /// `REPL_ENDPOINT` before anything is validated.
    pub fn from_env_with_endpoint(endpoint: Option<String>) -> Result<Self> {
        Self::from_vars(endpoint_override(endpoint, |key| std::env::var(key).ok()))
    }

    /// Builds the configuration from `REPL_ENDPOINT` and `REPL_TIMEOUT_SECS` as
    /// resolved by `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint = lookup("REPL_ENDPOINT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = match lookup("REPL_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        let config = ServiceConfig { endpoint, timeout };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            ReplError::Config(format!("Invalid execution endpoint '{}': {}", self.endpoint, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ReplError::Config(format!(
                "Execution endpoint must use http or https, got '{}'",
                other
            ))),
        }
    }
}

fn endpoint_override(
    endpoint: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> impl Fn(&str) -> Option<String> {
    move |key| match (key, &endpoint) {
        ("REPL_ENDPOINT", Some(endpoint)) => Some(endpoint.clone()),
        _ => lookup(key),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        ReplError::Config(format!("REPL_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw))
    })?;

    if secs == 0 {
        return Err(ReplError::Config(
            "REPL_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    Ok(Duration::from_secs(secs))
}
