// src/service/http.rs

use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Instant;

use crate::config::ServiceConfig;
use crate::errors::Result;
use crate::models::{ExecutionResult, SubmissionRequest};
use crate::service::{decode_response, ExecutionService};

/// Talks to an execution service over HTTP: one form-encoded POST per submission.
pub struct HttpExecutionService {
    client: Client,
    config: ServiceConfig,
}

impl HttpExecutionService {
    /// Creates a new `HttpExecutionService`.
    pub fn new(client: Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    /// Builds a client honoring the configured transport timeout.
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?, config))
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl ExecutionService for HttpExecutionService {
    /// Posts the submission and decodes whatever the backend sends back.
    async fn execute(&self, request: &SubmissionRequest) -> Result<ExecutionResult> {
        log::debug!(
            "📡 Submitting {} bytes of code ({} bytes of stdin) to {}",
            request.code.len(),
            request.stdin.len(),
            self.config.endpoint
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .form(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Execution service response status: {} ({}ms)", status, latency_ms);

        decode_response(status.as_u16(), &body)
    }
}
