//! Azure Document Intelligence client.
//!
//! Submits uploaded documents to the hosted `prebuilt-invoice` model and
//! exposes the vendor's long-running-operation protocol: a submission
//! returns a callback URL in the `operation-location` header, and that URL
//! is polled until the operation reaches a terminal status.
//!
//! REST reference: <https://learn.microsoft.com/rest/api/aiservices/document-models/analyze-document>

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::models::{AnalyzeOperation, JobHandle};

/// Header carrying the subscription key on every vendor request.
const API_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header on an accepted submission that names the operation URL.
const OPERATION_LOCATION_HEADER: &str = "operation-location";

/// Error type for analysis operations, covering submission, polling, and
/// the vendor's own terminal failure report.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis submission rejected with HTTP {status}: {body}")]
    Submission { status: u16, body: String },

    #[error("submission accepted but no operation-location header was returned")]
    MissingJobHandle,

    #[error("analysis failed: {details}")]
    AnalysisFailed { details: serde_json::Value },

    #[error("analysis still not terminal after {attempts} polls")]
    PollBudgetExhausted { attempts: u32 },

    #[error("vendor request failed: {message}")]
    Transport { message: String },

    #[error("could not parse operation status: {0}")]
    InvalidStatus(#[from] serde_json::Error),

    #[error("analysis succeeded but the result payload was missing")]
    MissingResult,
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport {
            message: err.to_string(),
        }
    }
}

/// Capability seam over the vendor: submit a document, poll its operation.
///
/// The HTTP layer and the poll loop only see this trait, so tests drive
/// them with scripted fakes instead of a live subscription.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Submit raw document bytes for analysis and return the job handle.
    async fn submit(
        &self,
        document: Vec<u8>,
        content_type: &str,
    ) -> Result<JobHandle, AnalysisError>;

    /// Fetch the current state of a previously submitted operation.
    async fn poll_status(&self, handle: &JobHandle) -> Result<AnalyzeOperation, AnalysisError>;
}

/// Client for the Azure Document Intelligence REST API.
pub struct DocIntelClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    api_version: String,
}

impl DocIntelClient {
    pub fn new(
        endpoint: &str,
        api_key: String,
        model_id: String,
        api_version: String,
    ) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            // The operation URL is vendor-issued and absolute, so the only
            // URL we ever build is the analyze endpoint.
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            model_id,
            api_version,
        })
    }

    fn analyze_url(&self) -> String {
        format!(
            "{}/documentIntelligence/documentModels/{}:analyze?api-version={}",
            self.endpoint, self.model_id, self.api_version
        )
    }
}

#[async_trait]
impl AnalysisProvider for DocIntelClient {
    async fn submit(
        &self,
        document: Vec<u8>,
        content_type: &str,
    ) -> Result<JobHandle, AnalysisError> {
        let response = self
            .http
            .post(self.analyze_url())
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, content_type)
            .body(document)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The vendor's rejection body names the offending parameter;
            // keep it verbatim for the caller.
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Submission {
                status: status.as_u16(),
                body,
            });
        }

        let operation_url = response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(AnalysisError::MissingJobHandle)?;

        Ok(JobHandle::new(operation_url))
    }

    async fn poll_status(&self, handle: &JobHandle) -> Result<AnalyzeOperation, AnalysisError> {
        let response = self
            .http
            .get(handle.as_str())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // A bad poll response says nothing about the operation itself,
            // so it is reported as transport and retried upstream.
            return Err(AnalysisError::Transport {
                message: format!("operation endpoint returned HTTP {status}"),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
