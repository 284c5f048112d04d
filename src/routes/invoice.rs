use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::models::InvoiceView;
use crate::services::docintel::AnalysisError;
use crate::services::mapping::{self, MappingError};
use crate::services::poller;

/// Error body shared by every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything that can fail between receiving an upload and responding.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing file upload: expected one multipart field named \"file\"")]
    MissingUpload,

    #[error("unreadable multipart payload: {0}")]
    InvalidMultipart(#[from] MultipartError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUpload | ApiError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(AnalysisError::PollBudgetExhausted { .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            ApiError::Analysis(_) => StatusCode::BAD_GATEWAY,
            ApiError::Mapping(MappingError::NoDocumentRecognized) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

struct Upload {
    content: Vec<u8>,
    content_type: String,
}

/// POST /invoice — upload a PDF invoice for analysis.
///
/// Relays the document to the vendor, waits out the operation, and
/// responds with one projected view per recognized invoice.
pub async fn analyze_invoice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<InvoiceView>>, ApiError> {
    metrics::counter!("invoice_requests_total").increment(1);

    let upload = read_upload(&mut multipart).await?;
    tracing::info!(
        bytes = upload.content.len(),
        content_type = %upload.content_type,
        "document received, submitting for analysis"
    );

    let started = std::time::Instant::now();
    let outcome = relay_analysis(&state, upload).await;
    metrics::histogram!("invoice_analysis_seconds").record(started.elapsed().as_secs_f64());

    match outcome {
        Ok(views) => {
            metrics::counter!("invoice_analyses_succeeded").increment(1);
            tracing::info!(
                invoices = views.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "analysis complete"
            );
            Ok(Json(views))
        }
        Err(err) => {
            metrics::counter!("invoice_analyses_failed").increment(1);
            tracing::error!(error = %err, "analysis failed");
            Err(err)
        }
    }
}

/// Pull the uploaded file out of the multipart stream.
///
/// A request without a `file` field, or with an empty one, never reaches
/// the vendor.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| "application/pdf".to_string());
            let content = field.bytes().await?.to_vec();

            if content.is_empty() {
                return Err(ApiError::MissingUpload);
            }
            return Ok(Upload {
                content,
                content_type,
            });
        }
    }

    Err(ApiError::MissingUpload)
}

async fn relay_analysis(state: &AppState, upload: Upload) -> Result<Vec<InvoiceView>, ApiError> {
    let handle = state
        .analyzer
        .submit(upload.content, &upload.content_type)
        .await?;
    tracing::debug!(handle = %handle, "submission accepted");

    let result =
        poller::poll_until_complete(state.analyzer.as_ref(), &handle, state.poll_policy).await?;

    Ok(mapping::project_invoices(&result, &state.mapping)?)
}
