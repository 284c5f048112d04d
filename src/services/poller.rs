//! Bounded polling of a submitted analysis operation.
//!
//! The vendor gives no completion callback, so the relay re-reads the
//! operation status on a fixed interval until it turns terminal. Both the
//! number of status checks and the tolerance for consecutive transport
//! failures are capped, so a stuck operation can never pin a request
//! handler forever.

use std::time::Duration;

use tokio::time::sleep;

use crate::models::{AnalyzeResult, JobHandle, OperationStatus};
use crate::services::docintel::{AnalysisError, AnalysisProvider};

/// Pacing and budget for one operation's poll loop.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    /// Delay between consecutive status checks.
    pub interval: Duration,
    /// Status checks allowed before the operation is abandoned.
    pub max_attempts: u32,
    /// Consecutive transport failures tolerated before giving up.
    pub max_transport_retries: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 150,
            max_transport_retries: 3,
        }
    }
}

/// Poll `handle` until the operation reaches a terminal status.
///
/// Returns the extraction payload on `succeeded`. A terminal `failed`
/// surfaces the vendor's own error report; a transient transport failure
/// is retried in place without restarting the budget, and only aborts the
/// loop once `max_transport_retries` checks fail back to back.
pub async fn poll_until_complete(
    provider: &dyn AnalysisProvider,
    handle: &JobHandle,
    policy: PollPolicy,
) -> Result<AnalyzeResult, AnalysisError> {
    let mut transport_failures: u32 = 0;

    for attempt in 1..=policy.max_attempts {
        match provider.poll_status(handle).await {
            Ok(operation) => {
                transport_failures = 0;

                match operation.status {
                    OperationStatus::Succeeded => {
                        metrics::histogram!("invoice_poll_attempts").record(attempt as f64);
                        return operation.analyze_result.ok_or(AnalysisError::MissingResult);
                    }
                    OperationStatus::Failed => {
                        metrics::histogram!("invoice_poll_attempts").record(attempt as f64);
                        return Err(AnalysisError::AnalysisFailed {
                            details: operation.error.unwrap_or(serde_json::Value::Null),
                        });
                    }
                    status => {
                        tracing::debug!(
                            handle = %handle,
                            ?status,
                            attempt,
                            "analysis still in progress"
                        );
                    }
                }
            }
            Err(AnalysisError::Transport { message }) => {
                transport_failures += 1;
                if transport_failures > policy.max_transport_retries {
                    tracing::error!(
                        handle = %handle,
                        failures = transport_failures,
                        "giving up after consecutive status check failures"
                    );
                    return Err(AnalysisError::Transport { message });
                }
                tracing::warn!(
                    handle = %handle,
                    attempt,
                    failures = transport_failures,
                    error = %message,
                    "status check failed, will retry"
                );
            }
            Err(other) => return Err(other),
        }

        if attempt < policy.max_attempts {
            sleep(policy.interval).await;
        }
    }

    Err(AnalysisError::PollBudgetExhausted {
        attempts: policy.max_attempts,
    })
}
