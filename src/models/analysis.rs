use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque handle for one in-flight analysis: the vendor-issued callback URL
/// returned in the `operation-location` header. One exists per inbound
/// request and is dropped once a terminal status is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of a long-running analysis operation as reported by the vendor.
///
/// Anything that is not a terminal `succeeded`/`failed` keeps the poll loop
/// going, including vendor-specific intermediate states we have never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    #[serde(other)]
    Other,
}

/// One poll response from the operation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOperation {
    pub status: OperationStatus,
    /// Present only once `status` is `succeeded`.
    pub analyze_result: Option<AnalyzeResult>,
    /// Vendor diagnostics, present on terminal failure.
    pub error: Option<serde_json::Value>,
}

/// The vendor's extraction payload. Produced once, on success; immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    pub api_version: Option<String>,
    pub model_id: Option<String>,
    /// Full recognized text of the submission.
    pub content: Option<String>,
    #[serde(default)]
    pub documents: Vec<AnalyzedDocument>,
}

/// One recognized document within a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedDocument {
    pub doc_type: Option<String>,
    #[serde(default)]
    pub fields: HashMap<String, DocumentField>,
    pub confidence: Option<f64>,
}

/// The vendor's nested field-value representation.
///
/// Every member is optional: which `value*` member is populated depends on
/// the field's `type`, and the vendor omits anything it did not extract.
/// Accessors over this tree must tolerate absence at any level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentField {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Raw recognized text, before normalization.
    pub content: Option<String>,
    pub value_string: Option<String>,
    pub value_date: Option<NaiveDate>,
    pub value_number: Option<f64>,
    pub value_currency: Option<CurrencyValue>,
    pub value_array: Option<Vec<DocumentField>>,
    pub value_object: Option<HashMap<String, DocumentField>>,
    pub confidence: Option<f64>,
}

/// Extracted currency amount with its denomination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyValue {
    pub amount: Option<f64>,
    pub currency_code: Option<String>,
    pub currency_symbol: Option<String>,
}
