//! Projection of the vendor's extraction payload into invoice views.
//!
//! Pure data transformation: every accessor tolerates absence at any level
//! of the vendor's nested field tree and yields `null` in the output
//! instead of failing. The only error is a payload with no recognized
//! documents at all.

use std::collections::HashMap;

use crate::models::{AnalyzeResult, AnalyzedDocument, DocumentField, InvoiceItem, InvoiceView};

/// Tuning knobs for the projection.
#[derive(Debug, Clone, Copy)]
pub struct MappingSettings {
    /// Line items scoring below this confidence are dropped before
    /// projection. Items carrying no score are always kept.
    pub min_item_confidence: f64,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            min_item_confidence: 0.0,
        }
    }
}

/// Error type for the projection step.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("no invoice was recognized in the uploaded document")]
    NoDocumentRecognized,
}

/// Project every recognized document into an [`InvoiceView`], in order.
///
/// Zero recognized documents is an error, not an empty success: the caller
/// uploaded something the model could not read as an invoice and should
/// hear about it.
pub fn project_invoices(
    result: &AnalyzeResult,
    settings: &MappingSettings,
) -> Result<Vec<InvoiceView>, MappingError> {
    if result.documents.is_empty() {
        return Err(MappingError::NoDocumentRecognized);
    }

    Ok(result
        .documents
        .iter()
        .enumerate()
        .map(|(index, document)| project_document(index + 1, document, settings))
        .collect())
}

fn project_document(
    invoice_index: usize,
    document: &AnalyzedDocument,
    settings: &MappingSettings,
) -> InvoiceView {
    let fields = &document.fields;

    let items = fields
        .get("Items")
        .and_then(|field| field.value_array.as_ref())
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| {
                    entry
                        .confidence
                        .map_or(true, |score| score >= settings.min_item_confidence)
                })
                .map(project_item)
                .collect()
        })
        .unwrap_or_default();

    InvoiceView {
        invoice_index,
        vendor_name: text(fields.get("VendorName")),
        customer_name: text(fields.get("CustomerName")),
        invoice_date: date(fields.get("InvoiceDate")),
        due_date: date(fields.get("DueDate")),
        subtotal: money(fields.get("SubTotal")),
        previous_balance: money(fields.get("PreviousUnpaidBalance")),
        tax: money(fields.get("TotalTax")),
        tax_rate: first_tax_rate(fields),
        amount_due: money(fields.get("AmountDue")),
        items,
    }
}

fn project_item(entry: &DocumentField) -> InvoiceItem {
    // An array entry without a value object still counts as one item; it
    // projects with every field null.
    let Some(object) = entry.value_object.as_ref() else {
        return InvoiceItem::default();
    };

    InvoiceItem {
        product_code: text(object.get("ProductCode")),
        description: text(object.get("Description")),
        quantity: number(object.get("Quantity")),
        date: date(object.get("Date")),
        unit: number(object.get("Unit")),
        unit_price: money(object.get("UnitPrice")),
        tax: money(object.get("Tax")),
        amount: money(object.get("Amount")),
    }
}

/// Normalized text when present, raw recognized content otherwise.
fn text(field: Option<&DocumentField>) -> Option<String> {
    let field = field?;
    field.value_string.clone().or_else(|| field.content.clone())
}

fn date(field: Option<&DocumentField>) -> Option<chrono::NaiveDate> {
    field?.value_date
}

fn number(field: Option<&DocumentField>) -> Option<f64> {
    field?.value_number
}

fn money(field: Option<&DocumentField>) -> Option<f64> {
    field?.value_currency.as_ref()?.amount
}

/// Rate of the first tax-details entry. Every link of the chain is a
/// checked lookup; an empty or malformed array yields `None`.
fn first_tax_rate(fields: &HashMap<String, DocumentField>) -> Option<String> {
    let rate = fields
        .get("TaxDetails")?
        .value_array
        .as_ref()?
        .first()?
        .value_object
        .as_ref()?
        .get("Rate")?;
    rate.value_string.clone().or_else(|| rate.content.clone())
}
