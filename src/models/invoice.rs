use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Simplified projection of one recognized invoice, the unit of the response
/// body. Fields the vendor did not extract serialize as explicit `null` so
/// the output shape is identical for every invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    /// 1-based position of this invoice within the submission.
    pub invoice_index: usize,
    pub vendor_name: Option<String>,
    pub customer_name: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub subtotal: Option<f64>,
    pub previous_balance: Option<f64>,
    pub tax: Option<f64>,
    /// Raw recognized rate text, e.g. `"10%"`.
    pub tax_rate: Option<String>,
    pub amount_due: Option<f64>,
    pub items: Vec<InvoiceItem>,
}

/// One line item of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub date: Option<NaiveDate>,
    pub unit: Option<f64>,
    pub unit_price: Option<f64>,
    pub tax: Option<f64>,
    pub amount: Option<f64>,
}
