//! Canned vendor payloads for driving the relay without a live subscription.
//!
//! Each fixture is written as the literal wire JSON the operation endpoint
//! returns and deserialized through the real models, so the tests exercise
//! the same parsing path as production polling.

use invoice_relay::models::AnalyzeOperation;

fn operation(body: serde_json::Value) -> AnalyzeOperation {
    serde_json::from_value(body).expect("fixture is valid operation JSON")
}

/// Operation body returned while the vendor is still working.
pub fn running() -> AnalyzeOperation {
    operation(serde_json::json!({
        "status": "running",
        "createdDateTime": "2025-06-02T09:00:00Z",
        "lastUpdatedDateTime": "2025-06-02T09:00:02Z"
    }))
}

/// Terminal failure with the vendor's diagnostics object.
pub fn failed() -> AnalyzeOperation {
    operation(serde_json::json!({
        "status": "failed",
        "createdDateTime": "2025-06-02T09:00:00Z",
        "lastUpdatedDateTime": "2025-06-02T09:00:06Z",
        "error": {
            "code": "InvalidContent",
            "message": "The file is corrupted or format is unsupported."
        }
    }))
}

/// Success with one recognized invoice: a vendor name, an amount due, and a
/// single line item carrying a product code. Every other header field is
/// absent so the projection's nulls can be asserted.
pub fn succeeded_one_invoice() -> AnalyzeOperation {
    operation(serde_json::json!({
        "status": "succeeded",
        "createdDateTime": "2025-06-02T09:00:00Z",
        "lastUpdatedDateTime": "2025-06-02T09:00:08Z",
        "analyzeResult": {
            "apiVersion": "2024-11-30",
            "modelId": "prebuilt-invoice",
            "content": "CONTOSO LTD. INVOICE ...",
            "documents": [{
                "docType": "invoice",
                "confidence": 0.98,
                "fields": {
                    "VendorName": {
                        "type": "string",
                        "valueString": "Contoso Ltd.",
                        "content": "CONTOSO LTD.",
                        "confidence": 0.94
                    },
                    "AmountDue": {
                        "type": "currency",
                        "valueCurrency": { "amount": 610.0, "currencyCode": "USD" },
                        "content": "$610.00",
                        "confidence": 0.97
                    },
                    "Items": {
                        "type": "array",
                        "valueArray": [{
                            "type": "object",
                            "confidence": 0.92,
                            "valueObject": {
                                "ProductCode": { "type": "string", "content": "A-123" },
                                "Description": { "type": "string", "valueString": "Consulting services" },
                                "Quantity": { "type": "number", "valueNumber": 2.0 },
                                "Amount": {
                                    "type": "currency",
                                    "valueCurrency": { "amount": 610.0, "currencyCode": "USD" }
                                }
                            }
                        }]
                    }
                }
            }]
        }
    }))
}

/// Success with two recognized invoices in one submission.
pub fn succeeded_two_invoices() -> AnalyzeOperation {
    operation(serde_json::json!({
        "status": "succeeded",
        "createdDateTime": "2025-06-02T09:00:00Z",
        "lastUpdatedDateTime": "2025-06-02T09:00:09Z",
        "analyzeResult": {
            "apiVersion": "2024-11-30",
            "modelId": "prebuilt-invoice",
            "documents": [
                {
                    "docType": "invoice",
                    "confidence": 0.97,
                    "fields": {
                        "VendorName": { "type": "string", "valueString": "First Vendor" }
                    }
                },
                {
                    "docType": "invoice",
                    "confidence": 0.95,
                    "fields": {
                        "VendorName": { "type": "string", "valueString": "Second Vendor" }
                    }
                }
            ]
        }
    }))
}

/// Success whose single invoice has two line items, one scored well above
/// and one well below any reasonable confidence floor.
pub fn succeeded_mixed_confidence_items() -> AnalyzeOperation {
    operation(serde_json::json!({
        "status": "succeeded",
        "createdDateTime": "2025-06-02T09:00:00Z",
        "lastUpdatedDateTime": "2025-06-02T09:00:08Z",
        "analyzeResult": {
            "apiVersion": "2024-11-30",
            "modelId": "prebuilt-invoice",
            "documents": [{
                "docType": "invoice",
                "confidence": 0.96,
                "fields": {
                    "Items": {
                        "type": "array",
                        "valueArray": [
                            {
                                "type": "object",
                                "confidence": 0.9,
                                "valueObject": {
                                    "Description": { "type": "string", "valueString": "legible item" }
                                }
                            },
                            {
                                "type": "object",
                                "confidence": 0.1,
                                "valueObject": {
                                    "Description": { "type": "string", "valueString": "smudged item" }
                                }
                            }
                        ]
                    }
                }
            }]
        }
    }))
}

/// Nominal success in which the model recognized no documents at all.
pub fn succeeded_no_documents() -> AnalyzeOperation {
    operation(serde_json::json!({
        "status": "succeeded",
        "createdDateTime": "2025-06-02T09:00:00Z",
        "lastUpdatedDateTime": "2025-06-02T09:00:05Z",
        "analyzeResult": {
            "apiVersion": "2024-11-30",
            "modelId": "prebuilt-invoice",
            "documents": []
        }
    }))
}
