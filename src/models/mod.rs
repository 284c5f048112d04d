pub mod analysis;
pub mod invoice;

pub use analysis::{
    AnalyzeOperation, AnalyzeResult, AnalyzedDocument, DocumentField, JobHandle, OperationStatus,
};
pub use invoice::{InvoiceItem, InvoiceView};
