pub mod finance;
pub mod invoice;
pub mod models;
pub mod reports;
pub mod settlement;
pub mod words;

pub use finance::aggregate;
pub use invoice::{InvoiceComposer, ReceiptSequence, UuidReceipts};
pub use models::{ActorGroup, ActorRecord, Invoice, LineItem, MonetarySummary, PaymentRecord};
pub use reports::{settlement_summary, SettlementSummary};
pub use settlement::GroupingEngine;
pub use words::amount_in_words;

/// Defect in caller-supplied records. Fatal to the single computation that
/// saw it; surfaced to the caller, never clamped or zeroed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("line item {index}: {field} must not be negative (got {value})")]
    NegativeAmount {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("line item {index}: {field} is not a finite number")]
    NonFiniteAmount { index: usize, field: &'static str },

    #[error("line item {index}: {field} must be within 0..=100 (got {value})")]
    RateOutOfRange {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("record {index} (actor {actor_id}): charges must not be negative (got {value})")]
    NegativeCharges {
        index: usize,
        actor_id: String,
        value: f64,
    },

    #[error("record {index} (actor {actor_id}): charges is not a finite number")]
    NonFiniteCharges { index: usize, actor_id: String },
}

pub type BillingResult<T> = Result<T, ValidationError>;
