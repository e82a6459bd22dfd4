use chrono::{DateTime, Utc};
use mandi_core::{Money, PaymentStatusLabel};
use serde::{Deserialize, Serialize};

/// One product row within an order or procurement record, as fetched.
///
/// `line_total` is authoritative as supplied and is never recomputed from
/// `quantity` x `unit_price`. The tax rates and delivery fee are optional
/// on the wire and default to zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
    #[serde(default)]
    pub cgst_rate: f64,
    #[serde(default)]
    pub sgst_rate: f64,
    #[serde(default)]
    pub delivery_fee: f64,
}

/// Tax-correct monetary rollup of one order's line items.
///
/// `grand_total` always equals the sum of the other four fields exactly;
/// every field is held in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetarySummary {
    pub subtotal: Money,
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub delivery_fee_total: Money,
    pub grand_total: Money,
}

impl MonetarySummary {
    pub const ZERO: MonetarySummary = MonetarySummary {
        subtotal: Money::ZERO,
        cgst_amount: Money::ZERO,
        sgst_amount: Money::ZERO,
        delivery_fee_total: Money::ZERO,
        grand_total: Money::ZERO,
    };
}

/// A delivery or procurement entry attributed to a driver or vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRecord {
    pub actor_id: String,
    pub charges: f64,
    pub status: String,
    #[serde(rename = "type")]
    pub actor_type: String,
}

/// Per-actor billing rollup produced by grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorGroup {
    pub key: String,
    /// Members in insertion order.
    pub members: Vec<ActorRecord>,
    pub total_charges: Money,
    /// True iff every member carries a terminal-success status.
    pub is_complete: bool,
}

/// Renderable invoice document. Plain data; layout, PDF, and export belong
/// to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_no: String,
    pub order_ref: String,
    pub issued_at: DateTime<Utc>,
    pub summary: MonetarySummary,
    pub grand_total_in_words: String,
    pub payment_status: PaymentStatusLabel,
    pub payments: Vec<PaymentRecord>,
}

/// One settlement row under an invoice's payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub transaction_id: String,
    pub amount: Money,
    pub recorded_at: DateTime<Utc>,
}
