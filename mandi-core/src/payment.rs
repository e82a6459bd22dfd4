use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Payment-facing label derived from a lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatusLabel {
    Paid,
    Pending,
    Cancelled,
    NotProcessed,
    InProgress,
}

/// Lookup table from lifecycle status strings to payment labels.
///
/// Order and delivery lifecycles use different vocabularies but feed the
/// same label set, so the mapping is data: a new vocabulary is a config
/// change, not a new code path. Matching is exact; statuses not in the
/// table fall through to the configured fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusTable {
    entries: HashMap<String, PaymentStatusLabel>,
    fallback: PaymentStatusLabel,
}

impl Default for PaymentStatusTable {
    fn default() -> Self {
        let entries = [
            ("Delivered", PaymentStatusLabel::Paid),
            ("Received", PaymentStatusLabel::Paid),
            ("Completed", PaymentStatusLabel::Paid),
            ("Active", PaymentStatusLabel::Pending),
            ("Out for Delivery", PaymentStatusLabel::Pending),
            ("Cancelled", PaymentStatusLabel::Cancelled),
            ("New Order", PaymentStatusLabel::NotProcessed),
        ]
        .into_iter()
        .map(|(status, label)| (status.to_string(), label))
        .collect();

        Self {
            entries,
            fallback: PaymentStatusLabel::InProgress,
        }
    }
}

impl PaymentStatusTable {
    pub fn new(entries: HashMap<String, PaymentStatusLabel>, fallback: PaymentStatusLabel) -> Self {
        Self { entries, fallback }
    }

    /// Map a lifecycle status to its payment label.
    pub fn derive(&self, status: &str) -> PaymentStatusLabel {
        match self.entries.get(status) {
            Some(label) => *label,
            None => {
                tracing::trace!(status, "status not in payment table, using fallback");
                self.fallback
            }
        }
    }

    /// Statuses the table maps to a given label.
    pub fn statuses_with(&self, label: PaymentStatusLabel) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, mapped)| **mapped == label)
            .map(|(status, _)| status.as_str())
            .collect()
    }
}

/// Statuses after which no further progress is expected and payment is
/// considered complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalStatuses(HashSet<String>);

impl Default for TerminalStatuses {
    fn default() -> Self {
        TerminalStatuses::new(["Completed", "Delivered", "Received"])
    }
}

impl TerminalStatuses {
    pub fn new<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TerminalStatuses(statuses.into_iter().map(Into::into).collect())
    }

    /// Every status a table labels `Paid`, for callers that keep the
    /// terminal set and the label table in sync.
    pub fn from_table(table: &PaymentStatusTable) -> Self {
        TerminalStatuses::new(table.statuses_with(PaymentStatusLabel::Paid))
    }

    pub fn contains(&self, status: &str) -> bool {
        self.0.contains(status)
    }
}
