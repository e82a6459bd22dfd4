use crate::finance;
use crate::models::{Invoice, LineItem, PaymentRecord};
use crate::words::amount_in_words;
use crate::BillingResult;
use chrono::Utc;
use mandi_core::{PaymentStatusLabel, PaymentStatusTable};
use uuid::Uuid;

/// Source of receipt and transaction identifiers.
///
/// Injected by the caller so document numbering stays out of the billing
/// math and tests can substitute a deterministic sequence.
pub trait ReceiptSequence {
    fn next_id(&mut self) -> String;
}

/// UUID-backed sequence for production invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidReceipts;

impl ReceiptSequence for UuidReceipts {
    fn next_id(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        let short = id.split('-').next().unwrap_or("00000000");
        format!("TXN-{}", short.to_uppercase())
    }
}

/// Builds renderable invoice documents from order data.
#[derive(Debug, Clone, Default)]
pub struct InvoiceComposer {
    table: PaymentStatusTable,
}

impl InvoiceComposer {
    pub fn new(table: PaymentStatusTable) -> Self {
        Self { table }
    }

    /// Compose the invoice for one order: monetary summary, grand total in
    /// words, derived payment label, and the settlement row shown under
    /// payment history when the order has been paid.
    pub fn compose(
        &self,
        order_ref: &str,
        items: &[LineItem],
        lifecycle_status: &str,
        ids: &mut dyn ReceiptSequence,
    ) -> BillingResult<Invoice> {
        let summary = finance::aggregate(items)?;
        let payment_status = self.table.derive(lifecycle_status);
        let issued_at = Utc::now();
        let invoice_no = ids.next_id();

        let payments = if payment_status == PaymentStatusLabel::Paid {
            vec![PaymentRecord {
                transaction_id: ids.next_id(),
                amount: summary.grand_total,
                recorded_at: issued_at,
            }]
        } else {
            Vec::new()
        };

        tracing::debug!(order_ref, status = ?payment_status, %invoice_no, "composed invoice");

        Ok(Invoice {
            invoice_no,
            order_ref: order_ref.to_string(),
            issued_at,
            summary,
            grand_total_in_words: amount_in_words(summary.grand_total),
            payment_status,
            payments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandi_core::Money;

    struct SequentialReceipts(u32);

    impl ReceiptSequence for SequentialReceipts {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("RCP-{:04}", self.0)
        }
    }

    fn items() -> Vec<LineItem> {
        vec![
            LineItem {
                quantity: 4.0,
                unit_price: 3800.0,
                line_total: 15200.0,
                cgst_rate: 6.0,
                sgst_rate: 6.0,
                delivery_fee: 0.0,
            },
            LineItem {
                quantity: 2.0,
                unit_price: 900.0,
                line_total: 1800.0,
                cgst_rate: 0.0,
                sgst_rate: 0.0,
                delivery_fee: 0.0,
            },
        ]
    }

    #[test]
    fn test_paid_order_gets_settlement_row() {
        let composer = InvoiceComposer::default();
        let mut ids = SequentialReceipts(0);
        let invoice = composer
            .compose("ord-1042", &items(), "Delivered", &mut ids)
            .unwrap();

        assert_eq!(invoice.invoice_no, "RCP-0001");
        assert_eq!(invoice.payment_status, PaymentStatusLabel::Paid);
        assert_eq!(invoice.summary.grand_total, Money::from_rupees(18824.0));
        assert_eq!(
            invoice.grand_total_in_words,
            "Eighteen Thousand Eight Hundred Twenty Four Rupees"
        );
        assert_eq!(invoice.payments.len(), 1);
        assert_eq!(invoice.payments[0].transaction_id, "RCP-0002");
        assert_eq!(invoice.payments[0].amount, invoice.summary.grand_total);
    }

    #[test]
    fn test_unpaid_order_has_empty_history() {
        let composer = InvoiceComposer::default();
        let mut ids = SequentialReceipts(0);
        let invoice = composer
            .compose("ord-1043", &items(), "Out for Delivery", &mut ids)
            .unwrap();

        assert_eq!(invoice.payment_status, PaymentStatusLabel::Pending);
        assert!(invoice.payments.is_empty());
    }

    #[test]
    fn test_bad_items_block_the_invoice() {
        let composer = InvoiceComposer::default();
        let mut ids = SequentialReceipts(0);
        let mut bad = items();
        bad[0].line_total = -15200.0;

        assert!(composer.compose("ord-1044", &bad, "Delivered", &mut ids).is_err());
    }

    #[test]
    fn test_uuid_receipts_shape() {
        let mut ids = UuidReceipts;
        let id = ids.next_id();
        assert!(id.starts_with("TXN-"));
        assert_eq!(id.len(), 12);
        assert_ne!(id, ids.next_id());
    }
}
