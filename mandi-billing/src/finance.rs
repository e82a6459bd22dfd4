use crate::models::{LineItem, MonetarySummary};
use crate::{BillingResult, ValidationError};
use mandi_core::{Money, TaxRate};

/// Compute the monetary summary of one order's line items.
///
/// `line_total` is taken as authoritative. CGST and SGST are applied per
/// item and each tax term is rounded half-up to the paisa as it is
/// computed, not only at display time. The delivery fee is summed once per
/// line item; whether it should instead apply once per order is an open
/// question recorded in DESIGN.md, so the observed behavior is kept.
///
/// Empty input yields the all-zero summary. Any negative or non-finite
/// monetary field fails the whole call with a `ValidationError` naming the
/// field and item index; nothing is clamped.
pub fn aggregate(items: &[LineItem]) -> BillingResult<MonetarySummary> {
    let mut subtotal = Money::ZERO;
    let mut cgst_amount = Money::ZERO;
    let mut sgst_amount = Money::ZERO;
    let mut delivery_fee_total = Money::ZERO;

    for (index, item) in items.iter().enumerate() {
        validate(index, item)?;

        let line_total = Money::from_rupees(item.line_total);
        subtotal += line_total;
        cgst_amount += line_total.percent_of(TaxRate::from_percent(item.cgst_rate));
        sgst_amount += line_total.percent_of(TaxRate::from_percent(item.sgst_rate));
        delivery_fee_total += Money::from_rupees(item.delivery_fee);
    }

    let summary = MonetarySummary {
        subtotal,
        cgst_amount,
        sgst_amount,
        delivery_fee_total,
        grand_total: subtotal + cgst_amount + sgst_amount + delivery_fee_total,
    };

    tracing::debug!(
        items = items.len(),
        grand_total = %summary.grand_total,
        "aggregated line items"
    );

    Ok(summary)
}

fn validate(index: usize, item: &LineItem) -> BillingResult<()> {
    check_amount(index, "quantity", item.quantity)?;
    check_amount(index, "unitPrice", item.unit_price)?;
    check_amount(index, "lineTotal", item.line_total)?;
    check_rate(index, "cgstRate", item.cgst_rate)?;
    check_rate(index, "sgstRate", item.sgst_rate)?;
    check_amount(index, "deliveryFee", item.delivery_fee)?;
    Ok(())
}

fn check_amount(index: usize, field: &'static str, value: f64) -> BillingResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteAmount { index, field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { index, field, value });
    }
    Ok(())
}

fn check_rate(index: usize, field: &'static str, value: f64) -> BillingResult<()> {
    check_amount(index, field, value)?;
    if value > 100.0 {
        return Err(ValidationError::RateOutOfRange { index, field, value });
    }
    Ok(())
}
