//! Per-line GST levy and invoice-level aggregation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{InvoiceTotals, LineItem, TaxRegime};

/// Recompute a line's total and tax split under the given regime.
///
/// total = quantity × rate; gst = total × slab / 100. Inter-state puts
/// the whole levy into IGST; intra-state splits it into equal CGST and
/// SGST halves. Returns a new line — the input is not mutated.
///
/// Pure and idempotent: the output depends only on `quantity`, `rate`,
/// `gst_rate`, and `regime`, so reapplying it is a no-op. Quantity and
/// rate are expected to be sanitized non-negative numbers; the parsing
/// helpers in [`format`](super::format) coerce malformed form input to
/// zero before it gets here.
pub fn recompute_line(item: &LineItem, regime: TaxRegime) -> LineItem {
    let total = item.quantity * item.rate;
    let gst = total * item.gst_rate.percent() / dec!(100);

    let (cgst, sgst, igst) = match regime {
        TaxRegime::InterState => (Decimal::ZERO, Decimal::ZERO, gst),
        TaxRegime::IntraState => {
            let half = gst / dec!(2);
            (half, half, Decimal::ZERO)
        }
    };

    LineItem {
        total,
        cgst,
        sgst,
        igst,
        ..item.clone()
    }
}

/// Recompute every line under the given regime.
///
/// This is the full pass the host runs after a regime change; a line
/// edited in isolation only needs [`recompute_line`].
pub fn recompute_lines(items: &[LineItem], regime: TaxRegime) -> Vec<LineItem> {
    items.iter().map(|item| recompute_line(item, regime)).collect()
}

/// Fold line items into invoice totals.
///
/// An empty slice yields all-zero totals. Addition is commutative, so
/// the result is invariant under reordering of the items.
pub fn aggregate(items: &[LineItem]) -> InvoiceTotals {
    let subtotal: Decimal = items.iter().map(|i| i.total).sum();
    let total_cgst: Decimal = items.iter().map(|i| i.cgst).sum();
    let total_sgst: Decimal = items.iter().map(|i| i.sgst).sum();
    let total_igst: Decimal = items.iter().map(|i| i.igst).sum();

    InvoiceTotals {
        subtotal,
        total_cgst,
        total_sgst,
        total_igst,
        grand_total: subtotal + total_cgst + total_sgst + total_igst,
    }
}
