use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Validate an invoice's fields. Returns all errors found (not just
/// the first).
///
/// GSTIN values are carried verbatim and deliberately not format-checked
/// here.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "invoice number must not be empty",
        ));
    }

    validate_party(&invoice.seller, "seller", &mut errors);
    validate_party(&invoice.buyer, "buyer", &mut errors);

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    if party.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "company name must not be empty",
        ));
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "item description must not be empty",
        ));
    }

    if item.quantity.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if item.rate.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.rate"),
            "rate must not be negative",
        ));
    }
}

/// Check every line's stored computed fields against the invariants and
/// the regime the parties currently imply.
///
/// Invoice totals need no checking of their own: they are recomputed
/// from the lines on every read and cannot diverge. What CAN go stale
/// is a line's tax split, when a party's state changed after the line
/// was last recomputed — exactly what this catches.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let regime = invoice.regime();

    for (i, item) in invoice.items.iter().enumerate() {
        let prefix = format!("items[{i}]");
        let expected_total = item.quantity * item.rate;
        let expected_gst = expected_total * item.gst_rate.percent() / dec!(100);

        if item.total != expected_total {
            errors.push(ValidationError::new(
                format!("{prefix}.total"),
                format!(
                    "total {} does not match quantity {} × rate {}",
                    item.total, item.quantity, item.rate
                ),
            ));
        }

        if item.cgst != item.sgst {
            errors.push(ValidationError::new(
                format!("{prefix}.cgst"),
                format!("CGST {} and SGST {} must be equal", item.cgst, item.sgst),
            ));
        }

        match regime {
            TaxRegime::InterState => {
                if item.cgst != Decimal::ZERO || item.sgst != Decimal::ZERO {
                    errors.push(ValidationError::new(
                        format!("{prefix}.cgst"),
                        "inter-state line must carry no CGST/SGST",
                    ));
                }
                if item.igst != expected_gst {
                    errors.push(ValidationError::new(
                        format!("{prefix}.igst"),
                        format!("IGST {} does not match levy {}", item.igst, expected_gst),
                    ));
                }
            }
            TaxRegime::IntraState => {
                if item.igst != Decimal::ZERO {
                    errors.push(ValidationError::new(
                        format!("{prefix}.igst"),
                        "intra-state line must carry no IGST",
                    ));
                }
                if item.cgst + item.sgst != expected_gst {
                    errors.push(ValidationError::new(
                        format!("{prefix}.cgst"),
                        format!(
                            "CGST {} + SGST {} does not match levy {}",
                            item.cgst, item.sgst, expected_gst
                        ),
                    ));
                }
            }
        }
    }

    errors
}
