//! Display formatting and form-input sanitization for amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount for display: fixed notation, exactly two decimal
/// places, commercial (half-up) rounding.
///
/// The host applies this uniformly to every total/cgst/sgst/igst field
/// it renders, on screen and in the exported document.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Parse a monetary amount from raw form input.
///
/// Trims whitespace; anything unparseable or negative becomes zero, so
/// downstream arithmetic stays well-defined no matter what was typed.
pub fn parse_amount(input: &str) -> Decimal {
    match input.trim().parse::<Decimal>() {
        Ok(value) if value.is_sign_negative() => Decimal::ZERO,
        Ok(value) => value,
        Err(_) => Decimal::ZERO,
    }
}

/// Parse a quantity from raw form input. Same coercion rules as
/// [`parse_amount`].
pub fn parse_quantity(input: &str) -> Decimal {
    parse_amount(input)
}
