//! GST classification, levy, and aggregation.
//!
//! Determines whether a transaction is taxed intra-state (CGST + SGST)
//! or inter-state (IGST), computes the per-line split, and folds lines
//! into invoice totals. Everything here is a pure function: recomputation
//! is always host-triggered, never reactive.
//!
//! # Example
//!
//! ```
//! use bijak::core::{GstSlab, LineItem, State, TaxRegime};
//! use bijak::gst::{aggregate, classify, recompute_line};
//! use rust_decimal_macros::dec;
//!
//! let regime = classify(Some(State::Maharashtra), Some(State::Karnataka));
//! assert_eq!(regime, TaxRegime::InterState);
//!
//! let line = recompute_line(
//!     &LineItem::new("Licence", dec!(2), dec!(100), GstSlab::Eighteen),
//!     regime,
//! );
//! assert_eq!(line.igst, dec!(36));
//!
//! let totals = aggregate(&[line]);
//! assert_eq!(totals.grand_total, dec!(236));
//! ```

mod format;
mod levy;
mod regime;

pub use format::{format_amount, parse_amount, parse_quantity};
pub use levy::{aggregate, recompute_line, recompute_lines};
pub use regime::classify;
