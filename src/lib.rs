//! # bijak
//!
//! Calculation core for Indian GST invoicing: place-of-supply
//! classification (intra-state vs inter-state), the CGST/SGST/IGST
//! split, invoice totals, and fiscal-year invoice numbering.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. The crate is the pure backend of an invoice form: the host
//! owns the widgets and the PDF export, calls [`gst::classify`] when a
//! party's state changes, [`gst::recompute_line`] when a row is edited,
//! and reads settled totals before exporting.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV/2024-25/001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .seller(PartyBuilder::new("Deccan Traders")
//!         .gstin("27AAACD1234F1Z5")
//!         .state(State::Maharashtra)
//!         .build())
//!     .buyer(PartyBuilder::new("Coromandel Retail")
//!         .state(State::Maharashtra)
//!         .build())
//!     .add_item(LineItemBuilder::new("Steel fasteners")
//!         .quantity(dec!(2))
//!         .rate(dec!(100))
//!         .build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(invoice.regime(), TaxRegime::IntraState);
//! let totals = invoice.totals();
//! assert_eq!(totals.total_cgst, dec!(18));
//! assert_eq!(totals.total_sgst, dec!(18));
//! assert_eq!(totals.grand_total, dec!(236));
//! ```

pub mod core;
pub mod gst;

// Re-export core types at crate root for convenience
pub use crate::core::*;
