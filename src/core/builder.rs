use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BijakError;
use super::states::State;
use super::types::*;
use super::validation;

/// Builder for constructing valid invoices.
///
/// `build()` classifies the tax regime from the parties, runs the levy
/// pass over every line, and validates the result.
///
/// ```
/// use bijak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("INV/2024-25/001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .seller(PartyBuilder::new("Deccan Traders")
///         .gstin("27AAACD1234F1Z5")
///         .state(State::Maharashtra)
///         .build())
///     .buyer(PartyBuilder::new("Coromandel Retail")
///         .state(State::Karnataka)
///         .build())
///     .add_item(LineItemBuilder::new("Steel fasteners")
///         .quantity(dec!(2))
///         .rate(dec!(100))
///         .build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.regime(), TaxRegime::InterState);
/// assert_eq!(invoice.totals().grand_total, dec!(236));
/// ```
pub struct InvoiceBuilder {
    number: String,
    date: NaiveDate,
    notes: Vec<String>,
    seller: Option<Party>,
    buyer: Option<Party>,
    items: Vec<LineItem>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            date,
            notes: Vec::new(),
            seller: None,
            buyer: None,
            items: Vec::new(),
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Build the invoice, running the levy pass and validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, BijakError> {
        if self.items.is_empty() {
            return Err(BijakError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(BijakError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }
        if self.notes.len() > 100 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 100 notes".into(),
            ));
        }

        let invoice = self.assemble()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing
    /// external data. The levy pass still runs.
    pub fn build_unchecked(self) -> Result<Invoice, BijakError> {
        self.assemble()
    }

    fn assemble(self) -> Result<Invoice, BijakError> {
        let seller = self
            .seller
            .ok_or_else(|| BijakError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| BijakError::Builder("buyer is required".into()))?;

        let mut invoice = Invoice {
            number: self.number,
            date: self.date,
            notes: self.notes,
            seller,
            buyer,
            items: self.items,
        };
        invoice.retax();
        Ok(invoice)
    }
}

/// Builder for Party (seller/buyer).
pub struct PartyBuilder {
    name: String,
    gstin: Option<String>,
    state: Option<State>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gstin: None,
            state: None,
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            gstin: self.gstin,
            state: self.state,
        }
    }
}

/// Builder for LineItem.
///
/// Defaults mirror a freshly added form row: quantity 1, rate 0,
/// 18% slab.
pub struct LineItemBuilder {
    description: String,
    quantity: Decimal,
    rate: Decimal,
    gst_rate: GstSlab,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity: Decimal::ONE,
            rate: Decimal::ZERO,
            gst_rate: GstSlab::Eighteen,
        }
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    pub fn gst_rate(mut self, slab: GstSlab) -> Self {
        self.gst_rate = slab;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem::new(self.description, self.quantity, self.rate, self.gst_rate)
    }
}
