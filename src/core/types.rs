use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::states::State;
use crate::gst;

/// Invoice — the top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number (free text; see [`InvoiceNumberSequence`] for
    /// fiscal-year sequences).
    ///
    /// [`InvoiceNumberSequence`]: super::InvoiceNumberSequence
    pub number: String,
    /// Invoice issue date.
    pub date: NaiveDate,
    /// Note / free text.
    pub notes: Vec<String>,
    /// Seller (supplier).
    pub seller: Party,
    /// Buyer (recipient).
    pub buyer: Party,
    /// Invoice lines. Computed fields are filled by the levy pass.
    pub items: Vec<LineItem>,
}

impl Invoice {
    /// Tax regime implied by the parties right now.
    ///
    /// Derived on every call — never cached, so it cannot drift when a
    /// party's state changes.
    pub fn regime(&self) -> TaxRegime {
        gst::classify(self.buyer.state, self.seller.state)
    }

    /// Invoice totals, recomputed from the current item list.
    ///
    /// A pure projection: there is no stored totals field to diverge
    /// from the lines.
    pub fn totals(&self) -> InvoiceTotals {
        gst::aggregate(&self.items)
    }

    /// Re-run the levy pass over every line under the current regime.
    ///
    /// The regime is not auto-propagated into lines when a party's state
    /// changes; the host calls this after any such change to bring all
    /// stored tax splits back in line.
    pub fn retax(&mut self) {
        let regime = self.regime();
        self.items = gst::recompute_lines(&self.items, regime);
    }
}

/// Party (seller or buyer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Company name.
    pub name: String,
    /// GST registration number, carried verbatim.
    pub gstin: Option<String>,
    /// State of registration. `None` until selected on the form.
    pub state: Option<State>,
}

/// Invoice line item.
///
/// `total`, `cgst`, `sgst` and `igst` are computed fields, filled by
/// [`recompute_line`](crate::gst::recompute_line). A fresh line starts
/// with them at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description.
    pub description: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Price per unit.
    pub rate: Decimal,
    /// GST slab for this line.
    pub gst_rate: GstSlab,
    /// Line total = quantity × rate.
    pub total: Decimal,
    /// Central GST amount (intra-state only).
    pub cgst: Decimal,
    /// State GST amount (intra-state only).
    pub sgst: Decimal,
    /// Integrated GST amount (inter-state only).
    pub igst: Decimal,
}

impl LineItem {
    /// New line with zeroed computed fields.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        gst_rate: GstSlab,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            gst_rate,
            total: Decimal::ZERO,
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: Decimal::ZERO,
        }
    }

    /// Total GST charged on this line under either regime.
    pub fn tax_amount(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}

impl Default for LineItem {
    /// The row the form inserts on "add item": quantity 1, rate 0,
    /// 18% slab.
    fn default() -> Self {
        Self::new("", Decimal::ONE, Decimal::ZERO, GstSlab::Eighteen)
    }
}

/// GST slab — the closed set of rates a line item may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// 5% — reduced rate.
    Five,
    /// 12% — standard rate.
    Twelve,
    /// 18% — higher rate (form default).
    Eighteen,
    /// 28% — luxury rate.
    TwentyEight,
}

impl GstSlab {
    /// All slabs, in dropdown order.
    pub const ALL: [GstSlab; 4] = [Self::Five, Self::Twelve, Self::Eighteen, Self::TwentyEight];

    /// Rate as a percentage.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Five => Decimal::from(5),
            Self::Twelve => Decimal::from(12),
            Self::Eighteen => Decimal::from(18),
            Self::TwentyEight => Decimal::from(28),
        }
    }

    /// Parse from a whole percentage.
    pub fn from_percent(percent: u32) -> Option<Self> {
        match percent {
            5 => Some(Self::Five),
            12 => Some(Self::Twelve),
            18 => Some(Self::Eighteen),
            28 => Some(Self::TwentyEight),
            _ => None,
        }
    }
}

/// Tax regime governing which GST components apply.
///
/// Derived from the parties' states and never stored independently —
/// see [`classify`](crate::gst::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Buyer and seller in the same state (or either unset):
    /// CGST + SGST, in equal halves.
    IntraState,
    /// Buyer and seller in different states: IGST only.
    InterState,
}

/// Invoice totals — a projection over the line items, recomputed on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line totals, before tax.
    pub subtotal: Decimal,
    /// Sum of CGST amounts.
    pub total_cgst: Decimal,
    /// Sum of SGST amounts.
    pub total_sgst: Decimal,
    /// Sum of IGST amounts.
    pub total_igst: Decimal,
    /// subtotal + CGST + SGST + IGST.
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    /// Total GST across all components.
    pub fn total_tax(&self) -> Decimal {
        self.total_cgst + self.total_sgst + self.total_igst
    }
}
