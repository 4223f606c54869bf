use bijak::core::*;
use bijak::gst::format_amount;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    // Buyer and seller in different states: the whole levy lands in IGST.
    let mut invoice = InvoiceBuilder::new(
        "INV/2024-25/002",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .seller(
        PartyBuilder::new("Deccan Traders Pvt Ltd")
            .gstin("27AAACD1234F1Z5")
            .state(State::Maharashtra)
            .build(),
    )
    .buyer(
        PartyBuilder::new("Hooghly Mills")
            .gstin("19AADCH9988E1Z2")
            .state(State::WestBengal)
            .build(),
    )
    .add_item(
        LineItemBuilder::new("Jute spindles")
            .quantity(dec!(12))
            .rate(dec!(480))
            .gst_rate(GstSlab::Twelve)
            .build(),
    )
    .build()
    .expect("valid invoice");

    let totals = invoice.totals();
    println!("Regime: {:?}", invoice.regime());
    println!("Subtotal:    {}", format_amount(totals.subtotal));
    println!("Total IGST:  {}", format_amount(totals.total_igst));
    println!("Grand total: {}", format_amount(totals.grand_total));

    // The buyer re-registers in the seller's state. Stored lines keep
    // their old split until the host runs the explicit recompute pass.
    invoice.buyer.state = Some(State::Maharashtra);
    invoice.retax();

    let totals = invoice.totals();
    println!();
    println!("After re-registration: {:?}", invoice.regime());
    println!("Total CGST:  {}", format_amount(totals.total_cgst));
    println!("Total SGST:  {}", format_amount(totals.total_sgst));
    println!("Grand total: {}", format_amount(totals.grand_total));
}
