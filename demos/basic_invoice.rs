use bijak::core::*;
use bijak::gst::format_amount;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    // A same-state sale: the levy splits into equal CGST and SGST halves.
    let mut seq = InvoiceNumberSequence::new("INV", 2024);

    let invoice = InvoiceBuilder::new(
        seq.next_number(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .seller(
        PartyBuilder::new("Deccan Traders Pvt Ltd")
            .gstin("27AAACD1234F1Z5")
            .state(State::Maharashtra)
            .build(),
    )
    .buyer(
        PartyBuilder::new("Coromandel Retail")
            .gstin("27AABCC5678G1Z3")
            .state(State::Maharashtra)
            .build(),
    )
    .add_item(
        LineItemBuilder::new("Laptop stand")
            .quantity(dec!(4))
            .rate(dec!(750))
            .gst_rate(GstSlab::Eighteen)
            .build(),
    )
    .add_item(
        LineItemBuilder::new("Packing and forwarding")
            .quantity(dec!(1))
            .rate(dec!(250))
            .gst_rate(GstSlab::Five)
            .build(),
    )
    .build()
    .expect("valid invoice");

    println!("Invoice {} ({})", invoice.number, invoice.date);
    println!("Regime: {:?}", invoice.regime());
    println!();

    for item in &invoice.items {
        println!(
            "{:<28} {:>3} x {:>9} = {:>10}  CGST {:>8}  SGST {:>8}",
            item.description,
            item.quantity,
            format_amount(item.rate),
            format_amount(item.total),
            format_amount(item.cgst),
            format_amount(item.sgst),
        );
    }

    let totals = invoice.totals();
    println!();
    println!("Subtotal:    {}", format_amount(totals.subtotal));
    println!("Total CGST:  {}", format_amount(totals.total_cgst));
    println!("Total SGST:  {}", format_amount(totals.total_sgst));
    println!("Grand total: {}", format_amount(totals.grand_total));
}
