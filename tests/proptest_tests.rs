//! Property-based tests for the GST levy and aggregation.

use bijak::core::*;
use bijak::gst::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Generate a reasonable rate (0.00 to 99999.99).
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

/// Generate a reasonable quantity (0 to 1000).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0u32..=1000u32).prop_map(Decimal::from)
}

fn arb_slab() -> impl Strategy<Value = GstSlab> {
    prop::sample::select(GstSlab::ALL.to_vec())
}

fn arb_regime() -> impl Strategy<Value = TaxRegime> {
    prop_oneof![Just(TaxRegime::IntraState), Just(TaxRegime::InterState)]
}

fn arb_state() -> impl Strategy<Value = State> {
    prop::sample::select(State::ALL.to_vec())
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_rate(), arb_slab()).prop_map(|(quantity, rate, slab)| {
        LineItemBuilder::new("Item")
            .quantity(quantity)
            .rate(rate)
            .gst_rate(slab)
            .build()
    })
}

fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_line(), 0..=8)
}

proptest! {
    /// Applying the levy twice yields exactly the once-applied line.
    #[test]
    fn recompute_is_idempotent(line in arb_line(), regime in arb_regime()) {
        let once = recompute_line(&line, regime);
        let twice = recompute_line(&once, regime);
        prop_assert_eq!(once, twice);
    }

    /// Intra-state halves are always equal, and the total levy matches
    /// the inter-state levy for the same line.
    #[test]
    fn regime_redistributes_without_changing_the_levy(line in arb_line()) {
        let intra = recompute_line(&line, TaxRegime::IntraState);
        let inter = recompute_line(&line, TaxRegime::InterState);

        prop_assert_eq!(intra.cgst, intra.sgst);
        prop_assert_eq!(intra.igst, Decimal::ZERO);
        prop_assert_eq!(inter.cgst, Decimal::ZERO);
        prop_assert_eq!(inter.sgst, Decimal::ZERO);
        prop_assert_eq!(intra.cgst + intra.sgst, inter.igst);
        prop_assert_eq!(intra.total, inter.total);
    }

    /// The line total is always quantity × rate, under either regime.
    #[test]
    fn total_is_quantity_times_rate(line in arb_line(), regime in arb_regime()) {
        let item = recompute_line(&line, regime);
        prop_assert_eq!(item.total, line.quantity * line.rate);
    }

    /// Aggregation is invariant under reordering of the items.
    #[test]
    fn aggregate_ignores_item_order(
        lines in arb_lines(),
        regime in arb_regime(),
        rotation in 0usize..8,
    ) {
        let items = recompute_lines(&lines, regime);

        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate(&reversed), aggregate(&items));

        let mut rotated = items.clone();
        if !rotated.is_empty() {
            let mid = rotation % rotated.len();
            rotated.rotate_left(mid);
        }
        prop_assert_eq!(aggregate(&rotated), aggregate(&items));
    }

    /// The grand total always decomposes into subtotal plus the tax
    /// components.
    #[test]
    fn grand_total_decomposes(lines in arb_lines(), regime in arb_regime()) {
        let totals = aggregate(&recompute_lines(&lines, regime));
        prop_assert_eq!(
            totals.grand_total,
            totals.subtotal + totals.total_cgst + totals.total_sgst + totals.total_igst
        );
    }

    /// Inter-state iff both states are set and differ.
    #[test]
    fn classification_truth_table(
        buyer in prop::option::of(arb_state()),
        seller in prop::option::of(arb_state()),
    ) {
        let expected = match (buyer, seller) {
            (Some(b), Some(s)) if b != s => TaxRegime::InterState,
            _ => TaxRegime::IntraState,
        };
        prop_assert_eq!(classify(buyer, seller), expected);
    }

    /// Freshly levied lines always satisfy the arithmetic validator.
    #[test]
    fn levied_invoice_passes_arithmetic(
        lines in prop::collection::vec(arb_line(), 1..=8),
        buyer in prop::option::of(arb_state()),
        seller in prop::option::of(arb_state()),
    ) {
        let mut seller_party = PartyBuilder::new("Seller").build();
        seller_party.state = seller;
        let mut buyer_party = PartyBuilder::new("Buyer").build();
        buyer_party.state = buyer;

        let mut builder = InvoiceBuilder::new(
            "INV/2024-25/900",
            chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
        .seller(seller_party)
        .buyer(buyer_party);
        for line in lines {
            builder = builder.add_item(line);
        }
        let invoice = builder.build_unchecked().unwrap();

        let errors = validate_arithmetic(&invoice);
        prop_assert!(errors.is_empty(), "arithmetic errors: {:?}", errors);
    }

    /// Display formatting always yields fixed two-decimal notation.
    #[test]
    fn formatted_amounts_have_two_decimals(line in arb_line(), regime in arb_regime()) {
        let item = recompute_line(&line, regime);
        for value in [item.total, item.cgst, item.sgst, item.igst] {
            let rendered = format_amount(value);
            let (_, frac) = rendered.split_once('.').expect("missing decimal point");
            prop_assert_eq!(frac.len(), 2, "rendered: {}", rendered);
        }
    }
}
