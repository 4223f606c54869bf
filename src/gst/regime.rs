//! Tax regime classification from the parties' states.

use crate::core::{State, TaxRegime};

/// Determine the tax regime from the buyer's and seller's states.
///
/// Inter-state only when both states are selected and differ. An
/// incomplete party (either state unset) classifies as intra-state:
/// never charge IGST on a form that is still being filled in. The
/// caller re-runs this whenever either state changes and then pushes
/// the result through [`recompute_lines`](super::recompute_lines) —
/// existing lines keep their old split until that pass runs.
///
/// Total over all inputs; no error cases.
pub fn classify(buyer_state: Option<State>, seller_state: Option<State>) -> TaxRegime {
    match (buyer_state, seller_state) {
        (Some(buyer), Some(seller)) if buyer != seller => TaxRegime::InterState,
        _ => TaxRegime::IntraState,
    }
}
