//! Rate/tax arithmetic for a single bill.

use serde::{Deserialize, Serialize};

use bunai_core::ValueObject;

/// Monetary breakdown of a bill.
///
/// Values carry full `f64` precision; rounding to the 2-decimal display
/// precision happens only at the presentation boundary, so stored totals
/// stay exact under addition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillAmounts {
    pub base_amount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
}

impl ValueObject for BillAmounts {}

/// Compute the amounts for a bill.
///
/// Total over well-formed input. The preconditions (`meter > 0`,
/// `price_rate > 0`, `tax_percentage >= 0`, all finite) are enforced by the
/// bill aggregate or the form layer before this is called; they are
/// asserted here in debug builds rather than left to NaN propagation.
pub fn compute_amounts(meter: f64, price_rate: f64, tax_percentage: f64) -> BillAmounts {
    debug_assert!(meter.is_finite() && meter > 0.0);
    debug_assert!(price_rate.is_finite() && price_rate > 0.0);
    debug_assert!(tax_percentage.is_finite() && tax_percentage >= 0.0);

    let base_amount = meter * price_rate;
    let tax_amount = base_amount * tax_percentage / 100.0;
    BillAmounts {
        base_amount,
        tax_amount,
        total_amount: base_amount + tax_amount,
    }
}
