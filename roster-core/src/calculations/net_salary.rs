//! Gross-to-net salary conversion.

use rust_decimal::Decimal;

/// Deducts `rate` percent of `gross` and returns what remains.
///
/// `rate` is on a 0–100 scale (`15` means 15%). No bound is enforced here;
/// rates are validated when they are configured.
///
/// The rate is scaled to a fraction before multiplying, which is exact in
/// decimal arithmetic and keeps the intermediate product no larger than
/// `gross` for in-range rates.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roster_core::calculations::compute_net;
///
/// assert_eq!(compute_net(dec!(10000), dec!(15)), dec!(8500));
/// assert_eq!(compute_net(dec!(20000), dec!(25)), dec!(15000));
/// assert_eq!(compute_net(dec!(30000), dec!(35)), dec!(19500));
/// ```
pub fn compute_net(
    gross: Decimal,
    rate: Decimal,
) -> Decimal {
    gross - gross * (rate / Decimal::ONE_HUNDRED)
}
