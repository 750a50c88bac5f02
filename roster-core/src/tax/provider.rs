use rust_decimal::Decimal;

use crate::models::ExperienceTier;

/// Supplies the three tier tax rates as percentages on a 0–100 scale.
///
/// Implementations are pure: the same provider returns the same rates for
/// the life of the process.
pub trait TaxRateProvider: Send + Sync {
    /// Rate applied to junior developers.
    fn simple_tax_rate(&self) -> Decimal;

    /// Rate applied to mid-level developers.
    fn middle_tax_rate(&self) -> Decimal;

    /// Rate applied to senior developers.
    fn upper_tax_rate(&self) -> Decimal;

    /// The rate that applies to `tier`.
    fn rate_for(
        &self,
        tier: ExperienceTier,
    ) -> Decimal {
        match tier {
            ExperienceTier::Junior => self.simple_tax_rate(),
            ExperienceTier::Mid => self.middle_tax_rate(),
            ExperienceTier::Senior => self.upper_tax_rate(),
        }
    }
}
