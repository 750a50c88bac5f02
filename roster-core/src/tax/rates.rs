use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TaxRateProvider;
use crate::models::ExperienceTier;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxRateError {
    #[error("{tier} tax rate {rate} is outside 0..=100")]
    OutOfRange { tier: ExperienceTier, rate: Decimal },
}

/// Fixed per-deployment tax rates, typically read from configuration.
///
/// Missing keys fall back to the defaults (15 / 25 / 35).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRates {
    pub simple: Decimal,
    pub middle: Decimal,
    pub upper: Decimal,
}

impl TaxRates {
    pub fn new(
        simple: Decimal,
        middle: Decimal,
        upper: Decimal,
    ) -> Self {
        Self {
            simple,
            middle,
            upper,
        }
    }

    /// Rejects any rate that is not a percentage in `[0, 100]`.
    pub fn validate(&self) -> Result<(), TaxRateError> {
        for tier in ExperienceTier::all() {
            let rate = self.rate_for(*tier);
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(TaxRateError::OutOfRange { tier: *tier, rate });
            }
        }
        Ok(())
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        Self::new(dec!(15), dec!(25), dec!(35))
    }
}

impl TaxRateProvider for TaxRates {
    fn simple_tax_rate(&self) -> Decimal {
        self.simple
    }

    fn middle_tax_rate(&self) -> Decimal {
        self.middle
    }

    fn upper_tax_rate(&self) -> Decimal {
        self.upper
    }
}
