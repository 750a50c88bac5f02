//! Tax rate policy.
//!
//! The store never hard-codes a rate; it asks a [`TaxRateProvider`] for the
//! percentage that matches a record's [`ExperienceTier`](crate::ExperienceTier).

mod provider;
mod rates;

pub use provider::TaxRateProvider;
pub use rates::{TaxRateError, TaxRates};
