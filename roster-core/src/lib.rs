pub mod calculations;
pub mod db;
pub mod models;
pub mod tax;

pub use calculations::compute_net;
pub use db::repository::{DeveloperRepository, RepositoryError};
pub use models::*;
pub use tax::{TaxRateError, TaxRateProvider, TaxRates};
