pub mod repository;

pub use repository::{DeveloperRepository, RepositoryError};
