//! In-memory developer store.
//!
//! [`DeveloperStore`] keeps every record in a lock-guarded map for the life
//! of the process. Nothing is persisted.

mod repository;
mod seed;

pub use repository::DeveloperStore;
pub use seed::{SEED_DEVELOPERS, SeedDeveloper};
