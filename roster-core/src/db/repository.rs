use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Developer, DeveloperInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown experience tier: '{0}'")]
    UnknownTier(String),
}

/// CRUD surface over developer records.
///
/// Writes take the caller's gross salary and store the net figure; reads
/// only ever see net salaries.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Every current record, in no particular order.
    async fn list_developers(&self) -> Result<Vec<Developer>, RepositoryError>;

    async fn get_developer(&self, id: i32) -> Result<Developer, RepositoryError>;

    /// Inserts a record under the input's id, replacing any record already
    /// stored there.
    async fn create_developer(
        &self,
        input: DeveloperInput,
    ) -> Result<Developer, RepositoryError>;

    /// Replaces the record at `id` wholesale. The input's own `id` is ignored.
    async fn update_developer(
        &self,
        id: i32,
        input: DeveloperInput,
    ) -> Result<Developer, RepositoryError>;

    async fn delete_developer(&self, id: i32) -> Result<(), RepositoryError>;
}
