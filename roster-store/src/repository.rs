use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{
    Developer, DeveloperDraft, DeveloperInput, DeveloperRepository, RepositoryError,
    TaxRateProvider, compute_net,
};
use tracing::{debug, info, warn};

use crate::seed::SEED_DEVELOPERS;

/// Developer records keyed by id, with net salaries derived from the
/// injected [`TaxRateProvider`].
///
/// Each operation takes the map lock exactly once, so readers never observe
/// a half-applied write.
pub struct DeveloperStore {
    rates: Arc<dyn TaxRateProvider>,
    developers: RwLock<HashMap<i32, Developer>>,
}

impl DeveloperStore {
    /// An empty store.
    pub fn new(rates: Arc<dyn TaxRateProvider>) -> Self {
        Self {
            rates,
            developers: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-populated with [`SEED_DEVELOPERS`].
    pub fn seeded(rates: Arc<dyn TaxRateProvider>) -> Self {
        let store = Self::new(rates);
        {
            let mut developers = store.developers.write();
            for seed in &SEED_DEVELOPERS {
                let developer = store.build(
                    seed.id,
                    DeveloperDraft {
                        name: seed.name.to_string(),
                        gross_salary: seed.gross_salary,
                        experience: seed.experience,
                    },
                );
                developers.insert(developer.id, developer);
            }
        }
        info!(count = SEED_DEVELOPERS.len(), "seeded developer store");
        store
    }

    pub fn len(&self) -> usize {
        self.developers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.developers.read().is_empty()
    }

    fn build(
        &self,
        id: i32,
        draft: DeveloperDraft,
    ) -> Developer {
        let rate = self.rates.rate_for(draft.experience);
        Developer {
            id,
            name: draft.name,
            salary: compute_net(draft.gross_salary, rate),
            experience: draft.experience,
        }
    }
}

fn rejected<T>(
    operation: &'static str,
    result: Result<T, RepositoryError>,
) -> Result<T, RepositoryError> {
    if let Err(error) = &result {
        warn!(operation, %error, "developer input rejected");
    }
    result
}

#[async_trait]
impl DeveloperRepository for DeveloperStore {
    async fn list_developers(&self) -> Result<Vec<Developer>, RepositoryError> {
        let developers: Vec<Developer> = self.developers.read().values().cloned().collect();
        debug!(count = developers.len(), "listed developers");
        Ok(developers)
    }

    async fn get_developer(
        &self,
        id: i32,
    ) -> Result<Developer, RepositoryError> {
        debug!(id, "get developer");
        self.developers
            .read()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create_developer(
        &self,
        input: DeveloperInput,
    ) -> Result<Developer, RepositoryError> {
        let id = rejected("create", input.require_id())?;
        let draft = rejected("create", input.into_draft())?;
        let developer = self.build(id, draft);

        let replaced = self
            .developers
            .write()
            .insert(id, developer.clone())
            .is_some();

        info!(id, experience = %developer.experience, replaced, "created developer");
        Ok(developer)
    }

    async fn update_developer(
        &self,
        id: i32,
        input: DeveloperInput,
    ) -> Result<Developer, RepositoryError> {
        let draft = input.into_draft();

        let mut developers = self.developers.write();
        if !developers.contains_key(&id) {
            debug!(id, "update of unknown developer");
            return Err(RepositoryError::NotFound);
        }
        let developer = self.build(id, rejected("update", draft)?);
        developers.insert(id, developer.clone());
        drop(developers);

        info!(id, experience = %developer.experience, "updated developer");
        Ok(developer)
    }

    async fn delete_developer(
        &self,
        id: i32,
    ) -> Result<(), RepositoryError> {
        match self.developers.write().remove(&id) {
            Some(_) => {
                info!(id, "deleted developer");
                Ok(())
            }
            None => {
                debug!(id, "delete of unknown developer");
                Err(RepositoryError::NotFound)
            }
        }
    }
}
