mod developer;
mod experience_tier;

pub use developer::{Developer, DeveloperDraft, DeveloperInput};
pub use experience_tier::ExperienceTier;
