use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority bracket of a developer. Selects which tax rate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceTier {
    Junior,
    Mid,
    Senior,
}

impl ExperienceTier {
    pub fn all() -> &'static [ExperienceTier] {
        &[Self::Junior, Self::Mid, Self::Senior]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "JUNIOR",
            Self::Mid => "MID",
            Self::Senior => "SENIOR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "JUNIOR" => Some(Self::Junior),
            "MID" => Some(Self::Mid),
            "SENIOR" => Some(Self::Senior),
            _ => None,
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
