use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::RepositoryError;
use crate::models::ExperienceTier;

/// A stored developer record.
///
/// `salary` is always the net (post-tax) amount. The gross figure supplied
/// by the caller is consumed when the record is built and never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub experience: ExperienceTier,
}

/// Candidate body for create and update requests.
///
/// Every field is optional so that a missing value surfaces as
/// [`RepositoryError::InvalidInput`] rather than a deserialisation failure,
/// and `experience` stays a raw string so an unrecognised tier can be told
/// apart from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperInput {
    pub id: Option<i32>,
    pub name: Option<String>,
    /// Gross (pre-tax) salary.
    pub salary: Option<Decimal>,
    pub experience: Option<String>,
}

/// A validated candidate: every field present and the tier resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperDraft {
    pub name: String,
    pub gross_salary: Decimal,
    pub experience: ExperienceTier,
}

impl DeveloperInput {
    /// The body id, required on create.
    pub fn require_id(&self) -> Result<i32, RepositoryError> {
        self.id
            .ok_or_else(|| RepositoryError::InvalidInput("id is required".to_string()))
    }

    /// Checks the fields shared by create and update and resolves the tier.
    ///
    /// Missing fields are reported before the tier is parsed, so an
    /// [`RepositoryError::UnknownTier`] always means the value was present
    /// but outside the enumeration.
    pub fn into_draft(self) -> Result<DeveloperDraft, RepositoryError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(RepositoryError::InvalidInput(
                    "name must not be blank".to_string(),
                ));
            }
        };
        let gross_salary = self
            .salary
            .ok_or_else(|| RepositoryError::InvalidInput("salary is required".to_string()))?;
        let code = self
            .experience
            .ok_or_else(|| RepositoryError::InvalidInput("experience is required".to_string()))?;
        let experience =
            ExperienceTier::parse(&code).ok_or(RepositoryError::UnknownTier(code))?;

        Ok(DeveloperDraft {
            name,
            gross_salary,
            experience,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn complete_input() -> DeveloperInput {
        DeveloperInput {
            id: Some(4),
            name: Some("Dan".to_string()),
            salary: Some(dec!(12000)),
            experience: Some("JUNIOR".to_string()),
        }
    }

    #[test]
    fn into_draft_resolves_tier() {
        let draft = complete_input().into_draft().unwrap();

        assert_eq!(
            draft,
            DeveloperDraft {
                name: "Dan".to_string(),
                gross_salary: dec!(12000),
                experience: ExperienceTier::Junior,
            }
        );
    }

    #[test]
    fn into_draft_rejects_missing_name() {
        let input = DeveloperInput {
            name: None,
            ..complete_input()
        };

        assert!(matches!(
            input.into_draft(),
            Err(RepositoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn into_draft_rejects_blank_name() {
        let input = DeveloperInput {
            name: Some("   ".to_string()),
            ..complete_input()
        };

        assert!(matches!(
            input.into_draft(),
            Err(RepositoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn into_draft_rejects_missing_salary() {
        let input = DeveloperInput {
            salary: None,
            ..complete_input()
        };

        assert_eq!(
            input.into_draft(),
            Err(RepositoryError::InvalidInput("salary is required".to_string()))
        );
    }

    #[test]
    fn into_draft_rejects_missing_experience() {
        let input = DeveloperInput {
            experience: None,
            ..complete_input()
        };

        assert_eq!(
            input.into_draft(),
            Err(RepositoryError::InvalidInput("experience is required".to_string()))
        );
    }

    #[test]
    fn into_draft_reports_unknown_tier() {
        let input = DeveloperInput {
            experience: Some("PRINCIPAL".to_string()),
            ..complete_input()
        };

        assert_eq!(
            input.into_draft(),
            Err(RepositoryError::UnknownTier("PRINCIPAL".to_string()))
        );
    }

    #[test]
    fn missing_field_wins_over_unknown_tier() {
        let input = DeveloperInput {
            salary: None,
            experience: Some("PRINCIPAL".to_string()),
            ..complete_input()
        };

        assert!(matches!(
            input.into_draft(),
            Err(RepositoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn into_draft_does_not_need_an_id() {
        let input = DeveloperInput {
            id: None,
            ..complete_input()
        };

        assert!(input.into_draft().is_ok());
    }

    #[test]
    fn require_id_reports_missing_id() {
        let input = DeveloperInput {
            id: None,
            ..complete_input()
        };

        assert!(matches!(
            input.require_id(),
            Err(RepositoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn input_deserializes_with_absent_fields() {
        let input: DeveloperInput = serde_json::from_str(r#"{"name":"Eve"}"#).unwrap();

        assert_eq!(
            input,
            DeveloperInput {
                name: Some("Eve".to_string()),
                ..DeveloperInput::default()
            }
        );
    }

    #[test]
    fn input_accepts_numeric_salary() {
        let input: DeveloperInput =
            serde_json::from_str(r#"{"id":1,"name":"Eve","salary":12000.5,"experience":"MID"}"#)
                .unwrap();

        assert_eq!(input.salary, Some(dec!(12000.5)));
    }

    #[test]
    fn developer_serializes_salary_as_number() {
        let developer = Developer {
            id: 1,
            name: "Alice".to_string(),
            salary: dec!(8500),
            experience: ExperienceTier::Junior,
        };

        let value = serde_json::to_value(&developer).unwrap();

        assert_eq!(value["salary"], serde_json::json!(8500.0));
        assert_eq!(value["experience"], "JUNIOR");
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["id"], 1);
    }
}
