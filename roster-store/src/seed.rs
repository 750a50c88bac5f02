use roster_core::ExperienceTier;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One example record inserted at startup. `gross_salary` is pre-tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedDeveloper {
    pub id: i32,
    pub name: &'static str,
    pub gross_salary: Decimal,
    pub experience: ExperienceTier,
}

/// Example records, one per tier.
pub const SEED_DEVELOPERS: [SeedDeveloper; 3] = [
    SeedDeveloper {
        id: 1,
        name: "Alice",
        gross_salary: dec!(10000),
        experience: ExperienceTier::Junior,
    },
    SeedDeveloper {
        id: 2,
        name: "Bob",
        gross_salary: dec!(20000),
        experience: ExperienceTier::Mid,
    },
    SeedDeveloper {
        id: 3,
        name: "Cem",
        gross_salary: dec!(30000),
        experience: ExperienceTier::Senior,
    },
];
