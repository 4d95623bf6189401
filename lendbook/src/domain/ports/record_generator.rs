//! Driven port over the demo-record source.
//!
//! The façade seeds the store exactly once through this port. Production
//! backs it with the demo-data generator adapter; tests can use the
//! deterministic fixture implementation below.

use thiserror::Error;

use crate::domain::user::{Guarantor, IncomeRange, Tier, User, UserId, UserStatus};

/// Errors raised by record generator adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The underlying generator failed to produce records.
    #[error("record generation failed: {message}")]
    Generation {
        /// Description of the generation failure.
        message: String,
    },
    /// A generated record did not satisfy domain invariants.
    #[error("generated record is invalid: {message}")]
    InvalidRecord {
        /// Description of the violated invariant.
        message: String,
    },
}

/// Produces the initial user collection for seeding.
///
/// Implementations must emit exactly `count` records with unique, sequential,
/// zero-padded identifiers and no side effects.
pub trait RecordGenerator: Send + Sync {
    /// Produce `count` user records.
    fn generate(&self, count: usize) -> Result<Vec<User>, SeedError>;
}

/// Deterministic formulaic generator used by unit tests.
///
/// Records are minimal but valid: identifiers follow the production
/// `user-NNN` shape and statuses cycle through every [`UserStatus`] value so
/// aggregate counts are predictable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecordGenerator;

impl RecordGenerator for FixtureRecordGenerator {
    fn generate(&self, count: usize) -> Result<Vec<User>, SeedError> {
        (1..=count).map(fixture_user).collect()
    }
}

fn fixture_user(index: usize) -> Result<User, SeedError> {
    let id = UserId::new(format!("user-{index:03}"))
        .map_err(|err| SeedError::InvalidRecord { message: err.to_string() })?;
    let status = UserStatus::ALL[(index - 1) % UserStatus::ALL.len()];
    let tier = Tier::new((index % usize::from(Tier::MAX)) as u8 + 1)
        .map_err(|err| SeedError::InvalidRecord { message: err.to_string() })?;
    let monthly_income = IncomeRange::new(100_000, 300_000)
        .map_err(|err| SeedError::InvalidRecord { message: err.to_string() })?;

    Ok(User {
        id,
        email: format!("user{index}@example.com"),
        phone_number: format!("080{index:08}"),
        full_name: format!("Fixture User {index}"),
        username: format!("user{index}"),
        organization: "Lendbook".to_owned(),
        date_joined: "2021-06-15T00:00:00.000Z".to_owned(),
        status,
        tier,
        account_balance: (index as u64) * 1_000,
        bank_name: "Providus Bank".to_owned(),
        account_number: format!("{:010}", 1_000_000_000_u64 + index as u64),
        bvn: format!("{:011}", 10_000_000_000_u64 + index as u64),
        gender: "Female".to_owned(),
        marital_status: "Single".to_owned(),
        children: 0,
        type_of_residence: "Rented Apartment".to_owned(),
        level_of_education: "B.Sc".to_owned(),
        employment_status: "Employed".to_owned(),
        sector_of_employment: "FinTech".to_owned(),
        duration_of_employment: "2 years".to_owned(),
        office_email: format!("user{index}@lendbook.com"),
        monthly_income,
        loan_repayment: 20_000,
        guarantor: Guarantor {
            full_name: format!("Fixture Guarantor {index}"),
            phone_number: format!("081{index:08}"),
            email: format!("guarantor{index}@example.com"),
            relationship: "Friend".to_owned(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_generator_emits_requested_count_with_sequential_ids() {
        let users = FixtureRecordGenerator.generate(12).expect("generated");
        assert_eq!(users.len(), 12);
        assert_eq!(users[0].id.as_ref(), "user-001");
        assert_eq!(users[11].id.as_ref(), "user-012");
    }

    #[test]
    fn fixture_statuses_cycle_through_every_value() {
        let users = FixtureRecordGenerator.generate(8).expect("generated");
        for status in UserStatus::ALL {
            assert_eq!(users.iter().filter(|u| u.status == status).count(), 2);
        }
    }
}
