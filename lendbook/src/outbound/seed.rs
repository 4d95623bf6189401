//! Record generator adapter over the demo-data crate.
//!
//! The demo-data crate is independent of this crate's domain types; seed
//! records are mapped into domain records here, at the point of use, so a
//! generator bug surfaces as a seeding error instead of corrupt state.

use demo_data::{StatusSeed, UserRecordSeed, generate_user_records};

use crate::domain::ports::record_generator::{RecordGenerator, SeedError};
use crate::domain::user::{Guarantor, IncomeRange, Tier, User, UserId, UserStatus};

/// RNG seed used when the caller does not supply one.
///
/// Any value works; fixing one keeps the demo dataset stable across fresh
/// stores so screenshots and walkthroughs stay reproducible.
pub const DEFAULT_RNG_SEED: u64 = 7_340;

/// Production [`RecordGenerator`] backed by the demo-data crate.
#[derive(Debug, Clone, Copy)]
pub struct DemoRecordGenerator {
    rng_seed: u64,
}

impl DemoRecordGenerator {
    /// Build a generator with an explicit RNG seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

impl Default for DemoRecordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RNG_SEED)
    }
}

impl RecordGenerator for DemoRecordGenerator {
    fn generate(&self, count: usize) -> Result<Vec<User>, SeedError> {
        let seeds =
            generate_user_records(count, self.rng_seed).map_err(|err| SeedError::Generation {
                message: err.to_string(),
            })?;
        seeds.into_iter().map(into_domain).collect()
    }
}

/// Maps one seed record into the domain record, enforcing domain invariants.
fn into_domain(seed: UserRecordSeed) -> Result<User, SeedError> {
    let invalid = |err: &dyn std::fmt::Display| SeedError::InvalidRecord {
        message: err.to_string(),
    };

    let id = UserId::new(&seed.id).map_err(|err| invalid(&err))?;
    let tier = Tier::new(seed.tier).map_err(|err| invalid(&err))?;
    let monthly_income = IncomeRange::new(seed.monthly_income.0, seed.monthly_income.1)
        .map_err(|err| invalid(&err))?;

    Ok(User {
        id,
        email: seed.email,
        phone_number: seed.phone_number,
        full_name: seed.full_name,
        username: seed.username,
        organization: seed.organization,
        date_joined: seed.date_joined,
        status: status_from_seed(seed.status),
        tier,
        account_balance: seed.account_balance,
        bank_name: seed.bank_name,
        account_number: seed.account_number,
        bvn: seed.bvn,
        gender: seed.gender,
        marital_status: seed.marital_status,
        children: seed.children,
        type_of_residence: seed.type_of_residence,
        level_of_education: seed.level_of_education,
        employment_status: seed.employment_status,
        sector_of_employment: seed.sector_of_employment,
        duration_of_employment: seed.duration_of_employment,
        office_email: seed.office_email,
        monthly_income,
        loan_repayment: seed.loan_repayment,
        guarantor: Guarantor {
            full_name: seed.guarantor.full_name,
            phone_number: seed.guarantor.phone_number,
            email: seed.guarantor.email,
            relationship: seed.guarantor.relationship,
        },
    })
}

const fn status_from_seed(status: StatusSeed) -> UserStatus {
    match status {
        StatusSeed::Active => UserStatus::Active,
        StatusSeed::Inactive => UserStatus::Inactive,
        StatusSeed::Pending => UserStatus::Pending,
        StatusSeed::Blacklisted => UserStatus::Blacklisted,
    }
}
