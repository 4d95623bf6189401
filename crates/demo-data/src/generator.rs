//! Deterministic user record generation.
//!
//! This module provides the core generation function that produces
//! reproducible user records. The same RNG seed always produces identical
//! output, and identifiers are sequential and zero-padded regardless of seed.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::profile::{
    BANKS, EDUCATION_LEVELS, EMPLOYMENT_SECTORS, EMPLOYMENT_STATUSES, GENDERS,
    GUARANTOR_RELATIONSHIPS, MARITAL_STATUSES, ORGANIZATIONS, RESIDENCE_TYPES, STATUSES,
};
use crate::seed::{GuarantorSeed, UserRecordSeed};

/// Minimum zero-padded width of the numeric identifier suffix.
const ID_PAD_WIDTH: usize = 3;

/// Exclusive upper bound on account balances.
const BALANCE_MAX: u64 = 1_000_000;

/// Inclusive lower and exclusive upper bound on the monthly income floor.
const INCOME_LOWER_RANGE: (u64, u64) = (50_000, 250_000);

/// Inclusive lower and exclusive upper bound on the monthly income ceiling.
const INCOME_UPPER_RANGE: (u64, u64) = (200_000, 600_000);

/// Inclusive lower and exclusive upper bound on monthly loan repayments.
const LOAN_REPAYMENT_RANGE: (u64, u64) = (10_000, 60_000);

/// Earliest join year for generated users.
const JOIN_YEAR_BASE: u32 = 2020;

/// Number of join years sampled from [`JOIN_YEAR_BASE`].
const JOIN_YEAR_SPAN: u32 = 4;

/// Generates `count` demo user records from the given RNG seed.
///
/// Identifiers are sequential (`user-001` through `user-NNN`) and every other
/// field is sampled independently: categorical fields from the fixed candidate
/// sets in [`crate::profile`], numeric fields from bounded ranges. Generation
/// is pure — no I/O — and deterministic for a given `rng_seed`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyCandidateSet`] if a candidate set is empty.
/// The built-in sets are never empty, so this only fires for future sets
/// plumbed in without values.
///
/// # Example
///
/// ```
/// use demo_data::generate_user_records;
///
/// let records = generate_user_records(5, 7).expect("generation succeeds");
/// assert_eq!(records.len(), 5);
/// assert_eq!(records[4].id, "user-005");
/// ```
pub fn generate_user_records(
    count: usize,
    rng_seed: u64,
) -> Result<Vec<UserRecordSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut records = Vec::with_capacity(count);

    for index in 1..=count {
        records.push(generate_single_record(&mut rng, index)?);
    }

    Ok(records)
}

/// Generates one record with the provided RNG and sequential index.
fn generate_single_record(
    rng: &mut ChaCha8Rng,
    index: usize,
) -> Result<UserRecordSeed, GenerationError> {
    let id = format!("user-{index:0ID_PAD_WIDTH$}");
    let full_name = generate_full_name(rng);
    let status = pick(rng, &STATUSES, "status")?;
    let (income_lower, income_upper) = generate_income_bounds(rng);

    Ok(UserRecordSeed {
        id,
        email: format!("user{index}@example.com"),
        phone_number: generate_phone_number(rng, "080"),
        full_name,
        username: format!("user{index}"),
        organization: pick(rng, &ORGANIZATIONS, "organization")?.to_owned(),
        date_joined: generate_join_date(rng),
        status,
        tier: rng.random_range(1..=3),
        account_balance: rng.random_range(0..BALANCE_MAX),
        bank_name: pick(rng, &BANKS, "bank")?.to_owned(),
        account_number: rng.random_range(1_000_000_000_u64..10_000_000_000).to_string(),
        bvn: rng.random_range(10_000_000_000_u64..100_000_000_000).to_string(),
        gender: pick(rng, &GENDERS, "gender")?.to_owned(),
        marital_status: pick(rng, &MARITAL_STATUSES, "marital status")?.to_owned(),
        children: rng.random_range(0..5),
        type_of_residence: pick(rng, &RESIDENCE_TYPES, "residence type")?.to_owned(),
        level_of_education: pick(rng, &EDUCATION_LEVELS, "education level")?.to_owned(),
        employment_status: pick(rng, &EMPLOYMENT_STATUSES, "employment status")?.to_owned(),
        sector_of_employment: pick(rng, &EMPLOYMENT_SECTORS, "employment sector")?.to_owned(),
        duration_of_employment: format!("{} years", rng.random_range(1..=10_u32)),
        office_email: format!("user{index}@lendbook.com"),
        monthly_income: (income_lower, income_upper),
        loan_repayment: rng.random_range(LOAN_REPAYMENT_RANGE.0..LOAN_REPAYMENT_RANGE.1),
        guarantor: generate_guarantor(rng, index)?,
    })
}

/// Generates a full name from the fake-name corpus.
fn generate_full_name(rng: &mut ChaCha8Rng) -> String {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    format!("{first} {last}")
}

/// Generates an eleven-digit phone number with the given network prefix.
fn generate_phone_number(rng: &mut ChaCha8Rng, prefix: &str) -> String {
    let suffix: u64 = rng.random_range(0..100_000_000);
    format!("{prefix}{suffix:08}")
}

/// Generates a join date within the bounded historical range as RFC 3339.
///
/// Days cap at 28 so every sampled month is valid.
fn generate_join_date(rng: &mut ChaCha8Rng) -> String {
    let year = JOIN_YEAR_BASE + rng.random_range(0..JOIN_YEAR_SPAN);
    let month = rng.random_range(1..=12_u32);
    let day = rng.random_range(1..=28_u32);
    format!("{year:04}-{month:02}-{day:02}T00:00:00.000Z")
}

/// Generates ordered monthly income bounds.
///
/// The sampled ranges overlap, so the pair is reordered to keep the lower
/// bound at or below the upper bound.
fn generate_income_bounds(rng: &mut ChaCha8Rng) -> (u64, u64) {
    let a = rng.random_range(INCOME_LOWER_RANGE.0..INCOME_LOWER_RANGE.1);
    let b = rng.random_range(INCOME_UPPER_RANGE.0..INCOME_UPPER_RANGE.1);
    (a.min(b), a.max(b))
}

/// Generates the guarantor attached to the record at `index`.
fn generate_guarantor(
    rng: &mut ChaCha8Rng,
    index: usize,
) -> Result<GuarantorSeed, GenerationError> {
    Ok(GuarantorSeed {
        full_name: generate_full_name(rng),
        phone_number: generate_phone_number(rng, "081"),
        email: format!("guarantor{index}@example.com"),
        relationship: pick(rng, &GUARANTOR_RELATIONSHIPS, "guarantor relationship")?.to_owned(),
    })
}

/// Samples one value from a candidate set.
fn pick<T: Copy>(
    rng: &mut ChaCha8Rng,
    items: &[T],
    field: &'static str,
) -> Result<T, GenerationError> {
    items
        .choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyCandidateSet { field })
}
