//! Candidate value sets for categorical record fields.
//!
//! Each generated record samples these sets independently; no cross-field
//! consistency is enforced. The data exists to populate a believable demo
//! dataset, not to model real financial relationships.

use crate::seed::StatusSeed;

/// Account standings a generated user may hold.
pub(crate) const STATUSES: [StatusSeed; 4] = [
    StatusSeed::Active,
    StatusSeed::Inactive,
    StatusSeed::Pending,
    StatusSeed::Blacklisted,
];

/// Organisations a generated user may belong to.
pub const ORGANIZATIONS: [&str; 3] = ["Lendbook", "Irorun", "Altfund"];

/// Genders sampled for generated users.
pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// Marital statuses sampled for generated users.
pub const MARITAL_STATUSES: [&str; 4] = ["Single", "Married", "Divorced", "Widowed"];

/// Education levels sampled for generated users.
pub const EDUCATION_LEVELS: [&str; 5] = ["B.Sc", "M.Sc", "Ph.D", "HND", "OND"];

/// Employment statuses sampled for generated users.
pub const EMPLOYMENT_STATUSES: [&str; 3] = ["Employed", "Unemployed", "Self-employed"];

/// Employment sectors sampled for generated users.
pub const EMPLOYMENT_SECTORS: [&str; 5] =
    ["FinTech", "Agriculture", "Real Estate", "Education", "Health"];

/// Banks sampled for generated users.
pub const BANKS: [&str; 3] = ["Providus Bank", "Sterling Bank", "Union Trust Bank"];

/// Residence types sampled for generated users.
pub const RESIDENCE_TYPES: [&str; 4] = [
    "Parent's Apartment",
    "Own Apartment",
    "Rented Apartment",
    "Shared Apartment",
];

/// Guarantor relationships sampled for generated users.
pub const GUARANTOR_RELATIONSHIPS: [&str; 4] = ["Friend", "Sibling", "Colleague", "Cousin"];
