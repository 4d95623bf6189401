//! User record model.
//!
//! The record mirrors the collection the console persists: camelCase field
//! names on the wire, with validating newtypes for the fields that carry
//! invariants (identifier, status, tier, income bounds). Everything else is
//! demo display data and stays as plain strings and integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised by the user record's constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier carried surrounding whitespace.
    #[error("user id must not have surrounding whitespace")]
    IdSurroundingWhitespace,
    /// The tier fell outside the supported band.
    #[error("tier must be between {min} and {max}, got {value}", min = Tier::MIN, max = Tier::MAX)]
    TierOutOfRange {
        /// The rejected tier value.
        value: u8,
    },
    /// The income bounds were out of order.
    #[error("monthly income lower bound {lower} exceeds upper bound {upper}")]
    IncomeBoundsOutOfOrder {
        /// The rejected lower bound.
        lower: u64,
        /// The rejected upper bound.
        upper: u64,
    },
}

/// Stable, opaque user identifier.
///
/// ## Invariants
/// - Non-empty.
/// - No surrounding whitespace.
/// - Immutable after creation; uniqueness within a collection is the record
///   generator's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::IdSurroundingWhitespace);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Account standing of a user.
///
/// Serialises as the PascalCase strings the console persists. Every status is
/// reachable from every other; transitions are driven exclusively by the
/// façade's status update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    /// Account is in good standing.
    Active,
    /// Account is dormant.
    Inactive,
    /// Account is awaiting review.
    Pending,
    /// Account has been blacklisted.
    Blacklisted,
}

impl UserStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Inactive, Self::Pending, Self::Blacklisted];
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Blacklisted => "Blacklisted",
        };
        f.write_str(label)
    }
}

/// Account tier.
///
/// ## Invariants
/// - Value lies within `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    /// Lowest supported tier.
    pub const MIN: u8 = 1;
    /// Highest supported tier.
    pub const MAX: u8 = 3;

    /// Validate and construct a [`Tier`].
    pub const fn new(value: u8) -> Result<Self, UserValidationError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(UserValidationError::TierOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// The tier value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<Tier> for u8 {
    fn from(value: Tier) -> Self {
        value.0
    }
}

impl TryFrom<u8> for Tier {
    type Error = UserValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Monthly income bounds, `[lower, upper]` on the wire.
///
/// ## Invariants
/// - `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u64, u64)", into = "(u64, u64)")]
pub struct IncomeRange {
    lower: u64,
    upper: u64,
}

impl IncomeRange {
    /// Validate and construct an [`IncomeRange`].
    pub const fn new(lower: u64, upper: u64) -> Result<Self, UserValidationError> {
        if lower > upper {
            return Err(UserValidationError::IncomeBoundsOutOfOrder { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower monthly income bound.
    #[must_use]
    pub const fn lower(self) -> u64 {
        self.lower
    }

    /// Upper monthly income bound.
    #[must_use]
    pub const fn upper(self) -> u64 {
        self.upper
    }
}

impl From<IncomeRange> for (u64, u64) {
    fn from(value: IncomeRange) -> Self {
        (value.lower, value.upper)
    }
}

impl TryFrom<(u64, u64)> for IncomeRange {
    type Error = UserValidationError;

    fn try_from(value: (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

/// Guarantor details attached to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    /// Guarantor's full name.
    pub full_name: String,
    /// Guarantor's phone number.
    pub phone_number: String,
    /// Guarantor's email address.
    pub email: String,
    /// Relationship between guarantor and user.
    pub relationship: String,
}

/// One user record as rendered by the console.
///
/// ## Invariants
/// - `id` is unique within the collection and immutable after creation.
/// - `status` is always one of the four [`UserStatus`] values.
/// - `monthly_income` bounds are ordered.
///
/// The remaining fields carry no cross-field consistency: this is demo
/// display data, not a model of real financial relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Full name.
    pub full_name: String,
    /// Login username.
    pub username: String,
    /// Organisation the user belongs to.
    pub organization: String,
    /// RFC 3339 timestamp of when the user joined.
    pub date_joined: String,
    /// Account standing.
    pub status: UserStatus,
    /// Account tier.
    pub tier: Tier,
    /// Current account balance.
    pub account_balance: u64,
    /// Name of the user's bank.
    pub bank_name: String,
    /// Bank account number.
    pub account_number: String,
    /// Bank verification number.
    pub bvn: String,
    /// Gender.
    pub gender: String,
    /// Marital status.
    pub marital_status: String,
    /// Number of children.
    pub children: u8,
    /// Type of residence.
    pub type_of_residence: String,
    /// Highest level of education.
    pub level_of_education: String,
    /// Employment status.
    pub employment_status: String,
    /// Sector of employment.
    pub sector_of_employment: String,
    /// Duration of current employment.
    pub duration_of_employment: String,
    /// Work email address.
    pub office_email: String,
    /// Monthly income bounds.
    pub monthly_income: IncomeRange,
    /// Monthly loan repayment amount.
    pub loan_repayment: u64,
    /// Guarantor details.
    pub guarantor: Guarantor,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case(" user-001", UserValidationError::IdSurroundingWhitespace)]
    #[case("user-001 ", UserValidationError::IdSurroundingWhitespace)]
    fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        let err = UserId::new(raw).expect_err("invalid id must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn user_id_round_trips_through_serde() {
        let id = UserId::new("user-042").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"user-042\"");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }

    #[test]
    fn user_status_serializes_as_pascal_case_string() {
        let json = serde_json::to_string(&UserStatus::Blacklisted).expect("serialize");
        assert_eq!(json, "\"Blacklisted\"");
    }

    #[test]
    fn user_status_displays_its_label() {
        assert_eq!(UserStatus::Pending.to_string(), "Pending");
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn tier_rejects_out_of_band_values(#[case] value: u8) {
        let err = Tier::new(value).expect_err("out-of-band tier must fail");
        assert_eq!(err, UserValidationError::TierOutOfRange { value });
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn tier_accepts_supported_band(#[case] value: u8) {
        let tier = Tier::new(value).expect("supported tier");
        assert_eq!(tier.get(), value);
    }

    #[test]
    fn income_range_rejects_unordered_bounds() {
        let err = IncomeRange::new(300_000, 200_000).expect_err("unordered bounds must fail");
        assert_eq!(
            err,
            UserValidationError::IncomeBoundsOutOfOrder {
                lower: 300_000,
                upper: 200_000
            }
        );
    }

    #[test]
    fn income_range_serializes_as_two_element_array() {
        let range = IncomeRange::new(120_000, 380_000).expect("ordered bounds");
        let json = serde_json::to_string(&range).expect("serialize");
        assert_eq!(json, "[120000,380000]");
        let parsed: IncomeRange = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, range);
    }

    #[test]
    fn income_range_deserialization_enforces_ordering() {
        let result: Result<IncomeRange, _> = serde_json::from_str("[500000,100000]");
        assert!(result.is_err());
    }
}
