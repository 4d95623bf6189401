//! Generated user record types.
//!
//! This module defines the output types from record generation. These types
//! mirror the console's domain model without depending on it, and serialise
//! with the same camelCase layout the console persists.

use serde::{Deserialize, Serialize};

/// Account standing of a generated user.
///
/// Mirrors the console's `UserStatus` enum without creating a dependency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusSeed {
    /// Account is in good standing.
    #[default]
    Active,
    /// Account is dormant.
    Inactive,
    /// Account is awaiting review.
    Pending,
    /// Account has been blacklisted.
    Blacklisted,
}

/// Guarantor details attached to a generated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuarantorSeed {
    /// Guarantor's full name.
    pub full_name: String,
    /// Guarantor's phone number.
    pub phone_number: String,
    /// Guarantor's email address.
    pub email: String,
    /// Relationship between guarantor and user.
    pub relationship: String,
}

/// A generated demo user record.
///
/// Contains every field the console's user record carries. It is designed to
/// be converted into console domain types at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordSeed {
    /// Sequential, zero-padded identifier (`user-001`, `user-002`, …).
    pub id: String,
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
    pub status: StatusSeed,
    /// Account tier, 1 through 3.
    pub tier: u8,
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
    /// Monthly income bounds as `[lower, upper]`.
    pub monthly_income: (u64, u64),
    /// Monthly loan repayment amount.
    pub loan_repayment: u64,
    /// Guarantor details.
    pub guarantor: GuarantorSeed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecordSeed {
        UserRecordSeed {
            id: "user-001".to_owned(),
            email: "user1@example.com".to_owned(),
            phone_number: "08012345678".to_owned(),
            full_name: "Ada Lovelace".to_owned(),
            username: "user1".to_owned(),
            organization: "Lendbook".to_owned(),
            date_joined: "2021-04-12T00:00:00.000Z".to_owned(),
            status: StatusSeed::Active,
            tier: 2,
            account_balance: 125_000,
            bank_name: "Providus Bank".to_owned(),
            account_number: "1234567890".to_owned(),
            bvn: "12345678901".to_owned(),
            gender: "Female".to_owned(),
            marital_status: "Single".to_owned(),
            children: 0,
            type_of_residence: "Rented Apartment".to_owned(),
            level_of_education: "M.Sc".to_owned(),
            employment_status: "Employed".to_owned(),
            sector_of_employment: "FinTech".to_owned(),
            duration_of_employment: "3 years".to_owned(),
            office_email: "user1@lendbook.com".to_owned(),
            monthly_income: (120_000, 380_000),
            loan_repayment: 24_000,
            guarantor: GuarantorSeed {
                full_name: "Grace Hopper".to_owned(),
                phone_number: "08123456789".to_owned(),
                email: "guarantor1@example.com".to_owned(),
                relationship: "Friend".to_owned(),
            },
        }
    }

    #[test]
    fn status_seed_serializes_as_pascal_case_string() {
        let json = serde_json::to_string(&StatusSeed::Blacklisted).expect("serialize");
        assert_eq!(json, "\"Blacklisted\"");
    }

    #[test]
    fn record_serializes_to_camel_case() {
        let json = serde_json::to_string(&sample_record()).expect("serialize");
        assert!(json.contains("phoneNumber"));
        assert!(json.contains("dateJoined"));
        assert!(json.contains("accountBalance"));
        assert!(json.contains("monthlyIncome"));
        assert!(json.contains("\"bvn\""));
    }

    #[test]
    fn income_bounds_serialize_as_two_element_array() {
        let json = serde_json::to_string(&sample_record()).expect("serialize");
        assert!(json.contains("\"monthlyIncome\":[120000,380000]"));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let parsed: UserRecordSeed = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, record);
    }
}
