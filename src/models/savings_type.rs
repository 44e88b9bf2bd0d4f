//! Defines the savings type catalog entry and its supporting types.
//!
//! A savings type is immutable reference data describing an account
//! category: its contribution interval, contribution bounds, and interest
//! rate. The ledger references this metadata but does not enforce the
//! contribution bounds on deposits or withdrawals.

use std::fmt::Display;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// The account category of a savings type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsCategory {
    /// A fixed savings account.
    #[default]
    Fixed,
    /// A contract savings account.
    Contract,
    /// A current savings account.
    Current,
    /// A target savings account.
    Target,
}

impl SavingsCategory {
    /// The category as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsCategory::Fixed => "fixed",
            SavingsCategory::Contract => "contract",
            SavingsCategory::Current => "current",
            SavingsCategory::Target => "target",
        }
    }
}

impl Display for SavingsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SavingsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SavingsCategory::Fixed),
            "contract" => Ok(SavingsCategory::Contract),
            "current" => Ok(SavingsCategory::Current),
            "target" => Ok(SavingsCategory::Target),
            other => Err(format!("unknown savings category {other:?}")),
        }
    }
}

impl rusqlite::ToSql for SavingsCategory {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for SavingsCategory {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: String| FromSqlError::Other(error.into()))
    }
}

/// How often a contribution towards a savings type is expected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionInterval {
    /// One contribution per year.
    Year,
    /// One contribution per month.
    #[default]
    Month,
    /// One contribution per week.
    Week,
    /// One contribution per day.
    Day,
}

impl ContributionInterval {
    /// The interval as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionInterval::Year => "year",
            ContributionInterval::Month => "month",
            ContributionInterval::Week => "week",
            ContributionInterval::Day => "day",
        }
    }
}

impl Display for ContributionInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(ContributionInterval::Year),
            "month" => Ok(ContributionInterval::Month),
            "week" => Ok(ContributionInterval::Week),
            "day" => Ok(ContributionInterval::Day),
            other => Err(format!("unknown contribution interval {other:?}")),
        }
    }
}

impl rusqlite::ToSql for ContributionInterval {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for ContributionInterval {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: String| FromSqlError::Other(error.into()))
    }
}

/// A category of savings account with its own interest rate, contribution
/// interval, and contribution bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsType {
    /// The ID of the savings type.
    pub id: DatabaseID,
    /// The display name of the savings type.
    pub name: String,
    /// The account category.
    pub category: SavingsCategory,
    /// Whether members are required to contribute to this savings type.
    pub compulsory: bool,
    /// How often contributions are expected.
    pub interval: ContributionInterval,
    /// The minimum contribution amount.
    pub minimum_amount: i64,
    /// The maximum contribution amount.
    pub maximum_amount: i64,
    /// The interest rate as an integer percentage.
    pub interest: i64,
}

impl SavingsType {
    /// The interest rate rendered as a percentage string, e.g. `"12%"`.
    pub fn interest_rate(&self) -> String {
        format!("{}%", self.interest)
    }
}

fn default_compulsory() -> bool {
    true
}

/// The data needed to create a new savings type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSavingsType {
    /// The display name of the savings type.
    pub name: String,
    /// The account category.
    #[serde(default)]
    pub category: SavingsCategory,
    /// Whether members are required to contribute to this savings type.
    #[serde(default = "default_compulsory")]
    pub compulsory: bool,
    /// How often contributions are expected.
    #[serde(default)]
    pub interval: ContributionInterval,
    /// The minimum contribution amount.
    pub minimum_amount: i64,
    /// The maximum contribution amount.
    pub maximum_amount: i64,
    /// The interest rate as an integer percentage.
    pub interest: i64,
}

#[cfg(test)]
mod savings_type_tests {
    use super::{ContributionInterval, NewSavingsType, SavingsCategory, SavingsType};

    #[test]
    fn interest_rate_renders_as_percentage() {
        let savings_type = SavingsType {
            id: 1,
            name: "Boda boda savings".to_owned(),
            category: SavingsCategory::Target,
            compulsory: false,
            interval: ContributionInterval::Week,
            minimum_amount: 500,
            maximum_amount: 100_000,
            interest: 12,
        };

        assert_eq!(savings_type.interest_rate(), "12%");
    }

    #[test]
    fn category_round_trips_through_string_form() {
        for category in [
            SavingsCategory::Fixed,
            SavingsCategory::Contract,
            SavingsCategory::Current,
            SavingsCategory::Target,
        ] {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }

    #[test]
    fn new_savings_type_defaults_match_the_catalog_defaults() {
        let json = r#"{
            "name": "Ordinary savings",
            "minimum_amount": 1000,
            "maximum_amount": 50000,
            "interest": 3
        }"#;

        let new_savings_type: NewSavingsType = serde_json::from_str(json).unwrap();

        assert_eq!(new_savings_type.category, SavingsCategory::Fixed);
        assert_eq!(new_savings_type.interval, ContributionInterval::Month);
        assert!(new_savings_type.compulsory);
    }
}
