//! This module defines the domain data types.

pub use member::{Group, GroupID, Member, MemberID};
pub use savings::{LedgerEntry, SavingsBalance, SavingsDeposit, SavingsWithdrawal};
pub use savings_type::{ContributionInterval, NewSavingsType, SavingsCategory, SavingsType};

mod member;
mod savings;
mod savings_type;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;
