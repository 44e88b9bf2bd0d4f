//! Defines the savings ledger records: the running balance per
//! (member, savings type) pair and the append-only deposit and withdrawal
//! transaction rows that justify every balance change.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{DatabaseID, MemberID};

/// The running savings total for one (member, savings type) pair.
///
/// At most one balance row exists per pair. The row is mutated in place by
/// deposits and withdrawals; it is a cached accumulator, not transaction
/// history. See [SavingsDeposit] and [SavingsWithdrawal] for the records
/// that justify its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsBalance {
    /// The ID of the balance row.
    pub id: DatabaseID,
    /// The member that owns the savings.
    pub member_id: MemberID,
    /// The savings type the balance is held under.
    pub savings_type_id: DatabaseID,
    /// The current balance.
    pub amount: i64,
    /// When the balance row was created.
    ///
    /// Set once when the first deposit creates the row, never updated by
    /// later deposits.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// An append-only record of a single deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsDeposit {
    /// The ID of the deposit record.
    pub id: DatabaseID,
    /// The member the deposit was made for.
    pub member_id: MemberID,
    /// The savings type the deposit was made under.
    pub savings_type_id: DatabaseID,
    /// The deposited amount.
    pub amount: i64,
    /// When the deposit occurred.
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

/// An append-only record of a single withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsWithdrawal {
    /// The ID of the withdrawal record.
    pub id: DatabaseID,
    /// The member the withdrawal was made for.
    pub member_id: MemberID,
    /// The savings type the withdrawal was made under.
    pub savings_type_id: DatabaseID,
    /// The withdrawn amount.
    pub amount: i64,
    /// When the withdrawal occurred.
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

/// One entry in a member's merged transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntry {
    /// A deposit record.
    Deposit(SavingsDeposit),
    /// A withdrawal record.
    Withdrawal(SavingsWithdrawal),
}

impl LedgerEntry {
    /// When the underlying transaction occurred.
    pub fn occurred_at(&self) -> OffsetDateTime {
        match self {
            LedgerEntry::Deposit(deposit) => deposit.occurred_at,
            LedgerEntry::Withdrawal(withdrawal) => withdrawal.occurred_at,
        }
    }

    /// The amount of the underlying transaction.
    pub fn amount(&self) -> i64 {
        match self {
            LedgerEntry::Deposit(deposit) => deposit.amount,
            LedgerEntry::Withdrawal(withdrawal) => withdrawal.amount,
        }
    }
}
