//! Defines the transaction store trait for the append-only deposit and
//! withdrawal records.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{DatabaseID, MemberID, SavingsDeposit, SavingsWithdrawal},
};

/// Handles the creation and retrieval of deposit and withdrawal records.
///
/// Records are append-only: nothing in the ledger mutates or deletes them
/// once written.
pub trait TransactionStore {
    /// Append a deposit record.
    fn record_deposit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        occurred_at: OffsetDateTime,
    ) -> Result<SavingsDeposit, Error>;

    /// Append a withdrawal record.
    fn record_withdrawal(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        occurred_at: OffsetDateTime,
    ) -> Result<SavingsWithdrawal, Error>;

    /// Retrieve deposit records from the store in the way defined by `query`.
    fn get_deposits(&self, query: &RecordQuery) -> Result<Vec<SavingsDeposit>, Error>;

    /// Retrieve withdrawal records from the store in the way defined by `query`.
    fn get_withdrawals(&self, query: &RecordQuery) -> Result<Vec<SavingsWithdrawal>, Error>;
}

/// Defines how ledger records should be fetched from the balance and
/// transaction stores.
///
/// The member and savings type dimensions compose as a logical AND. Group
/// filters are resolved into an explicit member list before they reach the
/// store, see [MemberFilter](crate::ledger::MemberFilter).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordQuery {
    /// Restrict records to these members. `None` returns records for all
    /// members; an empty list matches nothing.
    pub members: Option<Vec<MemberID>>,
    /// Restrict records to one savings type. `None` returns records for all
    /// savings types.
    pub savings_type: Option<DatabaseID>,
}
