//! Defines the store for savings balances.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{DatabaseID, MemberID, SavingsBalance},
    stores::RecordQuery,
};

/// Handles the creation, mutation, and retrieval of savings balance rows.
///
/// There is at most one balance row per (member, savings type) pair.
/// Implementers must make [credit](BalanceStore::credit) and
/// [debit](BalanceStore::debit) atomic with respect to that pair: the
/// read-modify-write of the stored amount must not interleave with another
/// mutation of the same row.
pub trait BalanceStore {
    /// Add `amount` to the balance for `(member_id, savings_type_id)`,
    /// creating the row initialized to `amount` if it does not exist.
    ///
    /// `created_at` is only stored when the call creates the row; an
    /// existing row keeps its original creation timestamp.
    fn credit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        created_at: OffsetDateTime,
    ) -> Result<SavingsBalance, Error>;

    /// Subtract `amount` from the balance for `(member_id, savings_type_id)`.
    ///
    /// # Errors
    /// - [Error::NoBalance] if no balance row exists for the pair,
    /// - [Error::InsufficientFunds] if the stored amount is less than
    ///   `amount`. The stored amount is left unchanged in both cases.
    fn debit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
    ) -> Result<SavingsBalance, Error>;

    /// Retrieve the balance row for `(member_id, savings_type_id)`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no balance row exists for the pair.
    fn get(
        &self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
    ) -> Result<SavingsBalance, Error>;

    /// Retrieve balance rows from the store in the way defined by `query`.
    fn get_query(&self, query: &RecordQuery) -> Result<Vec<SavingsBalance>, Error>;

    /// Sum the balance amounts across every savings type for `member_id`.
    ///
    /// Returns `None` when the member has no balance rows at all.
    fn total_for_member(&self, member_id: MemberID) -> Result<Option<i64>, Error>;
}
