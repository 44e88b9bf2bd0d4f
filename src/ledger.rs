//! The savings ledger service.
//!
//! Records deposits and withdrawals against each member's running balance
//! per savings type, and answers filtered queries over balances and the
//! append-only transaction history. The service is generic over the
//! repository traits in [stores](crate::stores) so the storage backend is
//! injected rather than reached through ambient state.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{
        DatabaseID, GroupID, LedgerEntry, MemberID, SavingsBalance, SavingsDeposit,
        SavingsWithdrawal,
    },
    stores::{BalanceStore, MemberStore, RecordQuery, TransactionStore},
};

/// Selects which members' records a ledger query returns.
///
/// Consumed by exhaustive matching, so every combination with a savings type
/// filter is defined.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberFilter {
    /// Records for every member.
    All,
    /// Records for a single member.
    Member(MemberID),
    /// Records for every member whose group matches.
    ///
    /// Resolved through the member directory into an explicit member list
    /// before it reaches a store.
    Group(GroupID),
    /// Records restricted to an explicit set of members.
    Members(Vec<MemberID>),
}

/// Records savings deposits and withdrawals and answers filtered queries
/// over the resulting balances and transaction history.
#[derive(Debug, Clone)]
pub struct Ledger<B, T, M> {
    balance_store: B,
    transaction_store: T,
    member_store: M,
}

impl<B, T, M> Ledger<B, T, M>
where
    B: BalanceStore,
    T: TransactionStore,
    M: MemberStore,
{
    /// Create a ledger service over the given stores.
    pub fn new(balance_store: B, transaction_store: T, member_store: M) -> Self {
        Self {
            balance_store,
            transaction_store,
            member_store,
        }
    }

    /// Record a deposit for `(member_id, savings_type_id)`.
    ///
    /// Tops up the existing balance row, or creates one initialized to
    /// `amount` if this is the member's first deposit of this type. Exactly
    /// one balance row and one deposit record are written per call.
    ///
    /// `date` is stored on the deposit record; when `None` the deposit is
    /// stamped with the current time. The balance row's creation timestamp
    /// is always the current time, independent of `date`.
    ///
    /// Deposits are not validated against the savings type's contribution
    /// bounds.
    ///
    /// # Errors
    /// Returns [Error::InvalidReference] if the member or savings type does
    /// not exist.
    pub fn deposit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        date: Option<OffsetDateTime>,
    ) -> Result<SavingsDeposit, Error> {
        let now = OffsetDateTime::now_utc();
        let occurred_at = date.unwrap_or(now);

        self.balance_store
            .credit(member_id, savings_type_id, amount, now)?;
        self.transaction_store
            .record_deposit(member_id, savings_type_id, amount, occurred_at)
    }

    /// Record a withdrawal for `(member_id, savings_type_id)`.
    ///
    /// # Errors
    /// - [Error::NoBalance] if the member has no savings of this type,
    /// - [Error::InsufficientFunds] if the stored balance amount is less
    ///   than `amount`.
    ///
    /// Both are validation failures returned as values; the balance is left
    /// unchanged and no withdrawal record is written.
    pub fn withdraw(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
    ) -> Result<SavingsWithdrawal, Error> {
        self.balance_store
            .debit(member_id, savings_type_id, amount)?;
        self.transaction_store.record_withdrawal(
            member_id,
            savings_type_id,
            amount,
            OffsetDateTime::now_utc(),
        )
    }

    /// Retrieve balance rows matching `filter` and `savings_type_id`.
    ///
    /// The two dimensions compose as a logical AND.
    pub fn balances(
        &self,
        filter: &MemberFilter,
        savings_type_id: Option<DatabaseID>,
    ) -> Result<Vec<SavingsBalance>, Error> {
        let query = self.resolve_filter(filter, savings_type_id)?;

        self.balance_store.get_query(&query)
    }

    /// Retrieve deposit records matching `filter` and `savings_type_id`.
    pub fn deposits(
        &self,
        filter: &MemberFilter,
        savings_type_id: Option<DatabaseID>,
    ) -> Result<Vec<SavingsDeposit>, Error> {
        let query = self.resolve_filter(filter, savings_type_id)?;

        self.transaction_store.get_deposits(&query)
    }

    /// Retrieve withdrawal records matching `filter` and `savings_type_id`.
    pub fn withdrawals(
        &self,
        filter: &MemberFilter,
        savings_type_id: Option<DatabaseID>,
    ) -> Result<Vec<SavingsWithdrawal>, Error> {
        let query = self.resolve_filter(filter, savings_type_id)?;

        self.transaction_store.get_withdrawals(&query)
    }

    /// Sum a member's balance amounts across every savings type.
    ///
    /// Returns `None` when the member holds no balance rows at all.
    pub fn member_total(&self, member_id: MemberID) -> Result<Option<i64>, Error> {
        self.balance_store.total_for_member(member_id)
    }

    /// A member's deposits and withdrawals merged into one sequence sorted
    /// ascending by timestamp.
    ///
    /// The sort is stable with deposits listed before withdrawals on equal
    /// timestamps. The result is a materialized snapshot of the history at
    /// call time.
    pub fn transaction_history(&self, member_id: MemberID) -> Result<Vec<LedgerEntry>, Error> {
        let query = RecordQuery {
            members: Some(vec![member_id]),
            savings_type: None,
        };

        let deposits = self.transaction_store.get_deposits(&query)?;
        let withdrawals = self.transaction_store.get_withdrawals(&query)?;

        let mut history: Vec<LedgerEntry> = deposits
            .into_iter()
            .map(LedgerEntry::Deposit)
            .chain(withdrawals.into_iter().map(LedgerEntry::Withdrawal))
            .collect();
        history.sort_by_key(|entry| entry.occurred_at());

        Ok(history)
    }

    /// Expand `filter` into the member list a store query understands.
    ///
    /// Group filters take a secondary lookup into the member directory; a
    /// group with no members yields an empty list, which matches nothing.
    fn resolve_filter(
        &self,
        filter: &MemberFilter,
        savings_type_id: Option<DatabaseID>,
    ) -> Result<RecordQuery, Error> {
        let members = match filter {
            MemberFilter::All => None,
            MemberFilter::Member(member_id) => Some(vec![*member_id]),
            MemberFilter::Group(group_id) => Some(
                self.member_store
                    .get_by_group(*group_id)?
                    .into_iter()
                    .map(|member| member.id)
                    .collect(),
            ),
            MemberFilter::Members(member_ids) => Some(member_ids.clone()),
        };

        Ok(RecordQuery {
            members,
            savings_type: savings_type_id,
        })
    }
}
