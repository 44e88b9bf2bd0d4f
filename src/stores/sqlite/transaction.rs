//! Implements a SQLite backed store for the append-only deposit and
//! withdrawal records.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, params_from_iter};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, MemberID, SavingsDeposit, SavingsWithdrawal},
    stores::{RecordQuery, TransactionStore},
};

use super::record_query_where_clause;

/// Stores deposit and withdrawal records in a SQLite database.
///
/// Note that deposit and withdrawal rows reference the member and savings
/// type tables, so those models must be set up in the database. Withdrawals
/// protect their savings type from deletion; deposits cascade with it.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS savings_deposit (
                id INTEGER PRIMARY KEY,
                member_id INTEGER NOT NULL,
                savings_type_id INTEGER NOT NULL,
                amount INTEGER NOT NULL,
                occurred_at TEXT NOT NULL,
                FOREIGN KEY(member_id) REFERENCES member(id) ON UPDATE CASCADE ON DELETE CASCADE,
                FOREIGN KEY(savings_type_id) REFERENCES savings_type(id) ON UPDATE CASCADE ON DELETE CASCADE
            )",
            (),
        )?;

        connection.execute(
            "CREATE TABLE IF NOT EXISTS savings_withdrawal (
                id INTEGER PRIMARY KEY,
                member_id INTEGER NOT NULL,
                savings_type_id INTEGER NOT NULL,
                amount INTEGER NOT NULL,
                occurred_at TEXT NOT NULL,
                FOREIGN KEY(member_id) REFERENCES member(id) ON UPDATE CASCADE ON DELETE CASCADE,
                FOREIGN KEY(savings_type_id) REFERENCES savings_type(id) ON UPDATE CASCADE ON DELETE RESTRICT
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SavingsDeposit {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = row.get(offset)?;
        let member_id = MemberID::new(row.get(offset + 1)?);
        let savings_type_id = row.get(offset + 2)?;
        let amount = row.get(offset + 3)?;
        let occurred_at = row.get(offset + 4)?;

        Ok(Self {
            id,
            member_id,
            savings_type_id,
            amount,
            occurred_at,
        })
    }
}

impl MapRow for SavingsWithdrawal {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = row.get(offset)?;
        let member_id = MemberID::new(row.get(offset + 1)?);
        let savings_type_id = row.get(offset + 2)?;
        let amount = row.get(offset + 3)?;
        let occurred_at = row.get(offset + 4)?;

        Ok(Self {
            id,
            member_id,
            savings_type_id,
            amount,
            occurred_at,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn record_deposit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        occurred_at: OffsetDateTime,
    ) -> Result<SavingsDeposit, Error> {
        let deposit = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(
                "INSERT INTO savings_deposit (member_id, savings_type_id, amount, occurred_at)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, member_id, savings_type_id, amount, occurred_at",
            )?
            .query_row(
                (member_id.as_i64(), savings_type_id, amount, occurred_at),
                SavingsDeposit::map_row,
            )?;

        Ok(deposit)
    }

    fn record_withdrawal(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        occurred_at: OffsetDateTime,
    ) -> Result<SavingsWithdrawal, Error> {
        let withdrawal = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(
                "INSERT INTO savings_withdrawal (member_id, savings_type_id, amount, occurred_at)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, member_id, savings_type_id, amount, occurred_at",
            )?
            .query_row(
                (member_id.as_i64(), savings_type_id, amount, occurred_at),
                SavingsWithdrawal::map_row,
            )?;

        Ok(withdrawal)
    }

    fn get_deposits(&self, query: &RecordQuery) -> Result<Vec<SavingsDeposit>, Error> {
        if let Some(members) = &query.members
            && members.is_empty()
        {
            return Ok(Vec::new());
        }

        let (where_clause, query_parameters) = record_query_where_clause(query);
        let query_string = format!(
            "SELECT id, member_id, savings_type_id, amount, occurred_at
             FROM savings_deposit{where_clause} ORDER BY id"
        );
        let params = params_from_iter(query_parameters.iter());

        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&query_string)?
            .query_map(params, SavingsDeposit::map_row)?
            .map(|maybe_deposit| maybe_deposit.map_err(|error| error.into()))
            .collect()
    }

    fn get_withdrawals(&self, query: &RecordQuery) -> Result<Vec<SavingsWithdrawal>, Error> {
        if let Some(members) = &query.members
            && members.is_empty()
        {
            return Ok(Vec::new());
        }

        let (where_clause, query_parameters) = record_query_where_clause(query);
        let query_string = format!(
            "SELECT id, member_id, savings_type_id, amount, occurred_at
             FROM savings_withdrawal{where_clause} ORDER BY id"
        );
        let params = params_from_iter(query_parameters.iter());

        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&query_string)?
            .query_map(params, SavingsWithdrawal::map_row)?
            .map(|maybe_withdrawal| maybe_withdrawal.map_err(|error| error.into()))
            .collect()
    }
}
