//! Implements a SQLite backed savings balance store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, params_from_iter};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, MemberID, SavingsBalance},
    stores::{BalanceStore, RecordQuery},
};

use super::record_query_where_clause;

/// Create, mutate, and retrieve savings balance rows in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteBalanceStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBalanceStore {
    /// Create a new store from the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteBalanceStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS savings_balance (
                id INTEGER PRIMARY KEY,
                member_id INTEGER NOT NULL,
                savings_type_id INTEGER NOT NULL,
                amount INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE(member_id, savings_type_id),
                FOREIGN KEY(member_id) REFERENCES member(id) ON UPDATE CASCADE ON DELETE CASCADE,
                FOREIGN KEY(savings_type_id) REFERENCES savings_type(id) ON UPDATE CASCADE ON DELETE CASCADE
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SavingsBalance {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = row.get(offset)?;
        let member_id = MemberID::new(row.get(offset + 1)?);
        let savings_type_id = row.get(offset + 2)?;
        let amount = row.get(offset + 3)?;
        let created_at = row.get(offset + 4)?;

        Ok(Self {
            id,
            member_id,
            savings_type_id,
            amount,
            created_at,
        })
    }
}

impl BalanceStore for SQLiteBalanceStore {
    fn credit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
        created_at: OffsetDateTime,
    ) -> Result<SavingsBalance, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLock)?;

        // The upsert keeps create-or-top-up a single statement, so two
        // deposits against the same (member, savings type) pair cannot lose
        // an update. An existing row keeps its original created_at.
        let balance = connection
            .prepare(
                "INSERT INTO savings_balance (member_id, savings_type_id, amount, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(member_id, savings_type_id) DO UPDATE SET
                     amount = amount + excluded.amount
                 RETURNING id, member_id, savings_type_id, amount, created_at",
            )?
            .query_row(
                (member_id.as_i64(), savings_type_id, amount, created_at),
                SavingsBalance::map_row,
            )?;

        Ok(balance)
    }

    fn debit(
        &mut self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
        amount: i64,
    ) -> Result<SavingsBalance, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLock)?;

        // The amount guard in the WHERE clause keeps check-and-subtract a
        // single statement. The comparison is against the stored amount.
        let result = connection
            .prepare(
                "UPDATE savings_balance SET amount = amount - ?3
                 WHERE member_id = ?1 AND savings_type_id = ?2 AND amount >= ?3
                 RETURNING id, member_id, savings_type_id, amount, created_at",
            )?
            .query_row(
                (member_id.as_i64(), savings_type_id, amount),
                SavingsBalance::map_row,
            );

        match result {
            Ok(balance) => Ok(balance),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                let exists: bool = connection
                    .prepare(
                        "SELECT EXISTS (
                             SELECT 1 FROM savings_balance
                             WHERE member_id = ?1 AND savings_type_id = ?2
                         )",
                    )?
                    .query_row((member_id.as_i64(), savings_type_id), |row| row.get(0))?;

                if exists {
                    Err(Error::InsufficientFunds)
                } else {
                    Err(Error::NoBalance)
                }
            }
            Err(error) => Err(error.into()),
        }
    }

    fn get(
        &self,
        member_id: MemberID,
        savings_type_id: DatabaseID,
    ) -> Result<SavingsBalance, Error> {
        let balance = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(
                "SELECT id, member_id, savings_type_id, amount, created_at
                 FROM savings_balance
                 WHERE member_id = ?1 AND savings_type_id = ?2",
            )?
            .query_row((member_id.as_i64(), savings_type_id), SavingsBalance::map_row)?;

        Ok(balance)
    }

    fn get_query(&self, query: &RecordQuery) -> Result<Vec<SavingsBalance>, Error> {
        if let Some(members) = &query.members
            && members.is_empty()
        {
            return Ok(Vec::new());
        }

        let (where_clause, query_parameters) = record_query_where_clause(query);
        let query_string = format!(
            "SELECT id, member_id, savings_type_id, amount, created_at
             FROM savings_balance{where_clause} ORDER BY id"
        );
        let params = params_from_iter(query_parameters.iter());

        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&query_string)?
            .query_map(params, SavingsBalance::map_row)?
            .map(|maybe_balance| maybe_balance.map_err(|error| error.into()))
            .collect()
    }

    fn total_for_member(&self, member_id: MemberID) -> Result<Option<i64>, Error> {
        let total = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare("SELECT SUM(amount) FROM savings_balance WHERE member_id = ?1")?
            .query_row([member_id.as_i64()], |row| row.get(0))?;

        Ok(total)
    }
}
