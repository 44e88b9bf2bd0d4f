//! Implements a SQLite backed savings type catalog store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewSavingsType, SavingsType},
    stores::SavingsTypeStore,
};

/// Stores savings type catalog entries in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteSavingsTypeStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteSavingsTypeStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteSavingsTypeStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS savings_type (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                compulsory INTEGER NOT NULL,
                interval TEXT NOT NULL,
                minimum_amount INTEGER NOT NULL,
                maximum_amount INTEGER NOT NULL,
                interest INTEGER NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SavingsType {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = row.get(offset)?;
        let name = row.get(offset + 1)?;
        let category = row.get(offset + 2)?;
        let compulsory = row.get(offset + 3)?;
        let interval = row.get(offset + 4)?;
        let minimum_amount = row.get(offset + 5)?;
        let maximum_amount = row.get(offset + 6)?;
        let interest = row.get(offset + 7)?;

        Ok(Self {
            id,
            name,
            category,
            compulsory,
            interval,
            minimum_amount,
            maximum_amount,
            interest,
        })
    }
}

const SAVINGS_TYPE_COLUMNS: &str =
    "id, name, category, compulsory, interval, minimum_amount, maximum_amount, interest";

impl SavingsTypeStore for SQLiteSavingsTypeStore {
    fn create(&mut self, new_savings_type: NewSavingsType) -> Result<SavingsType, Error> {
        let savings_type = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&format!(
                "INSERT INTO savings_type
                     (name, category, compulsory, interval,
                      minimum_amount, maximum_amount, interest)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING {SAVINGS_TYPE_COLUMNS}"
            ))?
            .query_row(
                (
                    &new_savings_type.name,
                    new_savings_type.category,
                    new_savings_type.compulsory,
                    new_savings_type.interval,
                    new_savings_type.minimum_amount,
                    new_savings_type.maximum_amount,
                    new_savings_type.interest,
                ),
                SavingsType::map_row,
            )?;

        Ok(savings_type)
    }

    fn get(&self, id: DatabaseID) -> Result<SavingsType, Error> {
        let savings_type = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&format!(
                "SELECT {SAVINGS_TYPE_COLUMNS} FROM savings_type WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], SavingsType::map_row)?;

        Ok(savings_type)
    }

    fn get_all(&self) -> Result<Vec<SavingsType>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&format!(
                "SELECT {SAVINGS_TYPE_COLUMNS} FROM savings_type ORDER BY id"
            ))?
            .query_map([], SavingsType::map_row)?
            .map(|maybe_savings_type| maybe_savings_type.map_err(|error| error.into()))
            .collect()
    }

    fn update(&mut self, savings_type: &SavingsType) -> Result<SavingsType, Error> {
        let savings_type = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(&format!(
                "UPDATE savings_type SET
                     name = ?2, category = ?3, compulsory = ?4, interval = ?5,
                     minimum_amount = ?6, maximum_amount = ?7, interest = ?8
                 WHERE id = ?1
                 RETURNING {SAVINGS_TYPE_COLUMNS}"
            ))?
            .query_row(
                (
                    savings_type.id,
                    &savings_type.name,
                    savings_type.category,
                    savings_type.compulsory,
                    savings_type.interval,
                    savings_type.minimum_amount,
                    savings_type.maximum_amount,
                    savings_type.interest,
                ),
                SavingsType::map_row,
            )?;

        Ok(savings_type)
    }

    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLock)?;

        // Balance and deposit rows cascade with the type. Withdrawal rows
        // protect it: the RESTRICT action makes the whole delete fail, so
        // nothing is removed in that case.
        let rows_deleted = connection
            .execute("DELETE FROM savings_type WHERE id = ?1", [id])
            .map_err(|error| match error {
                // Code 787 occurs when a FOREIGN KEY constraint failed.
                rusqlite::Error::SqliteFailure(sql_error, Some(_))
                    if sql_error.extended_code == 787 =>
                {
                    Error::ReferentialIntegrity
                }
                error => error.into(),
            })?;

        if rows_deleted == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod sqlite_savings_type_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        Error,
        db::initialize,
        models::{ContributionInterval, NewSavingsType, SavingsCategory},
        stores::{
            BalanceStore, MemberStore, RecordQuery, SavingsTypeStore, TransactionStore,
            sqlite::{SQLiteBalanceStore, SQLiteMemberStore, SQLiteTransactionStore},
        },
    };

    use super::SQLiteSavingsTypeStore;

    fn new_test_savings_type(name: &str) -> NewSavingsType {
        NewSavingsType {
            name: name.to_owned(),
            category: SavingsCategory::Fixed,
            compulsory: true,
            interval: ContributionInterval::Month,
            minimum_amount: 1_000,
            maximum_amount: 100_000,
            interest: 3,
        }
    }

    fn get_test_store() -> SQLiteSavingsTypeStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteSavingsTypeStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn create_and_get_savings_type() {
        let mut store = get_test_store();

        let want = store
            .create(new_test_savings_type("Ordinary savings"))
            .expect("Could not create savings type");
        let got = store.get(want.id).expect("Could not get savings type");

        assert_eq!(want, got, "want savings type {want:?}, got {got:?}");
        assert_eq!(got.category, SavingsCategory::Fixed);
        assert_eq!(got.interval, ContributionInterval::Month);
    }

    #[test]
    fn update_replaces_stored_fields() {
        let mut store = get_test_store();
        let mut savings_type = store
            .create(new_test_savings_type("Ordinary savings"))
            .unwrap();

        savings_type.interest = 7;
        savings_type.compulsory = false;
        let got = store.update(&savings_type).expect("Could not update");

        assert_eq!(got, savings_type);
        assert_eq!(store.get(savings_type.id), Ok(savings_type));
    }

    #[test]
    fn update_fails_on_invalid_id() {
        let mut store = get_test_store();
        let mut savings_type = store
            .create(new_test_savings_type("Ordinary savings"))
            .unwrap();
        savings_type.id += 999;

        let result = store.update(&savings_type);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_on_invalid_id() {
        let mut store = get_test_store();

        let result = store.delete(404);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_cascades_balances_and_deposits() {
        let mut store = get_test_store();
        let connection = store.connection.clone();
        let savings_type = store
            .create(new_test_savings_type("Ordinary savings"))
            .unwrap();

        let mut member_store = SQLiteMemberStore::new(connection.clone());
        let member = member_store.create("Achieng Odhiambo", None).unwrap();

        let mut balance_store = SQLiteBalanceStore::new(connection.clone());
        balance_store
            .credit(
                member.id,
                savings_type.id,
                500,
                datetime!(2024-01-15 08:30 UTC),
            )
            .unwrap();
        let mut transaction_store = SQLiteTransactionStore::new(connection);
        transaction_store
            .record_deposit(
                member.id,
                savings_type.id,
                500,
                datetime!(2024-01-15 08:30 UTC),
            )
            .unwrap();

        store.delete(savings_type.id).expect("Could not delete");

        assert_eq!(store.get(savings_type.id), Err(Error::NotFound));
        assert_eq!(
            balance_store.get_query(&RecordQuery::default()),
            Ok(Vec::new())
        );
        assert_eq!(
            transaction_store.get_deposits(&RecordQuery::default()),
            Ok(Vec::new())
        );
    }

    #[test]
    fn delete_is_rejected_while_withdrawals_reference_the_type() {
        let mut store = get_test_store();
        let connection = store.connection.clone();
        let savings_type = store
            .create(new_test_savings_type("Ordinary savings"))
            .unwrap();

        let mut member_store = SQLiteMemberStore::new(connection.clone());
        let member = member_store.create("Achieng Odhiambo", None).unwrap();

        let mut balance_store = SQLiteBalanceStore::new(connection.clone());
        balance_store
            .credit(
                member.id,
                savings_type.id,
                500,
                datetime!(2024-01-15 08:30 UTC),
            )
            .unwrap();
        let mut transaction_store = SQLiteTransactionStore::new(connection);
        transaction_store
            .record_withdrawal(
                member.id,
                savings_type.id,
                100,
                datetime!(2024-02-01 09:00 UTC),
            )
            .unwrap();

        let result = store.delete(savings_type.id);

        assert_eq!(result, Err(Error::ReferentialIntegrity));
        // Nothing was deleted: the type and its cascading rows survive.
        assert!(store.get(savings_type.id).is_ok());
        assert_eq!(
            balance_store
                .get_query(&RecordQuery::default())
                .unwrap()
                .len(),
            1
        );
    }
}
