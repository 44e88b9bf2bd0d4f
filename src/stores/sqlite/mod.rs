//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

pub mod balance;
pub mod member;
pub mod savings_type;
pub mod transaction;

pub use balance::SQLiteBalanceStore;
pub use member::SQLiteMemberStore;
pub use savings_type::SQLiteSavingsTypeStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, types::Value};

use crate::{AppState, Error, db::initialize, ledger::Ledger, stores::RecordQuery};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<
    SQLiteBalanceStore,
    SQLiteTransactionStore,
    SQLiteMemberStore,
    SQLiteSavingsTypeStore,
>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let balance_store = SQLiteBalanceStore::new(connection.clone());
    let transaction_store = SQLiteTransactionStore::new(connection.clone());
    let member_store = SQLiteMemberStore::new(connection.clone());
    let savings_type_store = SQLiteSavingsTypeStore::new(connection.clone());

    Ok(AppState::new(
        Ledger::new(balance_store, transaction_store, member_store.clone()),
        member_store,
        savings_type_store,
    ))
}

/// Render the member/savings type dimensions of `query` as a SQL WHERE
/// clause and its positional parameters.
///
/// Returns an empty clause when neither dimension is set. Callers must
/// short-circuit the empty member list case before calling, `IN ()` is not
/// valid SQLite.
pub(crate) fn record_query_where_clause(query: &RecordQuery) -> (String, Vec<Value>) {
    let mut where_clause_parts = vec![];
    let mut query_parameters: Vec<Value> = vec![];

    if let Some(members) = &query.members {
        let placeholders = (1..=members.len())
            .map(|position| format!("?{position}"))
            .collect::<Vec<_>>()
            .join(", ");
        where_clause_parts.push(format!("member_id IN ({placeholders})"));
        query_parameters.extend(
            members
                .iter()
                .map(|member_id| Value::Integer(member_id.as_i64())),
        );
    }

    if let Some(savings_type_id) = query.savings_type {
        where_clause_parts.push(format!("savings_type_id = ?{}", query_parameters.len() + 1));
        query_parameters.push(Value::Integer(savings_type_id));
    }

    if where_clause_parts.is_empty() {
        (String::new(), query_parameters)
    } else {
        (
            String::from(" WHERE ") + &where_clause_parts.join(" AND "),
            query_parameters,
        )
    }
}
