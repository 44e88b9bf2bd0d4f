//! Implements a struct that holds the state of the REST server.

use crate::ledger::Ledger;

/// The state of the REST server.
///
/// Generic over the store implementations so the ledger's storage backend is
/// injected; see [create_app_state](crate::stores::sqlite::create_app_state)
/// for the SQLite-backed instantiation.
#[derive(Debug, Clone)]
pub struct AppState<B, T, M, S> {
    /// The ledger service recording deposits and withdrawals.
    pub ledger: Ledger<B, T, M>,

    /// The member directory store.
    pub member_store: M,

    /// The savings type catalog store.
    pub savings_type_store: S,
}

impl<B, T, M, S> AppState<B, T, M, S> {
    /// Create a new [AppState] from the ledger service and the stores the
    /// route handlers use directly.
    pub fn new(ledger: Ledger<B, T, M>, member_store: M, savings_type_store: S) -> Self {
        Self {
            ledger,
            member_store,
            savings_type_store,
        }
    }
}
