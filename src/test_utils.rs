#![allow(missing_docs)]
//! Helpers shared by the endpoint tests.

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{
    build_router,
    models::{ContributionInterval, GroupID, Member, NewSavingsType, SavingsCategory, SavingsType},
    stores::{
        MemberStore, SavingsTypeStore,
        sqlite::{SQLAppState, create_app_state},
    },
};

pub(crate) fn get_test_app_state() -> SQLAppState {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");

    create_app_state(connection).expect("Could not create app state.")
}

/// A test server plus a handle on the state it serves from.
///
/// The state clone shares the server's database connection, so tests can
/// seed and inspect records directly through the stores.
pub(crate) fn new_test_server() -> (TestServer, SQLAppState) {
    let state = get_test_app_state();
    let server = TestServer::new(build_router(state.clone()));

    (server, state)
}

pub(crate) fn create_test_member(
    state: &mut SQLAppState,
    name: &str,
    group_id: Option<GroupID>,
) -> Member {
    state
        .member_store
        .create(name, group_id)
        .expect("Could not create member")
}

pub(crate) fn create_test_savings_type(state: &mut SQLAppState, name: &str) -> SavingsType {
    state
        .savings_type_store
        .create(NewSavingsType {
            name: name.to_owned(),
            category: SavingsCategory::Fixed,
            compulsory: true,
            interval: ContributionInterval::Month,
            minimum_amount: 1_000,
            maximum_amount: 100_000,
            interest: 3,
        })
        .expect("Could not create savings type")
}
