//! Defines the endpoint for deleting a savings type from the catalog.
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{Error, stores::{SavingsTypeStore, sqlite::SQLAppState}};

/// A route handler for deleting a savings type.
///
/// Balance and deposit rows referencing the type are cascade-deleted with
/// it. The delete is rejected with a conflict while withdrawal records
/// reference the type.
pub async fn delete_savings_type_endpoint(
    State(mut state): State<SQLAppState>,
    Path(savings_type_id): Path<i64>,
) -> Result<StatusCode, Error> {
    state.savings_type_store.delete(savings_type_id)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod delete_savings_type_endpoint_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{create_test_member, create_test_savings_type, new_test_server},
    };

    #[tokio::test]
    async fn delete_succeeds_with_only_deposits() {
        let (server, mut state) = new_test_server();
        let member = create_test_member(&mut state, "Achieng Odhiambo", None);
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");
        state
            .ledger
            .deposit(member.id, savings_type.id, 500, None)
            .unwrap();

        let response = server
            .delete(&format_endpoint(
                endpoints::SAVINGS_TYPE,
                "{savings_type_id}",
                savings_type.id,
            ))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_conflicts_while_withdrawals_reference_the_type() {
        let (server, mut state) = new_test_server();
        let member = create_test_member(&mut state, "Achieng Odhiambo", None);
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");
        state
            .ledger
            .deposit(member.id, savings_type.id, 500, None)
            .unwrap();
        state.ledger.withdraw(member.id, savings_type.id, 100).unwrap();

        let response = server
            .delete(&format_endpoint(
                endpoints::SAVINGS_TYPE,
                "{savings_type_id}",
                savings_type.id,
            ))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn delete_fails_on_invalid_id() {
        let (server, _state) = new_test_server();

        let response = server
            .delete(&format_endpoint(
                endpoints::SAVINGS_TYPE,
                "{savings_type_id}",
                404,
            ))
            .await;

        response.assert_status_not_found();
    }
}
