//! Defines the endpoints for querying balances, deposit records, and
//! withdrawal records by member, group, and savings type.
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    ledger::MemberFilter,
    models::{DatabaseID, GroupID, MemberID},
    stores::sqlite::SQLAppState,
};

/// The query string grammar shared by the listing endpoints.
///
/// `member_id` and `group_id` are mutually exclusive; all fields are
/// optional and compose as a logical AND.
#[derive(Debug, Default, Deserialize)]
pub struct LedgerQueryParams {
    /// Restrict records to one member.
    pub member_id: Option<MemberID>,
    /// Restrict records to the members of one group.
    pub group_id: Option<GroupID>,
    /// Restrict records to one savings type.
    pub savings_type_id: Option<DatabaseID>,
}

fn member_filter(params: &LedgerQueryParams) -> Result<MemberFilter, Response> {
    match (params.member_id, params.group_id) {
        (Some(_), Some(_)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "member_id and group_id are mutually exclusive" })),
        )
            .into_response()),
        (Some(member_id), None) => Ok(MemberFilter::Member(member_id)),
        (None, Some(group_id)) => Ok(MemberFilter::Group(group_id)),
        (None, None) => Ok(MemberFilter::All),
    }
}

/// A route handler for querying savings balance rows.
pub async fn get_savings_endpoint(
    State(state): State<SQLAppState>,
    Query(params): Query<LedgerQueryParams>,
) -> Response {
    let filter = match member_filter(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    match state.ledger.balances(&filter, params.savings_type_id) {
        Ok(balances) => Json(balances).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for querying deposit records.
pub async fn get_deposits_endpoint(
    State(state): State<SQLAppState>,
    Query(params): Query<LedgerQueryParams>,
) -> Response {
    let filter = match member_filter(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    match state.ledger.deposits(&filter, params.savings_type_id) {
        Ok(deposits) => Json(deposits).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for querying withdrawal records.
pub async fn get_withdrawals_endpoint(
    State(state): State<SQLAppState>,
    Query(params): Query<LedgerQueryParams>,
) -> Response {
    let filter = match member_filter(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    match state.ledger.withdrawals(&filter, params.savings_type_id) {
        Ok(withdrawals) => Json(withdrawals).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod list_endpoints_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        models::{SavingsBalance, SavingsDeposit},
        stores::MemberStore,
        test_utils::{create_test_member, create_test_savings_type, new_test_server},
    };

    #[tokio::test]
    async fn get_savings_filters_by_group() {
        let (server, mut state) = new_test_server();
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");

        let group = state
            .member_store
            .create_group("Umoja group")
            .expect("Could not create group");
        let amina = create_test_member(&mut state, "Amina Wanjiru", Some(group.id));
        let baraka = create_test_member(&mut state, "Baraka Mwangi", Some(group.id));
        let loner = create_test_member(&mut state, "Chausiku Njeri", None);

        for member_id in [amina.id, baraka.id, loner.id] {
            state
                .ledger
                .deposit(member_id, savings_type.id, 100, None)
                .unwrap();
        }

        let response = server
            .get(endpoints::SAVINGS)
            .add_query_param("group_id", group.id.as_i64())
            .await;

        response.assert_status_ok();
        let balances: Vec<SavingsBalance> = response.json();
        assert_eq!(balances.len(), 2);
        assert!(
            balances
                .iter()
                .all(|balance| balance.member_id == amina.id || balance.member_id == baraka.id)
        );
    }

    #[tokio::test]
    async fn get_savings_rejects_member_and_group_together() {
        let (server, _state) = new_test_server();

        let response = server
            .get(endpoints::SAVINGS)
            .add_query_param("member_id", 1)
            .add_query_param("group_id", 2)
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_deposits_filters_by_savings_type() {
        let (server, mut state) = new_test_server();
        let member = create_test_member(&mut state, "Achieng Odhiambo", None);
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");
        let other_type = create_test_savings_type(&mut state, "Holiday savings");

        state
            .ledger
            .deposit(member.id, savings_type.id, 100, None)
            .unwrap();
        state
            .ledger
            .deposit(member.id, other_type.id, 250, None)
            .unwrap();

        let response = server
            .get(endpoints::DEPOSITS)
            .add_query_param("savings_type_id", savings_type.id)
            .await;

        response.assert_status_ok();
        let deposits: Vec<SavingsDeposit> = response.json();
        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].amount, 100);
    }

    #[tokio::test]
    async fn get_withdrawals_returns_all_without_filters() {
        let (server, mut state) = new_test_server();
        let member = create_test_member(&mut state, "Achieng Odhiambo", None);
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");

        state
            .ledger
            .deposit(member.id, savings_type.id, 500, None)
            .unwrap();
        state.ledger.withdraw(member.id, savings_type.id, 100).unwrap();
        state.ledger.withdraw(member.id, savings_type.id, 50).unwrap();

        let response = server.get(endpoints::WITHDRAWALS).await;

        response.assert_status_ok();
        let withdrawals: Vec<crate::models::SavingsWithdrawal> = response.json();
        assert_eq!(withdrawals.len(), 2);
    }
}
