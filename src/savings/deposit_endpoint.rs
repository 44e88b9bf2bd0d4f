//! Defines the endpoint for recording a savings deposit.
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    models::{DatabaseID, MemberID},
    stores::sqlite::SQLAppState,
};

/// The request body for recording a deposit.
#[derive(Debug, Serialize, Deserialize)]
pub struct DepositForm {
    /// The member the deposit is for.
    pub member_id: MemberID,
    /// The savings type the deposit is made under.
    pub savings_type_id: DatabaseID,
    /// The deposited amount.
    pub amount: i64,
    /// When the deposit occurred. Defaults to the current time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

/// A route handler for recording a new deposit.
///
/// Responds with the created deposit record. The member's balance row for
/// the savings type is created or topped up as a side effect.
pub async fn create_deposit_endpoint(
    State(mut state): State<SQLAppState>,
    Json(form): Json<DepositForm>,
) -> Result<impl IntoResponse, Error> {
    let deposit = state
        .ledger
        .deposit(form.member_id, form.savings_type_id, form.amount, form.date)?;

    Ok((StatusCode::CREATED, Json(deposit)))
}

#[cfg(test)]
mod create_deposit_endpoint_tests {
    use axum::http::StatusCode;
    use time::macros::datetime;

    use crate::{
        endpoints,
        models::{MemberID, SavingsBalance, SavingsDeposit},
        test_utils::{create_test_member, create_test_savings_type, new_test_server},
    };

    use super::DepositForm;

    #[tokio::test]
    async fn create_deposit_returns_the_created_record() {
        let (server, mut state) = new_test_server();
        let member = create_test_member(&mut state, "Achieng Odhiambo", None);
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");

        let response = server
            .post(endpoints::DEPOSITS)
            .json(&DepositForm {
                member_id: member.id,
                savings_type_id: savings_type.id,
                amount: 1_500,
                date: Some(datetime!(2024-03-01 12:00 UTC)),
            })
            .await;

        response.assert_status(StatusCode::CREATED);
        let deposit: SavingsDeposit = response.json();
        assert_eq!(deposit.member_id, member.id);
        assert_eq!(deposit.savings_type_id, savings_type.id);
        assert_eq!(deposit.amount, 1_500);
        assert_eq!(deposit.occurred_at, datetime!(2024-03-01 12:00 UTC));
    }

    #[tokio::test]
    async fn deposits_accumulate_into_one_balance() {
        let (server, mut state) = new_test_server();
        let member = create_test_member(&mut state, "Achieng Odhiambo", None);
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");

        for amount in [1_000, 500] {
            let response = server
                .post(endpoints::DEPOSITS)
                .json(&DepositForm {
                    member_id: member.id,
                    savings_type_id: savings_type.id,
                    amount,
                    date: None,
                })
                .await;
            response.assert_status(StatusCode::CREATED);
        }

        let response = server
            .get(endpoints::SAVINGS)
            .add_query_param("member_id", member.id.as_i64())
            .await;

        response.assert_status_ok();
        let balances: Vec<SavingsBalance> = response.json();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].amount, 1_500);
    }

    #[tokio::test]
    async fn create_deposit_fails_on_unknown_member() {
        let (server, mut state) = new_test_server();
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");

        let response = server
            .post(endpoints::DEPOSITS)
            .json(&DepositForm {
                member_id: MemberID::new(404),
                savings_type_id: savings_type.id,
                amount: 1_000,
                date: None,
            })
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
