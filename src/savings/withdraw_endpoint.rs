//! Defines the endpoint for recording a savings withdrawal.
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    models::{DatabaseID, MemberID},
    stores::sqlite::SQLAppState,
};

/// The request body for recording a withdrawal.
#[derive(Debug, Serialize, Deserialize)]
pub struct WithdrawalForm {
    /// The member the withdrawal is for.
    pub member_id: MemberID,
    /// The savings type the withdrawal is made under.
    pub savings_type_id: DatabaseID,
    /// The withdrawn amount.
    pub amount: i64,
}

/// A route handler for recording a new withdrawal.
///
/// Responds with the created withdrawal record, or a validation error when
/// the member has no savings of the requested type or not enough of them.
pub async fn create_withdrawal_endpoint(
    State(mut state): State<SQLAppState>,
    Json(form): Json<WithdrawalForm>,
) -> Result<impl IntoResponse, Error> {
    let withdrawal = state
        .ledger
        .withdraw(form.member_id, form.savings_type_id, form.amount)?;

    Ok((StatusCode::CREATED, Json(withdrawal)))
}
