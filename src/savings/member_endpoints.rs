//! Defines the per-member endpoints: the savings total across all savings
//! types and the merged deposit/withdrawal history.
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    models::{LedgerEntry, MemberID},
    stores::{MemberStore, sqlite::SQLAppState},
};

/// A member's savings total across every savings type.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberSavingsTotal {
    /// The member the total is for.
    pub member_id: MemberID,
    /// The summed balance amounts, or `None` when the member has no
    /// balance rows.
    pub total: Option<i64>,
}

/// A route handler for a member's savings total.
///
/// The total is `null` for a registered member with no savings; an unknown
/// member is a 404.
pub async fn get_member_total_endpoint(
    State(state): State<SQLAppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<MemberSavingsTotal>, Error> {
    let member_id = MemberID::new(member_id);
    state.member_store.get(member_id)?;

    let total = state.ledger.member_total(member_id)?;

    Ok(Json(MemberSavingsTotal { member_id, total }))
}

/// A route handler for a member's merged transaction history, sorted
/// ascending by timestamp.
pub async fn get_member_transactions_endpoint(
    State(state): State<SQLAppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<Vec<LedgerEntry>>, Error> {
    let member_id = MemberID::new(member_id);
    state.member_store.get(member_id)?;

    let history = state.ledger.transaction_history(member_id)?;

    Ok(Json(history))
}
