//! Defines the endpoints for reading the member directory.
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    models::{GroupID, Member, MemberID},
    stores::{MemberStore, sqlite::SQLAppState},
};

/// A route handler for listing every registered member.
pub async fn get_members_endpoint(
    State(state): State<SQLAppState>,
) -> Result<Json<Vec<Member>>, Error> {
    let members = state.member_store.get_all()?;

    Ok(Json(members))
}

/// A route handler for getting a single member by their ID.
pub async fn get_member_endpoint(
    State(state): State<SQLAppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<Member>, Error> {
    let member = state.member_store.get(MemberID::new(member_id))?;

    Ok(Json(member))
}

/// A route handler for listing every member whose group matches.
///
/// An unknown group is a 404; a known group with no members is an empty
/// list.
pub async fn get_group_members_endpoint(
    State(state): State<SQLAppState>,
    Path(group_id): Path<i64>,
) -> Result<Json<Vec<Member>>, Error> {
    let group_id = GroupID::new(group_id);
    state.member_store.get_group(group_id)?;

    let members = state.member_store.get_by_group(group_id)?;

    Ok(Json(members))
}
