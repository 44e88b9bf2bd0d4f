//! Defines the endpoints for registering members and groups.
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    models::GroupID,
    stores::{MemberStore, sqlite::SQLAppState},
};

/// The request body for registering a member.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberForm {
    /// The member's display name.
    pub name: String,
    /// The group to place the member in, if any.
    pub group_id: Option<GroupID>,
}

/// A route handler for registering a new member.
pub async fn create_member_endpoint(
    State(mut state): State<SQLAppState>,
    Json(form): Json<MemberForm>,
) -> Result<impl IntoResponse, Error> {
    let member = state.member_store.create(&form.name, form.group_id)?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// The request body for registering a group.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupForm {
    /// The group's display name.
    pub name: String,
}

/// A route handler for registering a new group.
pub async fn create_group_endpoint(
    State(mut state): State<SQLAppState>,
    Json(form): Json<GroupForm>,
) -> Result<impl IntoResponse, Error> {
    let group = state.member_store.create_group(&form.name)?;

    Ok((StatusCode::CREATED, Json(group)))
}

#[cfg(test)]
mod create_member_endpoint_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        models::{Group, GroupID, Member},
        test_utils::new_test_server,
    };

    use super::{GroupForm, MemberForm};

    #[tokio::test]
    async fn create_member_and_group() {
        let (server, _state) = new_test_server();

        let response = server
            .post(endpoints::GROUPS)
            .json(&GroupForm {
                name: "Umoja group".to_owned(),
            })
            .await;
        response.assert_status(StatusCode::CREATED);
        let group: Group = response.json();

        let response = server
            .post(endpoints::MEMBERS)
            .json(&MemberForm {
                name: "Achieng Odhiambo".to_owned(),
                group_id: Some(group.id),
            })
            .await;

        response.assert_status(StatusCode::CREATED);
        let member: Member = response.json();
        assert_eq!(member.name, "Achieng Odhiambo");
        assert_eq!(member.group_id, Some(group.id));
    }

    #[tokio::test]
    async fn create_member_fails_on_unknown_group() {
        let (server, _state) = new_test_server();

        let response = server
            .post(endpoints::MEMBERS)
            .json(&MemberForm {
                name: "Achieng Odhiambo".to_owned(),
                group_id: Some(GroupID::new(404)),
            })
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
