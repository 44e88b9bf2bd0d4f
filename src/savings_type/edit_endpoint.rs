//! Defines the endpoint for editing an existing savings type.
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    models::{NewSavingsType, SavingsType},
    stores::{SavingsTypeStore, sqlite::SQLAppState},
};

/// A route handler for replacing the fields of an existing savings type.
pub async fn edit_savings_type_endpoint(
    State(mut state): State<SQLAppState>,
    Path(savings_type_id): Path<i64>,
    Json(fields): Json<NewSavingsType>,
) -> Result<Json<SavingsType>, Error> {
    let savings_type = state.savings_type_store.update(&SavingsType {
        id: savings_type_id,
        name: fields.name,
        category: fields.category,
        compulsory: fields.compulsory,
        interval: fields.interval,
        minimum_amount: fields.minimum_amount,
        maximum_amount: fields.maximum_amount,
        interest: fields.interest,
    })?;

    Ok(Json(savings_type))
}

#[cfg(test)]
mod edit_savings_type_endpoint_tests {
    use crate::{
        endpoints::{self, format_endpoint},
        models::{NewSavingsType, SavingsType},
        test_utils::{create_test_savings_type, new_test_server},
    };

    #[tokio::test]
    async fn edit_replaces_the_stored_fields() {
        let (server, mut state) = new_test_server();
        let savings_type = create_test_savings_type(&mut state, "Ordinary savings");

        let response = server
            .put(&format_endpoint(
                endpoints::SAVINGS_TYPE,
                "{savings_type_id}",
                savings_type.id,
            ))
            .json(&NewSavingsType {
                name: "Ordinary savings".to_owned(),
                category: savings_type.category,
                compulsory: false,
                interval: savings_type.interval,
                minimum_amount: 2_000,
                maximum_amount: 200_000,
                interest: 5,
            })
            .await;

        response.assert_status_ok();
        let got: SavingsType = response.json();
        assert_eq!(got.id, savings_type.id);
        assert_eq!(got.interest, 5);
        assert!(!got.compulsory);
    }

    #[tokio::test]
    async fn edit_fails_on_invalid_id() {
        let (server, _state) = new_test_server();

        let response = server
            .put(&format_endpoint(
                endpoints::SAVINGS_TYPE,
                "{savings_type_id}",
                404,
            ))
            .json(&NewSavingsType {
                name: "Ghost savings".to_owned(),
                category: Default::default(),
                compulsory: true,
                interval: Default::default(),
                minimum_amount: 0,
                maximum_amount: 0,
                interest: 0,
            })
            .await;

        response.assert_status_not_found();
    }
}
