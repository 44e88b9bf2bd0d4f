//! Defines the endpoint for adding a savings type to the catalog.
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{Error, models::NewSavingsType, stores::{SavingsTypeStore, sqlite::SQLAppState}};

/// A route handler for creating a new savings type.
pub async fn create_savings_type_endpoint(
    State(mut state): State<SQLAppState>,
    Json(new_savings_type): Json<NewSavingsType>,
) -> Result<impl IntoResponse, Error> {
    let savings_type = state.savings_type_store.create(new_savings_type)?;

    Ok((StatusCode::CREATED, Json(savings_type)))
}
