//! Defines the endpoints for reading the savings type catalog.
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    models::SavingsType,
    stores::{SavingsTypeStore, sqlite::SQLAppState},
};

/// A route handler for listing every savings type in the catalog.
pub async fn get_savings_types_endpoint(
    State(state): State<SQLAppState>,
) -> Result<Json<Vec<SavingsType>>, Error> {
    let savings_types = state.savings_type_store.get_all()?;

    Ok(Json(savings_types))
}

/// A route handler for getting a single savings type by its ID.
pub async fn get_savings_type_endpoint(
    State(state): State<SQLAppState>,
    Path(savings_type_id): Path<i64>,
) -> Result<Json<SavingsType>, Error> {
    let savings_type = state.savings_type_store.get(savings_type_id)?;

    Ok(Json(savings_type))
}
