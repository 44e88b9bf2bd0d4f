//! Defines the app level error type and its conversion to JSON HTTP responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A withdrawal was requested against a (member, savings type) pair that
    /// has no balance row.
    ///
    /// This is a validation failure, not a fault: the member simply has no
    /// savings of the requested type.
    #[error("the member has no savings of the requested type")]
    NoBalance,

    /// A withdrawal was requested for more than the stored balance.
    ///
    /// The comparison is made against the balance row's stored amount. The
    /// balance is left unchanged when this error is returned.
    #[error("the withdrawal amount exceeds the member's savings balance")]
    InsufficientFunds,

    /// The requested resource was not found.
    ///
    /// Internally, this error occurs when a query returns no rows. The
    /// deposit path relies on it to choose between creating a new balance
    /// row and topping up an existing one.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A record referenced a member, group, or savings type that does not
    /// exist in the database.
    #[error("a referenced member, group, or savings type does not exist")]
    InvalidReference,

    /// Tried to delete a savings type that withdrawal records still
    /// reference.
    ///
    /// Withdrawals protect their savings type; balances and deposits cascade
    /// with it instead.
    #[error("the savings type is referenced by existing withdrawal records")]
    ReferentialIntegrity,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLock,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(_))
                if sql_error.extended_code == 787 =>
            {
                Error::InvalidReference
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Error::NoBalance | Error::InsufficientFunds | Error::InvalidReference => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::ReferentialIntegrity => (StatusCode::CONFLICT, self.to_string()),
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred, check the server logs for more details"
                        .to_owned(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn maps_query_returned_no_rows_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn validation_errors_map_to_unprocessable_entity() {
        for error in [Error::NoBalance, Error::InsufficientFunds] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn referential_integrity_maps_to_conflict() {
        let response = Error::ReferentialIntegrity.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
