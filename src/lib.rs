//! Sacco Ledger is a web backend for administering the savings accounts of a
//! savings and credit cooperative (SACCO).
//!
//! This library provides a JSON REST API over the savings ledger: deposits
//! and withdrawals recorded against one running balance per member and
//! savings type, and filtered views of balances and transaction history by
//! member, group, or savings type.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod db;
pub mod endpoints;
mod error;
pub mod ledger;
mod logging;
mod member;
pub mod models;
mod routing;
mod savings;
mod savings_type;
mod state;
pub mod stores;
#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use ledger::{Ledger, MemberFilter};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
