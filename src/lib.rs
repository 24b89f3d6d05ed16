//! Spendtrace is a small web service for tracking personal spending.
//!
//! This library provides a JSON REST API for recording transactions and a set
//! of chart renderers that turn the recorded transactions into static HTML
//! visualizations (stacked bar, pie with a period selector, line, heatmap).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod chart;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod routing;
mod state;
mod transaction;

pub use chart::regenerate_plots;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use state::AppState;
pub use transaction::{NewTransaction, Transaction, create_transaction};

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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request payload was missing a field or a field had the wrong type.
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),

    /// The transaction description exceeds the maximum allowed length.
    #[error("description must be at most 255 characters")]
    DescriptionTooLong,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// A chart artifact could not be read or written.
    #[error("could not access chart artifact: {0}")]
    ArtifactIo(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
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
        let (status, message) = match &self {
            Error::InvalidPayload(_) | Error::DescriptionTooLong => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Error::NotFound | Error::DeleteMissingTransaction => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
