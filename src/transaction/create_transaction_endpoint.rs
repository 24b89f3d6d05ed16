//! Defines the endpoint for creating a new transaction.
use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, Error,
    chart::regenerate_plots,
    transaction::{NewTransaction, create_transaction, list_transactions},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The directory that chart artifacts are written to.
    pub plot_dir: PathBuf,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            plot_dir: state.plot_dir.clone(),
        }
    }
}

/// A route handler for creating a new transaction.
///
/// Responds with `201 Created` and the assigned ID on success. A payload with
/// a missing field or a non-numeric amount is rejected with a structured
/// `400 Bad Request` before touching the database.
///
/// After a successful insert, chart regeneration is scheduled as a detached
/// background task; its outcome never affects this response.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_transaction) =
        payload.map_err(|rejection| Error::InvalidPayload(rejection.body_text()))?;

    let transaction = {
        let connection = state.db_connection.lock().unwrap();
        create_transaction(new_transaction, &connection)?
    };

    schedule_plot_regeneration(state.db_connection.clone(), state.plot_dir.clone());

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Transaction added!", "id": transaction.id })),
    ))
}

/// Re-render the chart artifacts on the blocking thread pool.
///
/// Failures are logged as warnings and otherwise ignored so that a slow or
/// broken renderer cannot stall or fail the write path.
fn schedule_plot_regeneration(db_connection: Arc<Mutex<Connection>>, plot_dir: PathBuf) {
    tokio::task::spawn_blocking(move || {
        let transactions = {
            let connection = db_connection.lock().unwrap();
            list_transactions(&connection)
        };

        match transactions {
            Ok(transactions) => regenerate_plots(&transactions, &plot_dir),
            Err(error) => {
                tracing::warn!("Skipping chart regeneration, could not read transactions: {error}")
            }
        }
    });
}
