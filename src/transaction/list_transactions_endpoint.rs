//! Defines the endpoint for listing every transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, list_transactions},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler returning every transaction, unfiltered, in store order.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.db_connection.lock().unwrap();
    let transactions = list_transactions(&connection)?;

    Ok(Json(transactions))
}
