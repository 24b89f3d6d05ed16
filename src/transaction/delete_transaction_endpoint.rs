//! Defines the endpoints for deleting a transaction, including the
//! cross-origin preflight probe for the same path.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rusqlite::Connection;
use serde_json::json;

use crate::{AppState, Error, database_id::TransactionId, transaction::delete_transaction};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a transaction by its ID.
///
/// Responds with a confirmation message on success and a structured
/// `404 Not Found` if the ID was never issued or already deleted.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<impl IntoResponse, Error> {
    let connection = state.db_connection.lock().unwrap();

    match delete_transaction(transaction_id, &connection) {
        Ok(0) => Err(Error::DeleteMissingTransaction),
        Ok(_) => Ok(Json(
            json!({ "message": "Transaction deleted successfully" }),
        )),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            Err(error)
        }
    }
}

/// A route handler answering a plain cross-origin capability probe.
///
/// Always responds with an empty success, regardless of whether the probed
/// transaction exists. The access-control headers themselves are attached by
/// the CORS layer.
pub async fn preflight_endpoint() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        transaction::{
            NewTransaction, create_transaction,
            delete_transaction_endpoint::{
                DeleteTransactionState, delete_transaction_endpoint, preflight_endpoint,
            },
            list_transactions,
        },
    };

    fn get_test_state() -> DeleteTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        DeleteTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let state = get_test_state();
        let transaction = {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction {
                    description: "Test".to_owned(),
                    amount: 1.23,
                    category: "Others".to_owned(),
                    date: "2025-04-01".to_owned(),
                },
                &connection,
            )
            .unwrap()
        };

        let response = delete_transaction_endpoint(State(state.clone()), Path(transaction.id))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_transactions(&connection).unwrap(), vec![]);
    }

    #[tokio::test]
    async fn delete_missing_transaction_is_not_found() {
        let state = get_test_state();

        let response = delete_transaction_endpoint(State(state), Path(999))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn preflight_succeeds_for_missing_transaction() {
        let response = preflight_endpoint().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
