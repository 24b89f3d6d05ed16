//! Application router configuration.

use axum::{
    Router,
    http::{Method, header},
    middleware,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    chart::latest_plot_endpoint,
    endpoints,
    logging::logging_middleware,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        preflight_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every response carries permissive cross-origin headers so the API can be
/// called from a browser front end on any origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint).options(preflight_endpoint),
        )
        .route(endpoints::LATEST_PLOT, get(latest_plot_endpoint))
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
