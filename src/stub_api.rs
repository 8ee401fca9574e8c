//! A stand-in for the transactions REST API backed by a [MockStore].
//!
//! Serves the same routes and status codes the web UI expects from the real
//! API, for running the app locally and for exercising the HTTP client in tests.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    Error, endpoints,
    mock_store::MockStore,
    transaction::{NewTransaction, TransactionPatch},
};

/// Return a router that serves the transactions API from `store`.
pub fn build_stub_api_router(store: MockStore) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions).post(create_transaction),
        )
        .route(
            endpoints::TRANSACTION_API,
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .with_state(store)
}

async fn list_transactions(State(store): State<MockStore>) -> Response {
    match store.list() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => api_error_response(error),
    }
}

async fn get_transaction(State(store): State<MockStore>, Path(id): Path<String>) -> Response {
    match store.get(&id) {
        Ok(Some(transaction)) => Json(transaction).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => api_error_response(error),
    }
}

async fn create_transaction(
    State(store): State<MockStore>,
    Json(new_transaction): Json<NewTransaction>,
) -> Response {
    match store.create(new_transaction) {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);
            (StatusCode::CREATED, Json(transaction)).into_response()
        }
        Err(error) => api_error_response(error),
    }
}

async fn update_transaction(
    State(store): State<MockStore>,
    Path(id): Path<String>,
    Json(patch): Json<TransactionPatch>,
) -> Response {
    match store.update(&id, patch) {
        Ok(Some(transaction)) => {
            tracing::info!("Updated transaction {id}");
            Json(transaction).into_response()
        }
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => api_error_response(error),
    }
}

async fn delete_transaction(State(store): State<MockStore>, Path(id): Path<String>) -> Response {
    match store.delete(&id) {
        Ok(true) => {
            tracing::info!("Deleted transaction {id}");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => api_error_response(error),
    }
}

fn api_error_response(error: Error) -> Response {
    tracing::error!("Stub API request failed: {error}");
    (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
}
