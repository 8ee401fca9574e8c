//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    store::TransactionStore,
    transaction::TransactionId,
};

/// The query parameters for deleting a transaction.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    /// Set by the confirmation page. Without it the request is sent to that page.
    #[serde(default)]
    pub confirmed: bool,
}

/// A route handler for deleting a transaction, redirects to transactions view on success.
pub async fn delete_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    if !query.confirmed {
        return (
            HxRedirect(format_endpoint(
                endpoints::DELETE_TRANSACTION_VIEW,
                &transaction_id,
            )),
            StatusCode::SEE_OTHER,
        )
            .into_response();
    }

    match store.remove(&transaction_id).await {
        Ok(true) => {
            tracing::info!("Deleted transaction {transaction_id}");

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Ok(false) => Error::DeleteMissingTransaction.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
