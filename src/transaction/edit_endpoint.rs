//! Defines the endpoint for updating an existing transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    Error, endpoints,
    store::TransactionStore,
    transaction::{TransactionId, form::TransactionForm},
};

/// A route handler for updating a transaction, redirects to transactions view on success.
pub async fn edit_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let replacement = match form.validate() {
        Ok(replacement) => replacement,
        Err(error) => {
            tracing::debug!("Rejected update to transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    match store.update(&transaction_id, replacement.into()).await {
        Ok(Some(_)) => {
            tracing::info!("Updated transaction {transaction_id}");

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Ok(None) => {
            tracing::warn!("Tried to update missing transaction {transaction_id}");
            Error::UpdateMissingTransaction.into_alert_response()
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
