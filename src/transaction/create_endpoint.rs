//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{endpoints, store::TransactionStore, transaction::form::TransactionForm};

/// A route handler for creating a new transaction, redirects to transactions view on success.
///
/// Invalid input is rejected with an alert before anything is sent to the API.
pub async fn create_transaction_endpoint(
    State(store): State<TransactionStore>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match form.validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("Rejected new transaction: {error}");
            return error.into_alert_response();
        }
    };

    match store.add(new_transaction).await {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            error.into_alert_response()
        }
    }
}
