//! Defines the route handler for the page for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    timezone::today_in,
    transaction::form::{FormAction, TransactionFormDefaults, transaction_form_view},
};

/// The state needed for the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating a transaction. The date defaults to today.
pub async fn get_new_transaction_page(State(state): State<NewTransactionPageState>) -> Response {
    let today = match today_in(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    transaction_form_view(
        "Add New Transaction",
        FormAction::Create,
        &TransactionFormDefaults::blank(today),
    )
    .into_response()
}
