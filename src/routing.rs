//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, put},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_delete_transaction_page, get_edit_transaction_page, get_new_transaction_page,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_VIEW,
            get(get_transactions_page).post(create_transaction_endpoint),
        )
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_new_transaction_page),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(
            endpoints::DELETE_TRANSACTION_VIEW,
            get(get_delete_transaction_page),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
