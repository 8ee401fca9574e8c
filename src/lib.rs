//! Finance Tracker is a web app for tracking income and expenses.
//!
//! The server renders HTML pages with maud and htmx. It is a client of a
//! transactions REST API and falls back to an in-memory mock store when that
//! API cannot be reached.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
pub mod api;
mod app_state;
mod dashboard;
mod endpoints;
mod error_page;
mod html;
mod logging;
pub mod mock_store;
mod navigation;
pub mod repository;
mod routing;
pub mod store;
mod stub_api;
mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{add_tracing_layer, setup_logging};
pub use routing::build_router;
pub use stub_api::build_stub_api_router;
pub use timezone::get_local_offset;

use crate::{alert::Alert, api::ApiError, error_page::ErrorPage};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A call to the transactions API failed and the fallback policy did not
    /// allow answering from the mock store.
    #[error("the transactions API request failed: {0}")]
    Api(#[from] ApiError),

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that does not exist")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that does not exist")]
    DeleteMissingTransaction,

    /// Could not acquire the lock on the mock store.
    #[error("could not acquire the mock store lock")]
    MockStoreLockError,

    /// Could not acquire the lock on the shared transaction state.
    #[error("could not acquire the transaction state lock")]
    StateLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

fn invalid_timezone_fix(timezone: &str) -> String {
    format!(
        "Could not get local timezone \"{timezone}\". Check your server settings and \
        ensure the timezone has been set to a valid, canonical timezone string"
    )
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                ErrorPage::not_found(
                    "Transaction not found",
                    "It may have been deleted. Go back to the transactions page and try again.",
                )
                .into_response()
            }
            Error::InvalidTimezoneError(timezone) => {
                ErrorPage::internal("Invalid Timezone Settings", &invalid_timezone_fix(&timezone))
                    .into_response()
            }
            Error::Api(error) => {
                tracing::error!("Unhandled API error: {error}");
                ErrorPage::internal(
                    "Could not reach the transactions API",
                    "Check that the API is running or start the server with --fallback always.",
                )
                .into_response()
            }
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                ErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for htmx requests.
    pub(crate) fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error("Invalid Timezone Settings", &invalid_timezone_fix(&timezone)),
            ),
            Error::UpdateMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not update transaction",
                    "The transaction could not be found.",
                ),
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not delete transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                ),
            ),
            Error::Api(error) => (
                StatusCode::BAD_GATEWAY,
                Alert::error("Could not reach the transactions API", &error.to_string()),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        };

        alert.into_response_with_status(status_code)
    }
}
