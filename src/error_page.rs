//! Full-page responses for requests that failed: 404 and 500.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A full error page with the status code as its header.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPage {
    status_code: StatusCode,
    description: String,
    fix: String,
}

impl ErrorPage {
    /// A 404 page for a route or record that does not exist.
    pub fn not_found(description: &str, fix: &str) -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            description: description.to_owned(),
            fix: fix.to_owned(),
        }
    }

    /// A 500 page.
    pub fn internal(description: &str, fix: &str) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            description: description.to_owned(),
            fix: fix.to_owned(),
        }
    }
}

impl Default for ErrorPage {
    fn default() -> Self {
        Self::internal(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let title = match self.status_code {
            StatusCode::NOT_FOUND => "Not Found",
            _ => "Internal Server Error",
        };
        let markup = error_view(
            title,
            self.status_code.as_str(),
            &self.description,
            &self.fix,
        );

        (self.status_code, Html(markup.into_string())).into_response()
    }
}

/// The fallback handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found(
        "Page not found",
        "Check the address or go back to the dashboard.",
    )
    .into_response()
}

/// The page htmx requests are redirected to after an unexpected error.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}
