//! Error alerts that htmx swaps into the page's alert container.
//!
//! Forms send failed requests to `#alert-container` via `hx-target-error`,
//! so an alert is the body of every non-2xx response to an htmx request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message with optional details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    message: String,
    details: String,
}

impl Alert {
    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert without details.
    pub fn error_simple(message: &str) -> Self {
        Self::error(message, "")
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                id="alert"
                role="alert"
                class="flex items-start justify-between gap-4 p-4 mb-4 border rounded-lg
                    text-red-800 border-red-300 bg-red-50 dark:bg-gray-800
                    dark:text-red-400 dark:border-red-800"
            {
                div
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="text-sm" { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Close"
                    class="text-sm font-bold"
                    onclick="document.getElementById('alert-container').classList.add('hidden')"
                {
                    "×"
                }
            }

            script
            {
                "document.getElementById('alert-container').classList.remove('hidden');"
            }
        }
    }

    /// Render the alert as the body of a response with `status_code`.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}
