//! The endpoint URIs for the web UI and the transactions API.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}/edit',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page with the income, expense and balance summary.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing transactions. Also accepts form submissions for new transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for creating a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";
/// The page asking the user to confirm deleting a transaction.
pub const DELETE_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/delete";
/// The route for updating (PUT) or deleting (DELETE) a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The transactions collection of the REST API.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// A single transaction in the REST API.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}'
/// is the parameter.
///
/// `id` is percent-encoded so that IDs containing reserved characters stay a
/// single path segment.
///
/// If no parameter is found in `endpoint_path`, it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        encode_path_segment(id),
        &endpoint_path[param_end..]
    )
}

fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());

    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    encoded
}
