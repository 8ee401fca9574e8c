//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;

use crate::store::TransactionStore;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The shared cache of transactions that every page renders from.
    pub store: TransactionStore,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create the server state.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(store: TransactionStore, local_timezone: &str) -> Self {
        Self {
            store,
            local_timezone: local_timezone.to_owned(),
        }
    }
}

impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
