//! The shared cache of transactions that every page renders from.
//!
//! Consistency follows a write-then-refetch policy: every mutation performs
//! its single repository call and then always refetches the full list, so the
//! cache never holds locally patched data. There is no optimistic update and
//! nothing to roll back.
//!
//! Overlapping calls are neither queued nor cancelled. Each refresh takes a
//! request token when it starts and its result is only applied if no refresh
//! that started later has been applied already, so an out-of-order completion
//! cannot overwrite newer data.

use std::{
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use crate::{
    Error,
    repository::{DataSource, Fetched, TransactionRepository},
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

const REFRESH_ERROR: &str = "Failed to fetch transactions";
const ADD_ERROR: &str = "Failed to add transaction";
const UPDATE_ERROR: &str = "Failed to update transaction";
const DELETE_ERROR: &str = "Failed to delete transaction";
const FETCH_ONE_ERROR: &str = "Failed to fetch transaction by ID";

/// How long a page waits for the first load before rendering its loading view.
pub const FIRST_LOAD_WAIT: Duration = Duration::from_millis(500);

/// A copy of the store's state for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// The transactions in the order the last applied list fetch returned them.
    pub transactions: Vec<Transaction>,
    /// Whether any operation is in flight.
    pub loading: bool,
    /// A message describing the last failed operation.
    pub error: Option<String>,
    /// Where the cached list came from, `None` until the first list fetch is applied.
    pub source: Option<DataSource>,
}

impl Snapshot {
    /// Whether a list fetch has ever been applied.
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }
}

#[derive(Debug, Default)]
struct StoreState {
    transactions: Vec<Transaction>,
    error: Option<String>,
    source: Option<DataSource>,
    in_flight: usize,
    applied_token: u64,
}

/// The state provider: a cached transaction list plus loading and error state.
///
/// Clones share the same cache.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    repository: TransactionRepository,
    state: Arc<Mutex<StoreState>>,
    next_token: Arc<AtomicU64>,
}

impl TransactionStore {
    /// Create an empty, not yet loaded store backed by `repository`.
    pub fn new(repository: TransactionRepository) -> Self {
        Self {
            repository,
            state: Arc::new(Mutex::new(StoreState::default())),
            next_token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Result<Snapshot, Error> {
        let state = self.lock()?;

        Ok(Snapshot {
            transactions: state.transactions.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
            source: state.source,
        })
    }

    /// Refetch the full list and replace the cache with it.
    ///
    /// On success the error message is cleared. On failure the error message
    /// is set, the cached list is kept and the error is returned.
    pub async fn refresh(&self) -> Result<(), Error> {
        let _loading = LoadingGuard::start(&self.state)?;
        let token = self.begin_refresh();

        let result = self.repository.list().await;

        self.finish_refresh(token, result)
    }

    /// Load the list if it has never been loaded or the last operation failed.
    pub async fn load_if_needed(&self) -> Result<(), Error> {
        let is_current = {
            let state = self.lock()?;
            state.source.is_some() && state.error.is_none()
        };

        if is_current {
            return Ok(());
        }

        self.refresh().await
    }

    /// Run [TransactionStore::load_if_needed] for at most `wait`.
    ///
    /// The load runs as its own task, so when `wait` runs out it keeps going
    /// and a later request renders its result. No new load is started while
    /// the first one is still pending.
    pub async fn load_within(&self, wait: Duration) -> Result<(), Error> {
        let first_load_pending = {
            let state = self.lock()?;
            state.source.is_none() && state.in_flight > 0
        };

        if first_load_pending {
            return Ok(());
        }

        let store = self.clone();
        let load = tokio::spawn(async move { store.load_if_needed().await });

        match tokio::time::timeout(wait, load).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => {
                tracing::error!("Loading transactions panicked: {join_error}");
                Ok(())
            }
            Err(_) => {
                tracing::debug!("Transactions still loading after {wait:?}");
                Ok(())
            }
        }
    }

    /// Create a transaction, then refetch the list.
    pub async fn add(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let _loading = LoadingGuard::start(&self.state)?;

        let result = self.repository.create(new_transaction).await;
        self.resync().await;

        match result {
            Ok(fetched) => Ok(fetched.data),
            Err(error) => {
                self.set_error(ADD_ERROR)?;
                Err(error)
            }
        }
    }

    /// Update the transaction with `id`, then refetch the list.
    ///
    /// Returns `None` if there is no transaction with `id`.
    pub async fn update(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, Error> {
        let _loading = LoadingGuard::start(&self.state)?;

        let result = self.repository.update(id, patch).await;
        self.resync().await;

        match result {
            Ok(fetched) => Ok(fetched.data),
            Err(error) => {
                self.set_error(UPDATE_ERROR)?;
                Err(error)
            }
        }
    }

    /// Delete the transaction with `id`, then refetch the list.
    ///
    /// Returns whether the transaction existed.
    pub async fn remove(&self, id: &str) -> Result<bool, Error> {
        let _loading = LoadingGuard::start(&self.state)?;

        let result = self.repository.delete(id).await;
        self.resync().await;

        match result {
            Ok(fetched) => Ok(fetched.data),
            Err(error) => {
                self.set_error(DELETE_ERROR)?;
                Err(error)
            }
        }
    }

    /// Find the transaction with `id` in the cached list without fetching anything.
    pub fn get_local(&self, id: &str) -> Result<Option<Transaction>, Error> {
        Ok(self
            .lock()?
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned())
    }

    /// Fetch the transaction with `id` from the repository, ignoring the cache.
    ///
    /// The cached list is left untouched.
    pub async fn fetch_fresh(&self, id: &str) -> Result<Option<Transaction>, Error> {
        let _loading = LoadingGuard::start(&self.state)?;

        match self.repository.get_by_id(id).await {
            Ok(fetched) => {
                self.lock()?.error = None;
                Ok(fetched.data)
            }
            Err(error) => {
                self.set_error(FETCH_ONE_ERROR)?;
                Err(error)
            }
        }
    }

    fn begin_refresh(&self) -> u64 {
        self.next_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn finish_refresh(
        &self,
        token: u64,
        result: Result<Fetched<Vec<Transaction>>, Error>,
    ) -> Result<(), Error> {
        let mut state = self.lock()?;

        if token <= state.applied_token {
            tracing::debug!(
                "Discarding refresh {token}, refresh {} was already applied",
                state.applied_token
            );
            return Ok(());
        }

        state.applied_token = token;

        match result {
            Ok(fetched) => {
                tracing::debug!(
                    "Applied refresh {token}: {} transactions from {}",
                    fetched.data.len(),
                    fetched.source
                );
                state.transactions = fetched.data;
                state.source = Some(fetched.source);
                state.error = None;
                Ok(())
            }
            Err(error) => {
                tracing::error!("Could not refresh transactions: {error}");
                state.error = Some(REFRESH_ERROR.to_owned());
                Err(error)
            }
        }
    }

    /// Refetch after a mutation regardless of the mutation's outcome.
    async fn resync(&self) {
        if let Err(error) = self.refresh().await {
            tracing::warn!("Could not refresh transactions after a change: {error}");
        }
    }

    fn set_error(&self, message: &str) -> Result<(), Error> {
        self.lock()?.error = Some(message.to_owned());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, Error> {
        self.state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
            .map_err(|_| Error::StateLockError)
    }
}

/// Counts an operation as in flight until dropped.
struct LoadingGuard {
    state: Arc<Mutex<StoreState>>,
}

impl LoadingGuard {
    fn start(state: &Arc<Mutex<StoreState>>) -> Result<Self, Error> {
        state
            .lock()
            .map_err(|_| Error::StateLockError)?
            .in_flight += 1;

        Ok(Self {
            state: Arc::clone(state),
        })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.in_flight = state.in_flight.saturating_sub(1);
        }
    }
}
