//! An in-memory list of transactions that stands in for the API when it is unreachable.

use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionPatch, seed_transactions},
};

/// Upper bound (exclusive) for the numeric IDs the mock store assigns.
const MAX_MOCK_ID: u32 = 1_000_000;

/// A process-local, mutable list of transactions.
///
/// Clones share the same list, so a store handed to the repository and to a
/// test can be inspected from both sides. Separate calls to [MockStore::new]
/// or [MockStore::seeded] never share state.
#[derive(Debug, Clone)]
pub struct MockStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MockStore {
    /// Create a store holding `transactions`.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
        }
    }

    /// Create a store holding the eight sample transactions.
    pub fn seeded() -> Self {
        Self::new(seed_transactions())
    }

    /// A copy of every transaction, in insertion order.
    pub fn list(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.clone())
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.lock()?.is_empty())
    }

    /// Find the transaction with `id`.
    pub fn get(&self, id: &str) -> Result<Option<Transaction>, Error> {
        Ok(self
            .lock()?
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned())
    }

    /// Append `new_transaction` with a pseudo-random numeric ID that is not
    /// used by any other transaction in the store.
    pub fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut transactions = self.lock()?;
        let mut rng = rand::thread_rng();

        let id = loop {
            let candidate = rng.gen_range(0..MAX_MOCK_ID).to_string();

            if !transactions.iter().any(|transaction| transaction.id == candidate) {
                break candidate;
            }
        };

        let transaction = Transaction::from_new(id, new_transaction);
        transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Merge `patch` into the transaction with `id`, in place.
    ///
    /// Returns `None` if there is no such transaction.
    pub fn update(&self, id: &str, patch: TransactionPatch) -> Result<Option<Transaction>, Error> {
        let mut transactions = self.lock()?;

        let Some(transaction) = transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        else {
            return Ok(None);
        };

        transaction.apply(patch);

        Ok(Some(transaction.clone()))
    }

    /// Remove the transaction with `id`.
    ///
    /// Returns `true` if the store shrank by one entry.
    pub fn delete(&self, id: &str) -> Result<bool, Error> {
        let mut transactions = self.lock()?;
        let initial_length = transactions.len();

        transactions.retain(|transaction| transaction.id != id);

        Ok(transactions.len() < initial_length)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Transaction>>, Error> {
        self.transactions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire mock store lock: {error}"))
            .map_err(|_| Error::MockStoreLockError)
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}
