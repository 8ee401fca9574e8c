//! Data access for transactions: the API first, the mock store when the API fails.

use std::fmt::Display;

use clap::ValueEnum;

use crate::{
    Error,
    api::{ApiClient, ApiError},
    mock_store::MockStore,
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// What to do when a call to the API fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FallbackPolicy {
    /// Answer from the mock store and log a warning.
    #[default]
    Always,
    /// Return the API error to the caller.
    Never,
}

/// Where a piece of data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The transactions API.
    Remote,
    /// The mock store, because the API call failed.
    Fallback,
}

impl Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote => f.write_str("remote"),
            DataSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// The result of a repository call tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    /// The data returned by the API or the mock store.
    pub data: T,
    /// Whether `data` came from the API or the mock store.
    pub source: DataSource,
}

impl<T> Fetched<T> {
    fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
        }
    }

    fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }
}

/// Transaction CRUD over the API with the mock store as a fallback.
///
/// A missing transaction is reported as `None` or `false`, never as an error,
/// and never triggers the fallback.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    client: ApiClient,
    mock_store: MockStore,
    fallback_policy: FallbackPolicy,
}

impl TransactionRepository {
    /// Create a repository that calls the API with `client` and falls back to
    /// `mock_store` according to `fallback_policy`.
    pub fn new(client: ApiClient, mock_store: MockStore, fallback_policy: FallbackPolicy) -> Self {
        Self {
            client,
            mock_store,
            fallback_policy,
        }
    }

    /// Get every transaction.
    pub async fn list(&self) -> Result<Fetched<Vec<Transaction>>, Error> {
        match self.client.list().await {
            Ok(transactions) => Ok(Fetched::remote(transactions)),
            Err(error) => {
                self.check_fallback(error, "list transactions")?;
                Ok(Fetched::fallback(self.mock_store.list()?))
            }
        }
    }

    /// Get the transaction with `id`.
    pub async fn get_by_id(&self, id: &str) -> Result<Fetched<Option<Transaction>>, Error> {
        match self.client.get_by_id(id).await {
            Ok(transaction) => Ok(Fetched::remote(transaction)),
            Err(error) => {
                self.check_fallback(error, &format!("get transaction {id}"))?;
                Ok(Fetched::fallback(self.mock_store.get(id)?))
            }
        }
    }

    /// Store a new transaction and return it with its assigned ID.
    pub async fn create(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Fetched<Transaction>, Error> {
        match self.client.create(&new_transaction).await {
            Ok(transaction) => Ok(Fetched::remote(transaction)),
            Err(error) => {
                self.check_fallback(error, "create transaction")?;
                Ok(Fetched::fallback(self.mock_store.create(new_transaction)?))
            }
        }
    }

    /// Merge `patch` into the transaction with `id`.
    pub async fn update(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> Result<Fetched<Option<Transaction>>, Error> {
        match self.client.update(id, &patch).await {
            Ok(transaction) => Ok(Fetched::remote(transaction)),
            Err(error) => {
                self.check_fallback(error, &format!("update transaction {id}"))?;
                Ok(Fetched::fallback(self.mock_store.update(id, patch)?))
            }
        }
    }

    /// Delete the transaction with `id`, returning whether it existed.
    pub async fn delete(&self, id: &str) -> Result<Fetched<bool>, Error> {
        match self.client.delete(id).await {
            Ok(deleted) => Ok(Fetched::remote(deleted)),
            Err(error) => {
                self.check_fallback(error, &format!("delete transaction {id}"))?;
                Ok(Fetched::fallback(self.mock_store.delete(id)?))
            }
        }
    }

    /// Returns `Ok(())` if the caller should answer from the mock store,
    /// otherwise the API error.
    fn check_fallback(&self, error: ApiError, operation: &str) -> Result<(), Error> {
        match self.fallback_policy {
            FallbackPolicy::Always => {
                tracing::warn!("API unavailable, using mock data to {operation}: {error}");
                Ok(())
            }
            FallbackPolicy::Never => {
                tracing::error!("Could not {operation}: {error}");
                Err(Error::Api(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        api::{ApiClient, ApiError},
        mock_store::MockStore,
        test_utils::{offline_repository, spawn_stub_api},
        transaction::{NewTransaction, TransactionPatch, TransactionType},
    };

    use super::{DataSource, FallbackPolicy, TransactionRepository};

    async fn online_repository(api_store: MockStore) -> (TransactionRepository, MockStore) {
        let base_url = spawn_stub_api(api_store).await;
        let client = ApiClient::new(&base_url, ApiClient::DEFAULT_TIMEOUT).unwrap();
        let mock_store = MockStore::seeded();

        (
            TransactionRepository::new(client, mock_store.clone(), FallbackPolicy::Always),
            mock_store,
        )
    }

    fn bonus() -> NewTransaction {
        NewTransaction {
            type_: TransactionType::Income,
            amount: 500.0,
            category: "Salary".to_owned(),
            date: date!(2024 - 05 - 31),
            description: "Bonus".to_owned(),
        }
    }

    #[tokio::test]
    async fn uses_api_when_available() {
        let (repository, _) = online_repository(MockStore::new(Vec::new())).await;

        let fetched = repository.list().await.unwrap();

        assert_eq!(fetched.source, DataSource::Remote);
        assert!(fetched.data.is_empty());
    }

    #[tokio::test]
    async fn remote_not_found_does_not_fall_back() {
        let (repository, mock_store) = online_repository(MockStore::new(Vec::new())).await;

        let fetched = repository.get_by_id("1").await.unwrap();
        let deleted = repository.delete("1").await.unwrap();

        assert_eq!(fetched.source, DataSource::Remote);
        assert_eq!(fetched.data, None);
        assert_eq!(deleted.source, DataSource::Remote);
        assert!(!deleted.data);
        assert_eq!(mock_store.len().unwrap(), 8);
    }

    #[tokio::test]
    async fn offline_list_returns_mock_snapshot() {
        let (repository, mock_store) = offline_repository(FallbackPolicy::Always).await;

        let fetched = repository.list().await.unwrap();

        assert_eq!(fetched.source, DataSource::Fallback);
        assert_eq!(fetched.data, mock_store.list().unwrap());
    }

    #[tokio::test]
    async fn offline_create_then_list_has_one_more_record() {
        let (repository, _) = offline_repository(FallbackPolicy::Always).await;
        let before = repository.list().await.unwrap().data;

        let created = repository.create(bonus()).await.unwrap();
        let after = repository.list().await.unwrap().data;

        assert_eq!(created.source, DataSource::Fallback);
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|t| t.id != created.data.id));
        assert_eq!(
            after.iter().filter(|t| t.id == created.data.id).count(),
            1
        );
    }

    #[tokio::test]
    async fn offline_update_then_get_reflects_patch() {
        let (repository, _) = offline_repository(FallbackPolicy::Always).await;
        let before = repository.get_by_id("6").await.unwrap().data.unwrap();
        let patch = TransactionPatch {
            amount: Some(30.0),
            description: Some("Internet and phone".to_owned()),
            ..Default::default()
        };

        repository.update("6", patch).await.unwrap();
        let after = repository.get_by_id("6").await.unwrap().data.unwrap();

        let mut expected = before;
        expected.amount = 30.0;
        expected.description = "Internet and phone".to_owned();
        assert_eq!(after, expected);
    }

    #[tokio::test]
    async fn offline_update_missing_is_none() {
        let (repository, _) = offline_repository(FallbackPolicy::Always).await;

        let updated = repository
            .update("404", TransactionPatch::default())
            .await
            .unwrap();

        assert_eq!(updated.data, None);
    }

    #[tokio::test]
    async fn offline_delete_then_list_excludes_record() {
        let (repository, _) = offline_repository(FallbackPolicy::Always).await;

        let deleted = repository.delete("8").await.unwrap();
        let missing = repository.delete("8").await.unwrap();
        let remaining = repository.list().await.unwrap().data;

        assert!(deleted.data);
        assert!(!missing.data);
        assert_eq!(remaining.len(), 7);
        assert!(remaining.iter().all(|t| t.id != "8"));
    }

    #[tokio::test]
    async fn never_policy_returns_api_error() {
        let (repository, mock_store) = offline_repository(FallbackPolicy::Never).await;

        let list_result = repository.list().await;
        let create_result = repository.create(bonus()).await;

        assert!(matches!(list_result, Err(Error::Api(ApiError::Request(_)))));
        assert!(matches!(create_result, Err(Error::Api(ApiError::Request(_)))));
        assert_eq!(mock_store.len().unwrap(), 8);
    }
}
