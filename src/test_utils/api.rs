use std::time::Duration;

use tokio::net::TcpListener;

use crate::{
    api::ApiClient,
    mock_store::MockStore,
    repository::{FallbackPolicy, TransactionRepository},
    store::TransactionStore,
    stub_api::build_stub_api_router,
};

const OFFLINE_TIMEOUT: Duration = Duration::from_secs(2);

/// Serve the stub API over `store` on a free local port.
///
/// Returns the base URL for an [ApiClient], e.g. "http://127.0.0.1:41234/api".
pub(crate) async fn spawn_stub_api(store: MockStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind stub API listener");
    let address = listener
        .local_addr()
        .expect("Could not get stub API address");

    tokio::spawn(async move {
        axum::serve(listener, build_stub_api_router(store))
            .await
            .expect("Stub API server failed");
    });

    format!("http://{address}/api")
}

/// A base URL that nothing is listening on.
///
/// The port is bound and then released, so connecting to it is refused
/// instead of timing out.
pub(crate) async fn unreachable_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().expect("Could not get address");
    drop(listener);

    format!("http://{address}/api")
}

/// A base URL that accepts connections but never answers.
pub(crate) async fn hanging_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().expect("Could not get address");

    tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            connections.push(socket);
        }
    });

    format!("http://{address}/api")
}

/// A repository whose API is unreachable, with a seeded mock store.
///
/// The returned [MockStore] shares state with the repository's.
pub(crate) async fn offline_repository(
    policy: FallbackPolicy,
) -> (TransactionRepository, MockStore) {
    let client = ApiClient::new(&unreachable_api_url().await, OFFLINE_TIMEOUT)
        .expect("Could not create API client");
    let mock_store = MockStore::seeded();

    (
        TransactionRepository::new(client, mock_store.clone(), policy),
        mock_store,
    )
}

/// A store that always falls back to a seeded mock store.
pub(crate) async fn offline_store() -> (TransactionStore, MockStore) {
    let (repository, mock_store) = offline_repository(FallbackPolicy::Always).await;

    (TransactionStore::new(repository), mock_store)
}

/// A store backed by the stub API serving `api_store`, with an empty
/// mock store to fall back to.
pub(crate) async fn online_store(api_store: MockStore) -> TransactionStore {
    let base_url = spawn_stub_api(api_store).await;
    let client =
        ApiClient::new(&base_url, ApiClient::DEFAULT_TIMEOUT).expect("Could not create API client");

    TransactionStore::new(TransactionRepository::new(
        client,
        MockStore::new(Vec::new()),
        FallbackPolicy::Always,
    ))
}

/// A store whose API never answers within the client timeout.
pub(crate) async fn hanging_store() -> TransactionStore {
    let client = ApiClient::new(&hanging_api_url().await, ApiClient::DEFAULT_TIMEOUT)
        .expect("Could not create API client");

    TransactionStore::new(TransactionRepository::new(
        client,
        MockStore::seeded(),
        FallbackPolicy::Always,
    ))
}
