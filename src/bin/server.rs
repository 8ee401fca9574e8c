use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use clap::Parser;

use finance_tracker::{
    AppState, add_tracing_layer,
    api::ApiClient,
    build_router, get_local_offset, graceful_shutdown,
    mock_store::MockStore,
    repository::{FallbackPolicy, TransactionRepository},
    setup_logging,
    store::TransactionStore,
};

/// The web server for Finance Tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the web app from.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// The base URL of the transactions REST API.
    #[arg(long, env = "API_URL", default_value = ApiClient::DEFAULT_BASE_URL)]
    api_url: String,

    /// How long to wait for the transactions API before giving up, in seconds.
    #[arg(long, env = "API_TIMEOUT_SECS", default_value_t = 5)]
    api_timeout_secs: u64,

    /// Whether to answer from the offline sample data when the API cannot be reached.
    #[arg(long, env = "FALLBACK", value_enum, default_value_t = FallbackPolicy::Always)]
    fallback: FallbackPolicy,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    #[arg(long, env = "TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging("debug.log").expect("Could not create log file");

    if get_local_offset(&args.timezone).is_none() {
        tracing::error!("Invalid timezone {}", args.timezone);
        std::process::exit(1);
    }

    let client = ApiClient::new(&args.api_url, Duration::from_secs(args.api_timeout_secs))
        .expect("Could not create the transactions API client");
    let repository = TransactionRepository::new(client, MockStore::seeded(), args.fallback);
    let store = TransactionStore::new(repository);

    let initial_load = store.clone();
    tokio::spawn(async move {
        if let Err(error) = initial_load.refresh().await {
            tracing::error!("Initial load of transactions failed: {error}");
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(AppState::new(store, &args.timezone)));

    tracing::info!(
        "HTTP server listening on http://{addr}, using the transactions API at {} (fallback: {:?})",
        args.api_url,
        args.fallback
    );
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}
