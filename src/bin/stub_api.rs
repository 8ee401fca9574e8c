use std::net::SocketAddr;

use axum_server::Handle;
use clap::Parser;

use finance_tracker::{
    add_tracing_layer, build_stub_api_router, graceful_shutdown, mock_store::MockStore,
    setup_logging,
};

/// A local transactions REST API backed by an in-memory list, for development.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Start with no transactions instead of the sample data.
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging("stub_api.log").expect("Could not create log file");

    let store = if args.empty {
        MockStore::new(Vec::new())
    } else {
        MockStore::seeded()
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_stub_api_router(store));

    tracing::info!("Stub transactions API listening on http://{addr}/api");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}
