//! Log setup shared by the binaries: stdout, a debug log file and per-request spans.

use std::{fs::OpenOptions, io, path::Path, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log INFO and above to stdout and DEBUG and above to `log_file_path`.
///
/// `RUST_LOG` narrows or widens what is recorded, e.g. `RUST_LOG=finance_tracker=trace`.
///
/// # Errors
/// Returns an error if the log file cannot be opened for appending.
pub fn setup_logging(log_file_path: impl AsRef<Path>) -> io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(LevelFilter::INFO);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::DEBUG);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug,hyper=info,reqwest=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}

/// Wrap every request to `router` in a span with its method, URI and matched route.
pub fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Handlers log their own errors.
        .on_failure(());

    router.layer(tracing_layer)
}
