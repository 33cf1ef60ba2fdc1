use std::{
    fs::OpenOptions,
    net::SocketAddr,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use payment_dashboard::{
    AppState, DEFAULT_FETCH_DELAY, DashboardConfig, build_router, graceful_shutdown,
    logging_middleware,
};

/// The web server for the payment transaction dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// How long the initial load of past transactions takes, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_FETCH_DELAY.as_millis() as u64)]
    fetch_delay_ms: u64,

    /// File path for the debug log.
    #[arg(long, default_value = "debug.log")]
    log_file: PathBuf,

    /// Make the initial load return no transactions so that it fails and the
    /// seed transactions are kept.
    #[arg(long)]
    empty_fetch: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_file) {
        eprintln!(
            "Could not open log file {}: {error}",
            args.log_file.display()
        );
        return ExitCode::FAILURE;
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let mut config = DashboardConfig {
        fetch_delay: Duration::from_millis(args.fetch_delay_ms),
        ..Default::default()
    };

    if args.empty_fetch {
        config.past_transactions.clear();
    }

    let app_state = AppState::new(&config);
    // Detached, the load applies itself to the dashboard when it resolves.
    let _initial_load = app_state.start_initial_load(&config);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(app_state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("server stopped with an error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: &Path) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
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
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
