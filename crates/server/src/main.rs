use clap::Parser;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use wordscope_core::config;
use wordscope_server::api::create_router;
use wordscope_server::api::handlers::AppState;

#[derive(Parser)]
#[command(name = "wordscope", about = "Web-page word-frequency analysis service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Outbound page fetch timeout in seconds
    #[arg(long, default_value_t = config::FETCH_TIMEOUT_SECS)]
    fetch_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "wordscope_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "wordscope_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    if args.fetch_timeout == 0 {
        eprintln!("Error: fetch timeout must be > 0");
        std::process::exit(1);
    }

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.fetch_timeout))
        .user_agent(concat!("wordscope/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let state = AppState {
        http,
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        fetch_timeout_secs = args.fetch_timeout,
        "wordscope ready"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
