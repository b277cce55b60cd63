use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::config::Config;
use receipt_points::domain::ports::ReceiptStoreBox;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http::create_router;
use receipt_points::logging::init_logger;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logger(config.verbose, config.json_logs);

    let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
    let processor = Arc::new(ReceiptProcessor::new(store));
    let app = create_router(processor);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await.into_diagnostic()?;
    info!(%addr, version = env!("CARGO_PKG_VERSION"), "receipt points service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
