//! Entry point for the `activities-api` HTTP server.

use std::{path::PathBuf, sync::Arc};

use activities_api::routes::create_router;
use activities_core::ActivityDirectory;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("ACTIVITIES_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_owned());
    let static_dir = std::env::var("ACTIVITIES_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("static"));

    let directory = Arc::new(ActivityDirectory::seeded());
    let app = create_router(directory, static_dir);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "activities-api listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
