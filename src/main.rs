//! ra-dashboard-api entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments
//! 2. Initializes logging
//! 3. Starts the HTTP server
//! 4. Exits with non-zero on failure
//!
//! All routing, validation, and persistence logic lives in the library.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ra_dashboard_api::api::{HttpServer, HttpServerConfig};

#[derive(Debug, Parser)]
#[command(name = "ra-dashboard-api", about = "RA dashboard content backend")]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HttpServerConfig {
        host: args.host,
        port: args.port,
        ..HttpServerConfig::default()
    };

    if let Err(e) = HttpServer::with_config(config).start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
