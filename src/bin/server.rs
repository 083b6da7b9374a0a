//! questionkv Server Binary
//!
//! Opens the question database and serves the REST and gRPC APIs.

use std::sync::Arc;

use clap::Parser;
use questionkv::config::{DEFAULT_DB_PATH, DEFAULT_GRPC_LISTEN, DEFAULT_HTTP_BIND};
use questionkv::network::Server;
use questionkv::{Config, JsonCodec, ProtobufCodec, QuestionStore, RecordCodec, RecordFormat, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// questionkv Server
#[derive(Parser, Debug)]
#[command(name = "questionkv-server")]
#[command(about = "Question records over REST and gRPC")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, env = "DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: String,

    /// REST listen address (host:port)
    #[arg(long, env = "HTTP_BIND", default_value = DEFAULT_HTTP_BIND)]
    http_bind: String,

    /// gRPC listen address (host:port)
    #[arg(short, long, env = "LISTEN", default_value = DEFAULT_GRPC_LISTEN)]
    listen: String,

    /// Encoding of stored records
    #[arg(short, long, env = "RECORD_FORMAT", value_enum, default_value_t = RecordFormat::Json)]
    format: RecordFormat,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,questionkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("questionkv Server v{}", questionkv::VERSION);
    tracing::info!("Database: {} ({})", args.db_path, args.format);

    // Build config from args
    let config = Config::builder()
        .db_path(&args.db_path)
        .record_format(args.format)
        .http_bind(&args.http_bind)
        .grpc_listen(&args.listen)
        .build();

    let result = match config.record_format {
        RecordFormat::Json => serve(config, JsonCodec).await,
        RecordFormat::Protobuf => serve(config, ProtobufCodec).await,
    };

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Open the store and run until Ctrl+C
async fn serve<C: RecordCodec>(config: Config, codec: C) -> Result<()> {
    let store = Arc::new(QuestionStore::open(&config.db_path, codec)?);
    tracing::info!(
        "Store opened with {} questions ({} records)",
        store.len()?,
        store.codec().name()
    );

    let server = Arc::new(Server::new(config, store));

    let signal_server = Arc::clone(&server);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl+C, initiating shutdown...");
                signal_server.shutdown();
            }
            Err(e) => tracing::warn!("Cannot listen for Ctrl+C: {}", e),
        }
    });

    server.run().await
}
