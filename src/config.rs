//! Configuration for questionkv
//!
//! Centralized configuration with sensible defaults. The server binary fills
//! it from the command line and the `DB_PATH`, `HTTP_BIND`, `LISTEN` and
//! `RECORD_FORMAT` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{QuestionError, Result};
use crate::storage::RecordFormat;

/// Default database file
pub const DEFAULT_DB_PATH: &str = "./questions.redb";

/// Default REST bind address
pub const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8080";

/// Default gRPC listen address
pub const DEFAULT_GRPC_LISTEN: &str = "127.0.0.1:50051";

/// Main configuration for a questionkv server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Database file (created on first open)
    pub db_path: PathBuf,

    /// Encoding used for stored records
    pub record_format: RecordFormat,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// REST listen address (host:port)
    pub http_bind: String,

    /// gRPC listen address (host:port)
    pub grpc_listen: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            record_format: RecordFormat::Json,
            http_bind: DEFAULT_HTTP_BIND.to_string(),
            grpc_listen: DEFAULT_GRPC_LISTEN.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolved REST address
    pub async fn http_addr(&self) -> Result<SocketAddr> {
        resolve_addr("HTTP_BIND", &self.http_bind).await
    }

    /// Resolved gRPC address
    pub async fn grpc_addr(&self) -> Result<SocketAddr> {
        resolve_addr("LISTEN", &self.grpc_listen).await
    }
}

/// Resolve `host:port`; a bare `:port` binds every interface
async fn resolve_addr(name: &str, value: &str) -> Result<SocketAddr> {
    let target = if value.starts_with(':') {
        format!("0.0.0.0{}", value)
    } else {
        value.to_string()
    };

    let addr = tokio::net::lookup_host(target.as_str())
        .await
        .map_err(|e| QuestionError::Config(format!("{} '{}': {}", name, value, e)))?
        .next()
        .ok_or_else(|| QuestionError::Config(format!("{} '{}': no address", name, value)));
    addr
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the record encoding
    pub fn record_format(mut self, format: RecordFormat) -> Self {
        self.config.record_format = format;
        self
    }

    /// Set the REST listen address
    pub fn http_bind(mut self, addr: impl Into<String>) -> Self {
        self.config.http_bind = addr.into();
        self
    }

    /// Set the gRPC listen address
    pub fn grpc_listen(mut self, addr: impl Into<String>) -> Self {
        self.config.grpc_listen = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
