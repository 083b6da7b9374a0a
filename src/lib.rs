//! # questionkv
//!
//! A question record service with:
//! - An embedded, transactional ordered key-value store (redb)
//! - Auto-assigned sequential ids and order-preserving keys
//! - JSON or protobuf record encoding
//! - REST/JSON and gRPC front ends, plus a gRPC CLI client
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │   REST (axum)        │   │   gRPC (tonic)       │◄── questionkv-cli
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            │   one store call per request          │
//!            └──────────────┬────────────────────────┘
//!                           ▼
//!                 ┌───────────────────┐
//!                 │  QuestionStore<C> │  put / get / delete / filter
//!                 └─────────┬─────────┘
//!                 ┌─────────┴─────────┐
//!                 ▼                   ▼
//!          ┌────────────┐      ┌────────────┐
//!          │ Key codec  │      │ RecordCodec│  JSON | protobuf
//!          └─────┬──────┘      └─────┬──────┘
//!                └────────┬──────────┘
//!                         ▼
//!                ┌─────────────────┐
//!                │ redb: questions │
//!                │       sequences │
//!                └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{QuestionError, Result};
pub use config::Config;
pub use model::{Question, QuestionFilter};
pub use storage::{JsonCodec, ProtobufCodec, QuestionStore, RecordCodec, RecordFormat};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of questionkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
