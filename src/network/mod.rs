//! Network Module
//!
//! REST and gRPC front ends over a shared `QuestionStore`.
//!
//! ## Architecture
//! - One tokio runtime serves both listeners
//! - Every request makes exactly one store call on the blocking pool
//! - The store is injected at construction; there is no global handle

use std::sync::Arc;

use crate::error::Result;
use crate::storage::{QuestionStore, RecordCodec};

mod server;
pub mod rest;
pub mod rpc;

pub use server::Server;
pub use rest::router;
pub use rpc::QuestionService;

/// Run a store operation on tokio's blocking pool
///
/// redb transactions are synchronous, so they stay off the async workers.
pub(crate) async fn run_blocking<C, T, F>(store: &Arc<QuestionStore<C>>, op: F) -> Result<T>
where
    C: RecordCodec,
    T: Send + 'static,
    F: FnOnce(&QuestionStore<C>) -> Result<T> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || op(&store)).await?
}
