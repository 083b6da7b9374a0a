//! Storage Module
//!
//! Persistent question storage on an embedded redb database.
//!
//! ## Responsibilities
//! - Map u64 ids onto order-preserving 8-byte keys
//! - Serialize records with a pluggable codec (JSON or protobuf)
//! - Allocate ids from a per-collection counter
//! - Filtered, paginated scans in id order
//!
//! ## Record Layout
//! ```text
//! ┌──────────────────────┬──────────────────────────────────┐
//! │ Key: id (8, BE)      │ Value: encoded Question          │
//! └──────────────────────┴──────────────────────────────────┘
//! ```

mod key;
mod codec;
mod store;

pub use key::{decode_key, encode_key, KEY_SIZE};
pub use codec::{JsonCodec, ProtobufCodec, RecordCodec, RecordFormat};
pub use store::QuestionStore;
