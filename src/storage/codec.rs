//! Record codecs
//!
//! A codec turns a `Question` into the bytes stored under its key and back.
//! Decoding must reproduce the exact record that was encoded.
//!
//! | Format   | Codec           | Notes                                      |
//! |----------|-----------------|--------------------------------------------|
//! | json     | `JsonCodec`     | readable, unknown fields ignored on decode |
//! | protobuf | `ProtobufCodec` | compact, fixed tags 1..4, unknown skipped  |
//!
//! A database written with one format cannot be read with the other: every
//! record would fail to decode with `CorruptRecord`.

use prost::Message;

use crate::error::{QuestionError, Result};
use crate::model::Question;

/// Serializes question records for the store
pub trait RecordCodec: Send + Sync + 'static {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Encode a record
    fn encode(&self, question: &Question) -> Result<Vec<u8>>;

    /// Decode a record, failing with `CorruptRecord` on malformed bytes
    fn decode(&self, bytes: &[u8]) -> Result<Question>;
}

/// JSON records (`{"id":1,"text":"..","is_good":false,"is_active":true}`)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, question: &Question) -> Result<Vec<u8>> {
        serde_json::to_vec(question)
            .map_err(|e| QuestionError::CorruptRecord(format!("json encode: {}", e)))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Question> {
        serde_json::from_slice(bytes)
            .map_err(|e| QuestionError::CorruptRecord(format!("json decode: {}", e)))
    }
}

/// Protobuf records, same layout as the gRPC `Question` message
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

impl RecordCodec for ProtobufCodec {
    fn name(&self) -> &'static str {
        "protobuf"
    }

    fn encode(&self, question: &Question) -> Result<Vec<u8>> {
        Ok(question.encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Question> {
        Question::decode(bytes)
            .map_err(|e| QuestionError::CorruptRecord(format!("protobuf decode: {}", e)))
    }
}

/// Record format selected at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RecordFormat {
    #[default]
    Json,
    Protobuf,
}

impl RecordFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::Json => "json",
            RecordFormat::Protobuf => "protobuf",
        }
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
