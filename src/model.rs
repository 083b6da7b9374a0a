//! Data model
//!
//! `Question` is both the persisted record and the wire message: prost tags
//! give it a stable protobuf layout and serde gives it the JSON shape the REST
//! API and the JSON record format use. The remaining messages only exist on
//! the gRPC surface.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A question record
///
/// `id == 0` means "not yet assigned"; the store allocates one on put.
#[derive(Clone, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    #[prost(uint64, tag = "1")]
    pub id: u64,

    #[prost(string, tag = "2")]
    pub text: String,

    #[prost(bool, tag = "3")]
    pub is_good: bool,

    #[prost(bool, tag = "4")]
    pub is_active: bool,
}

impl Question {
    /// Create an unsaved question
    pub fn new(text: impl Into<String>, is_active: bool, is_good: bool) -> Self {
        Self {
            id: 0,
            text: text.into(),
            is_good,
            is_active,
        }
    }

    /// Same question with `id` replaced
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

/// gRPC filter message (`List` request)
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct Filter {
    #[prost(bool, tag = "1")]
    pub is_active: bool,

    #[prost(int32, tag = "2")]
    pub limit: i32,

    #[prost(int32, tag = "3")]
    pub offset: i32,

    #[prost(uint64, repeated, tag = "4")]
    pub ignore_ids: Vec<u64>,
}

/// gRPC `List` response
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct QuestionList {
    #[prost(message, repeated, tag = "1")]
    pub questions: Vec<Question>,
}

/// gRPC request addressing one question
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct IdRequest {
    #[prost(uint64, tag = "1")]
    pub id: u64,
}

/// Empty gRPC response
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct Void {}

// =============================================================================
// Store-side filter
// =============================================================================

/// Parameters of a filtered scan over the question collection
///
/// Scan order is ascending id. For each record: ids in `ignore_ids` are
/// skipped, then records whose `is_active` differs, then the first `offset`
/// remaining matches. At most `limit` records are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub is_active: bool,
    pub limit: usize,
    pub offset: usize,
    pub ignore_ids: HashSet<u64>,
}

impl QuestionFilter {
    /// Match records with the given active flag (limit starts at 0)
    pub fn new(is_active: bool) -> Self {
        Self {
            is_active,
            ..Self::default()
        }
    }

    /// Set the maximum number of records returned
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the number of matching records skipped before collecting
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Add ids that are never returned
    pub fn ignore(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.ignore_ids.extend(ids);
        self
    }
}

impl From<Filter> for QuestionFilter {
    /// Negative limit or offset clamps to 0
    fn from(f: Filter) -> Self {
        Self {
            is_active: f.is_active,
            limit: usize::try_from(f.limit).unwrap_or(0),
            offset: usize::try_from(f.offset).unwrap_or(0),
            ignore_ids: f.ignore_ids.into_iter().collect(),
        }
    }
}
