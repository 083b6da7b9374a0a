//! Question Store
//!
//! Owns the `questions` table inside a redb database and maps it onto typed
//! records.
//!
//! ## Layout
//! ```text
//! questions : [u8; 8] big-endian id  →  encoded Question
//! sequences : "questions"            →  last allocated id (u64)
//! ```
//!
//! ## Concurrency
//! - Writes (put/delete) each run in one redb write transaction. redb admits
//!   a single writer at a time, so id allocation, encoding and the insert
//!   commit together or not at all.
//! - Reads (get/filter) run in a read transaction, a snapshot of the last
//!   commit. Readers and the writer never block each other.
//! - Dropping a transaction without committing aborts it, so every `?` in a
//!   write path rolls back.

use std::fs;
use std::path::Path;

use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};

use crate::error::{QuestionError, Result};
use crate::model::{Question, QuestionFilter};

use super::codec::{JsonCodec, RecordCodec};
use super::key::{decode_key, encode_key};

/// Question records keyed by big-endian id
const QUESTIONS: TableDefinition<&[u8], &[u8]> = TableDefinition::new("questions");

/// Per-collection id counters
const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");

/// Name of the question collection in `SEQUENCES`
const COLLECTION: &str = "questions";

/// Upper bound on the result buffer reserved up front by `filter`
const MAX_PREALLOC: usize = 1024;

/// Typed question storage over a redb database
pub struct QuestionStore<C: RecordCodec = JsonCodec> {
    db: Database,
    codec: C,
}

impl QuestionStore<JsonCodec> {
    /// Open a JSON-format store at `path` (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(path, JsonCodec)
    }
}

impl<C: RecordCodec> QuestionStore<C> {
    /// Open or create the database file at `path`
    pub fn open(path: &Path, codec: C) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let db = Database::create(path)?;
        tracing::debug!(path = %path.display(), codec = codec.name(), "opened question database");
        Self::init(db, codec)
    }

    /// Create a store that lives only in memory
    pub fn in_memory(codec: C) -> Result<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db, codec)
    }

    /// Make sure both tables exist so read transactions can always open them
    fn init(db: Database, codec: C) -> Result<Self> {
        let tx = db.begin_write()?;
        tx.open_table(QUESTIONS)?;
        tx.open_table(SEQUENCES)?;
        tx.commit()?;

        Ok(Self { db, codec })
    }

    /// Insert or overwrite a question, returning its id
    ///
    /// `id == 0` allocates the next id from the collection's counter. A
    /// caller-supplied id is written as is; if it lies beyond the counter the
    /// counter moves up to it so later allocations stay unused.
    pub fn put(&self, mut question: Question) -> Result<u64> {
        let tx = self.db.begin_write()?;

        let id = {
            let mut sequences = tx.open_table(SEQUENCES)?;
            let current = sequences.get(COLLECTION)?.map(|v| v.value()).unwrap_or(0);

            let id = if question.id == 0 {
                current.checked_add(1).ok_or(QuestionError::SequenceExhausted)?
            } else {
                question.id
            };

            if id > current {
                sequences.insert(COLLECTION, id)?;
            }
            id
        };

        question.id = id;
        let data = self.codec.encode(&question)?;

        {
            let mut table = tx.open_table(QUESTIONS)?;
            table.insert(&encode_key(id)[..], data.as_slice())?;
        }

        tx.commit()?;
        tracing::debug!(id, bytes = data.len(), "put question");

        Ok(id)
    }

    /// Fetch one question
    ///
    /// Returns `NotFound` when no record exists; the codec only ever sees
    /// stored bytes.
    pub fn get(&self, id: u64) -> Result<Question> {
        let tx = self.db.begin_read()?;
        let table = tx.open_table(QUESTIONS)?;

        let value = table
            .get(&encode_key(id)[..])?
            .ok_or(QuestionError::NotFound(id))?;

        self.codec.decode(value.value())
    }

    /// Remove a question; removing an absent id succeeds
    pub fn delete(&self, id: u64) -> Result<()> {
        let tx = self.db.begin_write()?;

        let existed = {
            let mut table = tx.open_table(QUESTIONS)?;
            let removed = table.remove(&encode_key(id)[..])?;
            removed.is_some()
        };

        tx.commit()?;
        tracing::debug!(id, existed, "deleted question");

        Ok(())
    }

    /// Scan questions in ascending id order
    ///
    /// For each record: skip ignored ids, decode, skip on `is_active`
    /// mismatch, skip the first `offset` matches, collect. Stops once `limit`
    /// records are collected. A record that fails to decode aborts the scan.
    pub fn filter(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        let mut questions = Vec::with_capacity(filter.limit.min(MAX_PREALLOC));
        if filter.limit == 0 {
            return Ok(questions);
        }

        let tx = self.db.begin_read()?;
        let table = tx.open_table(QUESTIONS)?;
        let mut skipped = 0;

        for entry in table.iter()? {
            let (key, value) = entry?;

            let id = decode_key(key.value())?;
            if filter.ignore_ids.contains(&id) {
                continue;
            }

            let question = self.codec.decode(value.value())?;
            if question.is_active != filter.is_active {
                continue;
            }

            if skipped < filter.offset {
                skipped += 1;
                continue;
            }

            questions.push(question);
            if questions.len() >= filter.limit {
                break;
            }
        }

        tracing::debug!(
            is_active = filter.is_active,
            limit = filter.limit,
            offset = filter.offset,
            found = questions.len(),
            "filtered questions"
        );

        Ok(questions)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of stored questions
    pub fn len(&self) -> Result<u64> {
        let tx = self.db.begin_read()?;
        let table = tx.open_table(QUESTIONS)?;
        Ok(table.len()?)
    }

    /// True when no questions are stored
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Last id handed out or written (0 for a fresh store)
    pub fn sequence(&self) -> Result<u64> {
        let tx = self.db.begin_read()?;
        let sequences = tx.open_table(SEQUENCES)?;
        let current = sequences.get(COLLECTION)?.map(|v| v.value()).unwrap_or(0);
        Ok(current)
    }

    /// Record codec in use
    pub fn codec(&self) -> &C {
        &self.codec
    }
}
