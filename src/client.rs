//! gRPC client
//!
//! Thin wrapper over the generated `QuestionsClient` plus the table renderer
//! used by `questionkv-cli`.

use tonic::transport::Channel;

use crate::error::Result;
use crate::model::{Filter, IdRequest, Question};
use crate::protocol::questions_client::QuestionsClient;

/// Connected client for the `question.Questions` service
pub struct QuestionClient {
    inner: QuestionsClient<Channel>,
}

impl QuestionClient {
    /// Dial `addr` (`host:port` or a full `http://` URI)
    pub async fn connect(addr: &str) -> Result<Self> {
        let uri = endpoint_uri(addr);
        tracing::debug!("dialing {}", uri);

        let inner = QuestionsClient::connect(uri).await?;
        Ok(Self { inner })
    }

    /// Insert (`id == 0`) or update a question
    pub async fn upsert(&mut self, question: Question) -> Result<Question> {
        Ok(self.inner.put(question).await?.into_inner())
    }

    /// Filtered list of questions
    pub async fn list(&mut self, filter: Filter) -> Result<Vec<Question>> {
        Ok(self.inner.list(filter).await?.into_inner().questions)
    }

    /// Fetch one question
    pub async fn view(&mut self, id: u64) -> Result<Question> {
        Ok(self.inner.get(IdRequest { id }).await?.into_inner())
    }

    /// Delete one question
    pub async fn delete(&mut self, id: u64) -> Result<()> {
        self.inner.delete(IdRequest { id }).await?;
        Ok(())
    }
}

/// Prefix `http://` when `addr` carries no scheme
pub fn endpoint_uri(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{}", addr)
    }
}

// =============================================================================
// Table rendering
// =============================================================================

const HEADERS: [&str; 4] = ["ID", "TEXT", "IS ACTIVE", "IS GOOD"];

/// Render questions as a bordered table
///
/// ```text
/// +----+------+-----------+---------+
/// | ID | TEXT | IS ACTIVE | IS GOOD |
/// +----+------+-----------+---------+
/// |  1 | Q1   | true      | false   |
/// +----+------+-----------+---------+
/// ```
pub fn render_table(questions: &[Question]) -> String {
    let rows: Vec<[String; 4]> = questions
        .iter()
        .map(|q| {
            [
                q.id.to_string(),
                q.text.clone(),
                q.is_active.to_string(),
                q.is_good.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&render_row(&HEADERS.map(String::from), &widths));
    out.push_str(&border);
    out.push('\n');

    if !rows.is_empty() {
        for row in &rows {
            out.push_str(&render_row(row, &widths));
        }
        out.push_str(&border);
        out.push('\n');
    }

    out
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = width - cell.chars().count();
        // ids right-aligned, everything else left
        if i == 0 {
            line.push_str(&format!(" {}{} |", " ".repeat(pad), cell));
        } else {
            line.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
        }
    }
    line.push('\n');
    line
}
