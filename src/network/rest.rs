//! REST API
//!
//! ```text
//! GET    /version   → 200 {"version": ".."}
//! GET    /          → 200 [Question]        ?limit=&active=&ignore=&offset=
//! POST   /          → 200 Question          id forced to 0, new id returned
//! GET    /{id}      → 200 Question
//! PUT    /{id}      → 200 Question          id forced to the path value, 0 allocates
//! DELETE /{id}      → 204
//! ```
//!
//! Any failure answers 500 with `{"error": "<message>"}`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::QuestionError;
use crate::model::{Question, QuestionFilter};
use crate::storage::{QuestionStore, RecordCodec};

use super::run_blocking;

type SharedStore<C> = State<Arc<QuestionStore<C>>>;

/// Build the REST router over `store`
pub fn router<C: RecordCodec>(store: Arc<QuestionStore<C>>) -> Router {
    Router::new()
        .route("/version", get(version))
        .route("/", get(filter_questions::<C>).post(insert_question::<C>))
        .route(
            "/:id",
            get(get_question::<C>)
                .put(update_question::<C>)
                .delete(delete_question::<C>),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(store)
}

// =============================================================================
// Handlers
// =============================================================================

async fn version() -> Json<serde_json::Value> {
    Json(json!({ "version": crate::VERSION }))
}

async fn filter_questions<C: RecordCodec>(
    State(store): SharedStore<C>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let filter = filter_from_query(&params);
    tracing::debug!(?filter, "filter request");

    let questions = run_blocking(&store, move |s| s.filter(&filter)).await?;
    Ok(Json(questions))
}

async fn insert_question<C: RecordCodec>(
    State(store): SharedStore<C>,
    body: Bytes,
) -> Result<Json<Question>, ApiError> {
    let mut question = parse_body(&body)?;
    question.id = 0;

    let id = {
        let question = question.clone();
        run_blocking(&store, move |s| s.put(question)).await?
    };

    question.id = id;
    Ok(Json(question))
}

async fn get_question<C: RecordCodec>(
    State(store): SharedStore<C>,
    Path(raw_id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let id = parse_id(&raw_id)?;
    let question = run_blocking(&store, move |s| s.get(id)).await?;
    Ok(Json(question))
}

async fn update_question<C: RecordCodec>(
    State(store): SharedStore<C>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Question>, ApiError> {
    let id = parse_id(&raw_id)?;
    let mut question = parse_body(&body)?.with_id(id);

    // PUT /0 allocates like POST
    let id = {
        let question = question.clone();
        run_blocking(&store, move |s| s.put(question)).await?
    };

    question.id = id;
    Ok(Json(question))
}

async fn delete_question<C: RecordCodec>(
    State(store): SharedStore<C>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&raw_id)?;
    run_blocking(&store, move |s| s.delete(id)).await?;
    Ok((
        StatusCode::NO_CONTENT,
        [(CONTENT_TYPE, "application/json")],
    ))
}

/// Access log line for every request
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "http request"
    );
    response
}

// =============================================================================
// Input coercion
// =============================================================================

/// Build a filter from `GET /` query parameters
///
/// - `limit`, `offset`: integers, anything unparsable or negative is 0
/// - `active`: `"1"` or `"true"` selects active questions, anything else inactive
/// - `ignore`: comma separated ids; unparsable entries and 0 are dropped
pub fn filter_from_query(params: &HashMap<String, String>) -> QuestionFilter {
    let number = |name: &str| {
        params
            .get(name)
            .and_then(|v| v.trim().parse::<i32>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    };

    let is_active = matches!(params.get("active").map(String::as_str), Some("1" | "true"));

    let ignore = params
        .get("ignore")
        .into_iter()
        .flat_map(|list| list.split(','))
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .filter(|&id| id != 0);

    QuestionFilter::new(is_active)
        .limit(number("limit"))
        .offset(number("offset"))
        .ignore(ignore)
}

/// Parse an `{id}` path segment (decimal digits only)
fn parse_id(raw: &str) -> Result<u64, QuestionError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuestionError::InvalidInput(format!("invalid id '{}'", raw)));
    }

    raw.parse()
        .map_err(|e| QuestionError::InvalidInput(format!("invalid id '{}': {}", raw, e)))
}

fn parse_body(body: &[u8]) -> Result<Question, QuestionError> {
    serde_json::from_slice(body)
        .map_err(|e| QuestionError::InvalidInput(format!("invalid question body: {}", e)))
}

// =============================================================================
// Errors
// =============================================================================

/// Any store or input failure, rendered as 500 `{"error": ..}`
struct ApiError(QuestionError);

impl From<QuestionError> for ApiError {
    fn from(e: QuestionError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
