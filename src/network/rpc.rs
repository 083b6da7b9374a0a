//! gRPC service
//!
//! Implements `question.Questions` on top of the store. Store errors become
//! statuses: `NotFound` → NOT_FOUND, `InvalidInput` → INVALID_ARGUMENT,
//! everything else → INTERNAL.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::error::QuestionError;
use crate::model::{Filter, IdRequest, Question, QuestionFilter, QuestionList, Void};
use crate::protocol::questions_server::{Questions, QuestionsServer};
use crate::storage::{QuestionStore, RecordCodec};

use super::run_blocking;

/// gRPC front end for a `QuestionStore`
pub struct QuestionService<C: RecordCodec> {
    store: Arc<QuestionStore<C>>,
}

impl<C: RecordCodec> QuestionService<C> {
    pub fn new(store: Arc<QuestionStore<C>>) -> Self {
        Self { store }
    }

    /// Wrap in the generated tonic server
    pub fn into_server(self) -> QuestionsServer<Self> {
        QuestionsServer::new(self)
    }
}

#[tonic::async_trait]
impl<C: RecordCodec> Questions for QuestionService<C> {
    async fn put(&self, request: Request<Question>) -> Result<Response<Question>, Status> {
        let mut question = request.into_inner();

        let id = {
            let question = question.clone();
            run_blocking(&self.store, move |s| s.put(question))
                .await
                .map_err(|e| to_status("couldn't save a question", e))?
        };

        question.id = id;
        Ok(Response::new(question))
    }

    async fn list(&self, request: Request<Filter>) -> Result<Response<QuestionList>, Status> {
        let filter = QuestionFilter::from(request.into_inner());

        let questions = run_blocking(&self.store, move |s| s.filter(&filter))
            .await
            .map_err(|e| to_status("couldn't get questions from the storage", e))?;

        Ok(Response::new(QuestionList { questions }))
    }

    async fn get(&self, request: Request<IdRequest>) -> Result<Response<Question>, Status> {
        let id = request.into_inner().id;

        let question = run_blocking(&self.store, move |s| s.get(id))
            .await
            .map_err(|e| to_status("couldn't fetch a question", e))?;

        Ok(Response::new(question))
    }

    async fn delete(&self, request: Request<IdRequest>) -> Result<Response<Void>, Status> {
        let id = request.into_inner().id;

        run_blocking(&self.store, move |s| s.delete(id))
            .await
            .map_err(|e| to_status("couldn't delete a question", e))?;

        Ok(Response::new(Void {}))
    }
}

fn to_status(action: &str, err: QuestionError) -> Status {
    tracing::warn!(error = %err, "{}", action);

    let message = format!("{}: {}", action, err);
    match err {
        QuestionError::NotFound(_) => Status::not_found(message),
        QuestionError::InvalidInput(_) => Status::invalid_argument(message),
        _ => Status::internal(message),
    }
}
