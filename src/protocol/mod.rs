//! Protocol Module
//!
//! gRPC service `question.Questions`, generated by `build.rs`.
//!
//! ## Methods
//! ```text
//! Put    (Question)  → Question       insert or update
//! List   (Filter)    → QuestionList   filtered scan
//! Get    (IdRequest) → Question
//! Delete (IdRequest) → Void
//! ```
//!
//! Messages are the prost structs in `crate::model`.

#![allow(clippy::all)]

include!(concat!(env!("OUT_DIR"), "/question.Questions.rs"));

pub use crate::model::{Filter, IdRequest, Question, QuestionList, Void};
