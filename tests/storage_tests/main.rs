//! Storage layer tests
//!
//! These tests verify:
//! - Key encoding and ordering
//! - Record codec round-trips and corruption detection
//! - QuestionStore put/get/delete/filter semantics
//! - Id allocation under concurrent writers

mod key_tests;
mod filter_tests;
