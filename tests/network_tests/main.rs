//! Network layer tests
//!
//! These tests verify:
//! - REST routes, status codes and bodies
//! - gRPC service behaviour and status mapping
//! - Server lifecycle and the CLI client against a live server
