//! Generates the `question.Questions` gRPC server and client stubs.
//!
//! The messages are hand-written prost structs in `src/model.rs`, so the
//! service is described with tonic-build's manual builder and no `.proto`
//! file or `protoc` binary is needed.

use tonic_build::manual::{Builder, Method, Service};

fn method(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(input)
        .output_type(output)
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    let questions = Service::builder()
        .name("Questions")
        .package("question")
        .method(method(
            "put",
            "Put",
            "crate::model::Question",
            "crate::model::Question",
        ))
        .method(method(
            "list",
            "List",
            "crate::model::Filter",
            "crate::model::QuestionList",
        ))
        .method(method(
            "get",
            "Get",
            "crate::model::IdRequest",
            "crate::model::Question",
        ))
        .method(method(
            "delete",
            "Delete",
            "crate::model::IdRequest",
            "crate::model::Void",
        ))
        .build();

    Builder::new().compile(&[questions]);

    println!("cargo:rerun-if-changed=build.rs");
}
