use http::StatusCode;
use reqwest::Response;

use crate::api::task::Task;

pub(super) fn create_ok_response_with_payload(payload: Vec<u8>) -> Response {
    Response::from(
        http::response::Builder::new()
            .status(StatusCode::OK)
            .body(payload)
            .unwrap(),
    )
}

// Helper function to create a response with a status and empty body
pub(super) fn create_status_response(status: StatusCode) -> Response {
    Response::from(
        http::response::Builder::new()
            .status(status)
            .body(Vec::new())
            .unwrap(),
    )
}

// Helper function to create an error response
pub(super) fn create_error_response(status: StatusCode, body: &str) -> Response {
    Response::from(
        http::response::Builder::new()
            .status(status)
            .body(body.as_bytes().to_vec())
            .unwrap(),
    )
}

/// Task fixture used across the request-shaping tests.
pub(super) fn sample_task() -> Task {
    Task::new("1", "2", "Finish this kata", false)
}
