//! Axum side of `dashgate_core::AuthResponseBuilder`.
//!
//! Parts are validated as they are added and assembled with axum's
//! `IntoResponse` tuple form. A part that fails validation turns the whole
//! response into a bare 500.

use axum::{
    Json,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use dashgate_core::AuthResponseBuilder;

#[derive(Debug, Default)]
pub struct AxumResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
    invalid: bool,
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response;

    fn status(mut self, code: u16) -> Self {
        match StatusCode::from_u16(code) {
            Ok(status) => self.status = status,
            Err(_) => self.invalid = true,
        }
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
            }
            _ => self.invalid = true,
        }
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    fn build(self) -> Response {
        if self.invalid {
            tracing::error!(status = %self.status, "Discarding response with invalid parts");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        match self.body {
            Some(body) => (self.status, self.headers, Json(body)).into_response(),
            None => (self.status, self.headers).into_response(),
        }
    }
}

pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::default()
}
