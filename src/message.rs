// src/message.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct QueryRequest {
    pub input: Option<String>,
    pub message: Option<String>,
}

impl QueryRequest {
    /// Parse a request body. Each field is read on its own, so a field of
    /// the wrong type is ignored without losing the other one. A body that
    /// is not a JSON object is read as an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(json) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        let field = |key: &str| json.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            input: field("input"),
            message: field("message"),
        }
    }

    /// The trimmed user text: `input` if non-empty, else `message`.
    pub fn raw_input(&self) -> &str {
        [self.input.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
            .trim()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// What every request ends in: a user-facing message and an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub response: String,
    pub status: StatusCode,
}

impl Envelope {
    pub fn new(status: StatusCode, response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            status,
        }
    }

    pub fn ok(response: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, response)
    }

    pub fn bad_request(response: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, response)
    }

    pub fn internal(response: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, response)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(QueryResponse {
                response: self.response,
            }),
        )
            .into_response()
    }
}
