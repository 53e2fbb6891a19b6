// src/error.rs
use serde_json::Value;

/// Missing or unusable configuration, detected before any outbound call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
}

/// Failure of one of the external collaborators (GitHub, OpenAI).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API returned status {status}: {body}")]
    Api {
        status: u16,
        message: Option<String>,
        body: String,
    },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Decode(err.to_string())
    }
}

// Paths checked in order for a human-readable message in an error payload.
const MESSAGE_POINTERS: [&str; 3] = ["/message", "/error/message", "/response/data/message"];

impl ServiceError {
    /// Build an `Api` error from a non-success status and its raw body.
    pub fn from_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<Value>(&body).ok().and_then(|json| {
            MESSAGE_POINTERS
                .iter()
                .filter_map(|p| json.pointer(p).and_then(Value::as_str))
                .find(|m| !m.trim().is_empty())
                .map(str::to_string)
        });
        ServiceError::Api {
            status,
            message,
            body,
        }
    }

    /// Best-effort reason for showing to a user: the structured payload
    /// message if there is one, otherwise the error's own message.
    pub fn reason(&self) -> String {
        match self {
            ServiceError::Api {
                message: Some(m), ..
            } => m.clone(),
            other => other.to_string(),
        }
    }
}
