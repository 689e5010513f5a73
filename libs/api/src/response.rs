use axum::{http::StatusCode, response::IntoResponse, Json};
use openai::error::CompletionError;
use serde_json::json;
use tracing::error;

use crate::ApiError;

impl From<CompletionError> for ApiError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Api { status, body } => {
                ApiError::Upstream { status, body }
            }
            CompletionError::Transport(message) => ApiError::Transport(message),
            CompletionError::Decode(message) => ApiError::Transport(message),
        }
    }
}

// The two failure envelopes differ on purpose: the credential error keeps the
// `{message}` shape and the generation errors keep `{result}`, matching what
// the browser form already parses.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::MissingCredential => {
                error!(task = "generate", error = "OpenAI API key not found");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "OpenAI API key not found" })),
                )
                    .into_response()
            }
            ApiError::Upstream { status, body } => {
                error!(
                    task = "generate",
                    status = status,
                    body = body.to_string()
                );
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (status, Json(json!({ "result": body }))).into_response()
            }
            ApiError::Transport(message) => {
                error!(task = "generate", error = message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "result": "An error occurred during your request."
                    })),
                )
                    .into_response()
            }
            ApiError::EmptyCompletion => {
                error!(
                    task = "generate",
                    error = "upstream returned no completion"
                );
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "result": "upstream returned no completion" })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;
