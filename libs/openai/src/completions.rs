pub mod implementation;

use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

pub static TEXT_DAVINCI_003: &str = "text-davinci-003";

/// Seam for the completions endpoint. Implemented for [`crate::Client`] and
/// for substitute clients in handler tests.
pub trait TextCompletion {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl std::future::Future<
        Output = Result<CompletionResponse, CompletionError>,
    > + Send;
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub text: String,
}
