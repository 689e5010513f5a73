use serde_json::Value;

use crate::error::CompletionError;
use crate::Client;

use super::{CompletionRequest, CompletionResponse, TextCompletion};

impl TextCompletion for Client {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let response = self
            .client
            .post(format!("{}/v1/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status_code = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !status_code.is_success() {
            // keep the upstream body as-is, falling back to the raw text when
            // it is not json
            let body = serde_json::from_str::<Value>(&text)
                .unwrap_or(Value::String(text));
            return Err(CompletionError::Api {
                status: status_code.as_u16(),
                body,
            });
        }

        serde_json::from_str::<CompletionResponse>(&text)
            .map_err(|e| CompletionError::Decode(e.to_string()))
    }
}
