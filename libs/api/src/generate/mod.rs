use axum::{extract::State, Json};
use openai::completions::{CompletionRequest, TextCompletion};

pub mod prompt;
pub mod request;
pub mod response;

use crate::response::ApiResponse;
use crate::{ApiError, ApiState};

use self::prompt::build_prompt;
use self::request::GenerateRequest;
use self::response::GenerateResponse;

static TEMPERATURE: f32 = 0.6;
static MAX_TOKENS: u32 = 2048;

/// Generate marketing copy
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generate marketing copy successfully", body = GenerateResponse)
    )
)]
pub async fn generate_copy<C>(
    State(state): State<ApiState<C>>,
    Json(body): Json<GenerateRequest>,
) -> ApiResponse<Json<GenerateResponse>>
where
    C: TextCompletion + Clone + Send + Sync + 'static,
{
    let Some(client) = state.openai.as_ref() else {
        return Err(ApiError::MissingCredential);
    };

    let prompt = build_prompt(
        &body.product,
        &body.keywords,
        &body.audience,
        &body.style,
        &body.reading_level,
    );

    // exactly one upstream call per request, no retry
    let completion = client
        .complete(CompletionRequest {
            model: state.config.openai.model.clone(),
            prompt,
            temperature: TEMPERATURE,
            max_tokens: Some(MAX_TOKENS),
        })
        .await?;

    let Some(choice) = completion.choices.into_iter().next() else {
        return Err(ApiError::EmptyCompletion);
    };

    Ok(Json(GenerateResponse {
        result: choice.text,
    }))
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use openai::completions::{
        Choice, CompletionRequest, CompletionResponse, TextCompletion,
    };
    use openai::error::CompletionError;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{serve, Config, OpenAi};

    #[derive(Clone)]
    struct RecordingClient {
        result: Result<CompletionResponse, CompletionError>,
        calls: Arc<AtomicUsize>,
    }

    impl RecordingClient {
        fn returning(
            result: Result<CompletionResponse, CompletionError>,
        ) -> Self {
            Self {
                result,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl TextCompletion for RecordingClient {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn config() -> Config {
        Config {
            openai: OpenAi {
                base_url: "http://localhost:9".to_string(),
                model: "text-davinci-003".to_string(),
            },
        }
    }

    fn request_body() -> Value {
        json!({
            "product": "running shoes",
            "keywords": "light, durable",
            "audience": "marathon runners",
            "style": "casual",
            "readingLevel": "9th grade",
        })
    }

    async fn post_generate(
        router: Router,
        body: Value,
    ) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice::<Value>(&bytes).unwrap();

        (status, body)
    }

    #[tokio::test]
    async fn test_missing_api_key_returns_500_without_calling_upstream() {
        // Arrange
        let router = serve(None::<RecordingClient>, config());

        // Act
        let (status, body) = post_generate(router, request_body()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "OpenAI API key not found" }));
    }

    #[tokio::test]
    async fn test_relays_first_completion_choice() {
        // Arrange
        let client = RecordingClient::returning(Ok(CompletionResponse {
            choices: vec![Choice {
                text: "Buy now!".to_string(),
            }],
        }));
        let router = serve(Some(client.clone()), config());

        // Act
        let (status, body) = post_generate(router, request_body()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": "Buy now!" }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_default_to_empty_strings() {
        // Arrange
        let client = RecordingClient::returning(Ok(CompletionResponse {
            choices: vec![Choice {
                text: "Buy now!".to_string(),
            }],
        }));
        let router = serve(Some(client.clone()), config());

        // Act
        let (status, body) = post_generate(router, json!({})).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": "Buy now!" }));
    }

    #[tokio::test]
    async fn test_relays_upstream_error_status_and_body() {
        // Arrange
        let upstream_body = json!({
            "error": {
                "message": "Rate limit reached",
                "type": "requests"
            }
        });
        let client = RecordingClient::returning(Err(CompletionError::Api {
            status: 429,
            body: upstream_body.clone(),
        }));
        let router = serve(Some(client), config());

        // Act
        let (status, body) = post_generate(router, request_body()).await;

        // Assert
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({ "result": upstream_body }));
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_generic_500() {
        // Arrange
        let client = RecordingClient::returning(Err(
            CompletionError::Transport("connection refused".to_string()),
        ));
        let router = serve(Some(client), config());

        // Act
        let (status, body) = post_generate(router, request_body()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "result": "An error occurred during your request." })
        );
    }

    #[tokio::test]
    async fn test_empty_choice_list_maps_to_502() {
        // Arrange
        let client = RecordingClient::returning(Ok(CompletionResponse {
            choices: vec![],
        }));
        let router = serve(Some(client), config());

        // Act
        let (status, body) = post_generate(router, request_body()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body,
            json!({ "result": "upstream returned no completion" })
        );
    }

    #[tokio::test]
    async fn test_repeated_requests_each_call_upstream() {
        // Arrange
        let client = RecordingClient::returning(Ok(CompletionResponse {
            choices: vec![Choice {
                text: "Buy now!".to_string(),
            }],
        }));
        let router = serve(Some(client.clone()), config());

        // Act
        let (first, _) =
            post_generate(router.clone(), request_body()).await;
        let (second, _) = post_generate(router, request_body()).await;

        // Assert
        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }
}
