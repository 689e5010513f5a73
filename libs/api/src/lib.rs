use anyhow::Context;
use axum::{routing::get, routing::post, Router};
use openai::completions::TextCompletion;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod generate;
pub mod healthz;
pub mod not_found;
mod response;

pub enum ApiError {
    MissingCredential,
    Upstream { status: u16, body: serde_json::Value },
    Transport(String),
    EmptyCompletion,
}

#[derive(Clone, Debug)]
pub struct ApiState<C> {
    openai: Option<C>,
    config: Config,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub openai: OpenAi,
}

#[derive(Clone, Debug)]
pub struct OpenAi {
    pub base_url: String,
    pub model: String,
}

impl Config {
    pub fn load(config_name: &str) -> anyhow::Result<Self> {
        let config = util::load_config(config_name)?;

        let openai = OpenAi {
            base_url: config["openai"]["base_url"]
                .as_str()
                .context("openai.base_url is missing")?
                .to_string(),
            model: config["openai"]["model"]
                .as_str()
                .context("openai.model is missing")?
                .to_string(),
        };

        Ok(Self { openai })
    }
}

/// Builds the service router. The completion client is injected so tests can
/// substitute one; `None` means no API key was configured and every generate
/// request answers with the credential error.
pub fn serve<C>(openai: Option<C>, config: Config) -> Router
where
    C: TextCompletion + Clone + Send + Sync + 'static,
{
    #[derive(OpenApi)]
    #[openapi(
        paths(generate::generate_copy),
        components(schemas(
            generate::request::GenerateRequest,
            generate::response::GenerateResponse
        ))
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let state = ApiState { openai, config };

    let origins = ["http://localhost:3000".parse().unwrap()];

    // generate
    let generate_router = Router::new()
        .route("/generate", post(generate::generate_copy::<C>))
        .fallback(not_found::get_404)
        .with_state(state);

    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .nest("/api", generate_router)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404)
}
