use std::net::{Ipv4Addr, SocketAddr};

use api::{serve, Config};
use tokio::net::TcpListener;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::load("Config.dev.toml")?;

    let api_key = util::load_env().ok().and_then(|secrets| {
        secrets
            .get("OPENAI_API_KEY")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    });
    if api_key.is_none() {
        // the service still starts; generate requests answer 500
        warn!(task = "startup", error = "OPENAI_API_KEY is not set");
    }

    let openai =
        api_key.map(|key| openai::Client::new(&key, &config.openai.base_url));

    let router = serve(openai, config);

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
