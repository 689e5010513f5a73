use reqwest::header::{HeaderMap, HeaderValue};

pub mod completions;
pub mod error;

/// Thin client for the OpenAI REST API. Holds the base url and a reqwest
/// client carrying the bearer token as a default header.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new(token: &str, base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_str("*/*").unwrap());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(format!("Bearer {}", token).as_str())
                .unwrap(),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            base_url: base_url.to_string(),
            client,
        }
    }
}
