use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /api/generate`. Fields arrive in camelCase from the form;
/// none are validated and missing ones default to the empty string.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRequest {
    pub product: String,
    pub keywords: String,
    pub audience: String,
    pub style: String,
    pub reading_level: String,
}
