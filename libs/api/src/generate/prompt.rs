/// Renders the marketing-copy instruction for the completion API. Inputs are
/// interpolated verbatim, the form constrains style and reading level but the
/// server treats all five fields as opaque text.
pub fn build_prompt(
    product: &str,
    keywords: &str,
    audience: &str,
    style: &str,
    reading_level: &str,
) -> String {
    format!(
        "Write marketing copy of a {} to advertise to {}. Include the keywords: {}. The writing should be in a {} at a {} level.",
        product, audience, keywords, style, reading_level
    )
}
