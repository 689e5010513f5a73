use serde_json::Value;

/// Outcome classes of a completion call. `Api` keeps the upstream status and
/// body intact so callers can relay them; `Transport` means no response was
/// received at all.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletionError {
    #[error("completion api returned status {status}")]
    Api { status: u16, body: Value },
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("failed to parse completion response: {0}")]
    Decode(String),
}
