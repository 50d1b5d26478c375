/// Errors from the remote card-registry client.
use thiserror::Error;

/// Failures a registry call can report. Field-level JSON problems never
/// surface here — those default silently (see `decode`).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Network or connection failure, propagated unchanged. No retry.
    #[error("registry transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not JSON at all.
    #[error("registry response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
