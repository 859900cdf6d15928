use thiserror::Error;

/// Errors that can occur while loading the ingredient store or generating recipes
#[derive(Error, Debug)]
pub enum RemixError {
    /// Ingredient store missing, unreadable, or failed to deserialize
    #[error("ingredient store unavailable: {0}")]
    StoreUnavailable(String),

    /// HTTP request to the generation provider failed
    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Provider response could not be turned into a recipe
    #[error("generation failed: {0}")]
    GenerationError(String),

    /// Requested provider name is not one we know how to build
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// Builder configuration error
    #[error("builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
