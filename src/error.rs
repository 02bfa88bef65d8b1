use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Network or HTTP failure talking to the recipe source
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Detail fetch for an id the source does not know
    #[error("Recipe {0} not found")]
    NotFoundError(u64),

    /// Recipe source could not be constructed from the given settings
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to render recipes as JSON
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),
}

impl BrowseError {
    /// Whether the error is a missing recipe rather than a transport failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, BrowseError::NotFoundError(_))
    }
}
