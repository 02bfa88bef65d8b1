mod http;

pub use http::HttpRecipeSource;

use async_trait::async_trait;

use crate::error::BrowseError;
use crate::model::Recipe;

/// Anything that can serve recipe records
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name for logging (e.g., "http")
    fn source_name(&self) -> &str;

    /// Fetch the collection shown at startup
    async fn list_all(&self) -> Result<Vec<Recipe>, BrowseError>;

    /// Fetch one recipe with full details, including instructions
    async fn get_by_id(&self, id: u64) -> Result<Recipe, BrowseError>;

    /// Run a free-text search on the source side
    async fn search_by_query(&self, query: &str) -> Result<Vec<Recipe>, BrowseError>;
}
