pub mod browser;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod source;
pub mod uniffi_bindings;

pub use browser::{Browser, Event};
pub use crate::config::{BrowserConfig, SourceConfig};
pub use error::BrowseError;
pub use filter::{compute_visible_recipes, filter_recipes, BaseSet, FilterCriteria};
pub use model::{format_cook_time, Difficulty, Recipe, RecipeCollection};
pub use session::{Notice, Page, SearchMode, SearchTicket, SessionState, View};
pub use source::{HttpRecipeSource, RecipeSource};

/// Build an HTTP recipe source from `recipehub.toml` and `RECIPEHUB__*` variables
pub fn source_from_config() -> Result<HttpRecipeSource, BrowseError> {
    let config = BrowserConfig::load()?;
    HttpRecipeSource::new(&config.source)
}

/// Fetch the startup collection using the loaded configuration
pub async fn fetch_recipes() -> Result<Vec<Recipe>, BrowseError> {
    source_from_config()?.list_all().await
}

/// Fetch one recipe with instructions using the loaded configuration
pub async fn fetch_recipe(id: u64) -> Result<Recipe, BrowseError> {
    source_from_config()?.get_by_id(id).await
}

/// Load everything, then search and filter the way the browser does.
///
/// A blank query skips the remote call. A failed remote search falls back to
/// filtering the local collection and is reported through the view's error.
/// A failed initial load is returned as is.
pub async fn browse<S: RecipeSource>(
    source: S,
    query: &str,
    filters: FilterCriteria,
) -> View {
    let browser = Browser::new(source);
    let state = browser.load(SessionState::new()).await;
    if state.notice().is_some_and(|notice| notice.is_blocking()) {
        return state.view();
    }
    let state = state.set_filters(filters).navigate(Page::Search);
    let state = browser.submit_search(state, query).await;
    state.view()
}
