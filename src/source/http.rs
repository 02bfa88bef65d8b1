use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use super::RecipeSource;
use crate::config::SourceConfig;
use crate::error::BrowseError;
use crate::model::{Recipe, RecipeCollection};

/// Recipe source backed by a dummyjson-style REST API:
///
/// * `GET {base}?limit=N` lists recipes
/// * `GET {base}/{id}` returns one recipe with instructions
/// * `GET {base}/search?q=...` searches server-side
pub struct HttpRecipeSource {
    client: Client,
    base_url: Url,
    list_limit: u32,
}

impl HttpRecipeSource {
    pub fn new(config: &SourceConfig) -> Result<Self, BrowseError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BrowseError::BuilderError(format!("Invalid base URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BrowseError::BuilderError(format!(
                "Base URL '{}' cannot have path segments",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url,
            list_limit: config.list_limit,
        })
    }

    /// Source with default settings pointed at another base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BrowseError> {
        let config = SourceConfig {
            base_url: base_url.into(),
            ..Default::default()
        };
        Self::new(&config)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_collection(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Vec<Recipe>, BrowseError> {
        debug!("GET {} {:?}", url, query);
        let collection: RecipeCollection = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(collection.recipes)
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, BrowseError> {
        let recipes = self
            .fetch_collection(
                self.endpoint(&[]),
                &[("limit", self.list_limit.to_string())],
            )
            .await?;
        info!("Loaded {} recipes from {}", recipes.len(), self.base_url);
        Ok(recipes)
    }

    async fn get_by_id(&self, id: u64) -> Result<Recipe, BrowseError> {
        let url = self.endpoint(&[&id.to_string()]);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BrowseError::NotFoundError(id));
        }

        let recipe = response.error_for_status()?.json::<Recipe>().await?;
        Ok(recipe)
    }

    async fn search_by_query(&self, query: &str) -> Result<Vec<Recipe>, BrowseError> {
        let recipes = self
            .fetch_collection(self.endpoint(&["search"]), &[("q", query.to_string())])
            .await?;
        info!("Search for '{}' returned {} recipes", query, recipes.len());
        Ok(recipes)
    }
}
