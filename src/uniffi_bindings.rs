//! UniFFI bindings for recipe-hub
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;

use crate::{BrowseError, BrowserConfig, FilterCriteria, HttpRecipeSource, Recipe, RecipeSource};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: u64,
    pub name: String,
    pub cuisine: String,
    pub difficulty: String,
    pub cook_time_minutes: u32,
    /// `None` when the API sent no ingredients list
    pub ingredients: Option<Vec<String>>,
    /// Empty unless fetched by id
    pub instructions: Vec<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            name: recipe.name,
            cuisine: recipe.cuisine,
            difficulty: recipe.difficulty,
            cook_time_minutes: recipe.cook_time_minutes,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            rating: recipe.rating,
            image: recipe.image,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            id: ffi.id,
            name: ffi.name,
            cuisine: ffi.cuisine,
            difficulty: ffi.difficulty,
            cook_time_minutes: ffi.cook_time_minutes,
            ingredients: ffi.ingredients,
            instructions: ffi.instructions,
            rating: ffi.rating,
            image: ffi.image,
            ..Default::default()
        }
    }
}

/// FFI-compatible filter criteria; empty strings mean no constraint
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFilterCriteria {
    pub cuisine: String,
    pub difficulty: String,
    pub max_time: String,
}

impl From<FfiFilterCriteria> for FilterCriteria {
    fn from(ffi: FfiFilterCriteria) -> Self {
        FilterCriteria {
            cuisine: ffi.cuisine,
            difficulty: ffi.difficulty,
            max_time: ffi.max_time,
        }
    }
}

/// Recipes to draw plus loading and error status
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiView {
    pub recipes: Vec<FfiRecipe>,
    pub loading: bool,
    pub error: Option<String>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiBrowseError {
    /// Network or HTTP failure
    FetchError { message: String },
    /// No recipe with the requested id
    NotFound { id: u64 },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiBrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiBrowseError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiBrowseError::NotFound { id } => write!(f, "Recipe {} not found", id),
            FfiBrowseError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiBrowseError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiBrowseError {}

impl From<BrowseError> for FfiBrowseError {
    fn from(err: BrowseError) -> Self {
        match err {
            BrowseError::FetchError(e) => FfiBrowseError::FetchError {
                message: e.to_string(),
            },
            BrowseError::NotFoundError(id) => FfiBrowseError::NotFound { id },
            BrowseError::BuilderError(message) => FfiBrowseError::ConfigError { message },
            BrowseError::ConfigError(e) => FfiBrowseError::ConfigError {
                message: e.to_string(),
            },
            BrowseError::OutputError(e) => FfiBrowseError::FetchError {
                message: e.to_string(),
            },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiBrowseError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiBrowseError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn create_source(base_url: Option<String>) -> Result<HttpRecipeSource, BrowseError> {
    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = base_url {
        config.source.base_url = base_url;
    }
    HttpRecipeSource::new(&config.source)
}

/// Fetch the startup recipe collection
///
/// # Arguments
/// * `base_url` - Optional API base URL (uses configuration if not specified)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_recipes(base_url: Option<String>) -> Result<Vec<FfiRecipe>, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let recipes = create_source(base_url)?.list_all().await?;
        Ok(recipes.into_iter().map(FfiRecipe::from).collect())
    })
}

/// Fetch one recipe with instructions
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe(id: u64, base_url: Option<String>) -> Result<FfiRecipe, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let recipe = create_source(base_url)?.get_by_id(id).await?;
        Ok(recipe.into())
    })
}

/// Load, search and filter in one call
///
/// A failed remote search falls back to local results and reports the
/// fallback through `error`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn browse_recipes(
    query: String,
    filters: FfiFilterCriteria,
    base_url: Option<String>,
) -> Result<FfiView, FfiBrowseError> {
    let rt = create_runtime()?;
    let source = create_source(base_url)?;
    let view = rt.block_on(crate::browse(source, &query, filters.into()));

    Ok(FfiView {
        recipes: view.recipes.into_iter().map(FfiRecipe::from).collect(),
        loading: view.loading,
        error: view.error,
    })
}

/// Run the filter engine over recipes the caller already holds
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn compute_visible_recipes(
    all_recipes: Vec<FfiRecipe>,
    search_results: Vec<FfiRecipe>,
    is_searching: bool,
    query: String,
    filters: FfiFilterCriteria,
) -> Vec<FfiRecipe> {
    let all: Vec<Recipe> = all_recipes.into_iter().map(Recipe::from).collect();
    let results: Vec<Recipe> = search_results.into_iter().map(Recipe::from).collect();

    crate::compute_visible_recipes(&all, &results, is_searching, &query, &filters.into())
        .into_iter()
        .map(FfiRecipe::from)
        .collect()
}

/// Format minutes as shown on recipe cards
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_cook_time(minutes: u32) -> String {
    crate::format_cook_time(minutes)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ffi_recipe(id: u64, name: &str, cuisine: &str, cook_time: u32) -> FfiRecipe {
        FfiRecipe {
            id,
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            difficulty: "Easy".to_string(),
            cook_time_minutes: cook_time,
            ingredients: None,
            instructions: vec![],
            rating: Some(4.5),
            image: None,
        }
    }

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = Recipe {
            id: 4,
            name: "Pasta".to_string(),
            cuisine: "Italian".to_string(),
            ingredients: Some(vec!["Spaghetti".to_string()]),
            instructions: vec!["Boil".to_string()],
            ..Default::default()
        };

        let ffi: FfiRecipe = recipe.clone().into();
        assert_eq!(ffi.id, 4);
        assert_eq!(ffi.ingredients.as_ref().unwrap().len(), 1);

        let back: Recipe = ffi.into();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_ffi_compute_visible_recipes() {
        let all = vec![
            ffi_recipe(1, "Pasta", "Italian", 20),
            ffi_recipe(2, "Taco", "Mexican", 15),
        ];
        let filters = FfiFilterCriteria {
            cuisine: "italian".to_string(),
            ..Default::default()
        };

        let visible = compute_visible_recipes(all, vec![], false, String::new(), filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Pasta");
    }

    #[test]
    fn test_error_conversion() {
        let err: FfiBrowseError = BrowseError::NotFoundError(12).into();
        assert_eq!(err.to_string(), "Recipe 12 not found");
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
        assert_eq!(format_cook_time(75), "1h 15m");
    }
}
