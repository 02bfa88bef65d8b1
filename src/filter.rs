use serde::{Deserialize, Serialize};

use crate::model::Recipe;

/// Cuisines offered by the filter panel
pub const CUISINES: [&str; 7] = [
    "Italian",
    "Asian",
    "American",
    "Mexican",
    "Mediterranean",
    "Indian",
    "Thai",
];

/// Max cook time choices in minutes
pub const MAX_TIME_OPTIONS: [u32; 4] = [15, 30, 60, 120];

/// Filter criteria picked by the user.
///
/// Every field is a raw string where empty means "no constraint".
/// `max_time` is parsed at filter time, see [`FilterCriteria::max_time_bound`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub max_time: String,
}

impl FilterCriteria {
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn max_time(mut self, max_time: impl Into<String>) -> Self {
        self.max_time = max_time.into();
        self
    }

    /// Parsed cook time bound.
    ///
    /// Reads the leading integer, so `"15 minutes"` and `"15.0"` both give 15
    /// and `"-5"` gives -5. Values without a leading digit give `None`.
    pub fn max_time_bound(&self) -> Option<i64> {
        let raw = self.max_time.trim_start();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }
        let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
        Some(if negative { -magnitude } else { magnitude })
    }

    pub fn is_empty(&self) -> bool {
        self.cuisine.is_empty() && self.difficulty.is_empty() && self.max_time.is_empty()
    }

    /// Check a recipe against every criterion (AND)
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.cuisine.is_empty() && !eq_ignore_case(&recipe.cuisine, &self.cuisine) {
            return false;
        }
        if !self.difficulty.is_empty() && !eq_ignore_case(&recipe.difficulty, &self.difficulty) {
            return false;
        }
        match self.max_time_bound() {
            Some(bound) => i64::from(recipe.cook_time_minutes) <= bound,
            None => true,
        }
    }
}

/// The collection filtering starts from. Never a merge of both.
#[derive(Debug, Clone, Copy)]
pub enum BaseSet<'a> {
    /// Every recipe fetched at startup; the free-text query is applied locally
    Local(&'a [Recipe]),
    /// Results of the last remote search; the query was already applied server-side
    Remote(&'a [Recipe]),
}

impl<'a> BaseSet<'a> {
    /// Pick the base set from the searching flag
    pub fn select(all_recipes: &'a [Recipe], search_results: &'a [Recipe], is_searching: bool) -> Self {
        if is_searching {
            BaseSet::Remote(search_results)
        } else {
            BaseSet::Local(all_recipes)
        }
    }

    pub fn recipes(&self) -> &'a [Recipe] {
        match self {
            BaseSet::Local(recipes) | BaseSet::Remote(recipes) => recipes,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, BaseSet::Remote(_))
    }
}

/// Compute the ordered list of recipes to display.
///
/// # Arguments
/// * `all_recipes` - The full local collection
/// * `search_results` - Results of the latest remote search
/// * `is_searching` - Whether remote search results are the base set
/// * `query` - Free-text query, only applied locally when not searching remotely
/// * `filters` - Cuisine, difficulty and max cook time criteria
///
/// # Returns
/// The subset of the base set that passes every check, in base set order.
pub fn compute_visible_recipes(
    all_recipes: &[Recipe],
    search_results: &[Recipe],
    is_searching: bool,
    query: &str,
    filters: &FilterCriteria,
) -> Vec<Recipe> {
    filter_recipes(
        BaseSet::select(all_recipes, search_results, is_searching),
        query,
        filters,
    )
}

/// Filter a base set by query and criteria. Stable, never fails.
pub fn filter_recipes(base: BaseSet<'_>, query: &str, filters: &FilterCriteria) -> Vec<Recipe> {
    let query = match base {
        BaseSet::Local(_) => query.trim().to_lowercase(),
        BaseSet::Remote(_) => String::new(),
    };

    base.recipes()
        .iter()
        .filter(|recipe| query.is_empty() || matches_query(recipe, &query))
        .filter(|recipe| filters.matches(recipe))
        .cloned()
        .collect()
}

/// Substring match of an already lower-cased query against name, cuisine or any ingredient
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.name.to_lowercase().contains(query)
        || recipe.cuisine.to_lowercase().contains(query)
        || recipe
            .ingredients
            .as_ref()
            .is_some_and(|ingredients| {
                ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(query))
            })
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
