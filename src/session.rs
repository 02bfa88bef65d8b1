//! Browsing session state.
//!
//! A [`SessionState`] is a plain value. Every user event consumes the
//! current state and returns the next one, so a presentation layer can keep
//! the previous value around, compare, or replay without touching globals.

use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

use crate::error::BrowseError;
use crate::filter::{filter_recipes, BaseSet, FilterCriteria};
use crate::model::Recipe;

/// Cuisines shown on the categories page
pub const CATEGORIES: [&str; 6] = [
    "Italian",
    "Asian",
    "American",
    "Mexican",
    "Mediterranean",
    "Indian",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Search,
    Categories,
    Detail,
}

/// Where the recipes being filtered come from
#[derive(Debug, Clone, Default)]
pub enum SearchMode {
    /// Filter the full local collection
    #[default]
    Local,
    /// Filter the results of the last successful remote search
    Remote(Arc<Vec<Recipe>>),
}

impl SearchMode {
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchMode::Remote(_))
    }
}

/// User-visible status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Initial load failed, nothing to show until it is retried
    LoadFailed,
    /// Remote search failed, local filtering is used instead
    SearchFellBack,
    /// Detail fetch failed, the list stays on screen
    DetailFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::LoadFailed => "Failed to load recipes. Please try again later.",
            Notice::SearchFellBack => "API search failed, showing local results instead.",
            Notice::DetailFailed => "Failed to load recipe details. Please try again.",
        }
    }

    /// Blocking notices replace the recipe list
    pub fn is_blocking(&self) -> bool {
        matches!(self, Notice::LoadFailed)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Handle for one outstanding remote search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Trimmed query to send to the recipe source
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What a presentation layer needs to draw the list
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    page: Page,
    all_recipes: Arc<Vec<Recipe>>,
    mode: SearchMode,
    query: String,
    filters: FilterCriteria,
    selected: Option<Recipe>,
    loading: bool,
    notice: Option<Notice>,
    search_generation: u64,
    pending_search: Option<u64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn all_recipes(&self) -> &[Recipe] {
        &self.all_recipes
    }

    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }

    pub fn is_searching(&self) -> bool {
        self.mode.is_searching()
    }

    /// Remote results, empty when filtering locally
    pub fn search_results(&self) -> &[Recipe] {
        match &self.mode {
            SearchMode::Remote(results) => results,
            SearchMode::Local => &[],
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn search_in_flight(&self) -> bool {
        self.pending_search.is_some()
    }

    fn base_set(&self) -> BaseSet<'_> {
        match &self.mode {
            SearchMode::Local => BaseSet::Local(&self.all_recipes),
            SearchMode::Remote(results) => BaseSet::Remote(results),
        }
    }

    /// Recipes passing the current query and filters
    pub fn visible_recipes(&self) -> Vec<Recipe> {
        filter_recipes(self.base_set(), &self.query, &self.filters)
    }

    /// Recipes for the current page.
    ///
    /// The search page always shows the filtered list. Other pages fall back
    /// to the full collection when nothing passes the filters.
    pub fn displayed_recipes(&self) -> Vec<Recipe> {
        let visible = self.visible_recipes();
        if self.page == Page::Search || !visible.is_empty() {
            visible
        } else {
            self.all_recipes.to_vec()
        }
    }

    pub fn view(&self) -> View {
        View {
            recipes: self.displayed_recipes(),
            loading: self.loading,
            error: self.notice.map(|n| n.message().to_string()),
        }
    }

    pub fn begin_load(mut self) -> Self {
        self.loading = true;
        self.notice = None;
        self
    }

    pub fn finish_load(mut self, result: Result<Vec<Recipe>, BrowseError>) -> Self {
        self.loading = false;
        match result {
            Ok(recipes) => {
                debug!("Session holds {} recipes", recipes.len());
                self.all_recipes = Arc::new(recipes);
            }
            Err(e) => {
                warn!("Error loading recipes: {}", e);
                self.notice = Some(Notice::LoadFailed);
            }
        }
        self
    }

    /// Update the query text without searching
    pub fn set_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn set_filters(mut self, filters: FilterCriteria) -> Self {
        self.filters = filters;
        self
    }

    /// Clear criteria and query and go back to the unfiltered local collection
    pub fn reset_filters(mut self) -> Self {
        self.filters = FilterCriteria::default();
        self.query.clear();
        self.mode = SearchMode::Local;
        self.abandon_search();
        self
    }

    fn abandon_search(&mut self) {
        if self.pending_search.take().is_some() {
            self.loading = false;
        }
    }

    /// Pick a cuisine from the categories page
    pub fn select_category(mut self, cuisine: impl Into<String>) -> Self {
        self.filters.cuisine = cuisine.into();
        self.page = Page::Search;
        self
    }

    pub fn navigate(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn dismiss_notice(mut self) -> Self {
        self.notice = None;
        self
    }

    /// Submit the query for searching.
    ///
    /// A blank query clears the search and returns no ticket. While another
    /// search is outstanding the state is returned unchanged and no ticket is
    /// issued. Otherwise the caller must run the search for the returned
    /// ticket and hand the outcome to [`SessionState::finish_search`].
    pub fn begin_search(mut self, query: impl Into<String>) -> (Self, Option<SearchTicket>) {
        let query = query.into();

        if query.trim().is_empty() {
            self.query = query;
            self.mode = SearchMode::Local;
            self.abandon_search();
            return (self, None);
        }

        if let Some(generation) = self.pending_search {
            debug!("Search {} still in flight, ignoring '{}'", generation, query);
            return (self, None);
        }

        self.search_generation += 1;
        self.pending_search = Some(self.search_generation);
        self.loading = true;
        self.notice = None;

        let ticket = SearchTicket {
            generation: self.search_generation,
            query: query.trim().to_string(),
        };
        self.query = query;
        (self, Some(ticket))
    }

    /// Apply the outcome of a remote search. Stale tickets are dropped.
    pub fn finish_search(
        mut self,
        ticket: &SearchTicket,
        result: Result<Vec<Recipe>, BrowseError>,
    ) -> Self {
        if self.pending_search != Some(ticket.generation) {
            debug!(
                "Discarding stale search response for '{}' (generation {})",
                ticket.query, ticket.generation
            );
            return self;
        }

        self.pending_search = None;
        self.loading = false;

        match result {
            Ok(recipes) => {
                self.mode = SearchMode::Remote(Arc::new(recipes));
                self.page = Page::Search;
            }
            Err(e) => {
                // The query stays, so local filtering re-applies it
                warn!("Error searching recipes: {}", e);
                self.mode = SearchMode::Local;
                self.notice = Some(Notice::SearchFellBack);
            }
        }
        self
    }

    pub fn begin_detail(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn finish_detail(mut self, result: Result<Recipe, BrowseError>) -> Self {
        self.loading = false;
        match result {
            Ok(recipe) => {
                self.selected = Some(recipe);
                self.page = Page::Detail;
            }
            Err(e) => {
                warn!("Error loading recipe details: {}", e);
                self.notice = Some(Notice::DetailFailed);
            }
        }
        self
    }
}
