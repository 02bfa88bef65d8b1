use log::{debug, info};
use tokio::sync::Mutex;

use crate::filter::FilterCriteria;
use crate::session::SessionState;
use crate::source::RecipeSource;

/// Events a presentation layer forwards to the browser
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SubmitSearch(String),
    SetFilters(FilterCriteria),
    ResetFilters,
    SelectRecipe(u64),
}

/// Drives session transitions that need the recipe source.
///
/// The browser holds no session data itself; every call takes the current
/// [`SessionState`] and returns the next one.
pub struct Browser<S> {
    source: S,
    search_gate: Mutex<()>,
}

impl<S: RecipeSource> Browser<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            search_gate: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the full collection. Also used to retry after a failed load.
    pub async fn load(&self, state: SessionState) -> SessionState {
        info!("Loading recipes from {} source", self.source.source_name());
        let state = state.begin_load();
        let result = self.source.list_all().await;
        state.finish_load(result)
    }

    pub async fn handle(&self, state: SessionState, event: Event) -> SessionState {
        match event {
            Event::SubmitSearch(query) => self.submit_search(state, query).await,
            Event::SetFilters(filters) => state.set_filters(filters),
            Event::ResetFilters => state.reset_filters(),
            Event::SelectRecipe(id) => self.select_recipe(state, id).await,
        }
    }

    /// Run a remote search for `query`.
    ///
    /// Blank queries clear the search without a request. Only one search runs
    /// at a time; a submission made while another is in flight returns the
    /// state it was given.
    pub async fn submit_search(&self, state: SessionState, query: impl Into<String>) -> SessionState {
        let query = query.into();
        if query.trim().is_empty() {
            return state.begin_search(query).0;
        }

        let Ok(_guard) = self.search_gate.try_lock() else {
            debug!("Search already running, dropping '{}'", query);
            return state;
        };

        let (state, ticket) = state.begin_search(query);
        let Some(ticket) = ticket else {
            return state;
        };

        let result = self.source.search_by_query(ticket.query()).await;
        state.finish_search(&ticket, result)
    }

    /// Fetch full details for one recipe
    pub async fn select_recipe(&self, state: SessionState, id: u64) -> SessionState {
        let state = state.begin_detail();
        let result = self.source.get_by_id(id).await;
        state.finish_detail(result)
    }
}
