use mockito::{Matcher, Server};
use recipe_hub::{
    browse, Browser, Event, FilterCriteria, HttpRecipeSource, Notice, Page, SessionState,
};

const ALL_RECIPES: &str = r#"
{
    "recipes": [
        {"id": 1, "name": "Pasta", "cuisine": "Italian", "difficulty": "Easy", "cookTimeMinutes": 20,
         "ingredients": ["Spaghetti", "Garlic"]},
        {"id": 2, "name": "Taco", "cuisine": "Mexican", "difficulty": "Medium", "cookTimeMinutes": 15,
         "ingredients": ["Tortilla", "Beef"]}
    ],
    "total": 2,
    "skip": 0,
    "limit": 50
}
"#;

async fn mock_list(server: &mut Server) -> mockito::Mock {
    server
        .mock("GET", "/recipes")
        .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ALL_RECIPES)
        .create_async()
        .await
}

fn source_for(server: &Server) -> HttpRecipeSource {
    HttpRecipeSource::with_base_url(format!("{}/recipes", server.url())).unwrap()
}

fn names(recipes: &[recipe_hub::Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn test_cuisine_filter_over_local_collection() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;

    let view = browse(
        source_for(&server),
        "",
        FilterCriteria::default().cuisine("Italian"),
    )
    .await;

    assert_eq!(names(&view.recipes), vec!["Pasta"]);
    assert!(view.error.is_none());
    assert!(!view.loading);
}

#[tokio::test]
async fn test_max_time_filter_over_local_collection() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;

    let view = browse(source_for(&server), "", FilterCriteria::default().max_time("15")).await;
    assert_eq!(names(&view.recipes), vec!["Taco"]);
}

#[tokio::test]
async fn test_local_query_matches_name_substring() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;

    let browser = Browser::new(source_for(&server));
    let state = browser.load(SessionState::new()).await;
    let state = state.set_query("tac");

    assert!(!state.is_searching());
    assert_eq!(names(&state.visible_recipes()), vec!["Taco"]);
}

#[tokio::test]
async fn test_remote_results_replace_local_collection() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;
    let search = server
        .mock("GET", "/recipes/search")
        .match_query(Matcher::UrlEncoded("q".into(), "garlic".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": [{"id": 5, "name": "Garlic Bread", "cuisine": "Italian", "difficulty": "Easy", "cookTimeMinutes": 10}]}"#)
        .create_async()
        .await;

    let view = browse(source_for(&server), "garlic", FilterCriteria::default()).await;

    search.assert_async().await;
    // Pasta lists garlic locally but is not part of the remote results
    assert_eq!(names(&view.recipes), vec!["Garlic Bread"]);
}

#[tokio::test]
async fn test_failed_remote_search_falls_back_to_local() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;
    let _search = server
        .mock("GET", "/recipes/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let browser = Browser::new(source_for(&server));
    let state = browser.load(SessionState::new()).await;
    let state = browser
        .handle(state, Event::SubmitSearch("tortilla".to_string()))
        .await;

    assert!(!state.is_searching());
    assert!(state.search_results().is_empty());
    assert_eq!(state.notice(), Some(Notice::SearchFellBack));
    assert_eq!(
        state.view().error.as_deref(),
        Some("API search failed, showing local results instead.")
    );
    assert_eq!(names(&state.visible_recipes()), vec!["Taco"]);
}

#[tokio::test]
async fn test_reset_after_search_restores_collection() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;
    let _search = server
        .mock("GET", "/recipes/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": [{"id": 7, "name": "Green Curry", "cuisine": "Thai", "cookTimeMinutes": 40}]}"#)
        .create_async()
        .await;

    let browser = Browser::new(source_for(&server));
    let state = browser.load(SessionState::new()).await;
    let state = browser
        .handle(
            state,
            Event::SetFilters(FilterCriteria::default().difficulty("hard")),
        )
        .await;
    let state = browser
        .handle(state, Event::SubmitSearch("curry".to_string()))
        .await;
    assert!(state.is_searching());
    assert_eq!(state.page(), Page::Search);

    let state = browser.handle(state, Event::ResetFilters).await;
    assert!(!state.is_searching());
    assert_eq!(names(&state.visible_recipes()), vec!["Pasta", "Taco"]);
}

#[tokio::test]
async fn test_failed_load_is_blocking() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/recipes")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let view = browse(source_for(&server), "pasta", FilterCriteria::default()).await;
    assert!(view.recipes.is_empty());
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to load recipes. Please try again later.")
    );
}

#[tokio::test]
async fn test_failed_load_recovers_when_reloaded() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("GET", "/recipes")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;
    let succeeding = mock_list(&mut server).await;

    let browser = Browser::new(source_for(&server));
    let state = browser.load(SessionState::new()).await;
    assert_eq!(state.notice(), Some(Notice::LoadFailed));
    assert!(state.view().recipes.is_empty());

    let state = browser.load(state).await;
    failing.assert_async().await;
    succeeding.assert_async().await;
    assert!(state.notice().is_none());
    assert_eq!(names(&state.view().recipes), vec!["Pasta", "Taco"]);
}

#[tokio::test]
async fn test_select_recipe_loads_details() {
    let mut server = Server::new_async().await;
    let _list = mock_list(&mut server).await;
    let _detail = server
        .mock("GET", "/recipes/2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 2, "name": "Taco", "cuisine": "Mexican", "instructions": ["Warm tortillas", "Fill"]}"#)
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/recipes/404")
        .with_status(404)
        .create_async()
        .await;

    let browser = Browser::new(source_for(&server));
    let state = browser.load(SessionState::new()).await;

    let state = browser.handle(state, Event::SelectRecipe(2)).await;
    assert_eq!(state.page(), Page::Detail);
    assert_eq!(state.selected().unwrap().instructions.len(), 2);

    let state = browser
        .handle(state.navigate(Page::Home), Event::SelectRecipe(404))
        .await;
    assert_eq!(state.page(), Page::Home);
    assert_eq!(state.notice(), Some(Notice::DetailFailed));
    assert_eq!(state.view().recipes.len(), 2);
}
