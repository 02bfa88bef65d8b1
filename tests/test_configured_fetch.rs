use mockito::{Matcher, Server};
use recipe_hub::{fetch_recipe, fetch_recipes};

// Kept alone in this binary: it points the configuration at a mock server
// through the environment.
#[tokio::test]
async fn test_fetch_helpers_use_environment_config() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/recipes")
        .match_query(Matcher::UrlEncoded("limit".into(), "3".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes": [{"id": 1, "name": "Pasta", "cuisine": "Italian", "cookTimeMinutes": 20}]}"#)
        .create_async()
        .await;
    let detail = server
        .mock("GET", "/recipes/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1, "name": "Pasta", "instructions": ["Boil water", "Cook pasta"]}"#)
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/recipes/77")
        .with_status(404)
        .create_async()
        .await;

    std::env::set_var("RECIPEHUB__SOURCE__BASE_URL", format!("{}/recipes", server.url()));
    std::env::set_var("RECIPEHUB__SOURCE__LIST_LIMIT", "3");

    let recipes = fetch_recipes().await.unwrap();
    list.assert_async().await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Pasta");

    let recipe = fetch_recipe(1).await.unwrap();
    detail.assert_async().await;
    assert!(recipe.has_details());

    let missing = fetch_recipe(77).await.unwrap_err();
    assert!(missing.is_not_found());
}
