#![allow(clippy::unwrap_used, clippy::expect_used)]
//! HTTP surface tests against the real router.

mod common;

use axum::http::StatusCode;

use common::TestApp;
use trellis_test_utils::{TestRegistry, assert, test_node};

#[tokio::test]
async fn test_front_page_is_usage_menu() {
    let app = TestApp::new();
    let (status, html) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert::contains(&html, r#"<nav class="menu menu--usage">"#);
    assert::contains(&html, r#"href="/usage/persist-context""#);
}

#[tokio::test]
async fn test_samples_menu() {
    let app = TestApp::new();
    let (status, html) = app.get("/samples").await;

    assert_eq!(status, StatusCode::OK);
    assert::contains(&html, r#"<nav class="menu menu--samples">"#);
    assert::contains(&html, r#"href="/samples/manage-data""#);
    assert::not_contains(&html, r#"href="/usage/manage-data""#);
}

#[tokio::test]
async fn test_every_node_has_a_page() {
    let app = TestApp::new();

    for registry in app.state.registries() {
        for item in registry.items() {
            let (status, html) = app.get(item.href()).await;
            assert_eq!(status, StatusCode::OK, "GET {}", item.href());
            assert::contains(&html, &format!("<h1>{}</h1>", item.label()));
        }
    }
}

#[tokio::test]
async fn test_node_page_see_also() {
    let app = TestApp::new();

    let (_, html) = app.get("/usage/manage-data").await;
    assert::contains(&html, "<h2>See also</h2>");
    assert::in_order(&html, r#"href="/usage/layers""#, r#"href="/usage/data-isolation""#);

    let (_, html) = app.get("/usage/installation").await;
    assert::not_contains(&html, "See also");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = TestApp::new();
    let (status, _) = app.get("/usage/webgl").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_api() {
    let app = TestApp::new();
    let (status, json) = app.get_json("/api/menu/usage").await;

    assert_eq!(status, StatusCode::OK);
    let groups = json.as_array().unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0]["name"], "Getting Started");
    assert_eq!(groups[3]["name"], "Additional Concepts");
    assert_eq!(groups[3]["items"][0]["href"], "/usage/manage-data");
    assert_eq!(groups[3]["items"][0]["tags"][0], "data");

    let (status, _) = app.get("/api/menu/blog").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_api() {
    let app = TestApp::new();
    let (status, json) = app.get_json("/api/search?q=layers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "layers");
    let hrefs: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["href"].as_str().unwrap())
        .collect();
    assert_eq!(hrefs, vec!["/usage/layers", "/usage/data-isolation"]);
}

#[tokio::test]
async fn test_search_page() {
    let app = TestApp::new();
    let (status, html) = app.get("/search?q=rotate").await;

    assert_eq!(status, StatusCode::OK);
    assert::contains(&html, r#"<a href="/usage/transform">Transform</a>"#);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let (status, json) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["registries"], 2);
    assert_eq!(json["nodes"], 15);
}

#[tokio::test]
async fn test_custom_registries_are_routed() {
    let registry = TestRegistry::new("usage")
        .node(test_node("Layers", "/guide/layers"))
        .node(test_node("Transform", "/guide/transform"))
        .see_also("/guide/transform", &["/guide/layers"])
        .build()
        .unwrap();
    let app = TestApp::with_registries(vec![registry]);

    let (status, html) = app.get("/guide/transform").await;
    assert_eq!(status, StatusCode::OK);
    assert::contains(&html, r#"<a href="/guide/layers">Layers</a>"#);

    // No samples registry configured
    let (status, _) = app.get("/samples").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
