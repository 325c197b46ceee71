//! End-to-end browsing flow against a mock catalog API

use serde_json::json;
use swapi_browser::{BrowserConfig, Category, ModalStack, Session, FALLBACK_LABEL};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_catalog(mock_server: &MockServer) {
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": format!("{}/people/?page=2", base),
            "results": [
                {
                    "name": "Luke Skywalker",
                    "height": "172",
                    "films": [format!("{}/films/1/", base)],
                    "species": [],
                    "vehicles": [format!("{}/vehicles/14/", base)],
                    "starships": [format!("{}/starships/12/", base), format!("{}/starships/22/", base)],
                    "url": format!("{}/people/1/", base)
                },
                {
                    "name": "C-3PO",
                    "species": [format!("{}/species/2/", base)],
                    "url": format!("{}/people/2/", base)
                },
                { "name": "Beru Whitesun lars", "url": format!("{}/people/7/", base) }
            ]
        })))
        .expect(1)
        .mount(mock_server)
        .await;

    for (route, name) in [
        ("/vehicles/14/", "Snowspeeder"),
        ("/starships/12/", "X-wing"),
        ("/species/2/", "Droid"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": name })))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/starships/22/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn browse_search_and_open_details() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server).await;
    let session = Session::new(BrowserConfig::with_base_url(&mock_server.uri()));

    // Select the category: first page only, sorted by label
    let cards = session.open_category(Category::Characters).await;
    let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Beru Whitesun lars", "C-3PO", "Luke Skywalker"]);

    // Search narrows from cache
    let found = session.filter(Category::Characters, "SKY").await;
    assert_eq!(found.len(), 1);
    let luke = found[0].item.clone();

    // Open details
    let mut modals = ModalStack::new();
    let lines: Vec<String> = modals
        .show_details(&session, Category::Characters, &luke)
        .await
        .lines
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        lines,
        vec![
            format!("starships: X-wing, {}", FALLBACK_LABEL),
            "vehicles: Snowspeeder".to_string(),
            "name: Luke Skywalker".to_string(),
            "height: 172".to_string(),
            format!("url: {}/people/1/", mock_server.uri()),
        ]
    );

    // Opening the same details again resolves from the name cache
    session.describe(Category::Characters, &luke).await;
    modals.close();
    assert!(modals.close().is_none());

    // Another card resolves a name never seen before
    let threepio = session.find_item(Category::Characters, "2").await.unwrap();
    let view = session.describe(Category::Characters, &threepio).await;
    assert_eq!(view.lines[0].to_string(), "species: Droid");

    // Revisiting the category makes no further catalog requests
    assert_eq!(session.open_category(Category::Characters).await.len(), 3);
    assert_eq!(session.resolved_name_count().await, 3);
}
