use betaseries::params::BadgesBadgeParams;
use betaseries::{Client, Locale};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn badge_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/badges/badge"))
        .and(query_param("id", "42"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "badge": {
                "id": 42,
                "name": "Marathon",
                "description": "Watch 100 episodes",
                "picture_url": "https://pictures.betaseries.com/badges/42.png",
                "width": 120,
                "height": 120,
                "level": 2
            },
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new("test-key")
        .with_base_url(Url::parse(server.uri().as_str()).unwrap())
        .with_locale(Locale::En);
    let badge = client.badges().badge(BadgesBadgeParams { id: 42, ..Default::default() }).await.unwrap();
    assert_eq!(badge.name, "Marathon");
    assert_eq!(badge.level, Some(2));
}

#[tokio::test]
async fn unknown_badge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/badges/badge"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"code": 0, "text": "Badge not found."}]
        })))
        .mount(&server)
        .await;

    let client = Client::new("test-key").with_base_url(Url::parse(server.uri().as_str()).unwrap());
    let err = client.badges().badge(BadgesBadgeParams { id: 1, ..Default::default() }).await.unwrap_err();
    assert_eq!(err.to_string(), "Code: 0, Message: Badge not found.\n");
}
