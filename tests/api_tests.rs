use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cinecat::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let path =
        std::env::temp_dir().join(format!("cinecat-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", path.display());

    let state = cinecat::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    cinecat::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_film(app: &Router, title: &str) -> i64 {
    let (status, body) = send(app, "POST", "/api/film", Some(json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

async fn create_actor(app: &Router, first: &str, last: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/actor",
        Some(json!({ "first_name": first, "last_name": last })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

fn ids(list: &Value, field: &str) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_film_crud() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/film",
        Some(json!({
            "title": "ACADEMY DINOSAUR",
            "release_year": 2006,
            "rating": "PG",
            "length": 86
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"].is_string());
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/film/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "ACADEMY DINOSAUR");
    assert_eq!(body["data"]["rating"], "PG");
    assert_eq!(body["data"]["rental_duration"], 3);
    assert_eq!(body["data"]["actors"], json!([]));

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/film/{id}"),
        Some(json!({ "rental_rate": 0.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 1);

    let (_, body) = send(&app, "GET", &format!("/api/film/{id}"), None).await;
    assert_eq!(body["data"]["rental_rate"], 0.99);
    assert_eq!(body["data"]["title"], "ACADEMY DINOSAUR");

    let (status, body) = send(&app, "DELETE", &format!("/api/film/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    let (status, body) = send(&app, "GET", &format!("/api/film/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());

    let (status, _) = send(&app, "DELETE", &format!("/api/film/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/film/{id}"),
        Some(json!({ "title": "GONE" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_patch_still_counts_as_update() {
    let app = spawn_app().await;
    let id = create_actor(&app, "PENELOPE", "GUINESS").await;

    let (status, body) = send(&app, "PUT", &format!("/api/actor/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 1);
}

#[tokio::test]
async fn test_film_validation() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "POST", "/api/film", Some(json!({ "title": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("title"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/film",
        Some(json!({ "title": "X", "release_year": 1500 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/film",
        Some(json!({ "title": "X", "replacement_cost": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/film", Some(json!({ "description": "no title" }))).await;
    assert!(status.is_client_error());

    let (_, body) = send(&app, "GET", "/api/film", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_actor_crud() {
    let app = spawn_app().await;

    let id = create_actor(&app, "NICK", "WAHLBERG").await;

    let (status, body) = send(&app, "GET", "/api/actor", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "actor_id"), vec![id]);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/actor/{id}"),
        Some(json!({ "last_name": "WAHLBERGH" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 1);

    let (_, body) = send(&app, "GET", &format!("/api/actor/{id}"), None).await;
    assert_eq!(body["data"]["first_name"], "NICK");
    assert_eq!(body["data"]["last_name"], "WAHLBERGH");
    assert_eq!(body["data"]["films"], json!([]));

    let (status, _) = send(
        &app,
        "POST",
        "/api/actor",
        Some(json!({ "first_name": "", "last_name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "DELETE", &format!("/api/actor/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    let (status, _) = send(&app, "GET", &format!("/api/actor/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_association_lifecycle() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "ED", "CHASE").await;
    let film_a = create_film(&app, "AFFAIR PREJUDICE").await;
    let film_b = create_film(&app, "AGENT TRUMAN").await;

    let (status, body) = send(&app, "POST", &format!("/api/actor/{actor}/film/{film_a}"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"].is_string());

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}"), None).await;
    assert_eq!(ids(&body["data"]["films"], "film_id"), vec![film_a]);

    let (status, _) = send(&app, "POST", &format!("/api/actor/{actor}/film/{film_b}"), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}"), None).await;
    assert_eq!(ids(&body["data"]["films"], "film_id"), vec![film_a, film_b]);

    let (status, body) = send(&app, "DELETE", &format!("/api/actor/{actor}/film/{film_a}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}"), None).await;
    assert_eq!(ids(&body["data"]["films"], "film_id"), vec![film_b]);

    let (_, body) = send(&app, "GET", &format!("/api/film/{film_b}"), None).await;
    assert_eq!(ids(&body["data"]["actors"], "actor_id"), vec![actor]);
}

#[tokio::test]
async fn test_unlink_missing_association_is_not_found() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "JENNIFER", "DAVIS").await;

    let (status, body) = send(&app, "DELETE", &format!("/api/actor/{actor}/film/99"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_duplicate_association_is_rejected() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "JOHNNY", "LOLLOBRIGIDA").await;
    let film = create_film(&app, "ALASKA PHANTOM").await;

    let uri = format!("/api/actor/{actor}/film/{film}");
    let (status, _) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["message"].as_str().unwrap().is_empty());

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}/films"), None).await;
    assert_eq!(ids(&body["data"], "film_id"), vec![film]);
}

#[tokio::test]
async fn test_link_to_missing_film_is_rejected() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "BETTE", "NICHOLSON").await;

    let (status, body) = send(&app, "POST", &format!("/api/actor/{actor}/film/9999"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("FOREIGN KEY"));

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}"), None).await;
    assert_eq!(body["data"]["films"], json!([]));
}

#[tokio::test]
async fn test_mirrored_routes() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "GRACE", "MOSTEL").await;
    let film = create_film(&app, "ANGELS LIFE").await;

    let (status, _) = send(&app, "POST", &format!("/api/film/{film}/actor/{actor}"), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", &format!("/api/film/{film}/actors"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "actor_id"), vec![actor]);

    let (status, _) = send(&app, "DELETE", &format!("/api/film/{film}/actor/{actor}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}/films"), None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_replace_films_is_atomic() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "MATTHEW", "JOHANSSON").await;
    let film_a = create_film(&app, "ANNIE IDENTITY").await;
    let film_b = create_film(&app, "ANYTHING SAVANNAH").await;
    let film_c = create_film(&app, "APACHE DIVINE").await;

    let uri = format!("/api/actor/{actor}/films");
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "film_ids": [film_a, film_b, film_b] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 2);

    let (status, _) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "film_ids": [film_c, 9999] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(ids(&body["data"], "film_id"), vec![film_a, film_b]);

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "film_ids": [film_c] }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 1);

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(ids(&body["data"], "film_id"), vec![film_c]);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/actor/9999/films",
        Some(json!({ "film_ids": [film_a] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_cast() {
    let app = spawn_app().await;
    let film = create_film(&app, "ARABIA DOGMA").await;
    let first = create_actor(&app, "ZERO", "CAGE").await;
    let second = create_actor(&app, "KARL", "BERRY").await;

    let uri = format!("/api/film/{film}/actors");
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "actor_ids": [second, first] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 2);

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(ids(&body["data"], "actor_id"), vec![first, second]);

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "actor_ids": [] }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 0);

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_deleting_film_removes_its_associations() {
    let app = spawn_app().await;
    let actor = create_actor(&app, "UMA", "WOOD").await;
    let film = create_film(&app, "ARMAGEDDON LOST").await;

    send(&app, "POST", &format!("/api/actor/{actor}/film/{film}"), None).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/film/{film}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/api/actor/{actor}"), None).await;
    assert_eq!(body["data"]["films"], json!([]));
}

#[tokio::test]
async fn test_invalid_path_ids() {
    let app = spawn_app().await;

    for (method, uri) in [
        ("GET", "/api/film/abc"),
        ("GET", "/api/actor/1.5"),
        ("DELETE", "/api/film/-3"),
        ("POST", "/api/actor/-1/film/2"),
        ("POST", "/api/actor/1/film/two"),
        ("DELETE", "/api/film/x/actor/1"),
        ("GET", "/api/category/first"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert!(body["message"].is_string(), "{method} {uri}");
    }
}

#[tokio::test]
async fn test_categories() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/category", None).await;
    assert_eq!(status, StatusCode::OK);
    let categories = body["data"].as_array().unwrap();
    assert_eq!(categories.len(), 16);
    assert_eq!(categories[0]["name"], "Action");

    let (status, body) = send(&app, "GET", "/api/category/14", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Sci-Fi");

    let (status, _) = send(&app, "GET", "/api/category/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_title_filter() {
    let app = spawn_app().await;
    let dinosaur = create_film(&app, "ACADEMY DINOSAUR").await;
    create_film(&app, "ACE GOLDFINGER").await;
    let dino_two = create_film(&app, "DINOSAUR SECRETARY").await;

    let (status, body) = send(&app, "GET", "/api/film?title=dinosaur", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "film_id"), vec![dinosaur, dino_two]);

    let (_, body) = send(&app, "GET", "/api/film", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, "GET", "/api/film?title=zzz", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_title_filter_matches_wildcards_literally() {
    let app = spawn_app().await;
    create_film(&app, "ACADEMY DINOSAUR").await;
    let love = create_film(&app, "100% LOVE").await;

    let (status, body) = send(&app, "GET", "/api/film?title=%25", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"], "film_id"), vec![love]);

    let (_, body) = send(&app, "GET", "/api/film?title=_", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_system_endpoints() {
    let app = spawn_app().await;
    create_film(&app, "BACKLASH UNDEFEATED").await;

    let (status, body) = send(&app, "GET", "/api/system/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], true);
    assert_eq!(body["data"]["films"], 1);
    assert_eq!(body["data"]["actors"], 0);
    assert_eq!(body["data"]["categories"], 16);

    let (status, body) = send(&app, "GET", "/api/health/live", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "alive");

    let (status, body) = send(&app, "GET", "/api/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["checks"]["database"], true);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
