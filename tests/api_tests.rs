//! End-to-end tests for the `/bands` endpoints against an in-memory SQLite
//! database initialized with the real migrations.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bandstand::{build_router, DatabaseState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: fresh in-memory database with the schema applied
async fn setup_app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single pooled connection keeps every request on the same in-memory database
    options.max_connections(1).min_connections(1);
    let connection = Database::connect(options)
        .await
        .expect("Should open in-memory database");
    Migrator::up(&connection, None)
        .await
        .expect("Should create tables");
    build_router(DatabaseState { connection })
}

/// Test helper: send a request and decode the JSON body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = serde_json::from_slice(&bytes).expect("Should parse JSON");
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn create(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, post_json("/bands", &payload)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body
}

fn names(bands: &Value) -> Vec<&str> {
    bands
        .as_array()
        .unwrap()
        .iter()
        .map(|band| band["name"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_band_normalizes_genre_and_assigns_id() {
    let app = setup_app().await;

    let body = create(&app, json!({"name": "Metallica", "genre": "metal"})).await;

    assert_eq!(body["name"], "Metallica");
    assert_eq!(body["genre"], "Metal");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["albums"], json!([]));
}

#[tokio::test]
async fn create_band_persists_every_album() {
    let app = setup_app().await;

    let body = create(
        &app,
        json!({
            "name": "Daft Punk",
            "genre": " electronic ",
            "albums": [
                {"title": "Homework", "release_date": "1997-01-20"},
                {"title": "Discovery", "release_date": "2001-03-12"},
                {"title": "Random Access Memories", "release_date": "2013-05-17"}
            ]
        }),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, get(&format!("/bands/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    let albums = fetched["albums"].as_array().unwrap();
    assert_eq!(albums.len(), 3);
    assert!(albums.iter().all(|album| album["band_id"] == id));
    let titles: Vec<&str> = albums
        .iter()
        .map(|album| album["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Homework", "Discovery", "Random Access Memories"]
    );
}

#[tokio::test]
async fn created_band_round_trips_through_get() {
    let app = setup_app().await;

    let created = create(
        &app,
        json!({
            "name": "Run the Jewels",
            "genre": "hip-hop",
            "albums": [{"title": "RTJ4", "release_date": "2020-06-03"}]
        }),
    )
    .await;

    let (status, fetched) = send(&app, get(&format!("/bands/{}", created["id"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["genre"], "Hip-Hop");
    assert_eq!(fetched["albums"][0]["release_date"], "2020-06-03");
}

#[tokio::test]
async fn invalid_genre_is_rejected_and_nothing_is_stored() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/bands",
            &json!({
                "name": "Miles Davis Quintet",
                "genre": "Jazz",
                "albums": [{"title": "Relaxin'", "release_date": "1958-03-01"}]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("Jazz"));

    let (_, bands) = send(&app, get("/bands")).await;
    assert_eq!(bands, json!([]));
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let app = setup_app().await;

    let (status, body) = send(&app, post_json("/bands", &json!({"genre": "Rock"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = send(
        &app,
        post_json(
            "/bands",
            &json!({
                "name": "Nirvana",
                "genre": "Rock",
                "albums": [{"title": "Nevermind", "release_date": "not a date"}]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Get by id
// =============================================================================

#[tokio::test]
async fn missing_band_is_not_found() {
    let app = setup_app().await;

    let (status, body) = send(&app, get("/bands/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn id_beyond_key_range_is_not_found() {
    let app = setup_app().await;

    let (status, body) = send(&app, get("/bands/99999999999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Band with id 99999999999 not found!");
}

#[tokio::test]
async fn has_album_accepts_single_letter_flags() {
    let app = setup_app().await;
    create(&app, json!({"name": "Kraftwerk", "genre": "Electronic"})).await;

    let (status, bands) = send(&app, get("/bands?has_album=t")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bands, json!([]));

    let (status, bands) = send(&app, get("/bands?has_album=n")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&bands), vec!["Kraftwerk"]);
}

#[tokio::test]
async fn non_numeric_or_non_positive_ids_are_rejected() {
    let app = setup_app().await;

    let (status, body) = send(&app, get("/bands/abc")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, get("/bands/0")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// List and filter
// =============================================================================

async fn seed(app: &Router) {
    create(
        app,
        json!({
            "name": "Led Zeppelin",
            "genre": "Rock",
            "albums": [{"title": "Led Zeppelin IV", "release_date": "1971-11-08"}]
        }),
    )
    .await;
    create(app, json!({"name": "The Strokes", "genre": "rock"})).await;
    create(
        app,
        json!({
            "name": "Slayer",
            "genre": "Metal",
            "albums": [{"title": "Reign in Blood", "release_date": "1986-10-07"}]
        }),
    )
    .await;
    create(app, json!({"name": "ABBA", "genre": "POP"})).await;
}

#[tokio::test]
async fn list_returns_all_bands_in_creation_order() {
    let app = setup_app().await;
    seed(&app).await;

    let (status, bands) = send(&app, get("/bands")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&bands),
        vec!["Led Zeppelin", "The Strokes", "Slayer", "ABBA"]
    );
    assert_eq!(bands[0]["albums"][0]["title"], "Led Zeppelin IV");
}

#[tokio::test]
async fn list_filters_by_genre() {
    let app = setup_app().await;
    seed(&app).await;

    let (status, bands) = send(&app, get("/bands?genre=Rock")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&bands), vec!["Led Zeppelin", "The Strokes"]);
    assert!(bands
        .as_array()
        .unwrap()
        .iter()
        .all(|band| band["genre"] == "Rock"));
}

#[tokio::test]
async fn list_filters_by_album_presence() {
    let app = setup_app().await;
    seed(&app).await;

    let (_, with_albums) = send(&app, get("/bands?has_album=true")).await;
    assert_eq!(names(&with_albums), vec!["Led Zeppelin", "Slayer"]);

    let (_, everything) = send(&app, get("/bands?has_album=false")).await;
    assert_eq!(everything.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn list_filters_combine() {
    let app = setup_app().await;
    seed(&app).await;

    let (status, bands) = send(&app, get("/bands?genre=rock&has_album=true")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&bands), vec!["Led Zeppelin"]);
}

#[tokio::test]
async fn list_rejects_bad_filters() {
    let app = setup_app().await;

    let (status, body) = send(&app, get("/bands?genre=Jazz")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("Jazz"));

    let (status, _) = send(&app, get("/bands?has_album=sometimes")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
