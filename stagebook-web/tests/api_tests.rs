//! Integration tests for stagebook-web endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - 404 pages for unknown routes and ids
//! - Venue, artist and show create / edit / delete flows
//! - Flash messages carried across redirects
//! - Search, including malformed city searches
//! - Booking checks and cascading deletes
//! - Database failures rolled back and reported through the flash

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
};
use serde_json::Value;
use sqlx::SqlitePool;
use stagebook_common::db::init_database;
use stagebook_web::{build_router, AppState};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

const VENUE_FORM: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
    &address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Folk\
    &image_link=https%3A%2F%2Fimages.example.com%2Fhop.jpg\
    &seeking_talent=y&seeking_description=Looking+for+jazz+bands";

const ARTIST_FORM: &str = "name=Guns+N+Petals&city=San+Francisco&state=CA\
    &genres=RocknRoll&image_link=https%3A%2F%2Fimages.example.com%2Fgnp.jpg\
    &albums=Petals%28Bloom%2CWilt%29";

/// Throwaway database plus a router factory
struct TestApp {
    _dir: TempDir,
    pool: SqlitePool,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// `name=value` pair of the flash cookie, ready for a `Cookie` header
    fn flash_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("stagebook_flash="))
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }
}

impl TestApp {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("stagebook.db")).await.unwrap();
        Self { _dir: dir, pool }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let app = build_router(AppState::new(self.pool.clone()));
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.send(test_request("GET", uri)).await
    }

    async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        self.send(test_request("DELETE", uri)).await
    }

    async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    async fn create_venue(&self) {
        let response = self.post_form("/venues/create", VENUE_FORM).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    async fn create_artist(&self, form: &str) {
        let response = self.post_form("/artists/create", form).await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// Health and error pages
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).expect("Should parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "stagebook-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let app = TestApp::new().await;
    let response = app.get("/no/such/page").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("<h1>404</h1>"));
}

#[tokio::test]
async fn test_unknown_ids_render_404_page() {
    let app = TestApp::new().await;

    for uri in [
        "/venues/999",
        "/venues/999/edit",
        "/artists/999",
        "/artists/not-a-number",
        "/shows/999/edit",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "GET {}", uri);
    }

    assert_eq!(app.delete("/venues/999").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/shows/999").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_page_empty_database() {
    let app = TestApp::new().await;
    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Recently listed venues"));
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_create_venue_form_has_defaults() {
    let app = TestApp::new().await;
    let response = app.get("/venues/create").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("We are looking for talent."));
    assert!(response
        .body
        .contains(r#"<input type="checkbox" name="seeking_talent" value="y" checked>"#));
}

#[tokio::test]
async fn test_create_venue_renders_home_with_flash() {
    let app = TestApp::new().await;
    let response = app.post_form("/venues/create", VENUE_FORM).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Venue The Musical Hop was successfully listed!"));
    assert!(response.body.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    assert_eq!(app.count("venues").await, 1);

    let genres: String = sqlx::query_scalar("SELECT genres FROM venues WHERE id = 1")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(genres, "Jazz,Folk,");
}

#[tokio::test]
async fn test_invalid_venue_rerenders_form() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/venues/create",
            "name=&city=San+Francisco&state=ZZ&phone=5551234&image_link=not-a-url",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Name is required."));
    assert!(response.body.contains("Not a valid choice."));
    assert!(response.body.contains("Phone must be in the form (xxx-xxx-xxxx)."));
    assert!(response.body.contains("At least one genre is required."));
    assert!(response.body.contains("Image link must be an URL."));
    // Submitted values are kept
    assert!(response.body.contains(r#"value="5551234""#));
    assert_eq!(app.count("venues").await, 0);
}

#[tokio::test]
async fn test_venue_listing_groups_by_area() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.post_form(
        "/venues/create",
        "name=The+Dueling+Pianos+Bar&city=New+York&state=NY&genres=Classical\
         &image_link=https%3A%2F%2Fimages.example.com%2Fpianos.jpg",
    )
    .await;

    let response = app.get("/venues").await;
    assert_eq!(response.status, StatusCode::OK);

    let new_york = response.body.find("<h2>New York, NY</h2>").unwrap();
    let san_francisco = response.body.find("<h2>San Francisco, CA</h2>").unwrap();
    assert!(new_york < san_francisco);
    assert!(response.body.contains("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_venue_detail_page() {
    let app = TestApp::new().await;
    app.create_venue().await;

    let response = app.get("/venues/1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>The Musical Hop</h1>"));
    assert!(response.body.contains(r#"<span class="genre">Jazz</span>"#));
    assert!(response.body.contains("Looking for jazz bands"));
    assert!(response.body.contains("0 Upcoming Shows"));
    assert!(response.body.contains(r#"data-delete="/venues/1""#));
}

#[tokio::test]
async fn test_edit_venue_redirects_with_flash() {
    let app = TestApp::new().await;
    app.create_venue().await;

    let form = app.get("/venues/1/edit").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains(r#"value="1015 Folsom Street""#));

    let response = app
        .post_form(
            "/venues/1/edit",
            &VENUE_FORM.replace("The+Musical+Hop", "The+Musical+Jump"),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/venues/1"));

    let cookie = response.flash_cookie().expect("flash cookie set");
    let detail = app.get_with_cookie("/venues/1", &cookie).await;
    assert!(detail
        .body
        .contains("Venue The Musical Jump was successfully edited!"));
    assert!(detail.body.contains("<h1>The Musical Jump</h1>"));
}

#[tokio::test]
async fn test_invalid_edit_keeps_row() {
    let app = TestApp::new().await;
    app.create_venue().await;

    let response = app
        .post_form("/venues/1/edit", &VENUE_FORM.replace("state=CA", "state="))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("State is required."));

    let state: String = sqlx::query_scalar("SELECT state FROM venues WHERE id = 1")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(state, "CA");
}

#[tokio::test]
async fn test_delete_venue_cascades_and_redirects_home() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.create_artist(ARTIST_FORM).await;
    app.post_form(
        "/shows/create",
        "artist_id=1&venue_id=1&start_time=2035-06-01T20%3A00",
    )
    .await;
    assert_eq!(app.count("shows").await, 1);

    let response = app.delete("/venues/1").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
    assert_eq!(app.count("venues").await, 0);
    assert_eq!(app.count("shows").await, 0);
    assert_eq!(app.count("artists").await, 1);

    let cookie = response.flash_cookie().expect("flash cookie set");
    let home = app.get_with_cookie("/", &cookie).await;
    assert!(home
        .body
        .contains("Venue The Musical Hop was successfully deleted!"));
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_create_artist_and_show_albums() {
    let app = TestApp::new().await;
    app.create_artist(ARTIST_FORM).await;

    let albums: Option<String> = sqlx::query_scalar("SELECT albums FROM artists WHERE id = 1")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(albums.as_deref(), Some("Petals(Bloom,Wilt,),"));

    let detail = app.get("/artists/1").await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("<strong>Petals</strong>"));
    assert!(detail.body.contains("(2 songs)"));
    assert!(detail.body.contains("Rock n Roll"));

    let edit = app.get("/artists/1/edit").await;
    assert!(edit.body.contains(r#"value="Petals(Bloom,Wilt)""#));
}

#[tokio::test]
async fn test_malformed_albums_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/artists/create",
            &ARTIST_FORM.replace("Petals%28Bloom%2CWilt%29", "Petals%5BBloom%5D"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Albums must be in the form [Album1(Song1,Song2),Album2(Song1)]."));
    assert_eq!(app.count("artists").await, 0);
}

#[tokio::test]
async fn test_artist_listing_and_search() {
    let app = TestApp::new().await;
    app.create_artist(ARTIST_FORM).await;
    app.create_artist(
        "name=Matt+Quevedo&city=New+York&state=NY&genres=Jazz\
         &image_link=https%3A%2F%2Fimages.example.com%2Fmq.jpg",
    )
    .await;

    let listing = app.get("/artists").await;
    let gnp = listing.body.find("Guns N Petals").unwrap();
    let mq = listing.body.find("Matt Quevedo").unwrap();
    assert!(gnp < mq);

    let response = app
        .post_form("/artists/search", "search_term=petals")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains(r#"Number of search results for "petals": 1"#));
    assert!(response.body.contains("Guns N Petals"));

    let by_city = app
        .post_form(
            "/artists/search",
            "search_term=new+york%2C+ny&search_city=y",
        )
        .await;
    assert_eq!(by_city.status, StatusCode::OK);
    assert!(by_city.body.contains("Matt Quevedo"));
    assert!(!by_city.body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_malformed_city_search_is_bad_request() {
    let app = TestApp::new().await;

    for uri in ["/venues/search", "/artists/search", "/shows/search"] {
        let response = app
            .post_form(uri, "search_term=San+Francisco&search_city=y")
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "POST {}", uri);
        assert!(response.body.contains("<h1>400</h1>"));
    }
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_show_for_unknown_artist_and_venue_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/shows/create",
            "artist_id=41&venue_id=42&start_time=2035-06-01T20%3A00",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No artist found with id 41."));
    assert!(response.body.contains("No venue found with id 42."));
    assert_eq!(app.count("shows").await, 0);
}

#[tokio::test]
async fn test_show_form_field_errors() {
    let app = TestApp::new().await;
    let response = app
        .post_form("/shows/create", "artist_id=abc&venue_id=&start_time=")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Not a valid integer value."));
    assert!(response.body.contains("Venue id is required."));
    assert!(response.body.contains("Start time is required."));
}

#[tokio::test]
async fn test_show_outside_availability_rejected() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.create_artist(&format!(
        "{}&available_times=y&available_start=2035-04-01T00%3A00&available_end=2035-04-30T23%3A00",
        ARTIST_FORM
    ))
    .await;

    let rejected = app
        .post_form(
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2035-05-15T20%3A00",
        )
        .await;
    assert!(rejected
        .body
        .contains("Artist isn&#39;t available at that time."));
    assert_eq!(app.count("shows").await, 0);

    let accepted = app
        .post_form(
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2035-04-15T20%3A00",
        )
        .await;
    assert!(accepted.body.contains("Show was successfully listed!"));
    assert_eq!(app.count("shows").await, 1);
}

#[tokio::test]
async fn test_show_listing_edit_and_delete() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.create_artist(ARTIST_FORM).await;
    app.post_form(
        "/shows/create",
        "artist_id=1&venue_id=1&start_time=2035-06-01T20%3A00",
    )
    .await;

    let listing = app.get("/shows").await;
    assert!(listing.body.contains("1 Upcoming Show<"));
    assert!(listing.body.contains("2035-06-01T20:00"));

    let edit_form = app.get("/shows/1/edit").await;
    assert!(edit_form.body.contains(r#"value="2035-06-01T20:00""#));

    let edited = app
        .post_form(
            "/shows/1/edit",
            "artist_id=1&venue_id=1&start_time=2036-01-01T21%3A30",
        )
        .await;
    assert_eq!(edited.status, StatusCode::SEE_OTHER);
    assert_eq!(edited.location(), Some("/shows"));

    let listing = app.get("/shows").await;
    assert!(listing.body.contains("2036-01-01T21:30"));

    let searched = app.post_form("/shows/search", "search_term=hop").await;
    assert!(searched
        .body
        .contains(r#"Number of search results for "hop": 1"#));

    let deleted = app.delete("/shows/1").await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(app.count("shows").await, 0);
    assert_eq!(app.count("venues").await, 1);
}

#[tokio::test]
async fn test_venue_counts_upcoming_shows() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.create_artist(ARTIST_FORM).await;
    for start in ["2001-01-01T20%3A00", "2035-06-01T20%3A00", "2035-07-01T20%3A00"] {
        app.post_form(
            "/shows/create",
            &format!("artist_id=1&venue_id=1&start_time={}", start),
        )
        .await;
    }

    let listing = app.get("/venues").await;
    assert!(listing.body.contains("2 upcoming shows"));

    let detail = app.get("/venues/1").await;
    assert!(detail.body.contains("2 Upcoming Shows"));
    assert!(detail.body.contains("1 Past Show<"));
}

// =============================================================================
// Persistence failures
// =============================================================================

/// Make every `event` on `table` fail inside the database
async fn fail_on(app: &TestApp, event: &str, table: &str) {
    sqlx::query(&format!(
        "CREATE TRIGGER fail_{event}_{table} BEFORE {event} ON {table} \
         BEGIN SELECT RAISE(ABORT, 'disk full'); END",
        event = event.to_lowercase(),
        table = table,
    ))
    .execute(&app.pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_failed_venue_insert_renders_error_flash() {
    let app = TestApp::new().await;
    fail_on(&app, "INSERT", "venues").await;

    let response = app.post_form("/venues/create", VENUE_FORM).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("An error occurred. Venue could not be listed."));
    assert!(!response.body.contains("successfully listed"));
    assert_eq!(app.count("venues").await, 0);
}

#[tokio::test]
async fn test_failed_venue_update_keeps_row() {
    let app = TestApp::new().await;
    app.create_venue().await;
    fail_on(&app, "UPDATE", "venues").await;

    let response = app
        .post_form(
            "/venues/1/edit",
            &VENUE_FORM.replace("The+Musical+Hop", "The+Musical+Jump"),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/venues/1"));

    let cookie = response.flash_cookie().expect("flash cookie set");
    let detail = app.get_with_cookie("/venues/1", &cookie).await;
    assert!(detail
        .body
        .contains("An error occurred. Venue could not be edited."));
    assert!(detail.body.contains("<h1>The Musical Hop</h1>"));
}

#[tokio::test]
async fn test_failed_venue_delete_rolls_back_cascade() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.create_artist(ARTIST_FORM).await;
    app.post_form(
        "/shows/create",
        "artist_id=1&venue_id=1&start_time=2035-06-01T20%3A00",
    )
    .await;
    assert_eq!(app.count("shows").await, 1);
    // Fires from the cascade, after the venue row is already gone
    fail_on(&app, "DELETE", "shows").await;

    let response = app.delete("/venues/1").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
    assert_eq!(app.count("venues").await, 1);
    assert_eq!(app.count("shows").await, 1);

    let cookie = response.flash_cookie().expect("flash cookie set");
    let home = app.get_with_cookie("/", &cookie).await;
    assert!(home
        .body
        .contains("An error occurred. Venue could not be deleted."));
}

#[tokio::test]
async fn test_failed_show_insert_renders_error_flash() {
    let app = TestApp::new().await;
    app.create_venue().await;
    app.create_artist(ARTIST_FORM).await;
    fail_on(&app, "INSERT", "shows").await;

    let response = app
        .post_form(
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2035-06-01T20%3A00",
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("An error occurred. Show could not be listed."));
    assert_eq!(app.count("shows").await, 0);
}
