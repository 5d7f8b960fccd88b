//! stagebook-web library - booking directory web application
//!
//! Server-rendered pages for listing, searching, creating, editing and
//! deleting venues, artists and shows.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod flash;
pub mod views;

pub use error::PageError;

/// Number of recently listed venues and artists shown on the home page
pub const RECENT_LIMIT: i64 = 10;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    let venues = Router::new()
        .route("/venues", get(api::list_venues))
        .route("/venues/search", post(api::search_venues))
        .route(
            "/venues/create",
            get(api::create_venue_form).post(api::create_venue),
        )
        .route(
            "/venues/:id",
            get(api::show_venue).delete(api::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(api::edit_venue_form).post(api::edit_venue),
        );

    let artists = Router::new()
        .route("/artists", get(api::list_artists))
        .route("/artists/search", post(api::search_artists))
        .route(
            "/artists/create",
            get(api::create_artist_form).post(api::create_artist),
        )
        .route(
            "/artists/:id",
            get(api::show_artist).delete(api::delete_artist),
        )
        .route(
            "/artists/:id/edit",
            get(api::edit_artist_form).post(api::edit_artist),
        );

    let shows = Router::new()
        .route("/shows", get(api::list_shows))
        .route("/shows/search", post(api::search_shows))
        .route(
            "/shows/create",
            get(api::create_show_form).post(api::create_show),
        )
        .route("/shows/:id", delete(api::delete_show))
        .route(
            "/shows/:id/edit",
            get(api::edit_show_form).post(api::edit_show),
        );

    Router::new()
        .route("/", get(api::home))
        .merge(venues)
        .merge(artists)
        .merge(shows)
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
