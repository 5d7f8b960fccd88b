//! HTTP handlers for stagebook-web

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, Uri},
};
use sqlx::{Sqlite, Transaction};
use tracing::warn;

use crate::PageError;

pub mod artists;
pub mod health;
pub mod home;
pub mod search;
pub mod shows;
pub mod venues;

pub use artists::{
    create_artist, create_artist_form, delete_artist, edit_artist, edit_artist_form, list_artists,
    show_artist,
};
pub use health::health_routes;
pub use home::home;
pub use search::{search_artists, search_shows, search_venues};
pub use shows::{create_show, create_show_form, delete_show, edit_show, edit_show_form, list_shows};
pub use venues::{
    create_venue, create_venue_form, delete_venue, edit_venue, edit_venue_form, list_venues,
    show_venue,
};

/// Integer record id from the `:id` path segment
///
/// A segment that is not an integer cannot name a record, so it is a 404
/// like any other unknown id.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| PageError::BadRequest(e.body_text()))?;

        raw.parse::<i64>()
            .map(EntityId)
            .map_err(|_| PageError::NotFound(format!("no record with id '{}'", raw)))
    }
}

/// Commit on success, roll back on error
pub(crate) async fn finish<T>(
    tx: Transaction<'_, Sqlite>,
    result: stagebook_common::Result<T>,
) -> stagebook_common::Result<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback);
            }
            Err(e)
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> PageError {
    PageError::NotFound(format!("no route for {}", uri))
}
