//! Show queries and booking checks

use chrono::NaiveDateTime;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use super::{artists, venues, Show, ShowListing, SHOW_LISTING_SELECT};
use crate::search::{like_pattern, SearchTerm};
use crate::validation::{check_availability, validate_show_form, FieldErrors, ShowForm, ShowInput};
use crate::{Error, Result};

/// Every show with artist and venue details, ordered by start time
pub async fn list(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(&format!(
        "{} ORDER BY s.start_time, s.id",
        SHOW_LISTING_SELECT
    ))
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// Search by artist or venue name, or by artist or venue city and state
pub async fn search(pool: &SqlitePool, term: &SearchTerm) -> Result<Vec<ShowListing>> {
    let shows = match term {
        SearchTerm::Name(name) => {
            let pattern = like_pattern(name);
            sqlx::query_as::<_, ShowListing>(&format!(
                "{} WHERE a.name LIKE ? OR v.name LIKE ? ORDER BY s.start_time, s.id",
                SHOW_LISTING_SELECT
            ))
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await?
        }
        SearchTerm::CityState { city, state } => {
            let city = like_pattern(city);
            let state = like_pattern(state);
            sqlx::query_as::<_, ShowListing>(&format!(
                "{} WHERE (a.city LIKE ? AND a.state LIKE ?) \
                    OR (v.city LIKE ? AND v.state LIKE ?) \
                 ORDER BY s.start_time, s.id",
                SHOW_LISTING_SELECT
            ))
            .bind(&city)
            .bind(&state)
            .bind(&city)
            .bind(&state)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(shows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Show>> {
    let show = sqlx::query_as::<_, Show>("SELECT * FROM shows WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(show)
}

/// Validate a booking form against the database
///
/// Field format errors are reported first; only a well-formed form is checked
/// for an existing artist and venue and for the artist's availability window.
/// No overlap check is made for either side.
pub async fn validate_booking(pool: &SqlitePool, form: &ShowForm) -> Result<ShowInput> {
    let input = validate_show_form(form).map_err(Error::Validation)?;
    let mut errors = FieldErrors::new();

    match artists::get(pool, input.artist_id).await? {
        None => errors.add(
            "artist_id",
            format!("No artist found with id {}.", input.artist_id),
        ),
        Some(artist) if !check_availability(&artist, input.start_time) => {
            debug!(
                artist_id = artist.id,
                start_time = %input.start_time,
                "Booking outside artist availability"
            );
            errors.add("start_time", "Artist isn't available at that time.");
        }
        Some(_) => {}
    }

    if !venues::exists(pool, input.venue_id).await? {
        errors.add(
            "venue_id",
            format!("No venue found with id {}.", input.venue_id),
        );
    }

    if errors.is_empty() {
        Ok(input)
    } else {
        Err(Error::Validation(errors))
    }
}

/// Insert a show and return its id
pub async fn insert(conn: &mut SqliteConnection, input: &ShowInput, created: NaiveDateTime) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO shows (artist_id, venue_id, start_time, created_date) VALUES (?, ?, ?, ?)",
    )
    .bind(input.artist_id)
    .bind(input.venue_id)
    .bind(input.start_time)
    .bind(created)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite a show; returns false when no row has that id
pub async fn update(conn: &mut SqliteConnection, id: i64, input: &ShowInput) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE shows SET artist_id = ?, venue_id = ?, start_time = ? WHERE id = ?",
    )
    .bind(input.artist_id)
    .bind(input.venue_id)
    .bind(input.start_time)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM shows WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
