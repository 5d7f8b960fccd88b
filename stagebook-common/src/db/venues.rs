//! Venue queries

use chrono::NaiveDateTime;
use sqlx::{SqliteConnection, SqlitePool};

use super::{ShowListing, Venue, VenueSummary, SHOW_LISTING_SELECT};
use crate::codec::encode_genres;
use crate::search::{like_pattern, SearchTerm};
use crate::validation::VenueInput;
use crate::Result;

/// Summary columns; the single bind is the "now" timestamp
const SUMMARY_SELECT: &str = r#"
    SELECT v.id, v.name, v.city, v.state,
           (SELECT COUNT(*) FROM shows s
             WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
    FROM venues v
"#;

/// All venues with upcoming show counts, ordered by name
pub async fn list_summaries(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<VenueSummary>> {
    let venues = sqlx::query_as::<_, VenueSummary>(&format!("{} ORDER BY v.name", SUMMARY_SELECT))
        .bind(now)
        .fetch_all(pool)
        .await?;
    Ok(venues)
}

/// Most recently created venues
pub async fn recent(pool: &SqlitePool, now: NaiveDateTime, limit: i64) -> Result<Vec<VenueSummary>> {
    let venues = sqlx::query_as::<_, VenueSummary>(&format!(
        "{} ORDER BY v.created_date DESC, v.id DESC LIMIT ?",
        SUMMARY_SELECT
    ))
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(venues)
}

/// Case-insensitive substring search on name, or on city and state
pub async fn search(pool: &SqlitePool, term: &SearchTerm, now: NaiveDateTime) -> Result<Vec<VenueSummary>> {
    let venues = match term {
        SearchTerm::Name(name) => {
            sqlx::query_as::<_, VenueSummary>(&format!(
                "{} WHERE v.name LIKE ? ORDER BY v.name",
                SUMMARY_SELECT
            ))
            .bind(now)
            .bind(like_pattern(name))
            .fetch_all(pool)
            .await?
        }
        SearchTerm::CityState { city, state } => {
            sqlx::query_as::<_, VenueSummary>(&format!(
                "{} WHERE v.city LIKE ? AND v.state LIKE ? ORDER BY v.name",
                SUMMARY_SELECT
            ))
            .bind(now)
            .bind(like_pattern(city))
            .bind(like_pattern(state))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(venues)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(venue)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Shows booked at a venue, in chronological order
pub async fn shows_for(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(&format!(
        "{} WHERE s.venue_id = ? ORDER BY s.start_time, s.id",
        SHOW_LISTING_SELECT
    ))
    .bind(venue_id)
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// Insert a venue and return its id
pub async fn insert(conn: &mut SqliteConnection, input: &VenueInput, created: NaiveDateTime) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (name, city, state, address, phone, genres, image_link,
                            website_link, facebook_link, seeking_talent,
                            seeking_description, created_date)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(encode_genres(&input.genres))
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(created)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite a venue; returns false when no row has that id
pub async fn update(conn: &mut SqliteConnection, id: i64, input: &VenueInput) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            image_link = ?, website_link = ?, facebook_link = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(encode_genres(&input.genres))
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a venue; its shows go with it (ON DELETE CASCADE)
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
