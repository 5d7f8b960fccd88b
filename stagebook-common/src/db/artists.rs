//! Artist queries

use chrono::NaiveDateTime;
use sqlx::{SqliteConnection, SqlitePool};

use super::{Artist, ArtistSummary, ShowListing, SHOW_LISTING_SELECT};
use crate::codec::{encode_albums, encode_genres};
use crate::search::{like_pattern, SearchTerm};
use crate::validation::ArtistInput;
use crate::Result;

/// Summary columns; the single bind is the "now" timestamp
const SUMMARY_SELECT: &str = r#"
    SELECT a.id, a.name,
           (SELECT COUNT(*) FROM shows s
             WHERE s.artist_id = a.id AND s.start_time > ?) AS num_upcoming_shows
    FROM artists a
"#;

/// All artists with upcoming show counts, ordered by name
pub async fn list_summaries(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<ArtistSummary>> {
    let artists = sqlx::query_as::<_, ArtistSummary>(&format!("{} ORDER BY a.name", SUMMARY_SELECT))
        .bind(now)
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Most recently created artists
pub async fn recent(pool: &SqlitePool, now: NaiveDateTime, limit: i64) -> Result<Vec<ArtistSummary>> {
    let artists = sqlx::query_as::<_, ArtistSummary>(&format!(
        "{} ORDER BY a.created_date DESC, a.id DESC LIMIT ?",
        SUMMARY_SELECT
    ))
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(artists)
}

/// Case-insensitive substring search on name, or on city and state
pub async fn search(pool: &SqlitePool, term: &SearchTerm, now: NaiveDateTime) -> Result<Vec<ArtistSummary>> {
    let artists = match term {
        SearchTerm::Name(name) => {
            sqlx::query_as::<_, ArtistSummary>(&format!(
                "{} WHERE a.name LIKE ? ORDER BY a.name",
                SUMMARY_SELECT
            ))
            .bind(now)
            .bind(like_pattern(name))
            .fetch_all(pool)
            .await?
        }
        SearchTerm::CityState { city, state } => {
            sqlx::query_as::<_, ArtistSummary>(&format!(
                "{} WHERE a.city LIKE ? AND a.state LIKE ? ORDER BY a.name",
                SUMMARY_SELECT
            ))
            .bind(now)
            .bind(like_pattern(city))
            .bind(like_pattern(state))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(artists)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(artist)
}

/// Shows booked for an artist, in chronological order
pub async fn shows_for(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(&format!(
        "{} WHERE s.artist_id = ? ORDER BY s.start_time, s.id",
        SHOW_LISTING_SELECT
    ))
    .bind(artist_id)
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// Insert an artist and return its id
pub async fn insert(conn: &mut SqliteConnection, input: &ArtistInput, created: NaiveDateTime) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (name, city, state, phone, genres, image_link, website_link,
                             facebook_link, albums, seeking_venue, seeking_description,
                             available_times, available_start, available_end, created_date)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(encode_genres(&input.genres))
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(encode_albums(&input.albums))
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(input.availability.is_some())
    .bind(input.availability.map(|w| w.start))
    .bind(input.availability.map(|w| w.end))
    .bind(created)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite an artist; returns false when no row has that id
pub async fn update(conn: &mut SqliteConnection, id: i64, input: &ArtistInput) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE artists
        SET name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
            website_link = ?, facebook_link = ?, albums = ?, seeking_venue = ?,
            seeking_description = ?, available_times = ?, available_start = ?,
            available_end = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(encode_genres(&input.genres))
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(encode_albums(&input.albums))
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(input.availability.is_some())
    .bind(input.availability.map(|w| w.start))
    .bind(input.availability.map(|w| w.end))
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an artist; its shows go with it (ON DELETE CASCADE)
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
