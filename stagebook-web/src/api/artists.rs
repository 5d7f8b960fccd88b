//! Artist handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use sqlx::SqlitePool;
use stagebook_common::aggregate::partition_shows;
use stagebook_common::codec::{decode_albums, decode_genres};
use stagebook_common::db::{artists, Artist};
use stagebook_common::time::now;
use stagebook_common::validation::{validate_artist, ArtistForm, ArtistInput, FieldErrors};
use stagebook_common::Error;
use tracing::{debug, error, info};

use super::home::render_home;
use super::{finish, EntityId};
use crate::{flash, views, AppState, PageError};

async fn load_artist(state: &AppState, id: i64) -> Result<Artist, PageError> {
    artists::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", id)))
}

fn new_artist_page(form: &ArtistForm, errors: &FieldErrors) -> Html<String> {
    views::page(
        "List an artist",
        None,
        &views::artists::form("/artists/create", "List a new artist", form, errors),
    )
}

fn edit_artist_page(id: i64, form: &ArtistForm, errors: &FieldErrors) -> Html<String> {
    views::page(
        "Edit artist",
        None,
        &views::artists::form(
            &format!("/artists/{}/edit", id),
            &format!("Edit artist {}", form.name),
            form,
            errors,
        ),
    )
}

/// Insert (`id` None) or update inside one transaction
async fn save_artist(
    pool: &SqlitePool,
    id: Option<i64>,
    input: &ArtistInput,
) -> stagebook_common::Result<i64> {
    let mut tx = pool.begin().await?;
    let result = match id {
        None => artists::insert(&mut tx, input, now()).await,
        Some(id) => match artists::update(&mut tx, id, input).await {
            Ok(true) => Ok(id),
            Ok(false) => Err(Error::NotFound(format!("artist {}", id))),
            Err(e) => Err(e),
        },
    };
    finish(tx, result).await
}

async fn remove_artist(pool: &SqlitePool, id: i64) -> stagebook_common::Result<()> {
    let mut tx = pool.begin().await?;
    let result = match artists::delete(&mut tx, id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::NotFound(format!("artist {}", id))),
        Err(e) => Err(e),
    };
    finish(tx, result).await
}

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, message) = flash::take(jar);
    let summaries = artists::list_summaries(&state.db, now()).await?;
    debug!(artists = summaries.len(), "Listing artists");

    Ok((
        jar,
        views::page("Artists", message.as_deref(), &views::artists::list(&summaries)),
    ))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
) -> Result<(CookieJar, Html<String>), PageError> {
    let artist = load_artist(&state, id).await?;
    let genres = decode_genres(&artist.genres)?;
    let albums = artist.albums.as_deref().map(decode_albums).unwrap_or_default();
    let shows = partition_shows(artists::shows_for(&state.db, id).await?, now());

    let (jar, message) = flash::take(jar);
    Ok((
        jar,
        views::page(
            &artist.name,
            message.as_deref(),
            &views::artists::detail(&artist, &genres, &albums, &shows),
        ),
    ))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    new_artist_page(&ArtistForm::blank(), &FieldErrors::new())
}

/// POST /artists/create
///
/// Renders the home page with the outcome rather than redirecting.
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Html<String>, PageError> {
    let input = match validate_artist(&form) {
        Ok(input) => input,
        Err(errors) => {
            debug!(fields = errors.len(), "Artist form rejected: {}", errors);
            return Ok(new_artist_page(&form, &errors));
        }
    };

    let message = match save_artist(&state.db, None, &input).await {
        Ok(id) => {
            info!(artist_id = id, "Artist listed: {}", input.name);
            format!("Artist {} was successfully listed!", input.name)
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", input.name, e);
            "An error occurred. Artist could not be listed.".to_string()
        }
    };

    render_home(&state, Some(&message)).await
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let artist = load_artist(&state, id).await?;
    Ok(edit_artist_page(
        id,
        &ArtistForm::from_artist(&artist),
        &FieldErrors::new(),
    ))
}

/// POST /artists/:id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    load_artist(&state, id).await?;

    let input = match validate_artist(&form) {
        Ok(input) => input,
        Err(errors) => {
            debug!(artist_id = id, fields = errors.len(), "Artist form rejected: {}", errors);
            return Ok(edit_artist_page(id, &form, &errors).into_response());
        }
    };

    let message = match save_artist(&state.db, Some(id), &input).await {
        Ok(_) => {
            info!(artist_id = id, "Artist edited: {}", input.name);
            format!("Artist {} was successfully edited!", input.name)
        }
        Err(e) => {
            error!("Failed to edit artist {}: {}", id, e);
            "An error occurred. Artist could not be edited.".to_string()
        }
    };

    Ok((
        flash::push(jar, message),
        Redirect::to(&format!("/artists/{}", id)),
    )
        .into_response())
}

/// DELETE /artists/:id
///
/// The artist's shows go with it.
pub async fn delete_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
) -> Result<(CookieJar, Redirect), PageError> {
    let artist = load_artist(&state, id).await?;

    let message = match remove_artist(&state.db, id).await {
        Ok(()) => {
            info!(artist_id = id, "Artist deleted: {}", artist.name);
            format!("Artist {} was successfully deleted!", artist.name)
        }
        Err(e) => {
            error!("Failed to delete artist {}: {}", id, e);
            "An error occurred. Artist could not be deleted.".to_string()
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/")))
}
