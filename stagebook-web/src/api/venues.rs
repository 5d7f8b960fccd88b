//! Venue handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use sqlx::SqlitePool;
use stagebook_common::aggregate::{group_by_area, partition_shows};
use stagebook_common::codec::decode_genres;
use stagebook_common::db::{venues, Venue};
use stagebook_common::time::now;
use stagebook_common::validation::{validate_venue, FieldErrors, VenueForm, VenueInput};
use stagebook_common::Error;
use tracing::{debug, error, info};

use super::home::render_home;
use super::{finish, EntityId};
use crate::{flash, views, AppState, PageError};

async fn load_venue(state: &AppState, id: i64) -> Result<Venue, PageError> {
    venues::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", id)))
}

fn new_venue_page(form: &VenueForm, errors: &FieldErrors) -> Html<String> {
    views::page(
        "List a venue",
        None,
        &views::venues::form("/venues/create", "List a new venue", form, errors),
    )
}

fn edit_venue_page(id: i64, form: &VenueForm, errors: &FieldErrors) -> Html<String> {
    views::page(
        "Edit venue",
        None,
        &views::venues::form(
            &format!("/venues/{}/edit", id),
            &format!("Edit venue {}", form.name),
            form,
            errors,
        ),
    )
}

/// Insert (`id` None) or update inside one transaction
async fn save_venue(
    pool: &SqlitePool,
    id: Option<i64>,
    input: &VenueInput,
) -> stagebook_common::Result<i64> {
    let mut tx = pool.begin().await?;
    let result = match id {
        None => venues::insert(&mut tx, input, now()).await,
        Some(id) => match venues::update(&mut tx, id, input).await {
            Ok(true) => Ok(id),
            Ok(false) => Err(Error::NotFound(format!("venue {}", id))),
            Err(e) => Err(e),
        },
    };
    finish(tx, result).await
}

async fn remove_venue(pool: &SqlitePool, id: i64) -> stagebook_common::Result<()> {
    let mut tx = pool.begin().await?;
    let result = match venues::delete(&mut tx, id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::NotFound(format!("venue {}", id))),
        Err(e) => Err(e),
    };
    finish(tx, result).await
}

/// GET /venues
pub async fn list_venues(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, message) = flash::take(jar);
    let areas = group_by_area(venues::list_summaries(&state.db, now()).await?);
    debug!(areas = areas.len(), "Listing venues");

    Ok((
        jar,
        views::page("Venues", message.as_deref(), &views::venues::list(&areas)),
    ))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
) -> Result<(CookieJar, Html<String>), PageError> {
    let venue = load_venue(&state, id).await?;
    let genres = decode_genres(&venue.genres)?;
    let shows = partition_shows(venues::shows_for(&state.db, id).await?, now());

    let (jar, message) = flash::take(jar);
    Ok((
        jar,
        views::page(
            &venue.name,
            message.as_deref(),
            &views::venues::detail(&venue, &genres, &shows),
        ),
    ))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    new_venue_page(&VenueForm::blank(), &FieldErrors::new())
}

/// POST /venues/create
///
/// Renders the home page with the outcome rather than redirecting.
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Html<String>, PageError> {
    let input = match validate_venue(&form) {
        Ok(input) => input,
        Err(errors) => {
            debug!(fields = errors.len(), "Venue form rejected: {}", errors);
            return Ok(new_venue_page(&form, &errors));
        }
    };

    let message = match save_venue(&state.db, None, &input).await {
        Ok(id) => {
            info!(venue_id = id, "Venue listed: {}", input.name);
            format!("Venue {} was successfully listed!", input.name)
        }
        Err(e) => {
            error!("Failed to list venue {}: {}", input.name, e);
            "An error occurred. Venue could not be listed.".to_string()
        }
    };

    render_home(&state, Some(&message)).await
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let venue = load_venue(&state, id).await?;
    Ok(edit_venue_page(
        id,
        &VenueForm::from_venue(&venue),
        &FieldErrors::new(),
    ))
}

/// POST /venues/:id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    load_venue(&state, id).await?;

    let input = match validate_venue(&form) {
        Ok(input) => input,
        Err(errors) => {
            debug!(venue_id = id, fields = errors.len(), "Venue form rejected: {}", errors);
            return Ok(edit_venue_page(id, &form, &errors).into_response());
        }
    };

    let message = match save_venue(&state.db, Some(id), &input).await {
        Ok(_) => {
            info!(venue_id = id, "Venue edited: {}", input.name);
            format!("Venue {} was successfully edited!", input.name)
        }
        Err(e) => {
            error!("Failed to edit venue {}: {}", id, e);
            "An error occurred. Venue could not be edited.".to_string()
        }
    };

    Ok((
        flash::push(jar, message),
        Redirect::to(&format!("/venues/{}", id)),
    )
        .into_response())
}

/// DELETE /venues/:id
///
/// The venue's shows go with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
) -> Result<(CookieJar, Redirect), PageError> {
    let venue = load_venue(&state, id).await?;

    let message = match remove_venue(&state.db, id).await {
        Ok(()) => {
            info!(venue_id = id, "Venue deleted: {}", venue.name);
            format!("Venue {} was successfully deleted!", venue.name)
        }
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            "An error occurred. Venue could not be deleted.".to_string()
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/")))
}
