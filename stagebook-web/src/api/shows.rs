//! Show (booking) handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use sqlx::SqlitePool;
use stagebook_common::aggregate::partition_shows;
use stagebook_common::db::{shows, Show};
use stagebook_common::time::now;
use stagebook_common::validation::{FieldErrors, ShowForm, ShowInput};
use stagebook_common::Error;
use tracing::{debug, error, info};

use super::home::render_home;
use super::{finish, EntityId};
use crate::{flash, views, AppState, PageError};

async fn load_show(state: &AppState, id: i64) -> Result<Show, PageError> {
    shows::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("show {}", id)))
}

fn new_show_page(form: &ShowForm, errors: &FieldErrors) -> Html<String> {
    views::page(
        "List a show",
        None,
        &views::shows::form("/shows/create", "List a new show", form, errors),
    )
}

fn edit_show_page(id: i64, form: &ShowForm, errors: &FieldErrors) -> Html<String> {
    views::page(
        "Edit show",
        None,
        &views::shows::form(&format!("/shows/{}/edit", id), "Edit show", form, errors),
    )
}

/// Run the booking checks; field problems come back as `Ok(Err(..))`
async fn check_booking(
    pool: &SqlitePool,
    form: &ShowForm,
) -> Result<Result<ShowInput, FieldErrors>, PageError> {
    match shows::validate_booking(pool, form).await {
        Ok(input) => Ok(Ok(input)),
        Err(Error::Validation(errors)) => Ok(Err(errors)),
        Err(e) => Err(e.into()),
    }
}

async fn save_show(
    pool: &SqlitePool,
    id: Option<i64>,
    input: &ShowInput,
) -> stagebook_common::Result<i64> {
    let mut tx = pool.begin().await?;
    let result = match id {
        None => shows::insert(&mut tx, input, now()).await,
        Some(id) => match shows::update(&mut tx, id, input).await {
            Ok(true) => Ok(id),
            Ok(false) => Err(Error::NotFound(format!("show {}", id))),
            Err(e) => Err(e),
        },
    };
    finish(tx, result).await
}

async fn remove_show(pool: &SqlitePool, id: i64) -> stagebook_common::Result<()> {
    let mut tx = pool.begin().await?;
    let result = match shows::delete(&mut tx, id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::NotFound(format!("show {}", id))),
        Err(e) => Err(e),
    };
    finish(tx, result).await
}

/// GET /shows
pub async fn list_shows(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, message) = flash::take(jar);
    let listed = partition_shows(shows::list(&state.db).await?, now());
    debug!(total = listed.total(), "Listing shows");

    Ok((
        jar,
        views::page("Shows", message.as_deref(), &views::shows::list(&listed)),
    ))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    new_show_page(&ShowForm::blank(), &FieldErrors::new())
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Html<String>, PageError> {
    let input = match check_booking(&state.db, &form).await? {
        Ok(input) => input,
        Err(errors) => {
            debug!(fields = errors.len(), "Show form rejected: {}", errors);
            return Ok(new_show_page(&form, &errors));
        }
    };

    let message = match save_show(&state.db, None, &input).await {
        Ok(id) => {
            info!(
                show_id = id,
                artist_id = input.artist_id,
                venue_id = input.venue_id,
                "Show listed"
            );
            "Show was successfully listed!".to_string()
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            "An error occurred. Show could not be listed.".to_string()
        }
    };

    render_home(&state, Some(&message)).await
}

/// GET /shows/:id/edit
pub async fn edit_show_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let show = load_show(&state, id).await?;
    Ok(edit_show_page(
        id,
        &ShowForm::from_show(&show),
        &FieldErrors::new(),
    ))
}

/// POST /shows/:id/edit
///
/// Edits go through the same booking checks as new shows.
pub async fn edit_show(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
    Form(form): Form<ShowForm>,
) -> Result<Response, PageError> {
    load_show(&state, id).await?;

    let input = match check_booking(&state.db, &form).await? {
        Ok(input) => input,
        Err(errors) => {
            debug!(show_id = id, fields = errors.len(), "Show form rejected: {}", errors);
            return Ok(edit_show_page(id, &form, &errors).into_response());
        }
    };

    let message = match save_show(&state.db, Some(id), &input).await {
        Ok(_) => {
            info!(show_id = id, "Show edited");
            "Show was successfully edited!".to_string()
        }
        Err(e) => {
            error!("Failed to edit show {}: {}", id, e);
            "An error occurred. Show could not be edited.".to_string()
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/shows")).into_response())
}

/// DELETE /shows/:id
pub async fn delete_show(
    State(state): State<AppState>,
    jar: CookieJar,
    EntityId(id): EntityId,
) -> Result<(CookieJar, Redirect), PageError> {
    load_show(&state, id).await?;

    let message = match remove_show(&state.db, id).await {
        Ok(()) => {
            info!(show_id = id, "Show deleted");
            "Show was successfully deleted!".to_string()
        }
        Err(e) => {
            error!("Failed to delete show {}: {}", id, e);
            "An error occurred. Show could not be deleted.".to_string()
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/")))
}
