//! Search endpoints
//!
//! Case-insensitive substring search by name, or by `City, State` when the
//! `search_city` box is ticked. A city search without the `", "` separator is
//! a 400.

use axum::{extract::State, response::Html};
use axum_extra::extract::Form;
use stagebook_common::db::{artists, shows, venues};
use stagebook_common::search::{SearchForm, SearchResults};
use stagebook_common::time::now;
use tracing::debug;

use crate::{views, AppState, PageError};

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let term = form.parse()?;
    let results = SearchResults::from(venues::search(&state.db, &term, now()).await?);
    debug!(count = results.count, "Venue search for '{}'", form.search_term);

    Ok(views::page(
        "Venue search",
        None,
        &views::venues::search(&form.search_term, form.by_city(), &results),
    ))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let term = form.parse()?;
    let results = SearchResults::from(artists::search(&state.db, &term, now()).await?);
    debug!(count = results.count, "Artist search for '{}'", form.search_term);

    Ok(views::page(
        "Artist search",
        None,
        &views::artists::search(&form.search_term, form.by_city(), &results),
    ))
}

/// POST /shows/search
///
/// Matches either side of the booking: artist or venue name, artist or venue
/// location.
pub async fn search_shows(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let term = form.parse()?;
    let results = SearchResults::from(shows::search(&state.db, &term).await?);
    debug!(count = results.count, "Show search for '{}'", form.search_term);

    Ok(views::page(
        "Show search",
        None,
        &views::shows::search(&form.search_term, form.by_city(), &results),
    ))
}
