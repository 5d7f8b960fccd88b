//! Home page

use axum::{extract::State, response::Html};
use axum_extra::extract::CookieJar;
use stagebook_common::db::{artists, venues};
use stagebook_common::time::now;

use crate::{flash, views, AppState, PageError, RECENT_LIMIT};

/// GET /
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, message) = flash::take(jar);
    let page = render_home(&state, message.as_deref()).await?;
    Ok((jar, page))
}

/// Home page with an inline message; create handlers render this directly
pub(crate) async fn render_home(
    state: &AppState,
    message: Option<&str>,
) -> Result<Html<String>, PageError> {
    let now = now();
    let venues = venues::recent(&state.db, now, RECENT_LIMIT).await?;
    let artists = artists::recent(&state.db, now, RECENT_LIMIT).await?;
    Ok(views::page(
        "Home",
        message,
        &views::home::render(&venues, &artists),
    ))
}
