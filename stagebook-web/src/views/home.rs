//! Home page: recently listed venues and artists

use stagebook_common::db::{ArtistSummary, VenueSummary};

use super::summary_item;

pub fn render(venues: &[VenueSummary], artists: &[ArtistSummary]) -> String {
    let venue_items: String = venues
        .iter()
        .map(|v| summary_item("venues", v.id, &v.name, v.num_upcoming_shows))
        .collect();
    let artist_items: String = artists
        .iter()
        .map(|a| summary_item("artists", a.id, &a.name, a.num_upcoming_shows))
        .collect();

    format!(
        r#"<h1>Stagebook</h1>
        <p class="subtitle">Find venues, artists and upcoming shows.</p>
        <h2>Recently listed venues</h2>
        <ul class="items">{venues}</ul>
        <h2>Recently listed artists</h2>
        <ul class="items">{artists}</ul>"#,
        venues = venue_items,
        artists = artist_items,
    )
}
