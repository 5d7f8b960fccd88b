//! Artist pages

use stagebook_common::aggregate::ShowPartition;
use stagebook_common::codec::Album;
use stagebook_common::db::{Artist, ArtistSummary, ShowListing};
use stagebook_common::search::SearchResults;
use stagebook_common::time::format_form_datetime;
use stagebook_common::validation::{ArtistForm, FieldErrors};
use stagebook_common::Genre;

use super::forms::{
    checkbox, datetime_field, form_shell, genre_select, state_select, text_field, textarea,
};
use super::venues::plural_shows;
use super::{
    delete_button, escape, external_link, genre_tags, search_box, search_results, show_cards,
    summary_item, Counterpart,
};

fn items(artists: &[ArtistSummary]) -> String {
    let items: String = artists
        .iter()
        .map(|a| summary_item("artists", a.id, &a.name, a.num_upcoming_shows))
        .collect();
    format!(r#"<ul class="items">{}</ul>"#, items)
}

pub fn list(artists: &[ArtistSummary]) -> String {
    format!(
        r#"{search}<h1>Artists</h1>{items}"#,
        search = search_box("/artists/search", "Find an artist", "", false),
        items = items(artists),
    )
}

pub fn search(term: &str, by_city: bool, results: &SearchResults<ArtistSummary>) -> String {
    search_results(
        "/artists/search",
        term,
        by_city,
        results.count,
        &items(&results.data),
    )
}

fn album_list(albums: &[Album]) -> String {
    if albums.is_empty() {
        return String::new();
    }

    let entries: String = albums
        .iter()
        .map(|album| {
            let songs: String = album
                .songs
                .iter()
                .map(|s| format!("<li>{}</li>", escape(s)))
                .collect();
            format!(
                r#"<li><strong>{name}</strong> <span class="muted">({count} {noun})</span><ol>{songs}</ol></li>"#,
                name = escape(&album.name),
                count = album.songs.len(),
                noun = if album.songs.len() == 1 { "song" } else { "songs" },
                songs = songs,
            )
        })
        .collect();

    format!(
        r#"<h2>{count} {noun}</h2><ul class="items">{entries}</ul>"#,
        count = albums.len(),
        noun = if albums.len() == 1 { "Album" } else { "Albums" },
        entries = entries,
    )
}

pub fn detail(
    artist: &Artist,
    genres: &[Genre],
    albums: &[Album],
    shows: &ShowPartition<ShowListing>,
) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<p><strong>Currently seeking performance venues</strong></p><p>{}</p>"#,
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="muted">Not currently seeking performance venues</p>"#.to_string()
    };

    let availability = artist
        .availability()
        .map(|window| {
            format!(
                "<p>Available from {} to {}</p>",
                format_form_datetime(&window.start),
                format_form_datetime(&window.end)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<h1>{name}</h1>
        <p class="subtitle">ID: {id}</p>
        <div>{genres}</div>
        <p>{city}, {state}</p>
        {phone}
        {website}
        {facebook}
        {seeking}
        {availability}
        <img class="portrait" src="{image}" alt="{name}">
        <p><a href="/artists/{id}/edit">Edit artist</a> {delete}</p>
        {albums}
        <h2>{upcoming_count} Upcoming {upcoming_noun}</h2>
        {upcoming}
        <h2>{past_count} Past {past_noun}</h2>
        {past}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = artist
            .phone
            .as_deref()
            .map(|p| format!("<p>{}</p>", escape(p)))
            .unwrap_or_default(),
        website = external_link("Website", artist.website_link.as_deref()),
        facebook = external_link("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        availability = availability,
        image = escape(&artist.image_link),
        delete = delete_button(&format!("/artists/{}", artist.id), "Delete artist"),
        albums = album_list(albums),
        upcoming_count = shows.upcoming_count(),
        upcoming_noun = plural_shows(shows.upcoming_count()),
        upcoming = show_cards(&shows.upcoming, Counterpart::Venue),
        past_count = shows.past_count(),
        past_noun = plural_shows(shows.past_count()),
        past = show_cards(&shows.past, Counterpart::Venue),
    )
}

pub fn form(action: &str, heading: &str, form: &ArtistForm, errors: &FieldErrors) -> String {
    let fields = [
        text_field("name", "Name", &form.name, "", errors),
        text_field("city", "City", &form.city, "", errors),
        state_select(&form.state, errors),
        text_field("phone", "Phone", &form.phone, "xxx-xxx-xxxx", errors),
        genre_select(&form.genres, errors),
        text_field("image_link", "Image link", &form.image_link, "https://", errors),
        text_field("website_link", "Website", &form.website_link, "https://", errors),
        text_field("facebook_link", "Facebook", &form.facebook_link, "https://", errors),
        text_field(
            "albums",
            "Albums",
            &form.albums,
            "Album1(Song1,Song2),Album2(Song1)",
            errors,
        ),
        checkbox("seeking_venue", "Seeking venues", form.seeking_venue()),
        textarea(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors,
        ),
        checkbox(
            "available_times",
            "Only available between the times below",
            form.available_times(),
        ),
        datetime_field("available_start", "Available from", &form.available_start, errors),
        datetime_field("available_end", "Available until", &form.available_end, errors),
    ]
    .concat();

    form_shell(action, heading, &fields, "Save artist")
}
