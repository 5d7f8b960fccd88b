//! Venue pages

use stagebook_common::aggregate::{Area, ShowPartition};
use stagebook_common::db::{ShowListing, Venue, VenueSummary};
use stagebook_common::search::SearchResults;
use stagebook_common::validation::{FieldErrors, VenueForm};
use stagebook_common::Genre;

use super::forms::{checkbox, form_shell, genre_select, state_select, text_field, textarea};
use super::{
    delete_button, escape, external_link, genre_tags, search_box, search_results, show_cards,
    summary_item, Counterpart,
};

fn items(venues: &[VenueSummary]) -> String {
    let items: String = venues
        .iter()
        .map(|v| summary_item("venues", v.id, &v.name, v.num_upcoming_shows))
        .collect();
    format!(r#"<ul class="items">{}</ul>"#, items)
}

/// Venues grouped by city and state
pub fn list(areas: &[Area]) -> String {
    let groups: String = areas
        .iter()
        .map(|area| {
            format!(
                "<h2>{city}, {state}</h2>{venues}",
                city = escape(&area.city),
                state = escape(&area.state),
                venues = items(&area.venues),
            )
        })
        .collect();

    format!(
        r#"{search}<h1>Venues</h1>{groups}"#,
        search = search_box("/venues/search", "Find a venue", "", false),
        groups = groups,
    )
}

pub fn search(term: &str, by_city: bool, results: &SearchResults<VenueSummary>) -> String {
    search_results(
        "/venues/search",
        term,
        by_city,
        results.count,
        &items(&results.data),
    )
}

pub fn detail(venue: &Venue, genres: &[Genre], shows: &ShowPartition<ShowListing>) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<p><strong>Currently seeking talent</strong></p><p>{}</p>"#,
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="muted">Not currently seeking talent</p>"#.to_string()
    };

    format!(
        r#"<h1>{name}</h1>
        <p class="subtitle">ID: {id}</p>
        <div>{genres}</div>
        <p>{address}{city}, {state}</p>
        {phone}
        {website}
        {facebook}
        {seeking}
        <img class="portrait" src="{image}" alt="{name}">
        <p><a href="/venues/{id}/edit">Edit venue</a> {delete}</p>
        <h2>{upcoming_count} Upcoming {upcoming_noun}</h2>
        {upcoming}
        <h2>{past_count} Past {past_noun}</h2>
        {past}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(genres),
        address = venue
            .address
            .as_deref()
            .map(|a| format!("{}<br>", escape(a)))
            .unwrap_or_default(),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = venue
            .phone
            .as_deref()
            .map(|p| format!("<p>{}</p>", escape(p)))
            .unwrap_or_default(),
        website = external_link("Website", venue.website_link.as_deref()),
        facebook = external_link("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        image = escape(&venue.image_link),
        delete = delete_button(&format!("/venues/{}", venue.id), "Delete venue"),
        upcoming_count = shows.upcoming_count(),
        upcoming_noun = plural_shows(shows.upcoming_count()),
        upcoming = show_cards(&shows.upcoming, Counterpart::Artist),
        past_count = shows.past_count(),
        past_noun = plural_shows(shows.past_count()),
        past = show_cards(&shows.past, Counterpart::Artist),
    )
}

pub(crate) fn plural_shows(count: usize) -> &'static str {
    if count == 1 {
        "Show"
    } else {
        "Shows"
    }
}

/// Create or edit form
pub fn form(action: &str, heading: &str, form: &VenueForm, errors: &FieldErrors) -> String {
    let fields = [
        text_field("name", "Name", &form.name, "", errors),
        text_field("city", "City", &form.city, "", errors),
        state_select(&form.state, errors),
        text_field("address", "Address", &form.address, "", errors),
        text_field("phone", "Phone", &form.phone, "xxx-xxx-xxxx", errors),
        genre_select(&form.genres, errors),
        text_field("image_link", "Image link", &form.image_link, "https://", errors),
        text_field("website_link", "Website", &form.website_link, "https://", errors),
        text_field("facebook_link", "Facebook", &form.facebook_link, "https://", errors),
        checkbox("seeking_talent", "Seeking talent", form.seeking_talent()),
        textarea(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors,
        ),
    ]
    .concat();

    form_shell(action, heading, &fields, "Save venue")
}
