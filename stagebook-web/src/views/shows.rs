//! Show pages

use stagebook_common::aggregate::ShowPartition;
use stagebook_common::db::ShowListing;
use stagebook_common::search::SearchResults;
use stagebook_common::validation::{FieldErrors, ShowForm};

use super::forms::{datetime_field, form_shell, text_field};
use super::venues::plural_shows;
use super::{search_box, search_results, show_cards, Counterpart};

pub fn list(shows: &ShowPartition<ShowListing>) -> String {
    format!(
        r#"{search}
        <h1>Shows</h1>
        <h2>{upcoming_count} Upcoming {upcoming_noun}</h2>
        {upcoming}
        <h2>{past_count} Past {past_noun}</h2>
        {past}"#,
        search = search_box("/shows/search", "Find a show by artist or venue", "", false),
        upcoming_count = shows.upcoming_count(),
        upcoming_noun = plural_shows(shows.upcoming_count()),
        upcoming = show_cards(&shows.upcoming, Counterpart::Both),
        past_count = shows.past_count(),
        past_noun = plural_shows(shows.past_count()),
        past = show_cards(&shows.past, Counterpart::Both),
    )
}

pub fn search(term: &str, by_city: bool, results: &SearchResults<ShowListing>) -> String {
    search_results(
        "/shows/search",
        term,
        by_city,
        results.count,
        &show_cards(&results.data, Counterpart::Both),
    )
}

pub fn form(action: &str, heading: &str, form: &ShowForm, errors: &FieldErrors) -> String {
    let fields = [
        text_field("artist_id", "Artist ID", &form.artist_id, "", errors),
        text_field("venue_id", "Venue ID", &form.venue_id, "", errors),
        datetime_field("start_time", "Start time", &form.start_time, errors),
    ]
    .concat();

    form_shell(action, heading, &fields, "Save show")
}
