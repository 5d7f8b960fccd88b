//! Artist form

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{
    checkbox, city, genres, image_link, link, max_length, optional, phone, required, state,
    FieldErrors, INVALID_DATETIME,
};
use crate::codec::{albums_to_input, genre_codes, parse_albums_input, Album};
use crate::db::Artist;
use crate::genre::Genre;
use crate::time::{format_form_datetime, now, parse_form_datetime};

pub const DEFAULT_ARTIST_SEEKING_DESCRIPTION: &str = "I'm looking for venues.";

/// Raw artist form as submitted
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub albums: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
    pub available_times: Option<String>,
    pub available_start: String,
    pub available_end: String,
}

impl ArtistForm {
    /// Blank form with the create-page defaults
    pub fn blank() -> Self {
        let now = format_form_datetime(&now());
        Self {
            seeking_venue: Some("y".to_string()),
            seeking_description: DEFAULT_ARTIST_SEEKING_DESCRIPTION.to_string(),
            available_start: now.clone(),
            available_end: now,
            ..Self::default()
        }
    }

    /// Pre-fill from a stored artist for the edit page
    pub fn from_artist(artist: &Artist) -> Self {
        let window = artist.availability();
        let now = format_form_datetime(&now());
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: genre_codes(&artist.genres),
            image_link: artist.image_link.clone(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            albums: artist.albums.as_deref().map(albums_to_input).unwrap_or_default(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: match (&artist.seeking_description, artist.seeking_venue) {
                (Some(description), true) => description.clone(),
                _ => DEFAULT_ARTIST_SEEKING_DESCRIPTION.to_string(),
            },
            available_times: window.map(|_| "y".to_string()),
            available_start: window
                .map(|w| format_form_datetime(&w.start))
                .unwrap_or_else(|| now.clone()),
            available_end: window
                .map(|w| format_form_datetime(&w.end))
                .unwrap_or(now),
        }
    }

    pub fn seeking_venue(&self) -> bool {
        checkbox(&self.seeking_venue)
    }

    pub fn available_times(&self) -> bool {
        checkbox(&self.available_times)
    }
}

/// Period during which an artist accepts bookings (bounds inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AvailabilityWindow {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Validated artist ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: String,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub albums: Vec<Album>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub availability: Option<AvailabilityWindow>,
}

pub fn validate_artist(form: &ArtistForm) -> Result<ArtistInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required(&mut errors, "name", &form.name, "Name is required.");
    let city = city(&mut errors, &form.city);
    let state = state(&mut errors, &form.state);
    let phone = phone(&mut errors, &form.phone);
    let genres = genres(&mut errors, &form.genres);
    let image_link = image_link(&mut errors, &form.image_link);
    let website_link = link(&mut errors, "website_link", &form.website_link, "Website link must be an URL.");
    let facebook_link = link(&mut errors, "facebook_link", &form.facebook_link, "Facebook link must be an URL.");

    max_length(&mut errors, "albums", form.albums.trim(), 500);
    let albums = parse_albums_input(&form.albums).unwrap_or_else(|message| {
        errors.add("albums", message);
        Vec::new()
    });

    let seeking_venue = form.seeking_venue();
    let seeking_description = if seeking_venue {
        optional(&form.seeking_description)
    } else {
        None
    };

    let availability = if form.available_times() {
        availability_window(&mut errors, form)
    } else {
        None
    };

    errors.into_result(|| ArtistInput {
        name,
        city,
        state,
        phone,
        genres,
        image_link,
        website_link,
        facebook_link,
        albums,
        seeking_venue,
        seeking_description,
        availability,
    })
}

fn availability_window(errors: &mut FieldErrors, form: &ArtistForm) -> Option<AvailabilityWindow> {
    let start = parse_form_datetime(&form.available_start);
    if start.is_none() {
        errors.add("available_start", INVALID_DATETIME);
    }
    let end = parse_form_datetime(&form.available_end);
    if end.is_none() {
        errors.add("available_end", INVALID_DATETIME);
    }

    let (start, end) = (start?, end?);
    if start >= end {
        errors.add("available_start", "Start time must be before end time.");
        return None;
    }
    Some(AvailabilityWindow { start, end })
}
