//! Show (booking) form
//!
//! Only the syntactic checks live here. Whether the artist and venue exist is
//! checked against the database in [`crate::db::shows::validate_booking`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, INVALID_DATETIME};
use crate::db::{Artist, Show};
use crate::time::{format_form_datetime, now, parse_form_datetime};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank form; start time defaults to now
    pub fn blank() -> Self {
        Self {
            start_time: format_form_datetime(&now()),
            ..Self::default()
        }
    }

    pub fn from_show(show: &Show) -> Self {
        Self {
            artist_id: show.artist_id.to_string(),
            venue_id: show.venue_id.to_string(),
            start_time: format_form_datetime(&show.start_time),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

pub fn validate_show_form(form: &ShowForm) -> Result<ShowInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let artist_id = id_field(&mut errors, "artist_id", &form.artist_id, "Artist id is required.");
    let venue_id = id_field(&mut errors, "venue_id", &form.venue_id, "Venue id is required.");

    let start_time = if form.start_time.trim().is_empty() {
        errors.add("start_time", "Start time is required.");
        None
    } else {
        let parsed = parse_form_datetime(&form.start_time);
        if parsed.is_none() {
            errors.add("start_time", INVALID_DATETIME);
        }
        parsed
    };

    match (artist_id, venue_id, start_time) {
        (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => Ok(ShowInput {
            artist_id,
            venue_id,
            start_time,
        }),
        _ => Err(errors),
    }
}

/// True when the artist accepts a booking at `start_time`
///
/// Artists without an availability window are always bookable.
pub fn check_availability(artist: &Artist, start_time: NaiveDateTime) -> bool {
    artist
        .availability()
        .map_or(true, |window| window.contains(start_time))
}

fn id_field(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, message);
        return None;
    }
    match value.parse::<i64>() {
        // Ids start at 1; zero fails the required check like an empty field
        Ok(0) => {
            errors.add(field, message);
            None
        }
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(field, "Not a valid integer value.");
            None
        }
    }
}
