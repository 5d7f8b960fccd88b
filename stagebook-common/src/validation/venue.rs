//! Venue form

use serde::{Deserialize, Serialize};

use super::{checkbox, city, genres, image_link, link, max_length, optional, phone, required, state, FieldErrors};
use crate::codec::genre_codes;
use crate::db::Venue;
use crate::genre::Genre;

pub const DEFAULT_VENUE_SEEKING_DESCRIPTION: &str = "We are looking for talent.";

/// Raw venue form as submitted
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

impl VenueForm {
    /// Blank form with the create-page defaults
    pub fn blank() -> Self {
        Self {
            seeking_talent: Some("y".to_string()),
            seeking_description: DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill from a stored venue for the edit page
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: genre_codes(&venue.genres),
            image_link: venue.image_link.clone(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: match (&venue.seeking_description, venue.seeking_talent) {
                (Some(description), true) => description.clone(),
                _ => DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
            },
        }
    }

    pub fn seeking_talent(&self) -> bool {
        checkbox(&self.seeking_talent)
    }
}

/// Validated venue ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: String,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

pub fn validate_venue(form: &VenueForm) -> Result<VenueInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required(&mut errors, "name", &form.name, "Name is required.");
    let city = city(&mut errors, &form.city);
    let state = state(&mut errors, &form.state);
    max_length(&mut errors, "address", form.address.trim(), 120);
    let address = optional(&form.address);
    let phone = phone(&mut errors, &form.phone);
    let genres = genres(&mut errors, &form.genres);
    let image_link = image_link(&mut errors, &form.image_link);
    let website_link = link(&mut errors, "website_link", &form.website_link, "Website link must be an URL.");
    let facebook_link = link(&mut errors, "facebook_link", &form.facebook_link, "Facebook link must be an URL.");

    let seeking_talent = form.seeking_talent();
    let seeking_description = if seeking_talent {
        optional(&form.seeking_description)
    } else {
        None
    };

    errors.into_result(|| VenueInput {
        name,
        city,
        state,
        address,
        phone,
        genres,
        image_link,
        website_link,
        facebook_link,
        seeking_talent,
        seeking_description,
    })
}
