//! Database models

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::aggregate::Scheduled;
use crate::validation::AvailabilityWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Comma-terminated genre codes
    pub genres: String,
    pub image_link: String,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// Comma-terminated genre codes
    pub genres: String,
    pub image_link: String,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    /// `Name(song,song,),` per album; NULL when the artist lists none
    pub albums: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub available_times: bool,
    pub available_start: Option<NaiveDateTime>,
    pub available_end: Option<NaiveDateTime>,
    pub created_date: NaiveDateTime,
}

impl Artist {
    /// Declared availability window, if the flag is set and both bounds exist
    pub fn availability(&self) -> Option<AvailabilityWindow> {
        if !self.available_times {
            return None;
        }
        match (self.available_start, self.available_end) {
            (Some(start), Some(end)) => Some(AvailabilityWindow { start, end }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
    pub created_date: NaiveDateTime,
}

/// Row in a venue listing or search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Row in an artist listing or search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Show joined with its artist and venue, as listed on pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}
