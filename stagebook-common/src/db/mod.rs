//! Database models and queries

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use models::*;

/// Columns shared by every show listing query
pub(crate) const SHOW_LISTING_SELECT: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    JOIN artists a ON a.id = s.artist_id
    JOIN venues v ON v.id = s.venue_id
"#;
