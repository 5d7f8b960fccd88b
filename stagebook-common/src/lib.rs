//! # Stagebook Common Library
//!
//! Shared code for the Stagebook booking directory:
//! - Database schema, models and queries (venues, artists, shows)
//! - Genre and US state enumerations
//! - Delimited-string codecs for genres and albums
//! - Form validation
//! - Show partitioning and venue grouping
//! - Search term parsing
//! - Configuration loading

pub mod aggregate;
pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod genre;
pub mod search;
pub mod time;
pub mod us_state;
pub mod validation;

pub use error::{Error, Result};
pub use genre::Genre;
pub use us_state::UsState;
