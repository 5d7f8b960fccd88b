//! Search term parsing
//!
//! Searches are case-insensitive substring matches. A search "by city" expects
//! the term as `City, State`; either side may itself be a partial match.

use serde::{Deserialize, Serialize};

use crate::validation::checkbox;
use crate::{Error, Result};

/// Raw search form (`search_term`, optional `search_city` checkbox)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
    pub search_city: Option<String>,
}

impl SearchForm {
    pub fn by_city(&self) -> bool {
        checkbox(&self.search_city)
    }

    pub fn parse(&self) -> Result<SearchTerm> {
        SearchTerm::parse(&self.search_term, self.by_city())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// Match against the name column(s)
    Name(String),
    /// Match city AND state
    CityState { city: String, state: String },
}

impl SearchTerm {
    /// Parse a submitted term
    ///
    /// When searching by city the term is split on `", "`: the first part is
    /// the city, the second the state, anything after is ignored. A term with
    /// no separator is rejected.
    pub fn parse(term: &str, by_city: bool) -> Result<Self> {
        if !by_city {
            return Ok(SearchTerm::Name(term.to_string()));
        }

        let mut parts = term.split(", ");
        match (parts.next(), parts.next()) {
            (Some(city), Some(state)) => Ok(SearchTerm::CityState {
                city: city.to_string(),
                state: state.to_string(),
            }),
            _ => Err(Error::InvalidInput(format!(
                "city search term '{}' must look like 'City, State'",
                term
            ))),
        }
    }
}

/// LIKE pattern for a substring match
pub fn like_pattern(fragment: &str) -> String {
    format!("%{}%", fragment)
}

/// Result payload handed to search pages
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
