//! Form validation
//!
//! Raw form structs deserialize straight from URL-encoded bodies (every field
//! is a string so nothing is rejected before validation runs). Validators turn
//! them into typed inputs or a [`FieldErrors`] map used to re-render the form.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::genre::Genre;
use crate::us_state::UsState;

mod artist;
mod show;
mod venue;

pub use artist::{validate_artist, ArtistForm, ArtistInput, AvailabilityWindow};
pub use show::{check_availability, validate_show_form, ShowForm, ShowInput};
pub use venue::{validate_venue, VenueForm, VenueInput};

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone regex is valid"));

/// Permissive `scheme://host[:port][/path][?query]` shape
static URL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]+://(?P<host>[^/?:]+)(?P<port>:[0-9]+)?(?P<path>/.*?)?(?P<query>\?.*)?$")
        .expect("url regex is valid")
});

static TLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{2,}$").expect("tld regex is valid"));

pub(crate) const PHONE_MESSAGE: &str = "Phone must be in the form (xxx-xxx-xxxx).";
pub(crate) const INVALID_DATETIME: &str = "Not a valid datetime value.";

/// Per-field validation messages, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Messages for one field (empty slice when the field is valid)
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Fold into a result: `Ok(value)` only when no field failed
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Trimmed value, or `None` when blank
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Trimmed required value; records `message` when blank
pub(crate) fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, message);
    }
    value.to_string()
}

pub(crate) fn max_length(errors: &mut FieldErrors, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Field cannot be longer than {} characters.", max),
        );
    }
}

pub(crate) fn phone(errors: &mut FieldErrors, value: &str) -> Option<String> {
    let value = optional(value)?;
    if !PHONE.is_match(&value) {
        errors.add("phone", PHONE_MESSAGE);
    }
    Some(value)
}

/// Optional link checked against the permissive URL shape
pub(crate) fn link(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<String> {
    max_length(errors, field, value.trim(), 120);
    let value = optional(value)?;
    if !URL_SHAPE.is_match(&value) {
        errors.add(field, message);
    }
    Some(value)
}

/// Required image link: URL shape plus a host that is an IPv4 address or ends
/// in an alphabetic top-level domain
pub(crate) fn image_link(errors: &mut FieldErrors, value: &str) -> String {
    let value = required(errors, "image_link", value, "Image link is required.");
    if value.is_empty() {
        return value;
    }

    max_length(errors, "image_link", &value, 500);
    let host_ok = URL_SHAPE
        .captures(&value)
        .and_then(|caps| caps.name("host"))
        .map(|host| is_valid_host(host.as_str()))
        .unwrap_or(false);
    if !host_ok {
        errors.add("image_link", "Image link must be an URL.");
    }
    value
}

fn is_valid_host(host: &str) -> bool {
    if host.parse::<std::net::Ipv4Addr>().is_ok() {
        return true;
    }
    match host.rsplit_once('.') {
        Some((rest, tld)) => !rest.is_empty() && TLD.is_match(tld),
        None => false,
    }
}

pub(crate) fn city(errors: &mut FieldErrors, value: &str) -> String {
    let city = required(errors, "city", value, "City is required.");
    max_length(errors, "city", &city, 120);
    city
}

pub(crate) fn state(errors: &mut FieldErrors, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add("state", "State is required.");
    } else if UsState::from_code(value).is_none() {
        errors.add("state", "Not a valid choice.");
    }
    value.to_string()
}

pub(crate) fn genres(errors: &mut FieldErrors, codes: &[String]) -> Vec<Genre> {
    if codes.iter().all(|c| c.trim().is_empty()) {
        errors.add("genres", "At least one genre is required.");
        return Vec::new();
    }

    let mut parsed = Vec::with_capacity(codes.len());
    for code in codes.iter().filter(|c| !c.trim().is_empty()) {
        match Genre::from_code(code.trim()) {
            Some(genre) => parsed.push(genre),
            None => errors.add(
                "genres",
                format!("'{}' is not a valid choice for this field.", code),
            ),
        }
    }
    parsed
}

/// HTML checkboxes submit a value only when ticked; only an empty value or
/// the literal `false` reads as unticked
pub(crate) fn checkbox(value: &Option<String>) -> bool {
    !matches!(value.as_deref(), None | Some("") | Some("false"))
}
