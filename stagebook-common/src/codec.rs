//! Delimited-string encodings for multi-valued columns
//!
//! Genres are stored as `Code,Code,` and albums as `Name(song,song,),Name2(song,),`.
//! Both forms end with a trailing delimiter, and decoding is positional: the
//! element after the last delimiter is always dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::genre::Genre;
use crate::{Error, Result};

/// Message shown when the albums field does not follow the grammar
pub const ALBUMS_FORMAT_MESSAGE: &str =
    "Albums must be in the form [Album1(Song1,Song2),Album2(Song1)].";

/// Grammar for normalised album input (after `)` → `,)` and a trailing `,`)
static ALBUMS_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9|. ]+\(([a-zA-Z0-9|.' ]+,)*\),)+$").expect("albums grammar is valid")
});

/// One album and its track list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub name: String,
    pub songs: Vec<String>,
}

impl Album {
    pub fn new(name: impl Into<String>, songs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            songs,
        }
    }
}

/// Encode genres as comma-terminated codes, preserving order
pub fn encode_genres(genres: &[Genre]) -> String {
    genres.iter().fold(String::new(), |mut out, genre| {
        out.push_str(genre.code());
        out.push(',');
        out
    })
}

/// Decode a stored genre column
///
/// An unknown code means the row was written outside this application and is
/// reported as [`Error::Codec`].
pub fn decode_genres(stored: &str) -> Result<Vec<Genre>> {
    let mut codes: Vec<&str> = stored.split(',').collect();
    codes.pop();

    codes
        .into_iter()
        .map(|code| {
            Genre::from_code(code)
                .ok_or_else(|| Error::Codec(format!("unknown genre code '{}'", code)))
        })
        .collect()
}

/// Split a stored genre column into raw codes (used to pre-fill forms)
pub fn genre_codes(stored: &str) -> Vec<String> {
    let mut codes: Vec<String> = stored.split(',').map(str::to_string).collect();
    codes.pop();
    codes
}

/// Encode albums; an empty list is stored as NULL
pub fn encode_albums(albums: &[Album]) -> Option<String> {
    if albums.is_empty() {
        return None;
    }

    let mut out = String::new();
    for album in albums {
        out.push_str(&album.name);
        out.push('(');
        for song in &album.songs {
            out.push_str(song);
            out.push(',');
        }
        out.push_str("),");
    }
    Some(out)
}

/// Decode a stored albums column
pub fn decode_albums(stored: &str) -> Vec<Album> {
    split_albums(stored, false)
}

/// Convert a stored albums column back to the grammar users type
///
/// `A(s1,s2,),B(s3,),` becomes `A(s1,s2),B(s3)`.
pub fn albums_to_input(stored: &str) -> String {
    let mut input = stored.replace(",)", ")");
    input.pop();
    input
}

/// Validate and parse user-entered albums (`Album1(Song1,Song2),Album2(Song1)`)
///
/// Blank input yields an empty list. Names and songs are trimmed.
pub fn parse_albums_input(input: &str) -> std::result::Result<Vec<Album>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let normalised = format!("{},", input.replace(')', ",)"));
    if !ALBUMS_GRAMMAR.is_match(&normalised) {
        return Err(ALBUMS_FORMAT_MESSAGE.to_string());
    }

    Ok(split_albums(&normalised, true))
}

fn split_albums(encoded: &str, trim: bool) -> Vec<Album> {
    let mut chunks: Vec<&str> = encoded.split("),").collect();
    chunks.pop();

    chunks
        .into_iter()
        .map(|chunk| {
            let (name, song_list) = chunk.split_once('(').unwrap_or((chunk, ""));
            let mut songs: Vec<&str> = song_list.split(',').collect();
            songs.pop();

            let clean = |s: &str| if trim { s.trim().to_string() } else { s.to_string() };
            Album {
                name: clean(name),
                songs: songs.into_iter().map(clean).collect(),
            }
        })
        .collect()
}
