//! Music genre enumeration
//!
//! Genres are stored as short codes inside a comma-joined column (see
//! [`crate::codec`]) and always rendered through [`Genre::display_name`].

use serde::{Deserialize, Serialize};

/// Fixed set of genres a venue or artist can list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RocknRoll,
    Soul,
    Other,
}

impl Genre {
    /// Every genre, in the order the form lists them
    pub const ALL: [Genre; 19] = [
        Genre::Alternative,
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Electronic,
        Genre::Folk,
        Genre::Funk,
        Genre::HipHop,
        Genre::HeavyMetal,
        Genre::Instrumental,
        Genre::Jazz,
        Genre::MusicalTheatre,
        Genre::Pop,
        Genre::Punk,
        Genre::RnB,
        Genre::Reggae,
        Genre::RocknRoll,
        Genre::Soul,
        Genre::Other,
    ];

    /// Parse a stored or submitted genre code
    ///
    /// Codes are case-sensitive; they never contain a comma.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Alternative" => Some(Genre::Alternative),
            "Blues" => Some(Genre::Blues),
            "Classical" => Some(Genre::Classical),
            "Country" => Some(Genre::Country),
            "Electronic" => Some(Genre::Electronic),
            "Folk" => Some(Genre::Folk),
            "Funk" => Some(Genre::Funk),
            "HipHop" => Some(Genre::HipHop),
            "HeavyMetal" => Some(Genre::HeavyMetal),
            "Instrumental" => Some(Genre::Instrumental),
            "Jazz" => Some(Genre::Jazz),
            "MusicalTheatre" => Some(Genre::MusicalTheatre),
            "Pop" => Some(Genre::Pop),
            "Punk" => Some(Genre::Punk),
            "RnB" => Some(Genre::RnB),
            "Reggae" => Some(Genre::Reggae),
            "RocknRoll" => Some(Genre::RocknRoll),
            "Soul" => Some(Genre::Soul),
            "Other" => Some(Genre::Other),
            _ => None,
        }
    }

    /// Storage code (also the form option value)
    pub fn code(&self) -> &'static str {
        match self {
            Genre::Alternative => "Alternative",
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Electronic => "Electronic",
            Genre::Folk => "Folk",
            Genre::Funk => "Funk",
            Genre::HipHop => "HipHop",
            Genre::HeavyMetal => "HeavyMetal",
            Genre::Instrumental => "Instrumental",
            Genre::Jazz => "Jazz",
            Genre::MusicalTheatre => "MusicalTheatre",
            Genre::Pop => "Pop",
            Genre::Punk => "Punk",
            Genre::RnB => "RnB",
            Genre::Reggae => "Reggae",
            Genre::RocknRoll => "RocknRoll",
            Genre::Soul => "Soul",
            Genre::Other => "Other",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Genre::HipHop => "Hip-Hop",
            Genre::HeavyMetal => "Heavy Metal",
            Genre::MusicalTheatre => "Musical Theatre",
            Genre::RnB => "R&B",
            Genre::RocknRoll => "Rock n Roll",
            other => other.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_code(genre.code()), Some(genre));
        }
    }

    #[test]
    fn test_codes_never_contain_delimiters() {
        for genre in Genre::ALL {
            assert!(!genre.code().contains(','), "{:?}", genre);
            assert!(!genre.code().is_empty());
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Genre::HipHop.display_name(), "Hip-Hop");
        assert_eq!(Genre::RnB.display_name(), "R&B");
        assert_eq!(Genre::Jazz.display_name(), "Jazz");
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Genre::from_code("jazz"), None);
        assert_eq!(Genre::from_code(""), None);
        assert_eq!(Genre::from_code("Polka"), None);
    }
}
