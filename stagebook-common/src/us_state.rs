//! US state choices for venue and artist locations

/// Two-letter US state (plus DC)
///
/// The code doubles as the display value, so the type is a thin wrapper over
/// the static table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsState(&'static str);

const CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

impl UsState {
    /// Look up a state by its two-letter code (case-sensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        CODES.iter().find(|c| **c == code).map(|c| UsState(c))
    }

    pub fn code(&self) -> &'static str {
        self.0
    }

    /// All states in form order
    pub fn all() -> impl Iterator<Item = UsState> {
        CODES.iter().map(|c| UsState(c))
    }
}
