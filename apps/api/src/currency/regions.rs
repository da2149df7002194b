//! Region match lists used by the currency resolver.
//!
//! Entries are lowercase and matched as plain substrings of the lowercased
//! location, with no word boundaries. Short entries therefore match inside
//! longer words ("milwaukee" contains "uk").

/// Substrings that mark a location as being in the United Kingdom.
pub const UK_REGIONS: &[&str] = &[
    "united kingdom",
    "great britain",
    "britain",
    "england",
    "scotland",
    "wales",
    "northern ireland",
    "uk",
    "london",
    "manchester",
    "birmingham",
    "edinburgh",
    "glasgow",
    "bristol",
    "leeds",
    "liverpool",
    "cambridge",
    "oxford",
    "belfast",
    "cardiff",
    "brighton",
    "newcastle",
    "sheffield",
    "nottingham",
];

/// Substrings that mark a location as being in the United States.
pub const US_REGIONS: &[&str] = &[
    "united states",
    "usa",
    "u.s.",
    "america",
    "new york",
    "california",
    "texas",
    "washington",
    "massachusetts",
    "illinois",
    "florida",
    "colorado",
    "san francisco",
    "los angeles",
    "seattle",
    "boston",
    "chicago",
    "austin",
    "denver",
    "atlanta",
    "miami",
    "silicon valley",
    "bay area",
    ", ca",
    ", tx",
    ", wa",
    ", ma",
    ", il",
    ", co",
    ", ga",
    ", fl",
    ", nj",
    ", al",
];

/// Returns true if `normalized` contains any entry of `regions`.
/// `normalized` must already be lowercase.
pub fn matches_any(normalized: &str, regions: &[&str]) -> bool {
    regions.iter().any(|region| normalized.contains(region))
}
