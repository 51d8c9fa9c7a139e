//! Weather description to emoji mapping
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Match against the provider description instead of the whole sentence
//! - 1.0.0: Initial Turkish term buckets

pub const SUN_ICON: &str = "☀️";
pub const RAIN_ICON: &str = "🌧️";
pub const CLOUD_ICON: &str = "⛅";
pub const SNOW_ICON: &str = "❄️";
pub const DEFAULT_ICON: &str = "🌡️";

/// Ordered (terms, icon) buckets; first bucket with a contained term wins
const ICON_BUCKETS: &[(&[&str], &str)] = &[
    (&["güneş", "açık"], SUN_ICON),
    (&["yağmur"], RAIN_ICON),
    (&["bulut"], CLOUD_ICON),
    (&["kar"], SNOW_ICON),
];

pub fn weather_icon(description: &str) -> &'static str {
    let description = description.to_lowercase();
    ICON_BUCKETS
        .iter()
        .find(|(terms, _)| terms.iter().any(|term| description.contains(term)))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
