//! City name extraction from utterances
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

/// Keywords that may precede a city name, checked in order
pub const CITY_KEYWORDS: &[&str] = &["hava durumu", "varsayılan şehir"];

/// Pull the city that follows one of [`CITY_KEYWORDS`].
///
/// Takes whatever follows the last occurrence of the first keyword that
/// yields a non-empty tail, title-cased.
pub fn extract_city(text: &str) -> Option<String> {
    CITY_KEYWORDS
        .iter()
        .find_map(|keyword| extract_city_after(text, keyword))
}

/// Trailing segment after the last `keyword`, trimmed and title-cased
pub fn extract_city_after(text: &str, keyword: &str) -> Option<String> {
    let (_, tail) = text.rsplit_once(keyword)?;
    let city = tail.trim();
    if city.is_empty() {
        None
    } else {
        Some(title_case(city))
    }
}

/// Upper-case the first letter of every word, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if previous_is_letter {
            result.extend(ch.to_lowercase());
        } else {
            result.extend(ch.to_uppercase());
        }
        previous_is_letter = ch.is_alphabetic();
    }
    result
}

/// Upper-case only the first character, lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
