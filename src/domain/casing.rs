//! Case conversions used when deriving component names.
//!
//! `studly` upper-cases the first letter of every word split on `-`, `_` or
//! whitespace and keeps the rest of each word as typed, so `API` stays
//! `API`. `kebab` puts a hyphen before every upper-case letter, which makes
//! `HTMLParser` into `h-t-m-l-parser`; studly-casing that gives back
//! `HTMLParser`. Conversions are Unicode-aware.

const WORD_SEPARATORS: [char; 2] = ['-', '_'];

/// `user_profile` -> `UserProfile`, `API` -> `API`.
pub fn studly(value: &str) -> String {
    value
        .split(|c: char| WORD_SEPARATORS.contains(&c) || c.is_whitespace())
        .map(upper_first)
        .collect()
}

/// `UserProfile` -> `user-profile`.
///
/// Underscores are kept; a hyphen is not doubled before a capital that
/// already follows a separator (`admin-Panel` -> `admin-panel`).
pub fn kebab(value: &str) -> String {
    let joined: String = value.split_whitespace().map(upper_first).collect();

    let mut kebab = String::with_capacity(joined.len() + 4);
    let mut previous: Option<char> = None;
    for c in joined.chars() {
        if c.is_uppercase() && previous.is_some_and(|p| !WORD_SEPARATORS.contains(&p)) {
            kebab.push('-');
        }
        kebab.extend(c.to_lowercase());
        previous = Some(c);
    }
    kebab
}

/// `user-profile` -> `userProfile`.
pub fn camel(value: &str) -> String {
    let studly = studly(value);
    let mut chars = studly.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
