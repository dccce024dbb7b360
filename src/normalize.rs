//! Text normalization applied to every extracted CSV field.
//!
//! Case mapping uses the full Unicode tables, so accented Latin letters keep
//! their accent (`è` becomes `È`, never `E`).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\S+").expect("Invalid Regex?");
}

/// Trim surrounding whitespace and uppercase the rest.
pub fn upper(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Trim surrounding whitespace and capitalize each whitespace-delimited word.
///
/// Only whitespace starts a new word, so `"WÒRl'D"` becomes `"Wòrl'd"`.
/// Whitespace between words is kept as it is.
pub fn title_case(s: &str) -> String {
    WORD.replace_all(s.trim(), |caps: &Captures| capitalize(&caps[0]))
        .into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // 'ß' uppercases to "SS": keep one capital and fold the rest back down
    let first_upper: String = first.to_uppercase().collect();
    let mut upper_chars = first_upper.chars();
    let mut out = String::with_capacity(word.len());
    out.extend(upper_chars.next());
    out.push_str(&format!("{}{}", upper_chars.as_str(), chars.as_str()).to_lowercase());
    out
}
