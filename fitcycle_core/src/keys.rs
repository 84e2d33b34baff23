//! Key derivation for meal labels.
//!
//! A meal label such as `"Lunch: Grilled Chicken Salad"` is correlated with
//! two things: a per-date completion flag (task key) and an optional recipe
//! (recipe key). The two derivations normalize differently and are not
//! interchangeable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a letter, digit or whitespace
static NON_WORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Pick the part of a label that names the meal.
///
/// Labels are split on `:` into at most two parts; the second part wins when
/// present and non-empty, otherwise the whole first part is used. Text after
/// a second colon is not part of the subject.
fn subject(label: &str) -> &str {
    let mut parts = label.split(':');
    let head = parts.next().unwrap_or_default();
    match parts.next() {
        Some(rest) if !rest.is_empty() => rest,
        _ => head,
    }
}

/// Derive the recipe lookup key for a meal label.
///
/// Keeps letters and digits of the subject (any script), drops punctuation
/// and whitespace, and preserves case:
/// `"Breakfast: Protein Oatmeal"` → `"ProteinOatmeal"`.
///
/// Missing or empty labels yield `""`, meaning "no recipe lookup".
pub fn recipe_key<'a>(label: impl Into<Option<&'a str>>) -> String {
    let label: Option<&str> = label.into();
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return String::new();
    };

    let stripped = NON_WORD_CHARS.replace_all(subject(label).trim(), "");
    WHITESPACE.replace_all(&stripped, "").into_owned()
}

/// Derive the completion-tracking key for a meal label.
///
/// Only the first whitespace-delimited word of the subject is kept,
/// lowercased and reduced to ASCII letters and digits:
/// `"Breakfast: Protein Oatmeal"` → `"protein"`.
///
/// Meals sharing a first word share a key ("Turkey Wrap" and "Turkey
/// Stir-Fry" are both `"turkey"`); stored task logs depend on this.
///
/// Missing or empty labels yield `""`, meaning "not trackable".
pub fn task_key<'a>(label: impl Into<Option<&'a str>>) -> String {
    let label: Option<&str> = label.into();
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return String::new();
    };

    let first_word = subject(label).split_whitespace().next().unwrap_or_default();
    first_word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
