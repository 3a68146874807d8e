//! Case composition
//!
//! Joins word segments into a single camelCase or PascalCase identifier.
//!
//! Words are separated by `_`, `.`, `-`, space, and case boundaries
//! (`fooBar`, `XMLHttp`). A letter following a run of digits starts a new word,
//! so `vec2d` becomes `vec2D`. Any other character is kept as-is.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LEADING_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[_.\- ]+").expect("valid regex"));

static SEPARATORS_AND_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_.\- ]+([\p{Alphabetic}\p{N}_]|$)").expect("valid regex"));

static NUMBERS_AND_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+([\p{Alphabetic}\p{N}_]|$)").expect("valid regex"));

/// Output casing for [`compose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// `lowerCamelCase`
    Camel,
    /// `UpperCamelCase`
    Pascal,
}

/// Compose `segments` into one identifier in the given case mode.
///
/// Segments are trimmed and empty ones dropped before joining.
pub fn compose<S: AsRef<str>>(segments: &[S], mode: CaseMode) -> String {
    let words: Vec<&str> = segments
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    camel_case(&words.join("-"), mode)
}

fn camel_case(input: &str, mode: CaseMode) -> String {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return String::new(),
        (Some(c), None) => {
            return match mode {
                CaseMode::Pascal => c.to_uppercase().collect(),
                CaseMode::Camel => c.to_lowercase().collect(),
            }
        }
        _ => {}
    }

    let split = if input != input.to_lowercase() {
        split_case_boundaries(input)
    } else {
        input.to_string()
    };

    let lowered = LEADING_SEPARATORS.replace(&split, "").to_lowercase();
    let cased = match mode {
        CaseMode::Pascal => upper_first(&lowered),
        CaseMode::Camel => lowered,
    };

    let joined = SEPARATORS_AND_IDENTIFIER.replace_all(&cased, |caps: &Captures| caps[1].to_uppercase());
    NUMBERS_AND_IDENTIFIER
        .replace_all(&joined, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Insert `-` at lower->upper transitions and before the last capital of an
/// acronym run followed by lowercase (`XMLHttp` -> `XML-Http`)
fn split_case_boundaries(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    let mut last_lower = false;
    let mut last_upper = false;
    let mut last_last_upper = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if last_lower && c.is_uppercase() {
            chars.insert(i, '-');
            last_lower = false;
            last_last_upper = last_upper;
            last_upper = true;
            i += 1;
        } else if last_upper && last_last_upper && c.is_lowercase() {
            // revisits `c` on the next iteration, now shifted right by one
            chars.insert(i - 1, '-');
            last_last_upper = last_upper;
            last_upper = false;
            last_lower = true;
        } else {
            last_lower = is_cased_as(c, char::to_lowercase, char::to_uppercase);
            last_last_upper = last_upper;
            last_upper = is_cased_as(c, char::to_uppercase, char::to_lowercase);
        }
        i += 1;
    }

    chars.into_iter().collect()
}

/// `c` maps to itself under `same` and to something else under `other`
fn is_cased_as<I, J>(c: char, same: fn(char) -> I, other: fn(char) -> J) -> bool
where
    I: Iterator<Item = char>,
    J: Iterator<Item = char>,
{
    same(c).eq(std::iter::once(c)) && !other(c).eq(std::iter::once(c))
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
