//! Parsing of raw form input.
//!
//! Input events arrive as text, whatever the field. These helpers turn that
//! text into typed values and report failures as `FormError`s instead of
//! guessing.

use crate::error::{FormError, Result};
use crate::types::Genre;
use std::str::FromStr;

/// Parse an integer field. Surrounding whitespace is ignored; anything
/// else that is not an integer is rejected.
pub fn parse_integer<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Parse a genre by its display name, ignoring case.
///
/// Also accepts the short spellings the first version of the form used.
pub fn parse_genre(raw: &str) -> Result<Genre> {
    let wanted = raw.trim();

    if let Some(genre) = Genre::ALL
        .iter()
        .find(|genre| genre.as_str().eq_ignore_ascii_case(wanted))
    {
        return Ok(*genre);
    }

    match wanted.to_ascii_lowercase().as_str() {
        "sci-fi" | "scifi" | "science-fiction" => Ok(Genre::ScienceFiction),
        "tv" | "tv-movie" => Ok(Genre::TvMovie),
        "none" => Ok(Genre::Genreless),
        _ => Err(FormError::UnknownGenre {
            value: raw.to_string(),
        }),
    }
}

/// Parse a yes/no flag the way checkbox and text inputs send it.
pub fn parse_flag(field: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(FormError::InvalidFlag {
            field,
            value: raw.to_string(),
        }),
    }
}
