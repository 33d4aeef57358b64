//! Typed field updates for the movie form.
//!
//! Every input event becomes a `FieldUpdate` before it touches the record,
//! so a bad value is rejected at the boundary instead of being stored.

use crate::error::{FormError, Result};
use crate::parser::{parse_flag, parse_genre, parse_integer};
use crate::types::{Genre, MovieRecord};
use std::fmt;

/// The fields of a `MovieRecord`, by the names input events use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Year,
    Runtime,
    Revenue,
    Budget,
    Adult,
    Genre,
    Tagline,
    Description,
}

impl Field {
    /// All fields, in form order
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Year,
        Field::Runtime,
        Field::Revenue,
        Field::Budget,
        Field::Adult,
        Field::Genre,
        Field::Tagline,
        Field::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Year => "year",
            Field::Runtime => "runtime",
            Field::Revenue => "revenue",
            Field::Budget => "budget",
            Field::Adult => "adult",
            Field::Genre => "genre",
            Field::Tagline => "tagline",
            Field::Description => "description",
        }
    }

    /// Look a field up by name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormError::UnknownField {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single, already-typed change to a `MovieRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Year(i32),
    Runtime(i32),
    Revenue(i64),
    Budget(i64),
    Adult(bool),
    Genre(Genre),
    Tagline(String),
    Description(String),
}

impl FieldUpdate {
    /// Build an update from a raw input event.
    ///
    /// Text fields keep the value verbatim, numeric fields must hold an
    /// integer, `genre` must name a known genre and `adult` must be a flag.
    /// Ranges are not checked here; that happens on submit.
    pub fn parse(name: &str, raw: &str) -> Result<Self> {
        let field = Field::from_name(name)?;
        let update = match field {
            Field::Title => FieldUpdate::Title(raw.to_string()),
            Field::Year => FieldUpdate::Year(parse_integer(field.name(), raw)?),
            Field::Runtime => FieldUpdate::Runtime(parse_integer(field.name(), raw)?),
            Field::Revenue => FieldUpdate::Revenue(parse_integer(field.name(), raw)?),
            Field::Budget => FieldUpdate::Budget(parse_integer(field.name(), raw)?),
            Field::Adult => FieldUpdate::Adult(parse_flag(field.name(), raw)?),
            Field::Genre => FieldUpdate::Genre(parse_genre(raw)?),
            Field::Tagline => FieldUpdate::Tagline(raw.to_string()),
            Field::Description => FieldUpdate::Description(raw.to_string()),
        };
        Ok(update)
    }

    /// The field this update targets
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Title(_) => Field::Title,
            FieldUpdate::Year(_) => Field::Year,
            FieldUpdate::Runtime(_) => Field::Runtime,
            FieldUpdate::Revenue(_) => Field::Revenue,
            FieldUpdate::Budget(_) => Field::Budget,
            FieldUpdate::Adult(_) => Field::Adult,
            FieldUpdate::Genre(_) => Field::Genre,
            FieldUpdate::Tagline(_) => Field::Tagline,
            FieldUpdate::Description(_) => Field::Description,
        }
    }

    /// Write this update into a record
    pub fn apply_to(self, record: &mut MovieRecord) {
        match self {
            FieldUpdate::Title(value) => record.title = value,
            FieldUpdate::Year(value) => record.year = value,
            FieldUpdate::Runtime(value) => record.runtime = value,
            FieldUpdate::Revenue(value) => record.revenue = value,
            FieldUpdate::Budget(value) => record.budget = value,
            FieldUpdate::Adult(value) => record.adult = value,
            FieldUpdate::Genre(value) => record.genre = value,
            FieldUpdate::Tagline(value) => record.tagline = value,
            FieldUpdate::Description(value) => record.description = value,
        }
    }
}
