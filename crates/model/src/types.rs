//! Core domain types for the cult classic calculator.
//!
//! This module defines the data that flows between the form, the
//! validation rules, and whichever scorer produces the result:
//! - `MovieRecord`: the in-progress form contents
//! - `Genre`: the closed list of genres the form offers
//! - `ScoreResult` / `Factor`: what a scorer hands back
//!
//! Every type here is also a wire type, so field names and enum spellings
//! are the ones the scoring backend expects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Field domains
// =============================================================================

/// Earliest release year the form accepts
pub const MIN_YEAR: i32 = 1900;

/// Latest release year the form accepts
pub const MAX_YEAR: i32 = 2024;

/// Shortest runtime in minutes the form accepts
pub const MIN_RUNTIME: i32 = 30;

/// Longest runtime in minutes the form accepts
pub const MAX_RUNTIME: i32 = 300;

/// Runtime a freshly mounted form starts with
pub const DEFAULT_RUNTIME: i32 = 120;

// =============================================================================
// Movie Record
// =============================================================================

/// The movie being described in a form session.
///
/// Numeric fields are signed; range checks happen on submit.
///
/// `year`, `revenue`, `budget` and `adult` were added to the schema after
/// the first form iteration, so they fall back to their defaults when an
/// older payload leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default = "default_year")]
    pub year: i32,
    pub runtime: i32,
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub adult: bool,
    pub genre: Genre,
    pub tagline: String,
    pub description: String,
}

fn default_year() -> i32 {
    MAX_YEAR
}

impl MovieRecord {
    /// Creates the record a newly mounted form starts with
    pub fn new() -> Self {
        Self {
            title: String::new(),
            year: default_year(),
            runtime: DEFAULT_RUNTIME,
            revenue: 0,
            budget: 0,
            adult: false,
            genre: Genre::Action,
            tagline: String::new(),
            description: String::new(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from the text
    /// fields. This is the shape that gets validated and sent to a scorer.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            tagline: self.tagline.trim().to_string(),
            description: self.description.trim().to_string(),
            ..self.clone()
        }
    }
}

impl Default for MovieRecord {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Genre
// =============================================================================

/// Genres offered by the form.
///
/// These follow the TMDb genre list the scoring model was trained on, plus
/// `Genreless` for movies the dataset has no genre for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    #[serde(rename = "TV Movie")]
    TvMovie,
    Thriller,
    War,
    Western,
    Genreless,
}

impl Genre {
    /// Every genre, in the order the form lists them
    pub const ALL: [Genre; 20] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::TvMovie,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
        Genre::Genreless,
    ];

    /// Display name, identical to the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::TvMovie => "TV Movie",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
            Genre::Genreless => "Genreless",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// Score Result
// =============================================================================

/// Names of the contributors a scorer may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorName {
    Runtime,
    Genre,
    Tagline,
    Description,
    Year,
    Revenue,
    Budget,
    Adult,
}

impl FactorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorName::Runtime => "runtime",
            FactorName::Genre => "genre",
            FactorName::Tagline => "tagline",
            FactorName::Description => "description",
            FactorName::Year => "year",
            FactorName::Revenue => "revenue",
            FactorName::Budget => "budget",
            FactorName::Adult => "adult",
        }
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One named contributor to the overall probability.
///
/// `weight` is advisory; weights across a result are not required to add
/// up to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Sub-score from 0 to 100
    pub score: f64,
    /// Relative importance from 0 to 100
    pub weight: f64,
    /// Human readable explanation
    pub details: String,
}

impl Factor {
    pub fn new(score: f64, weight: f64, details: impl Into<String>) -> Self {
        Self {
            score,
            weight,
            details: details.into(),
        }
    }

    fn in_range(&self) -> bool {
        percentage(self.score) && percentage(self.weight)
    }
}

/// Outcome of one successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Cult classic probability as a percentage
    pub probability: f64,
    pub factors: BTreeMap<FactorName, Factor>,
    /// Echo of the record that was scored
    pub movie_details: MovieRecord,
}

impl ScoreResult {
    /// Returns the first problem that makes this result unusable, if any.
    ///
    /// A result is well formed when the probability and every factor's
    /// score and weight are finite percentages.
    pub fn shape_problem(&self) -> Option<String> {
        if !percentage(self.probability) {
            return Some(format!("probability {} is not a percentage", self.probability));
        }
        self.factors
            .iter()
            .find(|(_, factor)| !factor.in_range())
            .map(|(name, factor)| {
                format!(
                    "factor {} has score {} and weight {}, expected 0-100",
                    name, factor.score, factor.weight
                )
            })
    }
}

fn percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}
