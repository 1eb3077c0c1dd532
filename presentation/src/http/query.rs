//! Comma-separated query value binding.
//!
//! A query parameter like `ids=a,b,c` arrives as one raw string. The binder
//! splits it on commas, trims each segment, drops segments that end up
//! empty and converts the rest to the declared element type, preserving
//! order and duplicates. An absent or all-whitespace value binds to an
//! empty sequence and means "no filter requested"; a segment that fails
//! element conversion fails the whole bind and names that segment.

use courselib_application::AuthorsFilter;
use courselib_domain::AuthorId;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A query segment that failed element conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Segment '{segment}' is not valid: {detail}")]
pub struct SegmentError {
    pub segment: String,
    pub detail: String,
}

/// Splits `raw` on commas and converts each surviving segment to `T`.
///
/// Conversion stops at the first failing segment; nothing is silently
/// dropped except segments that are empty after trimming.
pub fn parse_comma_separated<T>(raw: &str) -> Result<Vec<T>, SegmentError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse::<T>().map_err(|error| SegmentError {
                segment: segment.to_string(),
                detail: error.to_string(),
            })
        })
        .collect()
}

/// A typed sequence bound from one comma-separated query value.
///
/// The element type doubles as the conversion table: anything `FromStr`
/// can be an element, so attaching this to a non-sequence parameter is a
/// compile error rather than a runtime binding misconfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommaSeparated<T>(pub Vec<T>);

impl<T> CommaSeparated<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for CommaSeparated<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_comma_separated(&raw)
            .map(CommaSeparated)
            .map_err(serde::de::Error::custom)
    }
}

/// Query shape for `GET /api/authors`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsQuery {
    /// Comma-separated author ids.
    pub ids: Option<CommaSeparated<AuthorId>>,
    pub main_category: Option<String>,
    pub search_query: Option<String>,
}

impl AuthorsQuery {
    pub fn into_filter(self) -> AuthorsFilter {
        AuthorsFilter {
            // A bound-but-empty id list means no filter was requested.
            ids: self
                .ids
                .map(CommaSeparated::into_inner)
                .filter(|ids| !ids.is_empty()),
            main_category: self.main_category,
            search_query: self.search_query,
        }
    }
}
