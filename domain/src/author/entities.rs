//! Author entity.

use super::value_objects::AuthorId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An author who owns a set of courses.
///
/// Authors are created once and never updated through the API. Deleting an
/// author also deletes every course they own; the repository enforces that
/// cascade, not this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub main_category: String,
}

impl Author {
    /// Creates an author with a freshly generated id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        main_category: impl Into<String>,
    ) -> Self {
        Self {
            id: AuthorId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            main_category: main_category.into(),
        }
    }

    /// Display name, "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole years between the date of birth and `today`.
    ///
    /// Saturates at zero for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.date_of_birth).unwrap_or(0)
    }
}
