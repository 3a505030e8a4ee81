//! Expert entity and related types

use serde::{Deserialize, Serialize};

/// Expert identifier as it appears in the catalog source.
///
/// Catalog files use either numeric or string ids; the loaded form is kept
/// so responses echo the id back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpertId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ExpertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ExpertId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ExpertId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for ExpertId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An expert record, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    pub id: ExpertId,
    pub name: String,
    pub bio: String,
    pub category: String,
    pub rating: f64,
    pub location: String,
}

impl Expert {
    pub fn new(
        id: impl Into<ExpertId>,
        name: impl Into<String>,
        category: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bio: bio.into(),
            category: category.into(),
            rating: 0.0,
            location: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}
