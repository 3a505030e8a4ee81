use serde::{Deserialize, Serialize};

use super::{Expert, ExpertId};

/// An expert matched by a search, with its resolved insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertResult {
    pub id: ExpertId,
    pub name: String,
    pub category: String,
    pub bio: String,
    pub rating: f64,
    pub location: String,
    pub insight: String,
}

impl ExpertResult {
    pub fn new(expert: &Expert, insight: impl Into<String>) -> Self {
        Self {
            id: expert.id.clone(),
            name: expert.name.clone(),
            category: expert.category.clone(),
            bio: expert.bio.clone(),
            rating: expert.rating,
            location: expert.location.clone(),
            insight: insight.into(),
        }
    }
}
