//! Expert catalog - the ordered, read-only set of searchable experts

use std::collections::HashSet;

use super::{Expert, ExpertId};
use crate::domain::DomainError;

/// Ordered list of experts loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    experts: Vec<Expert>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate ids
    pub fn new(experts: Vec<Expert>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&ExpertId> = HashSet::with_capacity(experts.len());

        for expert in &experts {
            if !seen.insert(&expert.id) {
                return Err(DomainError::catalog(format!(
                    "duplicate expert id '{}'",
                    expert.id
                )));
            }
        }

        Ok(Self { experts })
    }

    /// Parse a catalog from a JSON array of expert records
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let experts: Vec<Expert> = serde_json::from_str(json)
            .map_err(|e| DomainError::catalog(format!("malformed expert data: {}", e)))?;

        Self::new(experts)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expert> {
        self.experts.iter()
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}
