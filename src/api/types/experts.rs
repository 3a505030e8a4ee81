//! Expert search request and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::ExpertResult;

/// Body of `POST /experts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchExpertsRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

/// Successful search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchExpertsResponse {
    pub experts: Vec<ExpertResult>,
}

impl SearchExpertsResponse {
    pub fn new(experts: Vec<ExpertResult>) -> Self {
        Self { experts }
    }
}
