//! Insight domain - prompt, fallback template and generator contract

mod fallback;
mod generator;
mod prompt;

pub use fallback::fallback_insight;
pub use generator::InsightGenerator;
pub use prompt::build_insight_prompt;

#[cfg(test)]
pub use generator::mock::MockInsightGenerator;
