//! Insight generation backed by a text generation provider

mod llm_generator;

pub use llm_generator::LlmInsightGenerator;
