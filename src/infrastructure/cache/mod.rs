//! Cache infrastructure - Insight cache implementations

mod in_memory;

pub use in_memory::InMemoryInsightCache;
