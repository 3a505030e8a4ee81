//! Cache domain - memoized insights keyed by expert and topic

mod key;
mod repository;

pub use key::InsightCacheKey;
pub use repository::InsightCache;

#[cfg(test)]
pub use repository::mock::MockInsightCache;
