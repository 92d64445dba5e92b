//! Query cache module
//!
//! Key-based caching over the data source: deterministic keys, single-flight
//! deduplication of concurrent fetches, stale-while-revalidate entry states
//! and per-category refresh policies.

pub mod policy;
mod query_cache;

pub use policy::RefreshPolicy;
pub use query_cache::{Cached, QueryCache, QueryKey, QueryState};
