//! Local cache for API responses
//!
//! In-memory, per-process cache with lazy expiry. Facades derive a key per
//! request, consult the cache before going to the network, and invalidate
//! related entries after every mutation.

pub mod client;
pub mod key;
pub mod store;

mod messages;
mod posts;
mod reports;
mod transactions;
mod users;

use std::time::Duration;

/// Cache TTL configuration per data type
pub struct CacheTtl;

impl CacheTtl {
    // Listings change whenever anyone posts
    pub const POST_LIST: Duration = Duration::from_secs(3 * 60); // 3 min
    pub const POST_DETAIL: Duration = Duration::from_secs(5 * 60); // 5 min

    // Rarely changes
    pub const CATEGORIES: Duration = Duration::from_secs(30 * 60); // 30 min

    // User-scoped
    pub const FAVORITES: Duration = Duration::from_secs(2 * 60); // 2 min
}

// Re-export main types
pub use client::CachedMarketClient;
pub use key::CacheKeys;
pub use store::{CacheStats, MemoryCache};
