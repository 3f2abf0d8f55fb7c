//! Core utilities for the Clan War League analyzer
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: LRU + file system caching of final API payloads
//! - `http`: Authorization headers for the Clash of Clans API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_root, try_read_to_string, write_string, UnifiedCache, WarCacheKey};
pub use http::auth_header_map;
