//! Clash of Clans API access: records, HTTP client and the war cache

pub mod http;
pub mod types;
pub mod war_cache;

pub use http::{CocClient, DEFAULT_API_BASE_URL};
pub use war_cache::{load_or_fetch_war, WarCache};
