//! Clan War League Performance Analyzer
//!
//! A Rust library for rating a Clash of Clans clan's Clan War League season:
//! every roster member's participation and attack in every round, rolled up
//! into one season table.
//!
//! ## Features
//!
//! - **League Data Retrieval**: Fetch the league group and the clan's wars from the Clash of Clans API
//! - **Attack Ratings**: Rate each attack from town hall matchup, stars and destruction
//! - **Season Table**: Per-round participation cells with season totals, ready for CSV or JSON
//! - **War Caching**: Concluded wars are cached on disk and in memory between runs
//! - **Raid Absentees**: List members who skipped the latest capital raid weekend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cwl_perf::{
//!     analysis::{build_table, RatingRules},
//!     coc::{CocClient, WarCache},
//!     commands::league_performance::analyze_season,
//!     ClanTag,
//! };
//!
//! # async fn example() -> cwl_perf::Result<()> {
//! let client = CocClient::new("api-token")?;
//! let clan: ClanTag = "#2PP".parse()?;
//! let cache = Arc::new(WarCache::new(32));
//!
//! let analysis = analyze_season(&client, &clan, RatingRules::default(), cache, false).await?;
//! for row in build_table(&analysis) {
//!     println!("{}", row.join(" | "));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export COC_API_TOKEN=eyJ0eXAiOiJKV1Qi...
//! export COC_CLAN_TAG=#2PP
//! ```

pub mod analysis;
pub mod cli;
pub mod coc;
pub mod commands;
pub mod core;
pub mod error;
pub mod export;

// Re-export commonly used types
pub use cli::types::ids::{ClanTag, WarTag};
pub use error::{CwlError, Result};

pub const CLAN_TAG_ENV_VAR: &str = "COC_CLAN_TAG";
pub const API_TOKEN_ENV_VAR: &str = "COC_API_TOKEN";
pub const MAX_TOWNHALL_ENV_VAR: &str = "COC_MAX_TOWNHALL_LEVEL";
pub const API_BASE_URL_ENV_VAR: &str = "COC_API_BASE_URL";

/// Highest town hall level currently in the game.
pub const DEFAULT_MAX_TOWNHALL_LEVEL: u8 = 16;
