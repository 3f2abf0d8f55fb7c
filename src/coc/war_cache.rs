//! Cached war lookups.
//!
//! A war that has ended never changes again, so concluded wars are kept in a
//! [`UnifiedCache`] and served from it on later runs.

use tracing::{debug, warn};

use crate::{
    cli::types::ids::WarTag,
    coc::{
        http::CocClient,
        types::{Round, RoundState},
    },
    core::{UnifiedCache, WarCacheKey},
    error::Result,
};

/// Concluded wars, keyed by war tag.
pub type WarCache = UnifiedCache<WarCacheKey, Round>;

/// Default number of wars kept in memory; one season has at most 28.
pub const WAR_CACHE_CAPACITY: usize = 32;

/// Try the cache first unless `refresh`; otherwise fetch the war and store it
/// if it has ended. The war is returned as the API reports it, not oriented.
pub async fn load_or_fetch_war(
    client: &CocClient,
    cache: &WarCache,
    war_tag: &WarTag,
    refresh: bool,
) -> Result<Round> {
    let key = WarCacheKey {
        war_tag: war_tag.clone(),
    };

    if !refresh {
        if let Some(war) = cache.get(&key) {
            debug!(war = %war_tag, "war loaded from cache");
            return Ok(war);
        }
    }

    let war = client.league_war(war_tag).await?;

    if war.state == RoundState::WarEnded {
        if let Err(e) = cache.put(key, war.clone()) {
            warn!(war = %war_tag, error = %e, "failed to write war cache");
        }
    }

    Ok(war)
}
