//! Command implementations for the Clan War League analyzer

pub mod league_performance;
pub mod raid_absentees;

use crate::{
    cli::types::ids::ClanTag, coc::DEFAULT_API_BASE_URL, error::CwlError, Result,
    API_BASE_URL_ENV_VAR, API_TOKEN_ENV_VAR, CLAN_TAG_ENV_VAR,
};


/// Resolve the home clan tag from option or environment variable
pub fn resolve_clan_tag(clan_tag: Option<ClanTag>) -> Result<ClanTag> {
    if let Some(tag) = clan_tag {
        return Ok(tag);
    }

    match std::env::var(CLAN_TAG_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse::<ClanTag>(),
        _ => Err(CwlError::MissingClanTag {
            env_var: CLAN_TAG_ENV_VAR.to_string(),
        }),
    }
}

/// Resolve the API token from the environment
pub fn resolve_api_token() -> Result<String> {
    std::env::var(API_TOKEN_ENV_VAR)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| CwlError::MissingApiToken {
            env_var: API_TOKEN_ENV_VAR.to_string(),
        })
}

/// API base URL from the environment, or the public endpoint
pub fn resolve_base_url() -> String {
    std::env::var(API_BASE_URL_ENV_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
