//! HTTP client for the Clash of Clans API

use std::sync::Arc;

use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::{
    cli::types::ids::{ClanTag, WarTag},
    coc::{
        types::{ClanProfile, LeagueGroup, RaidSeasons, Round},
        war_cache::{load_or_fetch_war, WarCache},
    },
    core::auth_header_map,
    error::{CwlError, Result},
};


/// Base path for the Clash of Clans v1 API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.clashofclans.com/v1";

/// Authenticated client. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct CocClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl CocClient {
    pub fn new(api_token: &str) -> Result<Self> {
        Self::with_base_url(api_token, DEFAULT_API_BASE_URL)
    }

    pub fn with_base_url(api_token: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: auth_header_map(api_token)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        Ok(res)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let res = self
            .send(path)
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// League group of the season the clan is currently in.
    #[instrument(skip(self), fields(clan = %clan_tag))]
    pub async fn league_group(&self, clan_tag: &ClanTag) -> Result<LeagueGroup> {
        let path = format!("/clans/{}/currentwar/leaguegroup", clan_tag.url_encoded());
        let res = self.send(&path).await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(CwlError::LeagueGroupNotFound {
                clan_tag: clan_tag.to_string(),
            });
        }

        let group = res.error_for_status()?.json::<LeagueGroup>().await?;
        info!(
            season = %group.season,
            state = %group.state,
            rounds = group.total_rounds(),
            "league group loaded"
        );
        Ok(group)
    }

    #[instrument(skip(self), fields(war = %war_tag))]
    pub async fn league_war(&self, war_tag: &WarTag) -> Result<Round> {
        self.get_json(&format!("/clanwarleagues/wars/{}", war_tag.url_encoded()))
            .await
    }

    /// The home clan's war of every available round, in round order and
    /// oriented so the home clan is [`Round::clan`].
    ///
    /// Wars of one round are fetched concurrently. Collection stops at the
    /// first round that is unscheduled or has no war for the home clan, so the
    /// result is always a prefix of the season.
    #[instrument(skip(self, group, cache), fields(home = %home_tag))]
    pub async fn home_wars(
        &self,
        group: &LeagueGroup,
        home_tag: &ClanTag,
        cache: Arc<WarCache>,
        refresh: bool,
    ) -> Result<Vec<Round>> {
        let mut rounds = Vec::new();

        for (index, league_round) in group.rounds.iter().enumerate() {
            let round_number = index + 1;
            let war_tags: Vec<WarTag> = league_round
                .war_tags
                .iter()
                .filter(|tag| !tag.is_placeholder())
                .cloned()
                .collect();

            if war_tags.is_empty() {
                info!(round = round_number, "round not scheduled yet");
                break;
            }

            let mut tasks = JoinSet::new();
            for war_tag in war_tags {
                let client = self.clone();
                let cache = Arc::clone(&cache);
                tasks.spawn(async move {
                    load_or_fetch_war(&client, &cache, &war_tag, refresh).await
                });
            }

            let mut home_war = None;
            while let Some(joined) = tasks.join_next().await {
                let war = joined??;
                if home_war.is_none() && war.involves(home_tag.as_str()) {
                    home_war = Some(war.oriented_to(home_tag.as_str()));
                }
            }

            match home_war {
                Some(war) => {
                    debug!(round = round_number, state = %war.state, opponent = %war.opponent.name);
                    rounds.push(war);
                }
                None => {
                    warn!(round = round_number, "no war found for the home clan");
                    break;
                }
            }
        }

        info!(available = rounds.len(), total = group.total_rounds(), "home wars loaded");
        Ok(rounds)
    }

    /// Clan profile including its current member list.
    #[instrument(skip(self), fields(clan = %clan_tag))]
    pub async fn clan_profile(&self, clan_tag: &ClanTag) -> Result<ClanProfile> {
        self.get_json(&format!("/clans/{}", clan_tag.url_encoded()))
            .await
    }

    /// Capital raid seasons, newest first.
    #[instrument(skip(self), fields(clan = %clan_tag))]
    pub async fn raid_seasons(&self, clan_tag: &ClanTag) -> Result<RaidSeasons> {
        self.get_json(&format!("/clans/{}/capitalraidseasons", clan_tag.url_encoded()))
            .await
    }
}
