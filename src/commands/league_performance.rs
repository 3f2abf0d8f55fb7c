//! League performance command implementation

use std::{path::PathBuf, sync::Arc};

use tracing::info;

use crate::{
    analysis::{AnalysisContext, RatingRules, Report, SeasonAnalysis},
    cli::types::ids::ClanTag,
    coc::{war_cache::WAR_CACHE_CAPACITY, CocClient, WarCache},
    error::CwlError,
    export::{default_csv_path, render_table, write_report},
    Result,
};

use super::{resolve_api_token, resolve_base_url, resolve_clan_tag};

/// Parameters for the league performance command
#[derive(Debug)]
pub struct LeaguePerformanceParams {
    pub clan_tag: Option<ClanTag>,
    pub max_townhall: u8,
    pub as_json: bool,
    pub csv_path: Option<PathBuf>,
    pub no_csv: bool,
    pub refresh: bool,
}

/// Fetch the clan's league season and run the analysis over it.
pub async fn analyze_season(
    client: &CocClient,
    clan_tag: &ClanTag,
    rules: RatingRules,
    cache: Arc<WarCache>,
    refresh: bool,
) -> Result<SeasonAnalysis> {
    let group = client.league_group(clan_tag).await?;
    let roster = group
        .clan(clan_tag.as_str())
        .cloned()
        .ok_or_else(|| CwlError::ClanNotInGroup {
            clan_tag: clan_tag.to_string(),
        })?;

    let rounds = client.home_wars(&group, clan_tag, cache, refresh).await?;

    AnalysisContext::new(roster, rounds, group.total_rounds(), rules)?.analyze()
}

/// Analyze the season, write the CSV unless disabled, and return the report.
pub async fn run_league_performance(
    client: &CocClient,
    clan_tag: &ClanTag,
    params: &LeaguePerformanceParams,
    cache: Arc<WarCache>,
) -> Result<Report> {
    let rules = RatingRules::new(params.max_townhall);
    let analysis = analyze_season(client, clan_tag, rules, cache, params.refresh).await?;
    let report = Report::build(&analysis);

    if !params.no_csv {
        let path = params.csv_path.clone().unwrap_or_else(default_csv_path);
        write_report(&path, &report.headers, &report.table())?;
    }

    info!(
        clan = %report.clan_name,
        rows = report.rows.len(),
        "league performance report ready"
    );
    Ok(report)
}

/// Handle the league performance command
pub async fn handle_league_performance(params: LeaguePerformanceParams) -> Result<()> {
    let clan_tag = resolve_clan_tag(params.clan_tag.clone())?;
    let client = CocClient::with_base_url(&resolve_api_token()?, &resolve_base_url())?;
    let cache = Arc::new(WarCache::new(WAR_CACHE_CAPACITY));

    // tarpaulin::skip - HTTP/file I/O call, tested via run_league_performance
    let report = run_league_performance(&client, &clan_tag, &params, cache).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        println!("{} ({})", report.clan_name, clan_tag); // tarpaulin::skip
        print!("{}", render_table(&report.headers, &report.table())); // tarpaulin::skip
    }

    Ok(())
}
