//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use cwl_perf::{
    cli::{Commands, CwlPerf, GetCmd},
    commands::{
        league_performance::{handle_league_performance, LeaguePerformanceParams},
        raid_absentees::handle_raid_absentees,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for tables and JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = CwlPerf::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeaguePerformance {
                clan_tag,
                max_townhall,
                json,
                csv,
                no_csv,
                refresh,
            } => handle_league_performance(LeaguePerformanceParams {
                clan_tag,
                max_townhall,
                as_json: json,
                csv_path: csv,
                no_csv,
                refresh,
            })
            .await
            .context("league performance failed")?,

            GetCmd::RaidAbsentees { clan_tag, json } => handle_raid_absentees(clan_tag, json)
                .await
                .context("raid absentees failed")?,
        },
    }

    Ok(())
}
