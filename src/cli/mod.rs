//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::ids::ClanTag;

use crate::MAX_TOWNHALL_ENV_VAR;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Rate every league attack of the clan and build the season performance table.
    ///
    /// Fetches the current league group and the clan's wars, classifies each
    /// roster member's participation per round and writes the table to a CSV file.
    LeaguePerformance {
        /// Home clan tag (or set `COC_CLAN_TAG` env var).
        #[clap(long, short)]
        clan_tag: Option<ClanTag>,

        /// Highest town hall level in the game; attacks on it are rated on their own scale.
        #[clap(long, env = MAX_TOWNHALL_ENV_VAR, default_value_t = crate::DEFAULT_MAX_TOWNHALL_LEVEL)]
        max_townhall: u8,

        /// Output the report as JSON instead of a text table.
        #[clap(long)]
        json: bool,

        /// Where to write the CSV table (defaults to ./cwl_data/<YYYY_MM>_cwl_performance_data.csv).
        #[clap(long)]
        csv: Option<PathBuf>,

        /// Skip writing the CSV table.
        #[clap(long, conflicts_with = "csv")]
        no_csv: bool,

        /// Ignore cached wars and fetch everything again.
        #[clap(long)]
        refresh: bool,
    },

    /// List clan members who skipped the latest capital raid weekend.
    RaidAbsentees {
        /// Home clan tag (or set `COC_CLAN_TAG` env var).
        #[clap(long, short)]
        clan_tag: Option<ClanTag>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cwl-perf", about = "Clan War League performance analyzer")]
pub struct CwlPerf {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Clash of Clans API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
