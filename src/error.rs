//! Error types for the Clan War League performance analyzer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CwlError>;

#[derive(Error, Debug)]
pub enum CwlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Clan tag not provided and {env_var} environment variable not set")]
    MissingClanTag { env_var: String },

    #[error("API token not provided and {env_var} environment variable not set")]
    MissingApiToken { env_var: String },

    #[error("Invalid tag: {tag:?}")]
    InvalidTag { tag: String },

    #[error("Clan {clan_tag} is not in a league season right now")]
    LeagueGroupNotFound { clan_tag: String },

    #[error("Clan {clan_tag} is not part of its league group")]
    ClanNotInGroup { clan_tag: String },

    #[error("Clan {clan_tag} has no capital raid seasons")]
    NoRaidSeasons { clan_tag: String },

    #[error("Player {tag} is not on the analyzed roster")]
    UnknownPlayer { tag: String },

    #[error("Player {tag} is marked as attacked but has no attack")]
    MissingAttack { tag: String },

    #[error("Player {tag} has an attack recorded under state {state}")]
    UnexpectedAttack { tag: String, state: String },

    #[error("Attack by {attacker} targets {defender}, who is not on the opposing side")]
    DefenderNotFound { attacker: String, defender: String },

    #[error("{available} rounds available but the season only has {total}")]
    TooManyRounds { available: usize, total: usize },
}
