//! Records returned by the Clash of Clans API.
//!
//! These double as the analysis engine's input: a [`Roster`] from the league
//! group plus the clan's [`Round`]s, oriented so the home clan is always
//! [`Round::clan`].

use crate::cli::types::ids::WarTag;
use serde::{Deserialize, Serialize};
use std::fmt;


/// A player identified by tag; the name is display only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub tag: String,
    pub name: String,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Player {}

/// League group for the current season (`/clans/{tag}/currentwar/leaguegroup`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueGroup {
    pub state: String,
    pub season: String,
    pub clans: Vec<Roster>,
    pub rounds: Vec<LeagueRound>,
}

impl LeagueGroup {
    /// The registered roster of one clan in the group.
    pub fn clan(&self, clan_tag: &str) -> Option<&Roster> {
        self.clans.iter().find(|clan| clan.tag == clan_tag)
    }

    /// Number of rounds in the season, scheduled or not.
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }
}

/// War tags of every pairing in one league round
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueRound {
    #[serde(rename = "warTags")]
    pub war_tags: Vec<WarTag>,
}

/// A clan and the members it registered for the league season.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub tag: String,
    pub name: String,
    #[serde(rename = "clanLevel", default)]
    pub clan_level: u32,
    pub members: Vec<RosterMember>,
}

impl Roster {
    pub fn member(&self, tag: &str) -> Option<&RosterMember> {
        self.members.iter().find(|member| member.tag == tag)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterMember {
    pub tag: String,
    pub name: String,
    #[serde(rename = "townHallLevel")]
    pub town_hall_level: u8,
}

impl RosterMember {
    pub fn player(&self) -> Player {
        Player {
            tag: self.tag.clone(),
            name: self.name.clone(),
        }
    }
}

impl PartialEq for RosterMember {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for RosterMember {}

/// Lifecycle of a league war.
///
/// States the engine does not know about deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundState {
    Preparation,
    InWar,
    WarEnded,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundState::Preparation => "preparation",
            RoundState::InWar => "inWar",
            RoundState::WarEnded => "warEnded",
            RoundState::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// One league war (`/clanwarleagues/wars/{tag}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Round {
    pub state: RoundState,
    #[serde(rename = "teamSize")]
    pub team_size: u32,
    #[serde(rename = "preparationStartTime", default)]
    pub preparation_start_time: Option<String>,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<String>,
    pub clan: Side,
    pub opponent: Side,
}

impl Round {
    /// Whether either side of this war is the given clan.
    pub fn involves(&self, clan_tag: &str) -> bool {
        self.clan.tag == clan_tag || self.opponent.tag == clan_tag
    }

    /// Put `home_tag` on the `clan` side and order both sides by map position.
    pub fn oriented_to(mut self, home_tag: &str) -> Self {
        if self.opponent.tag == home_tag {
            std::mem::swap(&mut self.clan, &mut self.opponent);
        }
        self.clan.sort_by_map_position();
        self.opponent.sort_by_map_position();
        self
    }

    /// The round has started (or ended) and its scores mean something.
    pub fn has_started(&self) -> bool {
        !matches!(self.state, RoundState::Preparation)
    }
}

/// One clan's half of a war
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Side {
    pub tag: String,
    pub name: String,
    #[serde(rename = "clanLevel", default)]
    pub clan_level: u32,
    #[serde(default)]
    pub attacks: u32,
    #[serde(default)]
    pub stars: u32,
    #[serde(rename = "destructionPercentage", default)]
    pub destruction_percentage: f64,
    #[serde(default)]
    pub members: Vec<SideMember>,
}

impl Side {
    pub fn member(&self, tag: &str) -> Option<&SideMember> {
        self.members.iter().find(|member| member.tag == tag)
    }

    /// 1-based rank of a member in map-position order.
    pub fn rank_of(&self, tag: &str) -> Option<u32> {
        self.members
            .iter()
            .position(|member| member.tag == tag)
            .map(|index| index as u32 + 1)
    }

    pub fn sort_by_map_position(&mut self) {
        self.members.sort_by_key(|member| member.map_position);
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SideMember {
    pub tag: String,
    pub name: String,
    #[serde(rename = "townhallLevel")]
    pub townhall_level: u8,
    #[serde(rename = "mapPosition")]
    pub map_position: u32,
    #[serde(rename = "opponentAttacks", default)]
    pub opponent_attacks: u32,
    #[serde(rename = "bestOpponentAttack", default)]
    pub best_opponent_attack: Option<Attack>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
}

impl SideMember {
    /// The member's league attack; only the first recorded one counts.
    pub fn attack(&self) -> Option<&Attack> {
        self.attacks.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attack {
    #[serde(rename = "attackerTag")]
    pub attacker_tag: String,
    #[serde(rename = "defenderTag")]
    pub defender_tag: String,
    pub stars: u8,
    #[serde(rename = "destructionPercentage")]
    pub destruction_percentage: u8,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub duration: u32,
}

/// Clan profile (`/clans/{tag}`), used for the current member list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClanProfile {
    pub tag: String,
    pub name: String,
    #[serde(rename = "memberList", default)]
    pub member_list: Vec<Player>,
}

/// Capital raid history (`/clans/{tag}/capitalraidseasons`), newest first
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaidSeasons {
    pub items: Vec<RaidSeason>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaidSeason {
    pub state: String,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub members: Vec<RaidMember>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaidMember {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub attacks: u32,
}

impl RaidMember {
    pub fn player(&self) -> Player {
        Player {
            tag: self.tag.clone(),
            name: self.name.clone(),
        }
    }
}
