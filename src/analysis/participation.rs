//! Per-round participation of a roster member.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::{
    analysis::rating::{AttackRating, RatingRules},
    coc::types::{Attack, Round, RoundState, SideMember},
    error::{CwlError, Result},
};

/// What a roster member did (or could do) in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationState {
    Preparing,
    AwaitingAttack,
    Attacked,
    DidNotAttack,
    NotInWar,
    NotInClan,
    Unknown,
}

impl ParticipationState {
    /// The member was placed into the round's lineup and the round has started.
    pub fn counts_as_placed(&self) -> bool {
        matches!(
            self,
            ParticipationState::AwaitingAttack
                | ParticipationState::Attacked
                | ParticipationState::DidNotAttack
        )
    }
}

impl fmt::Display for ParticipationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParticipationState::Preparing => "PREPARING",
            ParticipationState::AwaitingAttack => "AWAITING ATTACK",
            ParticipationState::Attacked => "ATTACKED",
            ParticipationState::DidNotAttack => "DID NOT ATTACK",
            ParticipationState::NotInWar => "NOT IN WAR",
            ParticipationState::NotInClan => "NOT IN CLAN",
            ParticipationState::Unknown => "UNKNOWN STATE",
        };
        write!(f, "{}", s)
    }
}

/// An attack together with the context it was rated in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RatedAttack {
    pub stars: u8,
    pub destruction_percentage: u8,
    pub duration: u32,
    pub attacker_map_position: u32,
    pub defender_townhall: u8,
    pub defender_map_position: u32,
    pub rating: AttackRating,
}

impl RatedAttack {
    /// Rate `attack`, made by `attacker` in `round`.
    ///
    /// Map positions are ranks within each side's map order.
    pub fn from_attack(
        attack: &Attack,
        attacker: &SideMember,
        round: &Round,
        rules: &RatingRules,
    ) -> Result<Self> {
        let defender = round
            .opponent
            .member(&attack.defender_tag)
            .ok_or_else(|| CwlError::DefenderNotFound {
                attacker: attacker.tag.clone(),
                defender: attack.defender_tag.clone(),
            })?;

        let attacker_map_position = round
            .clan
            .rank_of(&attacker.tag)
            .unwrap_or(attacker.map_position);
        let defender_map_position = round
            .opponent
            .rank_of(&defender.tag)
            .unwrap_or(defender.map_position);

        Ok(Self {
            stars: attack.stars,
            destruction_percentage: attack.destruction_percentage,
            duration: attack.duration,
            attacker_map_position,
            defender_townhall: defender.townhall_level,
            defender_map_position,
            rating: rules.rate(
                attacker.townhall_level,
                defender.townhall_level,
                attack.stars,
                attack.destruction_percentage,
            ),
        })
    }
}

impl fmt::Display for RatedAttack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {}* vs a TH{}",
            self.destruction_percentage, self.stars, self.defender_townhall
        )?;
        if self.attacker_map_position != self.defender_map_position {
            write!(f, " (ATKD {})", self.defender_map_position)?;
        }
        Ok(())
    }
}

/// A member's state in one round, with the rated attack when they attacked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundParticipation {
    state: ParticipationState,
    attack: Option<RatedAttack>,
}

impl RoundParticipation {
    /// A participation carrying an attack.
    pub fn attacked(attack: RatedAttack) -> Self {
        Self {
            state: ParticipationState::Attacked,
            attack: Some(attack),
        }
    }

    /// A participation without an attack. `Attacked` is rejected for `tag`.
    pub fn without_attack(tag: &str, state: ParticipationState) -> Result<Self> {
        Self::new(tag, state, None)
    }

    /// Validates that an attack is present exactly when `state` is `Attacked`.
    pub fn new(tag: &str, state: ParticipationState, attack: Option<RatedAttack>) -> Result<Self> {
        match (state, attack) {
            (ParticipationState::Attacked, Some(attack)) => Ok(Self::attacked(attack)),
            (ParticipationState::Attacked, None) => Err(CwlError::MissingAttack {
                tag: tag.to_string(),
            }),
            (state, None) => Ok(Self {
                state,
                attack: None,
            }),
            (state, Some(_)) => Err(CwlError::UnexpectedAttack {
                tag: tag.to_string(),
                state: state.to_string(),
            }),
        }
    }

    pub fn state(&self) -> ParticipationState {
        self.state
    }

    pub fn attack(&self) -> Option<&RatedAttack> {
        self.attack.as_ref()
    }
}

impl fmt::Display for RoundParticipation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attack {
            Some(attack) => write!(f, "{}", attack),
            None => write!(f, "{}", self.state),
        }
    }
}

/// Derive one member's participation in one round.
///
/// Absent from the home lineup is `NotInWar`; otherwise the first recorded
/// attack is rated, or the round's lifecycle decides the state.
pub fn classify(
    member_tag: &str,
    round: &Round,
    round_number: usize,
    rules: &RatingRules,
) -> Result<RoundParticipation> {
    let Some(war_member) = round.clan.member(member_tag) else {
        debug!(round = round_number, player = member_tag, "not in war");
        return RoundParticipation::without_attack(member_tag, ParticipationState::NotInWar);
    };

    let Some(attack) = war_member.attack() else {
        let state = match round.state {
            RoundState::WarEnded => ParticipationState::DidNotAttack,
            RoundState::Preparation => ParticipationState::Preparing,
            RoundState::InWar => ParticipationState::AwaitingAttack,
            RoundState::Unknown => ParticipationState::Unknown,
        };
        debug!(round = round_number, player = %war_member.name, %state);
        return RoundParticipation::without_attack(member_tag, state);
    };

    let rated = RatedAttack::from_attack(attack, war_member, round, rules)?;
    debug!(
        round = round_number,
        player = %war_member.name,
        townhall = war_member.townhall_level,
        attack = %rated,
        rating = %rated.rating
    );
    Ok(RoundParticipation::attacked(rated))
}
