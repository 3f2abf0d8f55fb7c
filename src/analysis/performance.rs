//! Running season totals for one roster member.

use serde::Serialize;

use crate::{
    analysis::participation::{ParticipationState, RoundParticipation},
    coc::types::RosterMember,
};

/// A roster member's round-by-round history and season totals.
///
/// Only [`PlayerPerformance::record`] mutates it, and totals never decrease.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerPerformance {
    member: RosterMember,
    sort_key: u32,
    rounds: Vec<RoundParticipation>,
    total_stars: u32,
    total_destruction_percentage: u32,
    total_duration: u32,
    total_participated_attacks: u32,
    total_rounds_placed_into: u32,
    has_participated: bool,
}

impl PlayerPerformance {
    pub fn new(member: RosterMember, sort_key: u32) -> Self {
        Self {
            member,
            sort_key,
            rounds: Vec::new(),
            total_stars: 0,
            total_destruction_percentage: 0,
            total_duration: 0,
            total_participated_attacks: 0,
            total_rounds_placed_into: 0,
            has_participated: false,
        }
    }

    /// Append the next round's participation and fold it into the totals.
    pub fn record(&mut self, participation: RoundParticipation) {
        if let Some(attack) = participation.attack() {
            self.total_stars += u32::from(attack.stars);
            self.total_destruction_percentage += u32::from(attack.destruction_percentage);
            self.total_duration += attack.duration;
            self.total_participated_attacks += 1;
            self.total_rounds_placed_into += 1;
            self.has_participated = true;
        } else {
            match participation.state() {
                state if state.counts_as_placed() => {
                    self.total_rounds_placed_into += 1;
                    self.has_participated = true;
                }
                ParticipationState::Preparing => self.has_participated = true,
                _ => {}
            }
        }

        self.rounds.push(participation);
    }

    pub fn member(&self) -> &RosterMember {
        &self.member
    }

    /// Map position in the first round the member was seen in, 0 if never seen.
    pub fn sort_key(&self) -> u32 {
        self.sort_key
    }

    pub fn rounds(&self) -> &[RoundParticipation] {
        &self.rounds
    }

    pub fn total_stars(&self) -> u32 {
        self.total_stars
    }

    pub fn total_destruction_percentage(&self) -> u32 {
        self.total_destruction_percentage
    }

    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }

    pub fn total_participated_attacks(&self) -> u32 {
        self.total_participated_attacks
    }

    pub fn total_rounds_placed_into(&self) -> u32 {
        self.total_rounds_placed_into
    }

    /// Whether any round so far showed the member lined up.
    pub fn has_participated(&self) -> bool {
        self.has_participated
    }
}
