//! Season analysis: one run over a roster and its rounds.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::{
    analysis::{
        participation::{classify, ParticipationState, RoundParticipation},
        performance::PlayerPerformance,
        rating::RatingRules,
    },
    coc::types::{Roster, Round, RoundState},
    error::{CwlError, Result},
};

/// Owns the per-player performances for one analysis run.
///
/// Rounds must be given in season order; round `i` of `rounds` is round
/// `i + 1` of the season. Rounds not fetched yet are simply left out.
#[derive(Debug)]
pub struct AnalysisContext {
    roster: Roster,
    rounds: Vec<Round>,
    total_rounds: usize,
    rules: RatingRules,
    performances: HashMap<String, PlayerPerformance>,
}

impl AnalysisContext {
    /// Seed one performance per roster member.
    pub fn new(
        roster: Roster,
        rounds: Vec<Round>,
        total_rounds: usize,
        rules: RatingRules,
    ) -> Result<Self> {
        if rounds.len() > total_rounds {
            return Err(CwlError::TooManyRounds {
                available: rounds.len(),
                total: total_rounds,
            });
        }

        let performances = roster
            .members
            .iter()
            .map(|member| {
                let sort_key = first_map_position(&rounds, &member.tag);
                (member.tag.clone(), PlayerPerformance::new(member.clone(), sort_key))
            })
            .collect();

        Ok(Self {
            roster,
            rounds,
            total_rounds,
            rules,
            performances,
        })
    }

    fn record(&mut self, tag: &str, participation: RoundParticipation) -> Result<()> {
        self.performances
            .get_mut(tag)
            .ok_or_else(|| CwlError::UnknownPlayer {
                tag: tag.to_string(),
            })?
            .record(participation);
        Ok(())
    }

    /// Classify every roster member in every round, then pad the rounds not
    /// available yet with `NotInWar`.
    pub fn analyze(mut self) -> Result<SeasonAnalysis> {
        let tags: Vec<String> = self.roster.members.iter().map(|m| m.tag.clone()).collect();

        for index in 0..self.rounds.len() {
            let round_number = index + 1;
            let round = &self.rounds[index];
            if round.state == RoundState::Unknown {
                warn!(round = round_number, clan = %round.clan.name, "round is in an unrecognized state");
            }

            let participations = tags
                .iter()
                .map(|tag| classify(tag, round, round_number, &self.rules))
                .collect::<Result<Vec<_>>>()?;

            for (tag, participation) in tags.iter().zip(participations) {
                self.record(tag, participation)?;
            }
            info!(round = round_number, opponent = %self.rounds[index].opponent.name, "round analyzed");
        }

        let missing = self.total_rounds - self.rounds.len();
        for _ in 0..missing {
            for tag in &tags {
                let participation =
                    RoundParticipation::without_attack(tag, ParticipationState::NotInWar)?;
                self.record(tag, participation)?;
            }
        }
        if missing > 0 {
            info!(missing, "padded rounds that are not available yet");
        }

        let performances = tags
            .iter()
            .map(|tag| {
                self.performances
                    .remove(tag)
                    .ok_or_else(|| CwlError::UnknownPlayer { tag: tag.clone() })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SeasonAnalysis {
            roster: self.roster,
            rounds: self.rounds,
            total_rounds: self.total_rounds,
            performances,
        })
    }
}

/// Map position of `tag` in the first round it appears in, or 0.
fn first_map_position(rounds: &[Round], tag: &str) -> u32 {
    rounds
        .iter()
        .find_map(|round| round.clan.member(tag))
        .map(|member| member.map_position)
        .unwrap_or(0)
}

/// Read-only result of an analysis run.
#[derive(Debug)]
pub struct SeasonAnalysis {
    roster: Roster,
    rounds: Vec<Round>,
    total_rounds: usize,
    performances: Vec<PlayerPerformance>,
}

impl SeasonAnalysis {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Rounds that were available, in season order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Performances in roster order.
    pub fn performances(&self) -> &[PlayerPerformance] {
        &self.performances
    }

    pub fn performance(&self, tag: &str) -> Result<&PlayerPerformance> {
        self.performances
            .iter()
            .find(|p| p.member().tag == tag)
            .ok_or_else(|| CwlError::UnknownPlayer {
                tag: tag.to_string(),
            })
    }

    /// Members who showed up at least once, by sort key; ties keep roster order.
    pub fn report_order(&self) -> Vec<&PlayerPerformance> {
        let mut ordered: Vec<&PlayerPerformance> = self
            .performances
            .iter()
            .filter(|p| p.has_participated())
            .collect();
        ordered.sort_by_key(|p| p.sort_key());
        ordered
    }
}
