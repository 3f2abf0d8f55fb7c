//! Tabular season report built from a finished analysis.
//!
//! `build_headers` and `build_table` give the plain string grid; [`Report`]
//! adds what a presentation layer needs to color it (cell styles, round
//! outcomes, opponent names).

use serde::Serialize;

use crate::{
    analysis::{
        context::SeasonAnalysis,
        participation::{ParticipationState, RoundParticipation},
        performance::PlayerPerformance,
        rating::AttackRating,
    },
    coc::types::Round,
};

pub const NAME_HEADER: &str = "Participating Roster";
pub const TOWNHALL_HEADER: &str = "Townhall Level";
pub const ATTACKS_HEADER: &str = "Attacks Used";
pub const STARS_HEADER: &str = "Overall Stars";
pub const DESTRUCTION_HEADER: &str = "Overall Destruction (%)";

/// Opponent name for rounds not available yet.
pub const UNKNOWN_OPPONENT: &str = "?";

/// Header for a round that has started.
fn round_score_header(number: usize, round: &Round) -> String {
    format!(
        "War {} Performance\n{}* {:.2}%   |   {}* {:.2}%\n{}/{}        |        {}/{}",
        number,
        round.clan.stars,
        round.clan.destruction_percentage,
        round.opponent.stars,
        round.opponent.destruction_percentage,
        round.clan.attacks,
        round.team_size,
        round.opponent.attacks,
        round.team_size
    )
}

/// Header for a round in preparation or not available yet.
fn round_placeholder_header(number: usize, team_size: u32) -> String {
    format!(
        "War {} Performance\n00* 00.00%   |   00* 00.00%\n0/{}        |        0/{}",
        number, team_size, team_size
    )
}

/// Column headers: roster columns, one per season round, then totals.
pub fn build_headers(analysis: &SeasonAnalysis) -> Vec<String> {
    let rounds = analysis.rounds();
    let mut headers = vec![NAME_HEADER.to_string(), TOWNHALL_HEADER.to_string()];

    let mut team_size = 0;
    for index in 0..analysis.total_rounds() {
        let number = index + 1;
        match rounds.get(index) {
            Some(round) if round.has_started() => {
                team_size = round.team_size;
                headers.push(round_score_header(number, round));
            }
            Some(round) => {
                team_size = round.team_size;
                headers.push(round_placeholder_header(number, team_size));
            }
            None => headers.push(round_placeholder_header(number, team_size)),
        }
    }

    headers.push(ATTACKS_HEADER.to_string());
    headers.push(STARS_HEADER.to_string());
    headers.push(DESTRUCTION_HEADER.to_string());
    headers
}

/// One row per member who showed up, in report order.
pub fn build_table(analysis: &SeasonAnalysis) -> Vec<Vec<String>> {
    analysis
        .report_order()
        .into_iter()
        .map(|performance| ReportRow::from_performance(performance).to_strings())
        .collect()
}

/// How a round cell should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rating", rename_all = "snake_case")]
pub enum CellStyle {
    /// An attack, styled by its rating.
    Rated(AttackRating),
    /// Lined up in a running round, attack still open.
    Awaiting,
    /// Lined up in a finished round without attacking.
    Missed,
    /// Not lined up, preparing, or unknown.
    Inactive,
}

impl CellStyle {
    pub fn of(participation: &RoundParticipation) -> Self {
        if let Some(attack) = participation.attack() {
            return CellStyle::Rated(attack.rating);
        }
        match participation.state() {
            ParticipationState::AwaitingAttack => CellStyle::Awaiting,
            ParticipationState::DidNotAttack => CellStyle::Missed,
            ParticipationState::Preparing
            | ParticipationState::Attacked
            | ParticipationState::NotInWar
            | ParticipationState::NotInClan
            | ParticipationState::Unknown => CellStyle::Inactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCell {
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub tag: String,
    pub name: String,
    pub townhall: u8,
    pub cells: Vec<ReportCell>,
    pub attacks_used: String,
    pub total_stars: u32,
    pub total_destruction: u32,
}

impl ReportRow {
    pub fn from_performance(performance: &PlayerPerformance) -> Self {
        let member = performance.member();
        Self {
            tag: member.tag.clone(),
            name: member.name.clone(),
            townhall: member.town_hall_level,
            cells: performance
                .rounds()
                .iter()
                .map(|round| ReportCell {
                    text: round.to_string(),
                    style: CellStyle::of(round),
                })
                .collect(),
            attacks_used: format!(
                "{}/{}",
                performance.total_participated_attacks(),
                performance.total_rounds_placed_into()
            ),
            total_stars: performance.total_stars(),
            total_destruction: performance.total_destruction_percentage(),
        }
    }

    /// The row as plain strings, aligned with [`build_headers`].
    pub fn to_strings(&self) -> Vec<String> {
        let mut row = vec![self.name.clone(), format!("TH{}", self.townhall)];
        row.extend(self.cells.iter().map(|cell| cell.text.clone()));
        row.push(self.attacks_used.clone());
        row.push(self.total_stars.to_string());
        row.push(self.total_destruction.to_string());
        row
    }
}

/// Result of a round for the home clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Victory,
    Defeat,
    Tie,
    /// In preparation or not available yet.
    Pending,
}

impl RoundOutcome {
    /// Stars decide; destruction breaks a star tie.
    pub fn of(round: &Round) -> Self {
        if !round.has_started() {
            return RoundOutcome::Pending;
        }

        let (home, away) = (&round.clan, &round.opponent);
        match home.stars.cmp(&away.stars) {
            std::cmp::Ordering::Greater => RoundOutcome::Victory,
            std::cmp::Ordering::Less => RoundOutcome::Defeat,
            std::cmp::Ordering::Equal => {
                if home.destruction_percentage > away.destruction_percentage {
                    RoundOutcome::Victory
                } else if home.destruction_percentage < away.destruction_percentage {
                    RoundOutcome::Defeat
                } else {
                    RoundOutcome::Tie
                }
            }
        }
    }
}

/// Structured report for printing, exporting or styling.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub clan_name: String,
    pub headers: Vec<String>,
    /// One per season round; [`UNKNOWN_OPPONENT`] where not known yet.
    pub opponents: Vec<String>,
    pub outcomes: Vec<RoundOutcome>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn build(analysis: &SeasonAnalysis) -> Self {
        let rounds = analysis.rounds();
        let total = analysis.total_rounds();

        let opponents = (0..total)
            .map(|i| {
                rounds
                    .get(i)
                    .map(|round| round.opponent.name.clone())
                    .unwrap_or_else(|| UNKNOWN_OPPONENT.to_string())
            })
            .collect();

        let outcomes = (0..total)
            .map(|i| rounds.get(i).map(RoundOutcome::of).unwrap_or(RoundOutcome::Pending))
            .collect();

        let rows = analysis
            .report_order()
            .into_iter()
            .map(ReportRow::from_performance)
            .collect();

        Self {
            clan_name: analysis.roster().name.clone(),
            headers: build_headers(analysis),
            opponents,
            outcomes,
            rows,
        }
    }

    /// Rows as plain strings, identical to [`build_table`].
    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(ReportRow::to_strings).collect()
    }
}
