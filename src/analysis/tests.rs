//! Season-level tests for the analysis engine

use super::*;
use crate::{
    coc::types::{Attack, Roster, RosterMember, Round, RoundState, Side, SideMember},
    error::CwlError,
};

fn roster(members: &[(&str, u8)]) -> Roster {
    Roster {
        tag: "#HOME".to_string(),
        name: "Home Clan".to_string(),
        clan_level: 20,
        members: members
            .iter()
            .map(|(tag, th)| RosterMember {
                tag: tag.to_string(),
                name: format!("name{}", tag.trim_start_matches('#')),
                town_hall_level: *th,
            })
            .collect(),
    }
}

fn home_member(tag: &str, th: u8, pos: u32, hit: Option<(&str, u8, u8)>) -> SideMember {
    SideMember {
        tag: tag.to_string(),
        name: format!("name{}", tag.trim_start_matches('#')),
        townhall_level: th,
        map_position: pos,
        opponent_attacks: 0,
        best_opponent_attack: None,
        attacks: hit
            .map(|(defender, stars, destruction)| {
                vec![Attack {
                    attacker_tag: tag.to_string(),
                    defender_tag: defender.to_string(),
                    stars,
                    destruction_percentage: destruction,
                    order: pos,
                    duration: 100,
                }]
            })
            .unwrap_or_default(),
    }
}

fn opponent_side(name: &str, stars: u32, destruction: f64) -> Side {
    Side {
        tag: format!("#{}", name.to_uppercase()),
        name: name.to_string(),
        clan_level: 10,
        attacks: 3,
        stars,
        destruction_percentage: destruction,
        members: (1..=5)
            .map(|pos| SideMember {
                tag: format!("#O{}", pos),
                name: format!("opp{}", pos),
                townhall_level: 17 - pos as u8,
                map_position: pos,
                opponent_attacks: 0,
                best_opponent_attack: None,
                attacks: Vec::new(),
            })
            .collect(),
    }
}

fn round(state: RoundState, home: Vec<SideMember>, opponent: Side, home_stars: u32) -> Round {
    Round {
        state,
        team_size: 5,
        preparation_start_time: None,
        start_time: None,
        end_time: None,
        clan: Side {
            tag: "#HOME".to_string(),
            name: "Home Clan".to_string(),
            clan_level: 20,
            attacks: 2,
            stars: home_stars,
            destruction_percentage: 55.5,
            members: home,
        },
        opponent,
    }
    .oriented_to("#HOME")
}

fn analyze(roster: Roster, rounds: Vec<Round>, total: usize) -> SeasonAnalysis {
    AnalysisContext::new(roster, rounds, total, RatingRules::default())
        .unwrap()
        .analyze()
        .unwrap()
}

fn three_round_season() -> (Roster, Vec<Round>) {
    let roster = roster(&[("#P1", 16), ("#P2", 15), ("#P3", 14), ("#P4", 13)]);
    let rounds = vec![
        round(
            RoundState::WarEnded,
            vec![
                home_member("#P1", 16, 1, Some(("#O1", 3, 100))),
                home_member("#P2", 15, 2, None),
            ],
            opponent_side("Alpha", 4, 60.0),
            5,
        ),
        round(
            RoundState::InWar,
            vec![
                home_member("#P2", 15, 1, Some(("#O3", 2, 88))),
                home_member("#P1", 16, 2, None),
            ],
            opponent_side("Bravo", 6, 70.25),
            3,
        ),
        round(
            RoundState::Preparation,
            vec![
                home_member("#P1", 16, 1, None),
                home_member("#P3", 14, 3, None),
            ],
            opponent_side("Charlie", 0, 0.0),
            0,
        ),
    ];
    (roster, rounds)
}

#[test]
fn test_every_history_is_padded_to_season_length() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);

    for performance in analysis.performances() {
        assert_eq!(performance.rounds().len(), 7);
        for padded in &performance.rounds()[3..] {
            assert_eq!(padded.state(), ParticipationState::NotInWar);
        }
    }
}

#[test]
fn test_states_follow_each_round() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);

    let states = |tag: &str| -> Vec<ParticipationState> {
        analysis
            .performance(tag)
            .unwrap()
            .rounds()
            .iter()
            .take(3)
            .map(|r| r.state())
            .collect()
    };

    assert_eq!(
        states("#P1"),
        vec![
            ParticipationState::Attacked,
            ParticipationState::AwaitingAttack,
            ParticipationState::Preparing
        ]
    );
    assert_eq!(
        states("#P2"),
        vec![
            ParticipationState::DidNotAttack,
            ParticipationState::Attacked,
            ParticipationState::NotInWar
        ]
    );
    assert_eq!(
        states("#P3"),
        vec![
            ParticipationState::NotInWar,
            ParticipationState::NotInWar,
            ParticipationState::Preparing
        ]
    );
    assert_eq!(
        states("#P4"),
        vec![ParticipationState::NotInWar; 3]
    );
}

#[test]
fn test_totals_across_rounds() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);

    let p1 = analysis.performance("#P1").unwrap();
    assert_eq!(p1.total_stars(), 3);
    assert_eq!(p1.total_destruction_percentage(), 100);
    assert_eq!(p1.total_participated_attacks(), 1);
    assert_eq!(p1.total_rounds_placed_into(), 2);

    let p2 = analysis.performance("#P2").unwrap();
    assert_eq!(p2.total_stars(), 2);
    assert_eq!(p2.total_rounds_placed_into(), 2);
    // TH15 on a TH14 defender is one level above
    assert_eq!(
        p2.rounds()[1].attack().unwrap().rating,
        AttackRating::BelowAverage
    );
}

#[test]
fn test_preparing_only_member_is_reported_without_placements() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);

    let p3 = analysis.performance("#P3").unwrap();
    assert!(p3.has_participated());
    assert_eq!(p3.total_rounds_placed_into(), 0);

    let table = build_table(&analysis);
    let row = table.iter().find(|row| row[0] == "nameP3").unwrap();
    assert_eq!(row[2], "NOT IN WAR");
    assert_eq!(row[4], "PREPARING");
    assert_eq!(row[9], "0/0");
}

#[test]
fn test_member_without_any_signal_is_omitted() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);

    assert!(!analysis.performance("#P4").unwrap().has_participated());
    let table = build_table(&analysis);
    assert_eq!(table.len(), 3);
    assert!(table.iter().all(|row| row[0] != "nameP4"));
}

#[test]
fn test_rows_follow_first_observed_map_position() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);

    let order: Vec<&str> = analysis
        .report_order()
        .iter()
        .map(|p| p.member().tag.as_str())
        .collect();
    // P1 first seen at 1, P2 at 2, P3 at 3
    assert_eq!(order, vec!["#P1", "#P2", "#P3"]);
    assert_eq!(analysis.performance("#P2").unwrap().sort_key(), 2);
    assert_eq!(analysis.performance("#P4").unwrap().sort_key(), 0);
}

#[test]
fn test_equal_sort_keys_keep_roster_order() {
    let roster = roster(&[("#B", 15), ("#A", 15), ("#C", 15)]);
    let rounds = vec![
        round(
            RoundState::WarEnded,
            vec![home_member("#C", 15, 1, None), home_member("#A", 15, 2, None)],
            opponent_side("Alpha", 0, 0.0),
            0,
        ),
        round(
            RoundState::WarEnded,
            vec![home_member("#B", 15, 2, None), home_member("#C", 15, 1, None)],
            opponent_side("Bravo", 0, 0.0),
            0,
        ),
    ];
    let analysis = analyze(roster, rounds, 2);

    let order: Vec<&str> = analysis
        .report_order()
        .iter()
        .map(|p| p.member().tag.as_str())
        .collect();
    assert_eq!(order, vec!["#C", "#B", "#A"]);
}

#[test]
fn test_no_rounds_available_pads_everything() {
    let analysis = analyze(roster(&[("#P1", 16)]), Vec::new(), 7);

    let p1 = analysis.performance("#P1").unwrap();
    assert_eq!(p1.rounds().len(), 7);
    assert!(!p1.has_participated());
    assert!(build_table(&analysis).is_empty());
    assert_eq!(build_headers(&analysis).len(), 2 + 7 + 3);
}

#[test]
fn test_more_rounds_than_season_is_rejected() {
    let (roster, rounds) = three_round_season();
    let result = AnalysisContext::new(roster, rounds, 2, RatingRules::default());
    match result {
        Err(CwlError::TooManyRounds { available, total }) => {
            assert_eq!(available, 3);
            assert_eq!(total, 2);
        }
        other => panic!("Expected TooManyRounds, got {:?}", other),
    }
}

#[test]
fn test_malformed_attack_aborts_the_run() {
    let rounds = vec![round(
        RoundState::WarEnded,
        vec![home_member("#P1", 16, 1, Some(("#NOBODY", 3, 100)))],
        opponent_side("Alpha", 0, 0.0),
        3,
    )];
    let result = AnalysisContext::new(roster(&[("#P1", 16)]), rounds, 7, RatingRules::default())
        .unwrap()
        .analyze();
    assert!(matches!(result, Err(CwlError::DefenderNotFound { .. })));
}

#[test]
fn test_unknown_round_state_does_not_abort() {
    let rounds = vec![
        round(
            RoundState::Unknown,
            vec![home_member("#P1", 16, 1, None)],
            opponent_side("Alpha", 0, 0.0),
            0,
        ),
        round(
            RoundState::WarEnded,
            vec![home_member("#P1", 16, 1, Some(("#O2", 3, 100)))],
            opponent_side("Bravo", 0, 0.0),
            3,
        ),
    ];
    let analysis = analyze(roster(&[("#P1", 16)]), rounds, 2);

    let p1 = analysis.performance("#P1").unwrap();
    assert_eq!(p1.rounds()[0].state(), ParticipationState::Unknown);
    assert_eq!(p1.rounds()[1].state(), ParticipationState::Attacked);
    assert_eq!(p1.total_participated_attacks(), 1);
}

#[test]
fn test_headers_layout() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);
    let headers = build_headers(&analysis);

    assert_eq!(headers.len(), 12);
    assert_eq!(headers[0], "Participating Roster");
    assert_eq!(headers[1], "Townhall Level");
    assert_eq!(
        headers[2],
        "War 1 Performance\n5* 55.50%   |   4* 60.00%\n2/5        |        3/5"
    );
    assert_eq!(
        headers[3],
        "War 2 Performance\n3* 55.50%   |   6* 70.25%\n2/5        |        3/5"
    );
    // Preparation round and missing rounds use the placeholder
    assert_eq!(
        headers[4],
        "War 3 Performance\n00* 00.00%   |   00* 00.00%\n0/5        |        0/5"
    );
    assert!(headers[8].starts_with("War 7 Performance\n00* 00.00%"));
    assert_eq!(headers[9], "Attacks Used");
    assert_eq!(headers[10], "Overall Stars");
    assert_eq!(headers[11], "Overall Destruction (%)");
}

#[test]
fn test_row_layout_matches_headers() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);
    let headers = build_headers(&analysis);
    let table = build_table(&analysis);

    assert!(table.iter().all(|row| row.len() == headers.len()));

    let p1 = &table[0];
    assert_eq!(p1[0], "nameP1");
    assert_eq!(p1[1], "TH16");
    assert_eq!(p1[2], "100% 3* vs a TH16");
    assert_eq!(p1[3], "AWAITING ATTACK");
    assert_eq!(p1[4], "PREPARING");
    assert_eq!(p1[5], "NOT IN WAR");
    assert_eq!(p1[9], "1/2");
    assert_eq!(p1[10], "3");
    assert_eq!(p1[11], "100");

    let p2 = &table[1];
    assert_eq!(p2[2], "DID NOT ATTACK");
    assert_eq!(p2[3], "88% 2* vs a TH14 (ATKD 3)");
}

#[test]
fn test_structured_report() {
    let (roster, rounds) = three_round_season();
    let analysis = analyze(roster, rounds, 7);
    let report = Report::build(&analysis);

    assert_eq!(report.clan_name, "Home Clan");
    assert_eq!(report.table(), build_table(&analysis));
    assert_eq!(report.headers, build_headers(&analysis));
    assert_eq!(
        report.opponents,
        vec!["Alpha", "Bravo", "Charlie", "?", "?", "?", "?"]
    );
    assert_eq!(
        report.outcomes[..4],
        [
            RoundOutcome::Victory,
            RoundOutcome::Defeat,
            RoundOutcome::Pending,
            RoundOutcome::Pending
        ]
    );

    let p1 = &report.rows[0];
    assert_eq!(p1.cells[0].style, CellStyle::Rated(AttackRating::Godly));
    assert_eq!(p1.cells[1].style, CellStyle::Awaiting);
    assert_eq!(p1.cells[2].style, CellStyle::Inactive);
    assert_eq!(report.rows[1].cells[0].style, CellStyle::Missed);
}

#[test]
fn test_round_outcome_tiebreak_on_destruction() {
    let mut r = round(
        RoundState::WarEnded,
        vec![home_member("#P1", 16, 1, None)],
        opponent_side("Alpha", 5, 55.5),
        5,
    );
    assert_eq!(RoundOutcome::of(&r), RoundOutcome::Tie);

    r.clan.destruction_percentage = 60.0;
    assert_eq!(RoundOutcome::of(&r), RoundOutcome::Victory);

    r.clan.destruction_percentage = 50.0;
    assert_eq!(RoundOutcome::of(&r), RoundOutcome::Defeat);
}
