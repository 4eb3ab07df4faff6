use greenside::espn::ScoreboardDoc;
use greenside::model::Tour;
use greenside::normalize_leaderboard;
use serde_json::{Value, json};

/// Sudden-death playoff document: period 6, two playoff holes played by the
/// two tied leaders, a third competitor who made the cut but not the
/// playoff.
fn playoff_doc(state: &str) -> ScoreboardDoc {
    let finished_round: Vec<Value> = (1..=18).map(|n| json!({ "period": n, "value": 4 })).collect();
    serde_json::from_value(json!({
        "events": [{
            "id": "800",
            "name": "Travelers Championship",
            "date": "2026-06-21T07:00Z",
            "status": { "type": { "state": state } },
            "competitions": [{
                "id": "800",
                "status": { "period": 6 },
                "competitors": [
                    {
                        "id": "c1",
                        "order": 1,
                        "athlete": { "id": "9478", "displayName": "Scottie Scheffler" },
                        "score": "-12",
                        "linescores": [
                            { "period": 1, "displayValue": "-2" },
                            { "period": 2, "displayValue": "-3" },
                            { "period": 3, "displayValue": "-2" },
                            { "period": 4, "displayValue": "-3", "linescores": finished_round.clone() },
                            {
                                "period": 6,
                                "displayValue": "E",
                                "linescores": [
                                    { "period": 1, "value": 4 },
                                    { "period": 2, "value": 4 }
                                ]
                            }
                        ]
                    },
                    {
                        "id": "c2",
                        "order": 2,
                        "athlete": { "id": "10592", "displayName": "Collin Morikawa" },
                        "score": "-10",
                        "linescores": [
                            { "period": 1, "displayValue": "-3" },
                            { "period": 2, "displayValue": "-2" },
                            { "period": 3, "displayValue": "-2" },
                            { "period": 4, "displayValue": "-3", "linescores": finished_round.clone() },
                            {
                                "period": 6,
                                "displayValue": "+1",
                                "linescores": [
                                    { "period": 1, "value": 4 },
                                    { "period": 2, "value": 5 }
                                ]
                            }
                        ]
                    },
                    {
                        "id": "c3",
                        "order": 3,
                        "athlete": { "id": "388", "displayName": "Rory McIlroy" },
                        "score": "-8",
                        "linescores": [
                            { "period": 1, "displayValue": "-2" },
                            { "period": 2, "displayValue": "-2" },
                            { "period": 3, "displayValue": "-3" },
                            { "period": 4, "displayValue": "-1", "linescores": finished_round.clone() }
                        ]
                    }
                ]
            }]
        }]
    }))
    .unwrap()
}

#[test]
fn playoff_flag_and_round_cap() {
    let board = normalize_leaderboard(&playoff_doc("in"), Tour::Pga).unwrap();
    assert!(board.is_playoff);
    // Displayed round never exceeds regulation; the flag carries the rest.
    assert_eq!(board.round, 4);
}

#[test]
fn live_playoff_two_holes_in() {
    let board = normalize_leaderboard(&playoff_doc("in"), Tour::Pga).unwrap();
    let leader = &board.entries[0];

    assert!(leader.in_playoff);
    // Headline total is regulation-derived, not upstream's playoff-polluted
    // top-level score.
    assert_eq!(leader.score_num, -10);
    assert_eq!(leader.score, "-10");
    assert_eq!(leader.today, "E");
    assert_eq!(leader.thru, "P2");

    let runner_up = &board.entries[1];
    assert!(runner_up.in_playoff);
    assert_eq!(runner_up.score_num, -10);
    assert_eq!(runner_up.today, "+1");
    assert_eq!(runner_up.thru, "P2");
}

#[test]
fn finished_playoff_shows_bare_marker() {
    let board = normalize_leaderboard(&playoff_doc("post"), Tour::Pga).unwrap();
    let leader = &board.entries[0];

    assert!(leader.in_playoff);
    assert_eq!(leader.today, "-");
    assert_eq!(leader.today_num, 0);
    assert_eq!(leader.thru, "P");
    assert_eq!(leader.score_num, -10);
}

#[test]
fn cut_maker_outside_playoff_stays_regulation() {
    let board = normalize_leaderboard(&playoff_doc("in"), Tour::Pga).unwrap();
    let third = &board.entries[2];

    // The event is in a playoff but this competitor has no playoff holes.
    assert!(!third.in_playoff);
    assert_eq!(third.score_num, -8);
    // Effective round caps at 4 for regulation today/thru resolution.
    assert_eq!(third.today, "-1");
    assert_eq!(third.thru, "F");
}

#[test]
fn rounds_list_holds_regulation_only() {
    let board = normalize_leaderboard(&playoff_doc("in"), Tour::Pga).unwrap();
    for entry in &board.entries {
        assert_eq!(entry.rounds.len(), 4);
    }
    assert_eq!(board.entries[0].rounds, vec!["-2", "-3", "-2", "-3"]);
}
