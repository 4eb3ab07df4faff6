use greenside::espn::ScoreboardDoc;
use greenside::{Error, normalize_player_scorecard};
use serde_json::{Value, json};

fn scorecard_doc() -> ScoreboardDoc {
    // Round 1: 18 holes, even par overall. Holes arrive out of order to
    // exercise sorting.
    let mut round1: Vec<Value> = (3..=18)
        .map(|n| json!({ "period": n, "value": 4, "scoreType": { "displayValue": "E" } }))
        .collect();
    round1.push(json!({ "period": 1, "value": 5, "scoreType": { "displayValue": "+1" } }));
    round1.push(json!({ "period": 2, "value": 3, "scoreType": { "displayValue": "-1" } }));

    serde_json::from_value(json!({
        "events": [{
            "id": "700",
            "name": "The Open",
            "date": "2026-07-16T07:00Z",
            "competitions": [{
                "id": "700",
                "competitors": [
                    {
                        "id": "c1",
                        "athlete": { "id": "9478", "displayName": "Scottie Scheffler" },
                        "linescores": [
                            { "period": 1, "displayValue": "E", "linescores": round1 },
                            {
                                "period": 2,
                                "displayValue": "-1",
                                "linescores": [
                                    { "period": 3, "value": 2, "scoreType": { "displayValue": "-2" } },
                                    { "period": 1, "value": 4, "scoreType": { "displayValue": "E" } },
                                    { "period": 2, "value": 5, "scoreType": { "displayValue": "+1" } }
                                ]
                            },
                            { "displayValue": "-" },
                            { "period": 5, "displayValue": "E", "linescores": [
                                { "period": 1, "value": 4, "scoreType": { "displayValue": "E" } }
                            ]}
                        ]
                    },
                    {
                        "id": "c2",
                        "athlete": { "id": "10592", "displayName": "Collin Morikawa" },
                        "linescores": []
                    }
                ]
            }]
        }]
    }))
    .unwrap()
}

#[test]
fn builds_regulation_rounds_with_hole_math() {
    let card =
        normalize_player_scorecard(&scorecard_doc(), "700", "9478", "Scottie Scheffler").unwrap();

    assert_eq!(card.event_id, "700");
    assert_eq!(card.event_name, "The Open");
    // Playoff period 5 and the period-less placeholder never reach the card.
    assert_eq!(card.rounds.len(), 2);

    let round1 = &card.rounds[0];
    assert_eq!(round1.round, 1);
    assert!(round1.is_complete);
    assert_eq!(round1.holes.len(), 18);
    // Sorted by hole number despite shuffled input.
    assert_eq!(round1.holes[0].hole_number, 1);
    assert_eq!(round1.holes[17].hole_number, 18);
    assert_eq!(round1.total_strokes, Some(5 + 3 + 16 * 4));
    assert_eq!(round1.to_par, Some(0));
    // par = strokes - to_par, hole by hole.
    for hole in &round1.holes {
        assert_eq!(hole.to_par, hole.strokes - hole.par);
    }
    assert_eq!(round1.holes[0].par, 4); // 5 strokes, +1
    assert_eq!(round1.holes[1].par, 4); // 3 strokes, -1

    let round2 = &card.rounds[1];
    assert_eq!(round2.round, 2);
    assert!(!round2.is_complete);
    assert_eq!(round2.holes.len(), 3);
    assert_eq!(round2.total_strokes, Some(11));
    assert_eq!(round2.to_par, Some(-1));
}

#[test]
fn matches_by_competitor_or_athlete_id() {
    let doc = scorecard_doc();
    let by_athlete = normalize_player_scorecard(&doc, "700", "9478", "Scottie Scheffler").unwrap();
    let by_competitor = normalize_player_scorecard(&doc, "700", "c1", "Scottie Scheffler").unwrap();
    assert_eq!(by_athlete.rounds.len(), by_competitor.rounds.len());
}

#[test]
fn unknown_player_is_an_error() {
    match normalize_player_scorecard(&scorecard_doc(), "700", "424242", "Nobody") {
        Err(Error::PlayerNotFound(id)) => assert_eq!(id, "424242"),
        other => panic!("expected PlayerNotFound, got {other:?}"),
    }
}

#[test]
fn player_without_linescores_has_no_scorecard() {
    assert!(matches!(
        normalize_player_scorecard(&scorecard_doc(), "700", "10592", "Collin Morikawa"),
        Err(Error::NoScorecardData)
    ));
}

#[test]
fn empty_window_is_event_not_found() {
    let doc: ScoreboardDoc = serde_json::from_value(json!({ "events": [] })).unwrap();
    assert!(matches!(
        normalize_player_scorecard(&doc, "700", "9478", "Scottie Scheffler"),
        Err(Error::EventNotFound(_))
    ));
}
