use super::linescore::{HOLES_PER_ROUND, REGULATION_ROUNDS};
use super::parse::parse_score;
use crate::error::Error;
use crate::espn::{EspnApiClient, EspnLinescore, ScoreboardDoc, event_date_key};
use crate::model::{HoleScore, PlayerScorecard, RoundScorecard, Tour};

/// Builds one player's hole-by-hole scorecard from a date-scoped scoreboard
/// document. Regulation rounds only; playoff periods never appear on the
/// card.
pub fn normalize_player_scorecard(
    doc: &ScoreboardDoc,
    event_id: &str,
    player_id: &str,
    player_name: &str,
) -> Result<PlayerScorecard, Error> {
    if doc.events.is_empty() {
        return Err(Error::EventNotFound(event_id.to_string()));
    }
    let event = doc
        .events
        .iter()
        .find(|event| event.id == event_id)
        .unwrap_or(&doc.events[0]);
    let competition = event.competitions.first().ok_or(Error::NoData)?;

    let competitor = competition
        .competitors
        .iter()
        .find(|comp| {
            comp.id == player_id
                || comp.athlete.as_ref().and_then(|athlete| athlete.id.as_deref())
                    == Some(player_id)
        })
        .ok_or_else(|| Error::PlayerNotFound(player_id.to_string()))?;

    let mut rounds: Vec<RoundScorecard> = competitor
        .linescores
        .iter()
        .filter_map(round_scorecard)
        .collect();
    rounds.sort_by_key(|round| round.round);

    if rounds.is_empty() {
        return Err(Error::NoScorecardData);
    }

    Ok(PlayerScorecard {
        player_id: player_id.to_string(),
        player_name: player_name.to_string(),
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        rounds,
    })
}

fn round_scorecard(round_data: &EspnLinescore) -> Option<RoundScorecard> {
    let period = round_data.period?;
    if period > REGULATION_ROUNDS {
        return None;
    }

    let mut holes: Vec<HoleScore> = round_data
        .linescores
        .iter()
        .filter_map(|hole| {
            let hole_number = hole.period?;
            let strokes = hole.value? as i32;
            let to_par = parse_score(
                hole.score_type
                    .as_ref()
                    .and_then(|st| st.display_value.as_deref())
                    .unwrap_or(""),
            );
            Some(HoleScore {
                hole_number,
                strokes,
                to_par,
                par: strokes - to_par,
            })
        })
        .collect();
    holes.sort_by_key(|hole| hole.hole_number);

    let is_complete = holes.len() == HOLES_PER_ROUND;
    let (total_strokes, to_par) = if holes.is_empty() {
        (None, None)
    } else {
        (
            Some(holes.iter().map(|hole| hole.strokes).sum()),
            Some(holes.iter().map(|hole| hole.to_par).sum()),
        )
    };

    Some(RoundScorecard {
        round: period,
        total_strokes,
        to_par,
        holes,
        is_complete,
    })
}

/// Fetches the event's date window and builds the player's scorecard.
pub async fn load_player_scorecard(
    api: &dyn EspnApiClient,
    tour: Tour,
    event_id: &str,
    event_date: &str,
    player_id: &str,
    player_name: &str,
) -> Result<PlayerScorecard, Error> {
    let date_key = event_date_key(event_date);
    let doc = api.scoreboard(tour, Some(&date_key)).await?;
    normalize_player_scorecard(&doc, event_id, player_id, player_name)
}
