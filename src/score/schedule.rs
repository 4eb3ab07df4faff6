use super::leaderboard::{event_status, tournament_from_event};
use crate::error::Error;
use crate::espn::{EspnApiClient, ScoreboardDoc};
use crate::model::{Tour, Tournament};

/// Maps every event of a scoreboard document to a `Tournament`. An empty
/// document is an empty schedule, not an error.
#[must_use]
pub fn normalize_schedule(doc: &ScoreboardDoc, tour: Tour) -> Vec<Tournament> {
    doc.events
        .iter()
        .map(|event| {
            tournament_from_event(event, event.competitions.first(), event_status(event), tour)
        })
        .collect()
}

/// Current tournaments for a tour (the live scoreboard window).
pub async fn load_schedule(api: &dyn EspnApiClient, tour: Tour) -> Result<Vec<Tournament>, Error> {
    let doc = api.scoreboard(tour, None).await?;
    Ok(normalize_schedule(&doc, tour))
}

/// Full-season schedule; the scoreboard endpoint accepts a bare year as its
/// date filter.
pub async fn load_season_schedule(
    api: &dyn EspnApiClient,
    tour: Tour,
    year: i32,
) -> Result<Vec<Tournament>, Error> {
    let doc = api.scoreboard(tour, Some(&year.to_string())).await?;
    Ok(normalize_schedule(&doc, tour))
}
