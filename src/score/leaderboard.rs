use super::competitor::normalize_competitor;
use super::linescore::REGULATION_ROUNDS;
use crate::error::Error;
use crate::espn::{EspnApiClient, EspnCompetition, EspnEvent, ScoreboardDoc, event_date_key};
use crate::model::{Leaderboard, Tour, Tournament, TournamentStatus};
use tracing::debug;

/// Normalizes the whole-tour live scoreboard; the first event is the one
/// being played.
pub fn normalize_leaderboard(doc: &ScoreboardDoc, tour: Tour) -> Result<Leaderboard, Error> {
    let event = doc.events.first().ok_or(Error::NoData)?;
    normalize_event(event, tour)
}

/// Normalizes a date-scoped lookup. When the target id is absent but the
/// window still has events, the first event stands in for it (single-event
/// tours share one date window).
pub fn normalize_event_leaderboard(
    doc: &ScoreboardDoc,
    tour: Tour,
    event_id: &str,
) -> Result<Leaderboard, Error> {
    if doc.events.is_empty() {
        return Err(Error::EventNotFound(event_id.to_string()));
    }
    let event = doc
        .events
        .iter()
        .find(|event| event.id == event_id)
        .unwrap_or(&doc.events[0]);
    normalize_event(event, tour)
}

fn normalize_event(event: &EspnEvent, tour: Tour) -> Result<Leaderboard, Error> {
    let competition = event.competitions.first().ok_or(Error::NoData)?;

    let status = event_status(event);
    let tournament = tournament_from_event(event, Some(competition), status, tour);

    let current_round = competition
        .status
        .as_ref()
        .and_then(|status| status.period)
        .unwrap_or(1);
    let is_playoff = current_round > REGULATION_ROUNDS;

    let mut entries: Vec<_> = competition
        .competitors
        .iter()
        .enumerate()
        .filter_map(|(index, comp)| {
            normalize_competitor(comp, index, current_round, is_playoff, status)
        })
        .collect();
    // Upstream's explicit ordering is authoritative; it already reflects
    // tie-break rules this engine does not recompute.
    entries.sort_by_key(|entry| entry.position_num);

    debug!(
        event = %event.id,
        entries = entries.len(),
        round = current_round,
        is_playoff,
        "normalized leaderboard"
    );

    Ok(Leaderboard {
        tournament,
        entries,
        round: current_round.min(REGULATION_ROUNDS),
        is_playoff,
        last_updated: chrono::Utc::now().to_rfc3339(),
    })
}

pub(crate) fn event_status(event: &EspnEvent) -> TournamentStatus {
    TournamentStatus::from_state(
        event
            .status
            .as_ref()
            .and_then(|status| status.kind.as_ref())
            .and_then(|kind| kind.state.as_deref())
            .unwrap_or(""),
    )
}

pub(crate) fn tournament_from_event(
    event: &EspnEvent,
    competition: Option<&EspnCompetition>,
    status: TournamentStatus,
    tour: Tour,
) -> Tournament {
    let venue = competition.and_then(|comp| comp.venue.as_ref());
    let location = venue
        .and_then(|venue| venue.address.as_ref())
        .map(|addr| {
            let mut parts: Vec<&str> = Vec::new();
            if let Some(city) = addr.city.as_deref() {
                parts.push(city);
            }
            if let Some(state) = addr.state.as_deref() {
                parts.push(state);
            }
            if let Some(country) = addr.country.as_deref() {
                if country != "USA" {
                    parts.push(country);
                }
            }
            parts.join(", ")
        })
        .filter(|location| !location.is_empty());

    Tournament {
        id: event.id.clone(),
        name: event.name.clone(),
        short_name: event.short_name.clone(),
        date: event.date.clone(),
        end_date: event.end_date.clone(),
        venue: venue.and_then(|venue| venue.full_name.clone()),
        location,
        purse: competition
            .and_then(|comp| comp.purse)
            .map(|purse| format!("${:.1}M", purse / 1_000_000.0)),
        status,
        tour,
    }
}

/// Fetches and normalizes the live leaderboard for a tour.
pub async fn load_leaderboard(api: &dyn EspnApiClient, tour: Tour) -> Result<Leaderboard, Error> {
    let doc = api.scoreboard(tour, None).await?;
    normalize_leaderboard(&doc, tour)
}

/// Fetches and normalizes one event's leaderboard via its date window.
pub async fn load_event_leaderboard(
    api: &dyn EspnApiClient,
    tour: Tour,
    event_id: &str,
    event_date: &str,
) -> Result<Leaderboard, Error> {
    let date_key = event_date_key(event_date);
    let doc = api.scoreboard(tour, Some(&date_key)).await?;
    normalize_event_leaderboard(&doc, tour, event_id)
}
