use super::linescore::{HOLES_PER_ROUND, REGULATION_ROUNDS, holes_played, split_linescores};
use super::parse::{format_score, parse_score};
use crate::espn::EspnCompetitor;
use crate::model::{EntryStatus, LeaderboardEntry, Player, TournamentStatus};

const NO_SCORE: &str = "-";
const PLAYOFF_MARKER: &str = "P";
const FINISHED_MARKER: &str = "F";

/// Maps one upstream competitor record to a leaderboard entry. A record
/// without an athlete sub-record is a placeholder row and yields `None`;
/// every other anomaly degrades to a safe default.
pub(crate) fn normalize_competitor(
    comp: &EspnCompetitor,
    index: usize,
    current_round: i32,
    is_playoff: bool,
    tournament_status: TournamentStatus,
) -> Option<LeaderboardEntry> {
    let athlete = comp.athlete.as_ref()?;

    let (first_name, last_name) = split_short_name(athlete.short_name.as_deref());
    let player = Player {
        id: athlete.id.clone().unwrap_or_else(|| comp.id.clone()),
        name: athlete
            .display_name
            .clone()
            .or_else(|| athlete.full_name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        first_name,
        last_name,
        country: athlete.flag.as_ref().and_then(|flag| flag.alt.clone()),
        amateur: athlete.amateur,
        image_url: athlete.headshot.as_ref().and_then(|h| h.href.clone()),
    };

    let position_num = comp.order.unwrap_or((index as i32) + 1);
    // Upstream's tie string ("T4") is authoritative; never recompute ties.
    let position = comp
        .status
        .as_ref()
        .and_then(|status| status.position.as_ref())
        .and_then(|position| position.display_name.clone())
        .unwrap_or_else(|| position_num.to_string());

    let groups = split_linescores(&comp.linescores);
    let in_playoff = groups.is_playoff_participant(is_playoff);

    let rounds: Vec<String> = groups
        .regulation
        .iter()
        .map(|entry| {
            entry
                .display_value
                .clone()
                .unwrap_or_else(|| NO_SCORE.to_string())
        })
        .collect();

    // Upstream's top-level score includes playoff strokes; the headline
    // total always represents regulation play, so derive it from the
    // regulation rounds for playoff participants.
    let score_num: i32 = if in_playoff {
        groups
            .regulation
            .iter()
            .map(|entry| parse_score(entry.display_value.as_deref().unwrap_or("")))
            .sum()
    } else {
        comp.score.as_ref().map_or(0, |score| score.to_par())
    };
    let score = format_score(score_num);

    let (today, today_num, thru) = if in_playoff && tournament_status == TournamentStatus::Post {
        (NO_SCORE.to_string(), 0, PLAYOFF_MARKER.to_string())
    } else if in_playoff && tournament_status == TournamentStatus::In {
        let playoff_entry = groups.playoff.first();
        let playoff_holes = playoff_entry.map_or(0, |entry| holes_played(entry));
        let today = playoff_entry
            .and_then(|entry| entry.display_value.clone())
            .unwrap_or_else(|| NO_SCORE.to_string());
        let today_num = parse_score(&today);
        let thru = if playoff_holes > 0 {
            format!("{PLAYOFF_MARKER}{playoff_holes}")
        } else {
            PLAYOFF_MARKER.to_string()
        };
        (today, today_num, thru)
    } else {
        let effective_round = current_round.min(REGULATION_ROUNDS);
        let today_entry = groups.regulation_round(effective_round);
        let today = today_entry
            .and_then(|entry| entry.display_value.clone())
            .or_else(|| rounds.last().cloned())
            .unwrap_or_else(|| NO_SCORE.to_string());
        let today_num = parse_score(&today);
        let played = today_entry.map_or(0, holes_played);
        let thru = if played >= HOLES_PER_ROUND {
            FINISHED_MARKER.to_string()
        } else if played > 0 {
            played.to_string()
        } else {
            NO_SCORE.to_string()
        };
        (today, today_num, thru)
    };

    let status = classify_status(
        comp.status
            .as_ref()
            .and_then(|status| status.display_value.as_deref())
            .unwrap_or(""),
    );

    let scorecard_available = groups
        .regulation
        .iter()
        .any(|entry| !entry.linescores.is_empty());

    Some(LeaderboardEntry {
        player,
        position,
        position_num,
        score,
        score_num,
        today,
        today_num,
        thru,
        rounds,
        status,
        scorecard_available,
        in_playoff,
    })
}

/// Free text is the only reliable status signal upstream. Cut beats wd
/// beats dq when more than one substring matches.
fn classify_status(display: &str) -> EntryStatus {
    let lower = display.to_lowercase();
    if lower.contains("cut") {
        EntryStatus::Cut
    } else if lower.contains("wd") {
        EntryStatus::Wd
    } else if lower.contains("dq") {
        EntryStatus::Dq
    } else {
        EntryStatus::Active
    }
}

fn split_short_name(short_name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(short) = short_name else {
        return (None, None);
    };
    let mut parts = short.split_whitespace();
    let first = parts.next().map(ToString::to_string);
    let rest = parts.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() { None } else { Some(rest) };
    (first, last)
}
