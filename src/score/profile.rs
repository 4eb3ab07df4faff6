use super::parse::format_score;
use crate::error::Error;
use crate::espn::{
    EspnApiClient, EspnOverviewStats, EspnScore, EspnSeasonStat, EspnStatsSplit, OverviewDoc,
    ScoreboardDoc, SeasonStatsDoc, scoreboards_for_dates,
};
use crate::model::{
    Player, PlayerProfile, PlayerStat, RankingMetric, SeasonSummary, Tour, TournamentResult,
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use futures::future::join_all;
use tracing::debug;

const NO_RESULT: &str = "-";
/// Finished tournaments kept on the profile.
const RECENT_RESULTS_LIMIT: usize = 10;
/// Scoreboard windows scanned when the overview carries no recent history.
const LOOKBACK_WEEKS: usize = 8;
/// Seasons of per-year statistics fetched for the history list.
const SEASON_HISTORY_YEARS: i32 = 4;

/// Builds a player profile from the athlete overview document. Season
/// history is fetched separately and starts empty here.
#[must_use]
pub fn normalize_player_profile(
    doc: &OverviewDoc,
    tour: Tour,
    player_id: &str,
    player_name: Option<&str>,
) -> PlayerProfile {
    let rankings = normalize_rankings(doc);
    let split = doc
        .statistics
        .as_ref()
        .and_then(|stats| tour_split(stats, tour));

    let label = |name: &str| {
        doc.statistics
            .as_ref()
            .zip(split)
            .and_then(|(stats, split)| stat_value(stats, split, name))
    };
    let label_int = |name: &str| label(name).and_then(|value| value.parse::<i32>().ok());

    let earnings = find_ranking(&rankings, "amount")
        .or_else(|| find_ranking(&rankings, "earnings"))
        .map(|ranking| ranking.display_value.clone())
        .or_else(|| label("EARNINGS"));

    let scoring_avg = label("AVG").map(|value| PlayerStat { value, rank: None });

    PlayerProfile {
        player: Player {
            id: player_id.to_string(),
            name: player_name.unwrap_or("Unknown").to_string(),
            first_name: None,
            last_name: None,
            country: None,
            amateur: None,
            image_url: None,
        },
        earnings,
        wins: label_int("WINS"),
        top_tens: label_int("TOP10"),
        cuts_made: label_int("CUTS"),
        events: label_int("EVENTS"),
        scoring_avg,
        driving_distance: make_stat(&rankings, "yds/drv"),
        driving_accuracy: make_stat(&rankings, "drv acc"),
        greens_in_reg: make_stat(&rankings, "greenshit"),
        putts_per_gir: make_stat(&rankings, "pp gir"),
        birdies_per_round: make_stat(&rankings, "bird/rnd"),
        sand_saves: make_stat(&rankings, "saves"),
        recent_results: recent_results_from_overview(doc),
        rankings,
        season_history: Vec::new(),
    }
}

/// Flattens the overview's recent-tournament blocks, newest first.
fn recent_results_from_overview(doc: &OverviewDoc) -> Vec<TournamentResult> {
    let mut results: Vec<TournamentResult> = doc
        .recent_tournaments
        .iter()
        .flat_map(|block| block.events_stats.iter())
        .map(|event| {
            let competitor = event
                .competitions
                .first()
                .and_then(|comp| comp.competitors.first());
            let status = competitor.and_then(|c| c.status.as_ref());
            TournamentResult {
                tournament_id: event.id.clone(),
                tournament_name: event
                    .short_name
                    .clone()
                    .unwrap_or_else(|| event.name.clone()),
                date: event.date.clone(),
                position: status
                    .and_then(|s| s.position.as_ref())
                    .and_then(|p| p.display_name.clone())
                    .or_else(|| status.and_then(|s| s.display_value.clone()))
                    .unwrap_or_else(|| NO_RESULT.to_string()),
                score: competitor
                    .and_then(|c| c.score.as_ref())
                    .and_then(|score| score.display_value.clone())
                    .unwrap_or_else(|| NO_RESULT.to_string()),
            }
        })
        .collect();
    sort_newest_first(&mut results);
    results.truncate(RECENT_RESULTS_LIMIT);
    results
}

/// Extracts a player's results from a batch of weekly scoreboard windows,
/// newest first. Duplicate windows covering the same event collapse to one
/// result.
#[must_use]
pub fn recent_results_from_scoreboards(
    docs: &[ScoreboardDoc],
    player_id: &str,
) -> Vec<TournamentResult> {
    let mut results: Vec<TournamentResult> = Vec::new();
    for event in docs.iter().flat_map(|doc| doc.events.iter()) {
        if results.iter().any(|r| r.tournament_id == event.id) {
            continue;
        }
        let Some(competition) = event.competitions.first() else {
            continue;
        };
        let Some(comp) = competition.competitors.iter().find(|comp| {
            comp.id == player_id
                || comp
                    .athlete
                    .as_ref()
                    .and_then(|a| a.id.as_deref())
                    .is_some_and(|id| id == player_id)
        }) else {
            continue;
        };

        let status = comp.status.as_ref();
        results.push(TournamentResult {
            tournament_id: event.id.clone(),
            tournament_name: event
                .short_name
                .clone()
                .unwrap_or_else(|| event.name.clone()),
            date: event.date.clone(),
            position: status
                .and_then(|s| s.position.as_ref())
                .and_then(|p| p.display_name.clone())
                .or_else(|| status.and_then(|s| s.display_value.clone()))
                .or_else(|| comp.order.map(|order| order.to_string()))
                .unwrap_or_else(|| NO_RESULT.to_string()),
            score: comp
                .score
                .as_ref()
                .map(|score| match score {
                    EspnScore::Text(text) => text.clone(),
                    EspnScore::Num(n) => format_score(*n as i32),
                })
                .unwrap_or_else(|| NO_RESULT.to_string()),
        });
    }
    sort_newest_first(&mut results);
    results
}

/// One season's headline numbers from the per-season statistics document.
/// Seasons without a single start yield `None`.
#[must_use]
pub fn normalize_season_summary(doc: &SeasonStatsDoc, year: i32) -> Option<SeasonSummary> {
    let general = doc
        .splits
        .as_ref()?
        .categories
        .iter()
        .find(|category| category.name == "general")?;

    let stat = |name: &str| general.stats.iter().find(|stat| stat.name == name);
    let stat_int = |name: &str| stat(name).map_or(0, season_stat_int);

    let events = stat_int("tournamentsPlayed");
    if events == 0 {
        return None;
    }
    Some(SeasonSummary {
        year,
        events,
        wins: stat_int("wins"),
        top_tens: stat_int("topTenFinishes"),
        cuts_made: stat_int("cutsMade"),
        earnings: stat("amount").and_then(|s| s.display_value.clone()),
        scoring_avg: stat("scoringAverage").and_then(|s| s.display_value.clone()),
    })
}

/// Weekly date keys stepping back from `today`, `today` included.
#[must_use]
pub fn lookback_week_keys(today: NaiveDate, weeks: usize) -> Vec<String> {
    (0..=weeks)
        .map(|week| {
            (today - Duration::days(7 * week as i64))
                .format("%Y%m%d")
                .to_string()
        })
        .collect()
}

/// Fetches a player's recent results by scanning the last few weekly
/// scoreboard windows. Failed windows are skipped, not fatal.
pub async fn load_recent_results(
    api: &dyn EspnApiClient,
    tour: Tour,
    player_id: &str,
) -> Vec<TournamentResult> {
    let dates = lookback_week_keys(Utc::now().date_naive(), LOOKBACK_WEEKS);
    let docs = scoreboards_for_dates(api, tour, &dates).await;
    recent_results_from_scoreboards(&docs, player_id)
}

/// Fetches per-season statistics for the last few seasons in parallel.
/// Seasons the upstream has nothing for are dropped.
pub async fn load_season_history(
    api: &dyn EspnApiClient,
    tour: Tour,
    player_id: &str,
    latest_year: i32,
) -> Vec<SeasonSummary> {
    let lookups = (0..SEASON_HISTORY_YEARS).map(|offset| {
        let year = latest_year - offset;
        async move { (year, api.season_stats(tour, year, player_id).await) }
    });
    let mut history: Vec<SeasonSummary> = join_all(lookups)
        .await
        .into_iter()
        .filter_map(|(year, result)| match result {
            Ok(doc) => normalize_season_summary(&doc, year),
            Err(err) => {
                debug!(%err, year, "season statistics unavailable");
                None
            }
        })
        .collect();
    history.sort_by_key(|summary| std::cmp::Reverse(summary.year));
    history
}

/// Fetches and assembles the full player profile: overview, recent results
/// (falling back to the weekly scoreboard scan when the overview has none),
/// and season history.
pub async fn load_player_profile(
    api: &dyn EspnApiClient,
    tour: Tour,
    player_id: &str,
    player_name: Option<&str>,
) -> Result<PlayerProfile, Error> {
    let doc = api.player_overview(tour, player_id).await?;
    let mut profile = normalize_player_profile(&doc, tour, player_id, player_name);
    if profile.recent_results.is_empty() {
        profile.recent_results = load_recent_results(api, tour, player_id).await;
    }
    profile.season_history =
        load_season_history(api, tour, player_id, Utc::now().date_naive().year()).await;
    Ok(profile)
}

fn normalize_rankings(doc: &OverviewDoc) -> Vec<RankingMetric> {
    doc.season_rankings
        .as_ref()
        .map(|rankings| {
            rankings
                .categories
                .iter()
                .filter_map(|category| {
                    Some(RankingMetric {
                        name: category.name.clone(),
                        display_name: category.display_name.clone(),
                        abbreviation: category.abbreviation.clone().unwrap_or_default(),
                        display_value: category.display_value.clone()?,
                        rank: category.rank,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn find_ranking<'a>(rankings: &'a [RankingMetric], key: &str) -> Option<&'a RankingMetric> {
    let key = key.to_lowercase();
    rankings.iter().find(|ranking| {
        ranking.name.to_lowercase().contains(&key)
            || ranking.abbreviation.to_lowercase().contains(&key)
    })
}

fn make_stat(rankings: &[RankingMetric], abbreviation: &str) -> Option<PlayerStat> {
    find_ranking(rankings, abbreviation).map(|ranking| PlayerStat {
        value: ranking.display_value.clone(),
        rank: ranking.rank,
    })
}

/// The split whose name carries the tour's statistics name; the overview
/// mixes tour and non-member splits.
fn tour_split<'a>(stats: &'a EspnOverviewStats, tour: Tour) -> Option<&'a EspnStatsSplit> {
    stats.splits.iter().find(|split| {
        split
            .display_name
            .as_deref()
            .is_some_and(|name| name.to_uppercase().contains(tour.stats_name()))
    })
}

/// Column lookup: `labels[i]` names `stats[i]` within a split.
fn stat_value(stats: &EspnOverviewStats, split: &EspnStatsSplit, label: &str) -> Option<String> {
    let index = stats.labels.iter().position(|l| l == label)?;
    split.stats.get(index).cloned()
}

fn season_stat_int(stat: &EspnSeasonStat) -> i32 {
    stat.value.map_or_else(
        || {
            stat.display_value
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or(0)
        },
        |value| value as i32,
    )
}

// ISO 8601 dates order lexicographically.
fn sort_newest_first(results: &mut [TournamentResult]) {
    results.sort_by(|a, b| b.date.cmp(&a.date));
}
