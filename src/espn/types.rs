use crate::score::parse_score;
use serde::Deserialize;

// Tolerant decode of the upstream scoreboard document. Every field the
// upstream sometimes omits is Option or defaulted; business logic downstream
// never branches on upstream shape again.

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScoreboardDoc {
    #[serde(default)]
    pub events: Vec<EspnEvent>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnEvent {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub date: String,
    pub end_date: Option<String>,
    pub competitions: Vec<EspnCompetition>,
    pub status: Option<EspnEventStatus>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnEventStatus {
    #[serde(rename = "type")]
    pub kind: Option<EspnStatusType>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnStatusType {
    pub state: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnCompetition {
    pub id: String,
    pub purse: Option<f64>,
    pub venue: Option<EspnVenue>,
    pub status: Option<EspnCompetitionStatus>,
    pub competitors: Vec<EspnCompetitor>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnVenue {
    pub full_name: Option<String>,
    pub address: Option<EspnAddress>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnAddress {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnCompetitionStatus {
    pub period: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnCompetitor {
    pub id: String,
    pub order: Option<i32>,
    pub athlete: Option<EspnAthlete>,
    pub status: Option<EspnCompetitorStatus>,
    pub score: Option<EspnScore>,
    pub linescores: Vec<EspnLinescore>,
}

/// Upstream sends the total sometimes as a JSON number, sometimes as a
/// signed string, sometimes the literal "E".
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum EspnScore {
    Num(f64),
    Text(String),
}

impl EspnScore {
    #[must_use]
    pub fn to_par(&self) -> i32 {
        match self {
            EspnScore::Num(n) => *n as i32,
            EspnScore::Text(s) => parse_score(s),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnAthlete {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub short_name: Option<String>,
    pub flag: Option<EspnFlag>,
    pub amateur: Option<bool>,
    pub headshot: Option<EspnHeadshot>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnFlag {
    pub href: Option<String>,
    pub alt: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnHeadshot {
    pub href: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnCompetitorStatus {
    pub position: Option<EspnPosition>,
    pub thru: Option<i32>,
    pub display_value: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnPosition {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

/// One per-period line entry. `period` missing marks a placeholder row; the
/// nested `linescores` are per-hole rows and may be absent even for a round
/// with a valid total.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnLinescore {
    pub value: Option<f64>,
    pub display_value: Option<String>,
    pub period: Option<i32>,
    pub linescores: Vec<EspnHoleLinescore>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnHoleLinescore {
    pub period: Option<i32>,
    pub value: Option<f64>,
    pub score_type: Option<EspnScoreType>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnScoreType {
    pub display_value: Option<String>,
}

// Athlete overview document (profile endpoint). Same tolerance rules as the
// scoreboard: optional everywhere, defaults everywhere.

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewDoc {
    pub statistics: Option<EspnOverviewStats>,
    pub season_rankings: Option<EspnSeasonRankings>,
    pub recent_tournaments: Vec<EspnRecentTournament>,
}

/// Column-oriented stats block: `labels[i]` names `splits[_].stats[i]`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnOverviewStats {
    pub labels: Vec<String>,
    pub names: Vec<String>,
    pub splits: Vec<EspnStatsSplit>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnStatsSplit {
    pub display_name: Option<String>,
    pub stats: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnSeasonRankings {
    pub display_name: Option<String>,
    pub categories: Vec<EspnRankingCategory>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnRankingCategory {
    pub name: String,
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub value: Option<f64>,
    pub display_value: Option<String>,
    pub rank: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnRecentTournament {
    pub name: Option<String>,
    pub events_stats: Vec<EspnEventStat>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnEventStat {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub date: String,
    pub competitions: Vec<EspnEventStatCompetition>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnEventStatCompetition {
    pub competitors: Vec<EspnEventStatCompetitor>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnEventStatCompetitor {
    pub score: Option<EspnScoreDisplay>,
    pub status: Option<EspnCompetitorStatus>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnScoreDisplay {
    pub display_value: Option<String>,
}

// Tour-wide statistics document (stat categories with leaders).

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StatisticsDoc {
    pub stats: Option<EspnStatsBlock>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnStatsBlock {
    pub categories: Vec<EspnStatCategory>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnStatCategory {
    pub name: String,
    pub display_name: Option<String>,
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub leaders: Vec<EspnStatLeader>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnStatLeader {
    pub display_value: Option<String>,
    pub value: Option<f64>,
    pub athlete: Option<EspnLeaderAthlete>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnLeaderAthlete {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

// Per-season athlete statistics document (core API).

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SeasonStatsDoc {
    pub splits: Option<EspnSeasonSplits>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnSeasonSplits {
    pub categories: Vec<EspnSeasonCategory>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EspnSeasonCategory {
    pub name: String,
    pub stats: Vec<EspnSeasonStat>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EspnSeasonStat {
    pub name: String,
    pub value: Option<f64>,
    pub display_value: Option<String>,
}
