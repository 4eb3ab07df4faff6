use super::Player;
use serde::{Deserialize, Serialize};

/// One stat value with its tour rank, when upstream ranks it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerStat {
    pub value: String,
    pub rank: Option<i32>,
}

/// One season-ranking category from the player overview.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RankingMetric {
    pub name: String,
    pub display_name: Option<String>,
    pub abbreviation: String,
    pub display_value: String,
    pub rank: Option<i32>,
}

/// One finished tournament from a player's recent history.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentResult {
    pub tournament_id: String,
    pub tournament_name: String,
    pub date: String,
    pub position: String,
    pub score: String,
}

/// One season's headline numbers. Only seasons with at least one start are
/// materialized.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SeasonSummary {
    pub year: i32,
    pub events: i32,
    pub wins: i32,
    pub top_tens: i32,
    pub cuts_made: i32,
    pub earnings: Option<String>,
    pub scoring_avg: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerProfile {
    pub player: Player,
    pub earnings: Option<String>,
    pub wins: Option<i32>,
    pub top_tens: Option<i32>,
    pub cuts_made: Option<i32>,
    pub events: Option<i32>,
    pub scoring_avg: Option<PlayerStat>,
    pub driving_distance: Option<PlayerStat>,
    pub driving_accuracy: Option<PlayerStat>,
    pub greens_in_reg: Option<PlayerStat>,
    pub putts_per_gir: Option<PlayerStat>,
    pub birdies_per_round: Option<PlayerStat>,
    pub sand_saves: Option<PlayerStat>,
    pub recent_results: Vec<TournamentResult>,
    pub rankings: Vec<RankingMetric>,
    pub season_history: Vec<SeasonSummary>,
}
