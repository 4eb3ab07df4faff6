use super::{Player, Tournament};
use serde::{Deserialize, Serialize};

/// Cut, withdrawn, and disqualified are all terminal for the event.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Cut,
    Wd,
    Dq,
}

/// One competitor's current standing.
///
/// `score`/`score_num` always encode the same signed value; during a playoff
/// the pair reflects regulation play only. `position` may carry upstream's
/// tie prefix ("T4") and is never recomputed from `position_num`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardEntry {
    pub player: Player,
    pub position: String,
    pub position_num: i32,
    pub score: String,
    pub score_num: i32,
    pub today: String,
    pub today_num: i32,
    pub thru: String,
    pub rounds: Vec<String>,
    pub status: EntryStatus,
    pub scorecard_available: bool,
    pub in_playoff: bool,
}

/// One leaderboard snapshot. Superseded wholesale by the next fetch, never
/// mutated in place. `round` is capped at 4; `is_playoff` carries the
/// beyond-regulation signal separately.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Leaderboard {
    pub tournament: Tournament,
    pub entries: Vec<LeaderboardEntry>,
    pub round: i32,
    pub is_playoff: bool,
    pub last_updated: String,
}
