use serde::{Deserialize, Serialize};

/// One ranked golfer inside a stat category.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatLeader {
    pub rank: i32,
    pub player_id: String,
    pub player_name: String,
    pub value: f64,
    pub display_value: String,
}

/// One tour-wide stat category with its leaderboard.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatCategory {
    pub name: String,
    pub display_name: String,
    pub abbreviation: String,
    pub leaders: Vec<StatLeader>,
}
